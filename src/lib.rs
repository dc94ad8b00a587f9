//! lbm-rs: One-dimensional Lattice Boltzmann Solver
//!
//! A compact D1Q3 lattice Boltzmann solver for 1D gas transport, with a
//! site-dependent binding energy that weights the equilibrium distribution
//! by `exp(epsilon)`.
//!
//! # Architecture
//!
//! lbm-rs separates the lattice physics from the time stepping:
//!
//! 1. **Physics** ([`physics`])
//!    - D1Q3 velocity set and weights
//!    - lattice state (populations, density, velocity, binding energy)
//!    - equilibrium distribution
//!
//! 2. **Solver** ([`solver`])
//!    - BGK collision, streaming, macroscopic update
//!    - time stepping, per-step iteration, recorded runs
//!
//! # Quick Start
//!
//! ```rust
//! use lbm_rs::prelude::*;
//!
//! # fn main() -> Result<(), LbmError> {
//! // 1. Create a lattice of 10 sites, 5 steps, omega = 1
//! let mut solver = LatticeBoltzmannSolver::new(10, 5, 1.0)?;
//!
//! // 2. Binding energy well in the middle of the domain
//! solver.set_epsilon(&[0.0, 0.0, 0.0, 0.2, 0.5, 0.5, 0.2, 0.0, 0.0, 0.0])?;
//!
//! // 3. Run
//! solver.evolve()?;
//!
//! // 4. Read the macroscopic fields
//! println!("density: {:?}", solver.density().as_slice());
//! println!("velocity: {:?}", solver.velocity().as_slice());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: lattice, state, equilibrium
//! - [`solver`]: configuration and time stepping
//! - [`error`]: error taxonomy

pub mod error;
pub mod physics;
pub mod solver;

pub use error::{LbmError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use lbm_rs::prelude::*;
    //! ```
    pub use crate::error::LbmError;
    pub use crate::physics::{D1Q3, Direction, LatticeState, PhysicalQuantity};
    pub use crate::solver::{
        DensityPolicy, Evolution, LatticeBoltzmannSolver, LatticeConfiguration, SimulationResult,
        Snapshot,
    };
}
