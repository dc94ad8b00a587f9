//! Lattice Boltzmann time stepping
//!
//! This module advances a [`LatticeState`](crate::physics::LatticeState)
//! through discrete time steps.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Configuration** (`LatticeConfiguration`) - HOW to run
//!    - lattice size, number of steps, relaxation rate
//!    - spacing and time step
//!    - handling of non-physical densities
//!
//! 2. **Solver** (`LatticeBoltzmannSolver`) - the numerical scheme
//!    - owns the lattice state
//!    - applies collision, streaming and the macroscopic update
//!
//! 3. **Output** (`Snapshot`, `SimulationResult`) - what a run produced
//!
//! # Module Organization
//!
//! - **`config`**: `LatticeConfiguration`, `DensityPolicy`
//! - **`lbm`**: `LatticeBoltzmannSolver` and its stages
//! - **`evolution`**: `Evolution`, the per-step iterator
//! - **`result`**: `Snapshot`, `SimulationResult`
//!
//! # Workflow Diagram
//!
//! ```text
//!        ┌──────────────────────────┐
//!        │ Equilibrium (rho, u, ε)  │ ◄───────────────┐
//!        └────────────┬─────────────┘                 │
//!                     │ f_eq                          │
//!        ┌────────────▼─────────────┐                 │
//!        │ Collision (BGK, omega)   │                 │
//!        └────────────┬─────────────┘                 │
//!                     │ f                             │
//!        ┌────────────▼─────────────┐                 │
//!        │ Streaming (±1 shift)     │                 │
//!        └────────────┬─────────────┘                 │
//!                     │ f                             │
//!        ┌────────────▼─────────────┐   rho, u        │
//!        │ Macroscopic update       │ ────────────────┘
//!        └──────────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use lbm_rs::solver::{LatticeBoltzmannSolver, LatticeConfiguration};
//!
//! let config = LatticeConfiguration::new(10, 5, 1.0);
//! let mut solver = LatticeBoltzmannSolver::with_configuration(config)?;
//!
//! let result = solver.run()?;
//! println!("{} snapshots, final mass {}", result.len(), result.final_snapshot.total_mass());
//! # Ok::<(), lbm_rs::LbmError>(())
//! ```
//!
//! # Error Handling
//!
//! Stepping returns `Result<_, LbmError>`:
//!
//! ```rust
//! use lbm_rs::{LbmError, solver::LatticeBoltzmannSolver};
//!
//! // omega = 0 never fills the zero-initialised populations
//! let mut solver = LatticeBoltzmannSolver::new(4, 10, 0.0)?;
//! match solver.evolve() {
//!     Ok(()) => println!("done"),
//!     Err(LbmError::NonPhysicalState { step, site, .. }) => {
//!         eprintln!("density vanished at site {} on step {}", site, step);
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok::<(), LbmError>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod config;
mod evolution;
mod lbm;
mod result;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use config::{DensityPolicy, LatticeConfiguration};
pub use evolution::Evolution;
pub use lbm::LatticeBoltzmannSolver;
pub use result::{SimulationResult, Snapshot};
