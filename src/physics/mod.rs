//! Lattice physics
//!
//! This module holds everything that describes the gas on the lattice,
//! independently of how it is advanced in time:
//!
//! - **Velocity set** (`lattice`): the D1Q3 directions and weights
//! - **Lattice state** (`state`): populations and macroscopic fields
//! - **Equilibrium** (`equilibrium`): target populations for the collision
//!
//! # Architecture
//!
//! Physics is **separate from the time stepping**:
//! - the physics provides the equilibrium (what the gas relaxes towards)
//! - the solver applies collision, streaming and the macroscopic update
//!
//! # Example
//!
//! ```rust
//! use lbm_rs::physics::{equilibrium_distribution, LatticeState, PhysicalQuantity};
//!
//! let mut state = LatticeState::new(8);
//! state.set_field(PhysicalQuantity::BindingEnergy, &[0.0, 0.0, 0.2, 0.4, 0.4, 0.2, 0.0, 0.0]).unwrap();
//!
//! let f_eq = equilibrium_distribution(&state);
//! assert_eq!(f_eq.shape(), (3, 8));
//! ```

pub mod equilibrium;
pub mod lattice;
pub mod state;

pub use equilibrium::{equilibrium_distribution, equilibrium_population, shifted_velocity};
pub use lattice::{D1Q3, Direction};
pub use state::{LatticeState, PhysicalQuantity};
