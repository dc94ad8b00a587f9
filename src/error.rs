//! Solver error types
//!
//! Every fallible operation of the crate returns [`Result<T>`], an alias over
//! [`LbmError`]. The three variants cover the failure modes of the lattice:
//!
//! - a field handed to a setter does not match the lattice size,
//! - the macroscopic update meets a density that cannot divide the momentum,
//! - the construction parameters are out of their valid domain.

use crate::physics::PhysicalQuantity;
use thiserror::Error;

/// Errors raised by the lattice solver
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LbmError {
    /// A field does not have the length (or shape) of the lattice
    #[error("{quantity} has {found} entries, lattice expects {expected}")]
    DimensionMismatch {
        quantity: PhysicalQuantity,
        expected: usize,
        found: usize,
    },

    /// Density reached zero, a negative value or a non-finite value
    #[error(
        "non-physical density {density} at site {site} (step {step}); \
         velocity is undefined there"
    )]
    NonPhysicalState {
        step: usize,
        site: usize,
        density: f64,
    },

    /// Invalid construction parameter
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LbmError>;
