//! Lattice state and field identifiers
//!
//! This module defines the data the solver mutates every step:
//! - `PhysicalQuantity`: type-safe identifiers for the lattice fields
//! - `LatticeState`: owned container for populations and macroscopic fields

use crate::error::{LbmError, Result};
use crate::physics::lattice::D1Q3;
use nalgebra::{DMatrix, DVector};
use std::fmt;

// =================================================================================================
// Physical quantities (Type-safe Identifiers)
// =================================================================================================

/// Fields carried by the lattice
///
/// Used to address a field without strings, and to name it in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Distribution functions f (3 x nx)
    Distributions,

    /// Mass density rho
    Density,

    /// Macroscopic velocity u
    Velocity,

    /// Site binding energy epsilon
    BindingEnergy,
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhysicalQuantity::Distributions => "distributions",
            PhysicalQuantity::Density => "density",
            PhysicalQuantity::Velocity => "velocity",
            PhysicalQuantity::BindingEnergy => "binding energy",
        };
        write!(f, "{}", name)
    }
}

// =================================================================================================
// Lattice State
// =================================================================================================

/// State of a 1D lattice
///
/// # Layout
///
/// - `f`: one row per D1Q3 direction, one column per site
/// - `rho`, `u`, `epsilon`: one entry per site
///
/// A fresh state has `f = 0`, `rho = 1`, `u = 0` and `epsilon = 0`.
///
/// # Example
/// ```
/// use lbm_rs::physics::{LatticeState, PhysicalQuantity};
///
/// let mut state = LatticeState::new(4);
/// state.set_field(PhysicalQuantity::BindingEnergy, &[0.0, 0.1, 0.1, 0.0]).unwrap();
///
/// assert_eq!(state.sites(), 4);
/// assert_eq!(state.total_mass(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeState {
    pub(crate) f: DMatrix<f64>,
    pub(crate) rho: DVector<f64>,
    pub(crate) u: DVector<f64>,
    pub(crate) epsilon: DVector<f64>,
}

impl LatticeState {
    /// Create the default state for `nx` sites
    pub fn new(nx: usize) -> Self {
        Self {
            f: DMatrix::zeros(D1Q3::Q, nx),
            rho: DVector::from_element(nx, 1.0),
            u: DVector::zeros(nx),
            epsilon: DVector::zeros(nx),
        }
    }

    /// Number of lattice sites
    pub fn sites(&self) -> usize {
        self.rho.len()
    }

    /// Distribution functions (3 x nx)
    pub fn distributions(&self) -> &DMatrix<f64> {
        &self.f
    }

    /// Density per site
    pub fn density(&self) -> &DVector<f64> {
        &self.rho
    }

    /// Velocity per site
    pub fn velocity(&self) -> &DVector<f64> {
        &self.u
    }

    /// Binding energy per site
    pub fn binding_energy(&self) -> &DVector<f64> {
        &self.epsilon
    }

    /// Get a per-site field by identifier
    ///
    /// Returns `None` for [`PhysicalQuantity::Distributions`], which is not a
    /// vector; use [`LatticeState::distributions`] instead.
    pub fn get(&self, quantity: PhysicalQuantity) -> Option<&DVector<f64>> {
        match quantity {
            PhysicalQuantity::Density => Some(&self.rho),
            PhysicalQuantity::Velocity => Some(&self.u),
            PhysicalQuantity::BindingEnergy => Some(&self.epsilon),
            PhysicalQuantity::Distributions => None,
        }
    }

    /// Overwrite a per-site field
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `values` does not have one entry per site, or if
    /// `quantity` is [`PhysicalQuantity::Distributions`] (use
    /// [`LatticeState::set_distributions`]).
    pub fn set_field(&mut self, quantity: PhysicalQuantity, values: &[f64]) -> Result<()> {
        let nx = self.sites();
        let target = match quantity {
            PhysicalQuantity::Density => &mut self.rho,
            PhysicalQuantity::Velocity => &mut self.u,
            PhysicalQuantity::BindingEnergy => &mut self.epsilon,
            PhysicalQuantity::Distributions => {
                return Err(LbmError::DimensionMismatch {
                    quantity,
                    expected: D1Q3::Q * nx,
                    found: values.len(),
                });
            }
        };

        if values.len() != nx {
            return Err(LbmError::DimensionMismatch {
                quantity,
                expected: nx,
                found: values.len(),
            });
        }

        target.copy_from_slice(values);
        Ok(())
    }

    /// Overwrite the distribution functions
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless `f` is 3 x nx. `expected`/`found` count
    /// matrix entries.
    pub fn set_distributions(&mut self, f: DMatrix<f64>) -> Result<()> {
        if f.nrows() != D1Q3::Q || f.ncols() != self.sites() {
            return Err(LbmError::DimensionMismatch {
                quantity: PhysicalQuantity::Distributions,
                expected: D1Q3::Q * self.sites(),
                found: f.len(),
            });
        }

        self.f = f;
        Ok(())
    }

    /// Sum of the density field
    pub fn total_mass(&self) -> f64 {
        self.rho.sum()
    }

    /// Sum of rho * u over the lattice
    pub fn total_momentum(&self) -> f64 {
        self.rho.dot(&self.u)
    }

    /// Sum of every population, equal to `total_mass()` right after a
    /// macroscopic update
    pub fn population_mass(&self) -> f64 {
        self.f.sum()
    }

    /// First site whose density is zero, negative or non-finite
    pub fn first_non_physical_site(&self) -> Option<(usize, f64)> {
        self.rho
            .iter()
            .enumerate()
            .find(|(_, rho)| !rho.is_finite() || **rho <= 0.0)
            .map(|(site, rho)| (site, *rho))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
