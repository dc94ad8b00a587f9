//! Solver configuration
//!
//! # Design
//!
//! `LatticeConfiguration` gathers every construction parameter of the solver.
//! It is a plain value: build it, adjust it with the `with_*` methods, and let
//! the solver call [`LatticeConfiguration::validate`] on construction.

use crate::error::{LbmError, Result};

// =================================================================================================
// Density Policy
// =================================================================================================

/// What the macroscopic update does when a density cannot divide the momentum
///
/// A site with zero, negative or non-finite density has no defined velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DensityPolicy {
    /// Stop with `LbmError::NonPhysicalState`
    #[default]
    Strict,

    /// Keep going; NaN and infinities flow into later steps
    Propagate,
}

impl DensityPolicy {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            DensityPolicy::Strict => "Strict",
            DensityPolicy::Propagate => "Propagate",
        }
    }
}

// =================================================================================================
// Lattice configuration
// =================================================================================================

/// Construction parameters of a lattice solver
///
/// | Parameter | Meaning | Valid range |
/// |-----------|---------|-------------|
/// | `nx` | number of lattice sites | `>= 1` |
/// | `nt` | steps run by `evolve()` | any |
/// | `omega` | BGK relaxation rate | `[0, 2]` |
/// | `dx` | lattice spacing (inert) | `> 0` |
/// | `dt` | time step, labels snapshot times | `> 0` |
///
/// # Examples
///
/// ```rust
/// use lbm_rs::solver::{DensityPolicy, LatticeConfiguration};
///
/// let config = LatticeConfiguration::new(100, 500, 1.2)
///     .with_spacing(0.01, 0.001)
///     .with_density_policy(DensityPolicy::Propagate);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeConfiguration {
    /// Number of lattice sites
    pub nx: usize,

    /// Number of time steps run by `evolve()`
    pub nt: usize,

    /// Relaxation rate
    pub omega: f64,

    /// Lattice spacing, not used by the dynamics
    pub dx: f64,

    /// Time step size
    pub dt: f64,

    /// Handling of non-physical densities
    pub density_policy: DensityPolicy,
}

impl LatticeConfiguration {
    /// Create a configuration with unit spacing and the strict density policy
    pub fn new(nx: usize, nt: usize, omega: f64) -> Self {
        Self {
            nx,
            nt,
            omega,
            dx: 1.0,
            dt: 1.0,
            density_policy: DensityPolicy::default(),
        }
    }

    /// Builder pattern: set lattice spacing and time step
    pub fn with_spacing(mut self, dx: f64, dt: f64) -> Self {
        self.dx = dx;
        self.dt = dt;
        self
    }

    /// Builder pattern: set the number of steps
    pub fn with_steps(mut self, nt: usize) -> Self {
        self.nt = nt;
        self
    }

    /// Builder pattern: set the density policy
    pub fn with_density_policy(mut self, policy: DensityPolicy) -> Self {
        self.density_policy = policy;
        self
    }

    /// Validate that parameters are usable
    ///
    /// `omega` is accepted on the closed interval `[0, 2]`: `0` freezes the
    /// populations and `2` is the over-relaxation limit. Both are legal but
    /// logged as marginal by the solver.
    pub fn validate(&self) -> Result<()> {
        if self.nx == 0 {
            return Err(LbmError::Configuration(
                "lattice needs at least one site (nx = 0)".to_string(),
            ));
        }
        if !self.omega.is_finite() || !(0.0..=2.0).contains(&self.omega) {
            return Err(LbmError::Configuration(format!(
                "omega must lie in [0, 2], got {}",
                self.omega
            )));
        }
        if !self.dx.is_finite() || self.dx <= 0.0 {
            return Err(LbmError::Configuration(format!(
                "dx must be positive, got {}",
                self.dx
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(LbmError::Configuration(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        Ok(())
    }

    /// Relaxation rate on the edge of the stable interval
    pub fn is_marginal(&self) -> bool {
        self.omega == 0.0 || self.omega == 2.0
    }
}

// =================================================================================================
// Tests
// =================================================================================================
