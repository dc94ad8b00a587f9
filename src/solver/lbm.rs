//! D1Q3 BGK lattice Boltzmann solver
//!
//! # Algorithm
//!
//! Every step runs three stages in a fixed order:
//!
//! ```text
//! 1. collision   f  <- (1 - omega) f + omega f_eq(rho, u, epsilon)
//! 2. streaming   f[+1] shifted right, f[-1] shifted left, f[0] untouched
//! 3. update      rho <- sum_d f[d],  u <- (f[+1] - f[-1]) / rho
//! ```
//!
//! The equilibrium is recomputed from the current macroscopic fields on every
//! collision; nothing is cached between steps.
//!
//! # Boundaries
//!
//! Streaming does not wrap around. The inflow edge of each moving population
//! (site 0 for +1, site nx-1 for -1) gets nothing from outside the domain and
//! keeps its value.
//!
//! # Example
//!
//! ```rust
//! use lbm_rs::solver::LatticeBoltzmannSolver;
//!
//! let mut solver = LatticeBoltzmannSolver::new(10, 5, 1.0)?;
//! solver.set_epsilon(&[0.0, 0.0, 0.0, 0.1, 0.2, 0.2, 0.1, 0.0, 0.0, 0.0])?;
//! solver.evolve()?;
//!
//! assert_eq!(solver.steps_taken(), 5);
//! # Ok::<(), lbm_rs::LbmError>(())
//! ```

use crate::error::{LbmError, Result};
use crate::physics::{self, Direction, LatticeState, PhysicalQuantity};
use crate::solver::config::{DensityPolicy, LatticeConfiguration};
use crate::solver::evolution::Evolution;
use crate::solver::result::{SimulationResult, Snapshot};
use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector};

/// Name reported in logs and result metadata
const SOLVER_NAME: &str = "D1Q3 BGK";

// =================================================================================================
// Lattice Boltzmann Solver
// =================================================================================================

/// Stateful 1D lattice Boltzmann solver
///
/// Owns its configuration and lattice state exclusively. Independent runs use
/// independent solvers.
#[derive(Debug, Clone)]
pub struct LatticeBoltzmannSolver {
    config: LatticeConfiguration,
    state: LatticeState,
    steps_taken: usize,
}

impl LatticeBoltzmannSolver {
    /// Create a solver with unit spacing (`dx = dt = 1`)
    ///
    /// # Errors
    ///
    /// `LbmError::Configuration` if `nx == 0` or `omega` is outside `[0, 2]`.
    pub fn new(nx: usize, nt: usize, omega: f64) -> Result<Self> {
        Self::with_configuration(LatticeConfiguration::new(nx, nt, omega))
    }

    /// Create a solver from a full configuration
    pub fn with_configuration(config: LatticeConfiguration) -> Result<Self> {
        config.validate()?;

        if config.is_marginal() {
            warn!(
                "{}: omega = {} sits on the edge of the stable range",
                SOLVER_NAME, config.omega
            );
        }
        debug!(
            "{}: nx = {}, nt = {}, omega = {}, dx = {}, dt = {}, density policy = {}",
            SOLVER_NAME,
            config.nx,
            config.nt,
            config.omega,
            config.dx,
            config.dt,
            config.density_policy.name()
        );

        Ok(Self {
            state: LatticeState::new(config.nx),
            config,
            steps_taken: 0,
        })
    }

    // ======================================== Accessors =========================================

    /// Construction parameters
    pub fn configuration(&self) -> &LatticeConfiguration {
        &self.config
    }

    /// Current lattice state
    pub fn state(&self) -> &LatticeState {
        &self.state
    }

    /// Number of lattice sites
    pub fn sites(&self) -> usize {
        self.config.nx
    }

    /// Steps completed since construction
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Distribution functions (3 x nx)
    pub fn distributions(&self) -> &DMatrix<f64> {
        self.state.distributions()
    }

    /// Density per site
    pub fn density(&self) -> &DVector<f64> {
        self.state.density()
    }

    /// Velocity per site
    pub fn velocity(&self) -> &DVector<f64> {
        self.state.velocity()
    }

    /// Binding energy per site
    pub fn binding_energy(&self) -> &DVector<f64> {
        self.state.binding_energy()
    }

    /// Sum of the density field
    pub fn total_mass(&self) -> f64 {
        self.state.total_mass()
    }

    /// Sum of rho * u
    pub fn total_momentum(&self) -> f64 {
        self.state.total_momentum()
    }

    // ==================================== Initial conditions ====================================

    /// Set the binding energy of every site
    ///
    /// # Errors
    ///
    /// `LbmError::DimensionMismatch` if `epsilon.len() != nx`; the previous
    /// field is kept.
    pub fn set_epsilon(&mut self, epsilon: &[f64]) -> Result<()> {
        self.state.set_field(PhysicalQuantity::BindingEnergy, epsilon)
    }

    /// Set the density of every site
    pub fn set_density(&mut self, rho: &[f64]) -> Result<()> {
        self.state.set_field(PhysicalQuantity::Density, rho)
    }

    /// Set the velocity of every site
    pub fn set_velocity(&mut self, u: &[f64]) -> Result<()> {
        self.state.set_field(PhysicalQuantity::Velocity, u)
    }

    /// Replace the distribution functions (must be 3 x nx)
    pub fn set_distributions(&mut self, f: DMatrix<f64>) -> Result<()> {
        self.state.set_distributions(f)
    }

    /// Set `f` to the equilibrium of the current `rho`, `u` and `epsilon`
    pub fn initialize_equilibrium(&mut self) {
        self.state.f = self.equilibrium_distribution();
    }

    // ========================================== Stages ==========================================

    /// Equilibrium distribution of the current macroscopic fields
    ///
    /// Does not touch the state.
    pub fn equilibrium_distribution(&self) -> DMatrix<f64> {
        physics::equilibrium_distribution(&self.state)
    }

    /// BGK collision: relax `f` towards a freshly computed equilibrium
    pub fn collision(&mut self) {
        let omega = self.config.omega;
        let f_eq = self.equilibrium_distribution();

        // Same 3 x nx shape, same storage order
        for (f, eq) in self.state.f.iter_mut().zip(f_eq.iter()) {
            *f = (1.0 - omega) * *f + omega * eq;
        }
    }

    /// Streaming: shift the moving populations by one site
    ///
    /// The copies run in place, ascending for +1 and descending for -1, each
    /// reading the neighbour as the loop left it. `f[+1, 0]` and
    /// `f[-1, nx-1]` receive no inflow.
    pub fn streaming(&mut self) {
        let nx = self.sites();
        let f = &mut self.state.f;

        let right = Direction::Right.index();
        for i in 1..nx {
            f[(right, i)] = f[(right, i - 1)];
        }

        let left = Direction::Left.index();
        for i in (0..nx - 1).rev() {
            f[(left, i)] = f[(left, i + 1)];
        }
    }

    /// Recompute `rho` and `u` from `f`
    ///
    /// # Errors
    ///
    /// With [`DensityPolicy::Strict`], `LbmError::NonPhysicalState` for the
    /// first site whose density is zero, negative or non-finite. The fields
    /// are fully updated before the check, so the state shows the failure.
    pub fn update_density_velocity(&mut self) -> Result<()> {
        let nx = self.sites();
        let rest = Direction::Rest.index();
        let right = Direction::Right.index();
        let left = Direction::Left.index();

        for i in 0..nx {
            let f_rest = self.state.f[(rest, i)];
            let f_right = self.state.f[(right, i)];
            let f_left = self.state.f[(left, i)];

            let rho = f_rest + f_right + f_left;
            self.state.rho[i] = rho;
            self.state.u[i] = (f_right - f_left) / rho;
        }

        if let Some((site, density)) = self.state.first_non_physical_site() {
            match self.config.density_policy {
                DensityPolicy::Strict => {
                    return Err(LbmError::NonPhysicalState {
                        step: self.steps_taken,
                        site,
                        density,
                    });
                }
                DensityPolicy::Propagate => {
                    warn!(
                        "{}: density {} at site {} (step {}), velocity undefined",
                        SOLVER_NAME, density, site, self.steps_taken
                    );
                }
            }
        }

        Ok(())
    }

    // ======================================= Time stepping ======================================

    /// One full step: collision, streaming, macroscopic update
    ///
    /// The step counter advances before the update, so an error names the
    /// step that produced it.
    pub fn step(&mut self) -> Result<()> {
        self.collision();
        self.streaming();
        self.steps_taken += 1;
        self.update_density_velocity()?;

        trace!(
            "{}: step {} total mass {}",
            SOLVER_NAME,
            self.steps_taken,
            self.state.total_mass()
        );
        Ok(())
    }

    /// Run the configured `nt` steps
    pub fn evolve(&mut self) -> Result<()> {
        self.evolve_steps(self.config.nt)
    }

    /// Run `steps` steps, ignoring the configured `nt`
    pub fn evolve_steps(&mut self, steps: usize) -> Result<()> {
        debug!(
            "{}: evolving {} steps from step {}",
            SOLVER_NAME, steps, self.steps_taken
        );

        for _ in 0..steps {
            self.step()?;
        }

        debug!(
            "{}: reached step {}, total mass {}",
            SOLVER_NAME,
            self.steps_taken,
            self.state.total_mass()
        );
        Ok(())
    }

    // ========================================= Recording ========================================

    /// Macroscopic fields at the current step
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.steps_taken, self.config.dt)
    }

    /// Iterate over the configured `nt` steps, one snapshot per step
    ///
    /// # Example
    ///
    /// ```rust
    /// use lbm_rs::solver::LatticeBoltzmannSolver;
    ///
    /// let mut solver = LatticeBoltzmannSolver::new(8, 3, 1.0)?;
    /// let masses: Vec<f64> = solver
    ///     .snapshots()
    ///     .map(|snapshot| snapshot.map(|s| s.total_mass()))
    ///     .collect::<Result<_, _>>()?;
    ///
    /// assert_eq!(masses.len(), 3);
    /// # Ok::<(), lbm_rs::LbmError>(())
    /// ```
    pub fn snapshots(&mut self) -> Evolution<'_> {
        let steps = self.config.nt;
        Evolution::new(self, steps)
    }

    /// Iterate over `steps` steps, one snapshot per step
    pub fn snapshots_for(&mut self, steps: usize) -> Evolution<'_> {
        Evolution::new(self, steps)
    }

    /// Run the configured `nt` steps and record every snapshot
    ///
    /// The trajectory starts with the snapshot before the first step.
    pub fn run(&mut self) -> Result<SimulationResult> {
        let mut result = SimulationResult::new(self.snapshot());

        for snapshot in self.snapshots() {
            result.push(snapshot?);
        }

        result.add_metadata("solver", SOLVER_NAME);
        result.add_metadata("nx", &self.config.nx.to_string());
        result.add_metadata("time steps", &self.config.nt.to_string());
        result.add_metadata("omega", &self.config.omega.to_string());
        result.add_metadata("dx", &self.config.dx.to_string());
        result.add_metadata("dt", &self.config.dt.to_string());
        result.add_metadata("density policy", self.config.density_policy.name());

        Ok(result)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(nx: usize, offset: f64) -> Vec<f64> {
        (0..nx).map(|i| offset + i as f64).collect()
    }

    /// Solver whose three population rows hold distinct ramps
    fn solver_with_ramps(nx: usize, omega: f64) -> LatticeBoltzmannSolver {
        let mut solver = LatticeBoltzmannSolver::new(nx, 1, omega).unwrap();
        let mut f = DMatrix::zeros(3, nx);
        f.row_mut(0).copy_from_slice(&ramp(nx, 100.0));
        f.row_mut(1).copy_from_slice(&ramp(nx, 10.0));
        f.row_mut(2).copy_from_slice(&ramp(nx, 20.0));
        solver.set_distributions(f).unwrap();
        solver
    }

    // ====== Construction ======

    #[test]
    fn test_default_fields() {
        let solver = LatticeBoltzmannSolver::new(7, 3, 1.0).unwrap();

        assert_eq!(solver.sites(), 7);
        assert_eq!(solver.steps_taken(), 0);
        assert_eq!(solver.distributions().shape(), (3, 7));
        assert_eq!(solver.total_mass(), 7.0);
        assert_eq!(solver.total_momentum(), 0.0);
        assert!(solver.binding_energy().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            LatticeBoltzmannSolver::new(0, 3, 1.0),
            Err(LbmError::Configuration(_))
        ));
        assert!(matches!(
            LatticeBoltzmannSolver::new(5, 3, 2.5),
            Err(LbmError::Configuration(_))
        ));
    }

    // ====== Setters ======

    #[test]
    fn test_set_epsilon() {
        let mut solver = LatticeBoltzmannSolver::new(3, 1, 1.0).unwrap();
        solver.set_epsilon(&[0.1, 0.2, 0.3]).unwrap();

        assert_eq!(solver.binding_energy().as_slice(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_set_epsilon_wrong_length() {
        let mut solver = LatticeBoltzmannSolver::new(3, 1, 1.0).unwrap();
        let error = solver.set_epsilon(&[0.1, 0.2, 0.3, 0.4]).unwrap_err();

        assert_eq!(
            error,
            LbmError::DimensionMismatch {
                quantity: PhysicalQuantity::BindingEnergy,
                expected: 3,
                found: 4,
            }
        );
    }

    #[test]
    fn test_initialize_equilibrium() {
        let mut solver = LatticeBoltzmannSolver::new(4, 1, 1.0).unwrap();
        solver.set_velocity(&[0.0, 0.1, 0.2, 0.3]).unwrap();
        solver.initialize_equilibrium();

        assert_eq!(solver.distributions(), &solver.equilibrium_distribution());
    }

    // ====== Collision ======

    #[test]
    fn test_collision_full_relaxation() {
        let mut solver = solver_with_ramps(5, 1.0);
        solver.set_velocity(&[0.0, 0.05, 0.1, -0.05, 0.0]).unwrap();
        solver.set_epsilon(&[0.0, 0.2, 0.0, -0.1, 0.3]).unwrap();
        let f_eq = solver.equilibrium_distribution();

        solver.collision();

        assert_eq!(solver.distributions(), &f_eq);
    }

    #[test]
    fn test_collision_no_relaxation() {
        let mut solver = solver_with_ramps(5, 0.0);
        let before = solver.distributions().clone();

        solver.collision();

        assert_eq!(solver.distributions(), &before);
    }

    #[test]
    fn test_collision_partial_relaxation() {
        let omega = 0.6;
        let mut solver = solver_with_ramps(4, omega);
        let before = solver.distributions().clone();
        let f_eq = solver.equilibrium_distribution();

        solver.collision();

        for d in 0..3 {
            for i in 0..4 {
                let expected = (1.0 - omega) * before[(d, i)] + omega * f_eq[(d, i)];
                assert_relative_eq!(solver.distributions()[(d, i)], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_collision_leaves_macroscopic_fields() {
        let mut solver = solver_with_ramps(4, 1.0);
        let rho = solver.density().clone();

        solver.collision();

        assert_eq!(solver.density(), &rho);
    }

    // ====== Streaming ======

    #[test]
    fn test_streaming_inflow_edges_keep_values() {
        let mut solver = solver_with_ramps(5, 1.0);
        let before = solver.distributions().clone();

        solver.streaming();
        let after = solver.distributions();

        assert_eq!(after[(1, 0)], before[(1, 0)]);
        assert_eq!(after[(2, 4)], before[(2, 4)]);
        // First copy of each sweep reads an untouched neighbour
        assert_eq!(after[(1, 1)], before[(1, 0)]);
        assert_eq!(after[(2, 3)], before[(2, 4)]);
    }

    #[test]
    fn test_streaming_ordered_in_place() {
        let mut solver = solver_with_ramps(5, 1.0);
        let before = solver.distributions().clone();

        solver.streaming();
        let after = solver.distributions();

        // Ascending sweep carries the inflow value along the whole +1 row,
        // descending sweep does the same for the -1 row
        for i in 0..5 {
            assert_eq!(after[(1, i)], before[(1, 0)]);
            assert_eq!(after[(2, i)], before[(2, 4)]);
        }
    }

    #[test]
    fn test_streaming_rest_population_untouched() {
        let mut solver = solver_with_ramps(6, 1.0);
        let before = solver.distributions().row(0).clone_owned();

        solver.streaming();

        assert_eq!(solver.distributions().row(0), before);
    }

    #[test]
    fn test_streaming_single_site() {
        let mut solver = solver_with_ramps(1, 1.0);
        let before = solver.distributions().clone();

        solver.streaming();

        assert_eq!(solver.distributions(), &before);
    }

    #[test]
    fn test_streaming_uniform_row_unchanged() {
        let mut solver = LatticeBoltzmannSolver::new(6, 1, 1.0).unwrap();
        solver.initialize_equilibrium();
        let before = solver.distributions().clone();

        solver.streaming();

        assert_eq!(solver.distributions(), &before);
    }

    // ====== Macroscopic update ======

    #[test]
    fn test_update_density_velocity() {
        let mut solver = solver_with_ramps(3, 1.0);
        solver.update_density_velocity().unwrap();

        for i in 0..3 {
            let f = solver.distributions();
            let rho = f[(0, i)] + f[(1, i)] + f[(2, i)];
            assert_eq!(solver.density()[i], rho);
            assert_eq!(solver.velocity()[i], (f[(1, i)] - f[(2, i)]) / rho);
        }
    }

    #[test]
    fn test_update_zero_density_strict() {
        // Default f is all zeros
        let mut solver = LatticeBoltzmannSolver::new(4, 1, 1.0).unwrap();
        let error = solver.update_density_velocity().unwrap_err();

        assert_eq!(error, LbmError::NonPhysicalState { step: 0, site: 0, density: 0.0 });
        assert!(solver.velocity()[0].is_nan());
    }

    #[test]
    fn test_update_zero_density_propagate() {
        let config = LatticeConfiguration::new(4, 1, 1.0)
            .with_density_policy(DensityPolicy::Propagate);
        let mut solver = LatticeBoltzmannSolver::with_configuration(config).unwrap();

        assert!(solver.update_density_velocity().is_ok());
        assert!(solver.velocity().iter().all(|u| u.is_nan()));
    }

    #[test]
    fn test_negative_density_rejected() {
        let mut solver = LatticeBoltzmannSolver::new(2, 1, 1.0).unwrap();
        solver
            .set_distributions(DMatrix::from_row_slice(3, 2, &[1.0, -3.0, 0.5, 0.5, 0.5, 0.5]))
            .unwrap();

        let error = solver.update_density_velocity().unwrap_err();
        assert!(matches!(error, LbmError::NonPhysicalState { site: 1, .. }));
    }

    // ====== Time stepping ======

    #[test]
    fn test_step_matches_stage_sequence() {
        let mut stepped = solver_with_ramps(6, 0.7);
        let mut staged = stepped.clone();

        stepped.step().unwrap();

        staged.collision();
        staged.streaming();
        staged.update_density_velocity().unwrap();

        assert_eq!(stepped.distributions(), staged.distributions());
        assert_eq!(stepped.density(), staged.density());
        assert_eq!(stepped.velocity(), staged.velocity());
        assert_eq!(stepped.steps_taken(), 1);
    }

    #[test]
    fn test_evolve_runs_nt_steps() {
        let mut solver = LatticeBoltzmannSolver::new(10, 5, 1.0).unwrap();
        solver.evolve().unwrap();
        assert_eq!(solver.steps_taken(), 5);

        solver.evolve_steps(2).unwrap();
        assert_eq!(solver.steps_taken(), 7);
    }

    #[test]
    fn test_zero_steps_is_noop() {
        let mut solver = LatticeBoltzmannSolver::new(4, 0, 1.0).unwrap();
        let before = solver.state().clone();

        solver.evolve().unwrap();

        assert_eq!(solver.state(), &before);
    }

    #[test]
    fn test_frozen_populations_fail_fast() {
        // omega = 0 never fills the zero-initialised populations
        let mut solver = LatticeBoltzmannSolver::new(4, 3, 0.0).unwrap();
        let error = solver.evolve().unwrap_err();

        assert_eq!(error, LbmError::NonPhysicalState { step: 1, site: 0, density: 0.0 });
        assert_eq!(solver.steps_taken(), 1);
    }

    // ====== Recording ======

    #[test]
    fn test_run_records_trajectory() {
        let config = LatticeConfiguration::new(5, 4, 1.0).with_spacing(1.0, 0.5);
        let mut solver = LatticeBoltzmannSolver::with_configuration(config).unwrap();

        let result = solver.run().unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.time_points, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(result.final_snapshot.step, 4);
        assert_eq!(&result.final_snapshot.rho, solver.density());
        assert_eq!(result.get_metadata("solver"), Some("D1Q3 BGK"));
        assert_eq!(result.get_metadata("time steps"), Some("4"));
    }

    #[test]
    fn test_run_propagates_error() {
        let mut solver = LatticeBoltzmannSolver::new(4, 3, 0.0).unwrap();
        assert!(matches!(solver.run(), Err(LbmError::NonPhysicalState { .. })));
    }
}
