//! Simulation output types
//!
//! - `Snapshot`: macroscopic fields of the lattice after a given step
//! - `SimulationResult`: ordered snapshots of a whole run plus metadata

use crate::physics::{LatticeState, PhysicalQuantity};
use nalgebra::DVector;
use std::collections::HashMap;

// =================================================================================================
// Snapshot
// =================================================================================================

/// Macroscopic view of the lattice at one step
///
/// `step` counts completed steps since the solver was created, and
/// `time = step * dt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Completed steps
    pub step: usize,

    /// Physical time of the snapshot
    pub time: f64,

    /// Density per site
    pub rho: DVector<f64>,

    /// Velocity per site
    pub u: DVector<f64>,
}

impl Snapshot {
    /// Copy the macroscopic fields of `state`
    pub fn capture(state: &LatticeState, step: usize, dt: f64) -> Self {
        Self {
            step,
            // Computed from the index, not accumulated, to keep time exact
            time: step as f64 * dt,
            rho: state.density().clone(),
            u: state.velocity().clone(),
        }
    }

    /// Get a field by identifier (density or velocity only)
    pub fn get(&self, quantity: PhysicalQuantity) -> Option<&DVector<f64>> {
        match quantity {
            PhysicalQuantity::Density => Some(&self.rho),
            PhysicalQuantity::Velocity => Some(&self.u),
            _ => None,
        }
    }

    /// Sum of the density field
    pub fn total_mass(&self) -> f64 {
        self.rho.sum()
    }
}

// =================================================================================================
// Simulation Result
// =================================================================================================

/// Result of a recorded run
///
/// # Layout
///
/// `trajectory[0]` is the state before the first step, `trajectory[k]` the
/// state after step `k`. `time_points[k]` is the time of `trajectory[k]`.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Time of each snapshot
    pub time_points: Vec<f64>,

    /// Snapshots in step order
    pub trajectory: Vec<Snapshot>,

    /// Last snapshot
    pub final_snapshot: Snapshot,

    /// Run description (solver, parameters)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Start a result from the snapshot taken before the first step
    pub fn new(initial: Snapshot) -> Self {
        Self {
            time_points: vec![initial.time],
            trajectory: vec![initial.clone()],
            final_snapshot: initial,
            metadata: HashMap::new(),
        }
    }

    /// Append the snapshot of the next step
    pub fn push(&mut self, snapshot: Snapshot) {
        self.time_points.push(snapshot.time);
        self.trajectory.push(snapshot.clone());
        self.final_snapshot = snapshot;
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Total mass after each snapshot
    pub fn mass_history(&self) -> Vec<f64> {
        self.trajectory.iter().map(Snapshot::total_mass).collect()
    }
}
