//! Uniform gas on a small lattice
//!
//! Ten sites at rest with unit density, no binding energy, full relaxation.
//! Every site follows the same recurrence, so the run prints one line per
//! step with the shared density and velocity.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example uniform_gas
//! ```

use lbm_rs::prelude::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== D1Q3 Uniform Gas ===\n");

    let nx = 10;
    let nt = 5;
    let omega = 1.0;

    println!("Lattice:");
    println!("  Sites: {}", nx);
    println!("  Time steps: {}", nt);
    println!("  Relaxation rate omega: {}\n", omega);

    let mut solver = LatticeBoltzmannSolver::new(nx, nt, omega)?;

    println!("{:>6} {:>16} {:>16} {:>16}", "step", "rho[0]", "u[0]", "total mass");
    for snapshot in solver.snapshots() {
        let snapshot = snapshot?;
        println!(
            "{:>6} {:>16.8} {:>16.8} {:>16.8}",
            snapshot.step,
            snapshot.rho[0],
            snapshot.u[0],
            snapshot.total_mass()
        );
    }

    let rho = solver.density();
    let spread = rho.max() - rho.min();
    println!("\nDensity spread across the lattice: {:.3e}", spread);

    println!("\n=== Simulation Complete ===");
    Ok(())
}
