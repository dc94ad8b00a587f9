//! Step-by-step evolution
//!
//! [`Evolution`] advances a solver one step per call to `next()` and yields
//! the macroscopic fields after that step. It holds the solver by exclusive
//! borrow, so the lattice cannot be touched elsewhere while iterating.

use crate::error::Result;
use crate::solver::lbm::LatticeBoltzmannSolver;
use crate::solver::result::Snapshot;
use std::iter::FusedIterator;

/// Iterator yielding one [`Snapshot`] per step
///
/// Stops after the requested number of steps, or right after yielding the
/// first error.
#[derive(Debug)]
pub struct Evolution<'a> {
    solver: &'a mut LatticeBoltzmannSolver,
    remaining: usize,
    failed: bool,
}

impl<'a> Evolution<'a> {
    pub(crate) fn new(solver: &'a mut LatticeBoltzmannSolver, steps: usize) -> Self {
        Self {
            solver,
            remaining: steps,
            failed: false,
        }
    }

    /// Steps left to run
    pub fn remaining(&self) -> usize {
        if self.failed { 0 } else { self.remaining }
    }
}

impl Iterator for Evolution<'_> {
    type Item = Result<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match self.solver.step() {
            Ok(()) => Some(Ok(self.solver.snapshot())),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl FusedIterator for Evolution<'_> {}
