//! D1Q3 velocity set
//!
//! One spatial dimension, three discrete velocities:
//!
//! ```text
//!   index   direction   c    w
//!   0       rest        0    1/3
//!   1       right      +1    1/6
//!   2       left       -1    1/6
//! ```
//!
//! Row `d` of the distribution matrix always holds the population moving
//! with velocity `c[d]`.

use std::fmt;

/// D1Q3 lattice constants
#[derive(Debug, Clone, Copy, Default)]
pub struct D1Q3;

impl D1Q3 {
    /// Number of discrete velocities
    pub const Q: usize = 3;

    /// Lattice velocities, indexed like the rows of `f`
    pub const VELOCITIES: [f64; 3] = [0.0, 1.0, -1.0];

    /// Equilibrium weights, indexed like the rows of `f`
    ///
    /// These add up to 2/3, not 1. The equilibrium formula depends on these
    /// exact values.
    pub const WEIGHTS: [f64; 3] = [1.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0];

    /// All directions in row order
    pub const DIRECTIONS: [Direction; 3] = [Direction::Rest, Direction::Right, Direction::Left];
}

/// Discrete velocity direction of the D1Q3 set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// c = 0, never streamed
    Rest,
    /// c = +1, streamed towards increasing site index
    Right,
    /// c = -1, streamed towards decreasing site index
    Left,
}

impl Direction {
    /// Row of the distribution matrix holding this population
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Rest => 0,
            Direction::Right => 1,
            Direction::Left => 2,
        }
    }

    /// Lattice velocity c
    #[inline]
    pub fn velocity(self) -> f64 {
        D1Q3::VELOCITIES[self.index()]
    }

    /// Equilibrium weight w
    #[inline]
    pub fn weight(self) -> f64 {
        D1Q3::WEIGHTS[self.index()]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rest => write!(f, "rest"),
            Direction::Right => write!(f, "+1"),
            Direction::Left => write!(f, "-1"),
        }
    }
}
