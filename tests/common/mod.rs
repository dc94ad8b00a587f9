//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use test_helpers::{
    assert_fields_close,
    create_solver,
    ramp_distributions,
    relative_error,
    uniform_recurrence,
};
