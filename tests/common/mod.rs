//! Common utilities for integration tests

#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ExponentialDecay, OpaqueDiffusion};
pub use test_helpers::{
    assert_fields_close, boundary_flux, coarse_parameters, compute_l2_error,
    create_simple_scenario,
};
