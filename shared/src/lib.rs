//! Shared types and core pipeline for the RideWise demand-prediction platform
//!
//! This crate contains the parameter-extraction, validation, and
//! feature-vector building logic shared between the backend and its tests.

pub mod extract;
pub mod models;
pub mod normalize;
pub mod types;
pub mod validation;

pub use extract::extract_parameters;
pub use models::*;
pub use types::*;
pub use validation::*;
