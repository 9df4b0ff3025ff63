// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod gate;
pub mod state;
pub mod bloch;

// Re-export public types for convenient access via `qsphere::core::TypeName`
pub use error::QsphereError;
pub use gate::{Axis, GateLabel, GateMatrix};
pub use state::{AmplitudePair, Outcome};
pub use bloch::BlochVector;

pub mod constants;
pub use constants::qsphere_constants::{
    ANIMATION_THRESHOLD, DISPLAY_DECIMALS, INPUT_TOLERANCE, MAX_DISPLAY_DECIMALS, NORM_TOLERANCE, PI,
}; // Re-export
