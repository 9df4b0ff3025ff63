// src/core/constants.rs

//! Numeric constants shared by the state engine.

/// Tolerances and display settings used across the crate.
pub mod qsphere_constants {
    /// Allowed deviation of `|c0|² + |c1|²` from 1 when accepting raw input.
    pub const INPUT_TOLERANCE: f64 = 0.01;
    /// Norm drift allowed on any state held in the history.
    pub const NORM_TOLERANCE: f64 = 1e-6;
    /// Decimal places kept on displayed Bloch vector components.
    pub const DISPLAY_DECIMALS: u32 = 3;
    /// Most decimal places an f64 component can meaningfully be rounded to.
    pub const MAX_DISPLAY_DECIMALS: u32 = 15;
    /// Default angle (radians) under which a rotation animation counts as finished.
    pub const ANIMATION_THRESHOLD: f64 = 0.01;
    /// Used for half-turn rotations and phase angles (`e^(iθ)`)
    pub const PI: f64 = std::f64::consts::PI;
}
