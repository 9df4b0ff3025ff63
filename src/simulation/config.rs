// src/simulation/config.rs

//! Session settings and their builder.

use crate::core::{ANIMATION_THRESHOLD, DISPLAY_DECIMALS, INPUT_TOLERANCE, NORM_TOLERANCE};

/// What happens to the gate controls after a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurePolicy {
    /// Gates stay enabled and act on the collapsed state.
    #[default]
    KeepGatesEnabled,
    /// Gates are rejected until the measurement is undone or the input revalidated.
    DisableGates,
}

/// Settings for a [`crate::Session`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Allowed deviation of the raw input sum from 1.
    pub input_tolerance: f64,
    /// Allowed norm drift on stored states.
    pub norm_tolerance: f64,
    /// Decimal places kept on Bloch vector components, capped at 15.
    pub display_decimals: u32,
    /// Seed for the measurement generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Animate X, Y and Z gates, holding the session busy until they finish.
    pub animate_rotations: bool,
    /// Fraction of the remaining angle covered per animation frame.
    pub animation_lerp: f64,
    /// Angle (radians) under which an animation counts as finished.
    pub animation_threshold: f64,
    /// Gate policy after measurement.
    pub after_measure: MeasurePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input_tolerance: INPUT_TOLERANCE,
            norm_tolerance: NORM_TOLERANCE,
            display_decimals: DISPLAY_DECIMALS,
            seed: None,
            animate_rotations: false,
            animation_lerp: 0.08,
            animation_threshold: ANIMATION_THRESHOLD,
            after_measure: MeasurePolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Starts a builder from the default settings.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::new()
    }
}

/// Chaining builder for [`SessionConfig`].
#[derive(Debug, Clone, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Creates a builder holding the default settings.
    pub fn new() -> Self {
        Self { config: SessionConfig::default() }
    }

    pub fn input_tolerance(mut self, tolerance: f64) -> Self {
        self.config.input_tolerance = tolerance;
        self
    }

    pub fn norm_tolerance(mut self, tolerance: f64) -> Self {
        self.config.norm_tolerance = tolerance;
        self
    }

    pub fn display_decimals(mut self, decimals: u32) -> Self {
        self.config.display_decimals = decimals;
        self
    }

    /// Fixes the measurement generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enables frame-driven rotation animations for X, Y and Z.
    pub fn animate_rotations(mut self, enabled: bool) -> Self {
        self.config.animate_rotations = enabled;
        self
    }

    pub fn animation(mut self, lerp: f64, threshold: f64) -> Self {
        self.config.animation_lerp = lerp;
        self.config.animation_threshold = threshold;
        self
    }

    pub fn after_measure(mut self, policy: MeasurePolicy) -> Self {
        self.config.after_measure = policy;
        self
    }

    /// Finalizes the builder.
    pub fn build(self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.input_tolerance, 0.01);
        assert_eq!(config.norm_tolerance, 1e-6);
        assert_eq!(config.display_decimals, 3);
        assert!(config.seed.is_none());
        assert!(!config.animate_rotations);
        assert_eq!(config.after_measure, MeasurePolicy::KeepGatesEnabled);
    }

    #[test]
    fn test_builder_chains() {
        let config = SessionConfig::builder()
            .seed(9)
            .animate_rotations(true)
            .animation(0.2, 0.05)
            .after_measure(MeasurePolicy::DisableGates)
            .input_tolerance(0.02)
            .build();
        assert_eq!(config.seed, Some(9));
        assert!(config.animate_rotations);
        assert_eq!(config.animation_lerp, 0.2);
        assert_eq!(config.animation_threshold, 0.05);
        assert_eq!(config.after_measure, MeasurePolicy::DisableGates);
        assert_eq!(config.input_tolerance, 0.02);
    }
}
