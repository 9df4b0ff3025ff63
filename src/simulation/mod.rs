// src/simulation/mod.rs

//! The interactive session: the only public surface that mutates a circuit.
//!
//! A [`Session`] wraps the internal history engine and the measurement
//! generator. Presentation collaborators (input form, gate grid, sphere
//! renderer, probability chart) call into it and read snapshots back out.

mod config;
mod results;
pub(crate) mod engine;

pub use config::{MeasurePolicy, SessionConfig, SessionConfigBuilder};
pub use engine::SessionPhase;
pub use results::{MeasurementResult, Probabilities, ShotCounts};

use crate::animation::Orientation;
use crate::circuits::{CircuitHistory, HistoryEntry};
use crate::core::{GateLabel, QsphereError};
use crate::measurement;
use crate::validation;
use engine::HistoryEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An interactive single-qubit session.
///
/// Generic over the measurement generator so that tests can inject a seeded
/// or scripted source; defaults to [`StdRng`].
#[derive(Debug)]
pub struct Session<R = StdRng> {
    engine: HistoryEngine,
    rng: R,
}

impl Session<StdRng> {
    /// Creates a session with default settings and an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session; the generator is seeded from `config.seed` when set.
    pub fn with_config(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session around a caller-supplied generator.
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        Self { engine: HistoryEngine::new(config), rng }
    }

    /// Replaces the measurement generator.
    pub fn set_rng(&mut self, rng: R) {
        self.rng = rng;
    }

    /// Validates `c0 = a+bi`, `c1 = c+di` and, on success, restarts the
    /// history from the normalized state.
    ///
    /// Accepted input is divided by `sqrt(a² + b² + c² + d²)` before it is
    /// stored, so `latest().state` has unit norm and may differ slightly from
    /// the raw fields.
    ///
    /// # Returns
    /// * `Ok(HistoryEntry)` - the new entry 0; gates become enabled.
    /// * `Err(QsphereError::Validation)` - the history is cleared and gates are disabled.
    pub fn validate_and_initialize(&mut self, a: f64, b: f64, c: f64, d: f64) -> Result<HistoryEntry, QsphereError> {
        let outcome = validation::validate_input(a, b, c, d, Some(self.engine.config().input_tolerance));
        self.accept(outcome)
    }

    /// Same as [`Session::validate_and_initialize`] for the raw text of the
    /// four input fields. Unparsable fields fail validation.
    pub fn validate_text(&mut self, fields: [&str; 4]) -> Result<HistoryEntry, QsphereError> {
        let outcome = validation::validate_text(fields, Some(self.engine.config().input_tolerance));
        self.accept(outcome)
    }

    fn accept(&mut self, outcome: Result<crate::core::AmplitudePair, QsphereError>) -> Result<HistoryEntry, QsphereError> {
        match outcome {
            Ok(state) => Ok(self.engine.initialize(state)),
            Err(e) => {
                self.engine.reset();
                log::warn!(target: "qsphere::engine", "Validation failed, gates disabled: {}", e);
                Err(e)
            }
        }
    }

    /// Applies `gate` to the latest state and appends the result.
    ///
    /// `GateLabel::Measure` is routed to [`Session::measure`] and returns the
    /// collapse entry. With rotation animations enabled, X/Y/Z return the
    /// pending entry and the session stays busy until the animation completes.
    /// A failed call leaves the history untouched.
    pub fn apply_gate(&mut self, gate: GateLabel) -> Result<HistoryEntry, QsphereError> {
        if gate == GateLabel::Measure {
            self.measure()?;
            return self.engine.history().latest().copied().ok_or_else(|| QsphereError::InvalidState {
                message: "measurement left no history entry".to_string(),
            });
        }
        self.engine.apply_gate(gate).inspect_err(|e| {
            log::warn!(target: "qsphere::engine", "Gate {} rejected: {}", gate, e);
        })
    }

    /// Applies a gate named by text, e.g. from a gate button. Unknown labels
    /// fail with `QsphereError::UnknownGate`.
    pub fn apply_gate_label(&mut self, label: &str) -> Result<HistoryEntry, QsphereError> {
        let gate = label.parse::<GateLabel>().inspect_err(|_| {
            log::warn!(target: "qsphere::engine", "Unknown gate label '{}'", label);
        })?;
        self.apply_gate(gate)
    }

    /// Removes the latest step and returns the restored latest entry.
    /// Undo at entry 0 is a no-op returning `Ok(None)`.
    pub fn undo(&mut self) -> Result<Option<HistoryEntry>, QsphereError> {
        self.engine.undo()
    }

    /// Measures the latest state, collapsing it.
    ///
    /// The collapse is appended as a `Measure` entry holding the basis state
    /// and its pole vector, so undo restores the pre-measurement state.
    pub fn measure(&mut self) -> Result<MeasurementResult, QsphereError> {
        let state = self.engine.measurable_state()?;
        let tolerance = Some(self.engine.config().norm_tolerance);
        let result = measurement::measure(&state, tolerance, &mut self.rng)?;
        self.engine.record_measurement(&result);
        Ok(result)
    }

    /// Runs `shots` independent measurements of the latest state without
    /// collapsing it.
    pub fn sample(&mut self, shots: usize) -> Result<ShotCounts, QsphereError> {
        let state = self.engine.latest_state()?;
        let tolerance = Some(self.engine.config().norm_tolerance);
        measurement::sample_shots(&state, shots, tolerance, &mut self.rng)
    }

    /// Steps an in-flight rotation animation by one frame. Returns the
    /// committed entry on the frame the animation completes.
    pub fn advance_animation(&mut self) -> Option<HistoryEntry> {
        self.engine.advance_animation()
    }

    /// Completes an in-flight rotation animation at once.
    pub fn finish_animation(&mut self) -> Option<HistoryEntry> {
        self.engine.finish_animation()
    }

    /// The most recent committed entry, `None` before validation.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.engine.history().latest()
    }

    /// Read-only view of the full history.
    pub fn history(&self) -> &CircuitHistory {
        self.engine.history()
    }

    /// Owned copy of the full history, for collaborators that outlive the borrow.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.engine.history().entries().to_vec()
    }

    /// Entry waiting for its animation, if any.
    pub fn pending(&self) -> Option<&HistoryEntry> {
        self.engine.pending_entry()
    }

    pub fn phase(&self) -> SessionPhase {
        self.engine.phase()
    }

    /// Whether gate controls should be enabled.
    pub fn gates_enabled(&self) -> bool {
        self.engine.gates_enabled()
    }

    /// `true` while a rotation animation is in flight.
    pub fn is_busy(&self) -> bool {
        self.engine.phase() == SessionPhase::GateBusy
    }

    /// Current sphere rotation for the renderer.
    pub fn orientation(&self) -> Orientation {
        self.engine.orientation()
    }

    /// Distribution for the probability chart: the most recent measurement
    /// still in the history, or all zeros.
    pub fn probabilities(&self) -> Probabilities {
        self.engine.probabilities()
    }

    pub fn config(&self) -> &SessionConfig {
        self.engine.config()
    }
}

impl<R: Rng + SeedableRng> Session<R> {
    /// Re-seeds the measurement generator.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AmplitudePair, BlochVector, Outcome};
    use rand::RngCore;

    const TEST_TOLERANCE: f64 = 1e-9;

    /// Generator that always yields zero bits, so every uniform draw is 0.0.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn seeded(seed: u64) -> Session {
        Session::with_config(SessionConfig::builder().seed(seed).build())
    }

    #[test]
    fn test_measure_gate_routes_to_measurement() -> Result<(), QsphereError> {
        let mut session = seeded(5);
        session.validate_and_initialize(1.0, 0.0, 0.0, 0.0)?;
        let entry = session.apply_gate(GateLabel::Measure)?;
        assert!(entry.is_measurement());
        assert_eq!(entry.vector, BlochVector::new(0.0, 0.0, 1.0));
        assert_eq!(session.phase(), SessionPhase::Measured);
        Ok(())
    }

    #[test]
    fn test_scripted_generator_picks_outcome() -> Result<(), QsphereError> {
        // r = 0.0 < p0 for any p0 > 0
        let mut session = Session::with_rng(SessionConfig::default(), ZeroRng);
        session.validate_and_initialize(0.6, 0.0, 0.8, 0.0)?;
        let result = session.measure()?;
        assert_eq!(result.outcome, Outcome::Zero);
        assert!((result.probabilities.p0 - 0.36).abs() < TEST_TOLERANCE);
        assert_eq!(session.latest().map(|e| e.state), Some(AmplitudePair::zero_state()));
        Ok(())
    }

    #[test]
    fn test_reseed_reproduces_outcomes() -> Result<(), QsphereError> {
        let mut session = seeded(11);
        session.validate_and_initialize(0.707, 0.0, 0.707, 0.0)?;
        let first = session.sample(500)?;
        session.reseed(11);
        let second = session.sample(500)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_sample_does_not_touch_history() -> Result<(), QsphereError> {
        let mut session = seeded(1);
        session.validate_and_initialize(0.707, 0.0, 0.707, 0.0)?;
        session.sample(100)?;
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.phase(), SessionPhase::Ready);
        Ok(())
    }

    #[test]
    fn test_failed_gate_keeps_history() -> Result<(), QsphereError> {
        let mut session = seeded(1);
        session.validate_and_initialize(1.0, 0.0, 0.0, 0.0)?;
        session.apply_gate(GateLabel::H)?;
        let before = session.snapshot();
        assert!(matches!(session.apply_gate_label("Q"), Err(QsphereError::UnknownGate { .. })));
        assert_eq!(session.snapshot(), before);
        Ok(())
    }
}
