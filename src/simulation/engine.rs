// src/simulation/engine.rs
use crate::animation::{Orientation, RotationAnimation};
use crate::circuits::{CircuitHistory, HistoryEntry};
use crate::core::{AmplitudePair, BlochVector, GateLabel, QsphereError};
use crate::operations;
use crate::simulation::{MeasurePolicy, MeasurementResult, Probabilities, SessionConfig};
use crate::validation::check_normalization;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No validated state; gates disabled.
    Uninitialized,
    /// Entry 0 exists and gates are accepted.
    Ready,
    /// A gate animation is in flight; mutations are refused until it completes.
    GateBusy,
    /// The latest entry is a measurement collapse.
    Measured,
}

/// A gate whose history entry waits for its animation to finish.
#[derive(Debug, Clone)]
struct PendingGate {
    entry: HistoryEntry,
    animation: RotationAnimation,
}

/// Owns the circuit history and the state machine guarding it.
/// (Internal visibility)
#[derive(Debug, Clone)]
pub(crate) struct HistoryEngine {
    history: CircuitHistory,
    phase: SessionPhase,
    pending: Option<PendingGate>,
    /// Presentation rotation of the sphere, rewound on undo.
    orientation: Orientation,
    config: SessionConfig,
}

impl HistoryEngine {
    pub(crate) fn new(config: SessionConfig) -> Self {
        Self {
            history: CircuitHistory::new(),
            phase: SessionPhase::Uninitialized,
            pending: None,
            orientation: Orientation::default(),
            config,
        }
    }

    pub(crate) fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub(crate) fn history(&self) -> &CircuitHistory {
        &self.history
    }

    pub(crate) fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub(crate) fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub(crate) fn pending_entry(&self) -> Option<&HistoryEntry> {
        self.pending.as_ref().map(|p| &p.entry)
    }

    /// Whether the gate controls accept input right now.
    pub(crate) fn gates_enabled(&self) -> bool {
        match self.phase {
            SessionPhase::Ready => true,
            SessionPhase::Measured => self.config.after_measure == MeasurePolicy::KeepGatesEnabled,
            SessionPhase::Uninitialized | SessionPhase::GateBusy => false,
        }
    }

    /// Distribution of the latest measurement still in the history, zero otherwise.
    pub(crate) fn probabilities(&self) -> Probabilities {
        self.history.last_measurement().unwrap_or_default()
    }

    /// Discards any previous circuit and starts from `state` as entry 0.
    pub(crate) fn initialize(&mut self, state: AmplitudePair) -> HistoryEntry {
        let vector = self.project(&state);
        let entry = HistoryEntry::initial(state, vector);
        self.history.restart(entry);
        self.pending = None;
        self.orientation = Orientation::default();
        self.phase = SessionPhase::Ready;
        log::debug!(target: "qsphere::engine", "History started at {} bloch={}", state, vector);
        entry
    }

    /// Drops the whole history after a failed validation.
    pub(crate) fn reset(&mut self) {
        self.history.clear();
        self.pending = None;
        self.orientation = Orientation::default();
        self.phase = SessionPhase::Uninitialized;
        log::debug!(target: "qsphere::engine", "History cleared; gates disabled");
    }

    /// The amplitude pair the next operation acts on.
    pub(crate) fn latest_state(&self) -> Result<AmplitudePair, QsphereError> {
        self.history.latest().map(|e| e.state).ok_or_else(|| QsphereError::InvalidState {
            message: "no validated state; validate input first".to_string(),
        })
    }

    /// Refuses mutations while an animation is in flight.
    fn ensure_idle(&self) -> Result<(), QsphereError> {
        match &self.pending {
            Some(p) => {
                let pending = p.entry.gate.unwrap_or(GateLabel::I);
                log::warn!(target: "qsphere::engine", "Ignored request: {} still animating", pending);
                Err(QsphereError::GateBusy { pending })
            }
            None => Ok(()),
        }
    }

    /// Applies a unitary gate to the latest state.
    ///
    /// Without animation (or for gates that do not animate) the new entry is
    /// committed immediately. Otherwise it is held as pending and the engine
    /// moves to `GateBusy` until the animation completes. Either way the
    /// returned entry is the one that will become the latest.
    pub(crate) fn apply_gate(&mut self, gate: GateLabel) -> Result<HistoryEntry, QsphereError> {
        self.ensure_idle()?;
        let current = self.latest_state()?;
        if !self.gates_enabled() {
            return Err(QsphereError::InvalidOperation {
                message: "gates are disabled after measurement; undo or revalidate".to_string(),
            });
        }

        let next = operations::apply_gate(&current, gate)?;
        check_normalization(&next, Some(self.config.norm_tolerance))?;
        let entry = HistoryEntry::gate(gate, next, self.project(&next));

        match gate.half_turn_axis().filter(|_| self.config.animate_rotations) {
            Some(axis) => {
                let target = self.orientation.half_turned(axis);
                let animation = RotationAnimation::new(
                    self.orientation,
                    target,
                    self.config.animation_lerp,
                    self.config.animation_threshold,
                );
                self.pending = Some(PendingGate { entry, animation });
                self.phase = SessionPhase::GateBusy;
                log::debug!(target: "qsphere::engine", "Gate {} pending until its rotation completes", gate);
            }
            None => self.commit(entry),
        }
        Ok(entry)
    }

    fn commit(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
        self.phase = if entry.is_measurement() { SessionPhase::Measured } else { SessionPhase::Ready };
        log::debug!(
            target: "qsphere::engine",
            "Step {} committed: {} bloch={}",
            self.history.len() - 1,
            entry.state,
            entry.vector
        );
    }

    /// Steps the in-flight animation by one frame. Returns the committed entry
    /// on the frame the animation completes.
    pub(crate) fn advance_animation(&mut self) -> Option<HistoryEntry> {
        let finished = match self.pending.as_mut() {
            Some(pending) => {
                self.orientation = pending.animation.step();
                pending.animation.is_finished()
            }
            None => return None,
        };
        if finished { self.finish_animation() } else { None }
    }

    /// Completes the in-flight animation at once and commits its entry.
    pub(crate) fn finish_animation(&mut self) -> Option<HistoryEntry> {
        let pending = self.pending.take()?;
        self.orientation = pending.animation.target();
        self.commit(pending.entry);
        Some(pending.entry)
    }

    /// Appends the collapse produced by a measurement of the latest state.
    pub(crate) fn record_measurement(&mut self, result: &MeasurementResult) -> HistoryEntry {
        let entry = HistoryEntry::measured(
            result.outcome.basis_state(),
            result.collapsed_vector(),
            result.probabilities,
        );
        self.commit(entry);
        entry
    }

    /// Checks that a measurement may run now and returns the state to measure.
    pub(crate) fn measurable_state(&self) -> Result<AmplitudePair, QsphereError> {
        self.ensure_idle()?;
        self.latest_state()
    }

    /// Removes the latest step.
    ///
    /// # Returns
    /// * `Ok(Some(entry))` with the restored latest entry.
    /// * `Ok(None)` when only entry 0 is left (no-op).
    /// * `Err` when uninitialized or while an animation is in flight.
    pub(crate) fn undo(&mut self) -> Result<Option<HistoryEntry>, QsphereError> {
        if self.phase == SessionPhase::Uninitialized {
            return Err(QsphereError::NothingToUndo);
        }
        self.ensure_idle()?;

        let Some(removed) = self.history.pop() else {
            log::debug!(target: "qsphere::engine", "Undo ignored: only the initial state is left");
            return Ok(None);
        };
        if let Some(axis) = removed.gate.and_then(|g| g.half_turn_axis()) {
            if self.config.animate_rotations {
                self.orientation = self.orientation.turned(axis, -crate::core::PI);
            }
        }

        let restored = *self.history.latest().ok_or(QsphereError::NothingToUndo)?;
        self.phase = if restored.is_measurement() { SessionPhase::Measured } else { SessionPhase::Ready };
        log::debug!(
            target: "qsphere::engine",
            "Undid {}; latest is step {}",
            removed.gate.map(|g| g.symbol()).unwrap_or("?"),
            self.history.len() - 1
        );
        Ok(Some(restored))
    }

    fn project(&self, state: &AmplitudePair) -> BlochVector {
        BlochVector::project(state, self.config.display_decimals)
    }
}
