// src/circuits/mod.rs

//! The circuit history: an ordered record of every step taken from the
//! validated initial state.
//!
//! Each step is one [`HistoryEntry`] bundling the gate that produced it, the
//! resulting amplitude pair and its Bloch vector. Keeping the three together
//! in a single sequence means the gate trace, the amplitude table and the
//! sphere can never drift apart: they are appended and truncated as one.

use crate::core::{AmplitudePair, BlochVector, GateLabel};
use crate::simulation::Probabilities;
use std::fmt;

/// One step of the circuit's evolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry {
    /// Gate that produced this step. `None` only for the initial state.
    pub gate: Option<GateLabel>,
    /// Amplitude pair after the step.
    pub state: AmplitudePair,
    /// Bloch vector after the step, rounded for display.
    pub vector: BlochVector,
    /// Pre-collapse distribution when this step was a measurement.
    pub measurement: Option<Probabilities>,
}

impl HistoryEntry {
    /// Entry 0: the validated initial state.
    pub fn initial(state: AmplitudePair, vector: BlochVector) -> Self {
        Self { gate: None, state, vector, measurement: None }
    }

    /// A step produced by a unitary gate.
    pub fn gate(gate: GateLabel, state: AmplitudePair, vector: BlochVector) -> Self {
        Self { gate: Some(gate), state, vector, measurement: None }
    }

    /// A step produced by a measurement collapse.
    pub fn measured(state: AmplitudePair, vector: BlochVector, probabilities: Probabilities) -> Self {
        Self {
            gate: Some(GateLabel::Measure),
            state,
            vector,
            measurement: Some(probabilities),
        }
    }

    /// `true` for entries produced by a measurement.
    pub fn is_measurement(&self) -> bool {
        self.gate == Some(GateLabel::Measure)
    }
}

/// Ordered, append-only-with-truncation sequence of [`HistoryEntry`] records.
///
/// Once started, the history always holds entry 0 and `pop` never removes it.
/// Only the session engine mutates a history; everything else reads it.
#[derive(Clone, PartialEq, Default)]
pub struct CircuitHistory {
    entries: Vec<HistoryEntry>,
}

impl CircuitHistory {
    /// Creates a new, empty history.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Discards everything and starts over from a new entry 0.
    pub(crate) fn restart(&mut self, initial: HistoryEntry) {
        self.entries.clear();
        self.entries.push(initial);
    }

    /// Drops every entry, including entry 0.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Appends a step. (Internal visibility)
    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        debug_assert!(!self.entries.is_empty(), "history must be started before appending");
        self.entries.push(entry);
    }

    /// Removes the latest step unless only entry 0 is left.
    pub(crate) fn pop(&mut self) -> Option<HistoryEntry> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// The entry at step `index` (0 is the initial state).
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// All entries in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries, including entry 0.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` before any input has been accepted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applied gate labels in order; one shorter than the other sequences.
    pub fn gate_sequence(&self) -> Vec<GateLabel> {
        self.entries.iter().filter_map(|e| e.gate).collect()
    }

    /// Amplitude pairs in order.
    pub fn amplitude_sequence(&self) -> Vec<AmplitudePair> {
        self.entries.iter().map(|e| e.state).collect()
    }

    /// Bloch vectors in order.
    pub fn vector_sequence(&self) -> Vec<BlochVector> {
        self.entries.iter().map(|e| e.vector).collect()
    }

    /// The distribution recorded by the most recent measurement still in the history.
    pub fn last_measurement(&self) -> Option<Probabilities> {
        self.entries.iter().rev().find_map(|e| e.measurement)
    }
}

impl fmt::Display for CircuitHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "qsphere::CircuitHistory[uninitialized]");
        }

        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const H_WIRE: char = '─';
        const LABEL: &str = "|ψ⟩: ";

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            let total_dashes = GATE_WIDTH.saturating_sub(slen);
            let pre_dashes = total_dashes / 2;
            let post_dashes = total_dashes - pre_dashes;
            format!("{}{}{}", H_WIRE.to_string().repeat(pre_dashes), symbol, H_WIRE.to_string().repeat(post_dashes))
        }

        let gates = self.gate_sequence();
        writeln!(f, "qsphere::CircuitHistory[{} steps]", gates.len())?;

        let wire: String = if gates.is_empty() {
            H_WIRE.to_string().repeat(GATE_WIDTH)
        } else {
            gates.iter().map(|g| format_gate(g.symbol())).collect()
        };
        writeln!(f, "{}{}", LABEL, wire)?;

        for (i, entry) in self.entries.iter().enumerate() {
            let step = match entry.gate {
                Some(gate) => gate.symbol(),
                None => "init",
            };
            write!(f, "  [{}] {:<4} {} bloch={}", i, step, entry.state, entry.vector)?;
            if let Some(p) = entry.measurement {
                write!(f, " {}", p)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for CircuitHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_for(gate: Option<GateLabel>, state: AmplitudePair) -> HistoryEntry {
        let vector = BlochVector::project(&state, 3);
        match gate {
            Some(g) => HistoryEntry::gate(g, state, vector),
            None => HistoryEntry::initial(state, vector),
        }
    }

    #[test]
    fn test_pop_never_removes_entry_zero() {
        let mut history = CircuitHistory::new();
        assert!(history.pop().is_none());
        history.restart(entry_for(None, AmplitudePair::zero_state()));
        history.push(entry_for(Some(GateLabel::X), AmplitudePair::one_state()));
        assert!(history.pop().is_some());
        assert!(history.pop().is_none());
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().map(|e| e.gate), Some(None));
    }

    #[test]
    fn test_sequences_stay_aligned() {
        let mut history = CircuitHistory::new();
        history.restart(entry_for(None, AmplitudePair::zero_state()));
        history.push(entry_for(Some(GateLabel::X), AmplitudePair::one_state()));
        history.push(entry_for(Some(GateLabel::X), AmplitudePair::zero_state()));
        assert_eq!(history.gate_sequence().len() + 1, history.amplitude_sequence().len());
        assert_eq!(history.amplitude_sequence().len(), history.vector_sequence().len());
        assert_eq!(history.gate_sequence(), vec![GateLabel::X, GateLabel::X]);
        assert_eq!(history.get(1).and_then(|e| e.gate), Some(GateLabel::X));
        assert_eq!(history.get(2).map(|e| e.state), Some(AmplitudePair::zero_state()));
        assert!(history.get(3).is_none());
    }

    #[test]
    fn test_restart_discards_previous_steps() {
        let mut history = CircuitHistory::new();
        history.restart(entry_for(None, AmplitudePair::zero_state()));
        history.push(entry_for(Some(GateLabel::X), AmplitudePair::one_state()));
        history.restart(entry_for(None, AmplitudePair::one_state()));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().map(|e| e.state), Some(AmplitudePair::one_state()));
    }

    #[test]
    fn test_last_measurement_scans_backwards() {
        let mut history = CircuitHistory::new();
        history.restart(entry_for(None, AmplitudePair::zero_state()));
        assert!(history.last_measurement().is_none());
        let probs = Probabilities { p0: 1.0, p1: 0.0 };
        history.push(HistoryEntry::measured(AmplitudePair::zero_state(), BlochVector::new(0.0, 0.0, 1.0), probs));
        history.push(entry_for(Some(GateLabel::H), AmplitudePair::zero_state()));
        assert_eq!(history.last_measurement(), Some(probs));
    }

    #[test]
    fn test_display_draws_trace() {
        let mut history = CircuitHistory::new();
        assert!(history.to_string().contains("uninitialized"));
        history.restart(entry_for(None, AmplitudePair::zero_state()));
        history.push(entry_for(Some(GateLabel::X), AmplitudePair::one_state()));
        let rendered = history.to_string();
        assert!(rendered.contains("[1 steps]"));
        assert!(rendered.contains("───X───"));
        assert!(rendered.contains("[0] init"));
        assert!(rendered.contains("bloch=(0.000, 0.000, -1.000)"));
    }
}
