// src/simulation/results.rs
use crate::core::{BlochVector, Outcome};
use std::fmt;

/// Outcome distribution of a measurement, as consumed by the probability chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Probabilities {
    /// Probability of |0⟩, `|c0|²`.
    pub p0: f64,
    /// Probability of |1⟩, `|c1|²`.
    pub p1: f64,
}

impl Probabilities {
    /// The all-zero distribution shown before any measurement.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Probability of a given outcome.
    pub fn of(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Zero => self.p0,
            Outcome::One => self.p1,
        }
    }
}

impl fmt::Display for Probabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P0={:.3}, P1={:.3}", self.p0, self.p1)
    }
}

/// Result of a single measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementResult {
    /// The basis state the qubit collapsed onto.
    pub outcome: Outcome,
    /// Distribution of the state before the collapse.
    pub probabilities: Probabilities,
}

impl MeasurementResult {
    /// Bloch vector of the collapsed state, (0,0,1) or (0,0,-1).
    pub fn collapsed_vector(&self) -> BlochVector {
        BlochVector::for_outcome(self.outcome)
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Measured {} ({})", self.outcome, self.probabilities)
    }
}

/// Outcome counts from repeated independent shots on the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotCounts {
    shots: usize,
    zeros: usize,
    ones: usize,
}

impl ShotCounts {
    /// Creates an empty tally. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records one shot. (Internal visibility)
    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.shots += 1;
        match outcome {
            Outcome::Zero => self.zeros += 1,
            Outcome::One => self.ones += 1,
        }
    }

    /// Total number of shots taken.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Number of shots that produced `outcome`.
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Zero => self.zeros,
            Outcome::One => self.ones,
        }
    }

    /// Observed frequency of `outcome`; 0.0 when no shots were taken.
    pub fn frequency(&self, outcome: Outcome) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / self.shots as f64
    }

    /// Observed frequencies in the shape the probability chart consumes.
    pub fn as_probabilities(&self) -> Probabilities {
        Probabilities {
            p0: self.frequency(Outcome::Zero),
            p1: self.frequency(Outcome::One),
        }
    }
}

impl fmt::Display for ShotCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shot Results ({} shots):", self.shots)?;
        if self.shots == 0 {
            writeln!(f, "  No shots were taken.")?;
        } else {
            for outcome in [Outcome::Zero, Outcome::One] {
                writeln!(
                    f,
                    "  {}: {} ({:.3})",
                    outcome,
                    self.count(outcome),
                    self.frequency(outcome)
                )?;
            }
        }
        Ok(())
    }
}
