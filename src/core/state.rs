// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// The single-qubit state `c0|0⟩ + c1|1⟩`.
///
/// Instances are never mutated in place: every gate, normalization or
/// collapse produces a new pair. Pairs stored in a session history satisfy
/// `|c0|² + |c1|² ≈ 1`; pairs built directly through [`AmplitudePair::new`]
/// are accepted as given and may be checked with
/// [`crate::validation::check_normalization`].
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudePair {
    c0: Complex<f64>,
    c1: Complex<f64>,
}

impl AmplitudePair {
    /// Creates a pair from two complex amplitudes without validation.
    pub fn new(c0: Complex<f64>, c1: Complex<f64>) -> Self {
        Self { c0, c1 }
    }

    /// Creates a pair from `c0 = a + bi`, `c1 = c + di`.
    pub fn from_parts(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(Complex::new(a, b), Complex::new(c, d))
    }

    /// The basis state |0⟩.
    pub fn zero_state() -> Self {
        Self::new(Complex::new(1.0, 0.0), Complex::zero())
    }

    /// The basis state |1⟩.
    pub fn one_state() -> Self {
        Self::new(Complex::zero(), Complex::new(1.0, 0.0))
    }

    /// Amplitude of |0⟩.
    pub fn c0(&self) -> Complex<f64> {
        self.c0
    }

    /// Amplitude of |1⟩.
    pub fn c1(&self) -> Complex<f64> {
        self.c1
    }

    /// The pair as a column `[c0, c1]`.
    pub fn as_column(&self) -> [Complex<f64>; 2] {
        [self.c0, self.c1]
    }

    /// `|c0|² + |c1|²`
    pub fn norm_sqr(&self) -> f64 {
        self.c0.norm_sqr() + self.c1.norm_sqr()
    }

    /// Rescales the pair to unit norm. Returns `None` for a zero or non-finite norm.
    pub fn normalized(&self) -> Option<Self> {
        let norm = self.norm_sqr().sqrt();
        if !norm.is_finite() || norm < f64::EPSILON {
            return None;
        }
        Some(Self::new(self.c0 / norm, self.c1 / norm))
    }

    /// `true` when both amplitudes are finite.
    pub fn is_finite(&self) -> bool {
        self.c0.is_finite() && self.c1.is_finite()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.c0 - other.c0).norm() <= tolerance && (self.c1 - other.c1).norm() <= tolerance
    }
}

impl fmt::Display for AmplitudePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.c0, self.c1)
    }
}

/// Basis outcome of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Collapsed onto |0⟩.
    Zero,
    /// Collapsed onto |1⟩.
    One,
}

impl Outcome {
    /// Classical bit for this outcome.
    pub fn bit(&self) -> u8 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }

    /// The basis state the qubit collapses onto.
    pub fn basis_state(&self) -> AmplitudePair {
        match self {
            Outcome::Zero => AmplitudePair::zero_state(),
            Outcome::One => AmplitudePair::one_state(),
        }
    }

    /// Label shown to users and charts.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Zero => "|0>",
            Outcome::One => "|1>",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_rescales() {
        let pair = AmplitudePair::from_parts(0.707, 0.0, 0.707, 0.0);
        let n = pair.normalized().unwrap();
        assert!((n.norm_sqr() - 1.0).abs() < 1e-12);
        assert!((n.c0().re - n.c1().re).abs() < 1e-15);
    }

    #[test]
    fn test_normalized_rejects_zero_and_nan() {
        assert!(AmplitudePair::from_parts(0.0, 0.0, 0.0, 0.0).normalized().is_none());
        assert!(AmplitudePair::from_parts(f64::NAN, 0.0, 1.0, 0.0).normalized().is_none());
    }

    #[test]
    fn test_outcome_basis_states() {
        assert_eq!(Outcome::Zero.basis_state(), AmplitudePair::zero_state());
        assert_eq!(Outcome::One.basis_state(), AmplitudePair::one_state());
        assert_eq!(Outcome::One.to_string(), "|1>");
        assert_eq!(Outcome::Zero.bit(), 0);
    }
}
