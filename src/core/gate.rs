// src/core/gate.rs

use super::error::QsphereError;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

/// A 2x2 complex matrix acting on the amplitude column `[c0, c1]`.
pub type GateMatrix = [[Complex<f64>; 2]; 2];

/// Sphere axes a gate may turn the Bloch vector about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Tag identifying one step of the circuit.
///
/// Every label except `Measure` names a fixed unitary. `Measure` is carried
/// through the history like a gate but is resolved by the measurement operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateLabel {
    /// Pauli X, bit flip.
    X,
    /// Pauli Y, bit and phase flip.
    Y,
    /// Pauli Z, phase flip.
    Z,
    /// Hadamard.
    H,
    /// Quarter-turn phase, diag(1, i).
    S,
    /// Eighth-turn phase, diag(1, e^(iπ/4)).
    T,
    /// Identity.
    I,
    /// Probabilistic collapse onto the computational basis.
    Measure,
}

impl GateLabel {
    /// Every label, in the order the gate grid presents them.
    pub const ALL: [GateLabel; 8] = [
        GateLabel::X,
        GateLabel::Y,
        GateLabel::Z,
        GateLabel::H,
        GateLabel::S,
        GateLabel::T,
        GateLabel::I,
        GateLabel::Measure,
    ];

    /// Short symbol used in circuit traces.
    pub fn symbol(&self) -> &'static str {
        match self {
            GateLabel::X => "X",
            GateLabel::Y => "Y",
            GateLabel::Z => "Z",
            GateLabel::H => "H",
            GateLabel::S => "S",
            GateLabel::T => "T",
            GateLabel::I => "I",
            GateLabel::Measure => "M",
        }
    }

    /// `false` only for `Measure`.
    pub fn is_unitary(&self) -> bool {
        !matches!(self, GateLabel::Measure)
    }

    /// Gates whose effect on the sphere is an exact half turn about one axis.
    pub fn half_turn_axis(&self) -> Option<Axis> {
        match self {
            GateLabel::X => Some(Axis::X),
            GateLabel::Y => Some(Axis::Y),
            GateLabel::Z => Some(Axis::Z),
            _ => None,
        }
    }

    /// The unitary matrix for this gate, or `None` for `Measure`.
    pub fn matrix(&self) -> Option<GateMatrix> {
        let one: Complex<f64> = Complex::one();
        let zero: Complex<f64> = Complex::zero();
        let i: Complex<f64> = Complex::i();
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);

        let m = match self {
            GateLabel::X => [[zero, one], [one, zero]],
            GateLabel::Y => [[zero, -i], [i, zero]],
            GateLabel::Z => [[one, zero], [zero, -one]],
            GateLabel::H => [[h, h], [h, -h]],
            GateLabel::S => [[one, zero], [zero, i]],
            // e^(iπ/4) = (1+i)/√2
            GateLabel::T => [[one, zero], [zero, Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]],
            GateLabel::I => [[one, zero], [zero, one]],
            GateLabel::Measure => return None,
        };
        Some(m)
    }
}

impl fmt::Display for GateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for GateLabel {
    type Err = QsphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(GateLabel::X),
            "Y" | "y" => Ok(GateLabel::Y),
            "Z" | "z" => Ok(GateLabel::Z),
            "H" | "h" => Ok(GateLabel::H),
            "S" | "s" => Ok(GateLabel::S),
            "T" | "t" => Ok(GateLabel::T),
            "I" | "i" => Ok(GateLabel::I),
            "M" | "m" | "Measure" | "measure" => Ok(GateLabel::Measure),
            other => Err(QsphereError::UnknownGate { label: other.to_string() }),
        }
    }
}
