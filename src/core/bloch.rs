// src/core/bloch.rs

//! Bloch sphere embedding of single-qubit states.
//!
//! A pair `(c0, c1)` maps to the unit vector
//!
//! ```text
//! θ = 2·acos(|c0|)            φ = arg(c1) − arg(c0)
//! x = sin θ cos φ     y = sin θ sin φ     z = cos θ
//! ```
//!
//! The longitude is the phase of `c1` minus the phase of `c0`. Vectors kept in
//! a history are rounded to a fixed number of decimals so that repeated
//! renders and comparisons are stable.

use super::constants::qsphere_constants::MAX_DISPLAY_DECIMALS;
use super::gate::GateLabel;
use super::state::{AmplitudePair, Outcome};
use num_complex::Complex;
use std::fmt;

/// A point on the Bloch sphere in Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Exact projection of an amplitude pair, unrounded.
    pub fn from_amplitudes(state: &AmplitudePair) -> Self {
        let (theta, phi) = angles_of(state);
        Self {
            x: theta.sin() * phi.cos(),
            y: theta.sin() * phi.sin(),
            z: theta.cos(),
        }
    }

    /// Projection of an amplitude pair rounded to `decimals` places.
    pub fn project(state: &AmplitudePair, decimals: u32) -> Self {
        Self::from_amplitudes(state).rounded(decimals)
    }

    /// The pole a measurement outcome collapses onto.
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Zero => Self::new(0.0, 0.0, 1.0),
            Outcome::One => Self::new(0.0, 0.0, -1.0),
        }
    }

    /// Canonical amplitude pair `cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩` for this point.
    /// The global phase is fixed so that `c0` is real and non-negative.
    pub fn to_amplitudes(&self) -> AmplitudePair {
        let (theta, phi) = self.angles();
        let half = theta / 2.0;
        AmplitudePair::new(
            Complex::new(half.cos(), 0.0),
            Complex::from_polar(half.sin(), phi),
        )
    }

    /// Polar angle θ ∈ [0, π] and azimuth φ ∈ (-π, π].
    pub fn angles(&self) -> (f64, f64) {
        let r = self.norm();
        if r < f64::EPSILON {
            return (0.0, 0.0);
        }
        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        (theta, phi)
    }

    /// Each component rounded to `decimals` places (at most 15).
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            x: round_to(self.x, decimals),
            y: round_to(self.y, decimals),
            z: round_to(self.z, decimals),
        }
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Geometric update for gates that act as a half turn about a sphere axis.
    ///
    /// X keeps `x` and negates `(y, z)`, Y keeps `y` and negates `(x, z)`,
    /// Z keeps `z` and negates `(x, y)`. Identity returns the vector unchanged.
    /// H, S, T and measurement have no half-turn form and return `None`; use
    /// [`BlochVector::from_amplitudes`] on the transformed pair instead.
    pub fn half_turn(&self, gate: GateLabel) -> Option<Self> {
        match gate {
            GateLabel::X => Some(Self::new(self.x, -self.y, -self.z)),
            GateLabel::Y => Some(Self::new(-self.x, self.y, -self.z)),
            GateLabel::Z => Some(Self::new(-self.x, -self.y, self.z)),
            GateLabel::I => Some(*self),
            _ => None,
        }
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

fn angles_of(state: &AmplitudePair) -> (f64, f64) {
    let m0 = state.c0().norm_sqr();
    // inputs accepted within tolerance may push |c0| a hair past 1
    let theta = 2.0 * m0.sqrt().clamp(0.0, 1.0).acos();
    let phi = state.c1().im.atan2(state.c1().re) - state.c0().im.atan2(state.c0().re);
    (theta, phi)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DISPLAY_DECIMALS) as i32);
    let rounded = (value * factor).round() / factor;
    // fold -0.0 so displays never show a signed zero
    if rounded == 0.0 { 0.0 } else { rounded }
}
