// src/animation/mod.rs

//! Rotation animation for half-turn gates.
//!
//! The renderer turns the whole sphere group by π about the gate's axis. The
//! animation is frame driven: each call to [`RotationAnimation::step`] moves
//! every angle a fixed fraction of the remaining distance toward the target,
//! and the animation completes once all angles are within the threshold.
//! It only ever touches presentation state; the session commits the pending
//! history entry when the animation reports completion.

use crate::core::{ANIMATION_THRESHOLD, Axis, PI};

/// Rotation of the rendered sphere group, in radians about each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Orientation {
    /// This orientation turned a further `angle` radians about `axis`.
    pub fn turned(&self, axis: Axis, angle: f64) -> Self {
        let mut next = *self;
        match axis {
            Axis::X => next.x += angle,
            Axis::Y => next.y += angle,
            Axis::Z => next.z += angle,
        }
        next
    }

    /// This orientation after a half turn about `axis`.
    pub fn half_turned(&self, axis: Axis) -> Self {
        self.turned(axis, PI)
    }

    fn within(&self, other: &Self, threshold: f64) -> bool {
        (self.x - other.x).abs() <= threshold
            && (self.y - other.y).abs() <= threshold
            && (self.z - other.z).abs() <= threshold
    }
}

/// An in-flight interpolation from one orientation to another.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationAnimation {
    current: Orientation,
    target: Orientation,
    lerp_factor: f64,
    threshold: f64,
    frames: usize,
}

impl RotationAnimation {
    /// Starts an animation at `from` heading for `target`.
    ///
    /// `lerp_factor` is clamped into `(0, 1]`. A non-finite `threshold` falls
    /// back to the default; its sign is ignored.
    pub fn new(from: Orientation, target: Orientation, lerp_factor: f64, threshold: f64) -> Self {
        let lerp_factor = if lerp_factor.is_finite() && lerp_factor > 0.0 { lerp_factor.min(1.0) } else { 1.0 };
        let threshold = if threshold.is_finite() { threshold.abs() } else { ANIMATION_THRESHOLD };
        Self {
            current: from,
            target,
            lerp_factor,
            threshold,
            frames: 0,
        }
    }

    /// Advances one frame and returns the orientation to render.
    /// Once finished the orientation is snapped onto the target.
    pub fn step(&mut self) -> Orientation {
        if self.is_finished() {
            self.current = self.target;
            return self.current;
        }
        self.frames += 1;
        let previous = self.current;
        self.current.x += (self.target.x - self.current.x) * self.lerp_factor;
        self.current.y += (self.target.y - self.current.y) * self.lerp_factor;
        self.current.z += (self.target.z - self.current.z) * self.lerp_factor;
        // a step too small to change any angle would stall short of a tiny threshold
        if self.current == previous || self.is_finished() {
            self.current = self.target;
        }
        self.current
    }

    /// `true` once every angle is within the threshold of the target.
    pub fn is_finished(&self) -> bool {
        self.current == self.target || self.current.within(&self.target, self.threshold)
    }

    /// Orientation at the current frame.
    pub fn current(&self) -> Orientation {
        self.current
    }

    /// Orientation the animation is heading for.
    pub fn target(&self) -> Orientation {
        self.target
    }

    /// Frames stepped so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}
