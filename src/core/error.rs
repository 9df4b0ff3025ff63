// src/core/error.rs

//! Error handling logic

use super::gate::GateLabel;
use thiserror::Error;

/// Failures reported by the state engine.
///
/// None of these are fatal: every variant is returned to the caller and the
/// circuit history is left exactly as it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QsphereError {
    /// Raw input did not describe a normalized state.
    /// `sum` is NaN when one of the fields was not a number.
    #[error("Validation Failure: |c0|^2 + |c1|^2 = {sum} is not within {tolerance} of 1")]
    Validation {
        /// The computed `a² + b² + c² + d²`.
        sum: f64,
        /// Tolerance the sum was checked against.
        tolerance: f64,
    },

    /// Gate label outside the fixed gate set.
    #[error("Unknown Gate: '{label}'")]
    UnknownGate {
        /// The label as received.
        label: String,
    },

    /// An operation needed a state but the session holds none.
    #[error("Invalid State: {message}")]
    InvalidState {
        /// InvalidState failure message
        message: String,
    },

    /// Undo requested on a session that was never initialized.
    #[error("Nothing To Undo: no validated state has been accepted")]
    NothingToUndo,

    /// The state handed to the measurement operator is malformed.
    #[error("Measurement Failure: {message}")]
    Measurement {
        /// Measurement failure message
        message: String,
    },

    /// A rotation animation is still in flight; the request was ignored.
    #[error("Gate Busy: {pending} is still being applied")]
    GateBusy {
        /// Gate whose animation has not completed.
        pending: GateLabel,
    },

    /// Operation is inconsistent with the current session state.
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// A transformation produced a state that broke the norm invariant.
    #[error("Instability Violation: {message}")]
    Instability {
        /// Instability failure message
        message: String,
    },
}
