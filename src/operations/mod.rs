// src/operations/mod.rs

//! The gate library: pure transformations of an [`AmplitudePair`] by the
//! fixed set of single-qubit unitaries.
//!
//! Each gate is applied as left-multiplication of the amplitude column
//! `[c0, c1]` by its 2x2 matrix. Inputs are never mutated; a new pair is
//! returned. Measurement is not a unitary and is rejected here, see
//! [`crate::measurement`].

use crate::core::{AmplitudePair, GateLabel, GateMatrix, QsphereError};

/// Applies `gate` to `state` and returns the transformed pair.
///
/// # Returns
/// * `Ok(AmplitudePair)` with the transformed amplitudes. For `GateLabel::I`
///   this is the input, amplitude for amplitude.
/// * `Err(QsphereError::InvalidOperation)` for `GateLabel::Measure`.
pub fn apply_gate(state: &AmplitudePair, gate: GateLabel) -> Result<AmplitudePair, QsphereError> {
    if gate == GateLabel::I {
        return Ok(*state);
    }
    let matrix = gate.matrix().ok_or_else(|| QsphereError::InvalidOperation {
        message: format!("{} is not a unitary gate and must go through the measurement operator", gate),
    })?;

    let next = apply_matrix(&matrix, state);
    log::trace!(
        target: "qsphere::gates",
        "Applied {}: {} -> {}",
        gate,
        state,
        next
    );
    debug_assert!(
        !state.is_finite() || (next.norm_sqr() - state.norm_sqr()).abs() < 1e-9,
        "gate {} changed the state norm",
        gate
    );
    Ok(next)
}

/// Applies a gate named by its text label, e.g. `"H"`.
///
/// Unknown labels fail with `QsphereError::UnknownGate`; the caller keeps its
/// state untouched.
pub fn apply_gate_label(state: &AmplitudePair, label: &str) -> Result<AmplitudePair, QsphereError> {
    match label.parse::<GateLabel>() {
        Ok(gate) => apply_gate(state, gate),
        Err(e) => {
            log::warn!(target: "qsphere::gates", "Rejected gate label '{}'", label);
            Err(e)
        }
    }
}

/// `[c0', c1'] = matrix * [c0, c1]`
pub fn apply_matrix(matrix: &GateMatrix, state: &AmplitudePair) -> AmplitudePair {
    let [psi_0, psi_1] = state.as_column();
    AmplitudePair::new(
        matrix[0][0] * psi_0 + matrix[0][1] * psi_1,
        matrix[1][0] * psi_0 + matrix[1][1] * psi_1,
    )
}
