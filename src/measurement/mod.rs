// src/measurement/mod.rs

//! The measurement operator: probabilistic collapse of a state onto the
//! computational basis.
//!
//! `prob0 = |c0|²`, `prob1 = |c1|²`. One uniform sample `r ∈ [0, 1)` is drawn;
//! the outcome is |0⟩ when `r < prob0`, otherwise |1⟩. The randomness source
//! is always supplied by the caller so that tests can inject a seeded
//! generator.

use crate::core::{AmplitudePair, Outcome, QsphereError, NORM_TOLERANCE};
use crate::simulation::{MeasurementResult, Probabilities, ShotCounts};
use rand::Rng;

/// Computes the outcome distribution of `state`.
///
/// # Arguments
/// * `state` - The pair to measure.
/// * `tolerance` - Allowed deviation of `prob0 + prob1` from 1. Defaults to 1e-6.
///
/// # Returns
/// * `Ok(Probabilities)` when the amplitudes are finite and normalized.
/// * `Err(QsphereError::Measurement)` for a malformed state.
pub fn probabilities(state: &AmplitudePair, tolerance: Option<f64>) -> Result<Probabilities, QsphereError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    if !state.is_finite() {
        return Err(QsphereError::Measurement {
            message: format!("State {} has non-finite amplitudes", state),
        });
    }
    let p0 = state.c0().norm_sqr();
    let p1 = state.c1().norm_sqr();
    if ((p0 + p1) - 1.0).abs() > effective_tolerance {
        return Err(QsphereError::Measurement {
            message: format!("Outcome probabilities sum to {} (Deviation > {})", p0 + p1, effective_tolerance),
        });
    }
    Ok(Probabilities { p0, p1 })
}

/// Picks the outcome for one uniform sample `r ∈ [0, 1)`.
pub fn select_outcome(probabilities: &Probabilities, r: f64) -> Outcome {
    if r < probabilities.p0 { Outcome::Zero } else { Outcome::One }
}

/// Measures `state` once.
///
/// Every call may yield a different outcome for the same state. The caller
/// owns the collapse: the returned result names the basis state and the
/// pre-measurement distribution, `state` itself is untouched.
pub fn measure<R: Rng + ?Sized>(
    state: &AmplitudePair,
    tolerance: Option<f64>,
    rng: &mut R,
) -> Result<MeasurementResult, QsphereError> {
    let probabilities = probabilities(state, tolerance)?;
    let r: f64 = rng.random::<f64>(); // Sample in [0, 1)
    let outcome = select_outcome(&probabilities, r);
    log::info!(
        target: "qsphere::measure",
        "Measured {} with {} (r = {:.4})",
        outcome,
        probabilities,
        r
    );
    Ok(MeasurementResult { outcome, probabilities })
}

/// Takes `shots` independent measurements of fresh copies of `state`.
pub fn sample_shots<R: Rng + ?Sized>(
    state: &AmplitudePair,
    shots: usize,
    tolerance: Option<f64>,
    rng: &mut R,
) -> Result<ShotCounts, QsphereError> {
    let probabilities = probabilities(state, tolerance)?;
    let mut counts = ShotCounts::new();
    for _ in 0..shots {
        let r: f64 = rng.random();
        counts.record(select_outcome(&probabilities, r));
    }
    log::debug!(
        target: "qsphere::measure",
        "Sampled {} shots: {} zeros, {} ones",
        shots,
        counts.count(Outcome::Zero),
        counts.count(Outcome::One)
    );
    Ok(counts)
}
