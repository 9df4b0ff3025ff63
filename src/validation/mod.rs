// src/validation/mod.rs

//! Validation of raw amplitude input and of stored states.

use crate::core::{AmplitudePair, QsphereError, INPUT_TOLERANCE, NORM_TOLERANCE};

/// `a² + b² + c² + d²`, i.e. `|c0|² + |c1|²` for `c0 = a+bi`, `c1 = c+di`.
pub fn normalization_sum(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * a + b * b + c * c + d * d
}

/// Parses one input field. Text that is not a number becomes NaN so that it
/// fails the tolerance check instead of raising a separate error.
pub fn parse_component(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Validates raw input and builds the initial state.
///
/// The input is accepted when `|sum − 1| ≤ tolerance` (default 0.01). An
/// accepted pair is rescaled to unit norm so that every state kept in a
/// history satisfies the tighter norm invariant.
///
/// # Returns
/// * `Ok(AmplitudePair)` normalized to `|c0|² + |c1|² = 1`.
/// * `Err(QsphereError::Validation)` carrying the sum (NaN for non-numeric input).
pub fn validate_input(a: f64, b: f64, c: f64, d: f64, tolerance: Option<f64>) -> Result<AmplitudePair, QsphereError> {
    let effective_tolerance = tolerance.unwrap_or(INPUT_TOLERANCE);
    let sum = normalization_sum(a, b, c, d);

    // NaN compares false here, which is what rejects non-numeric input
    let within = (sum - 1.0).abs() <= effective_tolerance;
    let normalized = if within {
        AmplitudePair::from_parts(a, b, c, d).normalized()
    } else {
        None
    };

    match normalized {
        Some(state) => {
            log::info!(target: "qsphere::validation", "Input accepted. Sum: {}", sum);
            Ok(state)
        }
        None => {
            log::info!(target: "qsphere::validation", "Input rejected. Sum: {}", sum);
            Err(QsphereError::Validation { sum, tolerance: effective_tolerance })
        }
    }
}

/// Validates the four text fields of the input form (`a`, `b`, `c`, `d`).
pub fn validate_text(fields: [&str; 4], tolerance: Option<f64>) -> Result<AmplitudePair, QsphereError> {
    let [a, b, c, d] = fields.map(parse_component);
    validate_input(a, b, c, d, tolerance)
}

/// Checks if the state is normalized (`|c0|² + |c1|² ≈ 1`).
///
/// # Arguments
/// * `state` - The `AmplitudePair` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-6.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QsphereError::Instability)` if normalization fails.
pub fn check_normalization(state: &AmplitudePair, tolerance: Option<f64>) -> Result<(), QsphereError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance || !norm_sq.is_finite() {
        Err(QsphereError::Instability {
            message: format!("State normalization failed. |c0|^2 + |c1|^2 = {} (Deviation > {})", norm_sq, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exact_basis_state() -> Result<(), QsphereError> {
        let state = validate_input(1.0, 0.0, 0.0, 0.0, None)?;
        assert_eq!(state, AmplitudePair::zero_state());
        Ok(())
    }

    #[test]
    fn test_accepts_within_tolerance_and_normalizes() -> Result<(), QsphereError> {
        // 0.707² * 2 = 0.999698
        let state = validate_input(0.707, 0.0, 0.707, 0.0, None)?;
        assert!((state.norm_sqr() - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_tolerance_boundary() {
        assert!(validate_input(1.004987, 0.0, 0.0, 0.0, None).is_ok()); // sum ≈ 1.00999
        assert!(validate_input(1.006, 0.0, 0.0, 0.0, None).is_err()); // sum ≈ 1.012
        assert!(validate_input(1.006, 0.0, 0.0, 0.0, Some(0.02)).is_ok());
    }

    #[test]
    fn test_rejects_unnormalized_input() {
        match validate_input(0.2, 0.0, 0.707, 0.0, None) {
            Err(QsphereError::Validation { sum, tolerance }) => {
                assert!((sum - 0.539849).abs() < 1e-9);
                assert_eq!(tolerance, INPUT_TOLERANCE);
            }
            other => panic!("expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        match validate_text(["abc", "0", "0", "0"], None) {
            Err(QsphereError::Validation { sum, .. }) => assert!(sum.is_nan()),
            other => panic!("expected Validation error, got {:?}", other),
        }
        assert!(validate_text(["", "", "", ""], None).is_err());
        assert!(validate_text([" 1 ", "0", "0.0", "0"], None).is_ok());
    }

    #[test]
    fn test_check_normalization() {
        assert!(check_normalization(&AmplitudePair::one_state(), None).is_ok());
        let off = AmplitudePair::from_parts(0.7, 0.0, 0.7, 0.0);
        assert!(matches!(check_normalization(&off, None), Err(QsphereError::Instability { .. })));
        assert!(check_normalization(&off, Some(0.05)).is_ok());
    }
}
