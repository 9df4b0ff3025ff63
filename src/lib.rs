// src/lib.rs

//! `qsphere` - An interactive single-qubit simulator
//!
//! This library validates a user-supplied qubit state, evolves it through
//! single-qubit gates, keeps an undoable history of every step, projects
//! each state onto the Bloch sphere, and measures with seeded randomness.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod measurement;
pub mod animation;

// Re-export the most common types for easier top-level use
pub use core::{AmplitudePair, Axis, BlochVector, GateLabel, Outcome, QsphereError};
pub use operations::apply_gate;
pub use circuits::{CircuitHistory, HistoryEntry};
pub use simulation::{
    MeasurePolicy,
    MeasurementResult,
    Probabilities,
    Session,
    SessionConfig,
    SessionPhase,
    ShotCounts,
};
pub use validation::{check_normalization, validate_input, validate_text};
pub use animation::Orientation;

// Example 1: Validate, apply gates, undo
// Walks the |0> state through X then H and steps back once.
/// ```
/// use qsphere::{BlochVector, GateLabel, QsphereError, Session};
///
/// fn main() -> Result<(), QsphereError> {
///     let mut session = Session::new();
///     session.validate_and_initialize(1.0, 0.0, 0.0, 0.0)?;
///
///     let after_x = session.apply_gate(GateLabel::X)?;
///     assert_eq!(after_x.vector, BlochVector::new(0.0, 0.0, -1.0));
///
///     let after_h = session.apply_gate(GateLabel::H)?;
///     assert_eq!(after_h.vector, BlochVector::new(-1.0, 0.0, 0.0));
///     println!("{}", session.history());
///
///     let restored = session.undo()?;
///     assert_eq!(restored.map(|e| e.vector), Some(BlochVector::new(0.0, 0.0, -1.0)));
///     assert_eq!(session.history().gate_sequence(), vec![GateLabel::X]);
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Seeded measurement
// A fixed seed makes the collapse reproducible; the probability chart reads
// the pre-measurement distribution back from the session.
/// ```
/// use qsphere::{QsphereError, Session, SessionConfig};
///
/// fn main() -> Result<(), QsphereError> {
///     let config = SessionConfig::builder().seed(42).build();
///     let mut session = Session::with_config(config);
///     session.validate_and_initialize(0.6, 0.0, 0.8, 0.0)?;
///
///     let result = session.measure()?;
///     println!("Collapsed to {}", result.outcome);
///     assert!((session.probabilities().p0 - 0.36).abs() < 1e-9);
///     assert_eq!(session.latest().map(|e| e.state), Some(result.outcome.basis_state()));
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = ();

// Example 3: Rejected input
/// ```
/// use qsphere::{QsphereError, Session};
///
/// let mut session = Session::new();
/// let rejected = session.validate_and_initialize(0.5, 0.0, 0.5, 0.0);
/// assert!(matches!(rejected, Err(QsphereError::Validation { .. })));
/// assert!(!session.gates_enabled());
/// assert!(session.history().is_empty());
/// ```
#[doc(hidden)]
const _: () = ();
