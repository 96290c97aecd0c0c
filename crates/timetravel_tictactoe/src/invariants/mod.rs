//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every transition.
//! The transition contracts check them as postconditions, and each one can
//! be tested on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(failed: impl IntoIterator<Item = Option<&'static str>>) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = failed
        .into_iter()
        .flatten()
        .map(InvariantViolation::new)
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn failure<S, I: Invariant<S>>(state: &S) -> Option<&'static str> {
    (!I::holds(state)).then(I::description)
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([
            failure::<S, I1>(state),
            failure::<S, I2>(state),
            failure::<S, I3>(state),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([failure::<S, I1>(state), failure::<S, I2>(state)])
    }
}

pub mod history_consistent;
pub mod monotonic_fill;
pub mod step_in_range;

pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_fill::MonotonicFillInvariant;
pub use step_in_range::StepInRangeInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    StepInRangeInvariant,
    MonotonicFillInvariant,
    HistoryConsistentInvariant,
);
