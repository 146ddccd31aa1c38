//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every
//! applied move. They are testable independently and checked in
//! debug builds by [`assert_invariants`].

mod alternating_marks;
mod single_cell_growth;
mod step_in_bounds;

pub use alternating_marks::AlternatingMarksInvariant;
pub use single_cell_growth::SingleCellGrowthInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

use super::Game;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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
/// Implemented for 3-tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant the engine maintains.
pub type GameInvariants = (
    StepInBoundsInvariant,
    SingleCellGrowthInvariant,
    AlternatingMarksInvariant,
);

/// Checks [`GameInvariants`] in debug builds.
///
/// Violations are logged and then trip a `debug_assert!`.
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        for violation in &violations {
            error!(%violation, "Game invariant violated");
        }
        debug_assert!(violations.is_empty(), "{violations:?}");
    }
}
