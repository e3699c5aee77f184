//! Runtime error types for the engine.
//!
//! Factory functions (e.g. [`blocked`]) are the way errors are built -
//! they populate both the structured kind and the display message.
//!
//! Only [`RunErrorKind::Blocked`] is a user-facing runtime condition; the
//! other kinds report violated caller invariants (the readiness gate was
//! bypassed, or recursion ran away). None of them unwind: every error is
//! carried to the caller through [`crate::Engine::failed`] /
//! [`crate::Engine::error`].

use pikto_grid::Position;
use pikto_ir::ActionKind;
use std::fmt;

/// Typed category for a run failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunErrorKind {
    /// A movement action was blocked by a wall or the boundary.
    ///
    /// The sole user-recoverable runtime failure: the run freezes on the
    /// offending action for visual diagnosis, the robot does not move.
    Blocked {
        action: ActionKind,
        at: Position,
    },

    /// The executor stack hit [`crate::MAX_STACK_DEPTH`].
    ///
    /// Subroutines may call each other with no cycle check; the cap turns
    /// runaway recursion into a reportable failure instead of memory
    /// exhaustion.
    RecursionLimitExceeded {
        limit: usize,
    },

    /// A condition with an absent expression (or absent operand) was
    /// evaluated.
    ///
    /// The readiness check excludes incomplete conditions before a run can
    /// start, so seeing this means the gate was bypassed - a caller bug,
    /// not a program-author error.
    IncompleteCondition,
}

impl fmt::Display for RunErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked { action, at } => {
                write!(f, "blocked: {} at ({}, {})", action.label(), at.x, at.y)
            }
            Self::RecursionLimitExceeded { limit } => {
                write!(f, "recursion limit exceeded at {limit} frames")
            }
            Self::IncompleteCondition => {
                write!(f, "evaluated an incomplete condition (readiness gate bypassed)")
            }
        }
    }
}

/// A run failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunError {
    /// Structured category, for programmatic matching.
    pub kind: RunErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
}

impl RunError {
    fn from_kind(kind: RunErrorKind) -> Self {
        let message = kind.to_string();
        RunError { kind, message }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RunError {}

/// A movement action hit a wall or the boundary.
pub fn blocked(action: ActionKind, at: Position) -> RunError {
    RunError::from_kind(RunErrorKind::Blocked { action, at })
}

/// The executor stack outgrew `limit` frames.
pub fn recursion_limit_exceeded(limit: usize) -> RunError {
    RunError::from_kind(RunErrorKind::RecursionLimitExceeded { limit })
}

/// An absent condition (or operand) reached evaluation.
pub fn incomplete_condition() -> RunError {
    RunError::from_kind(RunErrorKind::IncompleteCondition)
}
