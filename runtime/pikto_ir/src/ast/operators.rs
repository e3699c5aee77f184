//! Action and Boolean-Operator Vocabularies
//!
//! The language is deliberately tiny: five robot actions and eight boolean
//! primitives. Both enums are closed - every consumer matches exhaustively,
//! so adding a variant is a compile-time event across the workspace.

/// The five robot actions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "save", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "save", serde(rename_all = "snake_case"))]
pub enum ActionKind {
    MoveNorth,
    MoveSouth,
    MoveEast,
    MoveWest,
    Paint,
}

impl ActionKind {
    /// Human-readable label for this action.
    ///
    /// Used in runtime error messages ("blocked: move north at (0, 0)").
    pub const fn label(self) -> &'static str {
        match self {
            Self::MoveNorth => "move north",
            Self::MoveSouth => "move south",
            Self::MoveEast => "move east",
            Self::MoveWest => "move west",
            Self::Paint => "paint",
        }
    }
}

/// Boolean-expression operators.
///
/// The first five are grid queries (leaves); `Not` takes its single operand
/// in the *right* child; `And`/`Or` take both.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "save", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "save", serde(rename_all = "snake_case"))]
pub enum BoolOp {
    CanNorth,
    CanSouth,
    CanEast,
    CanWest,
    Painted,
    Not,
    And,
    Or,
}

impl BoolOp {
    /// Number of child expressions this operator requires.
    pub const fn arity(self) -> usize {
        match self {
            Self::CanNorth | Self::CanSouth | Self::CanEast | Self::CanWest | Self::Painted => 0,
            Self::Not => 1,
            Self::And | Self::Or => 2,
        }
    }

    /// Human-readable label for this operator.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CanNorth => "clear to the north",
            Self::CanSouth => "clear to the south",
            Self::CanEast => "clear to the east",
            Self::CanWest => "clear to the west",
            Self::Painted => "painted",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}
