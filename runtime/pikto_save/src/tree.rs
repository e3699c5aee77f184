//! The snapshot tree types.
//!
//! One serde enum covers every node kind, internally tagged with `kind`,
//! so the on-disk shape is self-describing:
//!
//! ```json
//! {
//!   "main": { "kind": "def", "name": "program", "body": [
//!     { "kind": "loop",
//!       "cond": { "op": "can_north", "left": null, "right": null },
//!       "body": [ { "kind": "action", "action": "move_north" } ] },
//!     null
//!   ] },
//!   "defs": []
//! }
//! ```
//!
//! Position validity (defs only at the top level, `ifpart` only inside
//! `cond` parts) is enforced by the decoder, not the type - keeping the
//! enum uniform keeps the tag set exact.

use pikto_ir::{ActionKind, BoolExpr};
use serde::{Deserialize, Serialize};

/// A block's slots: `null` for an unfilled slot, preserving position.
pub type SaveBlock = Vec<Option<SaveNode>>;

/// One node of the snapshot tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SaveNode {
    /// A robot action.
    #[serde(rename = "action")]
    Action { action: ActionKind },

    /// A subroutine call; the target is the callee's *name* (`null` when
    /// unset or the callee is unnamed).
    #[serde(rename = "call")]
    Call { target: Option<String> },

    /// A conditional: `ifpart` nodes plus an optional else-block.
    #[serde(rename = "cond")]
    If {
        parts: Vec<SaveNode>,
        else_block: Option<SaveBlock>,
    },

    /// One `(condition, block)` arm of a conditional.
    #[serde(rename = "ifpart")]
    IfPart {
        cond: Option<BoolExpr>,
        block: SaveBlock,
    },

    /// A condition-guarded loop.
    #[serde(rename = "loop")]
    Loop {
        cond: Option<BoolExpr>,
        body: SaveBlock,
    },

    /// A subroutine (or the entry point).
    #[serde(rename = "def")]
    Def {
        name: Option<String>,
        body: SaveBlock,
    },
}

impl SaveNode {
    /// The node's tag, for error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Action { .. } => "action",
            Self::Call { .. } => "call",
            Self::If { .. } => "cond",
            Self::IfPart { .. } => "ifpart",
            Self::Loop { .. } => "loop",
            Self::Def { .. } => "def",
        }
    }
}

/// A whole-program snapshot: the entry point and the named subroutines.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveProgram {
    pub main: SaveNode,
    pub defs: Vec<SaveNode>,
}
