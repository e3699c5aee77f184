//! Boolean condition trees.
//!
//! A `BoolExpr` is a binary tree over [`BoolOp`]. While the author is still
//! assembling a condition, required children may be absent - that is a
//! valid representation state, not an error. Evaluation (in `pikto_eval`)
//! is the only place where absence becomes a failure, and the readiness
//! check keeps incomplete conditions from ever reaching it.

use super::operators::BoolOp;

/// A boolean condition node.
///
/// `Not` uses only the `right` child; `And`/`Or` use both; grid-query
/// leaves use neither.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "save", derive(serde::Serialize, serde::Deserialize))]
pub struct BoolExpr {
    pub op: BoolOp,
    pub left: Option<Box<BoolExpr>>,
    pub right: Option<Box<BoolExpr>>,
}

impl BoolExpr {
    /// A childless node for any operator.
    ///
    /// This is how the editor materializes an operator the author just
    /// picked: connectives start with empty child slots.
    pub const fn bare(op: BoolOp) -> Self {
        BoolExpr {
            op,
            left: None,
            right: None,
        }
    }

    /// A grid-query leaf.
    pub const fn leaf(op: BoolOp) -> Self {
        Self::bare(op)
    }

    /// A negation of `operand`.
    pub fn negate(operand: BoolExpr) -> Self {
        BoolExpr {
            op: BoolOp::Not,
            left: None,
            right: Some(Box::new(operand)),
        }
    }

    /// A conjunction.
    pub fn and(left: BoolExpr, right: BoolExpr) -> Self {
        Self::binary(BoolOp::And, left, right)
    }

    /// A disjunction.
    pub fn or(left: BoolExpr, right: BoolExpr) -> Self {
        Self::binary(BoolOp::Or, left, right)
    }

    fn binary(op: BoolOp, left: BoolExpr, right: BoolExpr) -> Self {
        BoolExpr {
            op,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Whether every operator in the tree has all the children its arity
    /// requires.
    ///
    /// Children beyond the arity (a leaf with a stale child left over from
    /// re-picking the operator) do not affect completeness - they are
    /// ignored by evaluation too.
    pub fn is_complete(&self) -> bool {
        match self.op.arity() {
            0 => true,
            1 => self.right.as_deref().is_some_and(BoolExpr::is_complete),
            _ => {
                self.left.as_deref().is_some_and(BoolExpr::is_complete)
                    && self.right.as_deref().is_some_and(BoolExpr::is_complete)
            }
        }
    }
}
