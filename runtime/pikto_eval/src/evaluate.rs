//! Boolean-condition evaluation.

use crate::errors::{self, RunError};
use pikto_grid::{Grid, Position};
use pikto_ir::{BoolExpr, BoolOp};

/// Evaluate a condition at a robot position against a grid.
///
/// Total for complete expressions; an absent expression, or an absent
/// required operand anywhere in the tree, fails with
/// [`crate::RunErrorKind::IncompleteCondition`]. The readiness check keeps
/// such conditions out of running programs, so callers inside the engine
/// treat that failure as an invariant violation.
///
/// `And`/`Or` evaluate the left operand first and always evaluate both -
/// expressions are side-effect-free, so nothing may rely on short-circuit
/// order.
pub fn evaluate(cond: Option<&BoolExpr>, at: Position, grid: &Grid) -> Result<bool, RunError> {
    let Some(expr) = cond else {
        return Err(errors::incomplete_condition());
    };
    match expr.op {
        BoolOp::CanNorth => Ok(grid.can_north(at.x, at.y)),
        BoolOp::CanSouth => Ok(grid.can_south(at.x, at.y)),
        BoolOp::CanEast => Ok(grid.can_east(at.x, at.y)),
        BoolOp::CanWest => Ok(grid.can_west(at.x, at.y)),
        BoolOp::Painted => Ok(grid.painted(at.x, at.y)),
        BoolOp::Not => Ok(!evaluate(expr.right.as_deref(), at, grid)?),
        BoolOp::And => {
            let left = evaluate(expr.left.as_deref(), at, grid)?;
            let right = evaluate(expr.right.as_deref(), at, grid)?;
            Ok(left && right)
        }
        BoolOp::Or => {
            let left = evaluate(expr.left.as_deref(), at, grid)?;
            let right = evaluate(expr.right.as_deref(), at, grid)?;
            Ok(left || right)
        }
    }
}
