//! Constructs and blocks.
//!
//! A `Construct` is one node of the program tree. A `Block` is an ordered
//! sequence of *optional* construct slots - an empty slot is an unfilled
//! command placeholder in the editor, and a block never has zero slots.
//!
//! Editing operations follow the same contract as the grid: out-of-range
//! indices are silently ignored. The editor drives these with indices it
//! just rendered, so a miss is a stale-view artifact, not an error worth
//! surfacing.

use crate::arena::{ConstructId, DefId};
use super::expr::BoolExpr;
use super::operators::ActionKind;

/// One node of the program tree.
///
/// A closed sum - the evaluator, readiness check, executor factory, and
/// serializer all match exhaustively on it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Construct {
    /// A single robot action.
    Action(ActionKind),
    /// A subroutine call.
    Call(CallStmt),
    /// A multi-branch conditional.
    If(IfStmt),
    /// A condition-guarded loop.
    Loop(LoopStmt),
}

/// A subroutine call.
///
/// The target is by identity (`DefId`), set when the author picks a
/// subroutine or by the snapshot loader's resolution pass. An unset target
/// keeps the program not-ready; the engine never sees one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CallStmt {
    pub target: Option<DefId>,
}

impl CallStmt {
    /// A call with no target chosen yet.
    pub const fn unset() -> Self {
        CallStmt { target: None }
    }

    /// A call to `target`.
    pub const fn to(target: DefId) -> Self {
        CallStmt {
            target: Some(target),
        }
    }
}

/// One `(condition, block)` arm of an `If`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct IfPart {
    pub cond: Option<BoolExpr>,
    pub block: Block,
}

impl IfPart {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A multi-branch conditional: ordered arms plus an optional else-block.
///
/// Invariant: `parts` is never empty. Removing the last arm replaces it
/// with a fresh empty one.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfStmt {
    pub parts: Vec<IfPart>,
    pub else_block: Option<Block>,
}

impl IfStmt {
    pub fn new() -> Self {
        IfStmt {
            parts: vec![IfPart::new()],
            else_block: None,
        }
    }

    /// Insert a fresh arm at `n` (clamped to the end).
    pub fn add_part(&mut self, n: usize) {
        let at = n.min(self.parts.len());
        self.parts.insert(at, IfPart::new());
    }

    /// Remove the arm at `n`, keeping at least one arm.
    pub fn remove_part(&mut self, n: usize) {
        if n < self.parts.len() {
            self.parts.remove(n);
        }
        if self.parts.is_empty() {
            self.parts.push(IfPart::new());
        }
    }
}

impl Default for IfStmt {
    fn default() -> Self {
        Self::new()
    }
}

/// A condition-guarded loop.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LoopStmt {
    pub cond: Option<BoolExpr>,
    pub body: Block,
}

impl LoopStmt {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An ordered sequence of optional construct slots.
///
/// Invariant: never empty. A freshly created block has one empty slot, and
/// removing the last slot leaves one empty slot behind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    slots: Vec<Option<ConstructId>>,
}

impl Block {
    /// A block with a single empty slot.
    pub fn new() -> Self {
        Block { slots: vec![None] }
    }

    /// Number of slots (always at least one).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The construct filling slot `n`, if any.
    ///
    /// Returns `None` both for an empty slot and for an out-of-range index.
    pub fn slot(&self, n: usize) -> Option<ConstructId> {
        self.slots.get(n).copied().flatten()
    }

    /// Iterate over the slots in order.
    pub fn slots(&self) -> impl Iterator<Item = Option<ConstructId>> + '_ {
        self.slots.iter().copied()
    }

    /// Insert an empty slot at `n` (clamped to the end).
    pub fn add(&mut self, n: usize) {
        let at = n.min(self.slots.len());
        self.slots.insert(at, None);
    }

    /// Remove slot `n`, keeping at least one slot.
    pub fn remove(&mut self, n: usize) {
        if n < self.slots.len() {
            self.slots.remove(n);
        }
        if self.slots.is_empty() {
            self.slots.push(None);
        }
    }

    /// Fill (or clear, with `None`) slot `n`. Out-of-range is ignored.
    pub fn set(&mut self, n: usize, construct: Option<ConstructId>) {
        if let Some(slot) = self.slots.get_mut(n) {
            *slot = construct;
        }
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_has_one_empty_slot() {
        let block = Block::new();
        assert_eq!(block.slot_count(), 1);
        assert_eq!(block.slot(0), None);
    }

    #[test]
    fn removing_the_last_slot_leaves_one_empty_slot() {
        let mut block = Block::new();
        block.set(0, Some(ConstructId::new(7)));
        block.remove(0);
        assert_eq!(block.slot_count(), 1);
        assert_eq!(block.slot(0), None);
    }

    #[test]
    fn add_inserts_before_the_index() {
        let mut block = Block::new();
        block.set(0, Some(ConstructId::new(3)));
        block.add(0);
        assert_eq!(block.slot_count(), 2);
        assert_eq!(block.slot(0), None);
        assert_eq!(block.slot(1), Some(ConstructId::new(3)));
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let mut block = Block::new();
        block.set(5, Some(ConstructId::new(1)));
        block.remove(5);
        assert_eq!(block.slot_count(), 1);
        assert_eq!(block.slot(0), None);
    }

    #[test]
    fn if_keeps_at_least_one_part() {
        let mut stmt = IfStmt::new();
        stmt.remove_part(0);
        assert_eq!(stmt.parts.len(), 1);
        stmt.add_part(0);
        assert_eq!(stmt.parts.len(), 2);
        stmt.remove_part(1);
        stmt.remove_part(0);
        assert_eq!(stmt.parts.len(), 1);
    }
}
