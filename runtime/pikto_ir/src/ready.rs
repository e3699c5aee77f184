//! Readiness: the computed "can this run?" property.
//!
//! A program is ready when every def body is ready; a block is ready when
//! every slot is filled with a ready construct. Readiness is consulted by
//! the editor to gate the run button - the engine assumes it holds and
//! treats violations as caller bugs, so this check is the single place
//! where structural incompleteness is decided.

use crate::arena::ConstructId;
use crate::ast::{Block, BoolExpr, Construct};
use crate::program::Program;

impl Program {
    /// Whether every slot is filled, every call targeted, and every
    /// condition complete - across the entry point and all subroutines.
    pub fn is_ready(&self) -> bool {
        self.block_ready(&self.main.body) && self.defs().iter().all(|d| self.block_ready(&d.body))
    }

    fn block_ready(&self, block: &Block) -> bool {
        block
            .slots()
            .all(|slot| slot.is_some_and(|id| self.construct_ready(id)))
    }

    fn construct_ready(&self, id: ConstructId) -> bool {
        match self.construct(id) {
            Construct::Action(_) => true,
            Construct::Call(call) => call.target.is_some(),
            Construct::If(stmt) => {
                stmt.parts
                    .iter()
                    .all(|part| cond_ready(part.cond.as_ref()) && self.block_ready(&part.block))
                    && stmt
                        .else_block
                        .as_ref()
                        .is_none_or(|block| self.block_ready(block))
            }
            Construct::Loop(stmt) => {
                cond_ready(stmt.cond.as_ref()) && self.block_ready(&stmt.body)
            }
        }
    }
}

fn cond_ready(cond: Option<&BoolExpr>) -> bool {
    cond.is_some_and(BoolExpr::is_complete)
}
