//! Control-flow executors: `if` and `loop`.
//!
//! Both spend their own `do_step` on condition evaluation - that is what
//! makes a condition check a visible step the editor can highlight -
//! and afterwards delegate to a block cursor over the chosen body.

use super::{BlockExec, BlockRef, NextStep};
use crate::errors::RunError;
use crate::evaluate::evaluate;
use pikto_grid::{Grid, Position};
use pikto_ir::{Construct, ConstructId, Program};

/// Executes a multi-branch conditional.
#[derive(Debug)]
pub(crate) struct IfExec {
    id: ConstructId,
    checked: bool,
    branch: Option<BlockExec>,
}

impl IfExec {
    pub(crate) fn new(id: ConstructId) -> Self {
        IfExec {
            id,
            checked: false,
            branch: None,
        }
    }

    pub(crate) fn prepare_next(&mut self, program: &Program) -> NextStep {
        if !self.checked {
            return NextStep::Ready;
        }
        match &mut self.branch {
            // No arm matched and there is no else-block: nothing to run.
            None => NextStep::Finished,
            Some(branch) => branch.prepare_next(program),
        }
    }

    /// Evaluate the arm conditions in order and select the first true
    /// arm's block, the else-block if none matched, or no block at all.
    pub(crate) fn do_step(
        &mut self,
        program: &Program,
        grid: &mut Grid,
        robot: &mut Position,
    ) -> Result<(), RunError> {
        let stmt = match program.construct(self.id) {
            Construct::If(stmt) => stmt,
            other => unreachable!("if executor on {other:?}"),
        };

        self.branch = None;
        for (index, part) in stmt.parts.iter().enumerate() {
            if evaluate(part.cond.as_ref(), *robot, grid)? {
                self.branch = Some(BlockExec::new(BlockRef::IfArm {
                    id: self.id,
                    part: index,
                }));
                break;
            }
        }
        if self.branch.is_none() && stmt.else_block.is_some() {
            self.branch = Some(BlockExec::new(BlockRef::ElseArm(self.id)));
        }
        self.checked = true;
        Ok(())
    }

    pub(crate) fn construct(&self) -> ConstructId {
        self.id
    }
}

/// Executes a condition-guarded loop.
///
/// The condition check is a visible step before every iteration and once
/// more after the last one. Iterations never grow the engine stack: when
/// the body cursor finishes, the executor reports `Ready` again instead of
/// propagating the finish, which re-runs the condition on the next step.
#[derive(Debug)]
pub(crate) struct LoopExec {
    id: ConstructId,
    initial: bool,
    last_cond: bool,
    body: Option<BlockExec>,
}

impl LoopExec {
    pub(crate) fn new(id: ConstructId) -> Self {
        LoopExec {
            id,
            initial: true,
            last_cond: false,
            body: None,
        }
    }

    pub(crate) fn prepare_next(&mut self, program: &Program) -> NextStep {
        if self.initial {
            // Drive the first condition check.
            self.initial = false;
            return NextStep::Ready;
        }
        if !self.last_cond {
            return NextStep::Finished;
        }
        let body = match &mut self.body {
            Some(body) => body,
            None => unreachable!("loop delegating before its first condition check"),
        };
        match body.prepare_next(program) {
            // Body done: re-check the condition rather than finishing.
            NextStep::Finished => NextStep::Ready,
            next => next,
        }
    }

    /// Evaluate the loop condition once and start a fresh body pass.
    pub(crate) fn do_step(
        &mut self,
        program: &Program,
        grid: &mut Grid,
        robot: &mut Position,
    ) -> Result<(), RunError> {
        let stmt = match program.construct(self.id) {
            Construct::Loop(stmt) => stmt,
            other => unreachable!("loop executor on {other:?}"),
        };
        self.last_cond = evaluate(stmt.cond.as_ref(), *robot, grid)?;
        self.body = Some(BlockExec::new(BlockRef::LoopBody(self.id)));
        Ok(())
    }

    pub(crate) fn construct(&self) -> ConstructId {
        self.id
    }
}
