//! Executors: suspendable per-construct execution state.
//!
//! One `Executor` exists for each construct the run is currently inside,
//! stacked in the [`crate::Engine`]. The contract has two halves:
//!
//! - [`Executor::prepare_next`] - pure bookkeeping; reports whether this
//!   executor wants an effectful step ([`NextStep::Ready`]), has no more
//!   work ([`NextStep::Finished`]), or needs control to recurse into a
//!   freshly created child ([`NextStep::Descend`]).
//! - [`Executor::do_step`] - exactly one effectful unit of work: perform
//!   an action, or evaluate a condition and pick where control goes.
//!
//! Executors never hold references into the program - blocks are
//! addressed by [`BlockRef`] and resolved against the engine's snapshot on
//! every call, which keeps the stack an ordinary owned value.
//!
//! # Module Structure
//!
//! - `action`: the single-step action executor
//! - `call`: subroutine-call entry (descends, consumes no step)
//! - `control`: `if` and `loop` executors

mod action;
mod call;
mod control;

use crate::errors::RunError;
use pikto_grid::{Grid, Position};
use pikto_ir::{Block, Construct, ConstructId, DefId, Program};

pub(crate) use action::ActionExec;
pub(crate) use call::CallExec;
pub(crate) use control::{IfExec, LoopExec};

/// Outcome of one `prepare_next` call.
pub(crate) enum NextStep {
    /// The executor's own `do_step` should run next.
    Ready,
    /// This construct has no more work; pop it.
    Finished,
    /// Control must recurse into this freshly created child.
    Descend(Executor),
}

/// Run-time address of a block inside the engine's program snapshot.
///
/// Resolved on every use instead of borrowed, so executors stay `'static`
/// owned values on the stack.
#[derive(Copy, Clone, Debug)]
pub(crate) enum BlockRef {
    /// The entry point's body.
    MainBody,
    /// The body of a named subroutine.
    DefBody(DefId),
    /// The block of one `(condition, block)` arm of an `If`.
    IfArm { id: ConstructId, part: usize },
    /// The else-block of an `If`.
    ElseArm(ConstructId),
    /// A loop body.
    LoopBody(ConstructId),
}

impl BlockRef {
    /// Resolve against the program snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the address does not name a block - executors only
    /// construct addresses for constructs they just inspected, so a miss
    /// is an engine bug.
    pub(crate) fn resolve(self, program: &Program) -> &Block {
        match self {
            BlockRef::MainBody => &program.main.body,
            BlockRef::DefBody(def) => &program.def(def).body,
            BlockRef::IfArm { id, part } => match program.construct(id) {
                Construct::If(stmt) => &stmt.parts[part].block,
                other => unreachable!("if-arm address into {other:?}"),
            },
            BlockRef::ElseArm(id) => match program.construct(id) {
                Construct::If(stmt) => match &stmt.else_block {
                    Some(block) => block,
                    None => unreachable!("else-arm address into an if without else"),
                },
                other => unreachable!("else-arm address into {other:?}"),
            },
            BlockRef::LoopBody(id) => match program.construct(id) {
                Construct::Loop(stmt) => &stmt.body,
                other => unreachable!("loop-body address into {other:?}"),
            },
        }
    }
}

/// Cursor over a block's slots.
///
/// Owned by def, if, and loop executors; yields one child executor per
/// filled slot, in order.
#[derive(Debug)]
pub(crate) struct BlockExec {
    block: BlockRef,
    cursor: usize,
}

impl BlockExec {
    pub(crate) fn new(block: BlockRef) -> Self {
        BlockExec { block, cursor: 0 }
    }

    pub(crate) fn prepare_next(&mut self, program: &Program) -> NextStep {
        let block = self.block.resolve(program);
        if self.cursor >= block.slot_count() {
            return NextStep::Finished;
        }
        let slot = block.slot(self.cursor);
        self.cursor += 1;
        match slot {
            Some(id) => NextStep::Descend(Executor::for_construct(id, program)),
            // Readiness forbids empty slots in a running program.
            None => unreachable!("empty block slot reached execution"),
        }
    }
}

/// Executor for a subroutine body (the entry point included).
///
/// A thin wrapper over its block cursor; it is never the target of
/// `do_step` - a def has no effectful behavior of its own.
#[derive(Debug)]
pub(crate) struct DefExec {
    body: BlockExec,
}

impl DefExec {
    pub(crate) fn new(body: BlockRef) -> Self {
        DefExec {
            body: BlockExec::new(body),
        }
    }

    fn prepare_next(&mut self, program: &Program) -> NextStep {
        self.body.prepare_next(program)
    }
}

/// One construct's suspendable execution state.
///
/// A closed enum with direct match dispatch - the run-time mirror of
/// [`pikto_ir::Construct`], plus the def wrapper for subroutine bodies.
#[derive(Debug)]
pub(crate) enum Executor {
    Action(ActionExec),
    Call(CallExec),
    If(IfExec),
    Loop(LoopExec),
    Def(DefExec),
}

impl Executor {
    /// Create the executor for a construct.
    pub(crate) fn for_construct(id: ConstructId, program: &Program) -> Executor {
        match program.construct(id) {
            Construct::Action(_) => Executor::Action(ActionExec::new(id)),
            Construct::Call(_) => Executor::Call(CallExec::new(id)),
            Construct::If(_) => Executor::If(IfExec::new(id)),
            Construct::Loop(_) => Executor::Loop(LoopExec::new(id)),
        }
    }

    /// Pure bookkeeping: where does control go next?
    pub(crate) fn prepare_next(&mut self, program: &Program) -> NextStep {
        match self {
            Executor::Action(exec) => exec.prepare_next(),
            Executor::Call(exec) => exec.prepare_next(program),
            Executor::If(exec) => exec.prepare_next(program),
            Executor::Loop(exec) => exec.prepare_next(program),
            Executor::Def(exec) => exec.prepare_next(program),
        }
    }

    /// One effectful unit of work.
    ///
    /// Only executors that just reported [`NextStep::Ready`] are stepped;
    /// calls and defs never do (they only descend).
    pub(crate) fn do_step(
        &mut self,
        program: &Program,
        grid: &mut Grid,
        robot: &mut Position,
    ) -> Result<(), RunError> {
        match self {
            Executor::Action(exec) => exec.do_step(program, grid, robot),
            Executor::If(exec) => exec.do_step(program, grid, robot),
            Executor::Loop(exec) => exec.do_step(program, grid, robot),
            Executor::Call(_) | Executor::Def(_) => {
                unreachable!("call/def executors have no effectful step")
            }
        }
    }

    /// The construct this executor runs, for highlighting.
    ///
    /// `None` for def bodies - they have no construct node of their own.
    pub(crate) fn construct(&self) -> Option<ConstructId> {
        match self {
            Executor::Action(exec) => Some(exec.construct()),
            Executor::Call(exec) => Some(exec.construct()),
            Executor::If(exec) => Some(exec.construct()),
            Executor::Loop(exec) => Some(exec.construct()),
            Executor::Def(_) => None,
        }
    }
}
