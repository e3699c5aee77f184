//! The call executor: descend into the callee, consume no steps.

use super::{BlockRef, DefExec, Executor, NextStep};
use pikto_ir::{Construct, ConstructId, Program};

/// Enters a subroutine body.
///
/// A call is pure control transfer: the first `prepare_next` descends
/// straight into a fresh executor for the resolved target's body, the
/// second reports finished. No `do_step` ever runs on it, so calling a
/// subroutine is free in visible steps - only the callee's own actions
/// and condition checks count.
#[derive(Debug)]
pub(crate) struct CallExec {
    id: ConstructId,
    entered: bool,
}

impl CallExec {
    pub(crate) fn new(id: ConstructId) -> Self {
        CallExec { id, entered: false }
    }

    pub(crate) fn prepare_next(&mut self, program: &Program) -> NextStep {
        if self.entered {
            return NextStep::Finished;
        }
        self.entered = true;

        let target = match program.construct(self.id) {
            Construct::Call(call) => call.target,
            other => unreachable!("call executor on {other:?}"),
        };
        match target {
            Some(def) => NextStep::Descend(Executor::Def(DefExec::new(BlockRef::DefBody(def)))),
            // Readiness forbids unresolved calls in a running program.
            None => unreachable!("unresolved call reached execution"),
        }
    }

    pub(crate) fn construct(&self) -> ConstructId {
        self.id
    }
}
