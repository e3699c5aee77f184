//! The execution engine: an explicit executor stack stepped from outside.

use crate::errors::{self, RunError};
use crate::exec::{BlockRef, DefExec, Executor, NextStep};
use pikto_grid::{Grid, Position};
use pikto_ir::{ConstructId, Program};
use tracing::{debug, trace};

/// Executor stack depth cap.
///
/// Subroutines may call each other, including indirectly recursively, and
/// a call consumes no visible steps - so a call-only cycle would otherwise
/// spin the advance loop until memory ran out. At the cap the run fails
/// with [`crate::RunErrorKind::RecursionLimitExceeded`].
pub const MAX_STACK_DEPTH: usize = 1024;

/// A single run of a program on a grid.
///
/// Created by [`Engine::start`] with private deep copies of both - editing
/// the originals during a paused run cannot corrupt it. The caller drives
/// the run by calling [`Engine::step`] (a UI timer for auto-run, a button
/// for single-step) and polls the accessors for rendering. Dropping the
/// engine is cancellation; there is nothing asynchronous to wait for.
///
/// One `step` is exactly one effectful unit - an action or a condition
/// check - no matter how many structural levels the engine unwinds or
/// descends through to find it.
pub struct Engine {
    program: Program,
    grid: Grid,
    robot: Position,
    stack: Vec<Executor>,
    current: Option<ConstructId>,
    finished: bool,
    error: Option<RunError>,
}

impl Engine {
    /// Begin a run.
    ///
    /// Clones the program and grid, pushes the entry point, and advances
    /// to the first ready construct so [`Engine::current`] highlights it
    /// before any step runs.
    ///
    /// Callers gate on [`Program::is_ready`]; starting a non-ready program
    /// is a caller bug (debug-asserted, and empty slots or unresolved
    /// calls panic when execution reaches them).
    pub fn start(program: &Program, grid: &Grid, robot: Position) -> Engine {
        debug_assert!(program.is_ready(), "Engine::start on a non-ready program");
        let mut engine = Engine {
            program: program.clone(),
            grid: grid.clone(),
            robot,
            stack: vec![Executor::Def(DefExec::new(BlockRef::MainBody))],
            current: None,
            finished: false,
            error: None,
        };
        debug!(x = robot.x, y = robot.y, "run started");
        if let Err(error) = engine.advance() {
            engine.fail(error);
        }
        engine
    }

    /// Execute one visible step.
    ///
    /// No-op once the run is finished or failed. On an action failure the
    /// run freezes: `failed()` turns true, `current()` keeps pointing at
    /// the offending construct, and the robot stays where it was.
    pub fn step(&mut self) {
        if self.finished || self.error.is_some() {
            return;
        }
        let Some(top) = self.stack.last_mut() else {
            debug_assert!(false, "running engine with an empty stack");
            return;
        };
        let result = top.do_step(&self.program, &mut self.grid, &mut self.robot);
        trace!(ok = result.is_ok(), depth = self.stack.len(), "step");
        match result {
            Err(error) => self.fail(error),
            Ok(()) => {
                if let Err(error) = self.advance() {
                    self.fail(error);
                }
            }
        }
    }

    /// Unwind and descend until the next ready executor (or run end).
    ///
    /// Pops finished executors, pushes children to descend into - both
    /// free of step budget - and stops when the top of the stack is ready
    /// for its own `do_step`, updating the highlight.
    fn advance(&mut self) -> Result<(), RunError> {
        loop {
            let Some(top) = self.stack.last_mut() else {
                unreachable!("advance on an empty stack")
            };
            match top.prepare_next(&self.program) {
                NextStep::Finished => {
                    self.stack.pop();
                    trace!(depth = self.stack.len(), "pop");
                    if self.stack.is_empty() {
                        self.current = None;
                        self.finished = true;
                        debug!("run finished");
                        return Ok(());
                    }
                }
                NextStep::Descend(child) => {
                    if self.stack.len() >= MAX_STACK_DEPTH {
                        return Err(errors::recursion_limit_exceeded(MAX_STACK_DEPTH));
                    }
                    self.stack.push(child);
                    trace!(depth = self.stack.len(), "descend");
                }
                NextStep::Ready => {
                    self.current = self.stack.last().and_then(Executor::construct);
                    return Ok(());
                }
            }
        }
    }

    fn fail(&mut self, error: RunError) {
        debug!(%error, "run failed");
        self.error = Some(error);
    }

    // Accessors for the rendering layer.

    /// The construct to highlight: the one whose effectful step runs next
    /// (or just failed). `None` before the first advance completes and
    /// after the run finishes.
    pub fn current(&self) -> Option<ConstructId> {
        self.current
    }

    /// Whether the run completed normally.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Whether the run froze on a failure.
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    /// The failure that froze the run, if any.
    pub fn error(&self) -> Option<&RunError> {
        self.error.as_ref()
    }

    /// The robot's current cell.
    pub fn robot_position(&self) -> Position {
        self.robot
    }

    /// Read-only view of the run-time grid, for rendering paint progress.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The constructs the run is currently inside, outermost first.
    ///
    /// Lets the editor mark an in-progress call chain (every call on the
    /// stack, not just the innermost highlighted construct).
    pub fn active_constructs(&self) -> impl Iterator<Item = ConstructId> + '_ {
        self.stack.iter().filter_map(Executor::construct)
    }
}
