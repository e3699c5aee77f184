//! The action executor: one effectful step, then finished.

use super::NextStep;
use crate::errors::{self, RunError};
use pikto_grid::{Grid, Position};
use pikto_ir::{ActionKind, Construct, ConstructId, Program};

/// Executes a single robot action.
#[derive(Debug)]
pub(crate) struct ActionExec {
    id: ConstructId,
    completed: bool,
}

impl ActionExec {
    pub(crate) fn new(id: ConstructId) -> Self {
        ActionExec {
            id,
            completed: false,
        }
    }

    pub(crate) fn prepare_next(&mut self) -> NextStep {
        if self.completed {
            NextStep::Finished
        } else {
            NextStep::Ready
        }
    }

    /// Attempt the action at the robot's position.
    ///
    /// Movement tests the grid's adjacency first: on success the robot
    /// moves one cell, on a wall or boundary the step fails and the robot
    /// stays put. Painting always succeeds.
    pub(crate) fn do_step(
        &mut self,
        program: &Program,
        grid: &mut Grid,
        robot: &mut Position,
    ) -> Result<(), RunError> {
        let kind = match program.construct(self.id) {
            Construct::Action(kind) => *kind,
            other => unreachable!("action executor on {other:?}"),
        };
        self.completed = true;

        let blocked = |robot: &Position| errors::blocked(kind, *robot);
        match kind {
            ActionKind::MoveNorth => {
                if !grid.can_north(robot.x, robot.y) {
                    return Err(blocked(robot));
                }
                robot.y -= 1;
            }
            ActionKind::MoveSouth => {
                if !grid.can_south(robot.x, robot.y) {
                    return Err(blocked(robot));
                }
                robot.y += 1;
            }
            ActionKind::MoveEast => {
                if !grid.can_east(robot.x, robot.y) {
                    return Err(blocked(robot));
                }
                robot.x += 1;
            }
            ActionKind::MoveWest => {
                if !grid.can_west(robot.x, robot.y) {
                    return Err(blocked(robot));
                }
                robot.x -= 1;
            }
            ActionKind::Paint => {
                grid.set_painted(robot.x, robot.y, true);
            }
        }
        Ok(())
    }

    pub(crate) fn construct(&self) -> ConstructId {
        self.id
    }
}
