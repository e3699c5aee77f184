//! Stepped execution: step accounting, highlighting, failure freezing.

use super::{run_to_end, straight_line};
use crate::errors::RunErrorKind;
use crate::{Engine, MAX_STACK_DEPTH};
use pikto_grid::{Grid, Position};
use pikto_ir::{ActionKind, BoolExpr, BoolOp, CallStmt, Construct, IfStmt, LoopStmt, Program};
use pretty_assertions::assert_eq;

#[test]
fn straight_line_takes_one_step_per_action() {
    let (program, ids) = straight_line(&[
        ActionKind::MoveEast,
        ActionKind::MoveSouth,
        ActionKind::Paint,
    ]);
    assert!(program.is_ready());

    let grid = Grid::new(3, 3);
    let mut engine = Engine::start(&program, &grid, Position::new(0, 0));

    // Just before the nth step, the nth action is highlighted.
    for &id in &ids {
        assert_eq!(engine.current(), Some(id));
        engine.step();
    }

    assert!(engine.finished());
    assert!(!engine.failed());
    assert_eq!(engine.current(), None);
    assert_eq!(engine.robot_position(), Position::new(1, 1));
    assert!(engine.grid().painted(1, 1));
    assert!(!grid.painted(1, 1), "the editing grid is untouched");
}

#[test]
fn step_after_finish_is_a_no_op() {
    let (program, _) = straight_line(&[ActionKind::Paint]);
    let grid = Grid::new(2, 2);
    let mut engine = Engine::start(&program, &grid, Position::new(0, 0));
    engine.step();
    assert!(engine.finished());
    engine.step();
    assert!(engine.finished());
    assert!(!engine.failed());
}

#[test]
fn blocked_movement_freezes_the_run() {
    let (program, ids) = straight_line(&[ActionKind::MoveNorth]);
    let grid = Grid::new(2, 2);
    let mut engine = Engine::start(&program, &grid, Position::new(0, 0));

    engine.step();
    assert!(engine.failed());
    assert!(!engine.finished());
    assert_eq!(engine.robot_position(), Position::new(0, 0));
    assert_eq!(engine.current(), Some(ids[0]), "still on the offender");
    let expected = RunErrorKind::Blocked {
        action: ActionKind::MoveNorth,
        at: Position::new(0, 0),
    };
    assert_eq!(engine.error().map(|err| &err.kind), Some(&expected));

    // Frozen: further steps change nothing.
    engine.step();
    assert_eq!(engine.robot_position(), Position::new(0, 0));
    assert_eq!(engine.current(), Some(ids[0]));
}

/// `while (can north) { move north }` with k free cells performs k moves
/// and k + 1 condition checks - 2k + 1 steps - and the highlight
/// alternates between the loop and its body action.
#[test]
fn loop_walks_to_the_wall_and_stops() {
    let mut program = Program::new();
    let step_north = program.alloc(Construct::Action(ActionKind::MoveNorth));
    let mut stmt = LoopStmt::new();
    stmt.cond = Some(BoolExpr::leaf(BoolOp::CanNorth));
    stmt.body.set(0, Some(step_north));
    let walk = program.alloc(Construct::Loop(stmt));
    program.main.body.set(0, Some(walk));
    assert!(program.is_ready());

    let grid = Grid::new(1, 5);
    let mut engine = Engine::start(&program, &grid, Position::new(0, 4));

    let k = 4;
    for round in 0..k {
        assert_eq!(engine.current(), Some(walk), "check #{round}");
        engine.step(); // condition: true
        assert_eq!(engine.current(), Some(step_north));
        engine.step(); // move
    }
    assert_eq!(engine.current(), Some(walk), "final check");
    engine.step(); // condition: false
    assert!(engine.finished());
    assert!(!engine.failed());
    assert_eq!(engine.robot_position(), Position::new(0, 0));
}

/// Calling a subroutine consumes no visible steps - only the callee's
/// actions count.
#[test]
fn call_descends_for_free() {
    let mut program = Program::new();
    let def = program.add_def(0);
    program.def_mut(def).name = Some("go east".to_string());
    let move_east = program.alloc(Construct::Action(ActionKind::MoveEast));
    program.def_mut(def).body.set(0, Some(move_east));

    let call = program.alloc(Construct::Call(CallStmt::to(def)));
    let paint = program.alloc(Construct::Action(ActionKind::Paint));
    program.main.body.set(0, Some(call));
    program.main.body.add(1);
    program.main.body.set(1, Some(paint));
    assert!(program.is_ready());

    let grid = Grid::new(2, 1);
    let mut engine = Engine::start(&program, &grid, Position::new(0, 0));

    // The run begins inside the callee, with the call chain visible.
    assert_eq!(engine.current(), Some(move_east));
    assert_eq!(
        engine.active_constructs().collect::<Vec<_>>(),
        vec![call, move_east]
    );

    engine.step();
    assert_eq!(engine.robot_position(), Position::new(1, 0));
    assert_eq!(engine.current(), Some(paint));

    engine.step();
    assert!(engine.finished());
    assert!(engine.grid().painted(1, 0));
}

#[test]
fn if_runs_the_first_true_arm() {
    let program = if_can_east_else_paint();
    assert!(program.is_ready());
    let cond = match program.main.body.slot(0) {
        Some(id) => id,
        None => panic!("if statement missing"),
    };

    let grid = Grid::new(2, 1);
    let mut engine = Engine::start(&program, &grid, Position::new(0, 0));
    assert_eq!(engine.current(), Some(cond));
    let steps = run_to_end(&mut engine, 10);
    assert_eq!(steps, 2, "condition check + the arm's action");
    assert_eq!(engine.robot_position(), Position::new(1, 0));
    assert!(!engine.grid().painted(0, 0));
}

#[test]
fn if_falls_back_to_the_else_block() {
    let program = if_can_east_else_paint();
    let grid = Grid::new(2, 1);
    // At (1, 0) the way east is the boundary: the else block paints.
    let mut engine = Engine::start(&program, &grid, Position::new(1, 0));
    let steps = run_to_end(&mut engine, 10);
    assert_eq!(steps, 2);
    assert!(engine.finished());
    assert!(engine.grid().painted(1, 0));
    assert_eq!(engine.robot_position(), Position::new(1, 0));
}

#[test]
fn if_with_no_match_and_no_else_is_one_step() {
    let mut program = Program::new();
    let mut stmt = IfStmt::new();
    stmt.parts[0].cond = Some(BoolExpr::leaf(BoolOp::Painted));
    let paint = program.alloc(Construct::Action(ActionKind::Paint));
    stmt.parts[0].block.set(0, Some(paint));
    let cond = program.alloc(Construct::If(stmt));
    program.main.body.set(0, Some(cond));

    let grid = Grid::new(2, 2);
    let mut engine = Engine::start(&program, &grid, Position::new(0, 0));
    let steps = run_to_end(&mut engine, 10);
    assert_eq!(steps, 1, "just the condition check");
    assert!(!engine.grid().painted(0, 0));
}

/// A call-only cycle makes no visible progress, so the stack cap is what
/// terminates it - as a frozen failed run, not a crash.
#[test]
fn runaway_recursion_fails_the_run() {
    let mut program = Program::new();
    let def = program.add_def(0);
    program.def_mut(def).name = Some("again".to_string());
    let inner = program.alloc(Construct::Call(CallStmt::to(def)));
    program.def_mut(def).body.set(0, Some(inner));
    let outer = program.alloc(Construct::Call(CallStmt::to(def)));
    program.main.body.set(0, Some(outer));
    assert!(program.is_ready());

    let grid = Grid::new(2, 2);
    let engine = Engine::start(&program, &grid, Position::new(0, 0));
    assert!(engine.failed());
    let expected = RunErrorKind::RecursionLimitExceeded {
        limit: MAX_STACK_DEPTH,
    };
    assert_eq!(engine.error().map(|err| &err.kind), Some(&expected));
}

/// `if (can east) { move east } else { paint }`.
fn if_can_east_else_paint() -> Program {
    let mut program = Program::new();
    let move_east = program.alloc(Construct::Action(ActionKind::MoveEast));
    let paint = program.alloc(Construct::Action(ActionKind::Paint));

    let mut stmt = IfStmt::new();
    stmt.parts[0].cond = Some(BoolExpr::leaf(BoolOp::CanEast));
    stmt.parts[0].block.set(0, Some(move_east));
    let mut else_block = pikto_ir::Block::new();
    else_block.set(0, Some(paint));
    stmt.else_block = Some(else_block);

    let cond = program.alloc(Construct::If(stmt));
    program.main.body.set(0, Some(cond));
    program
}
