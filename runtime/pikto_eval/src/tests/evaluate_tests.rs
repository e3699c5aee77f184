//! Condition evaluation: grid queries, connectives, incompleteness.

use crate::errors::RunErrorKind;
use crate::evaluate;
use pikto_grid::{Grid, Position};
use pikto_ir::{BoolExpr, BoolOp};

fn eval(expr: &BoolExpr, at: Position, grid: &Grid) -> bool {
    match evaluate(Some(expr), at, grid) {
        Ok(value) => value,
        Err(err) => panic!("expected a value, got {err}"),
    }
}

#[test]
fn leaves_query_the_grid_at_the_position() {
    let mut grid = Grid::new(3, 3);
    grid.set_wall_east(1, 1, true);
    grid.set_painted(1, 1, true);
    let at = Position::new(1, 1);

    assert!(!eval(&BoolExpr::leaf(BoolOp::CanEast), at, &grid));
    assert!(eval(&BoolExpr::leaf(BoolOp::CanWest), at, &grid));
    assert!(eval(&BoolExpr::leaf(BoolOp::CanNorth), at, &grid));
    assert!(eval(&BoolExpr::leaf(BoolOp::CanSouth), at, &grid));
    assert!(eval(&BoolExpr::leaf(BoolOp::Painted), at, &grid));
    assert!(!eval(
        &BoolExpr::leaf(BoolOp::Painted),
        Position::new(0, 0),
        &grid
    ));
}

#[test]
fn not_negates_its_right_child() {
    let grid = Grid::new(2, 2);
    let at = Position::new(0, 0);
    assert!(eval(
        &BoolExpr::negate(BoolExpr::leaf(BoolOp::Painted)),
        at,
        &grid
    ));
}

#[test]
fn and_or_follow_the_truth_tables() {
    let grid = Grid::new(2, 1);
    let at = Position::new(0, 0);
    // At (0, 0) on a 2x1 grid: east is open, north is the boundary.
    let tt = BoolExpr::leaf(BoolOp::CanEast);
    let ff = BoolExpr::leaf(BoolOp::CanNorth);

    assert!(eval(&BoolExpr::and(tt.clone(), tt.clone()), at, &grid));
    assert!(!eval(&BoolExpr::and(tt.clone(), ff.clone()), at, &grid));
    assert!(!eval(&BoolExpr::and(ff.clone(), ff.clone()), at, &grid));
    assert!(eval(&BoolExpr::or(ff.clone(), tt.clone()), at, &grid));
    assert!(!eval(&BoolExpr::or(ff.clone(), ff), at, &grid));
    assert!(eval(&BoolExpr::or(tt.clone(), tt), at, &grid));
}

#[test]
fn absent_condition_is_incomplete() {
    let grid = Grid::new(2, 2);
    let result = evaluate(None, Position::new(0, 0), &grid);
    assert!(matches!(
        result,
        Err(err) if err.kind == RunErrorKind::IncompleteCondition
    ));
}

#[test]
fn absent_operands_are_incomplete() {
    let grid = Grid::new(2, 2);
    let at = Position::new(0, 0);

    for expr in [
        BoolExpr::bare(BoolOp::Not),
        BoolExpr::bare(BoolOp::And),
        BoolExpr::bare(BoolOp::Or),
        // Incompleteness is found recursively, not just at the root.
        BoolExpr::and(BoolExpr::leaf(BoolOp::CanEast), BoolExpr::bare(BoolOp::Not)),
    ] {
        let result = evaluate(Some(&expr), at, &grid);
        assert!(
            matches!(&result, Err(err) if err.kind == RunErrorKind::IncompleteCondition),
            "{expr:?} -> {result:?}"
        );
    }
}
