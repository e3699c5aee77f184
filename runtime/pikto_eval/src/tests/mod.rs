#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Engine and evaluator test suites, with shared program builders.

mod engine_tests;
mod evaluate_tests;

use crate::Engine;
use pikto_ir::{ActionKind, Construct, ConstructId, Program};

/// A program whose entry point is the given run of actions.
fn straight_line(kinds: &[ActionKind]) -> (Program, Vec<ConstructId>) {
    let mut program = Program::new();
    let mut ids = Vec::new();
    for (index, kind) in kinds.iter().enumerate() {
        if index > 0 {
            program.main.body.add(index);
        }
        let id = program.alloc(Construct::Action(*kind));
        program.main.body.set(index, Some(id));
        ids.push(id);
    }
    (program, ids)
}

/// Step until the run ends, returning the number of steps taken.
fn run_to_end(engine: &mut Engine, cap: usize) -> usize {
    let mut steps = 0;
    while !engine.finished() && !engine.failed() {
        assert!(steps < cap, "run exceeded {cap} steps");
        engine.step();
        steps += 1;
    }
    steps
}
