//! Pikto IR - Program-Tree Types
//!
//! This crate contains the data structures a Pikto program is made of:
//! - `ActionKind` and `BoolOp` - the fixed action and condition vocabulary
//! - `BoolExpr` - partially-editable boolean condition trees
//! - `Construct` - the closed set of program nodes (action, call, if, loop)
//! - `Block`, `Def`, `Program` - straight-line bodies, subroutines, and the
//!   whole program with its entry point
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: constructs live in a contiguous arena owned by
//!   the `Program`; nodes reference each other through `ConstructId(u32)`
//!   indices, never through shared pointers. Identity is an index, so it
//!   survives `Program::clone` - the execution engine runs on a private
//!   snapshot while the editor keeps highlighting by the same ids.
//! - **Editing states are values**: an unfilled block slot, an unset call
//!   target, and a condition with missing children are all ordinary,
//!   representable states. Whether the program as a whole can run is a
//!   *computed* property (`Program::is_ready`), never an error.
//! - **No execution logic**: this crate answers structural questions only.
//!   Stepping, grids, and failure live in `pikto_eval` / `pikto_grid`.

mod arena;
pub mod ast;
mod program;
mod ready;

pub use arena::{ConstructArena, ConstructId, DefId};
pub use ast::{ActionKind, Block, BoolExpr, BoolOp, CallStmt, Construct, IfPart, IfStmt, LoopStmt};
pub use program::{Def, Program};
