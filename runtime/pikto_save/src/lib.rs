//! Pikto Save - program snapshots.
//!
//! Converts a [`pikto_ir::Program`] to and from a plain structural tree
//! (JSON-compatible, one tagged node per construct kind). This is the only
//! persisted format the core defines.
//!
//! Two properties shape the format:
//!
//! - **Totality over editing states.** A snapshot captures partially
//!   authored programs: empty block slots serialize as explicit `null`s
//!   (preserving position), absent conditions and operands as `null`
//!   fields, unset call targets as `null` names. A round-tripped program
//!   reports the same readiness it was saved with.
//! - **Calls are saved by name, resolved by identity.** Loading is
//!   two-pass: pass one materializes the whole construct tree with every
//!   call unset, recording `(call, name)` placeholders; pass two looks the
//!   names up over the named defs and patches the targets. A name with no
//!   matching def simply stays unset - forward references work, dangling
//!   references load (and fail readiness) instead of erroring.

mod decode;
mod encode;
mod tree;


use thiserror::Error;

pub use decode::{from_json, from_tree};
pub use encode::{to_json, to_tree};
pub use tree::{SaveBlock, SaveNode, SaveProgram};

/// Snapshot (de)serialization failure.
#[derive(Debug, Error)]
pub enum SaveError {
    /// A structurally valid tree used a node kind somewhere it cannot
    /// appear (a `def` inside a block, an `ifpart` outside an `if`, ...).
    #[error("malformed snapshot: expected a {expected} node, found {found}")]
    UnexpectedNode {
        expected: &'static str,
        found: &'static str,
    },

    /// The tree was not shaped like a snapshot at all.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
