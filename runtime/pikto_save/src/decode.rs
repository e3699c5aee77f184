//! Snapshot tree -> program, in two passes.
//!
//! Pass one materializes the construct tree with every call target unset,
//! collecting `(call, name)` placeholders. Pass two resolves the names
//! over the def list and patches the targets by identity. Defs are
//! created (with their names) before any body loads, purely for
//! simplicity - resolution happens at the end either way, which is what
//! makes forward references work.

use crate::tree::{SaveBlock, SaveNode, SaveProgram};
use crate::SaveError;
use pikto_ir::{Block, BoolExpr, CallStmt, Construct, ConstructId, DefId, IfPart, IfStmt, LoopStmt, Program};
use rustc_hash::FxHashMap;

/// Deserialize from a JSON-compatible structural tree.
pub fn from_tree(tree: serde_json::Value) -> Result<Program, SaveError> {
    load_program(serde_json::from_value(tree)?)
}

/// Deserialize from a JSON string.
pub fn from_json(json: &str) -> Result<Program, SaveError> {
    load_program(serde_json::from_str(json)?)
}

/// A call waiting for its target: pass one records these, pass two
/// resolves them.
struct Placeholder {
    call: ConstructId,
    name: String,
}

fn load_program(save: SaveProgram) -> Result<Program, SaveError> {
    let mut program = Program::new();
    let mut placeholders = Vec::new();

    // Pass one: materialize the construct tree, calls unset.
    let mut bodies = Vec::new();
    for node in save.defs {
        let (name, body) = expect_def(node)?;
        let id = program.add_def(program.defs().len());
        program.def_mut(id).name = name;
        bodies.push((id, body));
    }
    for (id, nodes) in bodies {
        program.def_mut(id).body = load_block(&mut program, nodes, &mut placeholders)?;
    }
    let (main_name, main_nodes) = expect_def(save.main)?;
    program.main.name = main_name;
    program.main.body = load_block(&mut program, main_nodes, &mut placeholders)?;

    // Pass two: resolve names to identities.
    resolve(&mut program, placeholders);
    Ok(program)
}

fn expect_def(node: SaveNode) -> Result<(Option<String>, SaveBlock), SaveError> {
    match node {
        SaveNode::Def { name, body } => Ok((name, body)),
        other => Err(SaveError::UnexpectedNode {
            expected: "def",
            found: other.kind_name(),
        }),
    }
}

fn load_block(
    program: &mut Program,
    nodes: SaveBlock,
    placeholders: &mut Vec<Placeholder>,
) -> Result<Block, SaveError> {
    let mut block = Block::new();
    for (index, node) in nodes.into_iter().enumerate() {
        if index > 0 {
            block.add(index);
        }
        if let Some(node) = node {
            let id = load_construct(program, node, placeholders)?;
            block.set(index, Some(id));
        }
    }
    Ok(block)
}

fn load_construct(
    program: &mut Program,
    node: SaveNode,
    placeholders: &mut Vec<Placeholder>,
) -> Result<ConstructId, SaveError> {
    match node {
        SaveNode::Action { action } => Ok(program.alloc(Construct::Action(action))),
        SaveNode::Call { target } => {
            let call = program.alloc(Construct::Call(CallStmt::unset()));
            if let Some(name) = target {
                placeholders.push(Placeholder { call, name });
            }
            Ok(call)
        }
        SaveNode::If { parts, else_block } => {
            let mut loaded = Vec::with_capacity(parts.len());
            for part in parts {
                let (cond, nodes) = expect_ifpart(part)?;
                loaded.push(IfPart {
                    cond,
                    block: load_block(program, nodes, placeholders)?,
                });
            }
            if loaded.is_empty() {
                // A conditional never has zero arms; repair rather than reject.
                loaded.push(IfPart::new());
            }
            let else_block = match else_block {
                Some(nodes) => Some(load_block(program, nodes, placeholders)?),
                None => None,
            };
            Ok(program.alloc(Construct::If(IfStmt {
                parts: loaded,
                else_block,
            })))
        }
        SaveNode::Loop { cond, body } => {
            let body = load_block(program, body, placeholders)?;
            Ok(program.alloc(Construct::Loop(LoopStmt { cond, body })))
        }
        other @ (SaveNode::IfPart { .. } | SaveNode::Def { .. }) => Err(SaveError::UnexpectedNode {
            expected: "construct",
            found: other.kind_name(),
        }),
    }
}

fn expect_ifpart(node: SaveNode) -> Result<(Option<BoolExpr>, SaveBlock), SaveError> {
    match node {
        SaveNode::IfPart { cond, block } => Ok((cond, block)),
        other => Err(SaveError::UnexpectedNode {
            expected: "ifpart",
            found: other.kind_name(),
        }),
    }
}

/// Patch every placeholder whose name matches a named def.
///
/// The first def with a given name wins; unknown names leave the call
/// unset (the loaded program then fails its readiness check, faithfully
/// reproducing the state it was saved in).
fn resolve(program: &mut Program, placeholders: Vec<Placeholder>) {
    let mut by_name: FxHashMap<String, DefId> = FxHashMap::default();
    for (index, def) in program.defs().iter().enumerate() {
        if let Some(name) = &def.name {
            let id = DefId::new(u32::try_from(index).unwrap_or(u32::MAX));
            by_name.entry(name.clone()).or_insert(id);
        }
    }
    for placeholder in placeholders {
        if let Some(&target) = by_name.get(&placeholder.name) {
            program.set_call_target(placeholder.call, Some(target));
        }
    }
}
