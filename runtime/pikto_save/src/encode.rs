//! Program -> snapshot tree.

use crate::tree::{SaveBlock, SaveNode, SaveProgram};
use crate::SaveError;
use pikto_ir::{Block, Construct, ConstructId, Def, Program};

/// Serialize to a JSON-compatible structural tree.
pub fn to_tree(program: &Program) -> Result<serde_json::Value, SaveError> {
    Ok(serde_json::to_value(save_program(program))?)
}

/// Serialize to a JSON string.
pub fn to_json(program: &Program) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(&save_program(program))?)
}

pub(crate) fn save_program(program: &Program) -> SaveProgram {
    SaveProgram {
        main: save_def(program, &program.main),
        defs: program
            .defs()
            .iter()
            .map(|def| save_def(program, def))
            .collect(),
    }
}

fn save_def(program: &Program, def: &Def) -> SaveNode {
    SaveNode::Def {
        name: def.name.clone(),
        body: save_block(program, &def.body),
    }
}

fn save_block(program: &Program, block: &Block) -> SaveBlock {
    block
        .slots()
        .map(|slot| slot.map(|id| save_construct(program, id)))
        .collect()
}

fn save_construct(program: &Program, id: ConstructId) -> SaveNode {
    match program.construct(id) {
        Construct::Action(kind) => SaveNode::Action { action: *kind },
        // Identity turns back into a name; an unnamed callee saves as an
        // unset target and will not resolve on load.
        Construct::Call(call) => SaveNode::Call {
            target: call
                .target
                .and_then(|target| program.def(target).name.clone()),
        },
        Construct::If(stmt) => SaveNode::If {
            parts: stmt
                .parts
                .iter()
                .map(|part| SaveNode::IfPart {
                    cond: part.cond.clone(),
                    block: save_block(program, &part.block),
                })
                .collect(),
            else_block: stmt
                .else_block
                .as_ref()
                .map(|block| save_block(program, block)),
        },
        Construct::Loop(stmt) => SaveNode::Loop {
            cond: stmt.cond.clone(),
            body: save_block(program, &stmt.body),
        },
    }
}
