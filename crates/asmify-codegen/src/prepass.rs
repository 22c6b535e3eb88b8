//! Forward-reference pre-pass over a method body.
//!
//! Registers every local variable and every distinct branch target before
//! any instruction statement is emitted, so operands can reference names
//! regardless of lexical order.

use asmify_model::{Instruction, MethodBody, Operand};
use indexmap::IndexMap;

use crate::error::GenError;

/// Name registrations for one method body.
#[derive(Debug)]
pub struct BodyNames {
    /// Local-variable names by index, `{prefix}_V_{i}`.
    pub locals: Vec<String>,
    /// Label names keyed by target instruction index, in first-encountered
    /// order. A label's name carries the target's byte offset as four hex
    /// digits, `{prefix}_{offset:04x}`.
    pub labels: IndexMap<usize, String>,
}

impl BodyNames {
    /// Scan the body once and register all forward-referenceable names.
    pub fn collect(body: &MethodBody, method_prefix: &str) -> Result<Self, GenError> {
        let locals = (0..body.local_count)
            .map(|i| format!("{method_prefix}_V_{i}"))
            .collect();

        let mut labels = IndexMap::new();
        for instr in &body.instructions {
            match &instr.operand {
                Operand::Branch(target) => {
                    register_label(&mut labels, body, *target, method_prefix, instr)?;
                }
                Operand::Switch(targets) => {
                    for target in targets {
                        register_label(&mut labels, body, *target, method_prefix, instr)?;
                    }
                }
                _ => {}
            }
        }

        Ok(Self { locals, labels })
    }

    /// Label name for a target instruction index, if registered.
    pub fn label(&self, target: usize) -> Option<&str> {
        self.labels.get(&target).map(String::as_str)
    }

    /// Local name for a variable index, if registered.
    pub fn local(&self, index: u16) -> Option<&str> {
        self.locals.get(index as usize).map(String::as_str)
    }
}

fn register_label(
    labels: &mut IndexMap<usize, String>,
    body: &MethodBody,
    target: usize,
    method_prefix: &str,
    referrer: &Instruction,
) -> Result<(), GenError> {
    let Some(instr) = body.instructions.get(target) else {
        return Err(GenError::UnresolvedReference {
            what: "branch target",
            opcode: referrer.opcode.clone(),
            index: target,
        });
    };
    labels
        .entry(target)
        .or_insert_with(|| format!("{method_prefix}_{:04x}", instr.offset));
    Ok(())
}
