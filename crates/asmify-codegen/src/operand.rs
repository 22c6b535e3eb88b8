//! Per-operand-kind encoding.

use asmify_model::utils::quote;
use asmify_model::{Instruction, Operand, OperandKind};

use crate::error::GenError;
use crate::prepass::BodyNames;

/// Placeholder spliced where a structured reference has no encoding.
pub const UNSUPPORTED_OPERAND: &str = "/* unsupported operand */";

/// Render an instruction's operand as the argument expression for its
/// builder call.
///
/// `Ok(None)` means the opcode takes no operand. Member references and
/// metadata tokens degrade to [`UNSUPPORTED_OPERAND`]; an operand kind
/// outside the encoder's coverage, or a payload that disagrees with its
/// kind, aborts the pass.
pub fn encode_operand(instr: &Instruction, names: &BodyNames) -> Result<Option<String>, GenError> {
    use OperandKind::*;

    match instr.operand_kind {
        InlineNone => match &instr.operand {
            Operand::None => Ok(None),
            _ => Err(mismatch(instr)),
        },
        ShortInlineBrTarget | InlineBrTarget => match &instr.operand {
            Operand::Branch(target) => match names.label(*target) {
                Some(label) => Ok(Some(label.to_string())),
                None => Err(unresolved(instr, "branch target", *target)),
            },
            _ => Err(mismatch(instr)),
        },
        InlineI | InlineI8 | ShortInlineI => match &instr.operand {
            Operand::Int(v) => Ok(Some(v.to_string())),
            _ => Err(mismatch(instr)),
        },
        InlineR | ShortInlineR => match &instr.operand {
            Operand::Float(v) => Ok(Some(v.to_string())),
            _ => Err(mismatch(instr)),
        },
        InlineString => match &instr.operand {
            Operand::String(s) => Ok(Some(quote(s))),
            _ => Err(mismatch(instr)),
        },
        InlineSwitch => match &instr.operand {
            Operand::Switch(targets) => {
                let mut parts = Vec::with_capacity(targets.len());
                for target in targets {
                    match names.label(*target) {
                        Some(label) => parts.push(label.to_string()),
                        None => return Err(unresolved(instr, "branch target", *target)),
                    }
                }
                Ok(Some(parts.join(", ")))
            }
            _ => Err(mismatch(instr)),
        },
        InlineVar | ShortInlineVar => match &instr.operand {
            Operand::Local(index) => match names.local(*index) {
                Some(local) => Ok(Some(local.to_string())),
                None => Err(unresolved(instr, "local variable", *index as usize)),
            },
            _ => Err(mismatch(instr)),
        },
        InlineField | InlineMethod | InlineTok | InlineType => {
            Ok(Some(UNSUPPORTED_OPERAND.to_string()))
        }
        InlineSig | InlinePhi | InlineArgument | ShortInlineArgument => {
            Err(GenError::UnrecognizedOperandKind {
                kind: instr.operand_kind,
                opcode: instr.opcode.clone(),
            })
        }
    }
}

fn mismatch(instr: &Instruction) -> GenError {
    GenError::OperandMismatch {
        kind: instr.operand_kind,
        opcode: instr.opcode.clone(),
    }
}

fn unresolved(instr: &Instruction, what: &'static str, index: usize) -> GenError {
    GenError::UnresolvedReference {
        what,
        opcode: instr.opcode.clone(),
        index,
    }
}
