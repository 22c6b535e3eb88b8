//! Instruction and operand vocabulary.
//!
//! An instruction is an opcode name plus an operand whose shape is dictated
//! by the opcode's operand-kind tag. The tag and the payload are stored
//! separately, matching the metadata encoding: the tag comes from the opcode
//! table, the payload from the instruction stream. The codegen crate
//! rejects pairs that disagree.

use serde::{Deserialize, Serialize};

/// One CIL instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Byte offset within the body. Used only for branch-label naming,
    /// never for control semantics.
    #[serde(default)]
    pub offset: u32,
    /// `CilOpCodes` member name, carried verbatim (e.g. `Ldc_I4`, `Ret`).
    pub opcode: String,
    #[serde(default)]
    pub operand_kind: OperandKind,
    #[serde(default)]
    pub operand: Operand,
}

/// Operand-kind tag of an opcode.
///
/// The full closed set from the CIL opcode table. Adding a variant here is
/// a compile error in the operand encoder until the new kind is handled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum OperandKind {
    #[default]
    InlineNone,
    ShortInlineBrTarget,
    InlineBrTarget,
    InlineI,
    InlineI8,
    ShortInlineI,
    InlineR,
    ShortInlineR,
    InlineString,
    InlineSwitch,
    InlineVar,
    ShortInlineVar,
    InlineField,
    InlineMethod,
    InlineTok,
    InlineType,
    InlineSig,
    InlinePhi,
    InlineArgument,
    ShortInlineArgument,
}

/// Decoded operand payload.
///
/// Branch targets are instruction indices within the owning body; a branch
/// label has no identity of its own beyond the index it points at.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum Operand {
    #[default]
    None,
    Int(i64),
    Float(f64),
    String(String),
    /// Target instruction index.
    Branch(usize),
    /// Switch table: target instruction indices in table order.
    Switch(Vec<usize>),
    /// Local variable index.
    Local(u16),
    /// Field reference by display name. Not encodable yet.
    Field(String),
    /// Method reference by display name. Not encodable yet.
    Method(String),
    /// Raw metadata token. Not encodable yet.
    Token(u32),
    /// Type reference by display name. Not encodable yet.
    TypeRef(String),
}
