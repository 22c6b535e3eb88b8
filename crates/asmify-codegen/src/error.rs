//! Fatal generation errors.

use asmify_model::OperandKind;

/// Error that aborts a generation pass.
///
/// Constructs the encoder knows about but cannot render yet (structured
/// member references, exotic type signatures) degrade to placeholder
/// comments instead; these variants are reserved for malformed input and
/// broken cross-references.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenError {
    /// An operand names a local or branch target that was never registered.
    #[error("unresolved {what} reference on opcode {opcode}: {index}")]
    UnresolvedReference {
        what: &'static str,
        opcode: String,
        index: usize,
    },

    /// Operand-kind tag outside the encoder's coverage.
    #[error("unrecognized operand kind {kind:?} on opcode {opcode}")]
    UnrecognizedOperandKind { kind: OperandKind, opcode: String },

    /// Payload shape disagrees with the opcode's operand-kind tag.
    #[error("operand payload does not match kind {kind:?} on opcode {opcode}")]
    OperandMismatch { kind: OperandKind, opcode: String },
}
