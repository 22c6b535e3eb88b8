//! In-memory CIL module model for Asmify.
//!
//! This crate contains:
//! - Module graph definitions (ModuleDef, TypeDef, MethodDef, MethodBody)
//! - Instruction and operand vocabulary (Instruction, Operand, OperandKind)
//! - Type signatures (TypeSig, PrimitiveType)
//! - Attribute-flag vocabularies (TYPE_ATTRIBUTES, METHOD_ATTRIBUTES)
//!
//! The graph is treated as read-only input: an external loader materializes
//! it (typically from JSON via [`ModuleDef::from_json`]) and the codegen
//! crate walks it without mutation.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod attributes;
pub mod instruction;
pub mod module;
pub mod type_sig;
pub mod utils;

#[cfg(test)]
mod module_tests;

pub use attributes::{AttrFlag, METHOD_ATTRIBUTES, TYPE_ATTRIBUTES};
pub use instruction::{Instruction, Operand, OperandKind};
pub use module::{MethodBody, MethodDef, MethodSig, ModuleDef, TypeDef};
pub use type_sig::{PrimitiveType, TypeSig};
