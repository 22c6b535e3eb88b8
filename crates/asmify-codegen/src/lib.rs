//! Builder-script generation from a CIL module model.
//!
//! Walks a read-only [`asmify_model::ModuleDef`] graph and emits a C# script
//! of AsmResolver builder calls that reconstructs an equivalent module:
//! - Identifier allocation with collision handling (`names`)
//! - Forward-reference pre-pass for locals and branch labels (`prepass`)
//! - Per-operand-kind encoding (`operand`)
//! - Recursive type-signature serialization (`sig`)
//! - Attribute-flag rendering (`flags`)
//!
//! The pass is sequential and pass-scoped: all mutable state (identifier
//! table, label registrations, output buffer) lives in one generator
//! instance, so independent modules are processed with independent
//! invocations. The script is only handed out once the pass has run to
//! completion.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod flags;
pub mod generator;
pub mod names;
pub mod operand;
pub mod prepass;
pub mod script;
pub mod sig;

#[cfg(test)]
mod prepass_tests;
#[cfg(test)]
mod sig_tests;

pub use error::GenError;
pub use generator::generate;
