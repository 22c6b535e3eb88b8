//! Module graph definitions.
//!
//! The shapes mirror what a metadata loader produces: a module owns types,
//! types own methods, methods optionally own a CIL body. Everything derives
//! `serde` so a graph can be supplied as JSON without a binary-format parser.

use serde::{Deserialize, Serialize};

use crate::instruction::Instruction;
use crate::type_sig::{PrimitiveType, TypeSig};

/// A compiled module: the root of the input graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleDef {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

impl ModuleDef {
    /// Parse a module graph from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A type declaration with its member methods.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeDef {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    /// Raw `TypeAttributes` bits.
    #[serde(default)]
    pub attributes: u32,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

/// A method declaration. `body` is absent for abstract/external methods.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    /// Raw `MethodAttributes` bits.
    #[serde(default)]
    pub attributes: u32,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub signature: MethodSig,
    #[serde(default)]
    pub body: Option<MethodBody>,
}

/// Return and parameter types of a method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodSig {
    pub return_type: TypeSig,
    #[serde(default)]
    pub params: Vec<TypeSig>,
}

impl Default for MethodSig {
    fn default() -> Self {
        Self {
            return_type: TypeSig::Primitive(PrimitiveType::Void),
            params: Vec::new(),
        }
    }
}

/// A CIL method body.
///
/// The three behavior flags keep their loader defaults: locals are not
/// zero-initialized, labels are verified, and max stack is computed. Only
/// non-default values produce statements in the generated script.
///
/// Locals carry no data of their own (names are synthesized from the
/// zero-based index), so the ordered local sequence is stored as a count.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodBody {
    #[serde(default)]
    pub init_locals: bool,
    #[serde(default = "default_true")]
    pub verify_labels: bool,
    #[serde(default = "default_true")]
    pub compute_max_stack: bool,
    #[serde(default)]
    pub local_count: u16,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl Default for MethodBody {
    fn default() -> Self {
        Self {
            init_locals: false,
            verify_labels: true,
            compute_max_stack: true,
            local_count: 0,
            instructions: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
