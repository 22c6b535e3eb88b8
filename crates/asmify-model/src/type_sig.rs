//! Recursive type signatures.

use serde::{Deserialize, Serialize};

/// A type signature from a method's return or parameter list.
///
/// `Primitive`, `ByRef` and `SzArray` render against the corlib type
/// factory; every other composite is carried through the model but has no
/// builder-call rendering and degrades to a placeholder in the output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeSig {
    Primitive(PrimitiveType),
    /// `T&` - managed by-reference wrapper.
    ByRef(Box<TypeSig>),
    /// `T[]` - single-dimension, zero-based array.
    SzArray(Box<TypeSig>),
    /// Reference to a non-corlib type by display name.
    Named(String),
    GenericInstance {
        name: String,
        args: Vec<TypeSig>,
    },
    Pointer(Box<TypeSig>),
    FunctionPointer,
    CustomModifier(Box<TypeSig>),
    Pinned(Box<TypeSig>),
    Boxed(Box<TypeSig>),
    Sentinel,
}

/// Well-known corlib element types.
///
/// Variant names match the `CorLibTypeFactory` property names so rendering
/// is a direct lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PrimitiveType {
    Void,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    String,
    Object,
    IntPtr,
    UIntPtr,
}

impl PrimitiveType {
    /// The `CorLibTypeFactory` property name.
    pub fn factory_name(self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Boolean => "Boolean",
            Self::Char => "Char",
            Self::SByte => "SByte",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::String => "String",
            Self::Object => "Object",
            Self::IntPtr => "IntPtr",
            Self::UIntPtr => "UIntPtr",
        }
    }
}
