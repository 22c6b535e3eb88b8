//! Type and method signature rendering.

use asmify_model::{MethodDef, TypeSig};

/// Placeholder spliced where a signature has no supported rendering.
pub const UNSUPPORTED_TYPE: &str = "/* unsupported type */";

/// Render a type signature as a corlib type-factory expression.
///
/// Returns `None` for signatures outside the supported subset. Wrapper
/// signatures only render when their element renders, so a dangling
/// `.MakeByReferenceType()` with no receiver can never appear.
pub fn render_type_sig(sig: &TypeSig) -> Option<String> {
    match sig {
        TypeSig::Primitive(p) => Some(format!("module.CorLibTypeFactory.{}", p.factory_name())),
        TypeSig::ByRef(inner) => {
            render_type_sig(inner).map(|s| format!("{s}.MakeByReferenceType()"))
        }
        TypeSig::SzArray(inner) => render_type_sig(inner).map(|s| format!("{s}.MakeSzArrayType()")),
        TypeSig::Named(_)
        | TypeSig::GenericInstance { .. }
        | TypeSig::Pointer(_)
        | TypeSig::FunctionPointer
        | TypeSig::CustomModifier(_)
        | TypeSig::Pinned(_)
        | TypeSig::Boxed(_)
        | TypeSig::Sentinel => None,
    }
}

/// Render the `MethodSignature.CreateStatic(...)` or `CreateInstance(...)`
/// expression for a method. Unsupported component types degrade to
/// [`UNSUPPORTED_TYPE`] rather than failing the pass.
pub fn render_method_sig(method: &MethodDef) -> String {
    let render =
        |sig: &TypeSig| render_type_sig(sig).unwrap_or_else(|| UNSUPPORTED_TYPE.to_string());

    let ctor = if method.is_static { "CreateStatic" } else { "CreateInstance" };
    let mut args = vec![render(&method.signature.return_type)];
    args.extend(method.signature.params.iter().map(render));
    format!("MethodSignature.{ctor}({})", args.join(", "))
}
