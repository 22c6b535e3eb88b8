//! Tests for signature rendering.

use asmify_model::{MethodDef, MethodSig, PrimitiveType, TypeSig};

use super::sig::{UNSUPPORTED_TYPE, render_method_sig, render_type_sig};

fn method(is_static: bool, signature: MethodSig) -> MethodDef {
    MethodDef {
        name: "M".into(),
        attributes: 0,
        is_static,
        signature,
        body: None,
    }
}

#[test]
fn primitives_render_as_factory_lookups() {
    let sig = TypeSig::Primitive(PrimitiveType::Int32);
    assert_eq!(
        render_type_sig(&sig).as_deref(),
        Some("module.CorLibTypeFactory.Int32")
    );
}

#[test]
fn wrappers_render_recursively() {
    let by_ref = TypeSig::ByRef(Box::new(TypeSig::Primitive(PrimitiveType::Int32)));
    assert_eq!(
        render_type_sig(&by_ref).as_deref(),
        Some("module.CorLibTypeFactory.Int32.MakeByReferenceType()")
    );

    let array = TypeSig::SzArray(Box::new(TypeSig::Primitive(PrimitiveType::String)));
    assert_eq!(
        render_type_sig(&array).as_deref(),
        Some("module.CorLibTypeFactory.String.MakeSzArrayType()")
    );
}

#[test]
fn wrappers_over_unsupported_elements_do_not_render() {
    // A wrapper must never emit a suffix call with no receiver.
    let by_ref = TypeSig::ByRef(Box::new(TypeSig::Named("System.Guid".into())));
    assert_eq!(render_type_sig(&by_ref), None);

    let array = TypeSig::SzArray(Box::new(TypeSig::GenericInstance {
        name: "List".into(),
        args: vec![TypeSig::Primitive(PrimitiveType::Int32)],
    }));
    assert_eq!(render_type_sig(&array), None);
}

#[test]
fn static_signature_without_params() {
    let m = method(true, MethodSig::default());
    assert_eq!(
        render_method_sig(&m),
        "MethodSignature.CreateStatic(module.CorLibTypeFactory.Void)"
    );
}

#[test]
fn instance_signature_with_params() {
    let m = method(
        false,
        MethodSig {
            return_type: TypeSig::Primitive(PrimitiveType::Boolean),
            params: vec![
                TypeSig::Primitive(PrimitiveType::Int32),
                TypeSig::Primitive(PrimitiveType::String),
            ],
        },
    );
    assert_eq!(
        render_method_sig(&m),
        "MethodSignature.CreateInstance(module.CorLibTypeFactory.Boolean, \
         module.CorLibTypeFactory.Int32, module.CorLibTypeFactory.String)"
    );
}

#[test]
fn unsupported_component_types_become_placeholders() {
    let m = method(
        true,
        MethodSig {
            return_type: TypeSig::Named("System.Guid".into()),
            params: vec![TypeSig::Primitive(PrimitiveType::Int32)],
        },
    );
    assert_eq!(
        render_method_sig(&m),
        format!(
            "MethodSignature.CreateStatic({UNSUPPORTED_TYPE}, module.CorLibTypeFactory.Int32)"
        )
    );
}
