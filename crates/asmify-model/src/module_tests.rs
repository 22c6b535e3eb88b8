//! Tests for the module graph and its JSON loading.

use indoc::indoc;

use super::module::{MethodBody, ModuleDef};
use super::type_sig::{PrimitiveType, TypeSig};

#[test]
fn parse_minimal_module() {
    let json = indoc! {r#"
        {
          "name": "demo.dll",
          "types": [
            {
              "name": "Demo",
              "attributes": 1,
              "methods": [
                {
                  "name": "Run",
                  "is_static": true,
                  "body": {
                    "instructions": [
                      { "opcode": "Ret" }
                    ]
                  }
                }
              ]
            }
          ]
        }
    "#};

    let module = ModuleDef::from_json(json).unwrap();
    assert_eq!(module.name, "demo.dll");
    assert_eq!(module.types.len(), 1);

    let ty = &module.types[0];
    assert_eq!(ty.namespace, "");
    assert_eq!(ty.attributes, 1);

    let method = &ty.methods[0];
    assert!(method.is_static);
    assert_eq!(method.attributes, 0);
    assert_eq!(
        method.signature.return_type,
        TypeSig::Primitive(PrimitiveType::Void)
    );
    assert!(method.signature.params.is_empty());

    let body = method.body.as_ref().unwrap();
    assert_eq!(body.instructions.len(), 1);
    assert_eq!(body.instructions[0].opcode, "Ret");
}

#[test]
fn body_flag_defaults() {
    let body: MethodBody = serde_json::from_str("{}").unwrap();
    assert!(!body.init_locals);
    assert!(body.verify_labels);
    assert!(body.compute_max_stack);
    assert_eq!(body.local_count, 0);
    assert!(body.instructions.is_empty());

    let default = MethodBody::default();
    assert!(default.verify_labels);
    assert!(default.compute_max_stack);
}

#[test]
fn body_flag_overrides() {
    let body: MethodBody =
        serde_json::from_str(r#"{ "init_locals": true, "verify_labels": false }"#).unwrap();
    assert!(body.init_locals);
    assert!(!body.verify_labels);
    assert!(body.compute_max_stack);
}

#[test]
fn method_without_body() {
    let json = r#"{ "name": "m.dll", "types": [ { "name": "T", "methods": [ { "name": "Abstract" } ] } ] }"#;
    let module = ModuleDef::from_json(json).unwrap();
    assert!(module.types[0].methods[0].body.is_none());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(ModuleDef::from_json("{").is_err());
    assert!(ModuleDef::from_json(r#"{ "types": [] }"#).is_err()); // missing name
}
