//! Tests for the forward-reference pre-pass.

use asmify_model::{Instruction, MethodBody, Operand, OperandKind};

use super::error::GenError;
use super::prepass::BodyNames;

fn instr(offset: u32, opcode: &str, kind: OperandKind, operand: Operand) -> Instruction {
    Instruction {
        offset,
        opcode: opcode.into(),
        operand_kind: kind,
        operand,
    }
}

fn body(local_count: u16, instructions: Vec<Instruction>) -> MethodBody {
    MethodBody {
        local_count,
        instructions,
        ..MethodBody::default()
    }
}

#[test]
fn locals_are_indexed_under_the_method_prefix() {
    let names = BodyNames::collect(&body(3, vec![]), "m_Run").unwrap();
    assert_eq!(names.locals, ["m_Run_V_0", "m_Run_V_1", "m_Run_V_2"]);
    assert_eq!(names.local(2), Some("m_Run_V_2"));
    assert_eq!(names.local(3), None);
}

#[test]
fn labels_carry_the_target_offset_in_hex() {
    let names = BodyNames::collect(
        &body(
            0,
            vec![
                instr(0, "Br_S", OperandKind::ShortInlineBrTarget, Operand::Branch(2)),
                instr(2, "Nop", OperandKind::InlineNone, Operand::None),
                instr(3, "Ret", OperandKind::InlineNone, Operand::None),
            ],
        ),
        "m_Run",
    )
    .unwrap();
    // Index 2 has byte offset 3.
    assert_eq!(names.label(2), Some("m_Run_0003"));
    assert_eq!(names.label(0), None);
}

#[test]
fn labels_register_in_first_encountered_order_and_deduplicate() {
    let names = BodyNames::collect(
        &body(
            0,
            vec![
                instr(0, "Br_S", OperandKind::ShortInlineBrTarget, Operand::Branch(3)),
                instr(2, "Br_S", OperandKind::ShortInlineBrTarget, Operand::Branch(1)),
                instr(4, "Br_S", OperandKind::ShortInlineBrTarget, Operand::Branch(3)),
                instr(6, "Ret", OperandKind::InlineNone, Operand::None),
            ],
        ),
        "m_Run",
    )
    .unwrap();
    let order: Vec<&str> = names.labels.values().map(String::as_str).collect();
    assert_eq!(order, ["m_Run_0006", "m_Run_0002"]);
}

#[test]
fn switch_targets_are_registered() {
    let names = BodyNames::collect(
        &body(
            0,
            vec![
                instr(0, "Switch", OperandKind::InlineSwitch, Operand::Switch(vec![2, 1])),
                instr(13, "Nop", OperandKind::InlineNone, Operand::None),
                instr(14, "Ret", OperandKind::InlineNone, Operand::None),
            ],
        ),
        "m_Run",
    )
    .unwrap();
    assert_eq!(names.label(2), Some("m_Run_000e"));
    assert_eq!(names.label(1), Some("m_Run_000d"));
}

#[test]
fn out_of_range_target_is_fatal() {
    let err = BodyNames::collect(
        &body(
            0,
            vec![instr(0, "Br_S", OperandKind::ShortInlineBrTarget, Operand::Branch(9))],
        ),
        "m_Run",
    )
    .unwrap_err();
    assert_eq!(
        err,
        GenError::UnresolvedReference {
            what: "branch target",
            opcode: "Br_S".into(),
            index: 9,
        }
    );
}
