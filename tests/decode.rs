use pretty_assertions::assert_eq;

use arm7_rs::decoder::{
    Branch, BranchExchange, DataProcessing, Operand, ShiftAmount, ShiftType,
};
use arm7_rs::instructions::AluOp;
use arm7_rs::{classify, decode, ArmDecoder, Condition, Decoder, Kind, Variant};

fn enc_dp_imm(cond: u32, opcode: u32, s: u32, rn: u32, rd: u32, rot: u32, imm8: u32) -> u32 {
    (cond << 28) | (0b001 << 25) | (opcode << 21) | (s << 20) | (rn << 16) | (rd << 12) | (rot << 8) | imm8
}

fn dp(w: u32) -> DataProcessing {
    match ArmDecoder::new().decode(w).kind {
        Kind::DataProcessing(dp) => dp,
        other => panic!("{w:#010x} decoded as {other:?}"),
    }
}

#[test]
fn condition_is_top_nibble() {
    let dec = ArmDecoder::new();
    assert_eq!(dec.decode(0x0A00_0000).cond, Condition::Eq);
    assert_eq!(dec.decode(0x1A00_0000).cond, Condition::Ne);
    assert_eq!(dec.decode(0xDA00_0000).cond, Condition::Le);
    assert_eq!(dec.decode(0xEA00_0000).cond, Condition::Al);
    let nv = dec.decode(0xFA00_0000);
    assert_eq!(nv.cond, Condition::Al);
    assert_eq!(nv.condition_code(), 0xF);
}

#[test]
fn branch_fields() {
    let insn = ArmDecoder::new().decode(0xEB00_0010);
    assert_eq!(insn.kind, Kind::Branch(Branch { offset: 0x40, link: true }));

    let back = ArmDecoder::new().decode(0xEAFF_FFFE);
    assert_eq!(back.kind, Kind::Branch(Branch { offset: -8, link: false }));
}

#[test]
fn branch_exchange_register_field() {
    let insn = ArmDecoder::new().decode(0xE12F_FF11);
    assert_eq!(insn.variant(), Variant::BranchExchange);
    assert_eq!(insn.kind, Kind::BranchExchange(BranchExchange { rn: 1 }));
}

#[test]
fn immediate_without_rotation() {
    let d = dp(enc_dp_imm(0xE, 0b1101, 0, 0, 3, 0, 0xFF));
    assert_eq!(
        d,
        DataProcessing {
            immediate: true,
            opcode: 0b1101,
            op: AluOp::Mov,
            set_flags: false,
            rn: 0,
            rd: 3,
            operand: Operand::Immediate { imm8: 0xFF, rotate: 0, value: 0xFF },
        }
    );
}

#[test]
fn immediate_rotation_wraps_full_word() {
    let d = dp(enc_dp_imm(0xE, 0b0100, 1, 1, 2, 1, 0x01));
    assert_eq!(d.operand, Operand::Immediate { imm8: 0x01, rotate: 2, value: 0x4000_0000 });
    assert_eq!(d.op, AluOp::Add);
    assert!(d.set_flags);

    // 0xFF ror 4 straddles the word boundary
    let d = dp(enc_dp_imm(0xE, 0b1101, 0, 0, 0, 2, 0xFF));
    assert_eq!(d.operand, Operand::Immediate { imm8: 0xFF, rotate: 4, value: 0xF000_000F });

    // rotate field 15 -> ror 30
    let d = dp(enc_dp_imm(0xE, 0b1101, 0, 0, 0, 15, 0x01));
    assert_eq!(d.operand, Operand::Immediate { imm8: 0x01, rotate: 30, value: 0x4 });
}

#[test]
fn register_operands_with_shifts() {
    // add r0, r1, r2, lsl #3
    let d = dp(0xE081_0182);
    assert_eq!((d.rn, d.rd, d.immediate), (1, 0, false));
    assert_eq!(
        d.operand,
        Operand::Register { rm: 2, shift: ShiftType::Lsl, amount: ShiftAmount::Immediate(3) }
    );

    // mov r0, r1, lsr r2
    assert_eq!(
        dp(0xE1A0_0231).operand,
        Operand::Register { rm: 1, shift: ShiftType::Lsr, amount: ShiftAmount::Register(2) }
    );

    // mov r0, r1, asr #31
    assert_eq!(
        dp(0xE1A0_0FC1).operand,
        Operand::Register { rm: 1, shift: ShiftType::Asr, amount: ShiftAmount::Immediate(31) }
    );

    // mov r0, r1, rrx
    assert_eq!(
        dp(0xE1A0_0061).operand,
        Operand::Register { rm: 1, shift: ShiftType::Rrx, amount: ShiftAmount::Immediate(0) }
    );
}

#[test]
fn teq_without_set_flags_is_status_transfer() {
    // opcode 1001, S=0 (mrs/msr space)
    let d = dp(0xE12F_F000);
    assert_eq!(d.opcode, 0b1001);
    assert_eq!(d.op, AluOp::Teqp);

    // teq r0, #1
    let d = dp(0xE330_0001);
    assert_eq!(d.op, AluOp::Teq);
}

#[test]
fn undefined_and_unclassified_carry_only_condition() {
    let u = ArmDecoder::new().decode(0x3600_0010);
    assert_eq!(u.kind, Kind::Undefined);
    assert_eq!(u.cond, Condition::Cc);

    let n = ArmDecoder::new().decode(0x4591_0000);
    assert_eq!(n.kind, Kind::Unclassified);
    assert_eq!(n.cond, Condition::Mi);
}

#[test]
fn decode_is_total_for_forced_variants() {
    // A load/store word pushed through the data-processing layout still decodes.
    let w = 0xE591_0004;
    assert_eq!(classify(w), Variant::Unclassified);
    let insn = decode(w, Variant::DataProcessing);
    assert_eq!(insn.variant(), Variant::DataProcessing);
    assert_eq!(insn.raw, w);
}
