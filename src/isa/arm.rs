use tracing::trace;

use crate::bits::{bit, field, field_u8, matches, sign_extend};
use crate::condition::Condition;
use crate::decoder::{
    Branch, BranchExchange, DataProcessing, Decoder, Instruction, Kind, Operand, ShiftAmount,
    ShiftType, Variant,
};
use crate::instructions::AluOp;

/// Bits 27..4 of `BX Rn`.
const BX_PATTERN: u32 = 0b0001_0010_1111_1111_1111_0001;

/// Values of bits 7..4 that mark multiply and halfword/signed transfers
/// inside the `000` class.
const RESERVED_MIDDLE: [u32; 4] = [0b1001, 0b1011, 0b1101, 0b1111];

/// ARM-state (32-bit) decoder for the ARM7TDMI subset this crate models.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArmDecoder;

impl ArmDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for ArmDecoder {
    fn decode(&self, raw32: u32) -> Instruction {
        decode(raw32, classify(raw32))
    }
}

pub fn is_branch(word: u32) -> bool {
    matches(word, 27, 25, 0b101)
}

pub fn is_branch_exchange(word: u32) -> bool {
    matches(word, 27, 4, BX_PATTERN)
}

pub fn is_data_processing(word: u32) -> bool {
    match field(word, 27, 25) {
        0b001 => true,
        0b000 => !is_branch_exchange(word) && !RESERVED_MIDDLE.contains(&field(word, 7, 4)),
        _ => false,
    }
}

pub fn is_undefined(word: u32) -> bool {
    matches(word, 27, 25, 0b011) && bit(word, 4)
}

/// Picks the first variant, in priority order, whose predicate accepts `word`.
pub fn classify(word: u32) -> Variant {
    let variant = if is_branch(word) {
        Variant::Branch
    } else if is_branch_exchange(word) {
        Variant::BranchExchange
    } else if is_data_processing(word) {
        Variant::DataProcessing
    } else if is_undefined(word) {
        Variant::Undefined
    } else {
        Variant::Unclassified
    };
    if variant == Variant::Unclassified {
        trace!("no variant matched {word:#010x}");
    }
    variant
}

/// Extracts the fields of `variant` from `word`.
///
/// Total for any pair: the field layout is fixed once the variant is, so a
/// variant the word would not classify as still yields a record.
pub fn decode(word: u32, variant: Variant) -> Instruction {
    let cond = Condition::from_code((word >> 28) as u8);
    let kind = match variant {
        Variant::Branch => Kind::Branch(decode_branch(word)),
        Variant::BranchExchange => Kind::BranchExchange(BranchExchange {
            rn: field_u8(word, 7, 4),
        }),
        Variant::DataProcessing => Kind::DataProcessing(decode_data_processing(word)),
        Variant::Undefined => Kind::Undefined,
        Variant::Unclassified => Kind::Unclassified,
    };
    Instruction {
        raw: word,
        cond,
        kind,
    }
}

fn decode_branch(word: u32) -> Branch {
    Branch {
        offset: sign_extend(field(word, 23, 0), 24) << 2,
        link: bit(word, 24),
    }
}

fn decode_data_processing(word: u32) -> DataProcessing {
    let immediate = bit(word, 25);
    let opcode = field_u8(word, 24, 21);
    let set_flags = bit(word, 20);
    let operand = if immediate {
        immediate_operand(word)
    } else {
        register_operand(word)
    };
    DataProcessing {
        immediate,
        opcode,
        op: AluOp::from_fields(opcode, set_flags),
        set_flags,
        rn: field_u8(word, 19, 16),
        rd: field_u8(word, 15, 12),
        operand,
    }
}

fn immediate_operand(word: u32) -> Operand {
    let rotate = field_u8(word, 11, 8) * 2;
    let imm8 = field_u8(word, 7, 0);
    // Carry-out (bit 31 of the result when rotate != 0) is not modelled.
    Operand::Immediate {
        imm8,
        rotate,
        value: u32::from(imm8).rotate_right(u32::from(rotate)),
    }
}

fn register_operand(word: u32) -> Operand {
    let by_register = bit(word, 4);
    let amount = if by_register {
        ShiftAmount::Register(field_u8(word, 11, 8))
    } else {
        ShiftAmount::Immediate(field_u8(word, 11, 7))
    };
    let shift = match (field(word, 6, 5), amount) {
        (0b00, _) => ShiftType::Lsl,
        (0b01, _) => ShiftType::Lsr,
        (0b10, _) => ShiftType::Asr,
        (_, ShiftAmount::Immediate(0)) => ShiftType::Rrx,
        _ => ShiftType::Ror,
    };
    Operand::Register {
        rm: field_u8(word, 3, 0),
        shift,
        amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_are_mutually_exclusive_on_samples() {
        let samples = [
            0xEA00_0000, 0xEB00_0010, 0xE12F_FF11, 0xE3A0_00FF, 0xE1A0_0001, 0xE600_0010,
            0xE000_0090, 0xE1D0_00B0, 0xE590_0000, 0xEF00_0000, 0x012F_FF1E,
        ];
        for w in samples {
            let hits = [
                is_branch(w),
                is_branch_exchange(w),
                is_data_processing(w),
                is_undefined(w),
            ]
            .iter()
            .filter(|&&h| h)
            .count();
            assert!(hits <= 1, "{w:#010x} matched {hits} predicates");
        }
    }

    #[test]
    fn rrx_only_for_immediate_zero() {
        // mov r0, r1, rrx
        let rrx = register_operand(0xE1A0_0061);
        assert!(matches!(rrx, Operand::Register { shift: ShiftType::Rrx, amount: ShiftAmount::Immediate(0), rm: 1 }));
        // mov r0, r1, ror r0 : register amount, stays ROR even if r0 index is 0
        let ror_reg = register_operand(0xE1A0_0071);
        assert!(matches!(ror_reg, Operand::Register { shift: ShiftType::Ror, amount: ShiftAmount::Register(0), rm: 1 }));
        // mov r0, r1, ror #4
        let ror_imm = register_operand(0xE1A0_0261);
        assert!(matches!(ror_imm, Operand::Register { shift: ShiftType::Ror, amount: ShiftAmount::Immediate(4), rm: 1 }));
    }

    #[test]
    fn decoder_trait_matches_free_functions() {
        let dec = ArmDecoder::new();
        let w = 0xE3A0_1C02;
        assert_eq!(dec.decode(w), decode(w, classify(w)));
    }
}
