use crate::condition::Condition;
use crate::decoder::{Instruction, Kind, Operand, ShiftAmount, ShiftType};
use crate::instructions::AluOp;

pub fn fmt_instruction(insn: &Instruction) -> String {
    match insn.kind {
        Kind::Branch(b) => format!(
            "Branch by {}, stores old in link = {}",
            b.offset,
            u8::from(b.link)
        ),
        Kind::BranchExchange(bx) => format!(
            "Branch to register {}, set thumb mode to bit 0 of that",
            bx.rn
        ),
        Kind::DataProcessing(dp) => format!(
            "ALU Command {} from register {} to register {} with operand '{}', set flags:{}",
            dp.op.description(),
            dp.rn,
            dp.rd,
            fmt_operand(&dp.operand),
            u8::from(dp.set_flags)
        ),
        Kind::Undefined => "Undefined".to_string(),
        Kind::Unclassified => "Defined but not implemented".to_string(),
    }
}

/// Short pre-UAL mnemonic, e.g. `bleq`, `movs`, `bx`. The `al` suffix is implied.
pub fn fmt_mnemonic(insn: &Instruction) -> String {
    let base = match insn.kind {
        Kind::Branch(b) if b.link => "bl",
        Kind::Branch(_) => "b",
        Kind::BranchExchange(_) => "bx",
        Kind::DataProcessing(dp) => dp.op.mnemonic(),
        Kind::Undefined => "und",
        Kind::Unclassified => return ".word".to_string(),
    };
    let cond = match insn.cond {
        Condition::Al => "",
        c => c.mnemonic(),
    };
    // Compares always set flags and never carry the `s` suffix.
    let s = match insn.kind {
        Kind::DataProcessing(dp)
            if dp.set_flags
                && !matches!(dp.op, AluOp::Tst | AluOp::Teq | AluOp::Cmp | AluOp::Cmn) =>
        {
            "s"
        }
        _ => "",
    };
    format!("{base}{cond}{s}")
}

pub fn fmt_condition(insn: &Instruction) -> String {
    format!("[ COND ] {}", insn.cond.description())
}

/// Action line followed by the condition line.
pub fn fmt_full(insn: &Instruction) -> String {
    format!("{}\n{}", fmt_instruction(insn), fmt_condition(insn))
}

pub fn fmt_operand(op: &Operand) -> String {
    match *op {
        Operand::Immediate { value, .. } => format!("immediate {value}"),
        Operand::Register { rm, shift, amount } => format!(
            "register {rm} with transformation {} by {}",
            shift_name(shift),
            fmt_amount(amount)
        ),
    }
}

fn shift_name(shift: ShiftType) -> &'static str {
    match shift {
        ShiftType::Lsl => "logical_shift_left",
        ShiftType::Lsr => "logical_shift_right",
        ShiftType::Asr => "arithmetic_shift_right",
        ShiftType::Ror => "rotate_right",
        ShiftType::Rrx => "rotate_right_with_extend",
    }
}

fn fmt_amount(amount: ShiftAmount) -> String {
    match amount {
        ShiftAmount::Immediate(n) => n.to_string(),
        ShiftAmount::Register(r) => format!("register {r}"),
    }
}
