use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::instructions::AluOp;
use crate::resolve::PcChange;

/// Instruction family picked by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Branch,
    BranchExchange,
    DataProcessing,
    Undefined,
    Unclassified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Byte offset, already sign-extended and scaled by 4.
    pub offset: i32,
    pub link: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchExchange {
    pub rn: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    Lsl,
    Lsr,
    Asr,
    Ror,
    /// `ROR #0` with an immediate amount: rotate right by one through carry.
    Rrx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftAmount {
    Immediate(u8),
    Register(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Immediate { imm8: u8, rotate: u8, value: u32 },
    Register { rm: u8, shift: ShiftType, amount: ShiftAmount },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataProcessing {
    pub immediate: bool,
    pub opcode: u8,
    pub op: AluOp,
    pub set_flags: bool,
    pub rn: u8,
    pub rd: u8,
    pub operand: Operand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Branch(Branch),
    BranchExchange(BranchExchange),
    DataProcessing(DataProcessing),
    Undefined,
    Unclassified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub raw: u32,
    pub cond: Condition,
    pub kind: Kind,
}

impl Instruction {
    /// The untranslated condition nibble; differs from `cond` only for the reserved code 15.
    pub fn condition_code(&self) -> u8 {
        (self.raw >> 28) as u8
    }

    pub fn variant(&self) -> Variant {
        match self.kind {
            Kind::Branch(_) => Variant::Branch,
            Kind::BranchExchange(_) => Variant::BranchExchange,
            Kind::DataProcessing(_) => Variant::DataProcessing,
            Kind::Undefined => Variant::Undefined,
            Kind::Unclassified => Variant::Unclassified,
        }
    }

    /// Statically known effect on the program counter, if any.
    ///
    /// `BX` targets and data-processing writes to r15 depend on register
    /// contents and report `None`.
    pub fn pc_change(&self) -> Option<PcChange> {
        match self.kind {
            Kind::Branch(b) => Some(PcChange::Delta(b.offset)),
            Kind::BranchExchange(_)
            | Kind::DataProcessing(_)
            | Kind::Undefined
            | Kind::Unclassified => None,
        }
    }
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Instruction;
}
