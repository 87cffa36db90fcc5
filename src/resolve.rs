use serde::{Deserialize, Serialize};

use crate::decoder::{Decoder, Instruction, Variant};
use crate::isa::arm::ArmDecoder;

/// Bytes the fetch stage has advanced past the executing instruction
/// besides its own increment (two instructions of read-ahead).
pub const PIPELINE_AHEAD: u32 = 8;

/// ARM instruction width.
pub const ARM_WIDTH: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcChange {
    /// Relative to the post-increment pc, before pipeline read-ahead.
    Delta(i32),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("{variant:?} instruction {raw:#010x} reported an inconsistent pc change")]
    InconsistentPcChange { variant: Variant, raw: u32 },
}

impl PcChange {
    /// Target of the change for an instruction at `pc`. Alignment of `pc` is
    /// the caller's precondition and is not checked.
    pub fn apply(self, pc: u32) -> u32 {
        match self {
            PcChange::Delta(offset) => pc
                .wrapping_add(ARM_WIDTH)
                .wrapping_add_signed(offset)
                .wrapping_add(PIPELINE_AHEAD),
        }
    }
}

/// New program counter after executing `insn` at `current_pc`, when it can
/// be known without register state. `Ok(None)` means "not statically known",
/// not "sequential".
pub fn resolve_pc_change(insn: &Instruction, current_pc: u32) -> Result<Option<u32>, Fault> {
    match (insn.variant(), insn.pc_change()) {
        (Variant::Branch, Some(change)) => Ok(Some(change.apply(current_pc))),
        (
            Variant::BranchExchange
            | Variant::DataProcessing
            | Variant::Undefined
            | Variant::Unclassified,
            None,
        ) => Ok(None),
        (variant, _) => Err(Fault::InconsistentPcChange {
            variant,
            raw: insn.raw,
        }),
    }
}

/// Decodes one ARM word fetched from `current_pc` and resolves its pc change.
pub fn decode_one(word: u32, current_pc: u32) -> Result<(Instruction, Option<u32>), Fault> {
    let insn = ArmDecoder::new().decode(word);
    let new_pc = resolve_pc_change(&insn, current_pc)?;
    Ok((insn, new_pc))
}
