use serde::Serialize;

use arm7_rs::disasm::{fmt_instruction, fmt_mnemonic};
use arm7_rs::resolve::ARM_WIDTH;
use arm7_rs::{decode_one, Fault, Instruction};

use crate::model::{read_u32, Image};

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub addr: u32,
    pub raw: u32,
    pub mnemonic: String,
    pub text: String,
    pub insn: Instruction,
    pub new_pc: Option<u32>,
}

/// Linear sweep over `[start, end)`, one ARM word at a time; branches are
/// reported but not followed. Stops at the first unmapped word.
pub fn list_range(img: &Image, start: u32, end: u32) -> Result<Vec<Row>, Fault> {
    let mut rows = Vec::new();
    let mut pc = start;
    while pc < end {
        let Some(raw) = read_u32(img, pc) else { break };
        let (insn, new_pc) = decode_one(raw, pc)?;
        rows.push(Row {
            addr: pc,
            raw,
            mnemonic: fmt_mnemonic(&insn),
            text: fmt_instruction(&insn),
            insn,
            new_pc,
        });
        let Some(next) = pc.checked_add(ARM_WIDTH) else { break };
        pc = next;
    }
    Ok(rows)
}

pub fn fmt_row(row: &Row) -> String {
    match row.new_pc {
        Some(t) => format!(
            "{:#010x}: {:08x}  {:<8} {} -> {t:#010x}",
            row.addr, row.raw, row.mnemonic, row.text
        ),
        None => format!(
            "{:#010x}: {:08x}  {:<8} {}",
            row.addr, row.raw, row.mnemonic, row.text
        ),
    }
}
