use anyhow::Result;
use std::io::{BufRead, Write};

use arm7_rs::disasm::fmt_full;

use crate::session::{Mode, Session, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Mode(Mode),
    Step,
}

impl Command {
    /// Anything that is not a known command steps.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "stop" | "quit" | "exit" => Command::Quit,
            "thumb" => Command::Mode(Mode::Thumb),
            "arm" => Command::Mode(Mode::Arm),
            _ => Command::Step,
        }
    }
}

pub fn fmt_step(step: &Step) -> String {
    let raw = step.insn.raw;
    let mut out = format!(
        "[{:#06x}] {:04b} {:b}\n[ARM32 ] {}",
        step.pc,
        raw >> 28,
        raw & !(0xF << 28),
        fmt_full(&step.insn)
    );
    if step.redirected() {
        out.push_str(&format!("\nNew PC: {:#06x}", step.next_pc));
    }
    out
}

/// Decodes, prints, then waits for a command; repeats until quit or EOF.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_>, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", session.image().len())?;
    let mut lines = input.lines();
    loop {
        match session.step() {
            Ok(step) => writeln!(out, "{}", fmt_step(&step))?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        match Command::parse(&line?) {
            Command::Quit => break,
            Command::Mode(mode) => session.set_mode(mode),
            Command::Step => {}
        }
    }
    Ok(())
}
