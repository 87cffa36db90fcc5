use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use arm7_rs::resolve::ARM_WIDTH;
use arm7_rs::{decode_one, Fault, Instruction};

use crate::model::{read_u32, Image};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Arm,
    Thumb,
}

impl Mode {
    pub fn alignment(self) -> u32 {
        match self {
            Mode::Arm => 4,
            Mode::Thumb => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Address of the first instruction to decode.
    pub entry: u32,
    pub mode: Mode,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("THUMB decoding is not supported (pc {pc:#010x}); switch back with `arm`")]
    ThumbUnsupported { pc: u32 },
    #[error("pc {pc:#010x} is not aligned to {align} bytes")]
    Misaligned { pc: u32, align: u32 },
    #[error("no full instruction at {pc:#010x}")]
    OutOfBounds { pc: u32 },
    #[error(transparent)]
    Fault(#[from] Fault),
}

/// Result of decoding the instruction at `pc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub pc: u32,
    pub insn: Instruction,
    /// Statically resolved branch target, if any.
    pub new_pc: Option<u32>,
    /// Where the session continues.
    pub next_pc: u32,
}

impl Step {
    pub fn redirected(&self) -> bool {
        self.next_pc != self.pc.wrapping_add(ARM_WIDTH)
    }
}

/// Owns the position and mode of a stepping session over an image.
pub struct Session<'a> {
    img: &'a Image,
    pc: u32,
    mode: Mode,
}

impl<'a> Session<'a> {
    pub fn new(img: &'a Image, cfg: SessionConfig) -> Self {
        Self {
            img,
            pc: cfg.entry,
            mode: cfg.mode,
        }
    }

    pub fn pc(&self) -> u32 {
        self.pc
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn image(&self) -> &Image {
        self.img
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            info!(?mode, pc = self.pc, "mode switched");
        }
        self.mode = mode;
    }

    /// Decodes at the current pc without moving.
    pub fn peek(&self) -> Result<Step, StepError> {
        let pc = self.pc;
        if self.mode == Mode::Thumb {
            return Err(StepError::ThumbUnsupported { pc });
        }
        let align = self.mode.alignment();
        if pc % align != 0 {
            return Err(StepError::Misaligned { pc, align });
        }
        let word = read_u32(self.img, pc).ok_or(StepError::OutOfBounds { pc })?;
        let (insn, new_pc) = decode_one(word, pc)?;
        let next_pc = new_pc.unwrap_or_else(|| pc.wrapping_add(ARM_WIDTH));
        Ok(Step {
            pc,
            insn,
            new_pc,
            next_pc,
        })
    }

    /// Decodes at the current pc and moves to the next one.
    pub fn step(&mut self) -> Result<Step, StepError> {
        match self.peek() {
            Ok(step) => {
                debug!(pc = step.pc, raw = step.insn.raw, next = step.next_pc, "step");
                self.pc = step.next_pc;
                Ok(step)
            }
            Err(e) => {
                warn!(pc = self.pc, "step refused: {e}");
                Err(e)
            }
        }
    }
}
