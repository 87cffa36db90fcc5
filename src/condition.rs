use serde::{Deserialize, Serialize};

/// Condition field (bits 31..28) of an ARM instruction.
///
/// Code `0xF` is reserved on ARMv4T and is treated as [`Condition::Al`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Eq = 0x0,
    Ne = 0x1,
    Cs = 0x2,
    Cc = 0x3,
    Mi = 0x4,
    Pl = 0x5,
    Vs = 0x6,
    Vc = 0x7,
    Hi = 0x8,
    Ls = 0x9,
    Ge = 0xA,
    Lt = 0xB,
    Gt = 0xC,
    Le = 0xD,
    Al = 0xE,
}

impl Condition {
    /// Maps a 4-bit condition code. Only the low nibble of `code` is looked at.
    pub fn from_code(code: u8) -> Self {
        match code & 0xF {
            0x0 => Self::Eq,
            0x1 => Self::Ne,
            0x2 => Self::Cs,
            0x3 => Self::Cc,
            0x4 => Self::Mi,
            0x5 => Self::Pl,
            0x6 => Self::Vs,
            0x7 => Self::Vc,
            0x8 => Self::Hi,
            0x9 => Self::Ls,
            0xA => Self::Ge,
            0xB => Self::Lt,
            0xC => Self::Gt,
            0xD => Self::Le,
            _ => Self::Al,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Cs => "cs",
            Self::Cc => "cc",
            Self::Mi => "mi",
            Self::Pl => "pl",
            Self::Vs => "vs",
            Self::Vc => "vc",
            Self::Hi => "hi",
            Self::Ls => "ls",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Gt => "gt",
            Self::Le => "le",
            Self::Al => "al",
        }
    }

    /// Long form with the flag test spelled out, e.g. `"NE (Not Equal i.e. Z clear)"`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Eq => "EQ (Equal i.e. Z set)",
            Self::Ne => "NE (Not Equal i.e. Z clear)",
            Self::Cs => "CS (Unsigned higher/same i.e. C set)",
            Self::Cc => "CC (Unsigned lower i.e. C clear)",
            Self::Mi => "MI (Negative i.e. N set)",
            Self::Pl => "PL (Positive or Zero i.e. N clear)",
            Self::Vs => "VS (Overflow i.e. V set)",
            Self::Vc => "VC (No overflow i.e. V clear)",
            Self::Hi => "HI (Unsigned higher i.e. C set and Z clear)",
            Self::Ls => "LS (Unsigned lower or equal i.e. C clear or Z set)",
            Self::Ge => "GE (Greater or equal i.e. N=V)",
            Self::Lt => "LT (Less than i.e. N!=V)",
            Self::Gt => "GT (Greater than i.e. Z clear and N=V)",
            Self::Le => "LE (Less than or equal i.e. Z set or N!=V)",
            Self::Al => "AL (Always)",
        }
    }
}
