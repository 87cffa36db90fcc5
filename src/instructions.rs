use serde::{Deserialize, Serialize};

/// Data-processing operation selected by bits 24..21.
///
/// `Teqp` is not a separate encoding: it is opcode `1001` (TEQ) with the
/// set-flags bit clear, which the ARM7 reuses as a status-register transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    And,
    Eor,
    Sub,
    Rsb,
    Add,
    Adc,
    Sbc,
    Rsc,
    Tst,
    Teq,
    Cmp,
    Cmn,
    Orr,
    Mov,
    Bic,
    Mvn,
    Teqp,
}

#[derive(Debug, Clone, Copy)]
pub struct AluDesc {
    pub op: AluOp,
    pub mnemonic: &'static str,
    pub description: &'static str,
}

/// Indexed by the 4-bit opcode field.
pub const TABLE: &[AluDesc] = &[
    AluDesc {
        op: AluOp::And,
        mnemonic: "and",
        description: "AND (src AND operand)",
    },
    AluDesc {
        op: AluOp::Eor,
        mnemonic: "eor",
        description: "EOR (src XOR operand)",
    },
    AluDesc {
        op: AluOp::Sub,
        mnemonic: "sub",
        description: "SUB (src - operand)",
    },
    AluDesc {
        op: AluOp::Rsb,
        mnemonic: "rsb",
        description: "RSB (operand - src)",
    },
    AluDesc {
        op: AluOp::Add,
        mnemonic: "add",
        description: "ADD (src + operand)",
    },
    AluDesc {
        op: AluOp::Adc,
        mnemonic: "adc",
        description: "ADC (src + operand with carry)",
    },
    AluDesc {
        op: AluOp::Sbc,
        mnemonic: "sbc",
        description: "SBC (src - operand with carry)",
    },
    AluDesc {
        op: AluOp::Rsc,
        mnemonic: "rsc",
        description: "RSC (operand - src with carry)",
    },
    AluDesc {
        op: AluOp::Tst,
        mnemonic: "tst",
        description: "TST (Set flags with AND result)",
    },
    AluDesc {
        op: AluOp::Teq,
        mnemonic: "teq",
        description: "TEQ (Set flags with XOR result)",
    },
    AluDesc {
        op: AluOp::Cmp,
        mnemonic: "cmp",
        description: "CMP (Set flags on src - operand)",
    },
    AluDesc {
        op: AluOp::Cmn,
        mnemonic: "cmn",
        description: "CMN (Set flags on src + operand)",
    },
    AluDesc {
        op: AluOp::Orr,
        mnemonic: "orr",
        description: "ORR (src OR operand)",
    },
    AluDesc {
        op: AluOp::Mov,
        mnemonic: "mov",
        description: "MOV (MOV operand to dest)",
    },
    AluDesc {
        op: AluOp::Bic,
        mnemonic: "bic",
        description: "BIC (src AND NOT operand)",
    },
    AluDesc {
        op: AluOp::Mvn,
        mnemonic: "mvn",
        description: "MVN (NOT operand)",
    },
];

static TEQP: AluDesc = AluDesc {
    op: AluOp::Teqp,
    mnemonic: "teqp",
    description: "TEQP (Move SPSR to CPSR if in privileged mode)",
};

impl AluOp {
    /// Resolves the opcode field, applying the TEQ/TEQP split on the S bit.
    pub fn from_fields(opcode: u8, set_flags: bool) -> Self {
        if opcode == 0b1001 && !set_flags {
            return AluOp::Teqp;
        }
        TABLE[(opcode & 0xF) as usize].op
    }

    pub fn desc(self) -> &'static AluDesc {
        match self {
            AluOp::Teqp => &TEQP,
            op => &TABLE[op as usize],
        }
    }

    pub fn mnemonic(self) -> &'static str {
        self.desc().mnemonic
    }

    pub fn description(self) -> &'static str {
        self.desc().description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_opcode() {
        assert_eq!(TABLE.len(), 16);
        for (i, d) in TABLE.iter().enumerate() {
            assert_eq!(d.op as usize, i);
        }
    }

    #[test]
    fn teq_without_s_is_teqp() {
        assert_eq!(AluOp::from_fields(0b1001, false), AluOp::Teqp);
        assert_eq!(AluOp::from_fields(0b1001, true), AluOp::Teq);
        assert_eq!(AluOp::from_fields(0b1101, false), AluOp::Mov);
        assert!(AluOp::Teqp.description().starts_with("TEQP"));
    }
}
