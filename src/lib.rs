pub mod bits;
pub mod condition;
pub mod decoder;
pub mod disasm;
pub mod instructions;
pub mod resolve;

pub mod isa {
    pub mod arm; // ARMv4T, ARM state only
}

pub use condition::Condition;
pub use decoder::{Decoder, Instruction, Kind, Variant};
pub use isa::arm::{classify, decode, ArmDecoder};
pub use resolve::{decode_one, resolve_pc_change, Fault, PcChange};
