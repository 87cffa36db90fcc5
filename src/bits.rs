//! Bit-field helpers shared by the classifier and the per-variant decoders.
//!
//! Bit positions count from 0 at the least significant bit, matching the
//! numbering used in the ARM architecture reference.

use bitvec::prelude::*;

/// Returns bits `hi..=lo` of `word`, shifted down to bit 0.
#[inline]
pub fn field(word: u32, hi: usize, lo: usize) -> u32 {
    debug_assert!(hi < 32 && lo <= hi);
    word.view_bits::<Lsb0>()[lo..=hi].load_le::<u32>()
}

/// Returns bits `hi..=lo` of `word` as a byte. The range must be at most 8 bits wide.
#[inline]
pub fn field_u8(word: u32, hi: usize, lo: usize) -> u8 {
    debug_assert!(hi - lo < 8);
    field(word, hi, lo) as u8
}

#[inline]
pub fn bit(word: u32, idx: usize) -> bool {
    debug_assert!(idx < 32);
    word.view_bits::<Lsb0>()[idx]
}

/// True when bits `hi..=lo` of `word` equal `pattern`.
#[inline]
pub fn matches(word: u32, hi: usize, lo: usize, pattern: u32) -> bool {
    field(word, hi, lo) == pattern
}

/// Sign-extends the low `bits` bits of `v`.
#[inline]
pub fn sign_extend(v: u32, bits: u32) -> i32 {
    debug_assert!(bits > 0 && bits <= 32);
    let s = 32 - bits;
    ((v << s) as i32) >> s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_extracts_inclusive_ranges() {
        let w = 0xE3A0_10FF_u32;
        assert_eq!(field(w, 31, 28), 0xE);
        assert_eq!(field(w, 27, 25), 0b001);
        assert_eq!(field(w, 7, 0), 0xFF);
        assert_eq!(field(w, 31, 0), w);
        assert_eq!(field_u8(w, 15, 12), 0x1);
    }

    #[test]
    fn bit_reads_single_positions() {
        let w = 0b1001_0000_u32;
        assert!(bit(w, 4));
        assert!(!bit(w, 5));
        assert!(bit(w, 7));
        assert!(!bit(w, 31));
        assert!(bit(0x8000_0000, 31));
    }

    #[test]
    fn matches_compares_against_pattern() {
        assert!(matches(0x0A00_0000, 27, 25, 0b101));
        assert!(!matches(0x0800_0000, 27, 25, 0b101));
    }

    #[test]
    fn sign_extend_24_bit_offsets() {
        assert_eq!(sign_extend(0x00_0001, 24), 1);
        assert_eq!(sign_extend(0xFF_FFFF, 24), -1);
        assert_eq!(sign_extend(0x80_0000, 24), -0x80_0000);
        assert_eq!(sign_extend(0x7F_FFFF, 24), 0x7F_FFFF);
    }
}
