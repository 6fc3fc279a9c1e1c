//! Bit-level reading and writing over in-memory byte buffers.
//!
//! All multi-bit operations are most-significant-bit first, so a value
//! written through [`BitWriter::write_bits`] reads back identically
//! through [`BitReader::read_bits`] regardless of byte alignment.

use bitvec::prelude::*;

/// Reads fixed-width bit groups from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        BitReader {
            bits: data.view_bits::<Msb0>(),
            pos: 0,
        }
    }

    /// Read the next `n` bits (1..=32) as an unsigned integer.
    ///
    /// Returns `None` once fewer than `n` bits remain; the reader is
    /// exhausted from that point on.
    pub fn read_bits(&mut self, n: u32) -> Option<u32> {
        debug_assert!((1..=32).contains(&n));
        let end = self.pos + n as usize;
        if end > self.bits.len() {
            self.pos = self.bits.len();
            return None;
        }
        let value = self.bits[self.pos..end].load_be::<u32>();
        self.pos = end;
        Some(value)
    }
}

/// Accumulates bits and packs them into bytes.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitVec<u8, Msb0>,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter { bits: BitVec::new() }
    }

    /// Write the low `n` bits (1..=32) of `value`, most-significant bit first.
    pub fn write_bits(&mut self, n: u32, value: u32) {
        debug_assert!((1..=32).contains(&n));
        for shift in (0..n).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Append an already-derived bit string verbatim.
    pub fn write_code(&mut self, code: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(code);
    }

    /// Pad the final partial byte with zero bits and hand back the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        self.bits.set_uninitialized(false);
        self.bits.into_vec()
    }
}
