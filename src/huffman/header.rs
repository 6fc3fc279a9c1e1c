//! Serialization of the code tree into the stream header.
//!
//! The tree is written pre-order: an internal node is a single 0 bit
//! followed by its left then right subtree; a leaf is a single 1 bit
//! followed by its symbol as a fixed 9-bit field (values 0..=256, wide
//! enough for the end-of-stream marker).

use crate::bitio::{BitReader, BitWriter};
use crate::error::Error;
use crate::huffman::tree::HuffmanNode;
use crate::huffman::ALPHABET_SIZE;
use crate::Result;

/// Width of the symbol field that follows each leaf marker.
const LEAF_SYMBOL_BITS: u32 = 9;

/// Write the tree structure as a pre-order bit sequence.
pub fn write_header(node: &HuffmanNode, out: &mut BitWriter) {
    match node {
        HuffmanNode::Internal { left, right, .. } => {
            out.write_bits(1, 0);
            write_header(left, out);
            write_header(right, out);
        }
        HuffmanNode::Leaf { symbol, .. } => {
            out.write_bits(1, 1);
            out.write_bits(LEAF_SYMBOL_BITS, u32::from(*symbol));
        }
    }
}

/// Rebuild a tree from the bit sequence produced by [`write_header`].
///
/// Weights are not serialized, so reconstructed nodes carry a weight of
/// zero; only the shape and leaf symbols matter for decoding. Fails
/// with [`Error::MalformedHeader`] if the input ends mid-structure or a
/// leaf symbol falls outside the alphabet.
pub fn read_header(input: &mut BitReader) -> Result<HuffmanNode> {
    match input.read_bits(1).ok_or(Error::MalformedHeader)? {
        0 => {
            let left = Box::new(read_header(input)?);
            let right = Box::new(read_header(input)?);
            Ok(HuffmanNode::Internal {
                weight: 0,
                left,
                right,
            })
        }
        _ => {
            let symbol = input
                .read_bits(LEAF_SYMBOL_BITS)
                .ok_or(Error::MalformedHeader)?;
            if symbol as usize >= ALPHABET_SIZE {
                return Err(Error::MalformedHeader);
            }
            Ok(HuffmanNode::Leaf {
                symbol: symbol as u16,
                weight: 0,
            })
        }
    }
}
