//! Lossless Huffman compression with a self-describing stream header.
//!
//! This crate implements the full encode/decode pipeline:
//! - Frequency counting over one full pass of the input
//! - Prefix-free code construction via greedy weighted merging
//! - Pre-order tree serialization, so every stream carries its own code tree
//! - Bit-level encode and decode loops terminated by an in-band end-of-stream marker
//!
//! # Examples
//!
//! ```rust
//! use huffpack::{Compression, Huffman};
//!
//! let input = b"abracadabra";
//! let packed = Huffman.compress(input).unwrap();
//! let restored = Huffman.decompress(&packed).unwrap();
//! assert_eq!(restored, input);
//! ```

pub mod bitio;
pub mod error;
pub mod huffman;

pub use error::Error;
pub use huffman::{compress, decompress, CodeTable, FrequencyTable, HuffmanNode};

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for compression algorithms
pub trait Compression {
    /// Compress the input data
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress the compressed data
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Huffman coding with the code tree serialized into the stream header.
#[derive(Debug, Clone, Copy, Default)]
pub struct Huffman;

impl Compression for Huffman {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        huffman::compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        huffman::decompress(data)
    }
}
