use log::{debug, trace};

use crate::bitio::{BitReader, BitWriter};
use crate::error::Error;
use crate::huffman::code::CodeTable;
use crate::huffman::freq::FrequencyTable;
use crate::huffman::header::{read_header, write_header};
use crate::huffman::tree::HuffmanNode;
use crate::huffman::{END_OF_STREAM, SYMBOL_BITS};
use crate::Result;

/// Tag identifying a compressed stream that carries its code tree in
/// the header. Written as the first 32 bits of every stream.
pub const TREE_FORMAT_MAGIC: u32 = 0xface_8201;

/// Emit the code for each 8-bit symbol of `input`, then the code for
/// the end-of-stream marker.
///
/// This is the second pass over the original input; the caller re-reads
/// from the start of the same source the frequencies were counted on.
/// Fails with [`Error::MissingCode`] if a symbol has no table entry,
/// which can only happen when counting and encoding read different
/// sources.
pub fn encode(codes: &CodeTable, input: &mut BitReader, out: &mut BitWriter) -> Result<()> {
    while let Some(value) = input.read_bits(SYMBOL_BITS) {
        let symbol = value as u16;
        let code = codes.get(symbol).ok_or(Error::MissingCode(symbol))?;
        out.write_code(code);
    }
    let marker = codes
        .get(END_OF_STREAM)
        .ok_or(Error::MissingCode(END_OF_STREAM))?;
    out.write_code(marker);
    Ok(())
}

/// Walk the tree bit-by-bit from the root, emitting a byte at every
/// literal leaf, until the end-of-stream leaf is reached.
///
/// Bits left over after the marker (padding from byte alignment) are
/// never read. Fails with [`Error::TruncatedStream`] if the input runs
/// out first.
pub fn decode(root: &HuffmanNode, input: &mut BitReader) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    if let HuffmanNode::Leaf { symbol, .. } = root {
        // A lone-leaf tree has no payload to walk. Its leaf is the
        // marker for any stream a compressor produced; a lone literal
        // leaf could never terminate the walk.
        return if *symbol == END_OF_STREAM {
            Ok(output)
        } else {
            Err(Error::TruncatedStream)
        };
    }
    let mut current = root;
    loop {
        let bit = input.read_bits(1).ok_or(Error::TruncatedStream)?;
        if let HuffmanNode::Internal { left, right, .. } = current {
            current = if bit == 0 { left } else { right };
        }
        if let HuffmanNode::Leaf { symbol, .. } = current {
            if *symbol == END_OF_STREAM {
                return Ok(output);
            }
            output.push(*symbol as u8);
            current = root;
        }
    }
}

/// Compress `data` into a self-describing bitstream.
///
/// The stream starts with [`TREE_FORMAT_MAGIC`], followed by the
/// serialized code tree and the bit-packed payload. Compression makes
/// two passes over `data`, so the whole input is held in memory for
/// the duration of the call.
///
/// # Example
///
/// ```
/// use huffpack::huffman::{compress, decompress};
///
/// let input = b"abracadabra abracadabra";
/// let packed = compress(input).unwrap();
/// assert_eq!(decompress(&packed).unwrap(), input);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let freq = FrequencyTable::count(&mut BitReader::new(data));
    let tree = HuffmanNode::build(&freq);
    let codes = CodeTable::from_tree(&tree);
    trace!(
        "{} symbols coded, longest code {} bits",
        codes.len(),
        codes.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    );

    let mut out = BitWriter::new();
    out.write_bits(32, TREE_FORMAT_MAGIC);
    write_header(&tree, &mut out);
    encode(&codes, &mut BitReader::new(data), &mut out)?;
    let packed = out.finish();
    debug!("compressed {} bytes into {}", data.len(), packed.len());
    Ok(packed)
}

/// Decompress a stream produced by [`compress`].
///
/// Fails with [`Error::InvalidFormat`] if the stream does not start
/// with the expected magic tag, [`Error::MalformedHeader`] if the code
/// tree is incomplete, and [`Error::TruncatedStream`] if the payload
/// ends before the end-of-stream marker.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut input = BitReader::new(data);
    let found = input.read_bits(32);
    if found != Some(TREE_FORMAT_MAGIC) {
        return Err(Error::InvalidFormat { found });
    }
    let tree = read_header(&mut input)?;
    let output = decode(&tree, &mut input)?;
    debug!("restored {} bytes from {}", output.len(), data.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_round_trip() {
        let input = b"huffman coding in rust is fun!";
        let packed = compress(input).unwrap();
        assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_empty_input_round_trips() {
        let packed = compress(&[]).unwrap();
        assert_eq!(decompress(&packed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_symbol_round_trips() {
        let input = [b'a'; 100];
        let packed = compress(&input).unwrap();
        assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_all_byte_values_round_trip() {
        let input: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        let packed = compress(&input).unwrap();
        assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_random_data_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut input = vec![0u8; 10_000];
        rng.fill(&mut input[..]);
        let packed = compress(&input).unwrap();
        assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_skewed_input_round_trips() {
        let input = [65u8, 65, 66, 65];
        let packed = compress(&input).unwrap();
        assert_eq!(decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_repetitive_input_shrinks() {
        let input = [b'z'; 1000];
        let packed = compress(&input).unwrap();
        assert!(packed.len() < input.len());
    }

    #[test]
    fn test_wrong_magic_is_rejected() {
        let mut packed = compress(b"some payload").unwrap();
        packed[0] ^= 0xFF;
        assert!(matches!(
            decompress(&packed),
            Err(Error::InvalidFormat { found: Some(_) })
        ));
    }

    #[test]
    fn test_stream_too_short_for_magic_is_rejected() {
        assert_eq!(
            decompress(&[0xFA, 0xCE]),
            Err(Error::InvalidFormat { found: None })
        );
    }

    #[test]
    fn test_truncated_payload_is_detected() {
        let input: Vec<u8> = b"abcabcabc".repeat(20);
        let packed = compress(&input).unwrap();
        let truncated = &packed[..packed.len() - 2];
        assert_eq!(decompress(truncated), Err(Error::TruncatedStream));
    }

    #[test]
    fn test_encoding_an_uncounted_symbol_fails() {
        let counted = FrequencyTable::count(&mut BitReader::new(b"aa"));
        let codes = CodeTable::from_tree(&HuffmanNode::build(&counted));
        let mut out = BitWriter::new();
        let result = encode(&codes, &mut BitReader::new(b"ab"), &mut out);
        assert_eq!(result, Err(Error::MissingCode(b'b' as u16)));
    }

    #[test]
    fn test_lone_literal_leaf_cannot_terminate() {
        // A header like this never comes out of compress; a decoder
        // must still refuse to loop on it.
        let root = HuffmanNode::Leaf {
            symbol: b'x' as u16,
            weight: 0,
        };
        let result = decode(&root, &mut BitReader::new(&[0b0101_0101]));
        assert_eq!(result, Err(Error::TruncatedStream));
    }
}
