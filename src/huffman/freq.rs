use crate::bitio::BitReader;
use crate::huffman::{ALPHABET_SIZE, END_OF_STREAM, SYMBOL_BITS};

/// Per-symbol occurrence counts over one full pass of the input.
///
/// Holds one counter for each of the 256 byte values plus the
/// end-of-stream marker, whose count is always exactly 1.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Count 8-bit symbols until the reader is exhausted, then pin the
    /// end-of-stream marker's count to 1. An empty input yields a table
    /// where only the marker is non-zero.
    pub fn count(input: &mut BitReader) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        while let Some(value) = input.read_bits(SYMBOL_BITS) {
            counts[value as usize] += 1;
        }
        counts[END_OF_STREAM as usize] = 1;
        FrequencyTable { counts }
    }

    /// Occurrence count for `symbol`.
    pub fn get(&self, symbol: u16) -> u64 {
        self.counts[symbol as usize]
    }

    /// Non-zero symbols in ascending symbol order. This fixed order is
    /// what makes tree construction reproducible run-to-run.
    pub fn symbols(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u16, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_byte_value() {
        let data = [65u8, 65, 66, 65];
        let freq = FrequencyTable::count(&mut BitReader::new(&data));
        assert_eq!(freq.get(65), 3);
        assert_eq!(freq.get(66), 1);
        assert_eq!(freq.get(67), 0);
        assert_eq!(freq.get(END_OF_STREAM), 1);
    }

    #[test]
    fn test_empty_input_only_has_the_marker() {
        let freq = FrequencyTable::count(&mut BitReader::new(&[]));
        let symbols: Vec<_> = freq.symbols().collect();
        assert_eq!(symbols, vec![(END_OF_STREAM, 1)]);
    }

    #[test]
    fn test_symbols_iterate_in_ascending_order() {
        let data = b"cabbage";
        let freq = FrequencyTable::count(&mut BitReader::new(data));
        let symbols: Vec<u16> = freq.symbols().map(|(s, _)| s).collect();
        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);
    }
}
