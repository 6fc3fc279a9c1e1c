use bitvec::prelude::*;

use crate::huffman::tree::HuffmanNode;
use crate::huffman::ALPHABET_SIZE;

/// Bit-string code for a single symbol, leftmost bit first.
pub type Code = BitVec<u8, Msb0>;

/// Maps each leaf symbol to its path from the root: 0 for a left
/// descent, 1 for a right descent. No code is a prefix of another,
/// since no root-to-leaf path passes through another leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Derive codes by a depth-first walk of the tree.
    pub fn from_tree(root: &HuffmanNode) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        let mut path = Code::new();
        assign(root, &mut path, &mut codes);
        CodeTable { codes }
    }

    /// The code for `symbol`, if it occurred in the counted input.
    pub fn get(&self, symbol: u16) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(symbol as usize).and_then(|c| c.as_deref())
    }

    /// Number of symbols with an assigned code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All assigned codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &BitSlice<u8, Msb0>)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_deref().map(|c| (symbol as u16, c)))
    }
}

fn assign(node: &HuffmanNode, path: &mut Code, codes: &mut [Option<Code>]) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            // A root that is itself a leaf still needs a 1-bit code;
            // a zero-length code would break the decode walk.
            let code = if path.is_empty() {
                Code::repeat(false, 1)
            } else {
                path.clone()
            };
            codes[*symbol as usize] = Some(code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push(false);
            assign(left, path, codes);
            path.pop();
            path.push(true);
            assign(right, path, codes);
            path.pop();
        }
    }
}
