use std::fmt;

use super::tree::{HuffmanTree, NodeKind};
use crate::frequency::SYMBOL_COUNT;

/// Longest possible code over a 256 symbol alphabet: a fully degenerate tree
/// puts the rarest symbol 255 edges below the root.
const MAX_CODE_LENGTH: usize = SYMBOL_COUNT - 1;

/// A single code word, packed most-significant-bit first so it can be handed
/// to the bit writer without reshuffling.
#[derive(Clone, Copy)]
pub struct CodeWord {
    bits: [u8; MAX_CODE_LENGTH.div_ceil(8)],
    length: usize,
}

impl CodeWord {
    fn new() -> CodeWord {
        CodeWord {
            bits: [0; MAX_CODE_LENGTH.div_ceil(8)],
            length: 0,
        }
    }

    /// Returns a copy of this word with one more bit appended. Taking and
    /// returning by value lets the tree traversal hand each subtree its own
    /// prefix without shared mutable state.
    fn push(self, bit: bool) -> CodeWord {
        let mut word = self;
        if word.length >= MAX_CODE_LENGTH {
            panic!("code word exceeds the maximum depth of a 256 symbol tree");
        }
        if bit {
            word.bits[word.length / 8] |= 0b1000_0000 >> (word.length % 8);
        }
        word.length += 1;
        word
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn bit(&self, index: usize) -> bool {
        self.bits[index / 8] & (0b1000_0000 >> (index % 8)) > 0
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bits
    }
}

impl fmt::Display for CodeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.length {
            write!(f, "{}", if self.bit(index) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Mapping from byte value to its code word, derived from root-to-leaf paths.
pub struct CodeTable {
    codes: [Option<CodeWord>; SYMBOL_COUNT],
}

fn fill_table(table: &mut CodeTable, tree: &HuffmanTree, node_index: usize, prefix: CodeWord) {
    match tree.node(node_index).kind {
        NodeKind::Leaf { symbol } => {
            table.codes[symbol as usize] = Some(prefix);
        }
        NodeKind::Inner { left, right } => {
            fill_table(table, tree, left, prefix.push(false));
            fill_table(table, tree, right, prefix.push(true));
        }
    }
}

impl CodeTable {
    /// Walks the tree depth-first, appending a 0 bit for every left edge and
    /// a 1 bit for every right edge; the accumulated path at a leaf becomes
    /// that symbol's code.
    ///
    /// A tree consisting of a single leaf gets the one-bit code "0" assigned
    /// directly. The generic traversal would reach that leaf with an empty
    /// path, and an empty code cannot be written to the bit stream.
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let mut table = CodeTable {
            codes: [None; SYMBOL_COUNT],
        };
        match tree.root().kind {
            NodeKind::Leaf { symbol } => {
                table.codes[symbol as usize] = Some(CodeWord::new().push(false));
            }
            NodeKind::Inner { .. } => {
                fill_table(&mut table, tree, tree.root_index(), CodeWord::new());
            }
        }
        table
    }

    pub fn code_of(&self, symbol: u8) -> Option<&CodeWord> {
        self.codes[symbol as usize].as_ref()
    }

    /// All assigned codes in ascending symbol order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &CodeWord)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|code| (symbol as u8, code)))
    }
}
