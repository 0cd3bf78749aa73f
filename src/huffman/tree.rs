use super::heap::MinHeap;
use crate::frequency::FrequencyTable;

#[derive(Clone, Copy)]
pub enum NodeKind {
    Leaf { symbol: u8 },
    Inner { left: usize, right: usize },
}

/// Tree node stored in the arena. Inner nodes reference their children by
/// arena index, so the tree owns all nodes in one allocation.
#[derive(Clone, Copy)]
pub struct Node {
    pub frequency: usize,
    pub kind: NodeKind,
}

pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    leaf_count: usize,
}

impl HuffmanTree {
    /// Builds the tree bottom-up from the scanned frequencies: every present
    /// symbol becomes a leaf, then the two least frequent nodes are merged
    /// under a fresh inner node until a single root remains.
    ///
    /// The first node extracted from the heap becomes the right child, the
    /// second the left. The assignment is arbitrary but must stay fixed: it
    /// decides the bit values of the codes, though not their lengths.
    ///
    /// Returns `None` for an empty frequency table, since no tree exists for
    /// an empty alphabet. A table with a single present symbol yields a tree
    /// whose root is that one leaf.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<HuffmanTree> {
        if frequencies.is_empty() {
            return None;
        }
        let leaf_count = frequencies.unique_symbol_count();
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaf_count - 1);
        let mut heap = MinHeap::with_capacity(leaf_count);
        for (symbol, frequency) in frequencies.symbols_and_frequencies() {
            let node = Node {
                frequency,
                kind: NodeKind::Leaf { symbol },
            };
            heap.insert(frequency, nodes.len());
            nodes.push(node);
        }
        while heap.len() > 1 {
            let first = heap.extract_min()?;
            let second = heap.extract_min()?;
            let node = Node {
                frequency: first.frequency + second.frequency,
                kind: NodeKind::Inner {
                    left: second.node_index,
                    right: first.node_index,
                },
            };
            heap.insert(node.frequency, nodes.len());
            nodes.push(node);
        }
        let root_index = heap.extract_min()?.node_index;
        Some(HuffmanTree {
            nodes,
            root_index,
            leaf_count,
        })
    }

    pub fn root(&self) -> Node {
        self.nodes[self.root_index]
    }

    pub fn root_index(&self) -> usize {
        self.root_index
    }

    pub fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn inner_node_count(&self) -> usize {
        self.nodes.len() - self.leaf_count
    }
}
