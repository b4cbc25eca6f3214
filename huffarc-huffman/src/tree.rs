//! Huffman tree construction and traversal.
//!
//! The tree is a binary trie built once per compress or decompress
//! operation by the classic greedy merge: repeatedly combine the two
//! lightest nodes until one remains. Nodes live in an arena and refer to
//! each other by index (child indices downward for decoding, a parent
//! index upward for deriving codes), so there are no pointer cycles to
//! reason about.
//!
//! # Determinism
//!
//! Ties between equal-weight nodes are broken by the symbol of each node's
//! leftmost descendant leaf, cached at construction time. Since every leaf
//! belongs to exactly one live subtree, the `(weight, leftmost)` key is
//! unique across the queue, the ordering is total, and the tree shape is a
//! pure function of the frequency table. The compressor and decompressor
//! therefore always reconstruct structurally identical trees from the same
//! header.

use crate::freq::{FrequencyTable, SYMBOL_COUNT, Symbol};
use huffarc_core::error::{HuffarcError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Index of a node in the tree's arena.
pub type NodeId = usize;

/// A single tree node.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Aggregate weight of the subtree rooted here.
    pub(crate) weight: u64,
    /// Symbol of the leftmost descendant leaf (tie-break key).
    pub(crate) leftmost: Symbol,
    /// Parent index; `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    /// Leaf payload or child links.
    pub(crate) kind: NodeKind,
}

/// Leaf or internal node payload.
#[derive(Debug, Clone, Copy)]
pub(crate) enum NodeKind {
    /// A leaf carrying the symbol it encodes.
    Leaf(Symbol),
    /// An internal node; always has exactly two children.
    Internal {
        /// Left child (bit 0).
        left: NodeId,
        /// Right child (bit 1).
        right: NodeId,
    },
}

/// Priority-queue entry. Derived `Ord` compares `weight`, then `leftmost`;
/// `id` is never reached because `leftmost` is unique among live entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    weight: u64,
    leftmost: Symbol,
    id: NodeId,
}

/// Result of feeding one bit to a [`TreeWalker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Mid-code; feed another bit.
    Pending,
    /// A complete code was consumed and resolved to this symbol. The
    /// walker has reset itself to the root.
    Symbol(Symbol),
    /// The walk reached an absent child: corrupted payload or a
    /// tree/payload mismatch.
    Invalid,
}

/// An immutable Huffman code tree.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    /// Node arena; leaves first, internal nodes appended during the merge.
    nodes: Vec<Node>,
    /// Arena index of the root.
    root: NodeId,
    /// Leaf index per symbol, for encode-direction lookups.
    leaf_of: Vec<Option<NodeId>>,
}

impl HuffmanTree {
    /// Build a tree from a non-empty frequency table.
    ///
    /// One leaf is queued per table entry; the two smallest nodes are
    /// repeatedly merged (first popped becomes the left child) until a
    /// single root remains. A one-entry table produces a tree whose root
    /// is that single leaf, with no merge at all.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        let entries = table.len();
        let mut nodes = Vec::with_capacity(entries.saturating_mul(2));
        let mut leaf_of = vec![None; SYMBOL_COUNT];
        let mut heap = BinaryHeap::with_capacity(entries);

        for (symbol, weight) in table.iter() {
            let id = nodes.len();
            nodes.push(Node {
                weight,
                leftmost: symbol,
                parent: None,
                kind: NodeKind::Leaf(symbol),
            });
            leaf_of[symbol as usize] = Some(id);
            heap.push(Reverse(QueueEntry {
                weight,
                leftmost: symbol,
                id,
            }));
        }

        let root = loop {
            let Some(Reverse(first)) = heap.pop() else {
                return Err(HuffarcError::invalid_header("frequency table is empty"));
            };
            let Some(Reverse(second)) = heap.pop() else {
                break first.id;
            };

            let id = nodes.len();
            let weight = first.weight + second.weight;
            nodes.push(Node {
                weight,
                leftmost: first.leftmost,
                parent: None,
                kind: NodeKind::Internal {
                    left: first.id,
                    right: second.id,
                },
            });
            nodes[first.id].parent = Some(id);
            nodes[second.id].parent = Some(id);
            heap.push(Reverse(QueueEntry {
                weight,
                leftmost: first.leftmost,
                id,
            }));
        };

        Ok(Self {
            nodes,
            root,
            leaf_of,
        })
    }

    /// Total weight of the tree (sum of all leaf weights).
    pub fn total_weight(&self) -> u64 {
        self.nodes[self.root].weight
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.leaf_of.iter().filter(|l| l.is_some()).count()
    }

    /// The root's symbol, if the tree degenerated to a single leaf.
    ///
    /// Only happens for a one-entry table (an empty input, where the
    /// end-of-stream sentinel is the sole symbol). The solitary symbol's
    /// code is then the empty bit sequence.
    pub fn root_symbol(&self) -> Option<Symbol> {
        match self.nodes[self.root].kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Look up the code for a symbol, root-to-leaf bit order.
    ///
    /// Walks from the symbol's leaf up the parent links, recording for
    /// each step whether the node was its parent's left (0) or right (1)
    /// child, then reverses the path. Fails with
    /// [`HuffarcError::UnknownSymbol`] if the symbol was absent from the
    /// table this tree was built from.
    pub fn code_for(&self, symbol: Symbol) -> Result<Vec<bool>> {
        let leaf = self
            .leaf_of
            .get(symbol as usize)
            .copied()
            .flatten()
            .ok_or(HuffarcError::UnknownSymbol { symbol })?;

        let mut bits = Vec::new();
        let mut current = leaf;
        while let Some(parent) = self.nodes[current].parent {
            match self.nodes[parent].kind {
                NodeKind::Internal { left, .. } => bits.push(current != left),
                NodeKind::Leaf(_) => unreachable!("leaf node cannot be a parent"),
            }
            current = parent;
        }
        bits.reverse();
        Ok(bits)
    }

    /// Start an incremental decode traversal at the root.
    pub fn walker(&self) -> TreeWalker<'_> {
        TreeWalker {
            tree: self,
            current: self.root,
        }
    }

    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }
}

/// Incremental root-to-leaf traversal used for decoding.
///
/// Feed payload bits one at a time with [`TreeWalker::step`]; each resolved
/// symbol resets the walker to the root for the next code.
#[derive(Debug)]
pub struct TreeWalker<'a> {
    tree: &'a HuffmanTree,
    current: NodeId,
}

impl TreeWalker<'_> {
    /// Advance one bit: 0 moves to the left child, 1 to the right.
    pub fn step(&mut self, bit: bool) -> Step {
        let Some(node) = self.tree.node(self.current) else {
            return Step::Invalid;
        };
        let NodeKind::Internal { left, right } = node.kind else {
            // Stepping from a leaf root: no code consumes any bits here
            return Step::Invalid;
        };

        let next = if bit { right } else { left };
        match self.tree.node(next) {
            Some(child) => match child.kind {
                NodeKind::Leaf(symbol) => {
                    self.current = self.tree.root;
                    Step::Symbol(symbol)
                }
                NodeKind::Internal { .. } => {
                    self.current = next;
                    Step::Pending
                }
            },
            None => Step::Invalid,
        }
    }

    /// Reset the traversal to the root.
    pub fn reset(&mut self) {
        self.current = self.tree.root;
    }
}
