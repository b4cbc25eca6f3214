//! Graphviz DOT export for built trees.
//!
//! Diagnostic only: the output is never read back. Nodes are rendered as
//! records showing the symbol (for leaves) and weight; edges connect the
//! record ports so left children hang off the left side of each box.
//!
//! The traversal uses an explicit stack: a maximally skewed tree over the
//! full symbol space is 256 levels deep, too close for comfort for
//! recursion.

use crate::freq::{END_OF_STREAM, Symbol};
use crate::tree::{HuffmanTree, NodeId, NodeKind};
use huffarc_core::error::Result;
use std::io::Write;

/// Write the tree as a DOT graph.
pub fn write_dot<W: Write>(tree: &HuffmanTree, writer: &mut W) -> Result<()> {
    writeln!(writer, "graph Tree {{")?;
    writeln!(writer, "\tnode [shape=record]")?;
    writeln!(writer)?;

    let mut stack: Vec<NodeId> = vec![tree.root_id()];
    while let Some(id) = stack.pop() {
        let Some(node) = tree.node(id) else { continue };

        let label = match node.kind {
            NodeKind::Leaf(symbol) => symbol_label(symbol),
            NodeKind::Internal { .. } => " ".to_string(),
        };
        writeln!(
            writer,
            "\tnode{id} [label = \"<f0> |<f1> {label} {weight}|<f2> \"]",
            weight = node.weight
        )?;

        if let NodeKind::Internal { left, right } = node.kind {
            writeln!(writer, "\tnode{id}:f0 -- node{left}:f1")?;
            writeln!(writer, "\tnode{id}:f2 -- node{right}:f1")?;
            // Left child pops first
            stack.push(right);
            stack.push(left);
        }
    }

    writeln!(writer, "}}")?;
    Ok(())
}

/// Render the tree as a DOT graph string.
pub fn dot_string(tree: &HuffmanTree) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_dot(tree, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn symbol_label(symbol: Symbol) -> String {
    match symbol {
        END_OF_STREAM => "EOF".to_string(),
        9 => "tab".to_string(),
        10 => "newline".to_string(),
        32 => "space".to_string(),
        s if (0x21..=0x7E).contains(&s) => {
            let c = s as u8 as char;
            // Record labels give {}|<> and quotes structural meaning
            if matches!(c, '"' | '\\' | '{' | '}' | '|' | '<' | '>') {
                format!("\\{c}")
            } else {
                c.to_string()
            }
        }
        s => format!("0x{s:02X}"),
    }
}
