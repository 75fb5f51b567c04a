use paramgraph_core::Interner;

use crate::graph::ParamGraph;
use crate::ids::NodeId;

use super::FormatError;
use super::layout::{Layout, Width};

/// Encode `graph` into the binary blob.
pub fn encode_graph(graph: &ParamGraph, width: Width) -> Result<Vec<u8>, FormatError> {
    let layout = Layout::select(width, graph);
    let mut w = Writer::new(layout, layout.encoded_size(graph));

    w.byte(layout.format_byte());
    w.skip(layout.tail_padding());
    w.count(graph.input_nodes.len())?;
    w.count(graph.output_nodes.len())?;
    w.count(graph.roots.len())?;

    for node in &graph.input_nodes {
        w.count(node.edges.len())?;
        for (field, edge) in &node.edges {
            w.word(field.as_u32())?;
            w.u16(edge.scalar_mask.map_or(0, |m| m.bits()));
            if layout.is_wide() {
                w.skip(2);
            }
            w.optional_node(edge.child_node)?;
            w.optional_word(edge.enum_name.map(|s| s.as_u32()))?;
            w.byte(edge.flags.bits());
            w.skip(layout.tail_padding());
        }
    }

    for node in &graph.output_nodes {
        w.count(node.edges.len())?;
        for (field, edge) in &node.edges {
            w.word(field.as_u32())?;
            w.optional_node(edge.args_node)?;
            w.optional_node(edge.output_node)?;
        }
    }

    let strings = Interner::from_strings(graph.strings.clone());
    for (key, root) in &graph.roots {
        let Some(index) = strings.get(key) else {
            return Err(FormatError::RootKeyMissing(key.clone()));
        };
        w.word(index.as_u32())?;
        w.optional_node(root.args_node)?;
        w.optional_node(root.output_node)?;
    }

    Ok(w.finish())
}

struct Writer {
    layout: Layout,
    buf: Vec<u8>,
}

impl Writer {
    fn new(layout: Layout, capacity: usize) -> Self {
        Self {
            layout,
            buf: Vec::with_capacity(capacity),
        }
    }

    fn byte(&mut self, value: u8) {
        self.buf.push(value);
    }

    fn u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn skip(&mut self, n: usize) {
        self.buf.resize(self.buf.len() + n, 0);
    }

    fn word(&mut self, value: u32) -> Result<(), FormatError> {
        if value > self.layout.max_value() {
            return Err(FormatError::ValueTooLarge {
                value: value as u64,
                layout: self.layout,
            });
        }
        self.raw_word(value);
        Ok(())
    }

    fn raw_word(&mut self, value: u32) {
        match self.layout {
            Layout::Compact => self.buf.extend_from_slice(&(value as u16).to_le_bytes()),
            Layout::Wide => self.buf.extend_from_slice(&value.to_le_bytes()),
        }
    }

    fn count(&mut self, n: usize) -> Result<(), FormatError> {
        let value = u32::try_from(n).map_err(|_| FormatError::ValueTooLarge {
            value: n as u64,
            layout: self.layout,
        })?;
        self.word(value)
    }

    fn optional_word(&mut self, value: Option<u32>) -> Result<(), FormatError> {
        match value {
            Some(v) => self.word(v),
            None => {
                self.raw_word(self.layout.none());
                Ok(())
            }
        }
    }

    fn optional_node(&mut self, node: Option<NodeId>) -> Result<(), FormatError> {
        self.optional_word(node.map(NodeId::get))
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }
}
