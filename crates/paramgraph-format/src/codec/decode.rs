use indexmap::IndexMap;
use paramgraph_core::StringId;

use crate::flags::{EdgeFlags, ScalarMask};
use crate::graph::{InputEdge, InputNode, OutputEdge, OutputNode, ParamGraph, RootEntry};
use crate::ids::NodeId;

use super::FormatError;
use super::layout::Layout;

/// Decode a binary blob against its string table.
///
/// Every string and node reference is bounds-checked, so a graph returned
/// from here can be walked without further validation.
pub fn decode_graph(strings: Vec<String>, bytes: &[u8]) -> Result<ParamGraph, FormatError> {
    let mut r = Reader::new(bytes)?;

    let input_count = r.word()? as usize;
    let output_count = r.word()? as usize;
    let root_count = r.word()? as usize;

    let string_ref = |index: u32| -> Result<StringId, FormatError> {
        if (index as usize) < strings.len() {
            Ok(StringId::from_raw(index))
        } else {
            Err(FormatError::InvalidReference {
                kind: "string",
                index,
            })
        }
    };
    let node_ref = |index: u32, count: usize, kind: &'static str| -> Result<NodeId, FormatError> {
        if (index as usize) < count {
            Ok(NodeId::new(index))
        } else {
            Err(FormatError::InvalidReference { kind, index })
        }
    };

    let mut input_nodes = Vec::with_capacity(input_count.min(bytes.len()));
    for _ in 0..input_count {
        let edge_count = r.word()?;
        let mut node = InputNode::default();
        for _ in 0..edge_count {
            let field = string_ref(r.word()?)?;
            let mask = r.u16()?;
            if r.layout.is_wide() {
                r.skip(2)?;
            }
            let child = r.optional_word()?;
            let enum_name = r.optional_word()?;
            let flags = r.byte()?;
            r.skip(r.layout.tail_padding())?;

            let edge = InputEdge {
                flags: EdgeFlags::from_bits(flags),
                scalar_mask: (mask != 0).then(|| ScalarMask::from_bits(mask)),
                enum_name: enum_name.map(string_ref).transpose()?,
                child_node: child
                    .map(|c| node_ref(c, input_count, "input node"))
                    .transpose()?,
            };
            node.edges.insert(field, edge);
        }
        input_nodes.push(node);
    }

    let mut output_nodes = Vec::with_capacity(output_count.min(bytes.len()));
    for _ in 0..output_count {
        let edge_count = r.word()?;
        let mut node = OutputNode::default();
        for _ in 0..edge_count {
            let field = string_ref(r.word()?)?;
            let args = r.optional_word()?;
            let output = r.optional_word()?;
            let edge = OutputEdge {
                args_node: args
                    .map(|a| node_ref(a, input_count, "input node"))
                    .transpose()?,
                output_node: output
                    .map(|o| node_ref(o, output_count, "output node"))
                    .transpose()?,
            };
            node.edges.insert(field, edge);
        }
        output_nodes.push(node);
    }

    let mut roots = IndexMap::with_capacity(root_count.min(bytes.len()));
    for _ in 0..root_count {
        let key = string_ref(r.word()?)?;
        let args = r.optional_word()?;
        let output = r.optional_word()?;
        let entry = RootEntry {
            args_node: args
                .map(|a| node_ref(a, input_count, "input node"))
                .transpose()?,
            output_node: output
                .map(|o| node_ref(o, output_count, "output node"))
                .transpose()?,
        };
        roots.insert(strings[key.as_usize()].clone(), entry);
    }

    r.finish()?;

    Ok(ParamGraph {
        strings,
        input_nodes,
        output_nodes,
        roots,
    })
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    layout: Layout,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Result<Self, FormatError> {
        let Some(&format) = bytes.first() else {
            return Err(FormatError::Truncated { offset: 0 });
        };
        let layout = Layout::from_format_byte(format).ok_or(FormatError::UnknownFormat(format))?;
        let mut reader = Self {
            bytes,
            pos: 1,
            layout,
        };
        reader.skip(layout.tail_padding())?;
        Ok(reader)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], FormatError> {
        let end = self.pos + n;
        if end > self.bytes.len() {
            return Err(FormatError::Truncated { offset: self.pos });
        }
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn skip(&mut self, n: usize) -> Result<(), FormatError> {
        self.take(n).map(|_| ())
    }

    fn byte(&mut self) -> Result<u8, FormatError> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16, FormatError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn word(&mut self) -> Result<u32, FormatError> {
        match self.layout {
            Layout::Compact => self.u16().map(u32::from),
            Layout::Wide => {
                let b = self.take(4)?;
                Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            }
        }
    }

    fn optional_word(&mut self) -> Result<Option<u32>, FormatError> {
        let value = self.word()?;
        Ok((value != self.layout.none()).then_some(value))
    }

    fn finish(self) -> Result<(), FormatError> {
        let rest = self.bytes.len() - self.pos;
        if rest != 0 {
            return Err(FormatError::TrailingBytes(rest));
        }
        Ok(())
    }
}
