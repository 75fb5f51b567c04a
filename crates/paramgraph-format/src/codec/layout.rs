//! Binary layout: word width, sentinel, and record sizes.
//!
//! ```text
//! header   format u8 | pad 1|3 | input_count w | output_count w | root_count w
//! input    edge_count w, then per edge:
//!          field w | scalar_mask u16 | [pad 2] | child w | enum_name w | flags u8 | pad 1|3
//! output   edge_count w, then per edge: field w | args w | output w
//! roots    key w | args w | output w
//! ```
//!
//! `w` is u16 (compact) or u32 (wide), little-endian. A word of all ones
//! encodes an absent optional value.

use crate::graph::ParamGraph;

pub const FORMAT_COMPACT: u8 = 0x00;
pub const FORMAT_WIDE: u8 = 0x01;

/// Largest count or index representable in the compact layout.
pub const MAX_COMPACT_INDEX: u32 = 0xFFFE;

/// Requested word width for encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Width {
    /// Compact unless some count exceeds `MAX_COMPACT_INDEX`.
    #[default]
    Auto,
    Compact,
    Wide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Compact,
    Wide,
}

impl Layout {
    pub fn from_format_byte(byte: u8) -> Option<Self> {
        match byte {
            FORMAT_COMPACT => Some(Self::Compact),
            FORMAT_WIDE => Some(Self::Wide),
            _ => None,
        }
    }

    /// Layout `width` resolves to for `graph`.
    pub fn select(width: Width, graph: &ParamGraph) -> Self {
        match width {
            Width::Compact => Self::Compact,
            Width::Wide => Self::Wide,
            Width::Auto => {
                if largest_count(graph) > MAX_COMPACT_INDEX as usize {
                    Self::Wide
                } else {
                    Self::Compact
                }
            }
        }
    }

    pub fn format_byte(self) -> u8 {
        match self {
            Self::Compact => FORMAT_COMPACT,
            Self::Wide => FORMAT_WIDE,
        }
    }

    pub fn is_wide(self) -> bool {
        self == Self::Wide
    }

    pub fn word_size(self) -> usize {
        match self {
            Self::Compact => 2,
            Self::Wide => 4,
        }
    }

    pub fn none(self) -> u32 {
        match self {
            Self::Compact => u16::MAX as u32,
            Self::Wide => u32::MAX,
        }
    }

    /// Largest value a word can carry without colliding with `none`.
    pub fn max_value(self) -> u32 {
        self.none() - 1
    }

    /// Padding after the one-byte format tag and after each edge's flags byte.
    pub fn tail_padding(self) -> usize {
        match self {
            Self::Compact => 1,
            Self::Wide => 3,
        }
    }

    pub fn header_size(self) -> usize {
        1 + self.tail_padding() + 3 * self.word_size()
    }

    pub fn input_edge_size(self) -> usize {
        let mask = if self.is_wide() { 4 } else { 2 };
        3 * self.word_size() + mask + 1 + self.tail_padding()
    }

    pub fn output_edge_size(self) -> usize {
        3 * self.word_size()
    }

    pub fn root_size(self) -> usize {
        3 * self.word_size()
    }

    /// Exact encoded size of `graph`.
    pub fn encoded_size(self, graph: &ParamGraph) -> usize {
        let inputs: usize = graph
            .input_nodes
            .iter()
            .map(|n| self.word_size() + n.edges.len() * self.input_edge_size())
            .sum();
        let outputs: usize = graph
            .output_nodes
            .iter()
            .map(|n| self.word_size() + n.edges.len() * self.output_edge_size())
            .sum();
        self.header_size() + inputs + outputs + graph.roots.len() * self.root_size()
    }
}

fn largest_count(graph: &ParamGraph) -> usize {
    [
        graph.strings.len(),
        graph.input_nodes.len(),
        graph.output_nodes.len(),
        graph.roots.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}
