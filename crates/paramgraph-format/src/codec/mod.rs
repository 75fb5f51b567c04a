//! Binary codec for param graphs.
//!
//! The serialized form keeps the string table as a plain JSON array and
//! packs nodes, edges, and roots into a base64url blob (see `layout`).

mod decode;
mod encode;
mod layout;


use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};

pub use decode::decode_graph;
pub use encode::encode_graph;
pub use layout::{FORMAT_COMPACT, FORMAT_WIDE, Layout, MAX_COMPACT_INDEX, Width};

use crate::graph::ParamGraph;

/// base64url without padding on output; padded input is accepted too.
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors from encoding or decoding the binary form.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("unknown param graph format: 0x{0:02x}")]
    UnknownFormat(u8),

    #[error("graph blob truncated at byte {offset}")]
    Truncated { offset: usize },

    #[error("graph blob has {0} trailing bytes")]
    TrailingBytes(usize),

    #[error("invalid base64url graph blob: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("root key {0:?} not found in strings table")]
    RootKeyMissing(String),

    #[error("{kind} index {index} out of range")]
    InvalidReference { kind: &'static str, index: u32 },

    #[error("value {value} does not fit the {layout:?} layout")]
    ValueTooLarge { value: u64, layout: Layout },
}

/// Graph as stored in generated code: strings in the clear, structure packed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedParamGraph {
    pub strings: Vec<String>,
    pub graph: String,
}

/// Serialize with automatic width selection.
pub fn serialize_param_graph(graph: &ParamGraph) -> Result<SerializedParamGraph, FormatError> {
    serialize_param_graph_with(graph, Width::Auto)
}

pub fn serialize_param_graph_with(
    graph: &ParamGraph,
    width: Width,
) -> Result<SerializedParamGraph, FormatError> {
    let bytes = encode_graph(graph, width)?;
    Ok(SerializedParamGraph {
        strings: graph.strings.clone(),
        graph: BASE64URL.encode(bytes),
    })
}

pub fn deserialize_param_graph(
    serialized: &SerializedParamGraph,
) -> Result<ParamGraph, FormatError> {
    let bytes = BASE64URL.decode(serialized.graph.as_bytes())?;
    decode_graph(serialized.strings.clone(), &bytes)
}
