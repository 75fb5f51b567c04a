//! Param graph format.
//!
//! - `graph`: arena-style in-memory graph (nodes, edges, roots)
//! - `flags`: edge flag and scalar-kind bitmasks
//! - `codec`: compact/wide binary encoding behind a base64url string
//! - `view`: name-based navigation for consumers
//! - `dump`: human-readable listing

pub mod codec;
pub mod dump;
pub mod flags;
pub mod graph;
pub mod ids;
pub mod view;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod flags_tests;
#[cfg(test)]
mod view_tests;

pub use codec::{
    FormatError, Layout, SerializedParamGraph, Width, decode_graph, deserialize_param_graph,
    encode_graph, serialize_param_graph, serialize_param_graph_with,
};
pub use dump::{dump, width_for_count};
pub use flags::{EdgeFlags, ScalarMask};
pub use graph::{
    InputEdge, InputEdges, InputNode, OutputEdge, OutputEdges, OutputNode, ParamGraph, RootEntry,
};
pub use ids::NodeId;
pub use view::{GraphView, InputFieldView, InputView, OutputFieldView, OutputView, RootView};
