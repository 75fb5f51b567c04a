//! In-memory param graph.
//!
//! Arena layout: nodes refer to each other by `NodeId`, strings by
//! `StringId`. Edge maps are `BTreeMap`s so iteration (and therefore the
//! encoded blob) follows string-table order.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use paramgraph_core::StringId;
use serde::{Deserialize, Serialize};

use crate::flags::{EdgeFlags, ScalarMask};
use crate::ids::NodeId;

/// What a single named input field accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InputEdge {
    pub flags: EdgeFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar_mask: Option<ScalarMask>,
    #[serde(
        rename = "enumNameIndex",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub enum_name: Option<StringId>,
    #[serde(
        rename = "childNodeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub child_node: Option<NodeId>,
}

impl InputEdge {
    pub fn new(flags: EdgeFlags) -> Self {
        Self {
            flags,
            scalar_mask: None,
            enum_name: None,
            child_node: None,
        }
    }

    pub fn with_scalar_mask(mut self, mask: ScalarMask) -> Self {
        self.scalar_mask = Some(mask);
        self
    }

    pub fn with_enum_name(mut self, name: StringId) -> Self {
        self.enum_name = Some(name);
        self
    }

    pub fn with_child(mut self, node: NodeId) -> Self {
        self.child_node = Some(node);
        self
    }
}

/// Where an output field leads: its own arguments and/or a nested selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputEdge {
    #[serde(
        rename = "argsNodeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub args_node: Option<NodeId>,
    #[serde(
        rename = "outputNodeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub output_node: Option<NodeId>,
}

impl OutputEdge {
    pub fn is_empty(&self) -> bool {
        self.args_node.is_none() && self.output_node.is_none()
    }
}

/// Entry point for one model operation, keyed `Model.action`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootEntry {
    #[serde(
        rename = "argsNodeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub args_node: Option<NodeId>,
    #[serde(
        rename = "outputNodeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub output_node: Option<NodeId>,
}

impl RootEntry {
    pub fn is_empty(&self) -> bool {
        self.args_node.is_none() && self.output_node.is_none()
    }
}

pub type InputEdges = BTreeMap<StringId, InputEdge>;
pub type OutputEdges = BTreeMap<StringId, OutputEdge>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputNode {
    pub edges: InputEdges,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputNode {
    pub edges: OutputEdges,
}

/// The finished graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamGraph {
    pub strings: Vec<String>,
    pub input_nodes: Vec<InputNode>,
    pub output_nodes: Vec<OutputNode>,
    pub roots: IndexMap<String, RootEntry>,
}

impl ParamGraph {
    pub fn string(&self, id: StringId) -> Option<&str> {
        self.strings.get(id.as_usize()).map(String::as_str)
    }

    pub fn input_node(&self, id: NodeId) -> Option<&InputNode> {
        self.input_nodes.get(id.index())
    }

    pub fn output_node(&self, id: NodeId) -> Option<&OutputNode> {
        self.output_nodes.get(id.index())
    }

    pub fn root(&self, key: &str) -> Option<&RootEntry> {
        self.roots.get(key)
    }

    pub fn edge_count(&self) -> usize {
        let inputs: usize = self.input_nodes.iter().map(|n| n.edges.len()).sum();
        let outputs: usize = self.output_nodes.iter().map(|n| n.edges.len()).sum();
        inputs + outputs
    }
}
