//! Arena and memo tables for graph construction.
//!
//! Nodes are allocated empty and receive their edges later, which lets a
//! type that refers to itself point at its own id before its fields have
//! been processed.

use std::collections::HashMap;

use indexmap::IndexMap;
use paramgraph_core::{Interner, StringId};
use paramgraph_format::{
    FormatError, InputEdges, InputNode, NodeId, OutputEdges, OutputNode, ParamGraph, RootEntry,
    SerializedParamGraph, Width, serialize_param_graph_with,
};

/// Memo table keyed by type name (or union key).
///
/// `Some(None)` records a lookup that resolved to nothing, so negative
/// results are never recomputed.
#[derive(Debug, Default)]
struct NodeCache {
    entries: HashMap<String, Option<NodeId>>,
}

impl NodeCache {
    fn get(&self, key: &str) -> Option<Option<NodeId>> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, node: Option<NodeId>) {
        self.entries.insert(key.to_owned(), node);
    }

    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[derive(Debug, Default)]
pub struct GraphBuilder {
    strings: Interner,
    input_nodes: Vec<InputNode>,
    output_nodes: Vec<OutputNode>,
    roots: IndexMap<String, RootEntry>,
    input_types: NodeCache,
    unions: NodeCache,
    output_types: NodeCache,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern_string(&mut self, s: &str) -> StringId {
        self.strings.intern(s)
    }

    pub fn allocate_input_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.input_nodes.len());
        self.input_nodes.push(InputNode::default());
        id
    }

    pub fn allocate_output_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.output_nodes.len());
        self.output_nodes.push(OutputNode::default());
        id
    }

    /// Attach edges to an allocated node. Empty edge sets are ignored.
    pub fn set_input_node_edges(&mut self, id: NodeId, edges: InputEdges) {
        if edges.is_empty() {
            return;
        }
        let node = &mut self.input_nodes[id.index()];
        debug_assert!(node.edges.is_empty(), "input node {id:?} populated twice");
        node.edges = edges;
    }

    pub fn set_output_node_edges(&mut self, id: NodeId, edges: OutputEdges) {
        if edges.is_empty() {
            return;
        }
        let node = &mut self.output_nodes[id.index()];
        debug_assert!(node.edges.is_empty(), "output node {id:?} populated twice");
        node.edges = edges;
    }

    /// Record a root. Entries with neither args nor output are dropped.
    pub fn set_root(&mut self, key: &str, entry: RootEntry) {
        if entry.is_empty() {
            return;
        }
        self.strings.intern(key);
        self.roots.insert(key.to_owned(), entry);
    }

    pub fn input_type_node(&self, name: &str) -> Option<Option<NodeId>> {
        self.input_types.get(name)
    }

    pub fn set_input_type_node(&mut self, name: &str, node: Option<NodeId>) {
        self.input_types.set(name, node);
    }

    pub fn has_input_type_node(&self, name: &str) -> bool {
        self.input_types.has(name)
    }

    pub fn union_node(&self, key: &str) -> Option<Option<NodeId>> {
        self.unions.get(key)
    }

    pub fn set_union_node(&mut self, key: &str, node: Option<NodeId>) {
        self.unions.set(key, node);
    }

    pub fn has_union_node(&self, key: &str) -> bool {
        self.unions.has(key)
    }

    pub fn output_type_node(&self, name: &str) -> Option<Option<NodeId>> {
        self.output_types.get(name)
    }

    pub fn set_output_type_node(&mut self, name: &str, node: Option<NodeId>) {
        self.output_types.set(name, node);
    }

    pub fn has_output_type_node(&self, name: &str) -> bool {
        self.output_types.has(name)
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn input_node_count(&self) -> usize {
        self.input_nodes.len()
    }

    pub fn output_node_count(&self) -> usize {
        self.output_nodes.len()
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn build(self) -> ParamGraph {
        ParamGraph {
            strings: self.strings.into_strings(),
            input_nodes: self.input_nodes,
            output_nodes: self.output_nodes,
            roots: self.roots,
        }
    }

    pub fn build_and_serialize(self, width: Width) -> Result<SerializedParamGraph, FormatError> {
        serialize_param_graph_with(&self.build(), width)
    }
}
