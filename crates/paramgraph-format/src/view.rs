//! Name-based navigation over a `ParamGraph`.
//!
//! Consumers walk a query alongside the graph: start from a root key, then
//! step into fields by name. The view resolves names through the string
//! table once, so each step is a map lookup.

use paramgraph_core::{Interner, StringId};

use crate::flags::{EdgeFlags, ScalarMask};
use crate::graph::{InputEdge, InputNode, OutputEdge, OutputNode, ParamGraph, RootEntry};
use crate::ids::NodeId;

#[derive(Debug)]
pub struct GraphView<'g> {
    graph: &'g ParamGraph,
    ids: Interner,
}

impl<'g> GraphView<'g> {
    pub fn new(graph: &'g ParamGraph) -> Self {
        let ids = Interner::from_strings(graph.strings.clone());
        Self { graph, ids }
    }

    pub fn graph(&self) -> &'g ParamGraph {
        self.graph
    }

    pub fn string_id(&self, s: &str) -> Option<StringId> {
        self.ids.get(s)
    }

    pub fn root(&self, key: &str) -> Option<RootView<'_, 'g>> {
        let entry = self.graph.roots.get(key)?;
        Some(RootView { view: self, entry })
    }

    pub fn input(&self, id: NodeId) -> Option<InputView<'_, 'g>> {
        let node = self.graph.input_node(id)?;
        Some(InputView {
            view: self,
            id,
            node,
        })
    }

    pub fn output(&self, id: NodeId) -> Option<OutputView<'_, 'g>> {
        let node = self.graph.output_node(id)?;
        Some(OutputView {
            view: self,
            id,
            node,
        })
    }

    fn name(&self, id: StringId) -> &'g str {
        self.graph.string(id).unwrap_or("<invalid>")
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RootView<'v, 'g> {
    view: &'v GraphView<'g>,
    entry: &'g RootEntry,
}

impl<'v, 'g> RootView<'v, 'g> {
    pub fn entry(&self) -> &'g RootEntry {
        self.entry
    }

    pub fn args(&self) -> Option<InputView<'v, 'g>> {
        self.view.input(self.entry.args_node?)
    }

    pub fn output(&self) -> Option<OutputView<'v, 'g>> {
        self.view.output(self.entry.output_node?)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct InputView<'v, 'g> {
    view: &'v GraphView<'g>,
    id: NodeId,
    node: &'g InputNode,
}

impl<'v, 'g> InputView<'v, 'g> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.node.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.edges.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<InputFieldView<'v, 'g>> {
        let key = self.view.string_id(name)?;
        let edge = self.node.edges.get(&key)?;
        Some(InputFieldView {
            view: self.view,
            name: self.view.name(key),
            edge,
        })
    }

    /// Fields in string-table order.
    pub fn fields(&self) -> impl Iterator<Item = InputFieldView<'v, 'g>> + use<'v, 'g> {
        let view = self.view;
        let node = self.node;
        node.edges.iter().map(move |(&key, edge)| InputFieldView {
            view,
            name: view.name(key),
            edge,
        })
    }

    pub fn field_names(&self) -> Vec<&'g str> {
        self.fields().map(|f| f.name()).collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct InputFieldView<'v, 'g> {
    view: &'v GraphView<'g>,
    name: &'g str,
    edge: &'g InputEdge,
}

impl<'v, 'g> InputFieldView<'v, 'g> {
    pub fn name(&self) -> &'g str {
        self.name
    }

    pub fn edge(&self) -> &'g InputEdge {
        self.edge
    }

    pub fn flags(&self) -> EdgeFlags {
        self.edge.flags
    }

    pub fn scalar_mask(&self) -> ScalarMask {
        self.edge.scalar_mask.unwrap_or_default()
    }

    pub fn enum_name(&self) -> Option<&'g str> {
        self.edge.enum_name.map(|id| self.view.name(id))
    }

    pub fn child(&self) -> Option<InputView<'v, 'g>> {
        self.view.input(self.edge.child_node?)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OutputView<'v, 'g> {
    view: &'v GraphView<'g>,
    id: NodeId,
    node: &'g OutputNode,
}

impl<'v, 'g> OutputView<'v, 'g> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.node.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.edges.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<OutputFieldView<'v, 'g>> {
        let key = self.view.string_id(name)?;
        let edge = self.node.edges.get(&key)?;
        Some(OutputFieldView {
            view: self.view,
            name: self.view.name(key),
            edge,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = OutputFieldView<'v, 'g>> + use<'v, 'g> {
        let view = self.view;
        let node = self.node;
        node.edges.iter().map(move |(&key, edge)| OutputFieldView {
            view,
            name: view.name(key),
            edge,
        })
    }

    pub fn field_names(&self) -> Vec<&'g str> {
        self.fields().map(|f| f.name()).collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OutputFieldView<'v, 'g> {
    view: &'v GraphView<'g>,
    name: &'g str,
    edge: &'g OutputEdge,
}

impl<'v, 'g> OutputFieldView<'v, 'g> {
    pub fn name(&self) -> &'g str {
        self.name
    }

    pub fn edge(&self) -> &'g OutputEdge {
        self.edge
    }

    pub fn args(&self) -> Option<InputView<'v, 'g>> {
        self.view.input(self.edge.args_node?)
    }

    pub fn output(&self) -> Option<OutputView<'v, 'g>> {
        self.view.output(self.edge.output_node?)
    }
}
