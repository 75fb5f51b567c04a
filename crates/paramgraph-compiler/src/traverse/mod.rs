//! Schema traversal.
//!
//! Walks from each model operation into the input and output type universe
//! and writes nodes into a `GraphBuilder`. Named types and unions are
//! allocated on first sight and populated later from FIFO worklists, so
//! recursion depth stays constant no matter how deep or cyclic the schema is.

mod invariants;
mod merge;


use std::collections::{BTreeMap, HashMap, VecDeque};

use indexmap::IndexMap;
use paramgraph_core::ModelAction;
use paramgraph_core::schema::{
    Document, InputType, ModelMapping, OutputType, SchemaArg, SchemaField, type_key,
};
use paramgraph_format::{NodeId, OutputEdge, RootEntry};
use tracing::{debug, trace};

use crate::builder::GraphBuilder;
use crate::config::Config;

/// Fields of a named input type, waiting to become edges of `node`.
struct InputJob<'d> {
    node: NodeId,
    type_name: &'d str,
    fields: &'d [SchemaArg],
}

/// Members of a union, in the order the first referencing field listed them.
struct UnionJob {
    node: NodeId,
    members: Vec<String>,
}

struct OutputJob<'d> {
    node: NodeId,
    type_name: &'d str,
    fields: &'d [SchemaField],
}

pub struct SchemaTraverser<'b, 'd> {
    builder: &'b mut GraphBuilder,
    config: &'d Config,
    input_types: HashMap<String, &'d InputType>,
    output_types: HashMap<String, &'d OutputType>,
    pending_inputs: VecDeque<InputJob<'d>>,
    pending_unions: VecDeque<UnionJob>,
    pending_outputs: VecDeque<OutputJob<'d>>,
}

impl<'b, 'd> SchemaTraverser<'b, 'd> {
    pub fn new(builder: &'b mut GraphBuilder, document: &'d Document, config: &'d Config) -> Self {
        let schema = &document.schema;

        let input_types: HashMap<_, _> = schema
            .input_object_types
            .iter()
            .map(|(ns, t)| (type_key(&t.name, Some(ns.as_str())), t))
            .collect();
        let output_types: HashMap<_, _> = schema
            .output_object_types
            .iter()
            .map(|(ns, t)| (type_key(&t.name, Some(ns.as_str())), t))
            .collect();

        debug!(
            input_types = input_types.len(),
            output_types = output_types.len(),
            "indexed schema types"
        );

        Self {
            builder,
            config,
            input_types,
            output_types,
            pending_inputs: VecDeque::new(),
            pending_unions: VecDeque::new(),
            pending_outputs: VecDeque::new(),
        }
    }

    /// Register one root per exposed model operation, then populate
    /// everything reachable from them.
    pub fn process_roots(&mut self, mappings: &[ModelMapping]) {
        for mapping in mappings {
            for action in ModelAction::ALL {
                let Some(field_name) = mapping.field_for(action) else {
                    continue;
                };
                let Some(root_field) = self.find_root_field(field_name) else {
                    trace!(model = %mapping.model, %action, field_name, "no root field");
                    continue;
                };

                let args_node = self.build_input_node_from_args(&root_field.args);
                let output_node = if root_field.output_type.is_object() {
                    self.build_output_type_node(&root_field.output_type.key())
                } else {
                    None
                };

                let key = format!("{}.{}", mapping.model, action.json_action());
                debug!(root = %key, ?args_node, ?output_node, "root");
                self.builder.set_root(
                    &key,
                    RootEntry {
                        args_node,
                        output_node,
                    },
                );
            }
        }

        self.drain_pending_work();
    }

    fn find_root_field(&self, name: &str) -> Option<&'d SchemaField> {
        self.config.root_types().into_iter().find_map(|root| {
            let &root_type = self.output_types.get(root)?;
            root_type.fields.iter().find(|f| f.name == name)
        })
    }

    /// Process queued types until no work remains.
    pub fn drain_pending_work(&mut self) {
        let mut jobs = 0usize;
        loop {
            if let Some(job) = self.pending_inputs.pop_front() {
                self.process_input_job(job);
            } else if let Some(job) = self.pending_unions.pop_front() {
                self.process_union_job(job);
            } else if let Some(job) = self.pending_outputs.pop_front() {
                self.process_output_job(job);
            } else {
                break;
            }
            jobs += 1;
        }

        debug!(
            jobs,
            input_nodes = self.builder.input_node_count(),
            output_nodes = self.builder.output_node_count(),
            strings = self.builder.string_count(),
            "drained pending work"
        );
    }

    /// Build an uncached argument node. Returns `None` (allocating nothing)
    /// when no argument is parameterizable.
    pub fn build_input_node_from_args(&mut self, args: &'d [SchemaArg]) -> Option<NodeId> {
        let mut edges = BTreeMap::new();
        for arg in args {
            if let Some(edge) = self.merge_field_variants(&[arg]) {
                let name = self.builder.intern_string(&arg.name);
                edges.insert(name, edge);
            }
        }

        if edges.is_empty() {
            return None;
        }

        let node = self.builder.allocate_input_node();
        self.builder.set_input_node_edges(node, edges);
        Some(node)
    }

    pub fn build_input_type_node(&mut self, type_name: &str) -> Option<NodeId> {
        if let Some(cached) = self.builder.input_type_node(type_name) {
            return cached;
        }

        let Some(&input_type) = self.input_types.get(type_name) else {
            trace!(type_name, "unknown input type");
            self.builder.set_input_type_node(type_name, None);
            return None;
        };

        let node = self.builder.allocate_input_node();
        self.builder.set_input_type_node(type_name, Some(node));
        self.pending_inputs.push_back(InputJob {
            node,
            type_name: &input_type.name,
            fields: &input_type.fields,
        });
        Some(node)
    }

    /// Node for a field accepting any of several input object types.
    ///
    /// Cached by the sorted member list, so the same set in any order
    /// shares one node.
    pub fn build_union_node(&mut self, members: Vec<String>) -> Option<NodeId> {
        let mut sorted = members.clone();
        sorted.sort();
        let key = sorted.join("|");

        if let Some(cached) = self.builder.union_node(&key) {
            return cached;
        }

        let node = self.builder.allocate_input_node();
        self.builder.set_union_node(&key, Some(node));
        self.pending_unions.push_back(UnionJob { node, members });
        Some(node)
    }

    pub fn build_output_type_node(&mut self, type_name: &str) -> Option<NodeId> {
        if let Some(cached) = self.builder.output_type_node(type_name) {
            return cached;
        }

        let Some(&output_type) = self.output_types.get(type_name) else {
            trace!(type_name, "unknown output type");
            self.builder.set_output_type_node(type_name, None);
            return None;
        };

        let node = self.builder.allocate_output_node();
        self.builder.set_output_type_node(type_name, Some(node));
        self.pending_outputs.push_back(OutputJob {
            node,
            type_name: &output_type.name,
            fields: &output_type.fields,
        });
        Some(node)
    }

    fn process_input_job(&mut self, job: InputJob<'d>) {
        trace!(node = job.node.get(), type_name = job.type_name, "input type");

        let mut edges = BTreeMap::new();
        for field in job.fields {
            if let Some(edge) = self.merge_field_variants(&[field]) {
                let name = self.builder.intern_string(&field.name);
                edges.insert(name, edge);
            }
        }
        self.builder.set_input_node_edges(job.node, edges);
    }

    fn process_union_job(&mut self, job: UnionJob) {
        trace!(node = job.node.get(), members = ?job.members, "union");

        // Union of field sets: a field declared by any member is kept.
        let mut by_name: IndexMap<&'d str, Vec<&'d SchemaArg>> = IndexMap::new();
        for member in &job.members {
            let Some(&input_type) = self.input_types.get(member) else {
                continue;
            };
            for field in &input_type.fields {
                by_name.entry(field.name.as_str()).or_default().push(field);
            }
        }

        let mut edges = BTreeMap::new();
        for (name, variants) in by_name {
            if let Some(edge) = self.merge_field_variants(&variants) {
                let name = self.builder.intern_string(name);
                edges.insert(name, edge);
            }
        }
        self.builder.set_input_node_edges(job.node, edges);
    }

    fn process_output_job(&mut self, job: OutputJob<'d>) {
        trace!(node = job.node.get(), type_name = job.type_name, "output type");

        let mut edges = BTreeMap::new();
        for field in job.fields {
            if let Some(edge) = self.build_output_edge(field) {
                let name = self.builder.intern_string(&field.name);
                edges.insert(name, edge);
            }
        }
        self.builder.set_output_node_edges(job.node, edges);
    }

    fn build_output_edge(&mut self, field: &'d SchemaField) -> Option<OutputEdge> {
        let args_node = if field.args.is_empty() {
            None
        } else {
            self.build_input_node_from_args(&field.args)
        };
        let output_node = if field.output_type.is_object() {
            self.build_output_type_node(&field.output_type.key())
        } else {
            None
        };

        let edge = OutputEdge {
            args_node,
            output_node,
        };
        (!edge.is_empty()).then_some(edge)
    }
}
