//! Unit tests for GraphBuilder.

use std::collections::BTreeMap;

use paramgraph_format::{
    EdgeFlags, InputEdge, NodeId, OutputEdge, RootEntry, ScalarMask, Width,
    deserialize_param_graph,
};

use super::builder::GraphBuilder;

#[test]
fn new_builder_is_empty() {
    let builder = GraphBuilder::new();

    assert_eq!(builder.string_count(), 0);
    assert_eq!(builder.input_node_count(), 0);
    assert_eq!(builder.output_node_count(), 0);
    assert_eq!(builder.root_count(), 0);

    let graph = builder.build();
    assert!(graph.strings.is_empty());
    assert!(graph.roots.is_empty());
}

#[test]
fn intern_string_is_stable() {
    let mut builder = GraphBuilder::new();

    let a = builder.intern_string("where");
    let b = builder.intern_string("id");
    let a_again = builder.intern_string("where");

    assert_eq!(a, a_again);
    assert_eq!(a.as_u32(), 0);
    assert_eq!(b.as_u32(), 1);
    assert_eq!(builder.string_count(), 2);
}

#[test]
fn allocation_returns_positions() {
    let mut builder = GraphBuilder::new();

    assert_eq!(builder.allocate_input_node(), NodeId::new(0));
    assert_eq!(builder.allocate_input_node(), NodeId::new(1));
    assert_eq!(builder.allocate_output_node(), NodeId::new(0));
    assert_eq!(builder.input_node_count(), 2);
    assert_eq!(builder.output_node_count(), 1);
}

#[test]
fn edges_attach_after_allocation() {
    let mut builder = GraphBuilder::new();
    let node = builder.allocate_input_node();
    let name = builder.intern_string("next");

    // Self edge: the node refers to itself before its edges exist.
    let mut edges = BTreeMap::new();
    edges.insert(name, InputEdge::new(EdgeFlags::OBJECT).with_child(node));
    builder.set_input_node_edges(node, edges);

    let graph = builder.build();
    assert_eq!(graph.input_nodes[0].edges[&name].child_node, Some(node));
}

#[test]
fn empty_edge_sets_are_noops() {
    let mut builder = GraphBuilder::new();
    let input = builder.allocate_input_node();
    let output = builder.allocate_output_node();

    builder.set_input_node_edges(input, BTreeMap::new());
    builder.set_output_node_edges(output, BTreeMap::new());

    let graph = builder.build();
    assert!(graph.input_nodes[0].edges.is_empty());
    assert!(graph.output_nodes[0].edges.is_empty());
}

#[test]
fn empty_roots_are_dropped() {
    let mut builder = GraphBuilder::new();

    builder.set_root("User.count", RootEntry::default());

    assert_eq!(builder.root_count(), 0);
    assert_eq!(builder.string_count(), 0);
}

#[test]
fn roots_intern_their_keys() {
    let mut builder = GraphBuilder::new();
    let output = builder.allocate_output_node();

    builder.intern_string("where");
    builder.set_root(
        "User.findMany",
        RootEntry {
            args_node: None,
            output_node: Some(output),
        },
    );

    let graph = builder.build();
    assert_eq!(graph.strings, vec!["where", "User.findMany"]);
    assert_eq!(graph.roots["User.findMany"].output_node, Some(output));
}

#[test]
fn caches_distinguish_absent_from_unknown() {
    let mut builder = GraphBuilder::new();

    assert_eq!(builder.input_type_node("prisma.Missing"), None);
    assert!(!builder.has_input_type_node("prisma.Missing"));

    builder.set_input_type_node("prisma.Missing", None);
    assert_eq!(builder.input_type_node("prisma.Missing"), Some(None));
    assert!(builder.has_input_type_node("prisma.Missing"));

    let node = builder.allocate_input_node();
    builder.set_input_type_node("prisma.UserWhereInput", Some(node));
    assert_eq!(
        builder.input_type_node("prisma.UserWhereInput"),
        Some(Some(node))
    );
}

#[test]
fn cache_categories_are_independent() {
    let mut builder = GraphBuilder::new();
    let input = builder.allocate_input_node();
    let output = builder.allocate_output_node();

    builder.set_union_node("model.A|model.B", Some(input));
    builder.set_output_type_node("model.User", Some(output));

    assert!(builder.has_union_node("model.A|model.B"));
    assert!(!builder.has_input_type_node("model.A|model.B"));
    assert_eq!(builder.union_node("model.A|model.B"), Some(Some(input)));
    assert_eq!(builder.output_type_node("model.User"), Some(Some(output)));
    assert!(builder.has_output_type_node("model.User"));
    assert!(!builder.has_union_node("model.User"));
}

#[test]
fn build_and_serialize_roundtrips() {
    let mut builder = GraphBuilder::new();
    let args = builder.allocate_input_node();
    let take = builder.intern_string("take");

    let mut edges = BTreeMap::new();
    edges.insert(
        take,
        InputEdge::new(EdgeFlags::PARAM_SCALAR).with_scalar_mask(ScalarMask::INT),
    );
    builder.set_input_node_edges(args, edges);

    let output = builder.allocate_output_node();
    let posts = builder.intern_string("posts");
    let mut out_edges = BTreeMap::new();
    out_edges.insert(
        posts,
        OutputEdge {
            args_node: Some(args),
            output_node: None,
        },
    );
    builder.set_output_node_edges(output, out_edges);
    builder.set_root(
        "User.findMany",
        RootEntry {
            args_node: Some(args),
            output_node: Some(output),
        },
    );

    let serialized = builder.build_and_serialize(Width::Auto).unwrap();
    assert_eq!(serialized.strings, vec!["take", "posts", "User.findMany"]);

    let graph = deserialize_param_graph(&serialized).unwrap();
    assert_eq!(graph.roots["User.findMany"].args_node, Some(args));
    assert_eq!(graph.output_nodes[0].edges[&posts].args_node, Some(args));
}
