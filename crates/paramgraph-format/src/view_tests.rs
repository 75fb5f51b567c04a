use indexmap::IndexMap;
use paramgraph_core::StringId;

use crate::flags::{EdgeFlags, ScalarMask};
use crate::graph::{InputEdge, InputNode, OutputEdge, OutputNode, ParamGraph, RootEntry};
use crate::ids::NodeId;
use crate::view::GraphView;

/// Self-referential `where` filter (`AND: [UserWhereInput]`) behind
/// `User.findMany`, whose output exposes `posts(take)`.
fn recursive_graph() -> ParamGraph {
    let strings: Vec<String> = ["User.findMany", "where", "AND", "email", "posts", "take"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut args = InputNode::default();
    args.edges.insert(
        StringId::from_raw(1),
        InputEdge::new(EdgeFlags::OBJECT).with_child(NodeId::new(1)),
    );

    let mut filter = InputNode::default();
    filter.edges.insert(
        StringId::from_raw(2),
        InputEdge::new(EdgeFlags::OBJECT | EdgeFlags::LIST_OBJECT).with_child(NodeId::new(1)),
    );
    filter.edges.insert(
        StringId::from_raw(3),
        InputEdge::new(EdgeFlags::PARAM_SCALAR).with_scalar_mask(ScalarMask::STRING),
    );

    let mut take = InputNode::default();
    take.edges.insert(
        StringId::from_raw(5),
        InputEdge::new(EdgeFlags::PARAM_SCALAR).with_scalar_mask(ScalarMask::INT),
    );

    let mut user = OutputNode::default();
    user.edges.insert(
        StringId::from_raw(4),
        OutputEdge {
            args_node: Some(NodeId::new(2)),
            output_node: None,
        },
    );

    let mut roots = IndexMap::new();
    roots.insert(
        "User.findMany".to_string(),
        RootEntry {
            args_node: Some(NodeId::new(0)),
            output_node: Some(NodeId::new(0)),
        },
    );

    ParamGraph {
        strings,
        input_nodes: vec![args, filter, take],
        output_nodes: vec![user],
        roots,
    }
}

#[test]
fn walk_root_args_by_name() {
    let graph = recursive_graph();
    let view = GraphView::new(&graph);

    let root = view.root("User.findMany").unwrap();
    let args = root.args().unwrap();
    assert_eq!(args.id(), NodeId::new(0));
    assert_eq!(args.field_names(), vec!["where"]);

    let filter = args.field("where").unwrap().child().unwrap();
    let email = filter.field("email").unwrap();
    assert_eq!(email.flags(), EdgeFlags::PARAM_SCALAR);
    assert_eq!(email.scalar_mask(), ScalarMask::STRING);
    assert!(email.child().is_none());
    assert!(email.enum_name().is_none());
}

#[test]
fn cycles_are_followed_by_id() {
    let graph = recursive_graph();
    let view = GraphView::new(&graph);

    let filter = view.input(NodeId::new(1)).unwrap();
    let nested = filter.field("AND").unwrap().child().unwrap();
    assert_eq!(nested.id(), filter.id());
    assert_eq!(nested.field_names(), vec!["AND", "email"]);
}

#[test]
fn output_fields_lead_to_args() {
    let graph = recursive_graph();
    let view = GraphView::new(&graph);

    let user = view.root("User.findMany").unwrap().output().unwrap();
    assert_eq!(user.len(), 1);

    let posts = user.field("posts").unwrap();
    assert!(posts.output().is_none());
    let take = posts.args().unwrap().field("take").unwrap();
    assert_eq!(take.scalar_mask(), ScalarMask::INT);
}

#[test]
fn unknown_names_resolve_to_none() {
    let graph = recursive_graph();
    let view = GraphView::new(&graph);

    assert!(view.root("Post.findMany").is_none());
    // `take` is interned but is not a field of the root args node.
    assert!(view.root("User.findMany").unwrap().args().unwrap().field("take").is_none());
    assert!(view.input(NodeId::new(42)).is_none());
    assert_eq!(view.string_id("email"), Some(StringId::from_raw(3)));
}

#[test]
fn repeated_strings_resolve_to_first_index() {
    let mut graph = recursive_graph();
    graph.strings.push("where".to_string());
    let view = GraphView::new(&graph);

    assert_eq!(view.string_id("where"), Some(StringId::from_raw(1)));
    let filter = view.root("User.findMany").unwrap().args().unwrap();
    assert!(filter.field("where").is_some());
}
