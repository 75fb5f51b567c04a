use indexmap::IndexMap;
use paramgraph_core::{Colors, StringId};

use crate::dump::{dump, width_for_count};
use crate::flags::{EdgeFlags, ScalarMask};
use crate::graph::{InputEdge, InputNode, OutputEdge, OutputNode, ParamGraph, RootEntry};
use crate::ids::NodeId;

fn sample_graph() -> ParamGraph {
    let strings: Vec<String> = ["User.findMany", "where", "id", "role", "Role", "posts", "take"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut args = InputNode::default();
    args.edges.insert(
        StringId::from_raw(1),
        InputEdge::new(EdgeFlags::OBJECT).with_child(NodeId::new(1)),
    );
    args.edges.insert(
        StringId::from_raw(6),
        InputEdge::new(EdgeFlags::PARAM_SCALAR).with_scalar_mask(ScalarMask::INT),
    );

    let mut filter = InputNode::default();
    filter.edges.insert(
        StringId::from_raw(2),
        InputEdge::new(EdgeFlags::PARAM_SCALAR | EdgeFlags::PARAM_LIST_SCALAR)
            .with_scalar_mask(ScalarMask::INT | ScalarMask::STRING),
    );
    filter.edges.insert(
        StringId::from_raw(3),
        InputEdge::new(EdgeFlags::PARAM_ENUM).with_enum_name(StringId::from_raw(4)),
    );

    let mut user = OutputNode::default();
    user.edges.insert(
        StringId::from_raw(5),
        OutputEdge {
            args_node: Some(NodeId::new(0)),
            output_node: Some(NodeId::new(1)),
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
        input_nodes: vec![args, filter, InputNode::default()],
        output_nodes: vec![user, OutputNode::default()],
        roots,
    }
}

#[test]
fn width_for_count_digits() {
    assert_eq!(width_for_count(0), 1);
    assert_eq!(width_for_count(1), 1);
    assert_eq!(width_for_count(10), 1);
    assert_eq!(width_for_count(11), 2);
    assert_eq!(width_for_count(100), 2);
    assert_eq!(width_for_count(101), 3);
}

#[test]
fn dump_sample_graph() {
    let out = dump(&sample_graph(), Colors::OFF);

    insta::assert_snapshot!(out.trim_end(), @r#"
    [strings]
    S0 "User.findMany"
    S1 "where"
    S2 "id"
    S3 "role"
    S4 "Role"
    S5 "posts"
    S6 "take"

    [inputs]
    I0
      where: object -> I1
      take: scalar [Int]
    I1
      id: scalar|scalar[] [String|Int]
      role: enum Role
    I2 (empty)

    [outputs]
    O0
      posts: args I0 -> O1
    O1 (empty)

    [roots]
    User.findMany: args I0 -> O0
    "#);
}

#[test]
fn dump_empty_graph() {
    let out = dump(&ParamGraph::default(), Colors::OFF);

    assert_eq!(out, "[strings]\n\n[inputs]\n\n[outputs]\n\n[roots]\n");
}

#[test]
fn dump_pads_node_ids() {
    let mut graph = ParamGraph {
        strings: vec!["A.findMany".to_string()],
        input_nodes: vec![InputNode::default(); 12],
        ..ParamGraph::default()
    };
    graph.roots.insert(
        "A.findMany".to_string(),
        RootEntry {
            args_node: Some(NodeId::new(3)),
            output_node: None,
        },
    );

    let out = dump(&graph, Colors::OFF);
    assert!(out.contains("I03 (empty)\n"));
    assert!(out.contains("I11 (empty)\n"));
    assert!(out.ends_with("A.findMany: args I03\n"));
}

#[test]
fn dump_colors_wrap_sections() {
    let out = dump(&ParamGraph::default(), Colors::ON);
    assert!(out.starts_with("\x1b[34m[strings]\x1b[0m\n"));
}
