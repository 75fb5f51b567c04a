//! Human-readable graph dump for debugging.
//!
//! ```text
//! [strings]
//! S0 "User.findUnique"
//!
//! [inputs]
//! I0
//!   where: object -> I1
//!
//! [outputs]
//!
//! [roots]
//! User.findUnique: args I0
//! ```

use std::fmt::Write as _;

use paramgraph_core::{Colors, StringId};

use crate::graph::{InputEdge, ParamGraph};
use crate::ids::NodeId;

/// Digits needed to print indices `0..count`.
pub fn width_for_count(count: usize) -> usize {
    count
        .saturating_sub(1)
        .checked_ilog10()
        .map_or(1, |d| d as usize + 1)
}

pub fn dump(graph: &ParamGraph, colors: Colors) -> String {
    let ctx = DumpContext::new(graph, colors);
    let mut out = String::new();

    ctx.strings(&mut out);
    ctx.inputs(&mut out);
    ctx.outputs(&mut out);
    ctx.roots(&mut out);

    out
}

struct DumpContext<'g> {
    graph: &'g ParamGraph,
    str_width: usize,
    input_width: usize,
    output_width: usize,
    colors: Colors,
}

impl<'g> DumpContext<'g> {
    fn new(graph: &'g ParamGraph, colors: Colors) -> Self {
        Self {
            graph,
            str_width: width_for_count(graph.strings.len()),
            input_width: width_for_count(graph.input_nodes.len()),
            output_width: width_for_count(graph.output_nodes.len()),
            colors,
        }
    }

    fn name(&self, id: StringId) -> &'g str {
        self.graph.string(id).unwrap_or("<invalid>")
    }

    fn input_ref(&self, id: NodeId) -> String {
        let c = &self.colors;
        let w = self.input_width;
        format!("{}I{:0w$}{}", c.node, id.get(), c.reset)
    }

    fn output_ref(&self, id: NodeId) -> String {
        let c = &self.colors;
        let w = self.output_width;
        format!("{}O{:0w$}{}", c.node, id.get(), c.reset)
    }

    fn section(&self, out: &mut String, title: &str) {
        let c = &self.colors;
        writeln!(out, "{}[{title}]{}", c.section, c.reset).unwrap();
    }

    fn strings(&self, out: &mut String) {
        let c = &self.colors;
        let w = self.str_width;

        self.section(out, "strings");
        for (i, s) in self.graph.strings.iter().enumerate() {
            writeln!(out, "S{i:0w$} {}{s:?}{}", c.name, c.reset).unwrap();
        }
        out.push('\n');
    }

    fn inputs(&self, out: &mut String) {
        let c = &self.colors;

        self.section(out, "inputs");
        for (i, node) in self.graph.input_nodes.iter().enumerate() {
            let id = self.input_ref(NodeId::from_index(i));
            if node.edges.is_empty() {
                writeln!(out, "{id} {}(empty){}", c.dim, c.reset).unwrap();
                continue;
            }
            writeln!(out, "{id}").unwrap();
            for (&field, edge) in &node.edges {
                writeln!(out, "  {}", self.input_edge(field, edge)).unwrap();
            }
        }
        out.push('\n');
    }

    fn input_edge(&self, field: StringId, edge: &InputEdge) -> String {
        let c = &self.colors;
        let mut line = format!(
            "{}{}{}: {}{}{}",
            c.name,
            self.name(field),
            c.reset,
            c.dim,
            edge.flags,
            c.reset
        );
        if let Some(mask) = edge.scalar_mask {
            write!(line, " {}[{mask}]{}", c.dim, c.reset).unwrap();
        }
        if let Some(enum_name) = edge.enum_name {
            write!(line, " {}{}{}", c.name, self.name(enum_name), c.reset).unwrap();
        }
        if let Some(child) = edge.child_node {
            write!(line, " -> {}", self.input_ref(child)).unwrap();
        }
        line
    }

    fn outputs(&self, out: &mut String) {
        let c = &self.colors;

        self.section(out, "outputs");
        for (i, node) in self.graph.output_nodes.iter().enumerate() {
            let id = self.output_ref(NodeId::from_index(i));
            if node.edges.is_empty() {
                writeln!(out, "{id} {}(empty){}", c.dim, c.reset).unwrap();
                continue;
            }
            writeln!(out, "{id}").unwrap();
            for (&field, edge) in &node.edges {
                writeln!(
                    out,
                    "  {}{}{}:{}",
                    c.name,
                    self.name(field),
                    c.reset,
                    self.targets(edge.args_node, edge.output_node)
                )
                .unwrap();
            }
        }
        out.push('\n');
    }

    fn roots(&self, out: &mut String) {
        let c = &self.colors;

        self.section(out, "roots");
        for (key, root) in &self.graph.roots {
            writeln!(
                out,
                "{}{key}{}:{}",
                c.section,
                c.reset,
                self.targets(root.args_node, root.output_node)
            )
            .unwrap();
        }
    }

    fn targets(&self, args: Option<NodeId>, output: Option<NodeId>) -> String {
        let mut s = String::new();
        if let Some(args) = args {
            write!(s, " args {}", self.input_ref(args)).unwrap();
        }
        if let Some(output) = output {
            write!(s, " -> {}", self.output_ref(output)).unwrap();
        }
        s
    }
}
