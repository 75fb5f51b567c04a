use std::path::PathBuf;

use paramgraph_compiler::Config;
use paramgraph_core::Colors;
use paramgraph_format::dump;

use super::input::load_graph;

pub struct DumpArgs {
    pub input_path: Option<PathBuf>,
    pub root: Option<String>,
    pub config: Config,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let Some(input_path) = args.input_path else {
        eprintln!("error: input file is required");
        std::process::exit(1);
    };

    let mut graph = match load_graph(&input_path, &args.config) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(key) = &args.root {
        if !graph.roots.contains_key(key) {
            eprintln!("error: root '{}' not found", key);
            std::process::exit(1);
        }
        graph.roots.retain(|k, _| k == key);
    }

    let colors = Colors::new(args.color);
    print!("{}", dump(&graph, colors));
}
