use std::fs;
use std::path::PathBuf;

use paramgraph_compiler::{Config, build_and_serialize, build_param_graph_with};
use serde::Serialize;
use tracing::info;

use super::input::load_document;

pub struct BuildArgs {
    pub schema_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Config,
    pub json: bool,
    pub compact: bool,
}

pub fn run(args: BuildArgs) {
    let Some(schema_path) = args.schema_path else {
        eprintln!("error: schema document is required");
        std::process::exit(1);
    };

    let document = match load_document(&schema_path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let rendered = if args.json {
        let graph = build_param_graph_with(&document, &args.config);
        render(&graph, args.compact)
    } else {
        match build_and_serialize(&document, &args.config) {
            Ok(serialized) => render(&serialized, args.compact),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    };

    let rendered = match rendered {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, format!("{rendered}\n")) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            info!(path = %path.display(), bytes = rendered.len() + 1, "wrote graph");
        }
        None => println!("{rendered}"),
    }
}

fn render<T: Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}
