//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap.
//! Verbosity stays on the params: it configures logging before the command
//! runs and is not part of the command itself.

use std::path::PathBuf;

use clap::ArgMatches;
use paramgraph_compiler::Config;
use paramgraph_format::Width;

use super::ColorChoice;
use crate::commands::build::BuildArgs;
use crate::commands::dump::DumpArgs;

pub struct BuildParams {
    pub schema_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub width: Width,
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub json: bool,
    pub compact: bool,
    pub verbose: u8,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: m.get_one::<PathBuf>("schema_path").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            width: parse_width(m),
            query_type: m.get_one::<String>("query_type").cloned(),
            mutation_type: m.get_one::<String>("mutation_type").cloned(),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            schema_path: p.schema_path,
            output: p.output,
            config: build_config(p.query_type, p.mutation_type).width(p.width),
            json: p.json,
            compact: p.compact,
        }
    }
}

pub struct DumpParams {
    pub input_path: Option<PathBuf>,
    pub root: Option<String>,
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            root: m.get_one::<String>("root").cloned(),
            query_type: m.get_one::<String>("query_type").cloned(),
            mutation_type: m.get_one::<String>("mutation_type").cloned(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input_path: p.input_path,
            root: p.root,
            config: build_config(p.query_type, p.mutation_type),
            color: p.color.should_colorize(),
        }
    }
}

fn build_config(query_type: Option<String>, mutation_type: Option<String>) -> Config {
    let mut config = Config::new();
    if let Some(name) = query_type {
        config = config.query_type(name);
    }
    if let Some(name) = mutation_type {
        config = config.mutation_type(name);
    }
    config
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Parse --width flag into Width.
fn parse_width(m: &ArgMatches) -> Width {
    match m.get_one::<String>("width").map(|s| s.as_str()) {
        Some("compact") => Width::Compact,
        Some("wide") => Width::Wide,
        _ => Width::Auto,
    }
}
