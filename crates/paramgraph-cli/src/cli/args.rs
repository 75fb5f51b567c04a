//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema document (positional).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Schema document (DMMF JSON)")
}

/// Schema document or serialized graph (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Schema document or serialized graph")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Binary word width (--width).
pub fn width_arg() -> Arg {
    Arg::new("width")
        .long("width")
        .value_name("WIDTH")
        .default_value("auto")
        .value_parser(["auto", "compact", "wide"])
        .help("Word width of the packed graph")
}

/// Query root type (--query-type).
pub fn query_type_arg() -> Arg {
    Arg::new("query_type")
        .long("query-type")
        .value_name("NAME")
        .help("Namespaced query root type (default: prisma.Query)")
}

/// Mutation root type (--mutation-type).
pub fn mutation_type_arg() -> Arg {
    Arg::new("mutation_type")
        .long("mutation-type")
        .value_name("NAME")
        .help("Namespaced mutation root type (default: prisma.Mutation)")
}

/// Emit the unpacked graph (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Write the unpacked graph instead of the serialized form")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Restrict the roots listing (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("KEY")
        .help("Only list this root (e.g. User.findMany)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace)")
}
