//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("paramgraph")
        .about("Parameterization graphs for schema-driven query caching")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(build_command())
        .subcommand(dump_command())
}

/// Build a graph from a schema document and serialize it.
pub fn build_command() -> Command {
    Command::new("build")
        .about("Build and serialize the param graph of a schema document")
        .after_help(
            r#"EXAMPLES:
  paramgraph build dmmf.json                 # serialized graph to stdout
  paramgraph build dmmf.json -o graph.json   # write to file
  paramgraph build dmmf.json --width wide    # force 32-bit words
  paramgraph build dmmf.json --json          # unpacked graph"#,
        )
        .arg(schema_path_arg())
        .arg(output_file_arg())
        .arg(width_arg())
        .arg(query_type_arg())
        .arg(mutation_type_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(verbose_arg())
}

/// Show a human-readable listing of a graph.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the param graph of a schema document or serialized graph")
        .after_help(
            r#"EXAMPLES:
  paramgraph dump dmmf.json                   # build, then list
  paramgraph dump graph.json                  # decode a serialized graph
  paramgraph dump dmmf.json --root User.findMany"#,
        )
        .arg(input_path_arg())
        .arg(root_arg())
        .arg(query_type_arg())
        .arg(mutation_type_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
