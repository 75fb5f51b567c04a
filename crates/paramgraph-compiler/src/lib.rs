//! Param graph compiler.
//!
//! Turns a schema document into a `ParamGraph`:
//! - `builder` - node arena, string table, and type memo caches
//! - `traverse` - walks roots and queued types, merging field variants into edges
//! - `config` - root type names and encoding width

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod config;
pub mod traverse;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod builder_tests;

use paramgraph_core::{Document, SchemaError};
use paramgraph_format::{FormatError, ParamGraph, SerializedParamGraph};
use tracing::info;

pub use builder::GraphBuilder;
pub use config::Config;
pub use traverse::SchemaTraverser;

/// Errors from loading a document or encoding its graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Build the graph for `document` with the default configuration.
pub fn build_param_graph(document: &Document) -> ParamGraph {
    build_param_graph_with(document, &Config::default())
}

pub fn build_param_graph_with(document: &Document, config: &Config) -> ParamGraph {
    populate(document, config).build()
}

/// Build and encode in one step, using the width from `config`.
pub fn build_and_serialize(document: &Document, config: &Config) -> Result<SerializedParamGraph> {
    Ok(populate(document, config).build_and_serialize(config.width)?)
}

fn populate(document: &Document, config: &Config) -> GraphBuilder {
    let mut builder = GraphBuilder::new();

    let mut traverser = SchemaTraverser::new(&mut builder, document, config);
    traverser.process_roots(document.model_mappings());

    info!(
        strings = builder.string_count(),
        inputs = builder.input_node_count(),
        outputs = builder.output_node_count(),
        roots = builder.root_count(),
        "built param graph"
    );
    builder
}

/// Parse a JSON schema document and build its graph.
pub fn build_from_json(json: &str, config: &Config) -> Result<ParamGraph> {
    let document = Document::from_json(json)?;
    Ok(build_param_graph_with(&document, config))
}
