//! Loading command inputs: schema documents and serialized graphs.

use std::fs;
use std::path::{Path, PathBuf};

use paramgraph_compiler::{Config, build_param_graph_with};
use paramgraph_core::{Document, SchemaError};
use paramgraph_format::{FormatError, ParamGraph, SerializedParamGraph, deserialize_param_graph};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// What a JSON input file turned out to be.
#[derive(Debug)]
pub enum GraphInput {
    Document(Box<Document>),
    Serialized(SerializedParamGraph),
}

pub fn read_input(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialized graphs are recognized by a string `graph` key.
pub fn parse_input(text: &str) -> Result<GraphInput, InputError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.get("graph").is_some_and(serde_json::Value::is_string) {
        return Ok(GraphInput::Serialized(serde_json::from_value(value)?));
    }
    let document = serde_json::from_value(value).map_err(SchemaError::from)?;
    Ok(GraphInput::Document(Box::new(document)))
}

pub fn load_document(path: &Path) -> Result<Document, InputError> {
    let text = read_input(path)?;
    Ok(Document::from_json(&text)?)
}

/// Build or decode the graph behind `path`.
pub fn load_graph(path: &Path, config: &Config) -> Result<ParamGraph, InputError> {
    let text = read_input(path)?;
    match parse_input(&text)? {
        GraphInput::Document(document) => {
            debug!(path = %path.display(), "building from schema document");
            Ok(build_param_graph_with(&document, config))
        }
        GraphInput::Serialized(serialized) => {
            debug!(path = %path.display(), "decoding serialized graph");
            Ok(deserialize_param_graph(&serialized)?)
        }
    }
}
