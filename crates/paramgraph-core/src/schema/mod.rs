//! Schema document model.
//!
//! Deserialization layer for the DMMF document: model-to-operation mappings
//! plus the input and output object type universes, each split by namespace.

mod action;
mod types;


use std::io::Read;

pub use action::ModelAction;
pub use types::{
    Document, InputLocation, InputType, InputTypeRef, Mappings, ModelMapping, Namespace,
    Namespaced, OutputLocation, OutputType, OutputTypeRef, Schema, SchemaArg, SchemaField,
    type_key,
};

/// Errors from loading a schema document.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SchemaError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn model_mappings(&self) -> &[ModelMapping] {
        &self.mappings.model_operations
    }
}
