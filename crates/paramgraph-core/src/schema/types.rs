//! Serde mapping of the schema document.
//!
//! Only the parts the graph builder reads are modelled; unknown keys are
//! ignored so newer documents still load.

use indexmap::IndexMap;
use serde::Deserialize;

use super::ModelAction;

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub schema: Schema,
    pub mappings: Mappings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mappings {
    #[serde(default)]
    pub model_operations: Vec<ModelMapping>,
}

/// Operations a single model exposes, by schema field name.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelMapping {
    pub model: String,
    /// Action key to implementing field name (`null` when not exposed).
    #[serde(flatten)]
    pub operations: IndexMap<String, Option<String>>,
}

impl ModelMapping {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            operations: IndexMap::new(),
        }
    }

    pub fn with_operation(mut self, action: ModelAction, field: impl Into<String>) -> Self {
        self.operations
            .insert(action.as_str().to_owned(), Some(field.into()));
        self
    }

    /// Name of the schema field implementing `action`, if any.
    pub fn field_for(&self, action: ModelAction) -> Option<&str> {
        self.operations
            .get(action.as_str())
            .and_then(|f| f.as_deref())
            .filter(|f| !f.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub input_object_types: Namespaced<InputType>,
    #[serde(default)]
    pub output_object_types: Namespaced<OutputType>,
}

/// Type collections split into the engine-internal and user-model namespaces.
#[derive(Debug, Clone, Deserialize)]
pub struct Namespaced<T> {
    #[serde(default = "Vec::new")]
    pub prisma: Vec<T>,
    #[serde(default = "Vec::new")]
    pub model: Vec<T>,
}

impl<T> Default for Namespaced<T> {
    fn default() -> Self {
        Self {
            prisma: Vec::new(),
            model: Vec::new(),
        }
    }
}

impl<T> Namespaced<T> {
    /// Engine-internal types first, then user-model types.
    pub fn iter(&self) -> impl Iterator<Item = (Namespace, &T)> {
        self.prisma
            .iter()
            .map(|t| (Namespace::Prisma, t))
            .chain(self.model.iter().map(|t| (Namespace::Model, t)))
    }

    pub fn len(&self) -> usize {
        self.prisma.len() + self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prisma.is_empty() && self.model.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Prisma,
    Model,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Prisma => "prisma",
            Namespace::Model => "model",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<SchemaArg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

/// An argument, or a field of an input object type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaArg {
    pub name: String,
    #[serde(default)]
    pub input_types: Vec<InputTypeRef>,
    #[serde(default)]
    pub is_parameterizable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTypeRef {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    pub location: InputLocation,
    #[serde(default)]
    pub is_list: bool,
}

impl InputTypeRef {
    pub fn key(&self) -> String {
        type_key(&self.type_name, self.namespace.as_deref())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputLocation {
    Scalar,
    EnumTypes,
    InputObjectTypes,
    FieldRefTypes,
    /// Anything newer than this crate knows about.
    #[serde(other)]
    Unknown,
}

/// A field of an output object type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub name: String,
    #[serde(default)]
    pub args: Vec<SchemaArg>,
    pub output_type: OutputTypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTypeRef {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    pub location: OutputLocation,
    #[serde(default)]
    pub is_list: bool,
}

impl OutputTypeRef {
    pub fn key(&self) -> String {
        type_key(&self.type_name, self.namespace.as_deref())
    }

    pub fn is_object(&self) -> bool {
        self.location == OutputLocation::OutputObjectTypes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputLocation {
    Scalar,
    EnumTypes,
    OutputObjectTypes,
    FieldRefTypes,
    #[serde(other)]
    Other,
}

/// Namespaced lookup key: `"model.User"`, or the bare name without a namespace.
pub fn type_key(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!("{ns}.{name}"),
        None => name.to_owned(),
    }
}
