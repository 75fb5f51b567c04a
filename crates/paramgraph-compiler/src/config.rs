//! Configuration for graph construction.

use paramgraph_format::Width;

/// Root types searched for operation fields, and the encoding width.
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespaced name of the query root type
    pub(crate) query_type: String,
    /// Namespaced name of the mutation root type
    pub(crate) mutation_type: String,
    pub(crate) width: Width,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_type: "prisma.Query".to_string(),
            mutation_type: "prisma.Mutation".to_string(),
            width: Width::Auto,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query root type (`namespace.Name`).
    pub fn query_type(mut self, name: impl Into<String>) -> Self {
        self.query_type = name.into();
        self
    }

    /// Set the mutation root type (`namespace.Name`).
    pub fn mutation_type(mut self, name: impl Into<String>) -> Self {
        self.mutation_type = name.into();
        self
    }

    /// Set the word width used when serializing.
    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Root types in lookup order.
    pub(crate) fn root_types(&self) -> [&str; 2] {
        [&self.query_type, &self.mutation_type]
    }
}
