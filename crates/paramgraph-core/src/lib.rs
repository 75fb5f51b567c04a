#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for paramgraph.
//!
//! - `interner`: the deduplicated string table every graph refers into
//! - `schema`: serde model of the schema document the graph is built from
//! - `colors`: ANSI palette for human-readable output

pub mod colors;
pub mod interner;
pub mod schema;

#[cfg(test)]
mod interner_tests;

pub use colors::Colors;
pub use interner::{Interner, StringId};
pub use schema::{Document, ModelAction, SchemaError};
