//! Typegen Library - object-type definition generation
//!
//! Reads an introspected database schema and writes one GraphQL object-type
//! definition per model, plus the `index.ts` files that re-export them.

pub mod collab;
pub mod config;
pub mod document;
pub mod error;
pub mod fs;
pub mod generator;
pub mod index;
pub mod ir;
pub mod render;
pub mod style;

use std::path::PathBuf;

pub use collab::{Formatter, NoQueriesAndMutations, Passthrough, QueriesAndMutations, Tidy};
pub use config::{GeneratorConfig, OutputStyle};
pub use error::{CodegenError, Result};
pub use generator::{is_eligible, GenerationPlan, TypeDefinitionGenerator};
pub use ir::Schema;

/// A file to be written by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}
