//! o2ox - generate bean-to-bean mapping code for the method under the cursor
//!
//! This crate provides functionality to:
//! - Locate the method around a cursor offset and resolve its return type
//!   (the target) and enclosing type (the source)
//! - Match the target's setters to the source's fields by case-insensitive name
//! - Render a chained-builder or imperative-assignment snippet and splice it
//!   into the document
//!
//! The pipeline only depends on the traits in [`interfaces`]; [`parser`] and
//! [`services`] provide a tree-sitter based Java host for them.
pub mod config;
pub mod edit;
pub mod error;
pub mod generator;
pub mod interfaces;
pub mod locator;
pub mod mapper;
pub mod parser;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{AbortReason, Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Config;
pub use edit::{apply_insertion, DocumentEdit, Reindent};
pub use generator::MappingGenerator;
pub use locator::Locator;
pub use services::{JavaProject, TypeIndex};
