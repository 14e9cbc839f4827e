//! Host services: the in-memory type table and the Java project loader

pub mod java_project;
pub mod type_index;

pub use java_project::JavaProject;
pub use type_index::TypeIndex;
