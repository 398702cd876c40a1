//! Core data types for the compliance screening pipeline.

pub mod config;
pub mod document;

pub use config::CoreConfig;
pub use document::{ContentKind, DocumentId, RawDocument};
