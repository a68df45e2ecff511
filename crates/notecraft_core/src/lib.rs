//! Core content model for Notecraft notes.
//! Raw note text goes in; node trees, tags and filterable properties come out.

pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use content::{
    classify, extract_tags, parse_document, serialize_document, tokenize, try_serialize_document,
    ContentProperties,
};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::node::{Document, Node, NodeKind, NodeValidationError};
pub use service::note_content::{derive_note_projection, NoteContentService, NoteProjection};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
