//! Note content compiler.
//!
//! # Responsibility
//! - Parse raw note text into a [`Document`] and serialize it back.
//! - Derive tags and filterable properties straight from raw text.
//!
//! # Invariants
//! - Every function here is pure: text in, value out, no shared mutable
//!   state and no I/O besides `debug` log events.
//! - `extract_tags(text)` equals the set of `TAG` names in
//!   `parse_document(text)`.
//!
//! [`Document`]: crate::model::node::Document

pub mod block;
pub mod inline;
pub mod patterns;
pub mod plain;
pub mod property;
pub mod serialize;
pub mod tags;

pub use block::{line_kind, parse_document, LineKind};
pub use inline::{tokenize, tokenize_spans, InlineSpan};
pub use plain::plain_text;
pub use property::{classify, ContentProperties};
pub use serialize::{render_inline, serialize_document, serialize_node, try_serialize_document};
pub use tags::{extract_tags, normalize_tag_names};
