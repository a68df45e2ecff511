//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the note content core to Dart via FRB as plain values.
//! - Keep error semantics simple: envelopes with `ok` and a message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Node trees cross the boundary as JSON strings in the core wire shape.

use log::warn;
use notecraft_core::{
    classify, core_version as core_version_inner, derive_note_projection, extract_tags,
    init_logging as init_logging_inner, parse_document, ping as ping_inner, ContentProperties,
    Document, NoteContentService, NoteProjection,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Content properties mirrored for Dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPropertiesDto {
    pub has_link: bool,
    pub has_task_list: bool,
    pub has_code: bool,
    pub has_incomplete_tasks: bool,
}

impl From<ContentProperties> for ContentPropertiesDto {
    fn from(value: ContentProperties) -> Self {
        Self {
            has_link: value.has_link,
            has_task_list: value.has_task_list,
            has_code: value.has_code,
            has_incomplete_tasks: value.has_incomplete_tasks,
        }
    }
}

/// Note projection mirrored for Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteProjectionDto {
    /// Lowercase, sorted tag names.
    pub tags: Vec<String>,
    pub properties: ContentPropertiesDto,
    pub preview_text: Option<String>,
}

impl From<NoteProjection> for NoteProjectionDto {
    fn from(value: NoteProjection) -> Self {
        Self {
            tags: value.tags,
            properties: value.properties.into(),
            preview_text: value.preview_text,
        }
    }
}

/// Response envelope for node-tree flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSerializeResponse {
    /// Whether the tree was valid and flattened.
    pub ok: bool,
    /// Flattened note text (empty on failure).
    pub text: String,
    /// Human-readable failure reason (empty on success).
    pub message: String,
}

impl ContentSerializeResponse {
    fn success(text: String) -> Self {
        Self {
            ok: true,
            text,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: String::new(),
            message: message.into(),
        }
    }
}

/// Parses note text into a node tree encoded as JSON.
///
/// # FFI contract
/// - Never fails for any input; returns `[]` if encoding fails.
#[flutter_rust_bridge::frb(sync)]
pub fn content_parse(text: String) -> String {
    let document = parse_document(text.as_str());
    match serde_json::to_string(&document) {
        Ok(json) => json,
        Err(err) => {
            warn!(
                "event=content_parse module=ffi status=error error_code=encode_failed error={}",
                err
            );
            "[]".to_string()
        }
    }
}

/// Flattens an edited node tree (JSON) back into note text.
///
/// # FFI contract
/// - Rejects malformed JSON and trees that fail node validation.
#[flutter_rust_bridge::frb(sync)]
pub fn content_serialize(document_json: String) -> ContentSerializeResponse {
    let document = match serde_json::from_str::<Document>(document_json.as_str()) {
        Ok(document) => document,
        Err(err) => {
            return ContentSerializeResponse::failure(format!(
                "content_serialize failed: invalid node tree: {err}"
            ));
        }
    };

    match NoteContentService::default().flatten(&document) {
        Ok(text) => ContentSerializeResponse::success(text),
        Err(err) => ContentSerializeResponse::failure(format!("content_serialize failed: {err}")),
    }
}

/// Classifies note text for filtering.
#[flutter_rust_bridge::frb(sync)]
pub fn content_classify(text: String) -> ContentPropertiesDto {
    classify(text.as_str()).into()
}

/// Extracts hashtag names as written, sorted.
#[flutter_rust_bridge::frb(sync)]
pub fn content_extract_tags(text: String) -> Vec<String> {
    extract_tags(text.as_str()).into_iter().collect()
}

/// Derives the persistence projection for note text.
#[flutter_rust_bridge::frb(sync)]
pub fn note_project(text: String) -> NoteProjectionDto {
    derive_note_projection(text.as_str()).into()
}
