//! Note content use-case service.
//!
//! # Responsibility
//! - Derive the projection persistence stores next to raw note text: tags,
//!   filterable properties and a plain-text preview.
//! - Flatten structured edits back into storable text.
//!
//! # Invariants
//! - Raw note text is the source of truth; every projection is recomputed
//!   from it and never read back.
//! - Tag names in a projection are lowercase and deduplicated.
//! - Preview text has whitespace collapsed and is `None` when empty.

use crate::config::{CoreConfig, DEFAULT_PREVIEW_MAX_CHARS};
use crate::content::{
    classify, extract_tags, normalize_tag_names, parse_document, plain_text,
    try_serialize_document, ContentProperties,
};
use crate::model::node::{Document, NodeValidationError};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Instant;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derived note fields persisted for listing and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteProjection {
    /// Normalized tag names, sorted.
    pub tags: Vec<String>,
    pub properties: ContentProperties,
    /// Plain-text summary, truncated to the configured length.
    pub preview_text: Option<String>,
}

/// Note content service with configurable projection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContentService {
    preview_max_chars: usize,
}

impl Default for NoteContentService {
    fn default() -> Self {
        Self {
            preview_max_chars: DEFAULT_PREVIEW_MAX_CHARS,
        }
    }
}

impl NoteContentService {
    /// Creates a service using settings from `config`.
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            preview_max_chars: config.preview_max_chars.max(1),
        }
    }

    /// Parses note text for a structured view.
    pub fn parse(&self, content: &str) -> Document {
        parse_document(content)
    }

    /// Derives tags, properties and preview from note text.
    pub fn project(&self, content: &str) -> NoteProjection {
        let started_at = Instant::now();
        let document = parse_document(content);
        let tags = normalize_tag_names(&extract_tags(content));
        let properties = classify(content);
        let preview_text = preview_from(&document, self.preview_max_chars);

        debug!(
            "event=note_project module=service status=ok blocks={} tags={} has_link={} has_code={} has_task_list={} duration_us={}",
            document.len(),
            tags.len(),
            properties.has_link,
            properties.has_code,
            properties.has_task_list,
            started_at.elapsed().as_micros()
        );

        NoteProjection {
            tags,
            properties,
            preview_text,
        }
    }

    /// Validates an edited tree and flattens it into storable note text.
    pub fn flatten(&self, document: &Document) -> Result<String, NodeValidationError> {
        try_serialize_document(document).map_err(|err| {
            warn!(
                "event=note_flatten module=service status=error error_code=invalid_node error={}",
                err
            );
            err
        })
    }
}

/// Derives a projection with default settings.
pub fn derive_note_projection(content: &str) -> NoteProjection {
    NoteContentService::default().project(content)
}

fn preview_from(document: &Document, max_chars: usize) -> Option<String> {
    let text = plain_text(document);
    let collapsed = WHITESPACE_RE.replace_all(&text, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(max_chars).collect())
    }
}
