//! Tag extractor over raw note text.
//!
//! # Responsibility
//! - Produce the set of hashtag names a note carries, for tag persistence.
//!
//! # Invariants
//! - Agrees with the `TAG` nodes `parse_document` produces for the same text:
//!   fenced code is skipped and a hashtag starting inside an earlier link is
//!   not a tag.
//! - Names are returned as written; [`normalize_tag_names`] lowercases them
//!   for storage.

use crate::content::patterns::{is_fence_line, TAG_RE, URL_RE};
use std::collections::BTreeSet;

/// Extracts the distinct hashtag names from note text.
pub fn extract_tags(text: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    let mut in_code_block = false;
    for line in text.lines() {
        if is_fence_line(line) {
            in_code_block = !in_code_block;
            continue;
        }
        if !in_code_block {
            collect_line_tags(line, &mut tags);
        }
    }
    tags
}

/// Lowercases and deduplicates tag names, sorted by name.
pub fn normalize_tag_names<'a>(tags: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn collect_line_tags(line: &str, tags: &mut BTreeSet<String>) {
    let mut links = URL_RE.find_iter(line).peekable();
    // End of the last span kept so far, walking tags and links by start offset.
    let mut covered = 0;
    for caps in TAG_RE.captures_iter(line) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        while let Some(link) = links.next_if(|link| link.start() < whole.start()) {
            if link.start() >= covered {
                covered = link.end();
            }
        }
        if whole.start() < covered {
            continue;
        }
        covered = whole.end();
        tags.insert(name.as_str().to_string());
    }
}
