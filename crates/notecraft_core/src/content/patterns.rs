//! Process-wide pattern definitions shared by the content components.
//!
//! # Invariants
//! - The tokenizer and the tag extractor read the same tag alphabet and URL
//!   pattern from here; extraction code itself is not shared.

use once_cell::sync::Lazy;
use regex::Regex;

/// Triple-backtick fence marker.
pub const FENCE: &str = "```";

/// URL schemes recognized as auto-links.
pub const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// One character of a tag name: ASCII word characters, `-`, and CJK scripts.
const TAG_CHAR_CLASS: &str = r"[A-Za-z0-9_\-\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}]";

/// `#name` hashtag. Group 1 is the name.
pub static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("#({TAG_CHAR_CLASS}+)")).expect("valid tag regex"));

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{TAG_CHAR_CLASS}+$")).expect("valid tag name regex"));

/// Absolute http(s) URL running until the next whitespace.
pub static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// Returns whether `name` is a complete tag name (no `#`, non-empty).
pub fn is_tag_name(name: &str) -> bool {
    TAG_NAME_RE.is_match(name)
}

/// Returns whether `line` opens or closes a fenced code block.
pub fn is_fence_line(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}
