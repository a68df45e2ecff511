//! Property classifier over raw note text.
//!
//! # Responsibility
//! - Derive filterable facts (`has_link`, `has_code`, `has_task_list`,
//!   `has_incomplete_tasks`) without building a node tree.
//!
//! # Invariants
//! - Runs independent pattern checks against raw text only; it never calls
//!   the block scanner.

use crate::content::patterns::URL_RE;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TASK_BOX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"- \[[ xX]\]").expect("valid task box regex"));
static INCOMPLETE_TASK_BOX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"- \[ \]").expect("valid incomplete task box regex"));

/// Derived facts used by listing filters and statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentProperties {
    pub has_link: bool,
    pub has_task_list: bool,
    pub has_code: bool,
    pub has_incomplete_tasks: bool,
}

/// Classifies raw note text.
pub fn classify(text: &str) -> ContentProperties {
    ContentProperties {
        has_link: URL_RE.is_match(text),
        has_task_list: TASK_BOX_RE.is_match(text),
        // Any fence contains a backtick, so one check covers both forms.
        has_code: text.contains('`'),
        has_incomplete_tasks: INCOMPLETE_TASK_BOX_RE.is_match(text),
    }
}
