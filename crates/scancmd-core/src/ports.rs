//! Shape checks for free-text port fields.
//!
//! These never block input or alter the generated command; they only let
//! the UI flag text that RustScan will most likely reject.

use std::sync::LazyLock;

use regex::Regex;

static CUSTOM_PORTS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(-\d+)?)(,\d+(-\d+)?)*$").expect("valid regex"));

static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-\d+$").expect("valid regex"));

/// `80,443,8000-9000` style list. Empty text counts as well formed.
pub fn custom_ports_well_formed(text: &str) -> bool {
    text.is_empty() || CUSTOM_PORTS_PATTERN.is_match(text)
}

/// `1-1000` style range. Empty text counts as well formed.
pub fn range_well_formed(text: &str) -> bool {
    text.is_empty() || RANGE_PATTERN.is_match(text)
}
