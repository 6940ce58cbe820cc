//! Placeholder detection

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A bracketed marker on a single line, e.g. `[DATE]` or `[Your Name]`
    pub(crate) static ref PLACEHOLDER_PATTERN: Regex =
        Regex::new(r"\[[^\[\]\n]{1,80}\]").unwrap();
}

/// Distinct placeholders in `text`, in order of first appearance
pub fn placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in PLACEHOLDER_PATTERN.find_iter(text) {
        if !found.iter().any(|existing| existing == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }
    found
}
