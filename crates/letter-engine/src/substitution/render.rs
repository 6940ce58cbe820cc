//! Core rendering logic
//!
//! Rendering is a single left-to-right pass over the bracketed markers of a
//! template. Replaced text is never scanned again, so field values that
//! themselves look like placeholders are inserted literally.

use chrono::{Local, NaiveDate};
use regex::Captures;
use serde::{Deserialize, Serialize};

use super::scanner::PLACEHOLDER_PATTERN;
use super::tokens::Token;
use crate::fields::FieldSet;

/// Rendered text plus the placeholders still waiting for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub text: String,
    /// Markers left verbatim, distinct, in order of first appearance
    pub unresolved: Vec<String>,
}

impl RenderedDocument {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Render `template` with today's local date
pub fn render(template: &str, fields: &FieldSet) -> String {
    render_at(template, fields, Local::now().date_naive())
}

/// Render `template` using `date` for the date tokens
pub fn render_at(template: &str, fields: &FieldSet, date: NaiveDate) -> String {
    render_document(template, fields, date).text
}

/// Render and report which markers were left in place
pub fn render_document(template: &str, fields: &FieldSet, date: NaiveDate) -> RenderedDocument {
    let mut unresolved: Vec<String> = Vec::new();

    let text = PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| {
            let marker = &caps[0];
            match Token::from_marker(marker).and_then(|token| token.value(fields, date)) {
                Some(value) => value.into_owned(),
                None => {
                    if !unresolved.iter().any(|existing| existing == marker) {
                        unresolved.push(marker.to_string());
                    }
                    marker.to_string()
                }
            }
        })
        .into_owned();

    tracing::trace!(
        template_len = template.len(),
        unresolved = unresolved.len(),
        "rendered template"
    );

    RenderedDocument { text, unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 5).unwrap()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let fields = FieldSet::new().with_creditor_name("Chase Bank");
        let text = render_at("[CREDITOR_NAME] / [CREDITOR_NAME]", &fields, date());
        assert_eq!(text, "Chase Bank / Chase Bank");
    }

    #[test]
    fn test_empty_field_set() {
        let template = "[CREDITOR_NAME]|[ACCOUNT_NUMBER]|[REPORTED_BALANCE]|[REASON]|[DATE]|[MONTH]|[YEAR]";
        let text = render_at(template, &FieldSet::new(), date());
        assert_eq!(
            text,
            "[CREDITOR_NAME]|N/A|$0.00|[REASON]|11/5/2024|November|2024"
        );
    }

    #[test]
    fn test_manual_markers_are_left_alone() {
        let fields = FieldSet::new()
            .with_creditor_name("Chase Bank")
            .with_reason("Paid in full");
        let text = render_at("[Your Name]\n[CREDITOR_NAME]\n[Your Signature]", &fields, date());
        assert_eq!(text, "[Your Name]\nChase Bank\n[Your Signature]");
    }

    #[test]
    fn test_field_values_are_not_rescanned() {
        let fields = FieldSet::new()
            .with_creditor_name("[REASON]")
            .with_reason("[CREDITOR_NAME]");
        let text = render_at("[CREDITOR_NAME] then [REASON]", &fields, date());
        assert_eq!(text, "[REASON] then [CREDITOR_NAME]");
    }

    #[test]
    fn test_self_referencing_value_does_not_loop() {
        let fields = FieldSet::new().with_creditor_name("[CREDITOR_NAME][CREDITOR_NAME]");
        let text = render_at("To: [CREDITOR_NAME]", &fields, date());
        assert_eq!(text, "To: [CREDITOR_NAME][CREDITOR_NAME]");
    }

    #[test]
    fn test_unresolved_report() {
        let doc = render_document(
            "[Your Name] [CREDITOR_NAME] [DATE] [Your Name] [REASON]",
            &FieldSet::new(),
            date(),
        );
        assert_eq!(
            doc.unresolved,
            vec!["[Your Name]", "[CREDITOR_NAME]", "[REASON]"]
        );
        assert!(!doc.is_complete());
    }

    #[test]
    fn test_complete_document() {
        let fields = FieldSet::new()
            .with_creditor_name("Acme")
            .with_reason("Not mine");
        let doc = render_document("[CREDITOR_NAME]: [REASON] ([DATE])", &fields, date());
        assert_eq!(doc.text, "Acme: Not mine (11/5/2024)");
        assert!(doc.is_complete());
    }

    #[test]
    fn test_text_without_markers_is_unchanged() {
        let message = "Template not found. Please select a valid template type.";
        assert_eq!(render_at(message, &FieldSet::new(), date()), message);
        assert_eq!(render_at("", &FieldSet::new(), date()), "");
    }

    #[test]
    fn test_render_uses_current_year() {
        use chrono::Datelike;

        let text = render("[YEAR]", &FieldSet::new());
        assert_eq!(text, Local::now().year().to_string());
    }
}
