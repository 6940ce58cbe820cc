//! Property-based tests for letters-api export helpers

use axum::http::HeaderValue;
use letter_engine::DocumentFamily;
use letters_api::export::{attachment_header, download_filename, print_html};
use proptest::prelude::*;

fn family() -> impl Strategy<Value = DocumentFamily> {
    prop::sample::select(DocumentFamily::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Download names
    // ============================================================

    #[test]
    fn download_names_are_safe_txt_files(family in family(), key in ".{0,60}") {
        let name = download_filename(family, &key);
        prop_assert!(name.ends_with(".txt"));
        prop_assert!(name.len() > 4);
        prop_assert!(name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.'));
    }

    #[test]
    fn dispute_downloads_share_one_name(key in ".{0,60}") {
        prop_assert_eq!(
            download_filename(DocumentFamily::Dispute, &key),
            "dispute-letter.txt"
        );
    }

    #[test]
    fn attachment_header_has_one_quoted_name(name in ".{0,60}") {
        let value = attachment_header(&name);
        prop_assert!(value.starts_with("attachment; filename=\""));
        prop_assert!(value.ends_with('"'));
        prop_assert_eq!(value.matches('"').count(), 2);
        prop_assert!(!value.contains('\n'));
    }

    #[test]
    fn attachment_header_is_a_valid_header_value(name in "\\PC{0,40}|[\\x00-\\x1f\\x7f a-z.]{0,40}") {
        let value = attachment_header(&name);
        prop_assert!(HeaderValue::try_from(value).is_ok());
    }

    // ============================================================
    // Print pages
    // ============================================================

    #[test]
    fn print_html_never_leaks_markup(text in ".{0,200}") {
        let html = print_html("Letter", &text);
        let start = html.find("<pre>").unwrap() + "<pre>".len();
        let end = html.rfind("</pre>").unwrap();
        let body = &html[start..end];
        prop_assert!(!body.contains('<'));
        prop_assert!(!body.contains('>'));
    }
}
