//! Plain-text download and print wrapping for rendered letters

use letter_engine::DocumentFamily;

/// Download name used for dispute letters
pub const DISPUTE_LETTER_FILENAME: &str = "dispute-letter.txt";

/// File name offered when a letter is downloaded
pub fn download_filename(family: DocumentFamily, category_key: &str) -> String {
    match family {
        DocumentFamily::Dispute => DISPUTE_LETTER_FILENAME.to_string(),
        _ => {
            let slug = slugify(category_key);
            if slug.is_empty() {
                format!("{}-letter.txt", family)
            } else {
                format!("{}.txt", slug)
            }
        }
    }
}

/// `Content-Disposition` value for a text attachment
///
/// Quotes, backslashes and control characters are dropped so the result is
/// always a valid header value.
pub fn attachment_header(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '\\'))
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}

/// Minimal HTML page that prints `text` preformatted
pub fn print_html(title: &str, text: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>body {{ font-family: serif; margin: 1in; }} pre {{ white-space: pre-wrap; font-family: inherit; }}</style>\n\
         </head>\n<body onload=\"window.print()\">\n<pre>{}</pre>\n</body>\n</html>\n",
        escape_html(title),
        escape_html(text)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn slugify(text: &str) -> String {
    let mut slug = String::new();
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
