//! Command implementations
//!
//! Each command returns the text to print so the binary stays a thin shell.

use anyhow::Result;
use chrono::NaiveDate;
use letter_engine::{
    list_family, list_templates, render_document, templates::table, DocumentFamily, FieldSet,
    RenderedDocument, TemplateInfo,
};

/// Options for the `render` command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub family: DocumentFamily,
    pub key: Option<String>,
    pub fields: FieldSet,
    pub date: NaiveDate,
}

/// Template listing, one line per template or JSON
pub fn templates(family: Option<DocumentFamily>, json: bool) -> Result<String> {
    let templates = match family {
        Some(family) => list_family(family),
        None => list_templates(),
    };

    if json {
        return Ok(serde_json::to_string_pretty(&templates)?);
    }

    Ok(templates.iter().map(format_info).collect::<Vec<_>>().join("\n"))
}

fn format_info(info: &TemplateInfo) -> String {
    let marker = if info.is_fallback { " (default)" } else { "" };
    format!(
        "{:<8} {:<22} {}{}",
        info.family.as_str(),
        info.key,
        info.title,
        marker
    )
}

/// Resolved template text, reporting whether the key matched
pub fn show(family: DocumentFamily, key: &str) -> (String, bool) {
    let resolution = table(family).lookup(key);
    (resolution.text.to_string(), resolution.matched)
}

/// Resolve and render a letter
pub fn render(options: &RenderOptions) -> RenderedDocument {
    let key = options
        .key
        .as_deref()
        .or_else(|| options.fields.dispute_type())
        .unwrap_or_default();

    let template = table(options.family).resolve(key);
    render_document(template, &options.fields, options.date)
}
