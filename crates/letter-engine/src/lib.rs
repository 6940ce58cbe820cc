//! Legal letter template engine
//!
//! This crate provides the document-template core used to produce dispute
//! letters, traffic-ticket remedy letters and trust schedules:
//! - Embedded template store with one table per document family
//! - Total template resolution with per-family fallbacks
//! - Placeholder substitution driven by an explicit token table
//! - Template metadata for listing screens
//!
//! Resolution and rendering never fail: every input produces text.

pub mod error;
pub mod family;
pub mod fields;
pub mod substitution;
pub mod templates;

pub use error::EngineError;
pub use family::DocumentFamily;
pub use fields::FieldSet;
pub use substitution::{
    placeholders, render, render_at, render_document, RenderedDocument, Token,
};
pub use templates::{
    list_family, list_templates, resolve, resolve_for, table, template_info, Fallback,
    Resolution, TemplateInfo, TemplateTable, NOT_FOUND_MESSAGE,
};
