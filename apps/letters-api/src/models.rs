//! Data models for the letters API

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use letter_engine::{DocumentFamily, FieldSet};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Query string for template listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateQuery {
    pub family: Option<String>,
}

/// A resolved template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub family: DocumentFamily,
    pub key: String,
    /// False when the family fallback was returned
    pub matched: bool,
    pub text: String,
}

/// Request to render a letter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Defaults to `dispute`
    #[serde(default)]
    pub family: Option<String>,
    /// Defaults to `fields.disputeType`
    #[serde(default)]
    pub category_key: Option<String>,
    #[serde(default)]
    pub fields: FieldSet,
    /// Date used for date tokens; defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Rendered letter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub family: DocumentFamily,
    pub category_key: String,
    pub matched: bool,
    pub text: String,
    /// Placeholders the user still has to complete
    pub unresolved: Vec<String>,
}

/// Request to download text as a file
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub text: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Request to wrap text in a printable page
#[derive(Debug, Clone, Deserialize)]
pub struct PrintRequest {
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Request to save a letter
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDocumentRequest {
    pub title: String,
    pub family: String,
    pub category_key: String,
    pub content: String,
}

/// Saved letter as stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct DbDocument {
    pub id: String,
    pub title: String,
    pub family: String,
    pub category_key: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Saved letter response for API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: String,
    pub title: String,
    pub family: DocumentFamily,
    pub category_key: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fails when the stored family does not parse
impl TryFrom<DbDocument> for DocumentResponse {
    type Error = anyhow::Error;

    fn try_from(doc: DbDocument) -> Result<Self, Self::Error> {
        let family: DocumentFamily = doc
            .family
            .parse()
            .with_context(|| format!("Stored document {} has an invalid family", doc.id))?;

        Ok(Self {
            id: doc.id,
            title: doc.title,
            family,
            category_key: doc.category_key,
            content: doc.content,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}
