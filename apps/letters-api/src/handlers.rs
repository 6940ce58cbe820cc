//! HTTP handlers for the letters API

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::{Local, Utc};
use letter_engine::{
    list_family, list_templates, render_document, templates::table, DocumentFamily,
    TemplateInfo,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::export;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// List templates, optionally filtered by family
pub async fn get_templates(
    Query(query): Query<TemplateQuery>,
) -> Result<Json<Vec<TemplateInfo>>, ApiError> {
    let templates = match query.family.as_deref() {
        Some(family) => list_family(family.parse()?),
        None => list_templates(),
    };
    Ok(Json(templates))
}

/// Resolve a category key within a family
pub async fn get_template(
    Path((family, key)): Path<(String, String)>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let family: DocumentFamily = family.parse()?;
    let resolution = table(family).lookup(&key);

    Ok(Json(ResolveResponse {
        family,
        key,
        matched: resolution.matched,
        text: resolution.text.to_string(),
    }))
}

/// Resolve and render a letter
pub async fn render_letter(
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, ApiError> {
    let family = match req.family.as_deref() {
        Some(family) => family.parse()?,
        None => DocumentFamily::Dispute,
    };

    let category_key = req
        .category_key
        .clone()
        .or_else(|| req.fields.dispute_type().map(str::to_string))
        .unwrap_or_default();

    let resolution = table(family).lookup(&category_key);
    let date = req.date.unwrap_or_else(|| Local::now().date_naive());
    let rendered = render_document(resolution.text, &req.fields, date);

    tracing::info!(
        %family,
        category_key = %category_key,
        matched = resolution.matched,
        unresolved = rendered.unresolved.len(),
        "Rendered letter"
    );

    Ok(Json(RenderResponse {
        family,
        category_key,
        matched: resolution.matched,
        text: rendered.text,
        unresolved: rendered.unresolved,
    }))
}

/// Return text as a plain-text attachment
pub async fn export_letter(Json(req): Json<ExportRequest>) -> impl IntoResponse {
    let filename = req
        .filename
        .unwrap_or_else(|| export::DISPUTE_LETTER_FILENAME.to_string());

    text_attachment(&filename, req.text)
}

/// Wrap text in a printable HTML page
pub async fn print_letter(Json(req): Json<PrintRequest>) -> Html<String> {
    let title = req.title.as_deref().unwrap_or("Letter");
    Html(export::print_html(title, &req.text))
}

/// Save a letter
pub async fn save_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentResponse>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Title is required".into()));
    }
    if req.content.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Content is required".into()));
    }
    let family: DocumentFamily = req.family.parse()?;

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO documents (id, title, family, category_key, content, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&req.title)
    .bind(family.as_str())
    .bind(&req.category_key)
    .bind(&req.content)
    .bind(now.to_rfc3339())
    .bind(now.to_rfc3339())
    .execute(&state.db)
    .await?;

    tracing::info!("Saved document: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(DocumentResponse {
            id,
            title: req.title,
            family,
            category_key: req.category_key,
            content: req.content,
            created_at: now,
            updated_at: now,
        }),
    ))
}

/// List saved letters, newest first
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let documents: Vec<DbDocument> = sqlx::query_as(
        r#"
        SELECT id, title, family, category_key, content, created_at, updated_at
        FROM documents
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    let documents = documents
        .into_iter()
        .map(DocumentResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(documents))
}

/// Get a saved letter by ID
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let document = fetch_document(&state, &id).await?;
    Ok(Json(DocumentResponse::try_from(document)?))
}

/// Download a saved letter as plain text
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let document = DocumentResponse::try_from(fetch_document(&state, &id).await?)?;
    let filename = export::download_filename(document.family, &document.category_key);

    Ok(text_attachment(&filename, document.content))
}

async fn fetch_document(state: &AppState, id: &str) -> Result<DbDocument, ApiError> {
    let document: Option<DbDocument> = sqlx::query_as(
        r#"
        SELECT id, title, family, category_key, content, created_at, updated_at
        FROM documents
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    document.ok_or_else(|| ApiError::DocumentNotFound(id.to_string()))
}

fn text_attachment(filename: &str, text: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                export::attachment_header(filename),
            ),
        ],
        text,
    )
}
