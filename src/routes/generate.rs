//! Generation API endpoints
//!
//! POST endpoints that produce a study-notes booklet or an answer key for
//! a subject and report where the PDF landed.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::compose::ComposeSettings;
use crate::error::Result;
use crate::generate::{generate_answer_key, generate_notes};
use crate::state::AppState;

/// Create the generation router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", post(create_notes))
        .route("/answer-key", post(create_answer_key))
}

/// Request body for both generation endpoints
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub subject_name: String,
    #[serde(default = "default_true")]
    pub include_citations: bool,
    #[serde(default = "default_true")]
    pub smart_highlights: bool,
    /// Accepted but currently ignored by the renderer
    #[serde(default)]
    pub dark_export: bool,
}

fn default_true() -> bool {
    true
}

impl GenerateRequest {
    fn settings(&self) -> ComposeSettings {
        ComposeSettings {
            include_citations: self.include_citations,
            smart_highlights: self.smart_highlights,
            dark_export: self.dark_export,
        }
    }
}

/// Response body for both generation endpoints
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub file_path: String,
    pub filename: String,
    pub message: String,
    pub metadata: serde_json::Value,
}

/// Generate a study-notes booklet
async fn create_notes(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let (file, report) = generate_notes(
        &req.subject_name,
        state.store(),
        state.clock(),
        &state.config().output.dir,
        &req.settings(),
    )?;

    Ok(Json(GenerateResponse {
        success: true,
        file_path: file.file_path.display().to_string(),
        filename: file.filename,
        message: format!("Study notes generated for {}", req.subject_name),
        metadata: serde_json::to_value(&report)
            .map_err(|e| crate::error::AppError::Internal(e.to_string()))?,
    }))
}

/// Generate an answer key
async fn create_answer_key(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let (file, report) = generate_answer_key(
        &req.subject_name,
        state.store(),
        state.clock(),
        &state.config().output.dir,
        &req.settings(),
    )?;

    Ok(Json(GenerateResponse {
        success: true,
        file_path: file.file_path.display().to_string(),
        filename: file.filename,
        message: format!("Answer key generated for {}", req.subject_name),
        metadata: serde_json::to_value(&report)
            .map_err(|e| crate::error::AppError::Internal(e.to_string()))?,
    }))
}
