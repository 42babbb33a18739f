//! Catalog API endpoints
//!
//! Read-only views of the demo datasets, keyed by subject.

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::content::SubjectKey;
use crate::error::Result;
use crate::state::AppState;

/// Create the catalog router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/textbooks", get(list_textbooks))
        .route("/questions", get(list_questions))
}

/// List the available textbooks
async fn list_textbooks(State(state): State<AppState>) -> Result<Json<Value>> {
    let store = state.store();
    Ok(Json(json!({
        "quantum_physics": store.textbook(SubjectKey::QuantumPhysics),
        "machine_learning": store.textbook(SubjectKey::MachineLearning),
    })))
}

/// List the available exam questions
async fn list_questions(State(state): State<AppState>) -> Result<Json<Value>> {
    let store = state.store();
    Ok(Json(json!({
        "quantum_physics": store.questions(SubjectKey::QuantumPhysics),
        "machine_learning": store.questions(SubjectKey::MachineLearning),
    })))
}
