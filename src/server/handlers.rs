//! Route handlers

use super::AppState;
use crate::cli::SearchParams;
use crate::dataset::{self, Statistics};
use crate::error::AppError;
use crate::tools::search::execute_search;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use schemars::schema::RootSchema;
use serde_json::{json, Value};
use std::sync::Arc;

const WELCOME_MESSAGE: &str = "Welcome to the trademark search API.";

pub async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "ok", "records": state.dataset.len() }))
}

/// `GET /searchmarks/search`
///
/// The scan (and the rayon pool behind fuzzy ranking) runs on the
/// blocking pool. Results borrow from the shared dataset, so the page is
/// turned into a response inside the task.
pub async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    tokio::task::spawn_blocking(move || -> Result<Response, AppError> {
        let page = execute_search(&state.engine, &state.dataset, &params)?;
        Ok(Json(page).into_response())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Search task failed: {}", e)))?
}

pub async fn statistics(State(state): State<Arc<AppState>>) -> Json<Statistics> {
    Json(dataset::statistics(&state.dataset))
}

pub async fn schema() -> Json<RootSchema> {
    Json(schemars::schema_for!(SearchParams))
}
