//! HTTP handler definitions

use axum::{
  Json,
  extract::{Query, State},
};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnalyzeResponse, LemmaQuery};

use super::state::AppState;

/// GET /lemma endpoint
///
/// Returns the normal form of the best parse candidate as plain text.
///
/// # Response
/// - 200 OK: lemma
/// - 400 Bad Request: `No word provided` (missing or empty `word`)
/// - 422 Unprocessable Entity: the analyzer found no candidate
/// - 500 Internal Server Error: internal error
pub async fn get_lemma(
  State(state): State<AppState>,
  Query(params): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
  let word = LemmaQuery::from(params).into_word().ok_or_else(ApiError::no_word)?;
  debug!(word = %word, "Lemma request received");

  // Analysis is CPU bound, keep it off the async runtime
  let service = state.service.clone();
  let lemma = tokio::task::spawn_blocking(move || {
    let lemma = service.lemmatize(&word);
    if let Ok(lemma) = &lemma {
      info!(word = %word, lemma = %lemma, "Lemmatized");
    }
    lemma
  })
  .await
  .map_err(|e| {
    error!(error = %e, "spawn_blocking error");
    ApiError::internal("failed to run the analyzer")
  })??;

  Ok(lemma)
}

/// GET /analyze endpoint
///
/// Returns every ranked parse candidate as JSON.
pub async fn get_analyze(
  State(state): State<AppState>,
  Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  let word = LemmaQuery::from(params).into_word().ok_or_else(ApiError::no_word)?;
  debug!(word = %word, "Analyze request received");

  let service = state.service.clone();
  let response =
    tokio::task::spawn_blocking(move || service.analyze(&word)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking error");
      ApiError::internal("failed to run the analyzer")
    })??;

  info!(
    candidate_count = response.candidates.len(),
    elapsed_ms = response.elapsed_ms,
    "Analysis completed"
  );

  Ok(Json(response))
}

/// Health check endpoint
///
/// Liveness only, the analyzer is not consulted.
pub async fn health_check() -> &'static str {
  "OK"
}
