//! Router definitions

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::handlers::{get_analyze, get_lemma, health_check};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/lemma", get(get_lemma))
    .route("/analyze", get(get_analyze))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Binds the listening socket
///
/// # Errors
/// Returns an error if the address cannot be bound
pub async fn bind(addr: &str) -> crate::errors::Result<TcpListener> {
  TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {}: {}", addr, e)))
}

/// Serves the API on an already bound listener until the process ends
///
/// # Errors
/// Returns an error if the server stops with an I/O error
pub async fn serve(listener: TcpListener, state: AppState) -> crate::errors::Result<()> {
  if let Ok(addr) = listener.local_addr() {
    tracing::info!("Serving on http://{}", addr);
  }

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {}", e)))
}

/// Binds `state.config.bind_addr` and serves the API
///
/// # Errors
/// Returns an error if binding or serving fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let listener = bind(&state.config.bind_addr).await?;
  serve(listener, state).await
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::AnalyzeResponse;
  use crate::service::LemmaService;

  /// Dummy implementation for testing (no dictionary)
  struct DummyService;

  impl LemmaService for DummyService {
    fn lemmatize(&self, word: &str) -> ApiResult<String> {
      Ok(word.to_string())
    }

    fn analyze(&self, word: &str) -> ApiResult<AnalyzeResponse> {
      Ok(AnalyzeResponse {
        word: word.to_string(),
        candidates: Vec::new(),
        elapsed_ms: 0,
      })
    }
  }

  fn create_test_state(bind_addr: &str) -> AppState {
    let config = Config {
      bind_addr: bind_addr.to_string(),
      ..Config::default()
    };
    AppState::new(config, Arc::new(DummyService) as Arc<dyn LemmaService>)
  }

  #[test]
  fn test_router_creation() {
    let _router = create_router(create_test_state("127.0.0.1:0"));
  }

  #[tokio::test]
  async fn bind_invalid_address_is_config_error() {
    let err = bind("not an address").await.unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[tokio::test]
  async fn run_server_fails_when_port_is_taken() {
    let taken = bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    let err = run_server(create_test_state(&addr)).await.unwrap_err();
    assert_eq!(err.code(), "config_error");
  }
}
