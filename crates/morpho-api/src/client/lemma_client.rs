//! HTTP client for the lemma endpoint
//!
//! Used by the startup self-test, and by other processes that delegate
//! lemmatization to a running service.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::config::SELF_TEST_TIMEOUT;

/// Lemma client errors
#[derive(Debug, Error)]
pub enum ClientError {
  /// The request did not complete within the timeout
  #[error("lemma service timeout after {0:?}")]
  Timeout(Duration),

  /// The service answered with a status other than 200
  #[error("lemma service returned status {status}: {body}")]
  Status {
    /// HTTP status code
    status: u16,
    /// Response body
    body: String,
  },

  /// Connection or protocol error
  #[error("lemma service error: {0}")]
  Transport(#[source] reqwest::Error),

  /// The HTTP client could not be built
  #[error("failed to build HTTP client: {0}")]
  Build(#[source] reqwest::Error),
}

/// Client for `GET /lemma`
#[derive(Debug, Clone)]
pub struct LemmaClient {
  http: reqwest::Client,
  base_url: String,
  timeout: Duration,
}

impl LemmaClient {
  /// Client for the service at `base_url` (e.g. `http://127.0.0.1:5000`)
  /// with the default 5 second timeout
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built
  pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
    Self::with_timeout(base_url, SELF_TEST_TIMEOUT)
  }

  /// Client with a custom request timeout
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built
  pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
    let http = reqwest::Client::builder().timeout(timeout).build().map_err(ClientError::Build)?;
    let base_url = base_url.into().trim_end_matches('/').to_string();

    Ok(Self {
      http,
      base_url,
      timeout,
    })
  }

  /// Base URL of the service
  #[must_use]
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Lemmatizes `word` through the service
  ///
  /// # Errors
  /// - `ClientError::Timeout` if no answer arrives within the timeout
  /// - `ClientError::Status` for any status other than 200
  /// - `ClientError::Transport` for connection failures
  pub async fn lemmatize(&self, word: &str) -> Result<String, ClientError> {
    let url = format!("{}/lemma", self.base_url);
    debug!(url = %url, word = %word, "Requesting lemma");

    let response =
      self.http.get(&url).query(&[("word", word)]).send().await.map_err(|e| self.classify(e))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| self.classify(e))?;

    if status != StatusCode::OK {
      return Err(ClientError::Status {
        status: status.as_u16(),
        body,
      });
    }

    Ok(body)
  }

  fn classify(&self, err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
      ClientError::Timeout(self.timeout)
    } else {
      ClientError::Transport(err)
    }
  }
}
