//! API error definitions

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use morpho::errors::{AnalyzerError, MorphoError};

use crate::config::NO_WORD_PROVIDED;

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Invalid input (missing or empty word)
  InvalidInput,
  /// The analyzer produced no candidate for the word
  Unanalyzable,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::Unanalyzable => "unanalyzable",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::Unanalyzable => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
///
/// Rendered as a plain-text body; `InvalidInput` carries the body verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Invalid input
  #[error("{0}")]
  InvalidInput(String),

  /// No parse candidate for the word
  #[error("Word could not be analyzed: {0}")]
  Unanalyzable(String),

  /// Internal error
  #[error("Internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::Unanalyzable(_) => ApiErrorKind::Unanalyzable,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// The 400 error for a missing or empty `word` parameter
  #[must_use]
  pub fn no_word() -> Self {
    Self::InvalidInput(NO_WORD_PROVIDED.to_string())
  }

  /// Creates an unanalyzable word error
  #[must_use]
  pub fn unanalyzable(word: impl Into<String>) -> Self {
    Self::Unanalyzable(word.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status(), self.to_string()).into_response()
  }
}

/// Maps domain errors of the morpho crate to API errors
impl From<MorphoError> for ApiError {
  fn from(err: MorphoError) -> Self {
    match err {
      MorphoError::Analyzer(AnalyzerError::EmptyInput) => ApiError::no_word(),
      MorphoError::Analyzer(AnalyzerError::NoCandidates { word }) => ApiError::unanalyzable(word),
      MorphoError::Analyzer(AnalyzerError::UnsupportedLanguage { name }) => {
        ApiError::config(format!("unsupported stemmer language: {name}"))
      }
      MorphoError::Dictionary(_) => ApiError::config(format!("dictionary error: {err}")),
      // #[non_exhaustive] enums, variants may be added later
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
