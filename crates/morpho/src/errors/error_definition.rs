//! Error definitions

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Dictionary related errors
///
/// vibrato-rkyv can load IPADIC, UniDic and locally compiled dictionaries.
/// Load failures are cached by `DictionaryManager`, hence `Clone`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// Cache directory could not be determined for this OS
  #[error("dictionary cache directory not found")]
  CacheDirNotFound,

  /// Cache directory could not be created
  #[error("failed to create dictionary cache directory: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// Requested dictionary file does not exist
  #[error("dictionary not found: {0}")]
  DictionaryNotFound(String),

  /// vibrato-rkyv failed to load the dictionary
  #[error("vibrato-rkyv dictionary load error: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv failed to download the preset dictionary
  #[error("vibrato-rkyv preset dictionary download failed: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// Analyzer related errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// The word to analyze is empty
  #[error("word to analyze is empty")]
  EmptyInput,

  /// The analyzer produced no parse candidate for the word
  #[error("no parse candidate for word: {word}")]
  NoCandidates {
    /// The word that could not be analyzed
    word: String,
  },

  /// Unknown Snowball stemmer language
  #[error("unsupported stemmer language: {name}")]
  UnsupportedLanguage {
    /// The requested language name
    name: String,
  },
}

/// Aggregate error
///
/// Every public API of this crate returns this error
/// (`MorphoResult<T>` = `Result<T, MorphoError>`).
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum MorphoError {
  /// Dictionary related error
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// Analyzer related error
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),
}

/// Standard Result alias of the morpho crate
pub type MorphoResult<T> = Result<T, MorphoError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn analyzer_error_is_transparent() {
    let err: MorphoError = AnalyzerError::NoCandidates {
      word: "xyz".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "no parse candidate for word: xyz");
  }

  #[test]
  fn dictionary_error_keeps_source_message() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err: MorphoError = DictionaryError::CacheDirCreationFailed(Arc::new(io_err)).into();
    assert!(err.to_string().contains("denied"));
    assert!(matches!(err, MorphoError::Dictionary(_)));
  }
}
