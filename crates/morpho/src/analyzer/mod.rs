//! analyzer module
//!
//! An [`Analyzer`] turns a surface word form into parse candidates ranked by
//! likelihood. Implementations are constructed once and shared read-only.

pub mod head;
pub mod snowball_analyzer;
pub mod vibrato_analyzer;

pub use head::is_function_word;
pub use snowball_analyzer::{SnowballAnalyzer, StemmerLanguage};
pub use vibrato_analyzer::{FeatureLayout, VibratoAnalyzer};

use crate::errors::{AnalyzerError, MorphoResult};
use crate::models::Parse;

/// Morphological analyzer
///
/// `Send + Sync` so a single instance can serve concurrent requests behind an `Arc`.
pub trait Analyzer: Send + Sync {
  /// Returns parse candidates for `word`, best candidate first
  ///
  /// An empty vector means the analyzer found nothing to parse.
  ///
  /// # Errors
  /// - `AnalyzerError::EmptyInput` if `word` is empty
  fn analyze(&self, word: &str) -> MorphoResult<Vec<Parse>>;

  /// Returns the normal form of the best candidate
  ///
  /// # Errors
  /// - `AnalyzerError::EmptyInput` if `word` is empty
  /// - `AnalyzerError::NoCandidates` if the analyzer produced no candidate
  fn normal_form(&self, word: &str) -> MorphoResult<String> {
    self.analyze(word)?.into_iter().next().map(|parse| parse.normal_form).ok_or_else(|| {
      AnalyzerError::NoCandidates {
        word: word.to_string(),
      }
      .into()
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::MorphoError;

  struct Fixed(Vec<Parse>);

  impl Analyzer for Fixed {
    fn analyze(&self, _word: &str) -> MorphoResult<Vec<Parse>> {
      Ok(self.0.clone())
    }
  }

  #[test]
  fn normal_form_takes_first_candidate() {
    let analyzer = Fixed(vec![Parse::new("стали", "стать"), Parse::new("стали", "сталь")]);
    assert_eq!(analyzer.normal_form("стали").unwrap(), "стать");
  }

  #[test]
  fn normal_form_without_candidates_is_an_error() {
    let err = Fixed(Vec::new()).normal_form("???").unwrap_err();
    assert!(matches!(
      err,
      MorphoError::Analyzer(AnalyzerError::NoCandidates { ref word }) if word == "???"
    ));
  }
}
