//! Snowball stemming analyzer using rust-stemmers

use std::fmt;
use std::str::FromStr;

use rust_stemmers::{Algorithm, Stemmer};
use super::Analyzer;
use crate::errors::{AnalyzerError, MorphoError, MorphoResult};
use crate::models::Parse;

/// Languages with a Snowball stemmer
///
/// `rust_stemmers::Algorithm` is a foreign type, so this enum carries the
/// parsing (`FromStr`) and converts with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemmerLanguage {
  /// Arabic
  Arabic,
  /// Danish
  Danish,
  /// Dutch
  Dutch,
  /// English
  English,
  /// Finnish
  Finnish,
  /// French
  French,
  /// German
  German,
  /// Greek
  Greek,
  /// Hungarian
  Hungarian,
  /// Italian
  Italian,
  /// Norwegian
  Norwegian,
  /// Portuguese
  Portuguese,
  /// Romanian
  Romanian,
  /// Russian
  Russian,
  /// Spanish
  Spanish,
  /// Swedish
  Swedish,
  /// Tamil
  Tamil,
  /// Turkish
  Turkish,
}

impl StemmerLanguage {
  /// Lowercase language name
  #[must_use]
  pub fn name(&self) -> &'static str {
    match self {
      Self::Arabic => "arabic",
      Self::Danish => "danish",
      Self::Dutch => "dutch",
      Self::English => "english",
      Self::Finnish => "finnish",
      Self::French => "french",
      Self::German => "german",
      Self::Greek => "greek",
      Self::Hungarian => "hungarian",
      Self::Italian => "italian",
      Self::Norwegian => "norwegian",
      Self::Portuguese => "portuguese",
      Self::Romanian => "romanian",
      Self::Russian => "russian",
      Self::Spanish => "spanish",
      Self::Swedish => "swedish",
      Self::Tamil => "tamil",
      Self::Turkish => "turkish",
    }
  }
}

impl From<StemmerLanguage> for Algorithm {
  fn from(language: StemmerLanguage) -> Self {
    match language {
      StemmerLanguage::Arabic => Algorithm::Arabic,
      StemmerLanguage::Danish => Algorithm::Danish,
      StemmerLanguage::Dutch => Algorithm::Dutch,
      StemmerLanguage::English => Algorithm::English,
      StemmerLanguage::Finnish => Algorithm::Finnish,
      StemmerLanguage::French => Algorithm::French,
      StemmerLanguage::German => Algorithm::German,
      StemmerLanguage::Greek => Algorithm::Greek,
      StemmerLanguage::Hungarian => Algorithm::Hungarian,
      StemmerLanguage::Italian => Algorithm::Italian,
      StemmerLanguage::Norwegian => Algorithm::Norwegian,
      StemmerLanguage::Portuguese => Algorithm::Portuguese,
      StemmerLanguage::Romanian => Algorithm::Romanian,
      StemmerLanguage::Russian => Algorithm::Russian,
      StemmerLanguage::Spanish => Algorithm::Spanish,
      StemmerLanguage::Swedish => Algorithm::Swedish,
      StemmerLanguage::Tamil => Algorithm::Tamil,
      StemmerLanguage::Turkish => Algorithm::Turkish,
    }
  }
}

impl FromStr for StemmerLanguage {
  type Err = MorphoError;

  /// Accepts the language name or its ISO 639-1 code (`ru`, `ru-RU`, `Russian`)
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let lower = s.to_lowercase();
    let code = lower.split(['-', '_']).next().unwrap_or_default();
    let language = match code {
      "arabic" | "ar" => Self::Arabic,
      "danish" | "da" => Self::Danish,
      "dutch" | "nl" => Self::Dutch,
      "english" | "en" => Self::English,
      "finnish" | "fi" => Self::Finnish,
      "french" | "fr" => Self::French,
      "german" | "de" => Self::German,
      "greek" | "el" => Self::Greek,
      "hungarian" | "hu" => Self::Hungarian,
      "italian" | "it" => Self::Italian,
      "norwegian" | "no" | "nb" => Self::Norwegian,
      "portuguese" | "pt" => Self::Portuguese,
      "romanian" | "ro" => Self::Romanian,
      "russian" | "ru" => Self::Russian,
      "spanish" | "es" => Self::Spanish,
      "swedish" | "sv" => Self::Swedish,
      "tamil" | "ta" => Self::Tamil,
      "turkish" | "tr" => Self::Turkish,
      _ => {
        return Err(AnalyzerError::UnsupportedLanguage { name: s.to_string() }.into());
      }
    };
    Ok(language)
  }
}

impl fmt::Display for StemmerLanguage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Analyzer returning the Snowball stem of the lowercased word
///
/// Produces exactly one candidate. The stem is not always a dictionary
/// word (`"книги"` → `"книг"`), but it is stable for every inflected form.
pub struct SnowballAnalyzer {
  stemmer: Stemmer,
  language: StemmerLanguage,
}

impl SnowballAnalyzer {
  /// Creates an analyzer for `language`
  #[must_use]
  pub fn new(language: StemmerLanguage) -> Self {
    Self {
      stemmer: Stemmer::create(language.into()),
      language,
    }
  }

  /// Stemmer language
  #[must_use]
  pub fn language(&self) -> StemmerLanguage {
    self.language
  }
}

impl fmt::Debug for SnowballAnalyzer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SnowballAnalyzer").field("language", &self.language).finish()
  }
}

impl Analyzer for SnowballAnalyzer {
  fn analyze(&self, word: &str) -> MorphoResult<Vec<Parse>> {
    if word.is_empty() {
      return Err(AnalyzerError::EmptyInput.into());
    }

    let stem = self.stemmer.stem(&word.to_lowercase()).into_owned();
    if stem.is_empty() {
      return Ok(Vec::new());
    }

    Ok(vec![Parse::new(word, stem)])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn language_from_name_and_code() {
    assert_eq!("russian".parse::<StemmerLanguage>().unwrap(), StemmerLanguage::Russian);
    assert_eq!("RU".parse::<StemmerLanguage>().unwrap(), StemmerLanguage::Russian);
    assert_eq!("ru-RU".parse::<StemmerLanguage>().unwrap(), StemmerLanguage::Russian);
    assert_eq!("en_US".parse::<StemmerLanguage>().unwrap(), StemmerLanguage::English);
  }

  #[test]
  fn unknown_language_is_rejected() {
    let err = "klingon".parse::<StemmerLanguage>().unwrap_err();
    assert!(err.to_string().contains("klingon"));
  }

  #[test]
  fn language_round_trips_through_display() {
    let language = StemmerLanguage::Portuguese;
    assert_eq!(language.to_string().parse::<StemmerLanguage>().unwrap(), language);
  }

  #[test]
  fn english_inflections_share_a_stem() {
    let analyzer = SnowballAnalyzer::new(StemmerLanguage::English);
    assert_eq!(analyzer.normal_form("running").unwrap(), "run");
    assert_eq!(analyzer.normal_form("Cats").unwrap(), "cat");
  }

  #[test]
  fn russian_noun_is_stemmed() {
    let analyzer = SnowballAnalyzer::new(StemmerLanguage::Russian);
    assert_eq!(analyzer.normal_form("книги").unwrap(), "книг");
  }

  #[test]
  fn latin_word_passes_russian_stemmer_lowercased() {
    let analyzer = SnowballAnalyzer::new(StemmerLanguage::Russian);
    let candidates = analyzer.analyze("Hi").unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].surface, "Hi");
    assert_eq!(candidates[0].normal_form, "hi");
  }

  #[test]
  fn empty_word_is_rejected() {
    let analyzer = SnowballAnalyzer::new(StemmerLanguage::English);
    assert!(matches!(
      analyzer.analyze(""),
      Err(MorphoError::Analyzer(AnalyzerError::EmptyInput))
    ));
  }
}
