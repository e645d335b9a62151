//! Parse candidate

use serde::Serialize;

/// One morphological parse candidate of a word
///
/// Analyzers return candidates ordered by likelihood; the first one is the
/// best guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parse {
  /// The word as it was analyzed
  pub surface: String,
  /// Normal form (lemma) of the word
  pub normal_form: String,
  /// Part-of-speech tag of the head token, if the analyzer provides one
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tag: Option<String>,
}

impl Parse {
  /// Creates a candidate without a tag
  #[must_use]
  pub fn new(surface: impl Into<String>, normal_form: impl Into<String>) -> Self {
    Self {
      surface: surface.into(),
      normal_form: normal_form.into(),
      tag: None,
    }
  }

  /// Attaches a part-of-speech tag
  #[must_use]
  pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
    self.tag = Some(tag.into());
    self
  }
}
