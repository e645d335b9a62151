//! Request model definition

/// Query string of `GET /lemma` and `GET /analyze`
///
/// Built from the raw key/value pairs so a repeated `word` key is not a
/// deserialization error; the first occurrence wins.
#[derive(Debug, Default)]
pub struct LemmaQuery {
  /// Word to lemmatize
  pub word: Option<String>,
}

impl From<Vec<(String, String)>> for LemmaQuery {
  fn from(pairs: Vec<(String, String)>) -> Self {
    let word = pairs.into_iter().find(|(key, _)| key == "word").map(|(_, value)| value);
    Self { word }
  }
}

impl LemmaQuery {
  /// The word, `None` if missing or empty
  #[must_use]
  pub fn into_word(self) -> Option<String> {
    self.word.filter(|word| !word.is_empty())
  }
}
