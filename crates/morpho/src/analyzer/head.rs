//! Head token selection for multi-token words
//!
//! A word such as 「走った」 is split into 「走っ」「た」. Its normal form is the
//! dictionary form of the last content-bearing token (the head) preceded by
//! the surfaces before it, so trailing particles and auxiliaries drop out.

/// Feature prefixes of function / inflectional elements
///
/// Covers both IPADIC and UniDic part-of-speech names.
const FUNCTION_PREFIXES: &[&str] = &[
  // Particle, Auxiliary verb
  "助詞",
  "助動詞",
  // Symbol (IPADIC), Supplementary symbol (UniDic)
  "記号",
  "補助記号",
  // UniDic verbal / adjectival suffixes (れる, しい, ...)
  "接尾辞,動詞的",
  "接尾辞,形容詞的",
  // Non-independent verbs and adjectives (いる, しまう, ない, ...)
  // also matches UniDic 非自立可能
  "動詞,非自立",
  "形容詞,非自立",
];

/// Whether a token with this feature string is a function element that
/// cannot head a word
pub fn is_function_word(feature: &str) -> bool {
  FUNCTION_PREFIXES.iter().any(|prefix| feature.starts_with(prefix))
}

/// Index of the head token among `features`
///
/// The last non-function token; the last token when every token is a
/// function element. `None` for an empty slice.
pub fn head_index<S: AsRef<str>>(features: &[S]) -> Option<usize> {
  if features.is_empty() {
    return None;
  }

  features
    .iter()
    .rposition(|feature| !is_function_word(feature.as_ref()))
    .or(Some(features.len() - 1))
}
