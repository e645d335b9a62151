//! Morphological analyzer using vibrato-rkyv

use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::Analyzer;
use super::head::head_index;
use crate::dictionary::DictionaryManager;
use crate::errors::{AnalyzerError, MorphoResult};
use crate::models::Parse;

/// Field layout of the dictionary's feature string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLayout {
  /// MeCab / IPADIC: `pos,pos1,pos2,pos3,cType,cForm,lemma,reading,pronunciation`
  Ipadic,
  /// UniDic: `pos1,pos2,pos3,pos4,cType,cForm,lForm,lemma,orth,...`
  Unidic,
}

impl FeatureLayout {
  /// Position of the dictionary form in the feature string
  #[must_use]
  pub fn lemma_index(&self) -> usize {
    match self {
      Self::Ipadic => 6,
      Self::Unidic => 7,
    }
  }

  /// Extracts the dictionary form from a feature string
  ///
  /// Returns `None` when the field is missing, empty or `*` (unknown words).
  /// UniDic glosses loanwords as `ヒット-hit`; the gloss is dropped.
  #[must_use]
  pub fn lemma<'a>(&self, feature: &'a str) -> Option<&'a str> {
    let field = feature.split(',').nth(self.lemma_index())?;
    if field.is_empty() || field == "*" {
      return None;
    }

    if *self == Self::Unidic
      && let Some((base, gloss)) = field.split_once('-')
      && !base.is_empty()
      && !gloss.is_empty()
      && gloss.chars().all(|c| c.is_ascii_alphabetic() || c == '-' || c == ' ')
    {
      return Some(base);
    }

    Some(field)
  }
}

/// First two fields of a feature string (`動詞,自立`)
fn pos_tag(feature: &str) -> String {
  feature.splitn(3, ',').take(2).collect::<Vec<_>>().join(",")
}

/// Builds ranked candidates from a tokenized word
///
/// `tokens` are `(surface, feature)` pairs on the best path.
/// 1. surfaces before the head token + dictionary form of the head
/// 2. the word as written, when it differs from 1
pub fn candidates_from_tokens(
  word: &str,
  tokens: &[(String, String)],
  layout: FeatureLayout,
) -> Vec<Parse> {
  let features: Vec<&str> = tokens.iter().map(|(_, feature)| feature.as_str()).collect();
  let Some(head) = head_index(&features) else {
    return Vec::new();
  };

  let (head_surface, head_feature) = &tokens[head];
  let mut normal_form: String = tokens[..head].iter().map(|(surface, _)| surface.as_str()).collect();
  normal_form.push_str(layout.lemma(head_feature).unwrap_or(head_surface));

  let mut candidates = vec![Parse::new(word, normal_form).with_tag(pos_tag(head_feature))];
  if candidates[0].normal_form != word {
    candidates.push(Parse::new(word, word));
  }
  candidates
}

/// Analyzer backed by a vibrato-rkyv tokenizer
///
/// - Holds only the shared dictionary; a worker is created per call
/// - `Clone + Send + Sync`
#[derive(Clone)]
pub struct VibratoAnalyzer {
  inner: VibratoImpl,
  layout: FeatureLayout,
}

impl VibratoAnalyzer {
  /// Constructs an analyzer from a shared dictionary
  pub fn from_shared_dictionary(dict: Arc<Dictionary>, layout: FeatureLayout) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
      layout,
    }
  }

  /// Loads the dictionary through `manager` and constructs an analyzer
  ///
  /// # Errors
  /// Returns an error if the dictionary cannot be loaded or downloaded
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use morpho::analyzer::{Analyzer, FeatureLayout, VibratoAnalyzer};
  /// # use morpho::dictionary::DictionaryManager;
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let analyzer = VibratoAnalyzer::from_manager(&manager, FeatureLayout::Ipadic).unwrap();
  /// assert_eq!(analyzer.normal_form("走った").unwrap(), "走る");
  /// ```
  pub fn from_manager(manager: &DictionaryManager, layout: FeatureLayout) -> MorphoResult<Self> {
    let dict = manager.load()?;
    Ok(Self::from_shared_dictionary(dict, layout))
  }

  /// Feature layout this analyzer reads lemmas with
  #[must_use]
  pub fn layout(&self) -> FeatureLayout {
    self.layout
  }
}

impl Analyzer for VibratoAnalyzer {
  fn analyze(&self, word: &str) -> MorphoResult<Vec<Parse>> {
    if word.is_empty() {
      return Err(AnalyzerError::EmptyInput.into());
    }

    let mut worker = self.inner.new_worker();
    worker.reset_sentence(word);
    worker.tokenize();

    let tokens: Vec<(String, String)> = worker
      .token_iter()
      .map(|token| (token.surface().to_string(), token.feature().to_string()))
      .collect();

    debug!(word = %word, num_tokens = tokens.len(), "Tokenized word");

    Ok(candidates_from_tokens(word, &tokens, self.layout))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tokens(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(s, f)| ((*s).to_string(), (*f).to_string())).collect()
  }

  #[test]
  fn ipadic_lemma_field() {
    let feature = "動詞,自立,*,*,五段・ラ行,連用タ接続,走る,ハシッ,ハシッ";
    assert_eq!(FeatureLayout::Ipadic.lemma(feature), Some("走る"));
  }

  #[test]
  fn unknown_word_has_no_lemma() {
    assert_eq!(FeatureLayout::Ipadic.lemma("名詞,固有名詞,組織,*,*,*,*"), None);
    assert_eq!(FeatureLayout::Ipadic.lemma("名詞,一般"), None);
  }

  #[test]
  fn unidic_lemma_drops_loanword_gloss() {
    let feature = "名詞,普通名詞,サ変可能,*,*,*,ヒット,ヒット-hit,ヒット,ヒット";
    assert_eq!(FeatureLayout::Unidic.lemma(feature), Some("ヒット"));

    let feature = "動詞,一般,*,*,五段-ラ行,連用形-促音便,ハシル,走る,走っ,ハシッ";
    assert_eq!(FeatureLayout::Unidic.lemma(feature), Some("走る"));
  }

  #[test]
  fn inflected_verb_becomes_dictionary_form() {
    let toks = tokens(&[
      ("走っ", "動詞,自立,*,*,五段・ラ行,連用タ接続,走る,ハシッ,ハシッ"),
      ("た", "助動詞,*,*,*,特殊・タ,基本形,た,タ,タ"),
    ]);
    let candidates = candidates_from_tokens("走った", &toks, FeatureLayout::Ipadic);

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].normal_form, "走る");
    assert_eq!(candidates[0].tag.as_deref(), Some("動詞,自立"));
    assert_eq!(candidates[1].normal_form, "走った");
  }

  #[test]
  fn compound_noun_keeps_leading_surfaces() {
    let toks = tokens(&[
      ("東京", "名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー"),
      ("タワー", "名詞,一般,*,*,*,*,タワー,タワー,タワー"),
    ]);
    let candidates = candidates_from_tokens("東京タワー", &toks, FeatureLayout::Ipadic);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].normal_form, "東京タワー");
  }

  #[test]
  fn unknown_latin_word_echoes_surface() {
    let toks = tokens(&[("Hi", "名詞,固有名詞,組織,*,*,*,*")]);
    let candidates = candidates_from_tokens("Hi", &toks, FeatureLayout::Ipadic);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].normal_form, "Hi");
    assert_eq!(candidates[0].surface, "Hi");
  }

  #[test]
  fn no_tokens_no_candidates() {
    assert!(candidates_from_tokens("x", &[], FeatureLayout::Ipadic).is_empty());
  }
}
