//! Analyzer integration tests
//!
//! Snowball tests always run. vibrato tests need the IPADIC preset and are
//! opt-in with the `with_dict_tests` feature.

use std::sync::Arc;

use vibrato_rkyv::dictionary::PresetDictionaryKind;

use morpho::dictionary::DictionaryManager;
use morpho::{Analyzer, FeatureLayout, MorphoError, SnowballAnalyzer, StemmerLanguage, VibratoAnalyzer};

fn ipadic_analyzer() -> VibratoAnalyzer {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  VibratoAnalyzer::from_manager(&manager, FeatureLayout::Ipadic)
    .expect("Failed to load dictionary: check test environment")
}

#[test]
fn analyzers_are_usable_as_trait_objects() {
  let analyzer: Arc<dyn Analyzer> = Arc::new(SnowballAnalyzer::new(StemmerLanguage::English));
  let handles: Vec<_> = (0..4)
    .map(|_| {
      let analyzer = Arc::clone(&analyzer);
      std::thread::spawn(move || analyzer.normal_form("jumping").unwrap())
    })
    .collect();

  for handle in handles {
    assert_eq!(handle.join().unwrap(), "jump");
  }
}

#[test]
fn snowball_is_deterministic() {
  let analyzer = SnowballAnalyzer::new(StemmerLanguage::Russian);
  let first = analyzer.analyze("столами").unwrap();
  let second = analyzer.analyze("столами").unwrap();
  assert_eq!(first, second);
  assert_eq!(first[0].normal_form, "стол");
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn vibrato_lemmatizes_inflected_verb() {
  let analyzer = ipadic_analyzer();
  assert_eq!(analyzer.normal_form("走った").unwrap(), "走る");
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn vibrato_echoes_unknown_latin_word() {
  let analyzer = ipadic_analyzer();
  assert!(analyzer.normal_form("Hi").unwrap().eq_ignore_ascii_case("hi"));
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn vibrato_rejects_empty_word() {
  let analyzer = ipadic_analyzer();
  assert!(matches!(analyzer.analyze(""), Err(MorphoError::Analyzer(_))));
}
