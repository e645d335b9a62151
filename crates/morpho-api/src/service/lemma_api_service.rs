//! Lemmatization Service

use std::sync::Arc;
use std::time::Instant;

use morpho::dictionary::DictionaryManager;
use morpho::{Analyzer, FeatureLayout, SnowballAnalyzer, VibratoAnalyzer};
use tracing::info;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::config::{Backend, Config, Preset};
use crate::errors::{ApiError, Result};
use crate::models::AnalyzeResponse;

/// Common interface for the lemmatization service
///
/// Allows swapping the production implementation (`LemmaServiceFull`) with
/// test stubs.
pub trait LemmaService: Send + Sync {
  /// Returns the normal form of the best candidate
  ///
  /// # Errors
  /// - Input error (empty word)
  /// - No candidate for the word
  fn lemmatize(&self, word: &str) -> Result<String>;

  /// Returns every ranked candidate
  ///
  /// # Errors
  /// - Input error (empty word)
  fn analyze(&self, word: &str) -> Result<AnalyzeResponse>;
}

/// Converts Preset to PresetDictionaryKind of vibrato-rkyv
///
/// Done in the service layer so that the config layer does not depend on vibrato
#[must_use]
fn preset_to_vibrato_kind(preset: &Preset) -> PresetDictionaryKind {
  match preset {
    Preset::Ipadic => PresetDictionaryKind::Ipadic,
    Preset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
    Preset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
  }
}

/// Feature string layout of the preset's dictionary family
///
/// Also applies to a local dictionary, whose format cannot be detected.
#[must_use]
fn preset_to_layout(preset: &Preset) -> FeatureLayout {
  match preset {
    Preset::Ipadic => FeatureLayout::Ipadic,
    Preset::UnidicCwj | Preset::UnidicCsj => FeatureLayout::Unidic,
  }
}

/// Builds the process-wide analyzer selected by `config`
fn build_analyzer(config: &Config) -> Result<Arc<dyn Analyzer>> {
  match config.backend {
    Backend::Vibrato => {
      let manager = match &config.dict_path {
        Some(path) => DictionaryManager::from_local_path(path),
        None => DictionaryManager::with_preset(preset_to_vibrato_kind(&config.preset)),
      }
      .map_err(|e| ApiError::config(format!("Failed to create dictionary manager: {}", e)))?;

      let layout = preset_to_layout(&config.preset);
      if config.dict_path.is_some() {
        info!(?layout, "Local dictionary read with the preset's feature layout");
      }

      let analyzer = VibratoAnalyzer::from_manager(&manager, layout)
        .map_err(|e| ApiError::config(format!("Failed to load dictionary: {}", e)))?;

      info!(?manager, "vibrato analyzer ready");
      Ok(Arc::new(analyzer))
    }
    Backend::Snowball => {
      info!(language = %config.stemmer_language, "Snowball analyzer ready");
      Ok(Arc::new(SnowballAnalyzer::new(config.stemmer_language)))
    }
  }
}

/// Lemmatization service over a shared analyzer
#[derive(Clone)]
pub struct LemmaServiceFull {
  analyzer: Arc<dyn Analyzer>,
}

impl LemmaServiceFull {
  /// Initializes the service with the analyzer selected by `config`
  ///
  /// # Errors
  /// Returns an error if the dictionary cannot be loaded
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self::with_analyzer(build_analyzer(config)?))
  }

  /// Wraps an already constructed analyzer
  #[must_use]
  pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
    Self { analyzer }
  }
}

impl LemmaService for LemmaServiceFull {
  fn lemmatize(&self, word: &str) -> Result<String> {
    Ok(self.analyzer.normal_form(word)?)
  }

  fn analyze(&self, word: &str) -> Result<AnalyzeResponse> {
    let start = Instant::now();
    let candidates = self.analyzer.analyze(word)?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(AnalyzeResponse {
      word: word.to_string(),
      candidates,
      elapsed_ms,
    })
  }
}
