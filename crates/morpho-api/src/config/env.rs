//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use morpho::StemmerLanguage;

use super::constants::{DEFAULT_BACKEND, DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT, DEFAULT_STEMMER_LANG};
use crate::errors::ApiError;

/// Analyzer backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
  /// Dictionary-based morphological analysis (vibrato-rkyv)
  Vibrato,
  /// Snowball stemming (rust-stemmers); yields stems, not dictionary forms
  Snowball,
}

impl FromStr for Backend {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "vibrato" => Ok(Self::Vibrato),
      "snowball" => Ok(Self::Snowball),
      _ => Err(format!("Unknown backend: {}. Valid values: vibrato, snowball", s)),
    }
  }
}

/// Dictionary Preset Type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  /// IPAdic dictionary
  Ipadic,
  /// UniDic (Corpus of Contemporary Written Japanese)
  UnidicCwj,
  /// UniDic (Corpus of Spontaneous Japanese)
  UnidicCsj,
}

impl FromStr for Preset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
        s
      )),
    }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:5000")
  pub bind_addr: String,
  /// Analyzer backend
  pub backend: Backend,
  /// Dictionary preset (vibrato backend); also selects the feature layout,
  /// including for a local `dict_path` dictionary
  pub preset: Preset,
  /// Local compiled dictionary, takes precedence over downloading `preset`
  pub dict_path: Option<PathBuf>,
  /// Stemmer language (snowball backend)
  pub stemmer_language: StemmerLanguage,
  /// Whether to run the startup self-test
  pub self_test: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      backend: Backend::Vibrato,
      preset: Preset::Ipadic,
      dict_path: None,
      stemmer_language: StemmerLanguage::Russian,
      self_test: true,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// | Variable              | Default        |
  /// |-----------------------|----------------|
  /// | `MORPHO_BIND_ADDR`    | `0.0.0.0:5000` |
  /// | `MORPHO_BACKEND`      | `vibrato`      |
  /// | `MORPHO_PRESET_DICT`  | `ipadic`       |
  /// | `MORPHO_DICT_PATH`    | unset          |
  /// | `MORPHO_STEMMER_LANG` | `russian`      |
  /// | `MORPHO_SELF_TEST`    | `true`         |
  ///
  /// `MORPHO_BACKEND=snowball` returns Snowball stems (`книги` → `книг`),
  /// which are stable per word family but not always dictionary words.
  ///
  /// `MORPHO_PRESET_DICT` also picks the feature layout when
  /// `MORPHO_DICT_PATH` is set: a local UniDic dictionary needs
  /// `unidic-cwj` or `unidic-csj`, otherwise lemmas are read from the IPADIC
  /// field position.
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` instead of the process environment
  ///
  /// # Errors
  /// Returns an error if a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup("MORPHO_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let backend = lookup("MORPHO_BACKEND").unwrap_or_else(|| DEFAULT_BACKEND.to_string());
    let backend = Backend::from_str(&backend).map_err(ApiError::config)?;

    let preset = lookup("MORPHO_PRESET_DICT").unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string());
    let preset = Preset::from_str(&preset).map_err(ApiError::config)?;

    let dict_path = lookup("MORPHO_DICT_PATH").filter(|p| !p.is_empty()).map(PathBuf::from);

    let language = lookup("MORPHO_STEMMER_LANG").unwrap_or_else(|| DEFAULT_STEMMER_LANG.to_string());
    let stemmer_language =
      StemmerLanguage::from_str(&language).map_err(|e| ApiError::config(e.to_string()))?;

    let self_test = match lookup("MORPHO_SELF_TEST") {
      Some(value) => parse_flag(&value)
        .ok_or_else(|| ApiError::config(format!("Invalid MORPHO_SELF_TEST: {}", value)))?,
      None => true,
    };

    Ok(Self {
      bind_addr,
      backend,
      preset,
      dict_path,
      stemmer_language,
      self_test,
    })
  }
}

fn parse_flag(value: &str) -> Option<bool> {
  match value.to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn from_pairs(pairs: &[(&str, &str)]) -> crate::errors::Result<Config> {
    let vars: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    Config::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn preset_from_str() {
    assert_eq!(Preset::from_str("ipadic").unwrap(), Preset::Ipadic);
    assert_eq!(Preset::from_str("UNIDIC-CWJ").unwrap(), Preset::UnidicCwj);
    assert_eq!(Preset::from_str("unidic-csj").unwrap(), Preset::UnidicCsj);
    assert!(Preset::from_str("invalid").is_err());
  }

  #[test]
  fn backend_from_str() {
    assert_eq!(Backend::from_str("Vibrato").unwrap(), Backend::Vibrato);
    assert_eq!(Backend::from_str("snowball").unwrap(), Backend::Snowball);
    assert!(Backend::from_str("pymorphy").is_err());
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let config = from_pairs(&[]).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:5000");
    assert_eq!(config.backend, Backend::Vibrato);
    assert_eq!(config.preset, Preset::Ipadic);
    assert_eq!(config.dict_path, None);
    assert_eq!(config.stemmer_language, StemmerLanguage::Russian);
    assert!(config.self_test);
  }

  #[test]
  fn values_are_read_from_lookup() {
    let config = from_pairs(&[
      ("MORPHO_BIND_ADDR", "127.0.0.1:8080"),
      ("MORPHO_BACKEND", "snowball"),
      ("MORPHO_STEMMER_LANG", "en"),
      ("MORPHO_DICT_PATH", "/opt/dict/system.dic"),
      ("MORPHO_SELF_TEST", "off"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr, "127.0.0.1:8080");
    assert_eq!(config.backend, Backend::Snowball);
    assert_eq!(config.stemmer_language, StemmerLanguage::English);
    assert_eq!(config.dict_path, Some(PathBuf::from("/opt/dict/system.dic")));
    assert!(!config.self_test);
  }

  #[test]
  fn invalid_values_are_config_errors() {
    for pairs in [
      [("MORPHO_BACKEND", "nope")],
      [("MORPHO_PRESET_DICT", "jumandic")],
      [("MORPHO_STEMMER_LANG", "latin")],
      [("MORPHO_SELF_TEST", "maybe")],
    ] {
      let err = from_pairs(&pairs).unwrap_err();
      assert_eq!(err.code(), "config_error", "{:?}", pairs);
    }
  }

  #[test]
  fn default_matches_empty_environment() {
    let default = Config::default();
    let loaded = from_pairs(&[]).unwrap();
    assert_eq!(default.bind_addr, loaded.bind_addr);
    assert_eq!(default.backend, loaded.backend);
    assert_eq!(default.preset, loaded.preset);
  }
}
