//! Dictionary Management Module
//!
//! Loads vibrato-rkyv dictionaries for the morphological analyzer.
//! Preset dictionaries (IPADIC, UniDic) are downloaded on the first run and
//! loaded from the cache directory afterwards. A locally compiled dictionary
//! file can be loaded directly instead.

use crate::errors::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::{LoadMode, PresetDictionaryKind};

/// Where the dictionary comes from
#[derive(Debug, Clone)]
enum DictionarySource {
  /// Preset dictionary, downloaded into the cache directory on demand
  Preset(PresetDictionaryKind),
  /// Compiled dictionary file on disk
  Local(PathBuf),
}

/// Dictionary manager for vibrato-rkyv
///
/// The dictionary is loaded at most once; both the dictionary and a load
/// failure are cached and handed out on every later `load()` call.
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Preset kind or local dictionary path
  source: DictionarySource,

  /// Loaded dictionary (initialized only once)
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Returns the preset kind, `None` for a local dictionary
  pub fn preset_kind(&self) -> Option<PresetDictionaryKind> {
    match self.source {
      DictionarySource::Preset(kind) => Some(kind),
      DictionarySource::Local(_) => None,
    }
  }

  /// Manager for a preset dictionary cached in the OS default cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self::with_preset_in(preset_kind, default_cache_dir()?))
  }

  /// Manager for a preset dictionary cached under `cache_dir`
  pub fn with_preset_in<P: Into<PathBuf>>(preset_kind: PresetDictionaryKind, cache_dir: P) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      source: DictionarySource::Preset(preset_kind),
      dictionary: OnceLock::new(),
    }
  }

  /// Manager for a local compiled dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(path.display().to_string()));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      source: DictionarySource::Local(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Loads the dictionary
  ///
  /// - First call: loads (and for presets, possibly downloads) the dictionary
  /// - Later calls: return a clone of the cached `Arc<Dictionary>` or the cached error
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match &self.source {
      DictionarySource::Local(path) => {
        info!(path = %path.display(), "Loading local dictionary");
        Dictionary::from_path(path, LoadMode::TrustCache)
          .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
      }
      DictionarySource::Preset(kind) => self.load_from_preset(*kind),
    }
  }

  /// Downloads the preset on the first run, loads it from the cache afterwards
  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    let dict_dir = self.cache_dir.join(preset_kind.name());
    info!(preset = preset_kind.name(), dir = %dict_dir.display(), "Loading preset dictionary");

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                 |
/// |---------|----------------------------------------------|
/// | Linux   | `~/.cache/morpho/dict`                       |
/// | macOS   | `~/Library/Caches/morpho/dict`               |
/// | Windows | `C:\Users\{user}\AppData\Local\morpho\dict`  |
pub fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("morpho").join("dict"))
}

/// `vibrato_rkyv::Dictionary` has no `Debug`, so only meta information is shown
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("source", &self.source)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}
