//! dictionary module
pub mod dictionary_manager;

pub use dictionary_manager::{DictionaryManager, default_cache_dir};
