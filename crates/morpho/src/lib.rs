//! morpho: word lemmatization library
//!
//! Derives the normal form (lemma) of a single word, either by morphological
//! analysis with vibrato-rkyv or by Snowball stemming with rust-stemmers.

/// Analyzer module - `Analyzer` trait and its vibrato / Snowball implementations
pub mod analyzer;

/// Dictionary module - loading and caching of vibrato-rkyv dictionaries
pub mod dictionary;

/// Error module - MorphoError, MorphoResult and the per-layer error types
pub mod errors;

/// Data model module - parse candidates
pub mod models;

/// Re-exports
pub use analyzer::{Analyzer, FeatureLayout, SnowballAnalyzer, StemmerLanguage, VibratoAnalyzer};
pub use errors::{MorphoError, MorphoResult};
pub use models::Parse;
