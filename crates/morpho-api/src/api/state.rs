//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::LemmaService;

/// Application State
///
/// Cloned into every handler. The service (and the analyzer inside it) is
/// built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Lemmatization Service
  ///
  /// - Production: `Arc::new(LemmaServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubLemmaService)`
  pub service: Arc<dyn LemmaService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn LemmaService>) -> Self {
    Self { config, service }
  }
}
