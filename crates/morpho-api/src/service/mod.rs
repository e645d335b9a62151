//! Service module

mod lemma_api_service;

pub use lemma_api_service::{LemmaService, LemmaServiceFull};
