//! HTTP client module

mod lemma_client;

pub use lemma_client::{ClientError, LemmaClient};
