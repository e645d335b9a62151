//! morpho-api crate
//!
//! Web server returning the lemma (normal form) of a word.
//!
//! ## Endpoints
//! - `GET /lemma?word=...` - Lemma as plain text
//! - `GET /analyze?word=...` - All ranked parse candidates as JSON
//! - `GET /health` - Health Check
//!
//! On startup the binary requests its own `/lemma` endpoint once and exits
//! with status 1 if the answer is wrong (see [`self_test`]).
//!
//! ## Usage Example
//! ```bash
//! curl 'http://127.0.0.1:5000/lemma?word=%E8%B5%B0%E3%81%A3%E3%81%9F'
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod self_test;
pub mod service;

pub use api::AppState;
pub use client::{ClientError, LemmaClient};
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeResponse, LemmaQuery};
pub use self_test::{SelfTest, SelfTestError};
pub use service::{LemmaService, LemmaServiceFull};
