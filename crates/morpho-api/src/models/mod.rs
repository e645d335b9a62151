//! Model module

mod request;
mod response;

pub use request::LemmaQuery;
pub use response::AnalyzeResponse;
