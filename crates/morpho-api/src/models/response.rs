//! Response model definition

use morpho::Parse;
use serde::Serialize;

/// Body of `GET /analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  /// The analyzed word
  pub word: String,
  /// Parse candidates, best first
  pub candidates: Vec<Parse>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn analyze_response_serialization() {
    let response = AnalyzeResponse {
      word: "走った".to_string(),
      candidates: vec![
        Parse::new("走った", "走る").with_tag("動詞,自立"),
        Parse::new("走った", "走った"),
      ],
      elapsed_ms: 3,
    };

    let json: serde_json::Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["word"], "走った");
    assert_eq!(json["candidates"][0]["normal_form"], "走る");
    assert_eq!(json["candidates"][0]["tag"], "動詞,自立");
    assert!(json["candidates"][1].get("tag").is_none());
    assert_eq!(json["elapsed_ms"], 3);
  }
}
