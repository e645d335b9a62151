//! API configuration constants

use std::time::Duration;

/// Default bind address
///
/// All interfaces, port 5000.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Default analyzer backend
pub const DEFAULT_BACKEND: &str = "vibrato";

/// Default dictionary preset name
///
/// IPADIC is the smallest preset and downloads fastest.
pub const DEFAULT_PRESET_DICT: &str = "ipadic";

/// Default Snowball stemmer language
pub const DEFAULT_STEMMER_LANG: &str = "russian";

/// Body of the 400 response when `word` is missing or empty
pub const NO_WORD_PROVIDED: &str = "No word provided";

/// Wait before the self-test request, lets the server bind its port
pub const SELF_TEST_DELAY: Duration = Duration::from_secs(2);

/// Upper bound for the self-test HTTP call
pub const SELF_TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Word sent by the self-test
pub const SELF_TEST_WORD: &str = "Hi";

/// Expected lemma of [`SELF_TEST_WORD`] (compared case-insensitively)
pub const SELF_TEST_EXPECTED: &str = "Hi";
