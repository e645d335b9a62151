//! Startup self-test
//!
//! The process starts the server on a background task, then requests its own
//! `/lemma` endpoint exactly once:
//!
//! ```text
//! STARTING --check ok--> SERVING   (main task awaits the server forever)
//! STARTING --failure---> FAILED    (exit status 1)
//! ```
//!
//! There is no retry.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::client::{ClientError, LemmaClient};
use crate::config::{SELF_TEST_DELAY, SELF_TEST_EXPECTED, SELF_TEST_TIMEOUT, SELF_TEST_WORD};

/// Self-test failure
#[derive(Debug, Error)]
pub enum SelfTestError {
  /// Connection refused, timeout or non-200 status
  #[error("lemma service startup test failed: {0}")]
  Transport(#[from] ClientError),

  /// The endpoint answered with an unexpected lemma
  #[error("lemma service test failed: expected '{expected}', got '{actual}'")]
  Mismatch {
    /// Expected body
    expected: String,
    /// Received body
    actual: String,
  },
}

/// Base URL the local service is reachable at from this process
///
/// An unspecified host (`0.0.0.0`, `::`) is replaced by the loopback address
/// of the same family. Addresses that are not `ip:port` are used as given.
#[must_use]
pub fn self_test_base_url(bind_addr: &str) -> String {
  match bind_addr.parse::<SocketAddr>() {
    Ok(mut addr) => {
      if addr.ip().is_unspecified() {
        let loopback = match addr.ip() {
          IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
          IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
        };
        addr.set_ip(loopback);
      }
      format!("http://{addr}")
    }
    Err(_) => format!("http://{bind_addr}"),
  }
}

/// One-shot startup check
#[derive(Debug, Clone)]
pub struct SelfTest {
  client: LemmaClient,
  delay: Duration,
  word: String,
  expected: String,
}

impl SelfTest {
  /// Check against `base_url` with the default delay, timeout and word
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built
  pub fn new(base_url: impl Into<String>) -> Result<Self, SelfTestError> {
    Ok(Self {
      client: LemmaClient::with_timeout(base_url, SELF_TEST_TIMEOUT)?,
      delay: SELF_TEST_DELAY,
      word: SELF_TEST_WORD.to_string(),
      expected: SELF_TEST_EXPECTED.to_string(),
    })
  }

  /// Check against the server bound at `bind_addr`
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built
  pub fn for_bind_addr(bind_addr: &str) -> Result<Self, SelfTestError> {
    Self::new(self_test_base_url(bind_addr))
  }

  /// Replaces the wait before the request
  #[must_use]
  pub fn with_delay(mut self, delay: Duration) -> Self {
    self.delay = delay;
    self
  }

  /// Replaces the HTTP timeout
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built
  pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, SelfTestError> {
    self.client = LemmaClient::with_timeout(self.client.base_url().to_string(), timeout)?;
    Ok(self)
  }

  /// Replaces the test word and its expected lemma
  #[must_use]
  pub fn with_word(mut self, word: impl Into<String>, expected: impl Into<String>) -> Self {
    self.word = word.into();
    self.expected = expected.into();
    self
  }

  /// Waits, requests once and returns the received lemma
  ///
  /// # Errors
  /// - `SelfTestError::Transport` on connection failure, timeout or non-200 status
  /// - `SelfTestError::Mismatch` if the body differs from the expected lemma
  ///   ignoring case
  pub async fn run(&self) -> Result<String, SelfTestError> {
    debug!(delay = ?self.delay, url = %self.client.base_url(), "Waiting before self-test");
    tokio::time::sleep(self.delay).await;

    let actual = self.client.lemmatize(&self.word).await?;
    if actual.to_lowercase() != self.expected.to_lowercase() {
      return Err(SelfTestError::Mismatch {
        expected: self.expected.clone(),
        actual,
      });
    }

    info!(word = %self.word, lemma = %actual, "Self-test passed");
    Ok(actual)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unspecified_v4_becomes_loopback() {
    assert_eq!(self_test_base_url("0.0.0.0:5000"), "http://127.0.0.1:5000");
  }

  #[test]
  fn unspecified_v6_becomes_loopback() {
    assert_eq!(self_test_base_url("[::]:5000"), "http://[::1]:5000");
  }

  #[test]
  fn concrete_address_is_kept() {
    assert_eq!(self_test_base_url("192.168.1.10:8080"), "http://192.168.1.10:8080");
  }

  #[test]
  fn host_name_is_used_as_given() {
    assert_eq!(self_test_base_url("localhost:5000"), "http://localhost:5000");
  }

  #[test]
  fn mismatch_message_names_both_values() {
    let err = SelfTestError::Mismatch {
      expected: "Hi".to_string(),
      actual: "bye".to_string(),
    };
    assert_eq!(err.to_string(), "lemma service test failed: expected 'Hi', got 'bye'");
  }
}
