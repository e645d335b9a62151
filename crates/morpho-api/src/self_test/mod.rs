//! Startup self-test module

mod startup_check;

pub use startup_check::{SelfTest, SelfTestError, self_test_base_url};
