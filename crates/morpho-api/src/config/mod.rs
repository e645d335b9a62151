//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BACKEND, DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT, DEFAULT_STEMMER_LANG, NO_WORD_PROVIDED,
  SELF_TEST_DELAY, SELF_TEST_EXPECTED, SELF_TEST_TIMEOUT, SELF_TEST_WORD,
};
pub use env::{Backend, Config, Preset};
