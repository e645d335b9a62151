//! Data model module

mod parse;

pub use parse::Parse;
