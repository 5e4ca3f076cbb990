//! Compiled regular expressions with flattened match results and
//! `$N`-style template substitution.
//!
//! Matching is delegated to the [`regex`] crate. This crate adds the
//! [`Pattern`] handle, the [`MatchResult`] snapshot and the [`StrExt`]
//! helpers `grep` and `replace_regex`.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod ext;
pub mod pattern;
pub mod result;
pub mod template;

pub use self::{
    ext::{StrExt, grep, replace_regex, try_grep, try_replace_regex},
    pattern::Pattern,
    result::{Match, MatchResult, Span},
    template::{Template, substitute},
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The pattern text was rejected by the regex engine.
    #[error("invalid regex {pattern:?}: {message}")]
    Compile { pattern: String, message: String },

    /// A match or capture index was past the end of a [`MatchResult`].
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
