//! One-shot helpers that compile a pattern and use it immediately.
//!
//! [`grep`] and [`replace_regex`] treat an invalid pattern as a programming
//! error and panic, which keeps call sites with literal patterns short. The
//! `try_` variants report it as an [`Error`](crate::Error) instead.

use super::{MatchResult, Pattern, Result};

/// Searches `text` for `pattern`.
///
/// # Panics
///
/// Panics if `pattern` does not compile.
#[must_use]
#[track_caller]
pub fn grep(text: &str, pattern: &str) -> MatchResult {
    Pattern::new_or_panic(pattern).search(text)
}

/// Searches `text` for `pattern`, returning an error if the pattern is
/// invalid.
pub fn try_grep(text: &str, pattern: &str) -> Result<MatchResult> {
    Ok(Pattern::new(pattern)?.search(text))
}

/// Replaces every match of `pattern` in `text` with `template`.
///
/// # Panics
///
/// Panics if `pattern` does not compile.
#[must_use]
#[track_caller]
pub fn replace_regex(text: &str, pattern: &str, template: &str) -> String {
    Pattern::new_or_panic(pattern).replace_all(text, template)
}

/// Replaces every match of `pattern` in `text` with `template`, returning an
/// error if the pattern is invalid.
pub fn try_replace_regex(text: &str, pattern: &str, template: &str) -> Result<String> {
    Ok(Pattern::new(pattern)?.replace_all(text, template))
}

/// Method forms of the helpers in this module, for `str` and anything that
/// derefs to it.
pub trait StrExt {
    /// See [`grep`].
    #[must_use]
    fn grep(&self, pattern: &str) -> MatchResult;

    /// See [`try_grep`].
    fn try_grep(&self, pattern: &str) -> Result<MatchResult>;

    /// See [`replace_regex`].
    #[must_use]
    fn replace_regex(&self, pattern: &str, template: &str) -> String;

    /// See [`try_replace_regex`].
    fn try_replace_regex(&self, pattern: &str, template: &str) -> Result<String>;
}

impl StrExt for str {
    #[track_caller]
    fn grep(&self, pattern: &str) -> MatchResult {
        grep(self, pattern)
    }

    fn try_grep(&self, pattern: &str) -> Result<MatchResult> {
        try_grep(self, pattern)
    }

    #[track_caller]
    fn replace_regex(&self, pattern: &str, template: &str) -> String {
        replace_regex(self, pattern, template)
    }

    fn try_replace_regex(&self, pattern: &str, template: &str) -> Result<String> {
        try_replace_regex(self, pattern, template)
    }
}
