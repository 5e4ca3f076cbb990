use super::{
    Error, Result,
    result::{Match, MatchResult},
    template::Template,
};
use regex::Regex;
use std::{fmt, str::FromStr};

/// A compiled regular expression.
///
/// A `Pattern` always wraps a successfully compiled engine; there is no way
/// to obtain one from invalid pattern text. Cloning is cheap, the compiled
/// program is shared.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern` with default options.
    ///
    /// # Errors
    ///
    /// If the engine rejects the pattern, an [`Error::Compile`] carrying the
    /// engine's diagnostic is returned.
    pub fn new(pattern: &str) -> Result<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Ok(Self { regex }),
            Err(err) => {
                let message = err.to_string();
                log::debug!("rejected pattern {pattern:?}: {message}");
                Err(Error::Compile {
                    pattern: pattern.to_owned(),
                    message,
                })
            }
        }
    }

    /// Compiles `pattern`, panicking if it is invalid.
    ///
    /// Meant for patterns written as literals in source code, where an
    /// invalid pattern is a programming error. Use [`Pattern::new`] for
    /// anything that comes from outside the program.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` does not compile.
    #[must_use]
    #[track_caller]
    pub fn new_or_panic(pattern: &str) -> Self {
        match Self::new(pattern) {
            Ok(pattern) => pattern,
            Err(err) => {
                log::error!("{err}");
                panic!("{err}")
            }
        }
    }

    /// The pattern text this was compiled from.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of capture groups, not counting the implicit whole-match
    /// group 0.
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Returns `true` if the pattern matches anywhere in `text`.
    #[inline]
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Collects every non-overlapping match in `text`, left to right.
    #[must_use]
    pub fn search(&self, text: &str) -> MatchResult {
        let items: Vec<_> = self
            .regex
            .captures_iter(text)
            .map(|caps| Match::from_captures(&caps))
            .collect();
        log::trace!("{:?} found {} match(es)", self.as_str(), items.len());
        MatchResult::new(self.clone(), text.to_owned(), items)
    }

    /// Replaces every match in `text` with the expansion of `template`.
    ///
    /// Returns the rewritten string and the number of replacements made.
    #[must_use]
    pub fn replace(&self, text: &str, template: &str) -> (String, usize) {
        let result = self.search(text);
        let replaced = Template::new(template, self.group_count()).substitute(&result);
        (replaced, result.len())
    }

    /// Like [`Pattern::replace`], discarding the replacement count.
    #[must_use]
    pub fn replace_all(&self, text: &str, template: &str) -> String {
        self.replace(text, template).0
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
