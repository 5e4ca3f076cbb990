//! Match snapshots produced by [`Pattern::search`].

use super::{Error, Pattern, Result};
use std::ops::{Index, Range};

/// A half-open byte range into a searched string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Converts this byte span into character (Unicode scalar value)
    /// offsets within `haystack`.
    ///
    /// Returns `None` if the span does not fall on character boundaries of
    /// `haystack`, which happens when it is not the string that was searched.
    #[must_use]
    pub fn char_range(self, haystack: &str) -> Option<Range<usize>> {
        let start = haystack.get(..self.start)?.chars().count();
        let end = start + haystack.get(self.range())?.chars().count();
        Some(start..end)
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
        }
    }
}

/// One occurrence of a pattern: the whole-match span and the span of every
/// capture group. A group that did not take part in the match is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    span: Span,
    groups: Vec<Option<Span>>,
}

impl Match {
    pub(crate) fn from_captures(caps: &regex::Captures<'_>) -> Self {
        let mut spans = caps.iter().map(|group| group.map(Span::from));
        let span = spans
            .next()
            .flatten()
            .unwrap_or(Span { start: 0, end: 0 });
        Self {
            span,
            groups: spans.collect(),
        }
    }

    /// The span of the whole match.
    #[inline]
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Number of capture groups in the pattern, participating or not.
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Span of group `index`, where 0 is the whole match and capture groups
    /// start at 1. `None` if the group did not participate or does not
    /// exist.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Span> {
        match index {
            0 => Some(self.span),
            i => self.groups.get(i - 1).copied().flatten(),
        }
    }

    /// Text of group `index` within `haystack`, the string that was searched.
    /// `None` if the group is absent or its span does not fit `haystack`.
    #[must_use]
    pub fn text<'h>(&self, haystack: &'h str, index: usize) -> Option<&'h str> {
        haystack.get(self.get(index)?.range())
    }

    /// Spans of group 0 followed by each capture group in order.
    pub fn spans(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        core::iter::once(Some(self.span)).chain(self.groups.iter().copied())
    }
}

/// Every match found by one search, together with the searched string and
/// the pattern used.
///
/// Only [`Pattern::search`] creates these, which keeps the matches and the
/// flattened captures consistent with each other.
#[derive(Clone, Debug)]
pub struct MatchResult {
    pattern: Pattern,
    haystack: String,
    items: Vec<Match>,
    captures: Vec<String>,
}

impl MatchResult {
    pub(crate) fn new(pattern: Pattern, haystack: String, items: Vec<Match>) -> Self {
        // Non-participating groups flatten to "".
        let captures = items
            .iter()
            .flat_map(Match::spans)
            .map(|span| span.map_or_else(String::new, |s| haystack[s.range()].to_owned()))
            .collect();
        Self {
            pattern,
            haystack,
            items,
            captures,
        }
    }

    /// `true` if at least one match was found.
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        !self.items.is_empty()
    }

    /// Number of matches.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The string that was searched.
    #[inline]
    #[must_use]
    pub fn haystack(&self) -> &str {
        &self.haystack
    }

    #[inline]
    #[must_use]
    pub fn matches(&self) -> &[Match] {
        &self.items
    }

    /// For each match in order, the whole-match text followed by the text of
    /// each capture group.
    #[inline]
    #[must_use]
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    /// The `index`th match.
    pub fn match_at(&self, index: usize) -> Result<&Match> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// The `index`th entry of [`MatchResult::captures`].
    pub fn capture_at(&self, index: usize) -> Result<&str> {
        self.captures
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.captures.len(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.items.iter()
    }

    pub fn captures_iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.captures.iter().map(String::as_str)
    }

    /// Rewrites the searched string, replacing each stored match with the
    /// expansion of `template`.
    #[must_use]
    pub fn substitute(&self, template: &str) -> String {
        super::template::substitute(self, template)
    }
}

/// Indexes matches; panics when out of range. See [`MatchResult::match_at`]
/// for the checked form.
impl Index<usize> for MatchResult {
    type Output = Match;

    fn index(&self, index: usize) -> &Match {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
