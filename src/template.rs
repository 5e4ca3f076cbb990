//! Replacement templates.
//!
//! A template is literal text with numbered group references:
//!
//! - `$N` expands to the text of group `N`; `$0` is the whole match. After
//!   the first digit, further digits are taken only while the number is
//!   still a group of the pattern, so with two groups `$12` is group 1
//!   followed by a literal `2`.
//! - `\` makes the next character literal, so `\$` is a dollar sign and
//!   `\\` a backslash.
//! - A `$` not followed by a digit, and a trailing `\`, are literal.
//!
//! References to missing or non-participating groups expand to nothing.

use super::result::{Match, MatchResult};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Literal(String),
    Group(usize),
}

/// A parsed replacement template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Parses `template` for a pattern with `group_count` capture groups.
    #[must_use]
    pub fn new(template: &str, group_count: usize) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' => literal.push(chars.next().unwrap_or('\\')),
                '$' => {
                    let Some(mut index) = chars.peek().and_then(|d| d.to_digit(10)) else {
                        literal.push('$');
                        continue;
                    };
                    chars.next();
                    while let Some(next) = chars
                        .peek()
                        .and_then(|d| d.to_digit(10))
                        .map(|d| index * 10 + d)
                        .filter(|&n| n as usize <= group_count)
                    {
                        index = next;
                        chars.next();
                    }
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(core::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Group(index as usize));
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self { tokens }
    }

    /// Appends the expansion of this template for `m` to `out`. `haystack`
    /// is the string `m` was found in.
    pub fn expand(&self, haystack: &str, m: &Match, out: &mut String) {
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Group(index) => out.push_str(m.text(haystack, *index).unwrap_or_default()),
            }
        }
    }

    /// Rewrites the searched string of `result`, replacing each match with
    /// its expansion and keeping the text between matches.
    #[must_use]
    pub fn substitute(&self, result: &MatchResult) -> String {
        let haystack = result.haystack();
        let mut out = String::with_capacity(haystack.len());
        let mut last_pos = 0;

        for m in result {
            let span = m.span();
            out.push_str(&haystack[last_pos..span.start]);
            self.expand(haystack, m, &mut out);
            last_pos = span.end;
        }
        out.push_str(&haystack[last_pos..]);

        log::trace!("substituted {} match(es)", result.len());
        out
    }
}

/// Rewrites the string searched by `result`, replacing every match found
/// with the expansion of `template`. No new search is performed.
#[must_use]
pub fn substitute(result: &MatchResult, template: &str) -> String {
    Template::new(template, result.pattern().group_count()).substitute(result)
}
