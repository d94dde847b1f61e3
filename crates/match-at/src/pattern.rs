//! Compiled patterns with a character-set tag.

use crate::charset::Charset;
use regex_automata::meta::{self, BuildError};
use regex_automata::util::syntax;
use regex_automata::PatternID;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("failed to build pattern regex: {0}")]
    Build(#[from] BuildError),
}

/// A compiled regular expression that can be asked to match at an exact
/// character position.
///
/// Cloning is cheap and a single `Pattern` can be shared across threads.
///
/// # Example
///
/// ```
/// use match_at::{Charset, Pattern};
///
/// let pattern = Pattern::builder()
///     .case_insensitive(true)
///     .charset(Charset::Ascii)
///     .build(r"foo(\d+)")
///     .unwrap();
///
/// assert_eq!(pattern.as_str(), r"foo(\d+)");
/// assert_eq!(pattern.charset(), Charset::Ascii);
/// assert_eq!(pattern.captures_len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: meta::Regex,
    charset: Charset,
}

impl Pattern {
    /// Compile a UTF-8 tagged pattern with default flags.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        PatternBuilder::new().build(source)
    }

    /// Compile a pattern that matches `literal` verbatim.
    pub fn literal(literal: &str) -> Result<Self, PatternError> {
        PatternBuilder::new().literal(true).build(literal)
    }

    pub fn builder() -> PatternBuilder {
        PatternBuilder::new()
    }

    /// The source the regex was compiled from, after literal escaping.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Number of explicit capture groups, not counting the whole match.
    pub fn captures_len(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    /// Names of the explicit capture groups in declaration order. Unnamed
    /// groups are `None`.
    pub fn group_names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.regex
            .group_info()
            .pattern_names(PatternID::ZERO)
            .skip(1)
    }

    pub(crate) fn regex(&self) -> &meta::Regex {
        &self.regex
    }
}

/// Flags for compiling a [`Pattern`].
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    literal: bool,
    charset: Charset,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Make `^` and `$` match at line boundaries.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    /// Treat the source as literal text rather than regex syntax.
    pub fn literal(mut self, yes: bool) -> Self {
        self.literal = yes;
        self
    }

    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn build(&self, source: &str) -> Result<Pattern, PatternError> {
        let source = if self.literal {
            regex::escape(source)
        } else {
            source.to_string()
        };

        let syntax = syntax::Config::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace);
        let regex = meta::Regex::builder().syntax(syntax).build(&source)?;

        Ok(Pattern {
            source,
            regex,
            charset: self.charset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error() {
        assert!(matches!(Pattern::new("foo("), Err(PatternError::Build(_))));
    }

    #[test]
    fn test_literal_escapes() {
        let pattern = Pattern::literal("a.b(c)").unwrap();
        assert_eq!(pattern.as_str(), r"a\.b\(c\)");
        assert_eq!(pattern.captures_len(), 0);
    }

    #[test]
    fn test_group_names() {
        let pattern = Pattern::new(r"(?P<year>\d{4})-(\d{2})-(?P<day>\d{2})").unwrap();
        assert_eq!(pattern.captures_len(), 3);
        let names: Vec<_> = pattern.group_names().collect();
        assert_eq!(names, vec![Some("year"), None, Some("day")]);
    }

    #[test]
    fn test_default_charset() {
        assert_eq!(Pattern::new("foo").unwrap().charset(), Charset::Utf8);
    }

    #[test]
    fn test_builder_flags_compile() {
        let pattern = Pattern::builder()
            .case_insensitive(true)
            .multi_line(true)
            .dot_matches_new_line(true)
            .ignore_whitespace(true)
            .build("^ foo . bar $")
            .unwrap();
        assert_eq!(pattern.as_str(), "^ foo . bar $");
    }
}
