//! Anchored matching at an exact character position.

use crate::charset::Charset;
use crate::pattern::Pattern;
use crate::position::Position;
use crate::text::Text;
use regex_automata::util::captures::Captures;
use regex_automata::{Anchored, Input};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatchError {
    #[error("wrong argument type {got} (expected pattern)")]
    InvalidPatternType { got: &'static str },
    #[error("wrong argument type {got} (expected text)")]
    InvalidTextType { got: &'static str },
    #[error("wrong argument type {got} (expected integer position)")]
    InvalidPositionType { got: &'static str },
    #[error("position {value} out of range")]
    PositionOutOfRange { value: String },
    #[error("incompatible character sets: {text} text and {pattern} pattern")]
    IncompatibleCharacterSets { text: Charset, pattern: Charset },
}

/// A matched span of text. Offsets count characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capture {
    text: String,
    start: usize,
    end: usize,
}

impl Capture {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A successful anchored match.
///
/// Group 0 is the whole match; explicit groups follow in declaration order.
/// Groups that did not take part in the match are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    #[serde(flatten)]
    whole: Capture,
    groups: Vec<Option<Capture>>,
    names: Vec<Option<String>>,
}

impl Match {
    pub fn as_str(&self) -> &str {
        self.whole.as_str()
    }

    pub fn start(&self) -> usize {
        self.whole.start
    }

    pub fn end(&self) -> usize {
        self.whole.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.whole.range()
    }

    pub fn char_len(&self) -> usize {
        self.whole.char_len()
    }

    pub fn is_empty(&self) -> bool {
        self.whole.is_empty()
    }

    /// Group `index`, where 0 is the whole match.
    pub fn get(&self, index: usize) -> Option<&Capture> {
        match index {
            0 => Some(&self.whole),
            _ => self.groups.get(index - 1)?.as_ref(),
        }
    }

    pub fn name(&self, name: &str) -> Option<&Capture> {
        let index = self
            .names
            .iter()
            .position(|n| n.as_deref() == Some(name))?;
        self.groups.get(index)?.as_ref()
    }

    /// Text of each explicit group, in declaration order.
    pub fn captures(&self) -> Vec<Option<&str>> {
        self.groups
            .iter()
            .map(|g| g.as_ref().map(Capture::as_str))
            .collect()
    }

    pub fn groups(&self) -> &[Option<Capture>] {
        &self.groups
    }

    /// Names of the explicit groups, parallel to [`Match::groups`].
    pub fn group_names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.names.iter().map(Option::as_deref)
    }

    fn from_captures(
        text: &Text<'_>,
        pattern: &Pattern,
        origin: Anchor,
        caps: &Captures,
    ) -> Option<Self> {
        let haystack = text.as_str();
        let capture = |index: usize| {
            let span = caps.get_group(index)?;
            let start = origin.index + haystack[origin.byte..span.start].chars().count();
            let text = haystack[span.range()].to_string();
            let end = start + text.chars().count();
            Some(Capture { text, start, end })
        };

        let whole = capture(0)?;
        let groups = (1..caps.group_len()).map(capture).collect();
        let names = pattern
            .group_names()
            .map(|name| name.map(str::to_string))
            .collect();

        Some(Match {
            whole,
            groups,
            names,
        })
    }
}

/// A resolved start point: character index and its byte offset.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    index: usize,
    byte: usize,
}

/// Validate the inputs and resolve `position` against `text`.
///
/// `Ok(None)` means the position lies outside the text, which is an ordinary
/// miss.
fn resolve(
    text: &Text<'_>,
    pattern: &Pattern,
    position: Position,
) -> Result<Option<Anchor>, MatchError> {
    if text.charset() != pattern.charset() {
        return Err(MatchError::IncompatibleCharacterSets {
            text: text.charset(),
            pattern: pattern.charset(),
        });
    }

    let Some(index) = position.normalize(text.char_len()) else {
        return Ok(None);
    };
    Ok(text.byte_offset(index).map(|byte| Anchor { index, byte }))
}

fn anchored_input<'h>(text: &'h Text<'_>, anchor: Anchor) -> Input<'h> {
    Input::new(text.as_str())
        .range(anchor.byte..)
        .anchored(Anchored::Yes)
}

/// Match `pattern` against `text` starting exactly at `position`.
///
/// The engine tries that one start point and nothing else. A position outside
/// the text is a miss, not an error.
///
/// # Example
///
/// ```
/// use match_at::{attempt_match, Pattern, Text};
///
/// let text = Text::new("foobar");
/// let o = Pattern::new("o").unwrap();
///
/// assert!(attempt_match(&text, &o, 0).unwrap().is_none());
/// assert_eq!(attempt_match(&text, &o, 1).unwrap().unwrap().as_str(), "o");
///
/// let bar = Pattern::new("bar").unwrap();
/// let m = attempt_match(&text, &bar, -3).unwrap().unwrap();
/// assert_eq!(m.range(), 3..6);
/// ```
pub fn attempt_match(
    text: &Text<'_>,
    pattern: &Pattern,
    position: impl Into<Position>,
) -> Result<Option<Match>, MatchError> {
    let Some(anchor) = resolve(text, pattern, position.into())? else {
        return Ok(None);
    };

    let regex = pattern.regex();
    let mut caps = regex.create_captures();
    regex.search_captures(&anchored_input(text, anchor), &mut caps);
    if !caps.is_match() {
        return Ok(None);
    }
    Ok(Match::from_captures(text, pattern, anchor, &caps))
}

/// Like [`attempt_match`], but only reports whether the match succeeded.
pub fn matches(
    text: &Text<'_>,
    pattern: &Pattern,
    position: impl Into<Position>,
) -> Result<bool, MatchError> {
    let Some(anchor) = resolve(text, pattern, position.into())? else {
        return Ok(false);
    };
    Ok(pattern.regex().is_match(anchored_input(text, anchor)))
}

/// Like [`attempt_match`], but returns the length of the match in
/// characters.
pub fn match_len(
    text: &Text<'_>,
    pattern: &Pattern,
    position: impl Into<Position>,
) -> Result<Option<usize>, MatchError> {
    let Some(anchor) = resolve(text, pattern, position.into())? else {
        return Ok(None);
    };
    let found = pattern.regex().search(&anchored_input(text, anchor));
    Ok(found.map(|m| text.as_str()[m.range()].chars().count()))
}

/// Anchored matching from either side of a text/pattern pair.
///
/// `Text` takes the pattern as its argument and `Pattern` takes the text,
/// mirroring `str::find` and `Regex::find`. Both go through the same
/// free functions.
pub trait AnchoredMatchable<Other: ?Sized> {
    fn attempt_match(
        &self,
        other: &Other,
        position: impl Into<Position>,
    ) -> Result<Option<Match>, MatchError>;

    fn matches(&self, other: &Other, position: impl Into<Position>) -> Result<bool, MatchError>;

    fn match_len(
        &self,
        other: &Other,
        position: impl Into<Position>,
    ) -> Result<Option<usize>, MatchError>;
}

impl AnchoredMatchable<Pattern> for Text<'_> {
    fn attempt_match(
        &self,
        pattern: &Pattern,
        position: impl Into<Position>,
    ) -> Result<Option<Match>, MatchError> {
        attempt_match(self, pattern, position)
    }

    fn matches(&self, pattern: &Pattern, position: impl Into<Position>) -> Result<bool, MatchError> {
        matches(self, pattern, position)
    }

    fn match_len(
        &self,
        pattern: &Pattern,
        position: impl Into<Position>,
    ) -> Result<Option<usize>, MatchError> {
        match_len(self, pattern, position)
    }
}

impl<'t> AnchoredMatchable<Text<'t>> for Pattern {
    fn attempt_match(
        &self,
        text: &Text<'t>,
        position: impl Into<Position>,
    ) -> Result<Option<Match>, MatchError> {
        attempt_match(text, self, position)
    }

    fn matches(&self, text: &Text<'t>, position: impl Into<Position>) -> Result<bool, MatchError> {
        matches(text, self, position)
    }

    fn match_len(
        &self,
        text: &Text<'t>,
        position: impl Into<Position>,
    ) -> Result<Option<usize>, MatchError> {
        match_len(text, self, position)
    }
}
