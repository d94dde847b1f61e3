//! Loosely-typed arguments for callers that do not hold a `Text` and a
//! `Pattern` yet, such as command-line front ends or scripting bridges.
//!
//! Arguments are checked in a fixed order and the first problem wins: the
//! pattern argument, then the position, then the text argument, then the
//! character sets of text and pattern.

use crate::matcher::{self, Match, MatchError};
use crate::pattern::Pattern;
use crate::position::Position;
use crate::text::Text;

#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Text(Text<'static>),
    Pattern(Pattern),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Text(_) => "text",
            Value::Pattern(_) => "pattern",
        }
    }

    pub fn as_pattern(&self) -> Result<&Pattern, MatchError> {
        match self {
            Value::Pattern(p) => Ok(p),
            _ => Err(MatchError::InvalidPatternType {
                got: self.type_name(),
            }),
        }
    }

    /// A plain string is accepted as UTF-8 text.
    pub fn as_text(&self) -> Result<Text<'_>, MatchError> {
        match self {
            Value::Text(t) => Ok(t.borrowed()),
            Value::Str(s) => Ok(Text::new(s.as_str())),
            _ => Err(MatchError::InvalidTextType {
                got: self.type_name(),
            }),
        }
    }

    pub fn as_position(&self) -> Result<Position, MatchError> {
        match self {
            Value::Int(n) => Position::try_from(*n),
            Value::Float(f) => Position::try_from(*f),
            _ => Err(MatchError::InvalidPositionType {
                got: self.type_name(),
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Text<'static>> for Value {
    fn from(t: Text<'static>) -> Self {
        Value::Text(t)
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Value::Pattern(p)
    }
}

fn unpack<'v>(
    text: &'v Value,
    pattern: &'v Value,
    position: &Value,
) -> Result<(Text<'v>, &'v Pattern, Position), MatchError> {
    let pattern = pattern.as_pattern()?;
    let position = position.as_position()?;
    let text = text.as_text()?;
    Ok((text, pattern, position))
}

/// [`matcher::attempt_match`] over loosely-typed arguments.
pub fn attempt_match(
    text: &Value,
    pattern: &Value,
    position: &Value,
) -> Result<Option<Match>, MatchError> {
    let (text, pattern, position) = unpack(text, pattern, position)?;
    matcher::attempt_match(&text, pattern, position)
}

/// [`matcher::matches`] over loosely-typed arguments.
pub fn matches(text: &Value, pattern: &Value, position: &Value) -> Result<bool, MatchError> {
    let (text, pattern, position) = unpack(text, pattern, position)?;
    matcher::matches(&text, pattern, position)
}

/// [`matcher::match_len`] over loosely-typed arguments.
pub fn match_len(
    text: &Value,
    pattern: &Value,
    position: &Value,
) -> Result<Option<usize>, MatchError> {
    let (text, pattern, position) = unpack(text, pattern, position)?;
    matcher::match_len(&text, pattern, position)
}
