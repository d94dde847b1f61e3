//! Immutable subject text with a character-set tag.

use crate::charset::Charset;
use std::borrow::Cow;

/// The text a pattern is matched against.
///
/// Positions into a `Text` count characters (Unicode scalar values), not
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text<'a> {
    content: Cow<'a, str>,
    charset: Charset,
}

impl<'a> Text<'a> {
    /// A UTF-8 tagged text.
    pub fn new(content: impl Into<Cow<'a, str>>) -> Self {
        Self::with_charset(content, Charset::Utf8)
    }

    pub fn with_charset(content: impl Into<Cow<'a, str>>, charset: Charset) -> Self {
        Self {
            content: content.into(),
            charset,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Number of characters in the text.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Byte offset of the `index`-th character. `index == char_len()` maps to
    /// the end of the text; anything past that is `None`.
    pub fn byte_offset(&self, index: usize) -> Option<usize> {
        self.content
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(self.content.len()))
            .nth(index)
    }

    /// A borrowing view of this text.
    pub fn borrowed(&self) -> Text<'_> {
        Text {
            content: Cow::Borrowed(&self.content),
            charset: self.charset,
        }
    }

    pub fn into_owned(self) -> Text<'static> {
        Text {
            content: Cow::Owned(self.content.into_owned()),
            charset: self.charset,
        }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(content: &'a str) -> Self {
        Text::new(content)
    }
}

impl From<String> for Text<'static> {
    fn from(content: String) -> Self {
        Text::new(content)
    }
}

impl AsRef<str> for Text<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(Text::new("foobar").char_len(), 6);
        assert_eq!(Text::new("日本語").char_len(), 3);
        assert_eq!(Text::new("").char_len(), 0);
    }

    #[test]
    fn test_byte_offset() {
        let text = Text::new("a日b");
        assert_eq!(text.byte_offset(0), Some(0));
        assert_eq!(text.byte_offset(1), Some(1));
        assert_eq!(text.byte_offset(2), Some(4));
        assert_eq!(text.byte_offset(3), Some(5));
        assert_eq!(text.byte_offset(4), None);
    }

    #[test]
    fn test_byte_offset_empty() {
        let text = Text::new("");
        assert_eq!(text.byte_offset(0), Some(0));
        assert_eq!(text.byte_offset(1), None);
    }

    #[test]
    fn test_charset_tag() {
        let text = Text::with_charset("foo", Charset::ShiftJis);
        assert_eq!(text.charset(), Charset::ShiftJis);
        assert_eq!(text.borrowed().charset(), Charset::ShiftJis);
        assert_eq!(Text::from("foo").charset(), Charset::Utf8);
    }

    #[test]
    fn test_into_owned_keeps_content() {
        let owned = Text::new(String::from("foo").as_str()).into_owned();
        assert_eq!(owned.as_str(), "foo");
    }
}
