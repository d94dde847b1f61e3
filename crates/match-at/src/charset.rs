//! Character-set identity tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The character set a [`Text`](crate::Text) or [`Pattern`](crate::Pattern)
/// claims to be written in.
///
/// This is an identity tag only. Content is always held as a Rust `str`, and
/// two values are compatible exactly when their tags are equal, whatever
/// characters they happen to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Charset {
    #[default]
    #[serde(rename = "UTF-8")]
    Utf8,
    #[serde(rename = "US-ASCII")]
    Ascii,
    #[serde(rename = "ISO-8859-1")]
    Latin1,
    #[serde(rename = "Shift_JIS")]
    ShiftJis,
    #[serde(rename = "EUC-JP")]
    EucJp,
    #[serde(rename = "BINARY")]
    Binary,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown character set '{0}'")]
pub struct UnknownCharset(pub String);

impl Charset {
    pub const ALL: [Charset; 6] = [
        Charset::Utf8,
        Charset::Ascii,
        Charset::Latin1,
        Charset::ShiftJis,
        Charset::EucJp,
        Charset::Binary,
    ];

    /// Canonical name, as accepted by [`FromStr`] and printed by `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Ascii => "US-ASCII",
            Charset::Latin1 => "ISO-8859-1",
            Charset::ShiftJis => "Shift_JIS",
            Charset::EucJp => "EUC-JP",
            Charset::Binary => "BINARY",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = UnknownCharset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_ascii_lowercase().replace('_', "-");
        match folded.as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "us-ascii" | "ascii" => Ok(Charset::Ascii),
            "iso-8859-1" | "latin1" | "latin-1" => Ok(Charset::Latin1),
            "shift-jis" | "sjis" | "cp932" | "windows-31j" => Ok(Charset::ShiftJis),
            "euc-jp" | "eucjp" => Ok(Charset::EucJp),
            "binary" | "ascii-8bit" => Ok(Charset::Binary),
            _ => Err(UnknownCharset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for charset in Charset::ALL {
            assert_eq!(charset.name().parse::<Charset>(), Ok(charset));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("utf8".parse::<Charset>(), Ok(Charset::Utf8));
        assert_eq!("CP932".parse::<Charset>(), Ok(Charset::ShiftJis));
        assert_eq!("shift_jis".parse::<Charset>(), Ok(Charset::ShiftJis));
        assert_eq!("ASCII-8BIT".parse::<Charset>(), Ok(Charset::Binary));
        assert_eq!(" latin1 ".parse::<Charset>(), Ok(Charset::Latin1));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            "klingon".parse::<Charset>(),
            Err(UnknownCharset("klingon".to_string()))
        );
    }

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Charset::default(), Charset::Utf8);
    }
}
