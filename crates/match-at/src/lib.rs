//! Regex matching pinned to an exact character position.
//!
//! Ordinary search scans forward for the first place a pattern matches.
//! [`attempt_match`] instead tries exactly one start point and either matches
//! there or fails. Negative positions count back from the end of the text.
//!
//! # Example
//!
//! ```
//! use match_at::{AnchoredMatchable, MatchError, Pattern, Text};
//!
//! let text = Text::new("foobar");
//! let pattern = Pattern::new("o").unwrap();
//!
//! // No shifting forward to find the first "o"
//! assert!(text.attempt_match(&pattern, 0).unwrap().is_none());
//! assert_eq!(text.attempt_match(&pattern, 1).unwrap().unwrap().as_str(), "o");
//!
//! // Same thing from the pattern's side
//! assert!(pattern.matches(&text, 2).unwrap());
//! assert!(!pattern.matches(&text, 3).unwrap());
//!
//! // Out-of-range positions are a miss, not an error
//! assert!(!pattern.matches(&text, 99).unwrap());
//!
//! // Text and pattern must carry the same character set
//! let sjis = Text::with_charset("foo", match_at::Charset::ShiftJis);
//! assert!(matches!(
//!     pattern.matches(&sjis, 0),
//!     Err(MatchError::IncompatibleCharacterSets { .. })
//! ));
//! ```

mod charset;
mod matcher;
mod pattern;
mod position;
mod text;
pub mod value;

pub use charset::{Charset, UnknownCharset};
pub use matcher::{attempt_match, match_len, matches, AnchoredMatchable, Capture, Match, MatchError};
pub use pattern::{Pattern, PatternBuilder, PatternError};
pub use position::Position;
pub use text::Text;
pub use value::Value;
