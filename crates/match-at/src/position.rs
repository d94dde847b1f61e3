//! Signed character positions.

use crate::matcher::MatchError;

/// A character offset into a [`Text`](crate::Text).
///
/// Non-negative values count from the start of the text. Negative values
/// count back from the end: `-k` is `char_len - k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(isize);

impl Position {
    pub const START: Position = Position(0);

    pub const fn new(offset: isize) -> Self {
        Position(offset)
    }

    pub const fn get(self) -> isize {
        self.0
    }

    /// Resolve against a text of `char_len` characters.
    ///
    /// Returns `None` when the resolved offset falls before the start or past
    /// the end of the text. `char_len` itself is a valid offset.
    pub fn normalize(self, char_len: usize) -> Option<usize> {
        let index = if self.0 < 0 {
            char_len.checked_sub(self.0.unsigned_abs())?
        } else {
            usize::try_from(self.0).ok()?
        };
        (index <= char_len).then_some(index)
    }

    /// Parse a textual position argument.
    ///
    /// Integers are taken as-is. Anything else that reads as a number goes
    /// through the `f64` conversion, so `inf` is out of range and `1.5` is
    /// rejected as non-integral.
    pub fn parse(arg: &str) -> Result<Self, MatchError> {
        let arg = arg.trim();
        if let Ok(n) = arg.parse::<i64>() {
            return Position::try_from(n);
        }
        match arg.parse::<f64>() {
            Ok(f) => Position::try_from(f),
            Err(_) => Err(MatchError::InvalidPositionType { got: "string" }),
        }
    }
}

impl From<isize> for Position {
    fn from(offset: isize) -> Self {
        Position(offset)
    }
}

impl From<i32> for Position {
    fn from(offset: i32) -> Self {
        // isize is at least 32 bits on every target std supports.
        Position(offset as isize)
    }
}

impl From<i16> for Position {
    fn from(offset: i16) -> Self {
        Position(isize::from(offset))
    }
}

impl From<i8> for Position {
    fn from(offset: i8) -> Self {
        Position(isize::from(offset))
    }
}

macro_rules! try_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Position {
                type Error = MatchError;

                fn try_from(offset: $ty) -> Result<Self, Self::Error> {
                    isize::try_from(offset)
                        .map(Position)
                        .map_err(|_| MatchError::PositionOutOfRange {
                            value: offset.to_string(),
                        })
                }
            }
        )*
    };
}

try_from_wide_int!(i64, i128, u32, u64, usize);

impl TryFrom<f64> for Position {
    type Error = MatchError;

    fn try_from(offset: f64) -> Result<Self, Self::Error> {
        if !offset.is_finite() {
            return Err(MatchError::PositionOutOfRange {
                value: offset.to_string(),
            });
        }
        if offset.fract() != 0.0 {
            return Err(MatchError::InvalidPositionType {
                got: "non-integral number",
            });
        }
        // isize::MAX as f64 rounds up to 2^(bits-1), so the upper bound is exclusive.
        if offset < isize::MIN as f64 || offset >= isize::MAX as f64 {
            return Err(MatchError::PositionOutOfRange {
                value: offset.to_string(),
            });
        }
        Ok(Position(offset as isize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_positive() {
        assert_eq!(Position::new(0).normalize(6), Some(0));
        assert_eq!(Position::new(3).normalize(6), Some(3));
        assert_eq!(Position::new(6).normalize(6), Some(6));
        assert_eq!(Position::new(7).normalize(6), None);
    }

    #[test]
    fn test_normalize_negative() {
        assert_eq!(Position::new(-3).normalize(6), Some(3));
        assert_eq!(Position::new(-6).normalize(6), Some(0));
        assert_eq!(Position::new(-7).normalize(6), None);
        assert_eq!(Position::new(isize::MIN).normalize(6), None);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(Position::START.normalize(0), Some(0));
        assert_eq!(Position::new(-1).normalize(0), None);
        assert_eq!(Position::new(1).normalize(0), None);
    }

    #[test]
    fn test_from_float() {
        assert_eq!(Position::try_from(2.0), Ok(Position::new(2)));
        assert_eq!(Position::try_from(-3.0), Ok(Position::new(-3)));
    }

    #[test]
    fn test_float_infinite_out_of_range() {
        assert!(matches!(
            Position::try_from(f64::INFINITY),
            Err(MatchError::PositionOutOfRange { .. })
        ));
        assert!(matches!(
            Position::try_from(f64::NEG_INFINITY),
            Err(MatchError::PositionOutOfRange { .. })
        ));
        assert!(matches!(
            Position::try_from(f64::NAN),
            Err(MatchError::PositionOutOfRange { .. })
        ));
        assert!(matches!(
            Position::try_from(1e300),
            Err(MatchError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_float_fractional_rejected() {
        assert!(matches!(
            Position::try_from(1.5),
            Err(MatchError::InvalidPositionType { .. })
        ));
    }

    #[test]
    fn test_wide_int_overflow() {
        assert!(matches!(
            Position::try_from(u64::MAX),
            Err(MatchError::PositionOutOfRange { .. })
        ));
        assert_eq!(Position::try_from(5usize), Ok(Position::new(5)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Position::parse("4"), Ok(Position::new(4)));
        assert_eq!(Position::parse("-3"), Ok(Position::new(-3)));
        assert_eq!(Position::parse(" 2 "), Ok(Position::new(2)));
        assert_eq!(Position::parse("2.0"), Ok(Position::new(2)));
        assert!(matches!(
            Position::parse("inf"),
            Err(MatchError::PositionOutOfRange { .. })
        ));
        assert!(matches!(
            Position::parse("-infinity"),
            Err(MatchError::PositionOutOfRange { .. })
        ));
        assert!(matches!(
            Position::parse("/bar/"),
            Err(MatchError::InvalidPositionType { .. })
        ));
        assert!(matches!(
            Position::parse("99999999999999999999999"),
            Err(MatchError::PositionOutOfRange { .. })
        ));
    }
}
