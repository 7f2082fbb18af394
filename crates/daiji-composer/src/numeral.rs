//! Loosely typed numeric input.
//!
//! Callers (the CLI in particular) may hand over values that are not whole
//! numbers. [`Numeral`] keeps the distinction so the composer can reject them
//! with [`ComposeError::TypeMismatch`] instead of silently truncating.

use std::fmt;
use std::str::FromStr;

use daiji_utils::error::ComposeError;

use crate::compose::MAX_COMPOSABLE;

/// A number as received from a caller, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeral {
    Integer(i128),
    Float(f64),
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Numeral {
                fn from(value: $ty) -> Self {
                    Numeral::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl From<usize> for Numeral {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Numeral::Integer(value as i128)
    }
}

impl From<isize> for Numeral {
    fn from(value: isize) -> Self {
        Numeral::Integer(value as i128)
    }
}

impl From<f64> for Numeral {
    fn from(value: f64) -> Self {
        Numeral::Float(value)
    }
}

impl From<f32> for Numeral {
    fn from(value: f32) -> Self {
        Numeral::Float(f64::from(value))
    }
}

impl Numeral {
    /// Validate and narrow to the composable range.
    ///
    /// # Errors
    ///
    /// - [`ComposeError::TypeMismatch`] for any `Float`, even an integral one
    /// - [`ComposeError::RangeViolation`] for integers outside `0..=MAX_COMPOSABLE`
    pub fn to_composable(self) -> Result<u64, ComposeError> {
        match self {
            Numeral::Float(value) => Err(ComposeError::TypeMismatch {
                input: format!("{value:?}"),
            }),
            Numeral::Integer(value) => u64::try_from(value)
                .ok()
                .filter(|n| *n <= MAX_COMPOSABLE)
                .ok_or_else(|| ComposeError::RangeViolation {
                    value: value.to_string(),
                }),
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeral::Integer(value) => write!(f, "{value}"),
            Numeral::Float(value) => write!(f, "{value:?}"),
        }
    }
}

/// True for `digits ('_' digits)*`.
fn is_digit_run(body: &str) -> bool {
    !body.is_empty()
        && body
            .split('_')
            .all(|chunk| !chunk.is_empty() && chunk.bytes().all(|b| b.is_ascii_digit()))
}

impl FromStr for Numeral {
    type Err = ComposeError;

    /// Classify text as an integer literal, a floating literal, or neither.
    ///
    /// Integer literals take an optional sign, ASCII digits and single `_`
    /// separators between digits; surrounding whitespace is ignored. Integer
    /// literals too wide for `i128` are still integers and come back as
    /// [`ComposeError::RangeViolation`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

        if is_digit_run(body) {
            let digits: String = trimmed.chars().filter(|c| *c != '_').collect();
            return digits
                .parse::<i128>()
                .map(Numeral::Integer)
                .map_err(|_| ComposeError::RangeViolation {
                    value: trimmed.to_string(),
                });
        }

        trimmed
            .parse::<f64>()
            .map(Numeral::Float)
            .map_err(|_| ComposeError::TypeMismatch {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!("0".parse::<Numeral>().unwrap(), Numeral::Integer(0));
        assert_eq!("123456".parse::<Numeral>().unwrap(), Numeral::Integer(123456));
        assert_eq!("+42".parse::<Numeral>().unwrap(), Numeral::Integer(42));
        assert_eq!("-1".parse::<Numeral>().unwrap(), Numeral::Integer(-1));
        assert_eq!(" 7 ".parse::<Numeral>().unwrap(), Numeral::Integer(7));
        assert_eq!(
            "1_000_000".parse::<Numeral>().unwrap(),
            Numeral::Integer(1_000_000)
        );
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!("3.0".parse::<Numeral>().unwrap(), Numeral::Float(3.0));
        assert_eq!("1e3".parse::<Numeral>().unwrap(), Numeral::Float(1000.0));
        assert_eq!("-0.5".parse::<Numeral>().unwrap(), Numeral::Float(-0.5));
    }

    #[test]
    fn test_parse_rejects_non_numeric_text() {
        for text in ["", "abc", "12a", "1__0", "_1", "1_", "--1", "１２"] {
            let err = text.parse::<Numeral>().unwrap_err();
            assert!(
                matches!(err, ComposeError::TypeMismatch { .. }),
                "{text:?} should be a type mismatch, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_huge_integer_is_range_violation() {
        let huge = "9".repeat(60);
        let err = huge.parse::<Numeral>().unwrap_err();
        assert_eq!(err, ComposeError::RangeViolation { value: huge });
    }

    #[test]
    fn test_to_composable_bounds() {
        assert_eq!(Numeral::from(0_u8).to_composable().unwrap(), 0);
        assert_eq!(
            Numeral::from(999_999_999_999_u64).to_composable().unwrap(),
            999_999_999_999
        );
        assert_eq!(
            Numeral::from(1_000_000_000_000_u64).to_composable().unwrap_err(),
            ComposeError::RangeViolation {
                value: "1000000000000".to_string()
            }
        );
        assert_eq!(
            Numeral::from(-1_i32).to_composable().unwrap_err(),
            ComposeError::RangeViolation {
                value: "-1".to_string()
            }
        );
    }

    #[test]
    fn test_integral_float_is_still_type_mismatch() {
        assert_eq!(
            Numeral::from(3.0_f64).to_composable().unwrap_err(),
            ComposeError::TypeMismatch {
                input: "3.0".to_string()
            }
        );
        // Type is checked before range.
        assert!(matches!(
            Numeral::from(-1e20_f32).to_composable(),
            Err(ComposeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Numeral::Integer(-5).to_string(), "-5");
        assert_eq!(Numeral::Float(3.0).to_string(), "3.0");
    }
}
