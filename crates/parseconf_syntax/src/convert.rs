//! Token → number conversions for grammar callbacks.
//!
//! Every conversion follows one contract:
//! - text longer than the target's capacity → [`ConvertError::TooLarge`], without attempting to parse;
//! - empty text, trailing garbage or an out-of-range value → [`ConvertError::Invalid`].
//!
//! Capacities mirror the widest decimal spelling a type can reasonably need: 31 bytes for machine
//! integers, 63 bytes for 128-bit integers and floats. Parsing is locale-independent (`str::parse`).
//!
//! ## Examples
//! ```rust
//! use parseconf_syntax::convert::{self, ConvertError};
//!
//! assert_eq!(convert::convert_text::<u64>("18446744073709551615"), Ok(u64::MAX));
//! assert_eq!(convert::convert_text::<u64>("12a"), Err(ConvertError::Invalid));
//! ```

use thiserror::Error;

use crate::lexer::Token;

/// Byte capacity for machine-word integers.
pub const INTEGER_CAPACITY: usize = 31;
/// Byte capacity for 128-bit integers.
pub const WIDE_INTEGER_CAPACITY: usize = 63;
/// Byte capacity for floating point values.
pub const FLOAT_CAPACITY: usize = 63;

/// Why a token could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("value too large for buffer")]
    TooLarge,
    #[error("invalid value")]
    Invalid,
}

/// A numeric type a token can be converted to.
pub trait FromToken: Sized {
    /// Longest accepted text, in bytes.
    const CAPACITY: usize;

    /// Parse the complete text, or `None` if any part of it is not part of the value.
    fn parse_text(text: &str) -> Option<Self>;
}

macro_rules! impl_from_token {
    ($capacity:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl FromToken for $ty {
                const CAPACITY: usize = $capacity;

                fn parse_text(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )+
    };
}

impl_from_token!(INTEGER_CAPACITY => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_from_token!(WIDE_INTEGER_CAPACITY => u128, i128);
impl_from_token!(FLOAT_CAPACITY => f32, f64);

/// Convert raw token text.
pub fn convert_text<T: FromToken>(text: &str) -> Result<T, ConvertError> {
    if text.len() > T::CAPACITY {
        return Err(ConvertError::TooLarge);
    }
    if text.is_empty() {
        return Err(ConvertError::Invalid);
    }
    T::parse_text(text).ok_or(ConvertError::Invalid)
}

/// Convert a token's text.
pub fn convert<T: FromToken>(token: &Token<'_>) -> Result<T, ConvertError> {
    convert_text(token.text)
}

impl Token<'_> {
    /// Convert this token's text to a number; see [`convert`].
    pub fn value<T: FromToken>(&self) -> Result<T, ConvertError> {
        convert(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Span, TokenKind};

    #[test]
    fn test_unsigned_limits() {
        assert_eq!(convert_text::<u64>("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(convert_text::<u64>("18446744073709551616"), Err(ConvertError::Invalid));
        assert_eq!(convert_text::<u32>("4294967295"), Ok(u32::MAX));
        assert_eq!(
            convert_text::<u128>("340282366920938463463374607431768211455"),
            Ok(u128::MAX)
        );
    }

    #[test]
    fn test_invalid_text() {
        assert_eq!(convert_text::<u64>("12a"), Err(ConvertError::Invalid));
        assert_eq!(convert_text::<u64>(""), Err(ConvertError::Invalid));
        assert_eq!(convert_text::<u64>("-1"), Err(ConvertError::Invalid));
        assert_eq!(convert_text::<u64>(" 1"), Err(ConvertError::Invalid));
        assert_eq!(convert_text::<f64>("1.5x"), Err(ConvertError::Invalid));
    }

    #[test]
    fn test_capacity_is_checked_before_parsing() {
        let zeros = "0".repeat(INTEGER_CAPACITY);
        assert_eq!(convert_text::<u64>(&zeros), Ok(0));

        let too_long = "0".repeat(INTEGER_CAPACITY + 1);
        assert_eq!(convert_text::<u64>(&too_long), Err(ConvertError::TooLarge));
        // Garbage past the capacity is never looked at.
        assert_eq!(convert_text::<u32>(&"x".repeat(40)), Err(ConvertError::TooLarge));
        assert_eq!(convert_text::<u128>(&"1".repeat(40)), Err(ConvertError::Invalid));
        assert_eq!(convert_text::<f64>(&"1".repeat(FLOAT_CAPACITY + 1)), Err(ConvertError::TooLarge));
    }

    #[test]
    fn test_floats() {
        assert_eq!(convert_text::<f64>("3.25"), Ok(3.25));
        assert_eq!(convert_text::<f64>("1."), Ok(1.0));
        assert_eq!(convert_text::<f64>(".5"), Ok(0.5));
        assert_eq!(convert_text::<f32>("0.75"), Ok(0.75));
    }

    #[test]
    fn test_token_value() {
        let token = Token::new(TokenKind::Number, "53", Span::new(4, 6));
        assert_eq!(token.value::<u16>(), Ok(53));
        assert_eq!(token.value::<u8>(), Ok(53));

        let token = Token::new(TokenKind::Number, "300", Span::new(0, 3));
        assert_eq!(token.value::<u8>(), Err(ConvertError::Invalid));
        assert_eq!(ConvertError::TooLarge.to_string(), "value too large for buffer");
    }
}
