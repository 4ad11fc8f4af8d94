//! Integer Parsing from Views
//!
//! Reads base-10 integers straight out of the backing storage: no
//! substring, no intermediate buffer. Accepts an optional single leading
//! `+` or `-` followed by one or more ASCII digits. Whitespace is not
//! trimmed and digit separators are not accepted.

use super::view::View;
use crate::error::{ParseIntegerError, ViewError};

/// Element types that may hold ASCII digits
pub trait DigitElement: Copy {
    /// The element as an ASCII byte, if it is one
    fn to_ascii(self) -> Option<u8>;
}

impl DigitElement for u8 {
    #[inline]
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }
}

impl DigitElement for u16 {
    #[inline]
    fn to_ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }
}

impl DigitElement for char {
    #[inline]
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self as u8)
    }
}

/// Integer types a view can be parsed into
pub trait ParseInteger: Copy {
    const SIGNED: bool;
    const ZERO: Self;

    /// `self * 10 + digit`, or `None` on overflow
    fn push_digit(self, digit: u8) -> Option<Self>;

    /// `self * 10 - digit`, or `None` on overflow
    fn push_negative_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_parse_integer {
    ($signed:expr => $($t:ty),+) => {
        $(
            impl ParseInteger for $t {
                const SIGNED: bool = $signed;
                const ZERO: Self = 0;

                #[inline]
                fn push_digit(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_add(digit as $t)
                }

                #[inline]
                fn push_negative_digit(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_sub(digit as $t)
                }
            }
        )+
    };
}

impl_parse_integer!(true => i8, i16, i32, i64, i128, isize);
impl_parse_integer!(false => u8, u16, u32, u64, u128, usize);

/// Parse the viewed elements as a base-10 integer.
///
/// Negative values accumulate downwards so the type's minimum parses
/// without passing through its unrepresentable absolute value.
pub fn parse_integer<N, E>(view: View<'_, E>) -> Result<N, ViewError>
where
    N: ParseInteger,
    E: DigitElement,
{
    parse_digits(view.as_slice()).map_err(ViewError::Parse)
}

fn parse_digits<N, E>(elements: &[E]) -> Result<N, ParseIntegerError>
where
    N: ParseInteger,
    E: DigitElement,
{
    let first = match elements.first() {
        Some(first) => *first,
        None => return Err(ParseIntegerError::Empty),
    };

    let (negative, digits_from) = match first.to_ascii() {
        Some(b'+') => (false, 1),
        Some(b'-') if N::SIGNED => (true, 1),
        _ => (false, 0),
    };

    if digits_from == elements.len() {
        // Sign with nothing after it
        return Err(ParseIntegerError::InvalidDigit { position: 0 });
    }

    let mut value = N::ZERO;
    for (position, element) in elements.iter().enumerate().skip(digits_from) {
        let digit = match element.to_ascii() {
            Some(b @ b'0'..=b'9') => b - b'0',
            _ => return Err(ParseIntegerError::InvalidDigit { position }),
        };
        let next = if negative {
            value.push_negative_digit(digit)
        } else {
            value.push_digit(digit)
        };
        value = next.ok_or(ParseIntegerError::Overflow)?;
    }

    Ok(value)
}

impl<'a, E: DigitElement> View<'a, E> {
    /// Parse the viewed elements as a base-10 integer of type `N`
    pub fn parse<N: ParseInteger>(&self) -> Result<N, ViewError> {
        parse_integer(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_windows() {
        let text = "3489,3972";
        let first: i32 = View::from_text(text, 0, 4).unwrap().parse().unwrap();
        let second: i32 = View::from_text(text, 5, 4).unwrap().parse().unwrap();

        assert_eq!(first, 3489);
        assert_eq!(second, 3972);
    }

    #[test]
    fn test_window_including_separator_fails() {
        let view = View::from_text("3489,3972", 0, 5).unwrap();
        assert_eq!(
            view.parse::<i32>(),
            Err(ViewError::Parse(ParseIntegerError::InvalidDigit { position: 4 }))
        );
    }

    #[test]
    fn test_signs() {
        assert_eq!(View::from("-42").parse::<i32>(), Ok(-42));
        assert_eq!(View::from("+42").parse::<i32>(), Ok(42));
        assert_eq!(View::from("+42").parse::<u8>(), Ok(42));
        assert_eq!(View::from("-0").parse::<i64>(), Ok(0));
    }

    #[test]
    fn test_minus_on_unsigned_is_invalid() {
        assert_eq!(
            View::from("-1").parse::<u32>(),
            Err(ViewError::Parse(ParseIntegerError::InvalidDigit { position: 0 }))
        );
    }

    #[test]
    fn test_empty_and_sign_only() {
        assert_eq!(
            View::from("").parse::<i32>(),
            Err(ViewError::Parse(ParseIntegerError::Empty))
        );
        assert_eq!(
            View::from("-").parse::<i32>(),
            Err(ViewError::Parse(ParseIntegerError::InvalidDigit { position: 0 }))
        );
        assert_eq!(
            View::from("+-5").parse::<i32>(),
            Err(ViewError::Parse(ParseIntegerError::InvalidDigit { position: 1 }))
        );
    }

    #[test]
    fn test_type_limits() {
        assert_eq!(View::from("127").parse::<i8>(), Ok(i8::MAX));
        assert_eq!(View::from("-128").parse::<i8>(), Ok(i8::MIN));
        assert_eq!(
            View::from("128").parse::<i8>(),
            Err(ViewError::Parse(ParseIntegerError::Overflow))
        );
        assert_eq!(
            View::from("-129").parse::<i8>(),
            Err(ViewError::Parse(ParseIntegerError::Overflow))
        );
        assert_eq!(View::from("255").parse::<u8>(), Ok(u8::MAX));
        assert_eq!(
            View::from("256").parse::<u8>(),
            Err(ViewError::Parse(ParseIntegerError::Overflow))
        );
    }

    #[test]
    fn test_whitespace_not_trimmed() {
        assert!(View::from(" 12").parse::<i32>().is_err());
        assert!(View::from("12 ").parse::<i32>().is_err());
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(View::from("000123").parse::<u16>(), Ok(123));
    }

    #[test]
    fn test_char_and_utf16_elements() {
        let chars: Vec<char> = "x-907y".chars().collect();
        let view = View::from_storage(&chars, 1, 4).unwrap();
        assert_eq!(view.parse::<i16>(), Ok(-907));

        let wide: Vec<u16> = "3972".encode_utf16().collect();
        assert_eq!(parse_integer::<u32, u16>(View::new(&wide)), Ok(3972));
    }

    #[test]
    fn test_non_ascii_digit_rejected() {
        // Arabic-indic digit one
        let chars = ['1', '\u{0661}'];
        assert_eq!(
            View::new(&chars).parse::<i32>(),
            Err(ViewError::Parse(ParseIntegerError::InvalidDigit { position: 1 }))
        );
    }
}
