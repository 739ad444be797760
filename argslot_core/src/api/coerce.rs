use std::borrow::Cow;
use std::num::IntErrorKind;

use crate::constant::HEXADECIMAL_PREFIXES;
use crate::error::{ConversionError, Rejection};
use crate::model::{NumericClass, Radix};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Behaviour to coerce a token into `Self`.
///
/// Implemented for `String` and every numeric primitive.
/// Enumerations get an implementation via `#[derive(Coercible)]`.
pub trait Coerce: Sized {
    /// Convert `token` in its entirety, or fail without side effects.
    fn coerce(token: &str) -> Result<Self, ConversionError>;
}

/// Behaviour of a number which may be produced from a token.
///
/// The textual parser is selected by `CLASS`.
/// Integer classes are parsed at a maximal width and then narrowed through `from_integer`, while float classes are parsed at their own width by `parse_float`.
/// Only the hook matching `CLASS` is ever consulted.
///
/// Both hooks reject by default, so an implementation must override the one matching its `CLASS`.
/// Otherwise coercion refuses tokens as `Rejection::OutOfRange` rather than producing a value.
pub trait Numeric: Sized {
    /// The classification of this type.
    const CLASS: NumericClass;

    /// Narrow a parsed integer into `Self`.
    ///
    /// Must return `None` for any value outside `[MIN, MAX]`.
    fn from_integer(_value: i128) -> Option<Self> {
        None
    }

    /// Parse a decimal float token into `Self`.
    ///
    /// Must reject any value outside `[lowest, max]` (infinities and NaN included) as `Rejection::OutOfRange`.
    fn parse_float(_token: &str) -> Result<Self, Rejection> {
        Err(Rejection::OutOfRange)
    }
}

macro_rules! numeric_integer {
    ($class:ident: $($t:ty),+) => {
        $(
            impl Numeric for $t {
                const CLASS: NumericClass = NumericClass::$class { bits: <$t>::BITS };

                fn from_integer(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }

            impl Coerce for $t {
                fn coerce(token: &str) -> Result<Self, ConversionError> {
                    coerce_numeric(token)
                }
            }
        )+
    };
}

numeric_integer!(Signed: i8, i16, i32, i64, i128, isize);
numeric_integer!(Unsigned: u8, u16, u32, u64, usize);

macro_rules! numeric_float {
    ($($t:ty),+) => {
        $(
            impl Numeric for $t {
                const CLASS: NumericClass = NumericClass::Float {
                    bits: std::mem::size_of::<$t>() as u32 * 8,
                };

                // Parsed at the target width, so the value is rounded exactly once.
                fn parse_float(token: &str) -> Result<Self, Rejection> {
                    let value = token.parse::<$t>().map_err(|_| Rejection::Malformed)?;

                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err(Rejection::OutOfRange)
                    }
                }
            }

            impl Coerce for $t {
                fn coerce(token: &str) -> Result<Self, ConversionError> {
                    coerce_numeric(token)
                }
            }
        )+
    };
}

numeric_float!(f32, f64);

impl Coerce for String {
    fn coerce(token: &str) -> Result<Self, ConversionError> {
        Ok(token.to_string())
    }
}

/// Coerce `token` into `T`.
pub fn coerce<T: Coerce>(token: &str) -> Result<T, ConversionError> {
    T::coerce(token)
}

/// Coerce `token` into the number `T`, reading integers in decimal.
pub fn coerce_numeric<T: Numeric>(token: &str) -> Result<T, ConversionError> {
    coerce_radix(token, Radix::DECIMAL)
}

/// Coerce `token` into the number `T`, reading integers in `radix`.
///
/// Success requires both that the entire token is consumed by the parser, and that the parsed value fits in `T`.
/// The parse always happens first; so `"-1"` into an unsigned type is `Rejection::OutOfRange`, not `Rejection::Malformed`.
pub fn coerce_radix<T: Numeric>(token: &str, radix: Radix) -> Result<T, ConversionError> {
    let result = if T::CLASS.is_integer() {
        parse_integer(token, radix).and_then(|value| T::from_integer(value).ok_or(Rejection::OutOfRange))
    } else {
        parse_float(token, radix)
    };

    result.map_err(|rejection| {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Rejected '{token}' as {} ({}, {radix}): {rejection}.",
                std::any::type_name::<T>(),
                T::CLASS
            );
        }

        ConversionError::new::<T>(token, rejection)
    })
}

// Parses at the maximal width, accepting a leading sign regardless of the target's signedness.
fn parse_integer(token: &str, radix: Radix) -> Result<i128, Rejection> {
    let digits = strip_radix_prefix(token, radix)?;

    i128::from_str_radix(&digits, radix.value()).map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Rejection::OutOfRange,
        _ => Rejection::Malformed,
    })
}

fn strip_radix_prefix(token: &str, radix: Radix) -> Result<Cow<'_, str>, Rejection> {
    if radix != Radix::HEXADECIMAL {
        return Ok(Cow::Borrowed(token));
    }

    let (sign, unsigned) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token.strip_prefix('+').unwrap_or(token)),
    };

    match HEXADECIMAL_PREFIXES
        .iter()
        .find_map(|prefix| unsigned.strip_prefix(prefix))
    {
        // A second sign may not hide behind the prefix.
        Some(rest) if rest.starts_with(['+', '-']) => Err(Rejection::Malformed),
        Some(rest) => Ok(Cow::Owned(format!("{sign}{rest}"))),
        None => Ok(Cow::Borrowed(token)),
    }
}

fn parse_float<T: Numeric>(token: &str, radix: Radix) -> Result<T, Rejection> {
    if radix != Radix::DECIMAL {
        return Err(Rejection::Malformed);
    }

    T::parse_float(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    enum Level {
        Low = 1,
        High = 7,
    }

    impl Numeric for Level {
        const CLASS: NumericClass = <u8 as Numeric>::CLASS;

        fn from_integer(value: i128) -> Option<Self> {
            match <u8 as Numeric>::from_integer(value)? {
                v if v == Level::Low as u8 => Some(Level::Low),
                v if v == Level::High as u8 => Some(Level::High),
                _ => None,
            }
        }
    }

    #[test]
    fn coerce_basic() {
        assert_eq!(coerce::<u8>("1").unwrap(), 1);
        assert_eq!(coerce::<i32>("128").unwrap(), 128);
        assert_eq!(coerce::<f64>("128").unwrap(), 128.0);
        assert_eq!(coerce::<f64>("128.123").unwrap(), 128.123);
        assert_eq!(coerce::<f32>("0.5").unwrap(), 0.5);
        assert_eq!(coerce::<String>("hello").unwrap(), "hello");
        assert_eq!(coerce::<String>("").unwrap(), "");
    }

    #[rstest]
    #[case("+5", 5)]
    #[case("-0", 0)]
    #[case("0127", 127)]
    #[case("-128", -128)]
    fn coerce_signed_edges(#[case] token: &str, #[case] expected: i8) {
        assert_eq!(coerce::<i8>(token).unwrap(), expected);
    }

    #[rstest]
    #[case("128abc")]
    #[case("12 ")]
    #[case(" 12")]
    #[case("")]
    #[case("-")]
    #[case("+")]
    #[case("0.1")]
    #[case("1e3")]
    #[case("0x10")]
    fn coerce_malformed(#[case] token: &str) {
        let error = coerce::<i32>(token).unwrap_err();
        assert_eq!(error.token, token);
        assert_eq!(error.type_name, "i32");
        assert_eq!(error.rejection, Rejection::Malformed);
    }

    #[rstest]
    #[case::negative_unsigned(coerce::<u8>("-1"))]
    #[case::above_u8(coerce::<u8>("256"))]
    fn coerce_out_of_range_unsigned(#[case] result: Result<u8, ConversionError>) {
        assert_matches!(
            result,
            Err(ConversionError {
                rejection: Rejection::OutOfRange,
                ..
            })
        );
    }

    #[rstest]
    #[case("128", Rejection::OutOfRange)]
    #[case("-129", Rejection::OutOfRange)]
    #[case("0.1", Rejection::Malformed)]
    #[case("99999999999999999999999999999999999999999999", Rejection::OutOfRange)]
    fn coerce_limits_i8(#[case] token: &str, #[case] rejection: Rejection) {
        assert_eq!(coerce::<i8>(token).unwrap_err().rejection, rejection);
    }

    #[test]
    fn coerce_unsigned_full_width() {
        assert_eq!(coerce::<u64>(&u64::MAX.to_string()).unwrap(), u64::MAX);
        assert_eq!(
            coerce::<u64>("18446744073709551616").unwrap_err().rejection,
            Rejection::OutOfRange
        );
        assert_eq!(coerce::<i64>(&i64::MIN.to_string()).unwrap(), i64::MIN);
    }

    #[rstest]
    #[case("inf", Rejection::OutOfRange)]
    #[case("-inf", Rejection::OutOfRange)]
    #[case("NaN", Rejection::OutOfRange)]
    #[case("1.5x", Rejection::Malformed)]
    #[case("", Rejection::Malformed)]
    fn coerce_float_rejections(#[case] token: &str, #[case] rejection: Rejection) {
        assert_eq!(coerce::<f64>(token).unwrap_err().rejection, rejection);
    }

    #[rstest]
    #[case("0.5", 0.5)]
    #[case("-1.25", -1.25)]
    #[case("3.4028235e38", f32::MAX)]
    #[case("1.00000005960464477539062500000000001", 1.0000001)]
    #[case("0.1", 0.1)]
    fn coerce_f32_precision(#[case] token: &str, #[case] expected: f32) {
        assert_eq!(coerce::<f32>(token).unwrap(), expected);
        assert_eq!(coerce::<f32>(token).unwrap(), token.parse::<f32>().unwrap());
    }

    #[rstest]
    #[case("1e39", Rejection::OutOfRange)]
    #[case("-1e39", Rejection::OutOfRange)]
    #[case("inf", Rejection::OutOfRange)]
    #[case("NaN", Rejection::OutOfRange)]
    #[case("0.5f", Rejection::Malformed)]
    #[case("", Rejection::Malformed)]
    fn coerce_f32_rejections(#[case] token: &str, #[case] rejection: Rejection) {
        assert_eq!(coerce::<f32>(token).unwrap_err().rejection, rejection);
    }

    #[test]
    fn coerce_f32_narrower_than_f64() {
        assert_eq!(coerce::<f64>("1e39").unwrap(), 1e39);
        assert_eq!(
            coerce::<f64>("1.00000005960464477539062500000000001").unwrap(),
            1.0 + 2f64.powi(-24)
        );
    }

    #[test]
    fn coerce_without_hook() {
        #[derive(Debug)]
        struct Ratio;

        impl Numeric for Ratio {
            const CLASS: NumericClass = NumericClass::Float { bits: 64 };
        }

        #[derive(Debug)]
        struct Count;

        impl Numeric for Count {
            const CLASS: NumericClass = NumericClass::Unsigned { bits: 8 };
        }

        assert_matches!(
            coerce_numeric::<Ratio>("1.5"),
            Err(ConversionError {
                rejection: Rejection::OutOfRange,
                ..
            })
        );
        assert_matches!(
            coerce_numeric::<Ratio>("abc"),
            Err(ConversionError {
                rejection: Rejection::OutOfRange,
                ..
            })
        );
        assert_matches!(
            coerce_numeric::<Count>("1"),
            Err(ConversionError {
                rejection: Rejection::OutOfRange,
                ..
            })
        );
        assert_matches!(
            coerce_numeric::<Count>("abc"),
            Err(ConversionError {
                rejection: Rejection::Malformed,
                ..
            })
        );
    }

    #[cfg(feature = "tracing_debug")]
    #[test]
    fn coerce_rejection_traced() {
        assert_eq!(
            coerce_radix::<u8>("0x100", Radix::HEXADECIMAL)
                .unwrap_err()
                .rejection,
            Rejection::OutOfRange
        );
        assert_eq!(
            coerce::<f32>("x").unwrap_err().rejection,
            Rejection::Malformed
        );
    }

    #[rstest]
    #[case("ff", Radix::HEXADECIMAL, 255)]
    #[case("0xff", Radix::HEXADECIMAL, 255)]
    #[case("0XFF", Radix::HEXADECIMAL, 255)]
    #[case("-0x10", Radix::HEXADECIMAL, -16)]
    #[case("+0x10", Radix::HEXADECIMAL, 16)]
    #[case("777", Radix::OCTAL, 511)]
    #[case("-101", Radix::BINARY, -5)]
    fn coerce_radix_ok(#[case] token: &str, #[case] radix: Radix, #[case] expected: i32) {
        assert_eq!(coerce_radix::<i32>(token, radix).unwrap(), expected);
    }

    #[rstest]
    #[case("0x", Radix::HEXADECIMAL)]
    #[case("0x-5", Radix::HEXADECIMAL)]
    #[case("0x+5", Radix::HEXADECIMAL)]
    #[case("0b101", Radix::BINARY)]
    #[case("8", Radix::OCTAL)]
    #[case("0xff", Radix::DECIMAL)]
    fn coerce_radix_malformed(#[case] token: &str, #[case] radix: Radix) {
        assert_eq!(
            coerce_radix::<i32>(token, radix).unwrap_err().rejection,
            Rejection::Malformed
        );
    }

    #[test]
    fn coerce_radix_float() {
        assert_eq!(coerce_radix::<f64>("1.5", Radix::DECIMAL).unwrap(), 1.5);
        assert_eq!(
            coerce_radix::<f64>("10", Radix::HEXADECIMAL)
                .unwrap_err()
                .rejection,
            Rejection::Malformed
        );
    }

    #[test]
    fn coerce_radix_unsigned_negative() {
        assert_eq!(
            coerce_radix::<u16>("-0x1", Radix::HEXADECIMAL)
                .unwrap_err()
                .rejection,
            Rejection::OutOfRange
        );
    }

    #[rstest]
    #[case("1", Ok(Level::Low))]
    #[case("7", Ok(Level::High))]
    #[case("2", Err(Rejection::OutOfRange))]
    #[case("-1", Err(Rejection::OutOfRange))]
    #[case("256", Err(Rejection::OutOfRange))]
    #[case("low", Err(Rejection::Malformed))]
    fn coerce_enum_underlying(#[case] token: &str, #[case] expected: Result<Level, Rejection>) {
        let result = coerce_numeric::<Level>(token).map_err(|error| error.rejection);
        assert_eq!(result, expected);
    }

    #[test]
    fn coerce_enum_classification() {
        assert_eq!(Level::CLASS, NumericClass::Unsigned { bits: 8 });
        assert_eq!(i16::CLASS, NumericClass::Signed { bits: 16 });
        assert_eq!(f32::CLASS, NumericClass::Float { bits: 32 });
    }

    #[test]
    fn round_trip_i8() {
        for v in i8::MIN..=i8::MAX {
            assert_eq!(coerce::<i8>(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn round_trip_u8() {
        for v in u8::MIN..=u8::MAX {
            assert_eq!(coerce::<u8>(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn round_trip_i32() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(coerce::<i32>(&v.to_string()).unwrap(), v);
        }

        for _ in 0..1000 {
            let v: i32 = thread_rng().gen();
            assert_eq!(coerce::<i32>(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn round_trip_u32() {
        for v in [u32::MIN, 1, u32::MAX] {
            assert_eq!(coerce::<u32>(&v.to_string()).unwrap(), v);
        }

        for _ in 0..1000 {
            let v: u32 = thread_rng().gen();
            assert_eq!(coerce::<u32>(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn round_trip_f64() {
        for v in [f64::MIN, -1.5, 0.0, f64::MIN_POSITIVE, 128.123, f64::MAX] {
            assert_eq!(coerce::<f64>(&v.to_string()).unwrap(), v);
        }

        for _ in 0..1000 {
            let v: f64 = thread_rng().gen_range(-1.0e300..1.0e300);
            assert_eq!(coerce::<f64>(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn round_trip_f32() {
        for v in [f32::MIN, -1.5, 0.0, f32::MIN_POSITIVE, 128.123, f32::MAX] {
            assert_eq!(coerce::<f32>(&v.to_string()).unwrap(), v);
        }

        for _ in 0..1000 {
            let v: f32 = thread_rng().gen_range(-1.0e30..1.0e30);
            assert_eq!(coerce::<f32>(&v.to_string()).unwrap(), v);
        }

        for _ in 0..1000 {
            let v: f32 = thread_rng().gen();
            assert_eq!(coerce::<f32>(&v.to_string()).unwrap(), v);
        }
    }
}
