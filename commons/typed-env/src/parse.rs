//! Conversion of a single raw token into a typed value.

use crate::error::ParseError;

/// Types that can be read from the textual value of a variable.
pub trait FromEnvStr: Sized {
    fn from_env_str(raw: &str) -> Result<Self, ParseError>;
}

macro_rules! impl_from_env_str_int {
    (signed: $($t:ty),*; unsigned: $($u:ty),* $(,)?) => {
        $(
            impl FromEnvStr for $t {
                #[inline]
                fn from_env_str(raw: &str) -> Result<Self, ParseError> {
                    // decimal only, std already rejects whitespace and `_`
                    Ok(raw.parse::<$t>()?)
                }
            }
        )*
        $(
            impl FromEnvStr for $u {
                #[inline]
                fn from_env_str(raw: &str) -> Result<Self, ParseError> {
                    // std accepts `+5` for unsigned types, no sign is allowed here
                    if raw.starts_with('+') {
                        return Err(ParseError::UnsignedSign);
                    }
                    Ok(raw.parse::<$u>()?)
                }
            }
        )*
    };
}

impl_from_env_str_int!(
    signed: i8, i16, i32, i64, isize;
    unsigned: u8, u16, u32, u64, usize,
);

macro_rules! impl_from_env_str_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromEnvStr for $t {
                fn from_env_str(raw: &str) -> Result<Self, ParseError> {
                    let value = raw.parse::<$t>()?;
                    if value.is_infinite() && !spells_infinity(raw) {
                        return Err(ParseError::FloatOutOfRange);
                    }
                    Ok(value)
                }
            }
        )*
    };
}

impl_from_env_str_float!(f32, f64);

/// True when the literal itself names infinity rather than overflowing to it.
fn spells_infinity(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

impl FromEnvStr for bool {
    fn from_env_str(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ParseError::Bool),
        }
    }
}

impl FromEnvStr for String {
    #[inline]
    fn from_env_str(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_owned())
    }
}

/// Splits `raw` on the literal `sep`.
///
/// An empty separator yields one segment per character; an empty value yields
/// a single empty segment.
pub(crate) fn split_segments<'a>(raw: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        return raw
            .char_indices()
            .map(|(i, c)| &raw[i..i + c.len_utf8()])
            .collect();
    }
    raw.split(sep).collect()
}

/// Converts every segment, failing on the first bad one with its index.
pub(crate) fn parse_segments<T: FromEnvStr>(
    raw: &str,
    sep: &str,
) -> Result<Vec<T>, (usize, ParseError)> {
    split_segments(raw, sep)
        .into_iter()
        .enumerate()
        .map(|(i, s)| T::from_env_str(s).map_err(|e| (i, e)))
        .collect()
}
