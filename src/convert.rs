use thiserror::Error;

use crate::model::Advance;

/// A conversion failure.
/// The rendered message is the user-facing diagnostic; the engine propagates
/// it verbatim without re-describing the failure.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("failed to parse '{text}' as {type_name}.")]
pub struct ConvertError {
    text: String,
    type_name: &'static str,
}

impl ConvertError {
    /// Create a conversion error for the given input text and target type name.
    pub fn new(text: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            text: text.into(),
            type_name,
        }
    }
}

/// A value converter: translate the front of `text` into a `T`, reporting how
/// far consumption proceeded.
///
/// * Positional and long-flag contexts require the whole text to be consumed
///   ([`Advance::Consumed`]).
/// * Short-flag contexts may stop early ([`Advance::Rest`]), leaving the
///   remainder of a combined run for subsequent flags.
pub type Converter<T> = fn(&str) -> Result<(T, Advance), ConvertError>;

/// Behaviour to build a value from the front of an argument token.
///
/// Implemented for the built-in primitive types; implement it for your own
/// types to use them in declarations without an explicit converter.
pub trait FromToken: Sized {
    /// Convert the front of `text` into `Self`.
    fn from_token(text: &str) -> Result<(Self, Advance), ConvertError>;
}

impl FromToken for String {
    fn from_token(text: &str) -> Result<(Self, Advance), ConvertError> {
        Ok((text.to_string(), Advance::Consumed))
    }
}

impl FromToken for char {
    fn from_token(text: &str) -> Result<(Self, Advance), ConvertError> {
        match text.chars().next() {
            Some(c) => Ok((c, Advance::over(text, c.len_utf8()))),
            None => Err(ConvertError::new(text, "char")),
        }
    }
}

// strtol-style: a sign followed by digits.
fn integer_prefix(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    end
}

macro_rules! integer_from_token {
    ($($t:ty),* $(,)?) => {$(
        impl FromToken for $t {
            fn from_token(text: &str) -> Result<(Self, Advance), ConvertError> {
                let end = integer_prefix(text);
                let value = text[..end]
                    .parse::<$t>()
                    .map_err(|_| ConvertError::new(text, stringify!($t)))?;
                Ok((value, Advance::over(text, end)))
            }
        }
    )*};
}

integer_from_token!(i32, i64, i128, isize, u32, u64, u128, usize);

// Greedily take characters that may appear in a floating point literal.
// The result is a candidate only; the caller shrinks it until it parses
// (strtod-style longest valid prefix).
fn float_prefix(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let plausible = b.is_ascii_digit()
            || b == b'.'
            || b == b'e'
            || b == b'E'
            || ((b == b'+' || b == b'-')
                && (i == 0 || matches!(bytes[i - 1], b'e' | b'E')));

        if plausible {
            end = i + 1;
        } else {
            break;
        }
    }

    end
}

macro_rules! float_from_token {
    ($($t:ty),* $(,)?) => {$(
        impl FromToken for $t {
            fn from_token(text: &str) -> Result<(Self, Advance), ConvertError> {
                let mut end = float_prefix(text);

                while end > 0 && text[..end].parse::<$t>().is_err() {
                    end -= 1;
                }

                if end == 0 {
                    return Err(ConvertError::new(text, stringify!($t)));
                }

                let value = text[..end]
                    .parse::<$t>()
                    .map_err(|_| ConvertError::new(text, stringify!($t)))?;

                // The prefix scan never admits 'inf'/'nan' spellings, so a
                // non-finite result can only mean out-of-range magnitude.
                if !value.is_finite() {
                    return Err(ConvertError::new(text, stringify!($t)));
                }

                Ok((value, Advance::over(text, end)))
            }
        }
    )*};
}

float_from_token!(f32, f64);
