//! Turn tokens into numbers.

use crate::{Error, Result, Vector, tokenizer::Tokens};
use num_traits::{Float, NumCast, Unsigned};
use std::{num::ParseFloatError, str::FromStr};

/// Parses a token as a float.
pub(crate) fn parse_float<T>(token: &str) -> Result<T>
where
    T: Float + FromStr<Err = ParseFloatError>,
{
    token.parse().map_err(|source| Error::ParseFloat {
        token: token.to_string(),
        source,
    })
}

/// Parses a token as an unsigned integer, then narrows it to `T`.
///
/// Values that don't fit in `T` are errors, not truncations.
pub(crate) fn parse_unsigned<T>(token: &str) -> Result<T>
where
    T: Unsigned + NumCast,
{
    let value: u64 = token.parse().map_err(|source| Error::ParseInt {
        token: token.to_string(),
        source,
    })?;
    num_traits::cast(value).ok_or_else(|| Error::OutOfRange {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

/// Parses the first three tokens as a vector, ignoring any others.
pub(crate) fn parse_vector(tokens: &Tokens<'_>) -> Result<Vector<f64>> {
    match (tokens.get(0), tokens.get(1), tokens.get(2)) {
        (Some(x), Some(y), Some(z)) => Ok(Vector::new(
            parse_float(x)?,
            parse_float(y)?,
            parse_float(z)?,
        )),
        _ => Err(Error::TokenCount {
            expected: 3,
            found: tokens.len(),
        }),
    }
}

/// Parses a line holding exactly one unsigned integer.
pub(crate) fn parse_count(tokens: &Tokens<'_>) -> Result<u32> {
    match tokens.get(0) {
        Some(token) if tokens.len() == 1 => parse_unsigned(token),
        _ => Err(Error::TokenCount {
            expected: 1,
            found: tokens.len(),
        }),
    }
}
