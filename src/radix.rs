//! Positional-notation decoding of digit strings in arbitrary bases.
//!
//! Share values arrive as digit strings in a declared base between 2 and 36.
//! Decoding accumulates into a `BigUint`, so the result is exact no matter
//! how long the digit string is; narrowing to the solver's working type is a
//! separate, fallible step performed by the point extraction layer.

use num::BigUint;

use crate::error::ReconstructError;

/// Map a single character to its digit value under the case-insensitive
/// alphabet ``'0'-'9' -> 0-9``, ``'a'-'z'/'A'-'Z' -> 10-35``.
fn digit_value(ch: char) -> Result<u32, ReconstructError> {
    match ch {
        '0'..='9' => Ok(ch as u32 - '0' as u32),
        'a'..='z' => Ok(ch as u32 - 'a' as u32 + 10),
        'A'..='Z' => Ok(ch as u32 - 'A' as u32 + 10),
        _ => Err(ReconstructError::InvalidDigit(ch)),
    }
}

/// Decode ``digits`` as an unsigned integer written in ``base``, most
/// significant digit first. The empty string decodes to zero.
/// #Parameters:
/// - `digits` the digit string to decode
/// - `base` the radix the string is written in, between 2 and 36 inclusive
///
/// #Output
/// Returns the exact integer value of the string, or an error if the base is
/// unsupported, a character is not a digit, or a digit is too large for the
/// base.
pub fn decode(digits: &str, base: u32) -> Result<BigUint, ReconstructError> {
    if base < 2 || base > 36 {
        return Err(ReconstructError::InvalidBase(base));
    }

    let mut result = BigUint::from(0u32);
    for ch in digits.chars() {
        let value = digit_value(ch)?;
        if value >= base {
            return Err(ReconstructError::DigitOutOfRange { digit: ch, base });
        }
        result = result * base + value;
    }
    Ok(result)
}
