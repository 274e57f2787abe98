//! Integer math helpers

use crate::error::{LedgerError, LedgerResult};

/// Compute `floor(value * numerator / denominator)`.
///
/// The product is taken in `u128` so two `u64` operands cannot overflow the
/// intermediate; the result is checked back into `u64` range.
pub fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> LedgerResult<u64> {
    if denominator == 0 {
        return Err(LedgerError::DivisionByZero);
    }

    let wide = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    let result = wide / denominator as u128;

    if result > u64::MAX as u128 {
        return Err(LedgerError::ArithmeticOverflow);
    }

    Ok(result as u64)
}
