use crate::errors::{RefiError, RefiResult};
use alloy::primitives::U256;

/// One whole unit of an 18 decimal token
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Convert `amount` of an asset priced at `price_from` into the amount of an
/// asset priced at `price_to` that has the same value.
///
/// Both prices must share a denomination. The product is checked so an
/// overflow surfaces as an error, and the division truncates.
pub fn equivalent_amount(amount: U256, price_from: U256, price_to: U256) -> RefiResult<U256> {
    if price_to.is_zero() {
        return Err(RefiError::DivisionByZero);
    }
    let value = amount
        .checked_mul(price_from)
        .ok_or(RefiError::ArithmeticOverflow)?;
    Ok(value / price_to)
}

/// Parse a decimal amount string, as received over the API
pub fn parse_amount(amount: &str) -> Option<U256> {
    let trimmed = amount.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(trimmed, 10).ok()
}
