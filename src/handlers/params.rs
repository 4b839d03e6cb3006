use alloy::primitives::{Address, U256};

use crate::{errors::ApiError, refi::parse_amount};

/// Parse an address taken from a path, query or body
pub fn parse_address(field: &str, value: &str) -> Result<Address, ApiError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|e| ApiError::BadRequest(format!("Invalid {} address '{}': {}", field, value, e)))
}

/// Parse a non-negative decimal integer amount
pub fn parse_u256(field: &str, value: &str) -> Result<U256, ApiError> {
    parse_amount(value)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid {} amount '{}'", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_parse_address() {
        let addr = parse_address("reserve", "0x6b175474e89094c44da98b954eedeac495271d0f").unwrap();
        assert_eq!(addr, address!("6b175474e89094c44da98b954eedeac495271d0f"));
        assert!(parse_address("reserve", "0x6b17").is_err());
    }

    #[test]
    fn test_parse_u256() {
        assert_eq!(parse_u256("amount", "1000").unwrap(), U256::from(1000));
        assert!(matches!(
            parse_u256("amount", "ten"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
