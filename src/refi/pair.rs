use crate::errors::{RefiError, RefiResult};
use alloy::primitives::{b256, keccak256, Address, B256};

/// keccak256 of the UniswapV2Pair creation code
pub const INIT_CODE_HASH: B256 =
    b256!("96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

/// Order two tokens the way the Uniswap v2 factory stores them
pub fn sort_tokens(token_a: Address, token_b: Address) -> RefiResult<(Address, Address)> {
    if token_a == token_b {
        return Err(RefiError::IdenticalAddresses);
    }
    let (token0, token1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    if token0.is_zero() {
        return Err(RefiError::ZeroAddress);
    }
    Ok((token0, token1))
}

/// CREATE2 address of the pair for `token0`/`token1`, hashed in the order given.
///
/// Only tokens already in factory order yield the deployed pair.
pub fn pair_for_ordered(
    factory: Address,
    token0: Address,
    token1: Address,
    init_code_hash: B256,
) -> Address {
    let salt = keccak256([token0.as_slice(), token1.as_slice()].concat());
    factory.create2(salt.0, init_code_hash.0)
}

/// CREATE2 address of the pair for two tokens in any order
pub fn pair_for(
    factory: Address,
    token_a: Address,
    token_b: Address,
    init_code_hash: B256,
) -> RefiResult<Address> {
    let (token0, token1) = sort_tokens(token_a, token_b)?;
    Ok(pair_for_ordered(factory, token0, token1, init_code_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const FACTORY: Address = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
    const DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
    const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
    const DAI_WETH: Address = address!("a478c2975ab1ea89e8196811f51a7b7ade33eb11");
    const USDC_WETH: Address = address!("b4e16d0168e52d35cacd2c6185b44281ec28c9dc");

    #[test]
    fn test_sort_tokens() {
        assert_eq!(sort_tokens(DAI, WETH).unwrap(), (DAI, WETH));
        assert_eq!(sort_tokens(WETH, DAI).unwrap(), (DAI, WETH));
    }

    #[test]
    fn test_sort_tokens_rejects_identical() {
        let err = sort_tokens(DAI, DAI).unwrap_err();
        assert!(matches!(err, RefiError::IdenticalAddresses));
    }

    #[test]
    fn test_sort_tokens_rejects_zero() {
        let err = sort_tokens(Address::ZERO, WETH).unwrap_err();
        assert!(matches!(err, RefiError::ZeroAddress));
    }

    #[test]
    fn test_pair_for_ordered_matches_mainnet() {
        assert_eq!(pair_for_ordered(FACTORY, DAI, WETH, INIT_CODE_HASH), DAI_WETH);
        assert_eq!(pair_for_ordered(FACTORY, USDC, WETH, INIT_CODE_HASH), USDC_WETH);
    }

    #[test]
    fn test_pair_for_ordered_is_order_sensitive() {
        assert_ne!(pair_for_ordered(FACTORY, WETH, DAI, INIT_CODE_HASH), DAI_WETH);
    }

    #[test]
    fn test_pair_for_is_canonical() {
        assert_eq!(pair_for(FACTORY, DAI, WETH, INIT_CODE_HASH).unwrap(), DAI_WETH);
        assert_eq!(pair_for(FACTORY, WETH, DAI, INIT_CODE_HASH).unwrap(), DAI_WETH);
    }

    #[test]
    fn test_pair_for_depends_on_init_code_hash() {
        let other = pair_for(FACTORY, DAI, WETH, B256::ZERO).unwrap();
        assert_ne!(other, DAI_WETH);
    }
}
