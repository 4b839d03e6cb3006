use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::refi::UniswapContracts;

/// Query parameters naming two tokens
#[derive(Debug, Deserialize)]
pub struct PairQuery {
    pub token_a: String,
    pub token_b: String,
    /// Sort the tokens before deriving the pair
    #[serde(default)]
    pub canonical: bool,
}

/// Response model for pair lookups
#[derive(Debug, Serialize, Deserialize)]
pub struct PairResponse {
    pub token_a: Address,
    pub token_b: Address,
    pub factory: Address,
    pub pair: Address,
    pub canonical: bool,
    pub queried_at: i64,
}

/// Response model for pair reserves, ordered like the requested tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct ReservesResponse {
    pub token_a: Address,
    pub token_b: Address,
    pub pair: Address,
    pub reserve_a: String,
    pub reserve_b: String,
    pub queried_at: i64,
}

/// Response model for the router currently in use
#[derive(Debug, Serialize, Deserialize)]
pub struct UniswapContractsResponse {
    pub router: Address,
    pub factory: Address,
    pub weth: Option<Address>,
}

impl From<UniswapContracts> for UniswapContractsResponse {
    fn from(contracts: UniswapContracts) -> Self {
        Self {
            router: contracts.router,
            factory: contracts.factory,
            weth: contracts.weth,
        }
    }
}

/// Request model for repointing the Uniswap router
#[derive(Debug, Deserialize)]
pub struct SetRouterRequest {
    pub router: String,
}
