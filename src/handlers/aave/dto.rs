use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{chain::AaveContracts, refi::Protocol};

/// Query parameters for borrow balance lookups
#[derive(Debug, Deserialize)]
pub struct BorrowBalanceQuery {
    pub reserve: String,
    pub user: String,
}

/// Query parameters for converting a balance between two reserves
#[derive(Debug, Deserialize)]
pub struct EquivalentBalanceQuery {
    pub reserve: String,
    pub other_reserve: String,
    pub amount: String,
}

/// Response model for borrow balance endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct BorrowBalanceResponse {
    pub protocol: Protocol,
    pub reserve: Address,
    pub user: Address,
    pub borrow_balance: String, // decimal, base units of the reserve
    pub queried_at: i64,
}

/// Response model for equivalent balance endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct EquivalentBalanceResponse {
    pub protocol: Protocol,
    pub reserve: Address,
    pub other_reserve: Address,
    pub amount: String,
    pub equivalent_amount: String,
    pub queried_at: i64,
}

/// Response model for the resolved Aave contracts
#[derive(Debug, Serialize, Deserialize)]
pub struct AaveContractsResponse {
    pub addresses_provider: Address,
    pub lending_pool: Address,
    pub lending_pool_core: Address,
    pub price_oracle: Address,
}

impl From<AaveContracts> for AaveContractsResponse {
    fn from(contracts: AaveContracts) -> Self {
        Self {
            addresses_provider: contracts.addresses_provider,
            lending_pool: contracts.lending_pool,
            lending_pool_core: contracts.lending_pool_core,
            price_oracle: contracts.price_oracle,
        }
    }
}

/// Request model for repointing the Aave contracts
#[derive(Debug, Deserialize)]
pub struct SetAaveContractsRequest {
    pub addresses_provider: String,
}
