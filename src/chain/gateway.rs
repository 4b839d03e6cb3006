use alloy::primitives::{Address, U256};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Aave contracts resolved through a lending pool addresses provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AaveContracts {
    pub addresses_provider: Address,
    pub lending_pool: Address,
    pub lending_pool_core: Address,
    pub price_oracle: Address,
}

/// Per-user state of one Aave reserve, as returned by `getUserReserveData`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserReserveData {
    pub current_a_token_balance: U256,
    pub current_borrow_balance: U256,
    pub principal_borrow_balance: U256,
    pub borrow_rate_mode: U256,
    pub borrow_rate: U256,
    pub liquidity_rate: U256,
    pub origination_fee: U256,
    pub variable_borrow_index: U256,
    pub last_update_timestamp: U256,
    pub usage_as_collateral_enabled: bool,
}

/// Reserves of a Uniswap pair, in pair (token0, token1) order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairReserves {
    pub reserve0: U256,
    pub reserve1: U256,
    pub block_timestamp_last: u32,
}

/// Read-only access to the Aave lending protocol.
///
/// Every method is a single view call against the contract address passed in.
#[async_trait]
pub trait AaveGateway: Send + Sync {
    async fn resolve_contracts(&self, addresses_provider: Address) -> Result<AaveContracts>;

    async fn user_reserve_data(
        &self,
        lending_pool: Address,
        reserve: Address,
        user: Address,
    ) -> Result<UserReserveData>;

    async fn asset_price(&self, price_oracle: Address, asset: Address) -> Result<U256>;
}

/// Read-only access to Uniswap v2 periphery and core contracts
#[async_trait]
pub trait UniswapGateway: Send + Sync {
    async fn router_factory(&self, router: Address) -> Result<Address>;

    async fn router_weth(&self, router: Address) -> Result<Address>;

    /// Pair registered in the factory, `Address::ZERO` when none exists
    async fn factory_pair(&self, factory: Address, token_a: Address, token_b: Address)
        -> Result<Address>;

    async fn pair_reserves(&self, pair: Address) -> Result<PairReserves>;
}

/// Everything `ReFi` needs from the chain
pub trait ChainGateway: AaveGateway + UniswapGateway {}

impl<T: AaveGateway + UniswapGateway> ChainGateway for T {}
