#![allow(dead_code)]

use alloy::primitives::{address, Address, U256};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use refi::chain::{AaveContracts, AaveGateway, PairReserves, UniswapGateway, UserReserveData};
use refi::refi::WAD;
use refi::ReFi;
use std::collections::HashMap;

pub const DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
pub const FACTORY: Address = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
pub const DAI_WETH_PAIR: Address = address!("a478c2975ab1ea89e8196811f51a7b7ade33eb11");

pub const ADDRESSES_PROVIDER: Address = address!("00000000000000000000000000000000000000a1");
pub const LENDING_POOL: Address = address!("00000000000000000000000000000000000000a2");
pub const PRICE_ORACLE: Address = address!("00000000000000000000000000000000000000a3");
pub const ROUTER: Address = address!("00000000000000000000000000000000000000b1");
pub const USER: Address = address!("00000000000000000000000000000000000000c1");

const NOT_INITIALIZED: &str = "Mock on the method is not initialized";

pub fn ether(n: u64) -> U256 {
    U256::from(n) * WAD
}

/// In-memory stand-in for the protocol contracts.
///
/// Lookups that were not set up fail the same way an uninitialised mock
/// contract reverts.
#[derive(Debug, Default)]
pub struct MockChain {
    pub providers: HashMap<Address, AaveContracts>,
    /// Keyed by (lending pool, reserve, user)
    pub reserve_data: HashMap<(Address, Address, Address), UserReserveData>,
    pub prices: HashMap<(Address, Address), U256>,
    pub factories: HashMap<Address, Address>,
    pub weths: HashMap<Address, Address>,
    pub registered_pairs: HashMap<(Address, Address, Address), Address>,
    pub reserves: HashMap<Address, PairReserves>,
}

impl MockChain {
    /// Aave mocks: USER owes 1 DAI, DAI priced at 1
    /// and WETH at 200. Uniswap mocks: a router pointing at the mainnet
    /// factory.
    pub fn with_protocols() -> Self {
        let mut chain = MockChain::default();
        chain.providers.insert(
            ADDRESSES_PROVIDER,
            AaveContracts {
                addresses_provider: ADDRESSES_PROVIDER,
                lending_pool: LENDING_POOL,
                lending_pool_core: Address::ZERO,
                price_oracle: PRICE_ORACLE,
            },
        );
        chain.reserve_data.insert(
            (LENDING_POOL, DAI, USER),
            UserReserveData {
                current_borrow_balance: ether(1),
                ..Default::default()
            },
        );
        chain.prices.insert((PRICE_ORACLE, DAI), ether(1));
        chain.prices.insert((PRICE_ORACLE, WETH), ether(200));
        chain.factories.insert(ROUTER, FACTORY);
        chain.weths.insert(ROUTER, WETH);
        chain
    }
}

#[async_trait]
impl AaveGateway for MockChain {
    async fn resolve_contracts(&self, addresses_provider: Address) -> Result<AaveContracts> {
        self.providers
            .get(&addresses_provider)
            .copied()
            .ok_or_else(|| anyhow!(NOT_INITIALIZED))
    }

    async fn user_reserve_data(
        &self,
        lending_pool: Address,
        reserve: Address,
        user: Address,
    ) -> Result<UserReserveData> {
        self.reserve_data
            .get(&(lending_pool, reserve, user))
            .cloned()
            .ok_or_else(|| anyhow!(NOT_INITIALIZED))
    }

    async fn asset_price(&self, price_oracle: Address, asset: Address) -> Result<U256> {
        self.prices
            .get(&(price_oracle, asset))
            .copied()
            .ok_or_else(|| anyhow!(NOT_INITIALIZED))
    }
}

#[async_trait]
impl UniswapGateway for MockChain {
    async fn router_factory(&self, router: Address) -> Result<Address> {
        self.factories
            .get(&router)
            .copied()
            .ok_or_else(|| anyhow!(NOT_INITIALIZED))
    }

    async fn router_weth(&self, router: Address) -> Result<Address> {
        self.weths
            .get(&router)
            .copied()
            .ok_or_else(|| anyhow!(NOT_INITIALIZED))
    }

    async fn factory_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address> {
        let pair = self
            .registered_pairs
            .get(&(factory, token_a, token_b))
            .or_else(|| self.registered_pairs.get(&(factory, token_b, token_a)))
            .copied()
            .unwrap_or(Address::ZERO);
        Ok(pair)
    }

    async fn pair_reserves(&self, pair: Address) -> Result<PairReserves> {
        self.reserves
            .get(&pair)
            .copied()
            .ok_or_else(|| anyhow!(NOT_INITIALIZED))
    }
}

/// ReFi wired to the protocol mocks, with both protocols set
pub async fn refi_fixture(chain: MockChain) -> ReFi<MockChain> {
    let refi = ReFi::new(chain);
    refi.set_aave_contracts(ADDRESSES_PROVIDER).await.unwrap();
    refi.set_uniswap_router(ROUTER).await.unwrap();
    refi
}
