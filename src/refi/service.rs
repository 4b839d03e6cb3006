use crate::chain::{AaveContracts, ChainGateway, RpcGateway, UserReserveData};
use crate::errors::{RefiError, RefiResult};
use crate::refi::math::equivalent_amount;
use crate::refi::pair::{pair_for, pair_for_ordered, sort_tokens, INIT_CODE_HASH};
use crate::refi::protocol::Protocol;
use alloy::primitives::{Address, B256, U256};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Uniswap contracts resolved through a v2 router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniswapContracts {
    pub router: Address,
    pub factory: Address,
    pub weth: Option<Address>,
}

/// A pair address together with the factory it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniswapPair {
    pub factory: Address,
    pub pair: Address,
}

/// Reads borrow positions from Aave and pair data from Uniswap.
///
/// Protocol entry points are set once through `set_aave_contracts` and
/// `set_uniswap_router`; every query afterwards goes through the addresses
/// they resolved.
pub struct ReFi<G> {
    gateway: G,
    init_code_hash: B256,
    aave: RwLock<Option<AaveContracts>>,
    uniswap: RwLock<Option<UniswapContracts>>,
}

pub type RpcReFi = ReFi<RpcGateway>;

impl<G> ReFi<G>
where
    G: ChainGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            init_code_hash: INIT_CODE_HASH,
            aave: RwLock::new(None),
            uniswap: RwLock::new(None),
        }
    }

    /// Use a different pair creation code hash, for Uniswap v2 forks
    pub fn with_init_code_hash(mut self, init_code_hash: B256) -> Self {
        self.init_code_hash = init_code_hash;
        self
    }

    /// Point at an Aave deployment through its addresses provider
    pub async fn set_aave_contracts(&self, addresses_provider: Address) -> RefiResult<AaveContracts> {
        let contracts = self.gateway.resolve_contracts(addresses_provider).await?;
        info!(
            "Aave contracts set: provider {}, lending pool {}, core {}, oracle {}",
            contracts.addresses_provider,
            contracts.lending_pool,
            contracts.lending_pool_core,
            contracts.price_oracle
        );
        *self.aave.write().await = Some(contracts);
        Ok(contracts)
    }

    pub async fn aave_contracts(&self) -> RefiResult<AaveContracts> {
        self.aave.read().await.ok_or(RefiError::AaveNotConfigured)
    }

    /// Point at a Uniswap v2 deployment through its router
    pub async fn set_uniswap_router(&self, router: Address) -> RefiResult<UniswapContracts> {
        let factory = self.gateway.router_factory(router).await?;
        let weth = match self.gateway.router_weth(router).await {
            Ok(weth) => Some(weth),
            Err(e) => {
                warn!("Router {} does not expose WETH: {:#}", router, e);
                None
            }
        };
        let contracts = UniswapContracts {
            router,
            factory,
            weth,
        };
        info!("Uniswap router set: router {}, factory {}", router, factory);
        *self.uniswap.write().await = Some(contracts);
        Ok(contracts)
    }

    pub async fn uniswap_contracts(&self) -> RefiResult<UniswapContracts> {
        self.uniswap.read().await.ok_or(RefiError::UniswapNotConfigured)
    }

    pub async fn get_aave_user_reserve_data(
        &self,
        reserve: Address,
        user: Address,
    ) -> RefiResult<UserReserveData> {
        let contracts = self.aave_contracts().await?;
        let data = self
            .gateway
            .user_reserve_data(contracts.lending_pool, reserve, user)
            .await?;
        Ok(data)
    }

    /// Current borrow balance of `user` in `reserve`, interest included
    pub async fn get_aave_borrow_balance(&self, reserve: Address, user: Address) -> RefiResult<U256> {
        let data = self.get_aave_user_reserve_data(reserve, user).await?;
        debug!(
            "Aave borrow balance of {} in {}: {}",
            user, reserve, data.current_borrow_balance
        );
        Ok(data.current_borrow_balance)
    }

    pub async fn get_aave_asset_price(&self, asset: Address) -> RefiResult<U256> {
        let contracts = self.aave_contracts().await?;
        let price = self.gateway.asset_price(contracts.price_oracle, asset).await?;
        Ok(price)
    }

    /// Value of `amount` of `reserve` expressed in `other_reserve`, using the
    /// Aave price oracle for both assets.
    pub async fn get_aave_equivalent_borrow_balance(
        &self,
        reserve: Address,
        other_reserve: Address,
        amount: U256,
    ) -> RefiResult<U256> {
        let contracts = self.aave_contracts().await?;
        let oracle = contracts.price_oracle;
        let (reserve_price, other_price) = futures::try_join!(
            self.gateway.asset_price(oracle, reserve),
            self.gateway.asset_price(oracle, other_reserve),
        )?;

        if other_price.is_zero() {
            return Err(RefiError::ZeroPrice(other_reserve));
        }
        let equivalent = equivalent_amount(amount, reserve_price, other_price)?;
        debug!(
            "{} of {} (price {}) is {} of {} (price {})",
            amount, reserve, reserve_price, equivalent, other_reserve, other_price
        );
        Ok(equivalent)
    }

    pub async fn get_borrow_balance(
        &self,
        protocol: Protocol,
        reserve: Address,
        user: Address,
    ) -> RefiResult<U256> {
        match protocol {
            Protocol::Aave => self.get_aave_borrow_balance(reserve, user).await,
        }
    }

    pub async fn get_equivalent_borrow_balance(
        &self,
        protocol: Protocol,
        reserve: Address,
        other_reserve: Address,
        amount: U256,
    ) -> RefiResult<U256> {
        match protocol {
            Protocol::Aave => {
                self.get_aave_equivalent_borrow_balance(reserve, other_reserve, amount)
                    .await
            }
        }
    }

    /// Pair address for the tokens in the order given. Callers are expected
    /// to pass them already sorted.
    pub async fn get_uniswap_pair(&self, token0: Address, token1: Address) -> RefiResult<Address> {
        Ok(self.lookup_uniswap_pair(token0, token1, false).await?.pair)
    }

    pub async fn get_canonical_uniswap_pair(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> RefiResult<Address> {
        Ok(self.lookup_uniswap_pair(token_a, token_b, true).await?.pair)
    }

    /// Derive a pair address, sorting the tokens first when `canonical` is set.
    /// The factory and the pair come from the same router settings.
    pub async fn lookup_uniswap_pair(
        &self,
        token_a: Address,
        token_b: Address,
        canonical: bool,
    ) -> RefiResult<UniswapPair> {
        let contracts = self.uniswap_contracts().await?;
        let pair = if canonical {
            pair_for(contracts.factory, token_a, token_b, self.init_code_hash)?
        } else {
            pair_for_ordered(contracts.factory, token_a, token_b, self.init_code_hash)
        };
        Ok(UniswapPair {
            factory: contracts.factory,
            pair,
        })
    }

    /// Pair the factory has actually deployed, if any
    pub async fn get_registered_uniswap_pair(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> RefiResult<Option<Address>> {
        let found = self.lookup_registered_uniswap_pair(token_a, token_b).await?;
        Ok(found.map(|p| p.pair))
    }

    pub async fn lookup_registered_uniswap_pair(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> RefiResult<Option<UniswapPair>> {
        let contracts = self.uniswap_contracts().await?;
        sort_tokens(token_a, token_b)?;
        let pair = self
            .gateway
            .factory_pair(contracts.factory, token_a, token_b)
            .await?;
        Ok((!pair.is_zero()).then_some(UniswapPair {
            factory: contracts.factory,
            pair,
        }))
    }

    /// Reserves of the pair for two tokens, in argument order
    pub async fn get_uniswap_reserves(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> RefiResult<(U256, U256)> {
        let (_, reserve_a, reserve_b) = self.lookup_uniswap_reserves(token_a, token_b).await?;
        Ok((reserve_a, reserve_b))
    }

    pub async fn lookup_uniswap_reserves(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> RefiResult<(UniswapPair, U256, U256)> {
        let (token0, _) = sort_tokens(token_a, token_b)?;
        let found = self.lookup_uniswap_pair(token_a, token_b, true).await?;
        let reserves = self.gateway.pair_reserves(found.pair).await?;
        if token_a == token0 {
            Ok((found, reserves.reserve0, reserves.reserve1))
        } else {
            Ok((found, reserves.reserve1, reserves.reserve0))
        }
    }
}
