use crate::chain::contracts::{
    ILendingPool, ILendingPoolAddressesProvider, IPriceOracle, IUniswapV2Factory, IUniswapV2Pair,
    IUniswapV2Router01,
};
use crate::chain::gateway::{
    AaveContracts, AaveGateway, PairReserves, UniswapGateway, UserReserveData,
};
use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

/// Gateway backed by JSON-RPC `eth_call`s against a live node
#[derive(Clone)]
pub struct RpcGateway {
    provider: DynProvider,
}

impl RpcGateway {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AaveGateway for RpcGateway {
    async fn resolve_contracts(&self, addresses_provider: Address) -> Result<AaveContracts> {
        let instance = ILendingPoolAddressesProvider::new(addresses_provider, &self.provider);

        let lending_pool = instance
            .getLendingPool()
            .call()
            .await
            .with_context(|| format!("getLendingPool failed on {}", addresses_provider))?;
        let lending_pool_core = instance
            .getLendingPoolCore()
            .call()
            .await
            .with_context(|| format!("getLendingPoolCore failed on {}", addresses_provider))?;
        let price_oracle = instance
            .getPriceOracle()
            .call()
            .await
            .with_context(|| format!("getPriceOracle failed on {}", addresses_provider))?;

        debug!(
            "Addresses provider {} resolved pool {}, core {}, oracle {}",
            addresses_provider, lending_pool, lending_pool_core, price_oracle
        );
        Ok(AaveContracts {
            addresses_provider,
            lending_pool,
            lending_pool_core,
            price_oracle,
        })
    }

    async fn user_reserve_data(
        &self,
        lending_pool: Address,
        reserve: Address,
        user: Address,
    ) -> Result<UserReserveData> {
        let instance = ILendingPool::new(lending_pool, &self.provider);
        let data = instance
            .getUserReserveData(reserve, user)
            .call()
            .await
            .with_context(|| {
                format!(
                    "getUserReserveData({}, {}) failed on {}",
                    reserve, user, lending_pool
                )
            })?;

        Ok(UserReserveData {
            current_a_token_balance: data.currentATokenBalance,
            current_borrow_balance: data.currentBorrowBalance,
            principal_borrow_balance: data.principalBorrowBalance,
            borrow_rate_mode: data.borrowRateMode,
            borrow_rate: data.borrowRate,
            liquidity_rate: data.liquidityRate,
            origination_fee: data.originationFee,
            variable_borrow_index: data.variableBorrowIndex,
            last_update_timestamp: data.lastUpdateTimestamp,
            usage_as_collateral_enabled: data.usageAsCollateralEnabled,
        })
    }

    async fn asset_price(&self, price_oracle: Address, asset: Address) -> Result<U256> {
        let instance = IPriceOracle::new(price_oracle, &self.provider);
        let price = instance
            .getAssetPrice(asset)
            .call()
            .await
            .with_context(|| format!("getAssetPrice({}) failed on {}", asset, price_oracle))?;
        Ok(price)
    }
}

#[async_trait]
impl UniswapGateway for RpcGateway {
    async fn router_factory(&self, router: Address) -> Result<Address> {
        let instance = IUniswapV2Router01::new(router, &self.provider);
        let factory = instance
            .factory()
            .call()
            .await
            .with_context(|| format!("factory() failed on router {}", router))?;
        Ok(factory)
    }

    async fn router_weth(&self, router: Address) -> Result<Address> {
        let instance = IUniswapV2Router01::new(router, &self.provider);
        let weth = instance
            .WETH()
            .call()
            .await
            .with_context(|| format!("WETH() failed on router {}", router))?;
        Ok(weth)
    }

    async fn factory_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address> {
        let instance = IUniswapV2Factory::new(factory, &self.provider);
        let pair = instance
            .getPair(token_a, token_b)
            .call()
            .await
            .with_context(|| {
                format!("getPair({}, {}) failed on factory {}", token_a, token_b, factory)
            })?;
        Ok(pair)
    }

    async fn pair_reserves(&self, pair: Address) -> Result<PairReserves> {
        let instance = IUniswapV2Pair::new(pair, &self.provider);
        let reserves = instance
            .getReserves()
            .call()
            .await
            .with_context(|| format!("getReserves() failed on pair {}", pair))?;

        Ok(PairReserves {
            reserve0: U256::from(reserves.reserve0),
            reserve1: U256::from(reserves.reserve1),
            block_timestamp_last: reserves.blockTimestampLast,
        })
    }
}
