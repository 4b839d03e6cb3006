pub mod contracts;
pub mod gateway;
pub mod providers;

pub use gateway::{
    AaveContracts, AaveGateway, ChainGateway, PairReserves, UniswapGateway, UserReserveData,
};
pub use providers::RpcGateway;
