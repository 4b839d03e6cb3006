pub mod aave;
pub mod protocol;
pub mod routes;
pub mod uniswap;

pub use routes::*;
