pub mod dto;
pub mod uniswap;

pub use dto::*;
pub use uniswap::*;
