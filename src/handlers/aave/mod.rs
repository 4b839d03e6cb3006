pub mod aave;
pub mod dto;

pub use aave::*;
pub use dto::*;
