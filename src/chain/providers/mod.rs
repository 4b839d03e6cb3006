pub mod rpc_gateway;
pub mod utils;
pub use rpc_gateway::*;
pub use utils::*;
