pub mod math;
pub mod pair;
pub mod protocol;
pub mod service;

pub use math::{equivalent_amount, parse_amount, WAD};
pub use pair::{pair_for, pair_for_ordered, sort_tokens, INIT_CODE_HASH};
pub use protocol::Protocol;
pub use service::{ReFi, RpcReFi, UniswapContracts, UniswapPair};
