pub mod aave;
pub mod auth;
pub mod params;
pub mod protocol;
pub mod uniswap;

pub use aave::{
    get_aave_borrow_balance_handler, get_aave_contracts_handler,
    get_aave_equivalent_borrow_balance_handler, set_aave_contracts_handler,
    AaveContractsResponse, BorrowBalanceQuery, BorrowBalanceResponse, EquivalentBalanceQuery,
    EquivalentBalanceResponse, SetAaveContractsRequest,
};
pub use protocol::{
    get_protocol_borrow_balance_handler, get_protocol_equivalent_borrow_balance_handler,
    get_protocols_handler,
};
pub use uniswap::{
    get_registered_uniswap_pair_handler, get_uniswap_pair_handler, get_uniswap_reserves_handler,
    get_uniswap_router_handler, set_uniswap_router_handler, PairQuery, PairResponse,
    ReservesResponse, SetRouterRequest, UniswapContractsResponse,
};
