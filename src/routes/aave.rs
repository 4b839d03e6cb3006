use actix_web::web;

use crate::chain::ChainGateway;
use crate::handlers::aave::{
    get_aave_borrow_balance_handler, get_aave_contracts_handler,
    get_aave_equivalent_borrow_balance_handler, set_aave_contracts_handler,
};

pub fn configure_aave_routes<G: ChainGateway + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/aave/contracts", web::get().to(get_aave_contracts_handler::<G>))
        .route("/aave/contracts", web::put().to(set_aave_contracts_handler::<G>))
        .route(
            "/aave/borrow-balance",
            web::get().to(get_aave_borrow_balance_handler::<G>),
        )
        .route(
            "/aave/equivalent-borrow-balance",
            web::get().to(get_aave_equivalent_borrow_balance_handler::<G>),
        );
}
