use actix_web::web;

use crate::chain::ChainGateway;
use crate::handlers::protocol::{
    get_protocol_borrow_balance_handler, get_protocol_equivalent_borrow_balance_handler,
    get_protocols_handler,
};

pub fn configure_protocol_routes<G: ChainGateway + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/protocols", web::get().to(get_protocols_handler))
        .route(
            "/protocols/{protocol}/borrow-balance",
            web::get().to(get_protocol_borrow_balance_handler::<G>),
        )
        .route(
            "/protocols/{protocol}/equivalent-borrow-balance",
            web::get().to(get_protocol_equivalent_borrow_balance_handler::<G>),
        );
}
