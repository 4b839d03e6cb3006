use actix_web::web;

use crate::chain::ChainGateway;
use crate::handlers::uniswap::{
    get_registered_uniswap_pair_handler, get_uniswap_pair_handler, get_uniswap_reserves_handler,
    get_uniswap_router_handler, set_uniswap_router_handler,
};

pub fn configure_uniswap_routes<G: ChainGateway + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/uniswap/router", web::get().to(get_uniswap_router_handler::<G>))
        .route("/uniswap/router", web::put().to(set_uniswap_router_handler::<G>))
        .route("/uniswap/pair", web::get().to(get_uniswap_pair_handler::<G>))
        .route(
            "/uniswap/pair/registered",
            web::get().to(get_registered_uniswap_pair_handler::<G>),
        )
        .route(
            "/uniswap/reserves",
            web::get().to(get_uniswap_reserves_handler::<G>),
        );
}
