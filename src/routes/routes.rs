use actix_web::{web, HttpResponse, Result};

use crate::chain::ChainGateway;
use crate::routes::{
    aave::configure_aave_routes, protocol::configure_protocol_routes,
    uniswap::configure_uniswap_routes,
};

/// Health check endpoint
async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

pub fn configure_routes<G: ChainGateway + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(configure_aave_routes::<G>)
            .configure(configure_protocol_routes::<G>)
            .configure(configure_uniswap_routes::<G>),
    );
}
