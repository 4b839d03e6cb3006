use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde_json::json;

use crate::{
    chain::ChainGateway,
    errors::ApiError,
    handlers::aave::{
        borrow_balance_response, equivalent_balance_response, BorrowBalanceQuery,
        EquivalentBalanceQuery,
    },
    refi::{Protocol, ReFi},
};

fn parse_protocol(protocol: &str) -> Result<Protocol, ApiError> {
    protocol.parse::<Protocol>().map_err(|e| {
        warn!("Rejected protocol identifier '{}'", protocol);
        ApiError::from(e)
    })
}

/// GET /protocols - Lists the supported lending protocols
pub async fn get_protocols_handler() -> Result<HttpResponse, ApiError> {
    let protocols: Vec<_> = Protocol::all()
        .iter()
        .map(|p| json!({ "id": p.id(), "name": p.name() }))
        .collect();
    Ok(HttpResponse::Ok().json(protocols))
}

/// GET /protocols/{protocol}/borrow-balance - Borrow balance on the named protocol
///
/// `protocol` may be the protocol name or its numeric id. Anything else is
/// rejected with the unsupported protocol reason.
pub async fn get_protocol_borrow_balance_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
    path: web::Path<String>,
    query: web::Query<BorrowBalanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let protocol = path.into_inner();
    info!("Handling GET /protocols/{}/borrow-balance request", protocol);

    let protocol = parse_protocol(&protocol)?;
    borrow_balance_response(&refi, protocol, &query).await
}

/// GET /protocols/{protocol}/equivalent-borrow-balance
pub async fn get_protocol_equivalent_borrow_balance_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
    path: web::Path<String>,
    query: web::Query<EquivalentBalanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let protocol = path.into_inner();
    info!(
        "Handling GET /protocols/{}/equivalent-borrow-balance request",
        protocol
    );

    let protocol = parse_protocol(&protocol)?;
    equivalent_balance_response(&refi, protocol, &query).await
}
