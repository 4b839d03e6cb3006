use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::{
    chain::ChainGateway,
    errors::ApiError,
    handlers::{
        auth::ApiKey,
        params::parse_address,
        uniswap::dto::{
            PairQuery, PairResponse, ReservesResponse, SetRouterRequest, UniswapContractsResponse,
        },
    },
    refi::ReFi,
};

/// GET /uniswap/router - Returns the router and factory currently in use
pub async fn get_uniswap_router_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /uniswap/router request");

    let contracts = refi.uniswap_contracts().await?;
    Ok(HttpResponse::Ok().json(UniswapContractsResponse::from(contracts)))
}

/// PUT /uniswap/router - Resolves and stores the factory behind a router
/// Requires API key authentication via X-API-Key header
pub async fn set_uniswap_router_handler<G: ChainGateway + 'static>(
    _api_key: ApiKey,
    refi: web::Data<ReFi<G>>,
    body: web::Json<SetRouterRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling PUT /uniswap/router request");

    let router = parse_address("router", &body.router)?;
    match refi.set_uniswap_router(router).await {
        Ok(contracts) => Ok(HttpResponse::Ok().json(UniswapContractsResponse::from(contracts))),
        Err(e) => {
            error!("Failed to set Uniswap router {}: {}", router, e);
            Err(e.into())
        }
    }
}

/// GET /uniswap/pair - Derives the pair address of two tokens
///
/// Without `canonical=true` the tokens are hashed in the order given, so only
/// a sorted request yields the deployed pair.
pub async fn get_uniswap_pair_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
    query: web::Query<PairQuery>,
) -> Result<HttpResponse, ApiError> {
    let token_a = parse_address("token_a", &query.token_a)?;
    let token_b = parse_address("token_b", &query.token_b)?;
    info!(
        "Handling GET /uniswap/pair request: {} / {} (canonical: {})",
        token_a, token_b, query.canonical
    );

    let found = refi
        .lookup_uniswap_pair(token_a, token_b, query.canonical)
        .await?;

    Ok(HttpResponse::Ok().json(PairResponse {
        token_a,
        token_b,
        factory: found.factory,
        pair: found.pair,
        canonical: query.canonical,
        queried_at: chrono::Utc::now().timestamp(),
    }))
}

/// GET /uniswap/pair/registered - Pair the factory has deployed for two tokens
pub async fn get_registered_uniswap_pair_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
    query: web::Query<PairQuery>,
) -> Result<HttpResponse, ApiError> {
    let token_a = parse_address("token_a", &query.token_a)?;
    let token_b = parse_address("token_b", &query.token_b)?;
    info!(
        "Handling GET /uniswap/pair/registered request: {} / {}",
        token_a, token_b
    );

    match refi.lookup_registered_uniswap_pair(token_a, token_b).await? {
        Some(found) => Ok(HttpResponse::Ok().json(PairResponse {
            token_a,
            token_b,
            factory: found.factory,
            pair: found.pair,
            canonical: true,
            queried_at: chrono::Utc::now().timestamp(),
        })),
        None => Err(ApiError::NotFound(format!(
            "No pair registered for {} / {}",
            token_a, token_b
        ))),
    }
}

/// GET /uniswap/reserves - Reserves of the pair for two tokens
pub async fn get_uniswap_reserves_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
    query: web::Query<PairQuery>,
) -> Result<HttpResponse, ApiError> {
    let token_a = parse_address("token_a", &query.token_a)?;
    let token_b = parse_address("token_b", &query.token_b)?;
    info!(
        "Handling GET /uniswap/reserves request: {} / {}",
        token_a, token_b
    );

    let (found, reserve_a, reserve_b) = refi.lookup_uniswap_reserves(token_a, token_b).await?;

    Ok(HttpResponse::Ok().json(ReservesResponse {
        token_a,
        token_b,
        pair: found.pair,
        reserve_a: reserve_a.to_string(),
        reserve_b: reserve_b.to_string(),
        queried_at: chrono::Utc::now().timestamp(),
    }))
}
