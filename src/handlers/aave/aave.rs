use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::{
    chain::ChainGateway,
    errors::ApiError,
    handlers::{
        aave::dto::{
            AaveContractsResponse, BorrowBalanceQuery, BorrowBalanceResponse,
            EquivalentBalanceQuery, EquivalentBalanceResponse, SetAaveContractsRequest,
        },
        auth::ApiKey,
        params::{parse_address, parse_u256},
    },
    refi::{Protocol, ReFi},
};

/// GET /aave/contracts - Returns the Aave contracts currently in use
pub async fn get_aave_contracts_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /aave/contracts request");

    let contracts = refi.aave_contracts().await?;
    Ok(HttpResponse::Ok().json(AaveContractsResponse::from(contracts)))
}

/// PUT /aave/contracts - Resolves and stores Aave contracts from an addresses provider
/// Requires API key authentication via X-API-Key header
///
/// # Arguments
/// * `_api_key` - API key from X-API-Key header (validated by extractor)
/// * `refi` - Shared ReFi service
/// * `body` - SetAaveContractsRequest with the addresses provider
pub async fn set_aave_contracts_handler<G: ChainGateway + 'static>(
    _api_key: ApiKey,
    refi: web::Data<ReFi<G>>,
    body: web::Json<SetAaveContractsRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling PUT /aave/contracts request");

    let addresses_provider = parse_address("addresses_provider", &body.addresses_provider)?;
    match refi.set_aave_contracts(addresses_provider).await {
        Ok(contracts) => Ok(HttpResponse::Ok().json(AaveContractsResponse::from(contracts))),
        Err(e) => {
            error!(
                "Failed to set Aave contracts from {}: {}",
                addresses_provider, e
            );
            Err(e.into())
        }
    }
}

/// GET /aave/borrow-balance - Returns a user's borrow balance for a reserve
///
/// # Arguments
/// * `refi` - Shared ReFi service
/// * `query` - reserve and user addresses
pub async fn get_aave_borrow_balance_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
    query: web::Query<BorrowBalanceQuery>,
) -> Result<HttpResponse, ApiError> {
    borrow_balance_response(&refi, Protocol::Aave, &query).await
}

/// GET /aave/equivalent-borrow-balance - Converts an amount of one reserve
/// into the amount of another reserve with the same oracle value
pub async fn get_aave_equivalent_borrow_balance_handler<G: ChainGateway + 'static>(
    refi: web::Data<ReFi<G>>,
    query: web::Query<EquivalentBalanceQuery>,
) -> Result<HttpResponse, ApiError> {
    equivalent_balance_response(&refi, Protocol::Aave, &query).await
}

pub(crate) async fn borrow_balance_response<G: ChainGateway>(
    refi: &ReFi<G>,
    protocol: Protocol,
    query: &BorrowBalanceQuery,
) -> Result<HttpResponse, ApiError> {
    let reserve = parse_address("reserve", &query.reserve)?;
    let user = parse_address("user", &query.user)?;
    info!(
        "Handling borrow balance request: protocol {}, reserve {}, user {}",
        protocol, reserve, user
    );

    let borrow_balance = refi.get_borrow_balance(protocol, reserve, user).await?;
    Ok(HttpResponse::Ok().json(BorrowBalanceResponse {
        protocol,
        reserve,
        user,
        borrow_balance: borrow_balance.to_string(),
        queried_at: chrono::Utc::now().timestamp(),
    }))
}

pub(crate) async fn equivalent_balance_response<G: ChainGateway>(
    refi: &ReFi<G>,
    protocol: Protocol,
    query: &EquivalentBalanceQuery,
) -> Result<HttpResponse, ApiError> {
    let reserve = parse_address("reserve", &query.reserve)?;
    let other_reserve = parse_address("other_reserve", &query.other_reserve)?;
    let amount = parse_u256("amount", &query.amount)?;
    info!(
        "Handling equivalent balance request: protocol {}, {} of {} in {}",
        protocol, amount, reserve, other_reserve
    );

    let equivalent = refi
        .get_equivalent_borrow_balance(protocol, reserve, other_reserve, amount)
        .await?;
    Ok(HttpResponse::Ok().json(EquivalentBalanceResponse {
        protocol,
        reserve,
        other_reserve,
        amount: amount.to_string(),
        equivalent_amount: equivalent.to_string(),
        queried_at: chrono::Utc::now().timestamp(),
    }))
}
