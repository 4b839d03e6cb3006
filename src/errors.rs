use actix_web::{error::ResponseError, HttpResponse};
use alloy::primitives::Address;
use derive_more::Display;
use serde_json::json;
use thiserror::Error;

/// Reason reported when a protocol identifier is not recognised
pub const UNSUPPORTED_PROTOCOL_REASON: &str = "ReFi: unsupported protocol";

#[derive(Debug, Error)]
pub enum RefiError {
    #[error("{}", UNSUPPORTED_PROTOCOL_REASON)]
    UnsupportedProtocol { protocol: String },

    #[error("Aave contracts have not been set")]
    AaveNotConfigured,

    #[error("Uniswap router has not been set")]
    UniswapNotConfigured,

    #[error("Price oracle returned a zero price for {0}")]
    ZeroPrice(Address),

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Identical token addresses")]
    IdenticalAddresses,

    #[error("Zero token address")]
    ZeroAddress,

    #[error(transparent)]
    Gateway(#[from] anyhow::Error),
}

pub type RefiResult<T> = Result<T, RefiError>;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Bad request: {}", _0)]
    BadRequest(String),

    #[display(fmt = "Not found: {}", _0)]
    NotFound(String),

    #[display(fmt = "Service unavailable: {}", _0)]
    ServiceUnavailable(String),

    #[display(fmt = "Chain error: {}", _0)]
    ChainError(String),
}

impl From<RefiError> for ApiError {
    fn from(error: RefiError) -> Self {
        match error {
            RefiError::UnsupportedProtocol { .. }
            | RefiError::ZeroPrice(_)
            | RefiError::ArithmeticOverflow
            | RefiError::DivisionByZero
            | RefiError::IdenticalAddresses
            | RefiError::ZeroAddress => ApiError::BadRequest(error.to_string()),
            RefiError::AaveNotConfigured | RefiError::UniswapNotConfigured => {
                ApiError::ServiceUnavailable(error.to_string())
            }
            RefiError::Gateway(e) => {
                log::error!("Chain error: {:#}", e);
                ApiError::ChainError(format!("{:#}", e))
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(ref message) => HttpResponse::BadRequest().json(json!({
                "error": message
            })),
            ApiError::NotFound(ref message) => HttpResponse::NotFound().json(json!({
                "error": message
            })),
            ApiError::ServiceUnavailable(ref message) => {
                HttpResponse::ServiceUnavailable().json(json!({
                    "error": message
                }))
            }
            ApiError::ChainError(ref message) => HttpResponse::BadGateway().json(json!({
                "error": format!("Chain error: {}", message)
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_unsupported_protocol_reason_is_fixed() {
        let err = RefiError::UnsupportedProtocol {
            protocol: "compound".to_string(),
        };
        assert_eq!(err.to_string(), UNSUPPORTED_PROTOCOL_REASON);
    }

    #[test]
    fn test_refi_error_status_codes() {
        let cases = vec![
            (
                RefiError::UnsupportedProtocol {
                    protocol: "x".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (RefiError::ZeroPrice(Address::ZERO), StatusCode::BAD_REQUEST),
            (RefiError::AaveNotConfigured, StatusCode::SERVICE_UNAVAILABLE),
            (RefiError::UniswapNotConfigured, StatusCode::SERVICE_UNAVAILABLE),
            (
                RefiError::Gateway(anyhow::anyhow!("execution reverted")),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, status) in cases {
            let api_error = ApiError::from(err);
            assert_eq!(api_error.error_response().status(), status);
        }
    }
}
