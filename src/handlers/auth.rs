use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use log::warn;
use std::sync::Arc;

use crate::config::Config;

/// API Key extractor guarding the endpoints that repoint protocol contracts
pub struct ApiKey(pub String);

impl FromRequest for ApiKey {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let configured_key = match req.app_data::<web::Data<Arc<Config>>>() {
            Some(config) => config.server.api_key.clone(),
            None => {
                warn!("Config not found in app data");
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "Configuration error",
                )));
            }
        };

        let header_key = req
            .headers()
            .get("X-API-Key")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        match (configured_key, header_key) {
            (Some(configured_key), Some(header_key)) if configured_key == header_key => {
                ready(Ok(ApiKey(header_key)))
            }
            (Some(_), Some(_)) => {
                warn!("Invalid API key provided");
                ready(Err(actix_web::error::ErrorUnauthorized("Invalid API key")))
            }
            (Some(_), None) => {
                warn!("API key required but not provided");
                ready(Err(actix_web::error::ErrorUnauthorized("API key required")))
            }
            (None, header_key) => {
                // API key not configured, allow access (for development)
                warn!("API key not configured, allowing access");
                ready(Ok(ApiKey(header_key.unwrap_or_default())))
            }
        }
    }
}
