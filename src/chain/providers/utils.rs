use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use alloy::transports::layers::FallbackLayer;
use anyhow::{anyhow, bail, Context, Result};
use log::info;
use std::num::NonZeroUsize;
use tower::ServiceBuilder;
use url::Url;

/// Parse every RPC endpoint, rejecting the whole list if one is malformed
pub fn parse_rpc_urls(rpcs: &[String]) -> Result<Vec<Url>> {
    rpcs.iter()
        .map(|rpc| {
            rpc.parse::<Url>()
                .with_context(|| format!("Invalid RPC endpoint: {}", rpc))
        })
        .collect()
}

/// Build a provider that spreads requests over all endpoints and falls back
/// to the next one when a transport fails.
pub fn create_provider(rpcs: &[String]) -> Result<DynProvider> {
    let rpc_len =
        NonZeroUsize::new(rpcs.len()).ok_or_else(|| anyhow!("No RPC endpoints configured"))?;
    let urls = parse_rpc_urls(rpcs)?;
    info!("Creating provider over {} RPC endpoint(s)", rpc_len);

    let fallback_layer = FallbackLayer::default().with_active_transport_count(rpc_len);
    let transports = urls.into_iter().map(Http::new).collect::<Vec<_>>();

    let transport = ServiceBuilder::new()
        .layer(fallback_layer)
        .service(transports);
    let client = RpcClient::builder().transport(transport, false);
    let provider = ProviderBuilder::new().connect_client(client);
    Ok(provider.erased())
}

/// Refuse to run against a node serving a different chain than configured
pub fn check_chain_id(expected: u64, actual: u64) -> Result<()> {
    if expected != actual {
        bail!(
            "RPC endpoint serves chain id {}, configured network expects {}",
            actual,
            expected
        );
    }
    Ok(())
}

/// Ask the node for its chain id and compare it with the configured one
pub async fn verify_chain_id(provider: &DynProvider, expected: u64) -> Result<()> {
    let actual = provider
        .get_chain_id()
        .await
        .context("Failed to fetch chain id from RPC endpoint")?;
    check_chain_id(expected, actual)?;
    info!("Connected to chain id {}", actual);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rpc_urls() {
        let urls = parse_rpc_urls(&[
            "http://localhost:8545".to_string(),
            "https://kovan.example.org/v3/key".to_string(),
        ])
        .unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].port(), Some(8545));
    }

    #[test]
    fn test_parse_rpc_urls_rejects_garbage() {
        let result = parse_rpc_urls(&["not a url".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_provider_requires_endpoint() {
        let result = create_provider(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_chain_id() {
        assert!(check_chain_id(42, 42).is_ok());

        let err = check_chain_id(42, 1).unwrap_err();
        assert!(err.to_string().contains("chain id 1"));
        assert!(err.to_string().contains("expects 42"));
    }
}
