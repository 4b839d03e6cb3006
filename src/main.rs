use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{info, warn, LevelFilter};
use std::sync::Arc;

use refi::chain::providers::{create_provider, verify_chain_id};
use refi::chain::RpcGateway;
use refi::config::Config;
use refi::refi::RpcReFi;
use refi::routes::configure_routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Path to a TOML config file, defaults to config/config.toml
    #[arg(long)]
    config: Option<String>,
}

async fn build_refi(config: &Config) -> anyhow::Result<RpcReFi> {
    let provider = create_provider(&config.network.rpc_urls)?;
    verify_chain_id(&provider, config.network.chain_id)
        .await
        .with_context(|| format!("Network {} is misconfigured", config.network.name))?;
    let refi = RpcReFi::new(RpcGateway::new(provider))
        .with_init_code_hash(config.uniswap.init_code_hash()?);

    match config.aave.addresses_provider()? {
        Some(addresses_provider) => {
            refi.set_aave_contracts(addresses_provider)
                .await
                .context("Failed to resolve Aave contracts")?;
        }
        None => warn!("Aave addresses provider not configured, Aave queries are disabled"),
    }

    match config.uniswap.router()? {
        Some(router) => {
            refi.set_uniswap_router(router)
                .await
                .context("Failed to resolve Uniswap router")?;
        }
        None => warn!("Uniswap router not configured, Uniswap queries are disabled"),
    }

    Ok(refi)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    // 2. Load and validate configuration
    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => Config::load()?,
    };
    config.validate().context("Invalid configuration")?;

    info!("Starting ReFi API...");
    info!(
        "Network: {} (chain id {}), {} RPC endpoint(s)",
        config.network.name,
        config.network.chain_id,
        config.network.rpc_urls.len()
    );

    // 3. Connect to the chain and resolve protocol contracts
    let refi = web::Data::new(build_refi(&config).await?);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server will be available at http://{}", bind_addr);

    let config = Arc::new(config);
    HttpServer::new(move || {
        let allowed_origins = config.cors.allowed_origins.clone();

        let cors = Cors::default().allowed_origin_fn(move |origin, _req_head| {
            let origin_str = match origin.to_str() {
                Ok(s) => s,
                Err(_) => return false,
            };
            allowed_origins.iter().any(|allowed| origin_str == allowed)
        });

        let mut methods: Vec<actix_web::http::Method> = config
            .cors
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        methods.push(actix_web::http::Method::OPTIONS);

        let cors = cors
            .allowed_methods(methods)
            .allowed_headers(config.cors.allowed_headers.clone())
            .max_age(3600);

        let cors = if config.cors.supports_credentials {
            cors.supports_credentials()
        } else {
            cors
        };

        App::new()
            .app_data(refi.clone())
            .app_data(web::Data::new(config.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(configure_routes::<RpcGateway>)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
