//! Serve command - runs the registration API

use std::net::SocketAddr;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Overrides for the configured listen address
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Host to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`)
    #[arg(long, short)]
    pub port: Option<u16>,
}

/// Run the API server until Ctrl+C or SIGTERM
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    apply_overrides(&mut config, args);
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config).await?;
    let app = crate::api::create_router(state, &config.cors);

    let addr = build_socket_addr(&config)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn apply_overrides(config: &mut AppConfig, args: ServeArgs) {
    if let Some(host) = args.host {
        config.server.host = host;
    }

    if let Some(port) = args.port {
        config.server.port = port;
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config() {
        let mut config = AppConfig::default();
        apply_overrides(
            &mut config,
            ServeArgs {
                host: Some("127.0.0.1".to_string()),
                port: Some(3000),
            },
        );

        let addr = build_socket_addr(&config).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, ServeArgs { host: None, port: None });

        assert_eq!(build_socket_addr(&config).unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();

        assert!(build_socket_addr(&config).is_err());
    }
}
