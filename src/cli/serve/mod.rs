//! Serve command - runs the national team HTTP server

use std::net::SocketAddr;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::infrastructure::logging;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on, overriding configuration
    #[arg(long)]
    pub port: Option<u16>,
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config(&args)?;

    logging::init_logging(&logging::LoggingConfig::from(&config.logging));

    let state = crate::create_app_state_with_config(&config).await?;
    let app = crate::api::create_router(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting national team service on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("National team service shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
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

fn load_config(args: &ServeArgs) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load().context("Failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }

    Ok(config)
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
    fn test_port_flag_overrides_config() {
        let config = load_config(&ServeArgs { port: Some(9004) }).unwrap();
        assert_eq!(config.server.port, 9004);
    }

    #[test]
    fn test_build_socket_addr() {
        let config = AppConfig::default();
        let addr = build_socket_addr(&config).unwrap();

        assert_eq!(addr.to_string(), "0.0.0.0:7004");
    }

    #[test]
    fn test_build_socket_addr_rejects_hostname() {
        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();

        assert!(build_socket_addr(&config).is_err());
    }
}
