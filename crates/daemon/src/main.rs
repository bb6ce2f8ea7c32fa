//! Baton - Main Entry Point
//! JSON-RPC server + optional console chat adapter

mod config;
mod console;
mod logging;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

// Import workspace crates
use baton_api_rpc::{RpcServer, RpcServerConfig};
use baton_core::application::{ChatService, KeywordIntentParser, Locale, ReservationRegistry};
use baton_core::port::id_provider::UuidProvider;
use baton_core::port::phrase_picker::RandomPhrasePicker;
use baton_core::port::time_provider::SystemTimeProvider;

use crate::config::DaemonConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::from_env();

    // 2. Initialize logging (guard flushes file output on exit)
    let _log_guard = logging::init_logging(&config)?;

    info!("Baton v{} starting...", VERSION);

    // 3. Keywords and phrases
    let locale = match &config.locale_path {
        Some(path) => {
            info!(path = %path.display(), "Loading locale");
            Locale::load(path)
                .with_context(|| format!("Failed to load locale from {}", path.display()))?
        }
        None => Locale::default(),
    };

    // 4. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let id_provider = Arc::new(UuidProvider);
    let registry = Arc::new(ReservationRegistry::new(time_provider));
    let chat = Arc::new(ChatService::new(
        registry.clone(),
        Arc::new(KeywordIntentParser::new(locale.keywords)),
        Arc::new(locale.phrases),
        Arc::new(RandomPhrasePicker),
        id_provider,
    ));

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.rpc_host.clone(),
        port: config.rpc_port,
    };
    let (rpc_addr, rpc_handle) = RpcServer::new(rpc_config, registry, chat.clone())
        .start()
        .await
        .context("RPC server start failed")?;

    // 6. Console adapter (optional)
    if config.console {
        tokio::spawn(console::run(chat));
    }

    info!(addr = %rpc_addr, "System ready");
    info!("Press Ctrl+C to shutdown");

    // 7. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 8. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}
