//! The focusd daemon.
//!
//! Wires the concrete host adapters into the domain service, exports the
//! `com.dotfiles.FocusOrLaunch` interface on the session bus, and runs until
//! interrupted.

use std::sync::Arc;

use focusd_core::config::{ConfigLoader, CoreConfig};
use focusd_core::logging::{init_logging, init_minimal_logging};
use focusd_domain::FocusOrLaunchService;
use focusd_system::dbus::{FocusOrLaunchServer, OBJECT_PATH, SERVICE_NAME};
use focusd_system::host::{DesktopEntryRegistry, MonotonicClock, TracingDiagnostics};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            init_minimal_logging();
            tracing::warn!("Failed to load configuration, falling back to defaults: {}", e);
            CoreConfig::default()
        }
    };
    if let Err(e) = init_logging(&config.logging) {
        init_minimal_logging();
        tracing::warn!("Failed to initialize configured logging: {}", e);
    }

    tracing::info!("focusd starting up...");

    let registry = Arc::new(DesktopEntryRegistry::with_default_dirs(
        &config.registry.extra_data_dirs,
    ));
    let service = Arc::new(FocusOrLaunchService::new(
        registry,
        Arc::new(MonotonicClock::new()),
        Arc::new(TracingDiagnostics),
    ));

    let server = match FocusOrLaunchServer::connect(service).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = server.start().await {
        tracing::error!("Failed to export {} at {}: {}", SERVICE_NAME, OBJECT_PATH, e);
        std::process::exit(1);
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to wait for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down...");
    if let Err(e) = server.stop().await {
        tracing::warn!("Shutdown cleanup failed: {}", e);
    }
    tracing::info!("focusd stopped.");
}
