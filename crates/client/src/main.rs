//! Star platformer client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Frontend (scene and UI) - CLI, GUI, etc.
//! 2. Mint capabilities - HTTP endpoints, or the in-process authority
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//! - `blockchain-evm`: HTTP voucher issuer and mint relay (default)
//!
//! # Examples
//!
//! ```bash
//! # Offline: local voucher authority, wallet from WALLET_ADDRESS
//! cargo run -p star-client --no-default-features --features frontend-cli
//!
//! # Against deployed endpoints (see EvmConfig::from_env)
//! cargo run -p star-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use star_client::{Client, capabilities};

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_dir = logging::setup_logging(&cli_config.session_id, cli_config.log_dir.as_deref())?;

    tracing::info!("Starting star platformer client");
    tracing::info!("Logs: {}", log_dir.display());

    // 3. Resolve mint capabilities (independent layer)
    let capabilities = capabilities::resolve();

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config.clone(), cli_config);

    // 5. Build and run
    let client = Client::builder()
        .frontend(frontend)
        .capabilities(capabilities)
        .frontend_config(frontend_config)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
