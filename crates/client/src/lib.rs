//! Top-level client wiring the frontend to the mint workflow.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Frontend (scene loop and UI - CLI, GUI, etc.)
//!   └─→ MintCoordinator (workflow worker over MintCapabilities)
//! ```
//!
//! The frontend never touches the capabilities; it only holds the
//! `MintHandle` returned when the coordinator is spawned.

mod builder;
pub mod capabilities;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_blockchain_core::MintCapabilities;
use client_frontend_core::{FrontendConfig, MintCoordinator};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects the frontend and the capabilities
/// 2. Client::run() spawns the mint coordinator
/// 3. Client::run() transfers control to the frontend (blocking)
/// 4. When the frontend returns its handle is dropped and the coordinator stops
pub struct Client {
    frontend: Box<dyn Frontend>,
    capabilities: MintCapabilities,
    frontend_config: FrontendConfig,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, if any.
    pub async fn run(self) -> Result<()> {
        tracing::debug!(chain = %self.capabilities.chain, "Spawning mint coordinator");
        let handle = MintCoordinator::spawn(self.capabilities, &self.frontend_config);

        let mut frontend = self.frontend;
        frontend.run(handle).await
    }
}
