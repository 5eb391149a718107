//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_blockchain_core::MintCapabilities;
use client_frontend_core::FrontendConfig;

/// Builder for constructing a Client with proper validation.
///
/// Frontend and capabilities are required; the frontend configuration
/// falls back to its defaults.
#[derive(Default)]
pub struct ClientBuilder {
    frontend: Option<Box<dyn Frontend>>,
    capabilities: Option<MintCapabilities>,
    frontend_config: Option<FrontendConfig>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frontend (required).
    ///
    /// The frontend plays the scene and drives the mint workflow through a
    /// `MintHandle`.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Set the mint capabilities (required).
    pub fn capabilities(mut self, capabilities: MintCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    pub fn frontend_config(mut self, config: FrontendConfig) -> Self {
        self.frontend_config = Some(config);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend or the capabilities are not set.
    pub fn build(self) -> Result<Client> {
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        let capabilities = self
            .capabilities
            .context("Mint capabilities are required. Use .capabilities() to set them.")?;

        Ok(Client {
            frontend,
            capabilities,
            frontend_config: self.frontend_config.unwrap_or_default(),
        })
    }
}
