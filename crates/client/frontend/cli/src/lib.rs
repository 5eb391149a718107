//! Terminal UI frontend for the star platformer.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend owns the frame loop:
//! - steps [`physics::ArcadePhysics`] and ticks the scene controller
//! - renders the HUD, the level, and the ending screen with ratatui
//! - talks to the mint coordinator through a `MintHandle` only

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod physics;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
