//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::workflow::MintHandle;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the frame loop: it ticks the scene, renders it, and once
/// the scene ends talks to the mint coordinator through the handle:
/// - report the session summary
/// - submit the nickname
/// - follow workflow snapshots
///
/// Frontends do NOT own the coordinator or the capabilities behind it.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, MintHandle};
/// use anyhow::Result;
///
/// struct MyFrontend;
///
/// #[async_trait]
/// impl Frontend for MyFrontend {
///     async fn run(&mut self, handle: MintHandle) -> Result<()> {
///         let mut updates = handle.subscribe();
///         while updates.changed().await.is_ok() {
///             let snapshot = updates.borrow().clone();
///             // Render the ending screen
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should block until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: MintHandle) -> Result<()>;
}
