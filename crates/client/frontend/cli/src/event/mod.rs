//! Event handling for CLI client.
//!
//! This module contains the frame loop that ties keyboard input, the scene
//! controller, workflow snapshots, and rendering together.

mod handlers;
mod r#loop;
mod scoreboard;

pub use r#loop::EventLoop;
