//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Keyboard input and held directions
//! - `scene`: Physics step and scene controller tick
//! - `mint`: Workflow snapshots, nickname submission, and the scoreboard
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod input;
mod mint;
mod rendering;
mod scene;
