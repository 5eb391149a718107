//! Widgets composing the terminal UI.
pub mod ending;
pub mod header;
pub mod messages;
pub mod scoreboard;
pub mod world;
