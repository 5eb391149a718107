//! Cross-frontend primitives for presenting the game.
//!
//! Houses the minting workflow (state machine plus the async coordinator
//! that drives it), message logging, and view-model types that both the CLI
//! and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;
pub mod workflow;

pub use config::{ChannelConfig, FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact, NoticeFeed};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{
    EndingView, HudView, MINT_LIMIT_NOTE, MINT_TITLE, ScoreboardRow, ScoreboardView,
};
pub use workflow::{
    Effect, MintCoordinator, MintHandle, MintSnapshot, MintState, MintWorkflow, Notice,
    WorkflowError, WorkflowEvent,
};
