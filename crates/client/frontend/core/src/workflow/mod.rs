//! Minting workflow run once the scene has ended.
//!
//! [`MintWorkflow`] is a pure transition function: it consumes
//! [`WorkflowEvent`]s and answers with [`Effect`]s. [`MintCoordinator`]
//! performs those effects against the injected capabilities and feeds the
//! results back, publishing a [`MintSnapshot`] after every step. UIs talk to
//! it only through a cloneable [`MintHandle`].
mod coordinator;
mod machine;
mod notice;

pub use coordinator::{MintCoordinator, MintHandle};
pub use machine::{Effect, MintSnapshot, MintState, MintWorkflow, WorkflowError, WorkflowEvent};
pub use notice::Notice;
