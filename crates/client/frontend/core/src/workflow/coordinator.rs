//! Async driver for [`MintWorkflow`].

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, warn};

use client_blockchain_core::{CollectionEntry, CollectionError, MintCapabilities};
use game_core::SessionSummary;

use super::machine::{Effect, MintSnapshot, MintWorkflow, WorkflowError, WorkflowEvent};
use super::notice::Notice;
use crate::config::FrontendConfig;

/// Commands accepted by the coordinator worker.
enum Command {
    SceneEnded(SessionSummary),
    Submit(String),
    Rearm {
        reply: oneshot::Sender<Result<(), WorkflowError>>,
    },
    ListCollection {
        reply: oneshot::Sender<Result<Vec<CollectionEntry>, CollectionError>>,
    },
}

/// Client-facing handle to the mint coordinator.
#[derive(Clone)]
pub struct MintHandle {
    command_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<MintSnapshot>,
}

impl MintHandle {
    /// Reports the end of the scene; opens name entry.
    pub async fn scene_ended(&self, summary: SessionSummary) -> Result<(), WorkflowError> {
        self.send(Command::SceneEnded(summary)).await
    }

    /// Submits a nickname. Dropped by the workflow while a request is in flight.
    pub async fn submit(&self, username: impl Into<String>) -> Result<(), WorkflowError> {
        self.send(Command::Submit(username.into())).await
    }

    /// Returns a failed attempt to name entry.
    pub async fn rearm(&self) -> Result<(), WorkflowError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Rearm { reply: reply_tx }).await?;
        reply_rx
            .await
            .map_err(|_| WorkflowError::CoordinatorStopped)?
    }

    /// Lists the minted collection for the scoreboard.
    pub async fn list_collection(&self) -> anyhow::Result<Vec<CollectionEntry>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::ListCollection { reply: reply_tx }).await?;
        Ok(reply_rx.await??)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> MintSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<MintSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Waits until a snapshot satisfies `predicate`.
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&MintSnapshot) -> bool,
    ) -> Result<MintSnapshot, WorkflowError> {
        let mut rx = self.snapshot_rx.clone();
        let snapshot = rx
            .wait_for(predicate)
            .await
            .map_err(|_| WorkflowError::CoordinatorStopped)?;
        Ok(snapshot.clone())
    }

    async fn send(&self, command: Command) -> Result<(), WorkflowError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| WorkflowError::CoordinatorStopped)
    }
}

/// Background task executing workflow effects.
///
/// Effects run on spawned tasks and report back through an internal
/// channel, so the worker keeps accepting commands (and dropping duplicate
/// submits) while a request is outstanding.
pub struct MintCoordinator {
    workflow: MintWorkflow,
    capabilities: MintCapabilities,
    command_rx: mpsc::Receiver<Command>,
    result_tx: mpsc::UnboundedSender<WorkflowEvent>,
    result_rx: mpsc::UnboundedReceiver<WorkflowEvent>,
    snapshot_tx: watch::Sender<MintSnapshot>,
    notice_seq: u64,
}

impl MintCoordinator {
    /// Spawns the worker on the current runtime and returns its handle.
    pub fn spawn(capabilities: MintCapabilities, config: &FrontendConfig) -> MintHandle {
        let (command_tx, command_rx) = mpsc::channel(config.channels.command_buffer);
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        let workflow = MintWorkflow::new();
        let (snapshot_tx, snapshot_rx) = watch::channel(workflow.snapshot());

        let coordinator = Self {
            workflow,
            capabilities,
            command_rx,
            result_tx,
            result_rx,
            snapshot_tx,
            notice_seq: 0,
        };
        tokio::spawn(coordinator.run());

        MintHandle {
            command_tx,
            snapshot_rx,
        }
    }

    async fn run(mut self) {
        debug!(chain = %self.capabilities.chain, "mint coordinator started");

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(event) = self.result_rx.recv() => {
                    let _ = self.apply(event);
                }
            }
        }

        debug!("mint coordinator stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::SceneEnded(summary) => {
                let _ = self.apply(WorkflowEvent::SceneEnded(summary));
            }
            Command::Submit(username) => {
                let _ = self.apply(WorkflowEvent::Submit { username });
            }
            Command::Rearm { reply } => {
                let result = self.apply(WorkflowEvent::Rearm);
                if reply.send(result).is_err() {
                    debug!("Rearm reply channel closed (caller dropped)");
                }
            }
            Command::ListCollection { reply } => {
                let collection = self.capabilities.collection.clone();
                tokio::spawn(async move {
                    let result = collection.list_minted().await;
                    if reply.send(result).is_err() {
                        debug!("ListCollection reply channel closed (caller dropped)");
                    }
                });
            }
        }
    }

    /// Feeds one event through the workflow, runs its effects and publishes.
    fn apply(&mut self, event: WorkflowEvent) -> Result<(), WorkflowError> {
        let before = self.workflow.state();
        let effects = match self.workflow.handle(event) {
            Ok(effects) => effects,
            Err(e) => {
                warn!(state = %before, error = %e, "workflow event rejected");
                return Err(e);
            }
        };

        let after = self.workflow.state();
        if before != after {
            info!(from = %before, to = %after, "mint workflow transition");
        }

        let mut notice = None;
        for effect in effects {
            debug!(?effect, "executing workflow effect");
            match effect {
                Effect::Notify(n) => notice = Some(n),
                request => self.spawn_effect(request),
            }
        }

        self.publish(notice);
        Ok(())
    }

    fn publish(&mut self, notice: Option<Notice>) {
        let previous = self.snapshot_tx.borrow().clone();
        let mut snapshot = self.workflow.snapshot();
        match notice {
            Some(notice) => {
                self.notice_seq += 1;
                snapshot.notice = Some(notice);
                snapshot.notice_seq = self.notice_seq;
            }
            None => {
                snapshot.notice = previous.notice;
                snapshot.notice_seq = previous.notice_seq;
            }
        }
        self.snapshot_tx.send_replace(snapshot);
    }

    fn spawn_effect(&self, effect: Effect) {
        let capabilities = self.capabilities.clone();
        let result_tx = self.result_tx.clone();

        tokio::spawn(async move {
            let Some(event) = perform(&capabilities, effect).await else {
                return;
            };
            if result_tx.send(event).is_err() {
                debug!("mint coordinator gone before effect completed");
            }
        });
    }
}

/// Runs one request effect and turns its result into the next event.
async fn perform(capabilities: &MintCapabilities, effect: Effect) -> Option<WorkflowEvent> {
    let event = match effect {
        Effect::ConnectWallet => match capabilities.wallet.connect(capabilities.chain).await {
            Ok(connection) => WorkflowEvent::WalletConnected(connection),
            Err(e) => {
                warn!(error = %e, "wallet connection failed");
                WorkflowEvent::WalletUnavailable {
                    cause: e.to_string(),
                }
            }
        },
        Effect::RequestVoucher(request) => match capabilities.issuer.issue(&request).await {
            Ok(voucher) => WorkflowEvent::VoucherIssued(voucher),
            Err(e) => {
                warn!(error = %e, "voucher request failed");
                WorkflowEvent::VoucherRejected {
                    reason: e.user_reason(),
                }
            }
        },
        Effect::SubmitMint(voucher) => match capabilities.minter.mint(&voucher).await {
            Ok(token) => WorkflowEvent::Minted(token),
            Err(e) => {
                error!(error = %e, "mint submission failed");
                WorkflowEvent::MintFailed {
                    cause: e.to_string(),
                }
            }
        },
        Effect::Notify(_) => return None,
    };
    Some(event)
}
