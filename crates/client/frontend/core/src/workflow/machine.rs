//! Mint workflow transition function.

use strum::{Display, IntoStaticStr};

use client_blockchain_core::{MintedToken, TokenId, Voucher, VoucherRequest, WalletConnection};
use game_core::SessionSummary;

use super::notice::Notice;

/// Where the player is in the minting flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum MintState {
    /// The scene has not ended yet.
    #[default]
    Idle,
    AwaitingName,
    RequestingVoucher,
    AwaitingMintConfirmation,
    Success,
    Failed,
}

impl MintState {
    /// `Success` and `Failed` end the attempt.
    pub const fn is_terminal(self) -> bool {
        matches!(self, MintState::Success | MintState::Failed)
    }
}

/// Inputs to [`MintWorkflow::handle`]: player commands and effect results.
#[derive(Clone, Debug, PartialEq, IntoStaticStr)]
pub enum WorkflowEvent {
    SceneEnded(SessionSummary),
    Submit { username: String },
    /// Return a failed attempt to name entry.
    Rearm,
    WalletConnected(WalletConnection),
    WalletUnavailable { cause: String },
    VoucherIssued(Voucher),
    VoucherRejected { reason: String },
    Minted(MintedToken),
    MintFailed { cause: String },
}

/// Work requested by the transition function.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ConnectWallet,
    RequestVoucher(VoucherRequest),
    SubmitMint(Voucher),
    Notify(Notice),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("{event} is not accepted while {state}")]
    UnexpectedEvent {
        state: MintState,
        event: &'static str,
    },

    #[error("only a failed attempt can be re-armed (currently {0})")]
    CannotRearm(MintState),

    #[error("mint coordinator stopped")]
    CoordinatorStopped,
}

/// Published view of the workflow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MintSnapshot {
    pub state: MintState,
    pub summary: Option<SessionSummary>,
    /// A request chain is running; further submits are dropped.
    pub in_flight: bool,
    pub token_id: Option<TokenId>,
    pub notice: Option<Notice>,
    /// Bumped with every notice so repeated notices can be told apart.
    pub notice_seq: u64,
}

/// Pure minting state machine.
///
/// | from                       | event               | to                         | effects          |
/// |----------------------------|---------------------|----------------------------|------------------|
/// | `Idle`                     | `SceneEnded`        | `AwaitingName`             |                  |
/// | `AwaitingName`             | `Submit` (empty)    | `AwaitingName`             | `Notify`         |
/// | `AwaitingName`             | `Submit`            | `AwaitingName` (in flight) | `ConnectWallet`  |
/// | `AwaitingName`             | `WalletConnected`   | `RequestingVoucher`        | `RequestVoucher` |
/// | `AwaitingName`             | `WalletUnavailable` | `AwaitingName`             | `Notify`         |
/// | `RequestingVoucher`        | `VoucherIssued`     | `AwaitingMintConfirmation` | `SubmitMint`     |
/// | `RequestingVoucher`        | `VoucherRejected`   | `Failed`                   | `Notify`         |
/// | `AwaitingMintConfirmation` | `Minted`            | `Success`                  | `Notify`         |
/// | `AwaitingMintConfirmation` | `MintFailed`        | `Failed`                   | `Notify`         |
/// | `Failed`                   | `Rearm`             | `AwaitingName`             |                  |
///
/// `Submit` while a chain is in flight is dropped without effects.
#[derive(Clone, Debug, Default)]
pub struct MintWorkflow {
    state: MintState,
    summary: Option<SessionSummary>,
    username: Option<String>,
    in_flight: bool,
    token_id: Option<TokenId>,
}

impl MintWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MintState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn snapshot(&self) -> MintSnapshot {
        MintSnapshot {
            state: self.state,
            summary: self.summary,
            in_flight: self.in_flight,
            token_id: self.token_id.clone(),
            notice: None,
            notice_seq: 0,
        }
    }

    pub fn handle(&mut self, event: WorkflowEvent) -> Result<Vec<Effect>, WorkflowError> {
        let event_name: &'static str = (&event).into();

        match (self.state, event) {
            (MintState::Idle, WorkflowEvent::SceneEnded(summary)) => {
                self.summary = Some(summary);
                self.state = MintState::AwaitingName;
                Ok(Vec::new())
            }

            (_, WorkflowEvent::Submit { .. }) if self.in_flight => {
                tracing::debug!(state = %self.state, "submit dropped: request in flight");
                Ok(Vec::new())
            }

            (MintState::AwaitingName, WorkflowEvent::Submit { username }) => {
                // Blank names are refused; accepted names go out as typed.
                if username.trim().is_empty() {
                    return Ok(vec![Effect::Notify(Notice::NameRequired)]);
                }
                self.username = Some(username);
                self.in_flight = true;
                Ok(vec![Effect::ConnectWallet])
            }

            (MintState::AwaitingName, WorkflowEvent::WalletConnected(connection))
                if self.in_flight =>
            {
                let (summary, username) = self.attempt(event_name)?;
                self.state = MintState::RequestingVoucher;
                Ok(vec![Effect::RequestVoucher(VoucherRequest {
                    player_address: connection.address,
                    username,
                    record_seconds: summary.record_seconds(),
                })])
            }

            (MintState::AwaitingName, WorkflowEvent::WalletUnavailable { .. })
                if self.in_flight =>
            {
                self.in_flight = false;
                Ok(vec![Effect::Notify(Notice::WalletUnavailable)])
            }

            (MintState::RequestingVoucher, WorkflowEvent::VoucherIssued(voucher)) => {
                self.state = MintState::AwaitingMintConfirmation;
                Ok(vec![Effect::SubmitMint(voucher)])
            }

            (MintState::RequestingVoucher, WorkflowEvent::VoucherRejected { reason }) => {
                self.fail();
                Ok(vec![Effect::Notify(Notice::VoucherRejected(reason))])
            }

            (MintState::AwaitingMintConfirmation, WorkflowEvent::Minted(token)) => {
                let (summary, username) = self.attempt(event_name)?;
                self.state = MintState::Success;
                self.in_flight = false;
                self.token_id = Some(token.token_id);
                Ok(vec![Effect::Notify(Notice::Minted { username, summary })])
            }

            (MintState::AwaitingMintConfirmation, WorkflowEvent::MintFailed { .. }) => {
                self.fail();
                Ok(vec![Effect::Notify(Notice::MintFailed)])
            }

            (MintState::Failed, WorkflowEvent::Rearm) => {
                self.state = MintState::AwaitingName;
                self.username = None;
                Ok(Vec::new())
            }

            (state, WorkflowEvent::Rearm) => Err(WorkflowError::CannotRearm(state)),

            (state, _) => Err(WorkflowError::UnexpectedEvent {
                state,
                event: event_name,
            }),
        }
    }

    fn fail(&mut self) {
        self.state = MintState::Failed;
        self.in_flight = false;
    }

    fn attempt(&self, event: &'static str) -> Result<(SessionSummary, String), WorkflowError> {
        match (self.summary, &self.username) {
            (Some(summary), Some(username)) => Ok((summary, username.clone())),
            _ => Err(WorkflowError::UnexpectedEvent {
                state: self.state,
                event,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use client_blockchain_core::{ChainId, WalletAddress};

    use super::*;

    fn ended() -> MintWorkflow {
        let mut workflow = MintWorkflow::new();
        workflow
            .handle(WorkflowEvent::SceneEnded(SessionSummary::new(120, 12_345)))
            .unwrap();
        workflow
    }

    fn submit(name: &str) -> WorkflowEvent {
        WorkflowEvent::Submit {
            username: name.into(),
        }
    }

    fn connected() -> WorkflowEvent {
        WorkflowEvent::WalletConnected(WalletConnection {
            address: WalletAddress::new("0xabc"),
            chain_id: ChainId::MUMBAI,
        })
    }

    #[test]
    fn empty_name_asks_again() {
        let mut workflow = ended();
        assert_eq!(
            workflow.handle(submit("")).unwrap(),
            vec![Effect::Notify(Notice::NameRequired)]
        );
        assert_eq!(
            workflow.handle(submit("   ")).unwrap(),
            vec![Effect::Notify(Notice::NameRequired)]
        );
        assert_eq!(workflow.state(), MintState::AwaitingName);
        assert!(!workflow.is_in_flight());
    }

    #[test]
    fn happy_path_builds_request_from_summary() {
        let mut workflow = ended();
        assert_eq!(workflow.handle(submit("Alice")).unwrap(), vec![Effect::ConnectWallet]);

        let effects = workflow.handle(connected()).unwrap();
        assert_eq!(
            effects,
            vec![Effect::RequestVoucher(VoucherRequest {
                player_address: WalletAddress::new("0xabc"),
                username: "Alice".into(),
                record_seconds: 12.345,
            })]
        );
        assert_eq!(workflow.state(), MintState::RequestingVoucher);

        let voucher = Voucher::new(serde_json::json!("abc"));
        assert_eq!(
            workflow
                .handle(WorkflowEvent::VoucherIssued(voucher.clone()))
                .unwrap(),
            vec![Effect::SubmitMint(voucher)]
        );

        let effects = workflow
            .handle(WorkflowEvent::Minted(MintedToken {
                token_id: TokenId::new("3"),
            }))
            .unwrap();
        assert_eq!(workflow.state(), MintState::Success);
        assert_eq!(workflow.snapshot().token_id, Some(TokenId::new("3")));
        match effects.as_slice() {
            [Effect::Notify(notice)] => assert_eq!(
                notice.to_string(),
                "Congrats Alice for scoring 120 in 12.345 seconds."
            ),
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn name_is_sent_as_typed() {
        let mut workflow = ended();
        workflow.handle(submit("  Alice ")).unwrap();

        match workflow.handle(connected()).unwrap().as_slice() {
            [Effect::RequestVoucher(request)] => assert_eq!(request.username, "  Alice "),
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn submit_in_flight_is_dropped() {
        let mut workflow = ended();
        workflow.handle(submit("Alice")).unwrap();
        assert!(workflow.handle(submit("Alice")).unwrap().is_empty());

        workflow.handle(connected()).unwrap();
        assert!(workflow.handle(submit("Bob")).unwrap().is_empty());
        assert_eq!(workflow.state(), MintState::RequestingVoucher);
    }

    #[test]
    fn wallet_unavailable_keeps_name_entry_open() {
        let mut workflow = ended();
        workflow.handle(submit("Alice")).unwrap();
        let effects = workflow
            .handle(WorkflowEvent::WalletUnavailable {
                cause: "no provider".into(),
            })
            .unwrap();

        assert_eq!(effects, vec![Effect::Notify(Notice::WalletUnavailable)]);
        assert_eq!(workflow.state(), MintState::AwaitingName);
        assert_eq!(workflow.handle(submit("Alice")).unwrap(), vec![Effect::ConnectWallet]);
    }

    #[test]
    fn rejection_and_mint_fault_fail_the_attempt() {
        let mut workflow = ended();
        workflow.handle(submit("Alice")).unwrap();
        workflow.handle(connected()).unwrap();
        let effects = workflow
            .handle(WorkflowEvent::VoucherRejected {
                reason: "Already minted".into(),
            })
            .unwrap();
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::VoucherRejected("Already minted".into()))]
        );
        assert_eq!(workflow.state(), MintState::Failed);

        let mut workflow = ended();
        workflow.handle(submit("Alice")).unwrap();
        workflow.handle(connected()).unwrap();
        workflow
            .handle(WorkflowEvent::VoucherIssued(Voucher::new(serde_json::json!("abc"))))
            .unwrap();
        let effects = workflow
            .handle(WorkflowEvent::MintFailed {
                cause: "execution reverted".into(),
            })
            .unwrap();
        assert_eq!(effects, vec![Effect::Notify(Notice::MintFailed)]);
        assert!(workflow.state().is_terminal());
    }

    #[test]
    fn only_failed_attempts_can_be_rearmed() {
        let mut workflow = ended();
        assert_eq!(
            workflow.handle(WorkflowEvent::Rearm),
            Err(WorkflowError::CannotRearm(MintState::AwaitingName))
        );

        workflow.handle(submit("Alice")).unwrap();
        workflow.handle(connected()).unwrap();
        workflow
            .handle(WorkflowEvent::VoucherRejected {
                reason: "Already minted".into(),
            })
            .unwrap();
        assert!(workflow.handle(WorkflowEvent::Rearm).unwrap().is_empty());
        assert_eq!(workflow.state(), MintState::AwaitingName);
        assert!(!workflow.is_in_flight());
    }

    #[test]
    fn success_is_final() {
        let mut workflow = ended();
        workflow.handle(submit("Alice")).unwrap();
        workflow.handle(connected()).unwrap();
        workflow
            .handle(WorkflowEvent::VoucherIssued(Voucher::new(serde_json::json!("abc"))))
            .unwrap();
        workflow
            .handle(WorkflowEvent::Minted(MintedToken {
                token_id: TokenId::new("0"),
            }))
            .unwrap();

        assert_eq!(
            workflow.handle(WorkflowEvent::Rearm),
            Err(WorkflowError::CannotRearm(MintState::Success))
        );
        assert_eq!(
            workflow.handle(submit("Alice")),
            Err(WorkflowError::UnexpectedEvent {
                state: MintState::Success,
                event: "Submit",
            })
        );
    }

    #[test]
    fn submit_before_scene_ends_is_rejected() {
        let mut workflow = MintWorkflow::new();
        assert!(matches!(
            workflow.handle(submit("Alice")),
            Err(WorkflowError::UnexpectedEvent {
                state: MintState::Idle,
                ..
            })
        ));
    }
}
