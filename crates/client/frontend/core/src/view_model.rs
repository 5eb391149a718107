//! Frontend-agnostic views of the session and the minting flow.
use client_blockchain_core::CollectionEntry;
use game_core::HudSnapshot;

use crate::workflow::{MintSnapshot, MintState, Notice};

/// Title shown while the ending screen waits for a nickname.
pub const MINT_TITLE: &str = "Submit your nickname to mint";

/// Reminder of the one-voucher-per-address rule.
pub const MINT_LIMIT_NOTE: &str = "Players can mint only 1 NFT per address";

/// HUD labels while playing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudView {
    pub score: String,
    pub time: String,
}

impl HudView {
    pub fn from_snapshot(hud: &HudSnapshot) -> Self {
        Self {
            score: format!("Score: {}", hud.score),
            time: format!("time: {}", hud.elapsed_ms),
        }
    }
}

/// Ending screen state derived from a workflow snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndingView {
    pub title: Option<&'static str>,
    /// Name entry is open and no request is running.
    pub accepts_name: bool,
    /// Progress line while a request chain runs.
    pub progress: Option<&'static str>,
    /// Latest notice relevant to the current state.
    pub message: Option<String>,
    pub can_rearm: bool,
    pub note: &'static str,
}

impl EndingView {
    pub fn from_snapshot(snapshot: &MintSnapshot) -> Self {
        let accepts_name = snapshot.state == MintState::AwaitingName && !snapshot.in_flight;

        let progress = match snapshot.state {
            MintState::AwaitingName if snapshot.in_flight => Some("Connecting wallet..."),
            MintState::RequestingVoucher => Some("Requesting mint voucher..."),
            MintState::AwaitingMintConfirmation => Some("Minting your collectible..."),
            _ => None,
        };

        let message = snapshot
            .notice
            .as_ref()
            .filter(|notice| notice_applies(snapshot, notice))
            .map(ToString::to_string);

        Self {
            title: accepts_name.then_some(MINT_TITLE),
            accepts_name,
            progress,
            message,
            can_rearm: snapshot.state == MintState::Failed,
            note: MINT_LIMIT_NOTE,
        }
    }
}

fn notice_applies(snapshot: &MintSnapshot, notice: &Notice) -> bool {
    let state = snapshot.state;
    match notice {
        // Name-entry notices belong to the previous submit; a running one replaces them.
        Notice::NameRequired | Notice::WalletUnavailable => {
            state == MintState::AwaitingName && !snapshot.in_flight
        }
        Notice::Minted { .. } => state == MintState::Success,
        Notice::VoucherRejected(_) | Notice::MintFailed => state == MintState::Failed,
    }
}

/// One minted collectible on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreboardRow {
    pub handle: String,
    pub description: String,
    pub owner: String,
}

impl From<&CollectionEntry> for ScoreboardRow {
    fn from(entry: &CollectionEntry) -> Self {
        Self {
            handle: format!("@{}", entry.name),
            description: entry.description.clone(),
            owner: entry.owner.shortened(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreboardView {
    pub rows: Vec<ScoreboardRow>,
}

impl ScoreboardView {
    pub fn from_entries(entries: &[CollectionEntry]) -> Self {
        Self {
            rows: entries.iter().map(ScoreboardRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use client_blockchain_core::{TokenId, WalletAddress};
    use game_core::SessionSummary;

    use super::*;

    #[test]
    fn hud_labels() {
        let hud = HudView::from_snapshot(&HudSnapshot {
            score: 30,
            elapsed_ms: 4_210,
        });
        assert_eq!(hud.score, "Score: 30");
        assert_eq!(hud.time, "time: 4210");
    }

    #[test]
    fn ending_view_follows_workflow() {
        let mut snapshot = MintSnapshot {
            state: MintState::AwaitingName,
            summary: Some(SessionSummary::new(120, 12_345)),
            ..MintSnapshot::default()
        };
        let view = EndingView::from_snapshot(&snapshot);
        assert_eq!(view.title, Some(MINT_TITLE));
        assert!(view.accepts_name);

        snapshot.in_flight = true;
        let view = EndingView::from_snapshot(&snapshot);
        assert_eq!(view.title, None);
        assert_eq!(view.progress, Some("Connecting wallet..."));

        snapshot.state = MintState::Failed;
        snapshot.in_flight = false;
        snapshot.notice = Some(Notice::VoucherRejected("Already minted".into()));
        let view = EndingView::from_snapshot(&snapshot);
        assert_eq!(view.message.as_deref(), Some("Already minted"));
        assert!(view.can_rearm);

        // A rejection does not linger once the attempt is re-armed.
        snapshot.state = MintState::AwaitingName;
        assert_eq!(EndingView::from_snapshot(&snapshot).message, None);
    }

    #[test]
    fn resubmit_clears_wallet_notice() {
        let mut snapshot = MintSnapshot {
            state: MintState::AwaitingName,
            summary: Some(SessionSummary::new(120, 12_345)),
            notice: Some(Notice::WalletUnavailable),
            notice_seq: 1,
            ..MintSnapshot::default()
        };
        assert_eq!(
            EndingView::from_snapshot(&snapshot).message,
            Some(Notice::WalletUnavailable.to_string())
        );

        snapshot.in_flight = true;
        let view = EndingView::from_snapshot(&snapshot);
        assert_eq!(view.progress, Some("Connecting wallet..."));
        assert_eq!(view.message, None);

        snapshot.notice = Some(Notice::NameRequired);
        assert_eq!(EndingView::from_snapshot(&snapshot).message, None);
    }

    #[test]
    fn scoreboard_rows() {
        let entry = CollectionEntry {
            token_id: TokenId::new("0"),
            name: "Alice".into(),
            description: "Finished in 12.345 seconds".into(),
            owner: WalletAddress::new("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
        };
        let view = ScoreboardView::from_entries(&[entry]);
        assert_eq!(
            view.rows,
            vec![ScoreboardRow {
                handle: "@Alice".into(),
                description: "Finished in 12.345 seconds".into(),
                owner: "0x7099...79C8".into(),
            }]
        );
    }
}
