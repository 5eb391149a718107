//! Utilities for reacting to workflow snapshots inside UI layers.
use crate::message::MessageLog;
use crate::workflow::MintSnapshot;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_snapshot(&mut self, snapshot: &MintSnapshot) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Copies each new notice into a message log exactly once.
#[derive(Clone, Debug)]
pub struct NoticeFeed {
    log: MessageLog,
    last_seen: u64,
    last_snapshot: Option<MintSnapshot>,
}

impl NoticeFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            log: MessageLog::new(capacity),
            last_seen: 0,
            last_snapshot: None,
        }
    }
}

impl EventConsumer for NoticeFeed {
    fn on_snapshot(&mut self, snapshot: &MintSnapshot) -> EventImpact {
        let mut impact = EventImpact::none();

        if snapshot.notice_seq > self.last_seen {
            self.last_seen = snapshot.notice_seq;
            if let Some(notice) = &snapshot.notice {
                self.log.push_notice(notice);
            }
            impact = impact.combine(EventImpact::redraw());
        }

        if self.last_snapshot.as_ref() != Some(snapshot) {
            self.last_snapshot = Some(snapshot.clone());
            impact = impact.combine(EventImpact::redraw());
        }

        impact
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{MintState, Notice};

    #[test]
    fn repeated_notice_is_logged_per_sequence() {
        let mut feed = NoticeFeed::new(8);
        let mut snapshot = MintSnapshot {
            state: MintState::AwaitingName,
            notice: Some(Notice::NameRequired),
            notice_seq: 1,
            ..MintSnapshot::default()
        };

        assert!(feed.on_snapshot(&snapshot).requires_redraw);
        assert!(!feed.on_snapshot(&snapshot).requires_redraw);

        snapshot.notice_seq = 2;
        feed.on_snapshot(&snapshot);

        assert_eq!(feed.message_log().len(), 2);
    }
}
