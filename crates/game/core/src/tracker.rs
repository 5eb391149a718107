//! Score accumulation and session timing.

use crate::clock::MonotonicClock;
use crate::state::Collectible;

/// Accumulates points from collection events.
///
/// The score only moves up, by a fixed amount, and only on a collectible's
/// first collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    points_per_collectible: u32,
}

impl ScoreTracker {
    pub fn new(points_per_collectible: u32) -> Self {
        Self {
            score: 0,
            points_per_collectible,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Credits `collectible` if it has not been collected yet.
    ///
    /// Returns `true` when the score changed.
    pub fn on_collect(&mut self, collectible: &mut Collectible) -> bool {
        if !collectible.mark_collected() {
            return false;
        }
        self.score = self.score.saturating_add(self.points_per_collectible);
        true
    }
}

/// Measures time since the session started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTimer {
    started_at_ms: u64,
}

impl SessionTimer {
    pub fn start(clock: &dyn MonotonicClock) -> Self {
        Self {
            started_at_ms: clock.now_ms(),
        }
    }

    pub fn elapsed_ms(&self, clock: &dyn MonotonicClock) -> u64 {
        clock.now_ms().saturating_sub(self.started_at_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::state::{EntityId, Position};

    fn stars(count: u32) -> Vec<Collectible> {
        (0..count)
            .map(|i| Collectible::new(EntityId(i + 1), Position::new(12.0 + 70.0 * i as f32, 0.0)))
            .collect()
    }

    #[test]
    fn score_is_ten_per_distinct_collectible() {
        let mut tracker = ScoreTracker::new(10);
        let mut level = stars(7);
        let mut previous = 0;

        for (n, star) in level.iter_mut().enumerate() {
            assert!(tracker.on_collect(star));
            assert_eq!(tracker.score(), 10 * (n as u32 + 1));
            assert!(tracker.score() >= previous);
            previous = tracker.score();
        }
    }

    #[test]
    fn repeated_overlap_counts_once() {
        let mut tracker = ScoreTracker::new(10);
        let mut level = stars(2);

        for _ in 0..5 {
            tracker.on_collect(&mut level[0]);
        }
        assert_eq!(tracker.score(), 10);

        tracker.on_collect(&mut level[1]);
        tracker.on_collect(&mut level[1]);
        assert_eq!(tracker.score(), 20);
    }

    #[test]
    fn timer_measures_from_start() {
        let clock = ManualClock::new(2_000);
        let timer = SessionTimer::start(&clock);
        clock.advance(12_345);
        assert_eq!(timer.elapsed_ms(&clock), 12_345);
    }
}
