//! Timer board - owns the timer list and drives its refresh cycle
//!
//! All mutation happens here, on the caller's thread. Wall-clock time is
//! passed in explicitly by the `*_at` variants so the countdown logic can be
//! exercised with simulated time.

use crate::error::BoardError;
use crate::ticker::Ticker;
use crate::types::{seconds_until, Timer, TimerDraft, TimerId};
use crate::utils::{now_millis, parse_target_millis};
use tracing::{debug, info, warn};

#[derive(Default)]
pub struct TimerBoard {
    timers: Vec<Timer>,
    next_id: u64,
    ticker: Option<Ticker>,
}

impl TimerBoard {
    /// Board without a ticker; refreshes only happen through `refresh_at`.
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticker(ticker: Ticker) -> Self {
        Self {
            ticker: Some(ticker),
            ..Self::default()
        }
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn get(&self, id: TimerId) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|t| t.is_active).count()
    }

    /// Number of live tick tasks; matches `active_count` unless shut down
    pub fn ticking_count(&self) -> usize {
        self.ticker.as_ref().map_or(0, Ticker::scheduled_count)
    }

    pub fn submit(&mut self, draft: &mut TimerDraft) -> Result<TimerId, BoardError> {
        self.submit_at(draft, now_millis())
    }

    /// Add action of the input form: on success the draft is cleared, on
    /// failure it is left exactly as entered.
    pub fn submit_at(&mut self, draft: &mut TimerDraft, now_ms: i64) -> Result<TimerId, BoardError> {
        let id = self.add_at(draft, now_ms)?;
        draft.clear();
        Ok(id)
    }

    /// Validate the draft and append a new timer. A target already in the
    /// past yields a timer that is expired (and removable) from the start.
    pub fn add_at(&mut self, draft: &TimerDraft, now_ms: i64) -> Result<TimerId, BoardError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let category = draft.category.ok_or(BoardError::MissingCategory)?;
        let target = draft.target.trim();
        if target.is_empty() {
            return Err(BoardError::EmptyTarget);
        }
        let target_ms = parse_target_millis(target).ok_or_else(|| {
            warn!(input = %target, "Rejected unparseable target date/time");
            BoardError::InvalidTarget(target.to_string())
        })?;

        self.next_id += 1;
        let id = TimerId(self.next_id);
        let remaining_secs = seconds_until(target_ms, now_ms);
        let is_active = remaining_secs > 0;

        self.timers.push(Timer {
            id,
            title: title.to_string(),
            category,
            target_ms,
            remaining_secs,
            is_active,
        });

        if is_active {
            if let Some(ticker) = self.ticker.as_mut() {
                ticker.start(id);
            }
        }

        info!(
            id = %id,
            title = %title,
            category = %category,
            remaining_secs,
            expired = !is_active,
            "Timer added"
        );
        Ok(id)
    }

    /// Recompute one timer's remaining time. Returns true if this call
    /// expired it. Expired and unknown timers are left untouched.
    pub fn refresh_at(&mut self, id: TimerId, now_ms: i64) -> bool {
        let Some(timer) = self.timers.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if !timer.is_active {
            return false;
        }

        // Never count back up, even if the wall clock steps backwards
        timer.remaining_secs = seconds_until(timer.target_ms, now_ms).min(timer.remaining_secs);
        if timer.remaining_secs > 0 {
            return false;
        }

        timer.is_active = false;
        info!(id = %id, title = %timer.title, "Timer expired");
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.cancel(id);
        }
        true
    }

    pub fn poll(&mut self) -> Vec<TimerId> {
        self.poll_at(now_millis())
    }

    /// Apply every tick posted by the ticker since the last poll.
    /// Returns the timers that expired during this poll.
    pub fn poll_at(&mut self, now_ms: i64) -> Vec<TimerId> {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.drain(),
            None => return Vec::new(),
        };

        let mut expired = Vec::new();
        for id in due {
            if self.refresh_at(id, now_ms) {
                expired.push(id);
            }
        }
        expired
    }

    /// Remove an expired timer. Absent ids are a no-op (`Ok(None)`);
    /// running timers are rejected.
    pub fn remove(&mut self, id: TimerId) -> Result<Option<Timer>, BoardError> {
        let Some(pos) = self.timers.iter().position(|t| t.id == id) else {
            debug!(id = %id, "Remove ignored, no such timer");
            return Ok(None);
        };
        if self.timers[pos].is_active {
            return Err(BoardError::StillRunning(id));
        }

        let timer = self.timers.remove(pos);
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.cancel(id);
        }
        info!(id = %id, title = %timer.title, "Timer removed");
        Ok(Some(timer))
    }

    #[cfg(test)]
    pub fn is_ticking(&self, id: TimerId) -> bool {
        self.ticker.as_ref().is_some_and(|t| t.is_scheduled(id))
    }

    /// Cancel all outstanding ticks. The timers themselves are left as-is.
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.cancel_all();
        }
        debug!(timers = self.timers.len(), "Timer board shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::sync::Arc;
    use std::time::Duration;

    const BASE: i64 = 1_900_000_000_000;

    fn rfc3339(ms: i64) -> String {
        chrono::DateTime::from_timestamp_millis(ms).unwrap().to_rfc3339()
    }

    fn draft(title: &str, category: Category, target_ms: i64) -> TimerDraft {
        TimerDraft {
            title: title.to_string(),
            category: Some(category),
            target: rfc3339(target_ms),
        }
    }

    #[test]
    fn add_future_timer_is_active() {
        let mut board = TimerBoard::new();
        let id = board
            .add_at(&draft("Standup", Category::Meeting, BASE + 90_000), BASE)
            .unwrap();

        assert_eq!(board.len(), 1);
        let timer = board.get(id).unwrap();
        assert!(timer.is_active);
        assert_eq!(timer.remaining_secs, 90);
        assert!(!timer.is_removable());
        assert_eq!(board.active_count(), 1);
    }

    #[test]
    fn add_past_timer_is_already_expired() {
        let mut board = TimerBoard::new();
        let id = board
            .add_at(&draft("Yesterday", Category::Reminder, BASE - 86_400_000), BASE)
            .unwrap();

        let timer = board.get(id).unwrap();
        assert_eq!(timer.remaining_secs, 0);
        assert!(!timer.is_active);
        assert!(timer.is_removable());
        assert_eq!(board.remove(id).unwrap().map(|t| t.id), Some(id));
        assert!(board.is_empty());
    }

    #[test]
    fn add_rejects_incomplete_drafts() {
        let mut board = TimerBoard::new();
        let full = draft("Party", Category::Birthday, BASE + 1_000);

        let no_title = TimerDraft { title: "  ".into(), ..full.clone() };
        assert_eq!(board.add_at(&no_title, BASE), Err(BoardError::EmptyTitle));

        let no_category = TimerDraft { category: None, ..full.clone() };
        assert_eq!(board.add_at(&no_category, BASE), Err(BoardError::MissingCategory));

        let no_target = TimerDraft { target: String::new(), ..full };
        assert_eq!(board.add_at(&no_target, BASE), Err(BoardError::EmptyTarget));

        assert!(board.is_empty());
    }

    #[test]
    fn add_rejects_unparseable_target() {
        let mut board = TimerBoard::new();
        let bad = TimerDraft {
            title: "Party".into(),
            category: Some(Category::Birthday),
            target: "next friday".into(),
        };
        assert_eq!(
            board.add_at(&bad, BASE),
            Err(BoardError::InvalidTarget("next friday".into()))
        );
        assert!(board.is_empty());
    }

    #[test]
    fn submit_clears_the_form_on_success() {
        let mut board = TimerBoard::new();
        let mut form = draft("Dentist", Category::Reminder, BASE + 120_000);

        let id = board.submit_at(&mut form, BASE).unwrap();
        assert_eq!(form, TimerDraft::default());
        assert!(!form.is_complete());
        assert_eq!(board.get(id).unwrap().title, "Dentist");
        assert_eq!(board.get(id).unwrap().remaining_secs, 120);
    }

    #[test]
    fn submit_keeps_the_form_on_error() {
        let mut board = TimerBoard::new();
        let mut form = TimerDraft {
            title: "Party".into(),
            category: Some(Category::Birthday),
            target: "31/02/2030".into(),
        };
        let before = form.clone();

        assert_eq!(
            board.submit_at(&mut form, BASE),
            Err(BoardError::InvalidTarget("31/02/2030".into()))
        );
        assert_eq!(form, before);
        assert!(board.is_empty());

        let mut untitled = TimerDraft { title: " ".into(), ..before };
        let kept = untitled.clone();
        assert_eq!(board.submit_at(&mut untitled, BASE), Err(BoardError::EmptyTitle));
        assert_eq!(untitled, kept);
    }

    #[test]
    fn title_is_trimmed() {
        let mut board = TimerBoard::new();
        let id = board
            .add_at(&draft("  Launch ", Category::Meeting, BASE + 5_000), BASE)
            .unwrap();
        assert_eq!(board.get(id).unwrap().title, "Launch");
    }

    #[test]
    fn ids_stay_unique_across_removals() {
        let mut board = TimerBoard::new();
        let a = board.add_at(&draft("a", Category::Meeting, BASE - 1), BASE).unwrap();
        let b = board.add_at(&draft("b", Category::Meeting, BASE - 1), BASE).unwrap();
        assert_eq!(a, TimerId(1));
        assert_eq!(b, TimerId(2));

        board.remove(a).unwrap();
        let c = board.add_at(&draft("c", Category::Meeting, BASE - 1), BASE).unwrap();
        assert_ne!(c, b);
        assert_eq!(c, TimerId(3));
        assert_eq!(board.timers().iter().map(|t| t.id).collect::<Vec<_>>(), vec![b, c]);
    }

    #[test]
    fn remaining_never_increases_and_sticks_at_zero() {
        let mut board = TimerBoard::new();
        let id = board.add_at(&draft("x", Category::Reminder, BASE + 3_500), BASE).unwrap();

        let mut last = board.get(id).unwrap().remaining_secs;
        let mut expirations = 0;
        for step in 1..=10 {
            if board.refresh_at(id, BASE + step * 1_000) {
                expirations += 1;
            }
            let now = board.get(id).unwrap().remaining_secs;
            assert!(now <= last, "step {step}: {now} > {last}");
            last = now;
        }
        assert_eq!(last, 0);
        assert_eq!(expirations, 1);
        assert!(!board.get(id).unwrap().is_active);
    }

    #[test]
    fn clock_stepping_back_does_not_rewind() {
        let mut board = TimerBoard::new();
        let id = board.add_at(&draft("x", Category::Reminder, BASE + 60_000), BASE).unwrap();
        board.refresh_at(id, BASE + 30_000);
        board.refresh_at(id, BASE);
        assert_eq!(board.get(id).unwrap().remaining_secs, 30);
    }

    #[test]
    fn expired_timer_never_restarts() {
        let mut board = TimerBoard::new();
        let id = board.add_at(&draft("x", Category::Reminder, BASE + 1_000), BASE).unwrap();
        assert!(board.refresh_at(id, BASE + 1_000));
        assert!(!board.refresh_at(id, BASE - 100_000));
        let timer = board.get(id).unwrap();
        assert_eq!(timer.remaining_secs, 0);
        assert!(!timer.is_active);
    }

    #[test]
    fn refresh_unknown_id_is_ignored() {
        let mut board = TimerBoard::new();
        assert!(!board.refresh_at(TimerId(42), BASE));
    }

    #[test]
    fn remove_running_timer_is_rejected() {
        let mut board = TimerBoard::new();
        let id = board.add_at(&draft("x", Category::Meeting, BASE + 10_000), BASE).unwrap();
        assert_eq!(board.remove(id), Err(BoardError::StillRunning(id)));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn remove_absent_timer_is_noop() {
        let mut board = TimerBoard::new();
        board.add_at(&draft("x", Category::Meeting, BASE - 1), BASE).unwrap();
        assert_eq!(board.remove(TimerId(99)), Ok(None));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn launch_scenario() {
        let mut board = TimerBoard::new();
        let id = board
            .add_at(&draft("Launch", Category::Meeting, BASE + 3_661_000), BASE)
            .unwrap();

        let timer = board.get(id).unwrap();
        assert_eq!(timer.remaining_secs, 3_661);
        let shown = timer.remaining();
        assert_eq!((shown.days, shown.hours, shown.minutes, shown.seconds), (0, 1, 1, 1));
        assert!(!shown.shows_days());

        for s in 1..=3_661 {
            board.refresh_at(id, BASE + s * 1_000);
            if s < 3_661 {
                assert!(board.get(id).unwrap().is_active, "expired early at {s}");
            }
        }

        let timer = board.get(id).unwrap();
        assert_eq!(timer.remaining_secs, 0);
        assert!(!timer.is_active);
        assert!(timer.is_removable());
        assert!(board.remove(id).unwrap().is_some());
    }

    fn ticking_board() -> TimerBoard {
        let ticker = Ticker::new(
            tokio::runtime::Handle::current(),
            Duration::from_secs(1),
            Arc::new(|| {}),
        );
        TimerBoard::with_ticker(ticker)
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_drives_expiry_and_cancels_task() {
        let mut board = ticking_board();
        let id = board.add_at(&draft("x", Category::Meeting, BASE + 2_000), BASE).unwrap();
        assert!(board.is_ticking(id));

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        assert!(board.poll_at(BASE + 1_000).is_empty());
        assert_eq!(board.get(id).unwrap().remaining_secs, 1);

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(board.poll_at(BASE + 2_000), vec![id]);
        assert!(!board.get(id).unwrap().is_active);
        assert!(!board.is_ticking(id));

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(board.poll_at(BASE + 5_000).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticks_refresh_each_timer_once() {
        let mut board = ticking_board();
        let a = board.add_at(&draft("a", Category::Meeting, BASE + 3_000), BASE).unwrap();
        let b = board.add_at(&draft("b", Category::Birthday, BASE + 60_000), BASE).unwrap();
        assert_eq!(board.ticking_count(), 2);

        // Several periods pass without a poll
        tokio::time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(board.poll_at(BASE + 5_500), vec![a]);
        assert_eq!(board.get(a).unwrap().remaining_secs, 0);
        assert_eq!(board.get(b).unwrap().remaining_secs, 54);
        assert_eq!(board.ticking_count(), 1);

        assert!(board.poll_at(BASE + 5_600).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn expired_on_add_never_ticks() {
        let mut board = ticking_board();
        let id = board.add_at(&draft("x", Category::Meeting, BASE - 1_000), BASE).unwrap();
        assert!(!board.is_ticking(id));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_outstanding_ticks() {
        let mut board = ticking_board();
        let a = board.add_at(&draft("a", Category::Meeting, BASE + 60_000), BASE).unwrap();
        let b = board.add_at(&draft("b", Category::Birthday, BASE + 60_000), BASE).unwrap();
        assert!(board.is_ticking(a) && board.is_ticking(b));

        board.shutdown();
        assert!(!board.is_ticking(a) && !board.is_ticking(b));
        assert_eq!(board.ticking_count(), 0);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(board.poll_at(BASE + 3_000).is_empty());
        assert_eq!(board.get(a).unwrap().remaining_secs, 60);
    }
}
