//! Common types and data structures

use crate::constants::{SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE};
use std::fmt;

/// Session-unique timer identity, never reused after removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed set of timer categories offered by the input panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Meeting,
    Birthday,
    Reminder,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Meeting, Category::Birthday, Category::Reminder];

    pub fn label(self) -> &'static str {
        match self {
            Category::Meeting => "Meeting",
            Category::Birthday => "Birthday",
            Category::Reminder => "Reminder",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Meeting => egui_phosphor::regular::USERS_THREE,
            Category::Birthday => egui_phosphor::regular::CAKE,
            Category::Reminder => egui_phosphor::regular::BELL,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single countdown
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub id: TimerId,
    pub title: String,
    pub category: Category,
    /// Target instant in epoch milliseconds
    pub target_ms: i64,
    pub remaining_secs: u64,
    /// Running while true; flips to false once, when the countdown hits zero
    pub is_active: bool,
}

impl Timer {
    pub fn is_removable(&self) -> bool {
        !self.is_active
    }

    pub fn remaining(&self) -> Remaining {
        format_remaining(self.remaining_secs)
    }
}

/// Whole seconds left until `target_ms`, floored and clamped at zero
pub fn seconds_until(target_ms: i64, now_ms: i64) -> u64 {
    (target_ms.saturating_sub(now_ms).max(0) / 1000) as u64
}

/// Transient input panel state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerDraft {
    pub title: String,
    pub category: Option<Category>,
    pub target: String,
}

impl TimerDraft {
    /// All three fields filled in; gates the add button
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && self.category.is_some() && !self.target.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Days/hours/minutes/seconds breakdown of a remaining duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    /// Days are hidden while zero; the other units are always shown
    pub fn shows_days(&self) -> bool {
        self.days > 0
    }
}

pub fn format_remaining(secs: u64) -> Remaining {
    Remaining {
        days: secs / SECS_PER_DAY,
        hours: (secs % SECS_PER_DAY) / SECS_PER_HOUR,
        minutes: (secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
        seconds: secs % SECS_PER_MINUTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_zero() {
        assert_eq!(format_remaining(0), Remaining { days: 0, hours: 0, minutes: 0, seconds: 0 });
        assert!(!format_remaining(0).shows_days());
    }

    #[test]
    fn format_one_of_each_unit() {
        let r = format_remaining(86_400 + 3_600 + 60 + 1);
        assert_eq!(r, Remaining { days: 1, hours: 1, minutes: 1, seconds: 1 });
        assert!(r.shows_days());
    }

    #[test]
    fn format_just_under_a_day() {
        let r = format_remaining(86_399);
        assert_eq!(r, Remaining { days: 0, hours: 23, minutes: 59, seconds: 59 });
        assert!(!r.shows_days());
    }

    #[test]
    fn seconds_until_floors_and_clamps() {
        assert_eq!(seconds_until(10_999, 0), 10);
        assert_eq!(seconds_until(1_000, 0), 1);
        assert_eq!(seconds_until(999, 0), 0);
        assert_eq!(seconds_until(0, 5_000), 0);
        assert_eq!(seconds_until(i64::MIN, i64::MAX), 0);
    }

    #[test]
    fn draft_requires_every_field() {
        let mut draft = TimerDraft::default();
        assert!(!draft.is_complete());

        draft.title = "Launch".into();
        draft.category = Some(Category::Meeting);
        assert!(!draft.is_complete());

        draft.target = "2030-01-01T09:00".into();
        assert!(draft.is_complete());

        draft.title = "   ".into();
        assert!(!draft.is_complete());

        draft.clear();
        assert_eq!(draft, TimerDraft::default());
    }

    #[test]
    fn category_labels() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["Meeting", "Birthday", "Reminder"]);
    }
}
