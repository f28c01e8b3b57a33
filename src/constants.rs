//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Event Countdown";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Period between refreshes of an active timer
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// How long an expiry toast stays on screen (fades over the last second)
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

pub const SECS_PER_MINUTE: u64 = 60;
pub const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
pub const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
