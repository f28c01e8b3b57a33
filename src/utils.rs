//! Utility functions

use crate::constants::APP_NAME;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::path::PathBuf;

// Clock face with a teal hand, square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><circle cx="32" cy="34" r="24" fill="#18181b" stroke="#fff" stroke-width="4"/><rect x="26" y="4" width="12" height="6" rx="2" fill="#fff"/><path d="M32 34V18" stroke="#2dd4bf" stroke-width="4" stroke-linecap="round"/><path d="M32 34l10 6" stroke="#fff" stroke-width="4" stroke-linecap="round"/><circle cx="32" cy="34" r="3" fill="#2dd4bf"/></svg>"##;

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory path (settings + logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse user-entered date/time into epoch milliseconds.
///
/// Accepts `datetime-local` style values (interpreted in the local zone), a
/// bare date (local midnight), or RFC 3339 with an explicit offset. Returns
/// `None` for anything unparseable or for a local time skipped by a DST gap.
pub fn parse_target_millis(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.timestamp_millis());
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })?;

    // Ambiguous (DST fold) resolves to the earlier instant
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

/// Replace the date part of a target string, keeping any time already typed.
pub fn with_date(target: &str, date: NaiveDate) -> String {
    let time = target
        .trim()
        .split_once(|c: char| c == 'T' || c == ' ')
        .map(|(_, t)| t.trim())
        .filter(|t| {
            NaiveTime::parse_from_str(t, "%H:%M").is_ok()
                || NaiveTime::parse_from_str(t, "%H:%M:%S").is_ok()
        })
        .unwrap_or("00:00");
    format!("{}T{}", date.format("%Y-%m-%d"), time)
}

/// Date part of a target string, if it has one
pub fn date_part(target: &str) -> Option<NaiveDate> {
    let head = target.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Format epoch milliseconds as a local date/time for card subtitles
pub fn format_target(target_ms: i64) -> String {
    match Local.timestamp_millis_opt(target_ms).single() {
        Some(dt) => dt.format("%a %d %b %Y, %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}
