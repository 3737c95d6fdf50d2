//! Journey leveling derived from experience points.

use std::collections::HashSet;

use crate::models::LogEntry;

/// Experience points needed per level.
pub const LEVEL_THRESHOLD: u32 = 100;

/// Level and progress bar state. Recomputed from `xp` on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JourneyProgress {
    /// Starts at 1.
    pub level: u32,
    /// XP earned inside the current level, in `[0, LEVEL_THRESHOLD)`.
    pub current_level_xp: u32,
    pub xp_for_next_level: u32,
    /// Width of the progress bar, in `[0, 100)`.
    pub progress_percent: f64,
}

impl JourneyProgress {
    pub fn from_xp(xp: u32) -> Self {
        let current_level_xp = xp % LEVEL_THRESHOLD;
        Self {
            level: xp / LEVEL_THRESHOLD + 1,
            current_level_xp,
            xp_for_next_level: LEVEL_THRESHOLD,
            progress_percent: f64::from(current_level_xp) / f64::from(LEVEL_THRESHOLD) * 100.0,
        }
    }
}

/// Number of distinct calendar days with at least one log.
///
/// The dashboard shows this next to a flame, but it counts every day ever
/// logged, not a run of consecutive days.
pub fn active_days(logs: &[LogEntry]) -> usize {
    logs.iter()
        .map(|log| log.jalali_date.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogKind;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_level_from_xp() {
        let p = JourneyProgress::from_xp(250);
        assert_eq!(p.level, 3);
        assert_eq!(p.current_level_xp, 50);
        assert_eq!(p.progress_percent, 50.0);

        let p = JourneyProgress::from_xp(0);
        assert_eq!(p.level, 1);
        assert_eq!(p.progress_percent, 0.0);

        let p = JourneyProgress::from_xp(100);
        assert_eq!(p.level, 2);
        assert_eq!(p.current_level_xp, 0);
    }

    #[test]
    fn test_progress_stays_below_hundred() {
        for xp in [1, 99, 199, 12_345, u32::MAX] {
            let p = JourneyProgress::from_xp(xp);
            assert_eq!(p.level, xp / 100 + 1);
            assert_eq!(p.current_level_xp, xp % 100);
            assert!(p.progress_percent >= 0.0 && p.progress_percent < 100.0);
        }
    }

    #[test]
    fn test_active_days_counts_distinct_buckets() {
        let log = |id: &str, day: &str| LogEntry {
            id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 10, 19, 8, 0, 0).unwrap(),
            time: "11:30".to_string(),
            jalali_date: day.to_string(),
            kind: LogKind::Mood { description: None },
        };
        // Gaps between days still count: this is not a consecutive streak.
        let logs = vec![
            log("a", "1403/07/01"),
            log("b", "1403/07/01"),
            log("c", "1403/07/15"),
            log("d", "1403/07/28"),
        ];
        assert_eq!(active_days(&logs), 3);
        assert_eq!(active_days(&[]), 0);
    }
}
