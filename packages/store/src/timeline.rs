//! # Timeline selection
//!
//! The dashboard shows two independent reductions over the same log history:
//!
//! - [`todays_logs`] — entries on or after local midnight, newest first.
//! - [`last_reading`] — the newest blood-sugar reading over the *whole*
//!   history, regardless of the daily window.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::{LogEntry, LogKind};

/// Start of the local calendar day containing `now`, as a UTC instant.
///
/// When midnight does not exist locally (a DST jump at 00:00) the first
/// instant of the day is used instead.
pub fn local_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    let Some(midnight) = now.date_naive().and_hms_opt(0, 0, 0) else {
        return now.with_timezone(&Utc);
    };
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|start| start.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}

/// Entries with `timestamp >= midnight`, most recent first.
///
/// The sort is stable, so entries sharing a timestamp keep their relative
/// order from `logs`.
pub fn todays_logs(logs: &[LogEntry], midnight: DateTime<Utc>) -> Vec<&LogEntry> {
    let mut today: Vec<&LogEntry> = logs.iter().filter(|log| log.timestamp >= midnight).collect();
    today.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    today
}

/// Summary of the most recent blood-sugar reading.
#[derive(Clone, Debug, PartialEq)]
pub struct LastReading {
    pub glucose: f64,
    pub time: String,
    pub timestamp: DateTime<Utc>,
}

/// The blood-sugar entry with the greatest timestamp across all of `logs`.
///
/// Readings without a positive glucose value are ignored. On an exact tie the
/// entry that appears first in `logs` wins.
pub fn last_reading(logs: &[LogEntry]) -> Option<LastReading> {
    logs.iter()
        .filter_map(|log| match log.kind {
            LogKind::BloodSugar { glucose } if glucose > 0.0 => Some((log, glucose)),
            _ => None,
        })
        .fold(None, |best: Option<(&LogEntry, f64)>, (log, glucose)| match best {
            Some((current, _)) if current.timestamp >= log.timestamp => best,
            _ => Some((log, glucose)),
        })
        .map(|(log, glucose)| LastReading {
            glucose,
            time: log.time.clone(),
            timestamp: log.timestamp,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 19, h, m, 0).unwrap()
    }

    fn bg(id: &str, ts: DateTime<Utc>, glucose: f64) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            timestamp: ts,
            time: ts.format("%H:%M").to_string(),
            jalali_date: "1403/07/28".to_string(),
            kind: LogKind::BloodSugar { glucose },
        }
    }

    fn mood(id: &str, ts: DateTime<Utc>) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            timestamp: ts,
            time: ts.format("%H:%M").to_string(),
            jalali_date: "1403/07/28".to_string(),
            kind: LogKind::Mood { description: None },
        }
    }

    #[test]
    fn test_local_midnight_in_offset_zone() {
        // 02:00 in Tehran (+03:30) on the 19th is still the 19th locally.
        let tehran = FixedOffset::east_opt(3 * 3600 + 1800).unwrap();
        let now = tehran.with_ymd_and_hms(2024, 10, 19, 2, 0, 0).unwrap();
        let midnight = local_midnight(&now);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2024, 10, 18, 20, 30, 0).unwrap());
    }

    #[test]
    fn test_todays_logs_filters_and_sorts() {
        let midnight = at(0, 0);
        let logs = vec![
            bg("yesterday", midnight - Duration::minutes(1), 120.0),
            bg("morning", at(7, 0), 110.0),
            mood("exactly-midnight", midnight),
            bg("noon", at(12, 0), 140.0),
        ];

        let ids: Vec<&str> = todays_logs(&logs, midnight).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["noon", "morning", "exactly-midnight"]);
    }

    #[test]
    fn test_todays_logs_empty_when_nothing_today() {
        let midnight = at(0, 0);
        let logs = vec![bg("old", midnight - Duration::days(3), 99.0)];
        assert!(todays_logs(&logs, midnight).is_empty());
    }

    #[test]
    fn test_todays_logs_keeps_tie_order() {
        let logs = vec![mood("a", at(9, 0)), mood("b", at(9, 0)), mood("c", at(10, 0))];
        let ids: Vec<&str> = todays_logs(&logs, at(0, 0)).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_last_reading_spans_whole_history() {
        let logs = vec![
            bg("old", at(0, 0) - Duration::days(2), 180.0),
            mood("today", at(9, 0)),
            bg("older", at(0, 0) - Duration::days(5), 95.0),
        ];
        let last = last_reading(&logs).unwrap();
        assert_eq!(last.glucose, 180.0);
        assert_eq!(last.timestamp, at(0, 0) - Duration::days(2));
    }

    #[test]
    fn test_last_reading_picks_maximum_timestamp() {
        let logs = vec![bg("a", at(8, 0), 100.0), bg("b", at(11, 0), 150.0), bg("c", at(9, 0), 90.0)];
        assert_eq!(last_reading(&logs).unwrap().glucose, 150.0);
    }

    #[test]
    fn test_last_reading_none_without_readings() {
        assert_eq!(last_reading(&[]), None);
        let logs = vec![mood("m", at(8, 0)), bg("zero", at(9, 0), 0.0)];
        assert_eq!(last_reading(&logs), None);
    }
}
