//! Local glucose estimate shown by the prediction card.

use chrono::{DateTime, Utc};

use crate::models::{LogEntry, LogKind};

/// An estimated glucose value and when it was made.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    /// mg/dL, rounded to a whole number.
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Weighted mean of the three most recent blood-sugar readings (weights 3, 2
/// and 1, newest first). `None` without any reading.
pub fn estimate(logs: &[LogEntry], now: DateTime<Utc>) -> Option<Prediction> {
    let mut readings: Vec<(DateTime<Utc>, f64)> = logs
        .iter()
        .filter_map(|log| match log.kind {
            LogKind::BloodSugar { glucose } if glucose > 0.0 => Some((log.timestamp, glucose)),
            _ => None,
        })
        .collect();
    readings.sort_by(|a, b| b.0.cmp(&a.0));

    let (sum, weights) = readings
        .iter()
        .take(3)
        .zip([3.0, 2.0, 1.0])
        .fold((0.0, 0.0), |(sum, weights), ((_, glucose), w)| (sum + glucose * w, weights + w));

    if weights == 0.0 {
        return None;
    }
    Some(Prediction {
        value: (sum / weights).round(),
        timestamp: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bg(hour: u32, glucose: f64) -> LogEntry {
        LogEntry {
            id: format!("bg_{hour}"),
            timestamp: Utc.with_ymd_and_hms(2024, 10, 19, hour, 0, 0).unwrap(),
            time: format!("{hour:02}:00"),
            jalali_date: "1403/07/28".to_string(),
            kind: LogKind::BloodSugar { glucose },
        }
    }

    #[test]
    fn test_weights_newest_readings() {
        let now = Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap();
        // Oldest reading is outside the window of three.
        let logs = vec![bg(6, 300.0), bg(8, 100.0), bg(9, 130.0), bg(10, 160.0)];
        let p = estimate(&logs, now).unwrap();
        // (160*3 + 130*2 + 100*1) / 6 = 140
        assert_eq!(p.value, 140.0);
        assert_eq!(p.timestamp, now);
    }

    #[test]
    fn test_single_reading() {
        let now = Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap();
        assert_eq!(estimate(&[bg(9, 121.0)], now).unwrap().value, 121.0);
    }

    #[test]
    fn test_no_readings() {
        assert_eq!(estimate(&[], Utc::now()), None);
    }
}
