//! # Local backup files
//!
//! A backup is a pretty-printed JSON document:
//!
//! ```json
//! { "version": 1, "exportedAt": "2024-10-19T08:30:00Z", "user": { ... } }
//! ```
//!
//! [`import`] also accepts a bare user object, which is what older exports
//! contain. The picker in the settings screen only offers JSON files; see
//! [`accepts_upload`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::User;

/// Format version written by [`export`].
pub const BACKUP_VERSION: u32 = 1;

/// `accept` attribute of the restore file input.
pub const ACCEPT: &str = ".json,application/json";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("backup is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backup version {0} is newer than this app supports")]
    UnsupportedVersion(u32),
    #[error("duplicate log id `{0}`")]
    DuplicateLogId(String),
    #[error("duplicate reminder id `{0}`")]
    DuplicateReminderId(String),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    version: u32,
    exported_at: DateTime<Utc>,
    user: User,
}

/// Serialize `user` into a backup document.
pub fn export(user: &User, now: DateTime<Utc>) -> Result<String, BackupError> {
    let envelope = Envelope {
        version: BACKUP_VERSION,
        exported_at: now,
        user: user.clone(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parse a backup document back into a [`User`].
pub fn import(text: &str) -> Result<User, BackupError> {
    let value: Value = serde_json::from_str(text)?;
    let user = if value.get("user").is_some() && value.get("version").is_some() {
        let envelope: Envelope = serde_json::from_value(value)?;
        if envelope.version > BACKUP_VERSION {
            return Err(BackupError::UnsupportedVersion(envelope.version));
        }
        envelope.user
    } else {
        serde_json::from_value(value)?
    };
    check_unique_ids(&user)?;
    Ok(user)
}

fn check_unique_ids(user: &User) -> Result<(), BackupError> {
    let mut seen = std::collections::HashSet::new();
    for log in &user.logs {
        if !seen.insert(log.id.as_str()) {
            return Err(BackupError::DuplicateLogId(log.id.clone()));
        }
    }
    seen.clear();
    for reminder in &user.reminders {
        if !seen.insert(reminder.id.as_str()) {
            return Err(BackupError::DuplicateReminderId(reminder.id.clone()));
        }
    }
    Ok(())
}

/// Whether the file picker should accept a file with this name and MIME type.
pub fn accepts_upload(file_name: &str, mime: &str) -> bool {
    mime.eq_ignore_ascii_case("application/json") || file_name.to_ascii_lowercase().ends_with(".json")
}

/// Suggested download name, e.g. `glucojourney-backup-2024-10-19.json`.
pub fn file_name(day: NaiveDate) -> String {
    format!("glucojourney-backup-{}.json", day.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogEntry, LogKind, Profile, Reminder, ReminderType};
    use chrono::TimeZone;

    fn sample_user() -> User {
        let mut user = User::new("user_1", "Sara", Profile::default());
        user.xp = 140;
        user.logs.push(LogEntry {
            id: "log_1".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 10, 19, 8, 0, 0).unwrap(),
            time: "11:30".to_string(),
            jalali_date: "1403/07/28".to_string(),
            kind: LogKind::BloodSugar { glucose: 126.0 },
        });
        user.reminders.push(Reminder {
            id: "reminder_1".to_string(),
            kind: ReminderType::CheckBg,
            time: "08:00".to_string(),
            enabled: true,
        });
        user
    }

    #[test]
    fn test_export_then_import() {
        let user = sample_user();
        let text = export(&user, Utc.with_ymd_and_hms(2024, 10, 19, 9, 0, 0).unwrap()).unwrap();
        assert!(text.contains("\"version\": 1"));
        assert!(text.contains("\"exportedAt\""));
        assert_eq!(import(&text).unwrap(), user);
    }

    #[test]
    fn test_import_bare_user() {
        let text = serde_json::to_string(&sample_user()).unwrap();
        assert_eq!(import(&text).unwrap().name, "Sara");
    }

    #[test]
    fn test_import_rejects_future_version() {
        let text = r#"{ "version": 9, "exportedAt": "2024-10-19T08:00:00Z",
                        "user": { "id": "u", "name": "n" } }"#;
        assert!(matches!(import(text), Err(BackupError::UnsupportedVersion(9))));
    }

    #[test]
    fn test_import_rejects_duplicate_log_ids() {
        let mut user = sample_user();
        let copy = user.logs[0].clone();
        user.logs.push(copy);
        let text = serde_json::to_string(&user).unwrap();
        assert!(matches!(import(&text), Err(BackupError::DuplicateLogId(id)) if id == "log_1"));
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(matches!(import("not json"), Err(BackupError::Json(_))));
        assert!(matches!(import("{\"hello\": 1}"), Err(BackupError::Json(_))));
    }

    #[test]
    fn test_accepts_upload() {
        assert!(accepts_upload("backup.json", ""));
        assert!(accepts_upload("BACKUP.JSON", "text/plain"));
        assert!(accepts_upload("export", "application/json"));
        assert!(!accepts_upload("photo.png", "image/png"));
    }

    #[test]
    fn test_file_name() {
        let day = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();
        assert_eq!(file_name(day), "glucojourney-backup-2024-10-19.json");
    }
}
