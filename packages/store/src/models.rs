//! # Domain models for the user record
//!
//! Everything the shell hands to the screens hangs off [`User`]. These types are
//! `Serialize + Deserialize` so the same shapes travel through local backups and
//! the cloud-sync collaborator.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The tracked person: identity, accumulated `xp`, health logs, reminders and avatar cosmetics. |
//! | [`LogEntry`] | One health log. Common fields (`id`, `timestamp`, display `time`, `jalali_date` day bucket) plus a [`LogKind`] carrying only the fields relevant to that kind. |
//! | [`Reminder`] | A daily local notification request of a fixed [`ReminderType`]. |
//!
//! ## Wire shape
//!
//! Field names are camelCase and the kind discriminant is a `"type"` field next
//! to the common fields, e.g.
//!
//! ```json
//! { "id": "log_1", "timestamp": "2024-10-19T08:30:00Z", "time": "12:00",
//!   "jalaliDate": "1403/07/28", "type": "bloodSugar", "glucose": 132 }
//! ```
//!
//! Tags this version does not know decode as [`LogKind::Unknown`] instead of
//! failing the whole record.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The person whose diary the app shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub profile: Profile,
    /// Experience points, only ever increased by gameplay outside this crate.
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub avatar: AvatarCustomization,
}

impl User {
    /// Create a fresh user with no history.
    pub fn new(id: impl Into<String>, name: impl Into<String>, profile: Profile) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            profile,
            xp: 0,
            logs: Vec::new(),
            reminders: Vec::new(),
            avatar: AvatarCustomization::default(),
        }
    }

    /// A copy of this user with the reminder list replaced.
    pub fn with_reminders(&self, reminders: Vec<Reminder>) -> Self {
        Self {
            reminders,
            ..self.clone()
        }
    }

    /// A copy of this user with the log list replaced.
    pub fn with_logs(&self, logs: Vec<LogEntry>) -> Self {
        Self {
            logs,
            ..self.clone()
        }
    }
}

/// Optional details collected during onboarding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Free-form birth date as typed, e.g. "1375/01/20".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

/// Cosmetic items unlocked for the journey avatar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AvatarCustomization {
    #[serde(default)]
    pub hat: bool,
}

/// A single health log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    /// Sole ordering key for display.
    pub timestamp: DateTime<Utc>,
    /// Display string, e.g. "08:30".
    pub time: String,
    /// Calendar-day bucket, e.g. "1403/07/28".
    pub jalali_date: String,
    #[serde(flatten)]
    pub kind: LogKind,
}

/// Kind-specific payload of a [`LogEntry`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LogKind {
    BloodSugar {
        /// mg/dL
        glucose: f64,
    },
    #[serde(rename_all = "camelCase")]
    Meal {
        /// Grams of carbohydrate.
        carbs: f64,
        meal_type: MealType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Activity {
        activity_type: String,
        /// Minutes.
        duration: u32,
    },
    #[serde(rename_all = "camelCase")]
    Insulin {
        insulin_dose: f64,
        insulin_type: String,
    },
    Mood {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    PhysicalCondition {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Medication {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Sleep {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl LogKind {
    /// The discriminant as it appears on the wire.
    pub fn tag(&self) -> &'static str {
        match self {
            LogKind::BloodSugar { .. } => "bloodSugar",
            LogKind::Meal { .. } => "meal",
            LogKind::Activity { .. } => "activity",
            LogKind::Insulin { .. } => "insulin",
            LogKind::Mood { .. } => "mood",
            LogKind::PhysicalCondition { .. } => "physicalCondition",
            LogKind::Medication { .. } => "medication",
            LogKind::Sleep { .. } => "sleep",
            LogKind::Unknown => "unknown",
        }
    }

    /// Localization key of the kind's label, e.g. `"logMenuBloodSugar"`.
    pub fn menu_key(&self) -> &'static str {
        match self {
            LogKind::BloodSugar { .. } => "logMenuBloodSugar",
            LogKind::Meal { .. } => "logMenuMeal",
            LogKind::Activity { .. } => "logMenuActivity",
            LogKind::Insulin { .. } => "logMenuInsulin",
            LogKind::Mood { .. } => "logMenuMood",
            LogKind::PhysicalCondition { .. } => "logMenuPhysicalCondition",
            LogKind::Medication { .. } => "logMenuMedication",
            LogKind::Sleep { .. } => "logMenuSleep",
            LogKind::Unknown => "logMenuUnknown",
        }
    }

    /// Free-text description, for the kinds that carry one.
    pub fn description(&self) -> Option<&str> {
        match self {
            LogKind::Meal { description, .. }
            | LogKind::Mood { description }
            | LogKind::PhysicalCondition { description }
            | LogKind::Medication { description }
            | LogKind::Sleep { description } => description.as_deref().filter(|d| !d.is_empty()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn name_key(&self) -> &'static str {
        match self {
            MealType::Breakfast => "mealType_breakfast",
            MealType::Lunch => "mealType_lunch",
            MealType::Dinner => "mealType_dinner",
            MealType::Snack => "mealType_snack",
        }
    }
}

/// A daily reminder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReminderType,
    /// "HH:MM"
    pub time: String,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    #[default]
    CheckBg,
    TakeMeds,
}

impl ReminderType {
    pub const ALL: [ReminderType; 2] = [ReminderType::CheckBg, ReminderType::TakeMeds];

    /// Value used in form controls and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderType::CheckBg => "check_bg",
            ReminderType::TakeMeds => "take_meds",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ReminderType::CheckBg => "reminderType_check_bg",
            ReminderType::TakeMeds => "reminderType_take_meds",
        }
    }
}

impl FromStr for ReminderType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "check_bg" => Ok(ReminderType::CheckBg),
            "take_meds" => Ok(ReminderType::TakeMeds),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_wire_shape() {
        let json = r#"{
            "id": "log_1",
            "timestamp": "2024-10-19T08:30:00Z",
            "time": "12:00",
            "jalaliDate": "1403/07/28",
            "type": "meal",
            "carbs": 45,
            "mealType": "lunch"
        }"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.jalali_date, "1403/07/28");
        assert_eq!(
            entry.kind,
            LogKind::Meal {
                carbs: 45.0,
                meal_type: MealType::Lunch,
                description: None,
            }
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "meal");
        assert_eq!(value["mealType"], "lunch");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_unknown_kind_is_absorbed() {
        let json = r#"{
            "id": "log_2",
            "timestamp": "2024-10-19T08:30:00Z",
            "time": "12:00",
            "jalaliDate": "1403/07/28",
            "type": "hydration"
        }"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, LogKind::Unknown);
        assert_eq!(entry.kind.menu_key(), "logMenuUnknown");
    }

    #[test]
    fn test_reminder_type_wire_names() {
        let reminder = Reminder {
            id: "reminder_1".to_string(),
            kind: ReminderType::TakeMeds,
            time: "21:00".to_string(),
            enabled: true,
        };
        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["type"], "take_meds");
        assert_eq!("check_bg".parse::<ReminderType>(), Ok(ReminderType::CheckBg));
        assert!("nap".parse::<ReminderType>().is_err());
    }

    #[test]
    fn test_description_ignores_blank() {
        let kind = LogKind::Mood {
            description: Some(String::new()),
        };
        assert_eq!(kind.description(), None);
        let kind = LogKind::Sleep {
            description: Some("restless".to_string()),
        };
        assert_eq!(kind.description(), Some("restless"));
    }

    #[test]
    fn test_user_defaults_for_missing_fields() {
        let user: User = serde_json::from_str(r#"{ "id": "u1", "name": "Sara" }"#).unwrap();
        assert_eq!(user.xp, 0);
        assert!(user.logs.is_empty());
        assert!(!user.avatar.hat);
        assert_eq!(user.profile.birth_date, None);
    }
}
