//! Reminder list operations.
//!
//! Every operation returns a new list; the caller wraps it into a new
//! [`User`](crate::models::User) with
//! [`User::with_reminders`](crate::models::User::with_reminders) and hands it
//! to whoever owns the record.

use crate::models::{Reminder, ReminderType};

/// Form state of the "add reminder" panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ReminderDraft {
    pub kind: ReminderType,
    pub time: String,
}

impl Default for ReminderDraft {
    fn default() -> Self {
        Self {
            kind: ReminderType::CheckBg,
            time: "08:00".to_string(),
        }
    }
}

/// Flip `enabled` on the reminder with `id`. Unknown ids leave the list as is.
pub fn toggle(reminders: &[Reminder], id: &str) -> Vec<Reminder> {
    reminders
        .iter()
        .map(|r| {
            if r.id == id {
                Reminder {
                    enabled: !r.enabled,
                    ..r.clone()
                }
            } else {
                r.clone()
            }
        })
        .collect()
}

/// Drop the reminder with `id`. Unknown ids leave the list as is.
pub fn delete(reminders: &[Reminder], id: &str) -> Vec<Reminder> {
    reminders.iter().filter(|r| r.id != id).cloned().collect()
}

/// Append an enabled reminder built from `draft`.
///
/// Returns `None` when the draft has no time. The id is derived from
/// `now_millis` and bumped until it is unique within `reminders`.
pub fn add(reminders: &[Reminder], draft: &ReminderDraft, now_millis: i64) -> Option<Vec<Reminder>> {
    let time = draft.time.trim();
    if time.is_empty() {
        return None;
    }

    let mut stamp = now_millis;
    let id = loop {
        let candidate = format!("reminder_{stamp}");
        if reminders.iter().all(|r| r.id != candidate) {
            break candidate;
        }
        stamp += 1;
    };

    let mut updated = reminders.to_vec();
    updated.push(Reminder {
        id,
        kind: draft.kind,
        time: time.to_string(),
        enabled: true,
    });
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(id: &str, enabled: bool) -> Reminder {
        Reminder {
            id: id.to_string(),
            kind: ReminderType::CheckBg,
            time: "08:00".to_string(),
            enabled,
        }
    }

    #[test]
    fn test_toggle_flips_only_match() {
        let list = vec![reminder("a", true), reminder("b", false)];
        let toggled = toggle(&list, "b");
        assert!(toggled[0].enabled);
        assert!(toggled[1].enabled);

        assert_eq!(toggle(&list, "missing"), list);
    }

    #[test]
    fn test_delete() {
        let list = vec![reminder("a", true), reminder("b", false)];
        let remaining = delete(&list, "a");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "b");

        assert_eq!(delete(&list, "missing"), list);
    }

    #[test]
    fn test_add_appends_enabled_reminder() {
        let list = vec![reminder("reminder_1", false)];
        let draft = ReminderDraft {
            kind: ReminderType::TakeMeds,
            time: "21:30".to_string(),
        };
        let updated = add(&list, &draft, 1_700_000_000_000).unwrap();
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0], list[0]);
        let added = &updated[1];
        assert_eq!(added.id, "reminder_1700000000000");
        assert_eq!(added.kind, ReminderType::TakeMeds);
        assert_eq!(added.time, "21:30");
        assert!(added.enabled);
    }

    #[test]
    fn test_add_rejects_empty_time() {
        let list = vec![reminder("a", true)];
        let draft = ReminderDraft {
            kind: ReminderType::CheckBg,
            time: "  ".to_string(),
        };
        assert_eq!(add(&list, &draft, 42), None);
    }

    #[test]
    fn test_add_same_millisecond_stays_unique() {
        let draft = ReminderDraft::default();
        let once = add(&[], &draft, 5).unwrap();
        let twice = add(&once, &draft, 5).unwrap();
        assert_eq!(twice.len(), 2);
        assert_ne!(twice[0].id, twice[1].id);
        assert_eq!(twice[1].id, "reminder_6");
    }
}
