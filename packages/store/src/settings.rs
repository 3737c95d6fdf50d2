//! # Settings state machines
//!
//! The settings screen owns no persisted state. It cycles a few enumerated
//! options through pure next-state functions and guards the two asynchronous
//! cloud actions with a pair of busy flags.
//!
//! | Type | Ring / role |
//! |------|-------------|
//! | [`DisplayTheme`] | light → dark → auto → light |
//! | [`SummaryTimeFrame`] | daily → weekly → monthly → quarterly → daily |
//! | [`ColorTheme`] | teal → blue → purple → rose → teal |
//! | [`SyncActivity`] | `is_syncing` / `is_restoring` gate for [`CloudOp`]s |

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTheme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl DisplayTheme {
    pub fn next(self) -> Self {
        match self {
            DisplayTheme::Light => DisplayTheme::Dark,
            DisplayTheme::Dark => DisplayTheme::Auto,
            DisplayTheme::Auto => DisplayTheme::Light,
        }
    }

    /// Tooltip of the toggle button: names the theme a click switches to.
    pub fn toggle_title_key(self) -> &'static str {
        match self {
            DisplayTheme::Light => "darkMode",
            DisplayTheme::Dark => "autoMode",
            DisplayTheme::Auto => "lightMode",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTimeFrame {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl SummaryTimeFrame {
    pub const ALL: [SummaryTimeFrame; 4] = [
        SummaryTimeFrame::Daily,
        SummaryTimeFrame::Weekly,
        SummaryTimeFrame::Monthly,
        SummaryTimeFrame::Quarterly,
    ];

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn title_key(self) -> &'static str {
        match self {
            SummaryTimeFrame::Daily => "timeFrame_daily",
            SummaryTimeFrame::Weekly => "timeFrame_weekly",
            SummaryTimeFrame::Monthly => "timeFrame_monthly",
            SummaryTimeFrame::Quarterly => "timeFrame_quarterly",
        }
    }
}

/// Accent palette. The palette itself lives in the stylesheet; this only
/// picks the `theme-<name>` class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Teal,
    Blue,
    Purple,
    Rose,
}

impl ColorTheme {
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Teal => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::Purple,
            ColorTheme::Purple => ColorTheme::Rose,
            ColorTheme::Rose => ColorTheme::Teal,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            ColorTheme::Teal => "theme-teal",
            ColorTheme::Blue => "theme-blue",
            ColorTheme::Purple => "theme-purple",
            ColorTheme::Rose => "theme-rose",
        }
    }
}

/// An asynchronous cloud action started from the settings screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudOp {
    Sync,
    Restore,
}

/// Localization keys of the modal shown when a [`CloudOp`] settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutcomeMessage {
    pub title_key: &'static str,
    pub message_key: &'static str,
}

impl CloudOp {
    pub fn outcome(self, success: bool) -> OutcomeMessage {
        let title_key = if success { "success" } else { "error" };
        let message_key = match (self, success) {
            (CloudOp::Sync, true) => "syncSuccess",
            (CloudOp::Sync, false) => "syncError",
            (CloudOp::Restore, true) => "restoreFromDriveSuccess",
            (CloudOp::Restore, false) => "restoreFromDriveError",
        };
        OutcomeMessage {
            title_key,
            message_key,
        }
    }

    /// Label of the button while the action is in flight.
    pub fn busy_key(self) -> &'static str {
        match self {
            CloudOp::Sync => "syncing",
            CloudOp::Restore => "restoring",
        }
    }

    /// Label of the button when idle.
    pub fn idle_key(self) -> &'static str {
        match self {
            CloudOp::Sync => "syncNow",
            CloudOp::Restore => "restoreFromDrive",
        }
    }
}

/// Busy flags of the sync and restore buttons.
///
/// At most one [`CloudOp`] runs at a time. Nothing here times out or cancels:
/// a flag stays set until [`finish`](Self::finish) is called for its op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncActivity {
    pub is_syncing: bool,
    pub is_restoring: bool,
}

impl SyncActivity {
    /// Both buttons are disabled while this is true.
    pub fn is_busy(&self) -> bool {
        self.is_syncing || self.is_restoring
    }

    pub fn is_running(&self, op: CloudOp) -> bool {
        match op {
            CloudOp::Sync => self.is_syncing,
            CloudOp::Restore => self.is_restoring,
        }
    }

    /// Mark `op` as running. Returns `false`, changing nothing, if any op is
    /// already in flight.
    pub fn try_begin(&mut self, op: CloudOp) -> bool {
        if self.is_busy() {
            return false;
        }
        match op {
            CloudOp::Sync => self.is_syncing = true,
            CloudOp::Restore => self.is_restoring = true,
        }
        true
    }

    pub fn finish(&mut self, op: CloudOp) {
        match op {
            CloudOp::Sync => self.is_syncing = false,
            CloudOp::Restore => self.is_restoring = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_display_theme_ring() {
        let start = DisplayTheme::Light;
        assert_eq!(start.next(), DisplayTheme::Dark);
        assert_eq!(start.next().next(), DisplayTheme::Auto);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_display_theme_toggle_title() {
        assert_eq!(DisplayTheme::Light.toggle_title_key(), "darkMode");
        assert_eq!(DisplayTheme::Dark.toggle_title_key(), "autoMode");
        assert_eq!(DisplayTheme::Auto.toggle_title_key(), "lightMode");
    }

    #[test]
    fn test_timeframe_ring() {
        let mut frame = SummaryTimeFrame::Daily;
        let mut seen = Vec::new();
        for _ in 0..4 {
            frame = frame.next();
            seen.push(frame);
        }
        assert_eq!(
            seen,
            vec![
                SummaryTimeFrame::Weekly,
                SummaryTimeFrame::Monthly,
                SummaryTimeFrame::Quarterly,
                SummaryTimeFrame::Daily,
            ]
        );
    }

    #[test]
    fn test_color_theme_ring() {
        let mut theme = ColorTheme::Teal;
        for _ in 0..4 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Teal);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            CloudOp::Sync.outcome(true),
            OutcomeMessage {
                title_key: "success",
                message_key: "syncSuccess"
            }
        );
        assert_eq!(CloudOp::Restore.outcome(false).title_key, "error");
        assert_eq!(CloudOp::Restore.outcome(false).message_key, "restoreFromDriveError");
    }

    #[test]
    fn test_gate_refuses_overlap() {
        let mut activity = SyncActivity::default();
        assert!(activity.try_begin(CloudOp::Sync));
        assert!(activity.is_busy());

        // Neither a second sync nor a restore may start.
        assert!(!activity.try_begin(CloudOp::Sync));
        assert!(!activity.try_begin(CloudOp::Restore));
        assert!(!activity.is_restoring);

        activity.finish(CloudOp::Sync);
        assert!(!activity.is_busy());
        assert!(activity.try_begin(CloudOp::Restore));
        assert!(activity.is_running(CloudOp::Restore));
    }

    /// Simulates the settings screen's click handler against a slow action.
    async fn click(activity: Rc<RefCell<SyncActivity>>, dispatched: Rc<Cell<u32>>) -> Option<bool> {
        if !activity.borrow_mut().try_begin(CloudOp::Sync) {
            return None;
        }
        dispatched.set(dispatched.get() + 1);
        tokio::task::yield_now().await;
        activity.borrow_mut().finish(CloudOp::Sync);
        Some(true)
    }

    #[tokio::test]
    async fn test_double_click_dispatches_once() {
        let activity = Rc::new(RefCell::new(SyncActivity::default()));
        let dispatched = Rc::new(Cell::new(0));

        let (first, second) = tokio::join!(
            click(activity.clone(), dispatched.clone()),
            click(activity.clone(), dispatched.clone()),
        );

        assert_eq!(first, Some(true));
        assert_eq!(second, None);
        assert_eq!(dispatched.get(), 1);
        assert!(!activity.borrow().is_busy());
    }
}
