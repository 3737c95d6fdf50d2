//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod i18n;
pub use i18n::Translator;

mod state;
pub use state::{use_app_state, AppState, AppStateProvider, AsyncAction, ModalContent, Screen};

mod platform;
pub use platform::{apply_theme, config_dir, pick_backup_file, request_notifications, save_backup};

mod header;
pub use header::Header;

mod avatar;
pub use avatar::Avatar;

mod journey_widget;
pub use journey_widget::MyJourneyWidget;

mod prediction_card;
pub use prediction_card::GlucosePredictionCard;

mod dashboard_timeline;
pub use dashboard_timeline::{DashboardTimeline, TimelineItem};

mod settings_screen;
pub use settings_screen::SettingsScreen;

mod reminders_screen;
pub use reminders_screen::RemindersScreen;

mod welcome_screen;
pub use welcome_screen::WelcomeScreen;
