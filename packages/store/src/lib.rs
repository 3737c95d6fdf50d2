pub mod backup;
pub mod classify;
pub mod cloud;
pub mod config;
pub mod journey;
pub mod locale;
pub mod models;
pub mod prediction;
pub mod reminders;
pub mod settings;
pub mod timeline;

mod memory;
pub use memory::MemoryCloud;

pub use classify::{classify, GlucoseBand, LogIcon, LogVisual};
pub use cloud::{CloudAccount, CloudSync};
pub use config::AppConfig;
pub use journey::{active_days, JourneyProgress, LEVEL_THRESHOLD};
pub use locale::{localize_digits, JalaliDate, Language};
pub use models::{
    AvatarCustomization, LogEntry, LogKind, MealType, Profile, Reminder, ReminderType, User,
};
pub use prediction::Prediction;
pub use reminders::ReminderDraft;
pub use settings::{CloudOp, ColorTheme, DisplayTheme, OutcomeMessage, SummaryTimeFrame, SyncActivity};
pub use timeline::{last_reading, local_midnight, todays_logs, LastReading};
