mod modal_overlay;
pub use modal_overlay::{AppModal, ModalOverlay};

mod dashboard;
pub use dashboard::DashboardView;

mod welcome;
pub use welcome::WelcomeView;

mod settings;
pub use settings::SettingsView;

mod reminders;
pub use reminders::RemindersView;
