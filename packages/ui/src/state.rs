//! Shell state shared by every screen.
//!
//! [`AppStateProvider`] owns the authoritative [`User`] record and the display
//! preferences, and provides them as an [`AppState`] context. Screens never
//! write to it directly: they receive snapshots as props and report changes
//! through callbacks that the platform views route back here.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::{AppConfig, CloudAccount, CloudSync, MemoryCloud, Prediction, User};

use crate::platform::apply_theme;
use crate::Translator;

/// Screens reachable through navigation callbacks. Platform packages map these
/// onto their router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Settings,
    Reminders,
}

/// Title and message of the generic modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalContent {
    pub title: String,
    pub message: String,
}

impl ModalContent {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Build from two localization keys.
    pub fn from_keys(t: &Translator, title_key: &str, message_key: &str) -> Self {
        Self::new(t.t(title_key), t.t(message_key))
    }
}

/// An asynchronous callback prop resolving to a success flag.
///
/// Props must be comparable, so two actions are equal only when they share the
/// same closure.
#[derive(Clone)]
pub struct AsyncAction(Rc<dyn Fn() -> Pin<Box<dyn Future<Output = bool>>>>);

impl AsyncAction {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        Self(Rc::new(move || Box::pin(f())))
    }

    pub async fn run(&self) -> bool {
        (self.0)().await
    }
}

impl PartialEq for AsyncAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Everything the shell owns.
#[derive(Clone)]
pub struct AppState {
    /// `None` until onboarding creates a user.
    pub user: Signal<Option<User>>,
    pub config: Signal<AppConfig>,
    pub modal: Signal<Option<ModalContent>>,
    pub cloud: MemoryCloud,
    pub cloud_account: Signal<Option<CloudAccount>>,
    pub last_sync: Signal<Option<DateTime<Utc>>>,
    pub prediction: Signal<Option<Prediction>>,
    pub is_estimating: Signal<bool>,
}

impl AppState {
    pub fn translator(&self) -> Translator {
        Translator::new(self.config.read().display.language)
    }

    /// Replace the user record.
    pub fn set_user(&self, user: User) {
        let mut slot = self.user;
        slot.set(Some(user));
    }

    pub fn show_modal(&self, content: Option<ModalContent>) {
        let mut modal = self.modal;
        modal.set(content);
    }

    /// Re-read the cloud account and last sync time after a cloud call.
    pub fn refresh_cloud(&self) {
        let mut account = self.cloud_account;
        let mut last_sync = self.last_sync;
        account.set(self.cloud.account());
        last_sync.set(self.cloud.last_sync());
    }
}

/// Consume the [`AppState`] from context.
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

/// Provider component that owns the shell state.
///
/// When `config_dir` is set, preferences are loaded from and saved to
/// `glucojourney.toml` inside it.
#[component]
pub fn AppStateProvider(#[props(default)] config_dir: Option<PathBuf>, children: Element) -> Element {
    let load_dir = config_dir.clone();
    let config = use_signal(move || match load_dir.as_deref().map(AppConfig::load) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!("using default preferences: {e}");
            AppConfig::default()
        }
        None => AppConfig::default(),
    });

    let user = use_signal(|| Option::<User>::None);
    let modal = use_signal(|| Option::<ModalContent>::None);
    let cloud_account = use_signal(|| Option::<CloudAccount>::None);
    let last_sync = use_signal(|| Option::<DateTime<Utc>>::None);
    let prediction = use_signal(|| Option::<Prediction>::None);
    let is_estimating = use_signal(|| false);

    use_context_provider(|| AppState {
        user,
        config,
        modal,
        cloud: MemoryCloud::new(),
        cloud_account,
        last_sync,
        prediction,
        is_estimating,
    });

    // Apply and persist preferences whenever they change
    use_effect(move || {
        let current = config();
        apply_theme(current.display.theme, current.display.color);
        if let Some(dir) = config_dir.as_deref() {
            if let Err(e) = current.save(dir) {
                tracing::error!("could not save preferences: {e}");
            }
        }
    });

    let language = config.read().display.language;

    rsx! {
        div {
            class: "app-root",
            lang: language.code(),
            dir: language.dir(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_action_equality() {
        let action = AsyncAction::new(|| async { true });
        assert!(action == action.clone());
        assert!(action != AsyncAction::new(|| async { true }));
    }

    #[test]
    fn test_modal_from_keys() {
        let t = Translator::new(store::Language::En);
        let modal = ModalContent::from_keys(&t, "success", "syncSuccess");
        assert_eq!(modal.title, "Success");
        assert_eq!(modal.message, "Your data was saved to Google Drive.");
    }
}
