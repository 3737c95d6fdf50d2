use chrono::{Local, Utc};
use dioxus::prelude::*;

use store::{backup, CloudAccount, CloudSync, ColorTheme, DisplayTheme, SummaryTimeFrame};

use crate::{
    request_notifications, save_backup, use_app_state, AsyncAction, ModalContent, Screen, SettingsScreen,
};

/// Settings page. Owns every side effect the settings screen asks for:
/// preference writes, backup files, notification permission and cloud calls.
#[component]
pub fn SettingsView(
    on_navigate: EventHandler<Screen>,
    /// Whether the platform can offer an install prompt.
    #[props(default)]
    can_install: bool,
    #[props(default)]
    is_app_installed: bool,
) -> Element {
    let state = use_app_state();
    let t = state.translator();
    let mut config = state.config;
    let mut modal = state.modal;
    let mut user = state.user;

    // Actions must keep their identity across renders to compare equal as props
    let sync_state = state.clone();
    let on_google_sync = use_hook(move || {
        AsyncAction::new(move || {
            let state = sync_state.clone();
            async move {
                let Some(current) = state.user.peek().clone() else {
                    return false;
                };
                let pushed = state.cloud.push(&current).await;
                state.refresh_cloud();
                pushed
            }
        })
    });
    let restore_state = state.clone();
    let on_google_restore = use_hook(move || {
        AsyncAction::new(move || {
            let state = restore_state.clone();
            async move {
                match state.cloud.pull().await {
                    Some(restored) => {
                        state.set_user(restored);
                        true
                    }
                    None => false,
                }
            }
        })
    });

    let sign_in_state = state.clone();
    let sign_out_state = state.clone();
    let backup_t = t.clone();
    let restore_t = t.clone();
    let notify_t = t.clone();
    let install_t = t.clone();
    let prefs = config.read().clone();

    rsx! {
        SettingsScreen {
            on_navigate,
            display_theme: prefs.display.theme,
            on_display_theme: move |theme: DisplayTheme| config.write().display.theme = theme,
            summary_time_frame: prefs.summary.timeframe,
            on_summary_time_frame: move |frame: SummaryTimeFrame| config.write().summary.timeframe = frame,
            color_theme: prefs.display.color,
            on_color_theme: move |color: ColorTheme| config.write().display.color = color,
            on_backup: move |_| {
                let Some(current) = user.peek().clone() else {
                    return;
                };
                let saved = backup::export(&current, Utc::now())
                    .map_err(|e| e.to_string())
                    .and_then(|json| {
                        save_backup(&backup::file_name(Local::now().date_naive()), &json).map_err(|e| e.to_string())
                    });
                let content = match saved {
                    Ok(()) => ModalContent::from_keys(&backup_t, "success", "backupSaved"),
                    Err(e) => {
                        tracing::error!("backup failed: {e}");
                        ModalContent::from_keys(&backup_t, "error", "backupFailed")
                    }
                };
                modal.set(Some(content));
            },
            on_restore_file: move |text: String| {
                let content = match backup::import(&text) {
                    Ok(restored) => {
                        tracing::info!("restored {} logs from file", restored.logs.len());
                        user.set(Some(restored));
                        ModalContent::from_keys(&restore_t, "success", "restoreSuccess")
                    }
                    Err(e) => {
                        tracing::warn!("rejected backup file: {e}");
                        ModalContent::from_keys(&restore_t, "error", "restoreError")
                    }
                };
                modal.set(Some(content));
            },
            t,
            on_enable_notifications: move |_| {
                let t = notify_t.clone();
                spawn(async move {
                    let content = if request_notifications().await {
                        ModalContent::from_keys(&t, "notifications", "notificationsEnabled")
                    } else {
                        ModalContent::from_keys(&t, "notifications", "notificationsDenied")
                    };
                    modal.set(Some(content));
                });
            },
            is_online: state.cloud.is_online(),
            on_modal: move |content: Option<ModalContent>| modal.set(content),
            on_install_click: move |_| {
                modal.set(Some(ModalContent::from_keys(&install_t, "installApp", "installAppPrompt")));
            },
            can_install,
            is_app_installed,
            google_account: (state.cloud_account)(),
            on_google_sign_in: move |_| {
                let name = sign_in_state.user.peek().as_ref().map(|u| u.name.clone()).unwrap_or_default();
                sign_in_state.cloud.sign_in(CloudAccount {
                    name,
                    email: String::new(),
                    picture: None,
                });
                sign_in_state.refresh_cloud();
            },
            on_google_sign_out: move |_| {
                sign_out_state.cloud.sign_out();
                sign_out_state.refresh_cloud();
            },
            on_google_sync,
            on_google_restore,
            last_sync: (state.last_sync)(),
        }
    }
}
