//! # Settings screen
//!
//! Everything here is delegated to the shell through props, except the two
//! busy flags of the cloud buttons, which live in a [`SyncActivity`] signal
//! owned by this component.
//!
//! | Card            | Behavior                                               |
//! |-----------------|--------------------------------------------------------|
//! | Install         | hidden once installed, disabled without a prompt       |
//! | Google Drive    | sign in, account, last sync, sync / restore, sign out  |
//! | Quick settings  | language (disabled), notifications, color, theme, span |
//! | Reminders       | navigates to [`Screen::Reminders`]                     |
//! | Backup/restore  | JSON download and JSON file picker                     |
//! | About / contact | modal and external links                               |

use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;

use store::{CloudAccount, CloudOp, ColorTheme, DisplayTheme, JalaliDate, SummaryTimeFrame, SyncActivity};

use crate::icons::{
    FaBell, FaCalendar, FaCalendarDay, FaCalendarDays, FaCalendarWeek, FaCircleInfo, FaDesktop, FaDownload, FaGoogle,
    FaLanguage, FaMoon, FaSun, FaUpload,
};
use crate::{pick_backup_file, AsyncAction, Header, Icon, ModalContent, Screen, Translator};

const APP_VERSION: &str = "14040528";
const EITAA_GROUP_URL: &str = "https://eitaa.com/joinchat/3165061499C9405f05df1";
const EITAA_CHANNEL_URL: &str = "https://eitaa.com/t11396";
const DEVELOPER_URL: &str = "https://wa.me/989155529985";

/// Start `op` unless another cloud action is in flight, then report the
/// outcome through the modal.
fn run_cloud_op(
    mut activity: Signal<SyncActivity>,
    op: CloudOp,
    action: AsyncAction,
    t: Translator,
    on_modal: EventHandler<Option<ModalContent>>,
) {
    if !activity.write().try_begin(op) {
        tracing::debug!("{op:?} ignored, another cloud action is running");
        return;
    }
    spawn(async move {
        let success = action.run().await;
        if success {
            tracing::info!("{op:?} finished");
        } else {
            tracing::warn!("{op:?} failed");
        }
        let outcome = op.outcome(success);
        on_modal.call(Some(ModalContent::from_keys(&t, outcome.title_key, outcome.message_key)));
        activity.write().finish(op);
    });
}

fn format_last_sync(at: DateTime<Utc>, t: &Translator) -> String {
    let local = at.with_timezone(&Local);
    let date = JalaliDate::from_gregorian(local.date_naive());
    t.num(format!("{date} {}", local.format("%H:%M")))
}

#[component]
fn QuickSettingButton(
    title: String,
    onclick: EventHandler<()>,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "quick-setting flex flex-col items-center justify-center p-2 w-16 h-16 rounded-full",
            title: "{title}",
            disabled,
            onclick: move |_| onclick.call(()),
            {children}
        }
    }
}

#[component]
pub fn SettingsScreen(
    on_navigate: EventHandler<Screen>,
    display_theme: DisplayTheme,
    on_display_theme: EventHandler<DisplayTheme>,
    summary_time_frame: SummaryTimeFrame,
    on_summary_time_frame: EventHandler<SummaryTimeFrame>,
    color_theme: ColorTheme,
    on_color_theme: EventHandler<ColorTheme>,
    on_backup: EventHandler<()>,
    /// Receives the text of a picked `.json` file.
    on_restore_file: EventHandler<String>,
    t: Translator,
    on_enable_notifications: EventHandler<()>,
    is_online: bool,
    on_modal: EventHandler<Option<ModalContent>>,
    on_install_click: EventHandler<()>,
    /// Whether the browser offered an install prompt.
    #[props(default)]
    can_install: bool,
    #[props(default)]
    is_app_installed: bool,
    google_account: Option<CloudAccount>,
    on_google_sign_in: EventHandler<()>,
    on_google_sign_out: EventHandler<()>,
    on_google_sync: AsyncAction,
    on_google_restore: AsyncAction,
    last_sync: Option<DateTime<Utc>>,
) -> Element {
    let activity = use_signal(SyncActivity::default);
    let busy = activity().is_busy();

    let cloud_label = |op: CloudOp| {
        if activity().is_running(op) {
            format!("{}...", t.t(op.busy_key()))
        } else {
            t.t(op.idle_key())
        }
    };
    let sync_label = cloud_label(CloudOp::Sync);
    let restore_label = cloud_label(CloudOp::Restore);

    let theme_title = t.t(display_theme.toggle_title_key());
    let theme_icon = match display_theme {
        DisplayTheme::Light => rsx! { Icon { icon: FaMoon, width: 26, height: 26 } },
        DisplayTheme::Dark => rsx! { Icon { icon: FaSun, width: 26, height: 26 } },
        DisplayTheme::Auto => rsx! { Icon { icon: FaDesktop, width: 26, height: 26 } },
    };
    let frame_title = format!("{}: {}", t.t("summaryTimeframe"), t.t(summary_time_frame.title_key()));
    let frame_icon = match summary_time_frame {
        SummaryTimeFrame::Daily => rsx! { Icon { icon: FaCalendarDay, width: 26, height: 26 } },
        SummaryTimeFrame::Weekly => rsx! { Icon { icon: FaCalendarWeek, width: 26, height: 26 } },
        SummaryTimeFrame::Monthly => rsx! { Icon { icon: FaCalendarDays, width: 26, height: 26 } },
        SummaryTimeFrame::Quarterly => rsx! { Icon { icon: FaCalendar, width: 26, height: 26 } },
    };
    let version = format!("{}: {}", t.t("version"), t.num(APP_VERSION));

    let drive_body = match google_account {
        None => rsx! {
            button {
                class: "google-button w-full flex items-center justify-center py-2.5 px-4 rounded-lg shadow-sm",
                disabled: !is_online,
                onclick: move |_| on_google_sign_in.call(()),
                Icon { icon: FaGoogle, width: 18, height: 18 }
                span { class: "ms-3 font-semibold", {t.t("signInWithGoogle")} }
            }
        },
        Some(account) => {
            let last_sync = last_sync.map(|at| format!("{}: {}", t.t("lastSync"), format_last_sync(at, &t)));
            let sync_t = t.clone();
            let restore_t = t.clone();
            let sync_action = on_google_sync.clone();
            let restore_action = on_google_restore.clone();
            rsx! {
                div {
                    class: "space-y-3",
                    div {
                        class: "flex items-center gap-3",
                        if let Some(picture) = account.picture.clone() {
                            img { class: "w-12 h-12 rounded-full", src: "{picture}", alt: "profile" }
                        }
                        div {
                            p { class: "font-bold", "{account.name}" }
                            p { class: "text-xs text-muted", "{account.email}" }
                        }
                    }
                    if let Some(last_sync) = last_sync {
                        p { class: "text-xs text-muted", "{last_sync}" }
                    }
                    div {
                        class: "grid grid-cols-2 gap-3",
                        button {
                            class: "btn-sync py-2 px-3 rounded-lg flex items-center justify-center",
                            disabled: busy,
                            onclick: move |_| {
                                run_cloud_op(activity, CloudOp::Sync, sync_action.clone(), sync_t.clone(), on_modal)
                            },
                            "{sync_label}"
                        }
                        button {
                            class: "btn-restore py-2 px-3 rounded-lg flex items-center justify-center",
                            disabled: busy,
                            onclick: move |_| {
                                run_cloud_op(activity, CloudOp::Restore, restore_action.clone(), restore_t.clone(), on_modal)
                            },
                            "{restore_label}"
                        }
                    }
                    button {
                        class: "w-full text-sm text-red-500 hover:underline",
                        onclick: move |_| on_google_sign_out.call(()),
                        {t.t("signOut")}
                    }
                }
            }
        }
    };

    let about = ModalContent::from_keys(&t, "aboutAppTitle", "aboutAppMessage");

    rsx! {
        div {
            class: "flex flex-col h-full",
            Header { title: t.t("settingsTitle"), on_back: move |_| on_navigate.call(Screen::Dashboard) }
            div {
                class: "p-4 flex-grow overflow-y-auto space-y-4 pb-24",

                if !is_app_installed {
                    div {
                        class: "install-card p-4 rounded-xl shadow-sm",
                        h3 { class: "text-xl font-bold mb-2", {t.t("installApp")} }
                        p { class: "text-sm mb-3", {t.t("installAppDesc")} }
                        button {
                            class: "btn-success w-full flex items-center justify-center py-3 px-4 rounded-lg shadow-md font-semibold",
                            disabled: !can_install,
                            onclick: move |_| on_install_click.call(()),
                            Icon { icon: FaDownload, width: 18, height: 18 }
                            span { class: "ms-2", {t.t("installOnDevice")} }
                        }
                        if !can_install {
                            p { class: "text-xs text-center text-muted mt-2", {t.t("installAppPrompt")} }
                        }
                    }
                }

                div {
                    class: "card p-4 rounded-xl shadow-sm",
                    h3 { class: "text-xl font-bold mb-3", {t.t("googleDriveSync")} }
                    p { class: "text-sm text-muted mb-4", {t.t("googleDriveSyncDesc")} }
                    {drive_body}
                }

                div {
                    class: "card p-4 rounded-xl shadow-sm",
                    h3 { class: "text-xl font-bold mb-3", {t.t("quickSettings")} }
                    div {
                        class: "flex justify-around items-center p-2 rounded-lg",
                        div {
                            class: "flex flex-col items-center opacity-60",
                            QuickSettingButton {
                                title: t.t("language"),
                                onclick: move |_| {},
                                disabled: true,
                                Icon { icon: FaLanguage, width: 26, height: 26 }
                            }
                            span { class: "text-xs -mt-2 text-muted", {t.t("comingSoon")} }
                        }
                        QuickSettingButton {
                            title: t.t("notifications"),
                            onclick: move |_| on_enable_notifications.call(()),
                            Icon { icon: FaBell, width: 26, height: 26 }
                        }
                        QuickSettingButton {
                            title: t.t("changeTheme"),
                            onclick: move |_| on_color_theme.call(color_theme.next()),
                            div { class: "color-swatch w-7 h-7 rounded-full" }
                        }
                        QuickSettingButton {
                            title: theme_title,
                            onclick: move |_| on_display_theme.call(display_theme.next()),
                            {theme_icon}
                        }
                        QuickSettingButton {
                            title: frame_title,
                            onclick: move |_| on_summary_time_frame.call(summary_time_frame.next()),
                            {frame_icon}
                        }
                    }
                }

                button {
                    class: "card w-full flex items-center text-start p-4 rounded-xl shadow-sm",
                    onclick: move |_| on_navigate.call(Screen::Reminders),
                    div {
                        class: "icon-chip p-2 rounded-lg me-4",
                        Icon { icon: FaBell, width: 22, height: 22 }
                    }
                    div {
                        h3 { class: "font-bold", {t.t("reminders")} }
                        p { class: "text-sm text-muted", {t.t("remindersDesc")} }
                    }
                }

                div {
                    class: "card p-4 rounded-xl shadow-sm",
                    h3 { class: "text-xl font-bold mb-3", {t.t("backupRestore")} }
                    div {
                        class: "flex justify-between items-center",
                        p { class: "text-sm text-muted flex-grow me-4", {t.t("backupRestoreDesc")} }
                        div {
                            class: "flex flex-col gap-2 flex-shrink-0",
                            button {
                                class: "icon-chip p-3 rounded-full",
                                title: t.t("backup"),
                                aria_label: t.t("backup"),
                                onclick: move |_| on_backup.call(()),
                                Icon { icon: FaUpload, width: 22, height: 22 }
                            }
                            button {
                                class: "icon-chip-muted p-3 rounded-full",
                                title: t.t("restore"),
                                aria_label: t.t("restore"),
                                onclick: move |_| {
                                    spawn(async move {
                                        if let Some(text) = pick_backup_file().await {
                                            on_restore_file.call(text);
                                        }
                                    });
                                },
                                Icon { icon: FaDownload, width: 22, height: 22 }
                            }
                        }
                    }
                }

                button {
                    class: "card w-full flex items-center text-start p-4 rounded-xl shadow-sm",
                    onclick: move |_| on_modal.call(Some(about.clone())),
                    div {
                        class: "icon-chip p-2 rounded-lg me-4",
                        Icon { icon: FaCircleInfo, width: 22, height: 22 }
                    }
                    div {
                        h3 { class: "font-bold", {t.t("aboutAppTitle")} }
                        p { class: "text-sm text-muted", {t.t("appName")} }
                    }
                }

                div {
                    class: "card p-4 rounded-xl shadow-sm",
                    h3 { class: "text-xl font-bold mb-2", {t.t("contactUs")} }
                    p { class: "text-muted mb-4", {t.t("contactUsDesc")} }
                    div {
                        class: "space-y-3",
                        a {
                            class: "link-button w-full block text-center py-3 px-4 rounded-lg shadow-md font-semibold",
                            href: EITAA_GROUP_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {t.t("eitaaGroup")}
                        }
                        a {
                            class: "link-button w-full block text-center py-3 px-4 rounded-lg shadow-md font-semibold",
                            href: EITAA_CHANNEL_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {t.t("eitaaChannel")}
                        }
                    }
                }

                div {
                    class: "mt-auto pt-8 text-center text-sm text-muted",
                    p { class: "mb-2", "{version}" }
                    a {
                        href: DEVELOPER_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t.t("developedBy")}
                    }
                }
            }
        }
    }
}
