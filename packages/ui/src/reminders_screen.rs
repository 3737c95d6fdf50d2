use chrono::Utc;
use dioxus::prelude::*;

use store::{reminders, ReminderDraft, ReminderType, User};

use crate::icons::{FaClock, FaPlus, FaTrash};
use crate::{Header, Icon, Screen, Translator};

/// Reminder list with an inline "add" form.
///
/// Every change goes out through `on_update_user` as a whole new [`User`]; the
/// list shown is always the one in the `user` prop.
#[component]
pub fn RemindersScreen(
    on_navigate: EventHandler<Screen>,
    user: User,
    on_update_user: EventHandler<User>,
    t: Translator,
) -> Element {
    let mut show_form = use_signal(|| false);
    let mut draft = use_signal(ReminderDraft::default);

    let handle_add = {
        let user = user.clone();
        move |_| {
            // An empty time is dropped without feedback
            let added = reminders::add(&user.reminders, &draft.read(), Utc::now().timestamp_millis());
            if let Some(list) = added {
                if let Some(reminder) = list.last() {
                    tracing::info!("added reminder {} at {}", reminder.id, reminder.time);
                }
                on_update_user.call(user.with_reminders(list));
                show_form.set(false);
                draft.set(ReminderDraft::default());
            }
        }
    };

    let is_empty = user.reminders.is_empty();
    let draft_kind = draft.read().kind.as_str();
    let draft_time = draft.read().time.clone();

    rsx! {
        div {
            class: "flex flex-col h-full",
            Header { title: t.t("remindersTitle"), on_back: move |_| on_navigate.call(Screen::Settings) }
            div {
                class: "flex-grow p-4 overflow-y-auto space-y-4",
                if is_empty && !show_form() {
                    div {
                        class: "text-center py-10 text-muted",
                        div { class: "flex justify-center mb-2", Icon { icon: FaClock, width: 48, height: 48 } }
                        p { {t.t("noReminders")} }
                    }
                }
                ul {
                    class: "space-y-3",
                    for reminder in user.reminders.iter().cloned() {
                        li {
                            key: "{reminder.id}",
                            class: "card p-3 rounded-lg flex justify-between items-center shadow-sm",
                            div {
                                p { class: "font-bold text-lg", {t.num(&reminder.time)} }
                                p { class: "text-sm text-muted", {t.t(reminder.kind.label_key())} }
                            }
                            div {
                                class: "flex items-center gap-2",
                                label {
                                    class: "switch relative inline-flex items-center cursor-pointer",
                                    r#for: "toggle-{reminder.id}",
                                    input {
                                        id: "toggle-{reminder.id}",
                                        r#type: "checkbox",
                                        class: "sr-only peer",
                                        checked: reminder.enabled,
                                        onchange: {
                                            let id = reminder.id.clone();
                                            let user = user.clone();
                                            move |_| {
                                                on_update_user.call(user.with_reminders(reminders::toggle(&user.reminders, &id)));
                                            }
                                        },
                                    }
                                    div { class: "switch-track" }
                                }
                                button {
                                    class: "p-2 text-red-500 rounded-full",
                                    onclick: {
                                        let id = reminder.id.clone();
                                        let user = user.clone();
                                        move |_| {
                                            tracing::info!("removed reminder {id}");
                                            on_update_user.call(user.with_reminders(reminders::delete(&user.reminders, &id)));
                                        }
                                    },
                                    Icon { icon: FaTrash, width: 18, height: 18 }
                                }
                            }
                        }
                    }
                }
                if show_form() {
                    div {
                        class: "card p-4 rounded-lg space-y-3",
                        h3 { class: "font-bold text-lg", {t.t("addReminder")} }
                        div {
                            label { class: "text-sm text-muted mb-1 block", r#for: "reminderType", {t.t("reminderType")} }
                            select {
                                id: "reminderType",
                                class: "w-full p-2 border rounded-lg",
                                value: "{draft_kind}",
                                onchange: move |evt: Event<FormData>| {
                                    if let Ok(kind) = evt.value().parse::<ReminderType>() {
                                        draft.write().kind = kind;
                                    }
                                },
                                for kind in ReminderType::ALL {
                                    option {
                                        value: kind.as_str(),
                                        selected: kind.as_str() == draft_kind,
                                        {t.t(kind.label_key())}
                                    }
                                }
                            }
                        }
                        div {
                            label { class: "text-sm text-muted mb-1 block", r#for: "reminderTime", {t.t("reminderTime")} }
                            input {
                                id: "reminderTime",
                                r#type: "time",
                                class: "w-full p-2 border rounded-lg",
                                value: "{draft_time}",
                                oninput: move |evt: Event<FormData>| draft.write().time = evt.value(),
                            }
                        }
                        div {
                            class: "flex justify-end gap-2 pt-2",
                            button {
                                class: "btn-muted px-4 py-2 rounded-lg",
                                onclick: move |_| show_form.set(false),
                                {t.t("cancel")}
                            }
                            button {
                                class: "btn-primary px-4 py-2 rounded-lg",
                                onclick: handle_add,
                                {t.t("addReminder")}
                            }
                        }
                    }
                }
            }
            if !show_form() {
                div {
                    class: "fab fixed bottom-24 end-6 z-20",
                    button {
                        class: "gradient-button text-white rounded-full p-4 shadow-lg",
                        aria_label: t.t("addReminder"),
                        title: t.t("addReminder"),
                        onclick: move |_| show_form.set(true),
                        Icon { icon: FaPlus, width: 22, height: 22 }
                    }
                }
            }
        }
    }
}
