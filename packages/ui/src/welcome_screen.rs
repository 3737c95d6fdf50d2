use dioxus::prelude::*;

use store::Profile;

use crate::icons::FaHeartPulse;
use crate::{Icon, Translator};

/// Onboarding form. The name is required; the birth date is kept as typed.
#[component]
pub fn WelcomeScreen(on_user_add: EventHandler<(String, Profile)>, t: Translator) -> Element {
    let mut name = use_signal(String::new);
    let mut birth_date = use_signal(String::new);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let trimmed = name.read().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        let birth = birth_date.read().trim().to_string();
        let profile = Profile {
            birth_date: (!birth.is_empty()).then_some(birth),
        };
        on_user_add.call((trimmed, profile));
    };

    let birth_label = format!("{} ({})", t.t("birthDate"), t.t("optional"));

    rsx! {
        div {
            class: "flex flex-col h-full p-6 pt-12 items-center text-center",
            div { class: "text-primary", Icon { icon: FaHeartPulse, width: 160, height: 160 } }
            h1 { class: "text-3xl font-bold mt-6 text-primary", {t.t("appName")} }
            p { class: "text-muted mt-2 mb-8", {t.t("welcomeMessage")} }
            form {
                class: "w-full max-w-sm space-y-4 text-start",
                onsubmit: handle_submit,
                div {
                    label { class: "text-sm text-muted mb-1 block", r#for: "welcome-name", {t.t("name")} }
                    input {
                        id: "welcome-name",
                        r#type: "text",
                        class: "text-input w-full p-3 rounded-lg",
                        placeholder: t.t("namePlaceholder"),
                        required: true,
                        value: "{name}",
                        oninput: move |evt: Event<FormData>| name.set(evt.value()),
                    }
                }
                div {
                    label {
                        class: "text-sm text-muted mb-1 block",
                        r#for: "welcome-birthDate",
                        "{birth_label}"
                    }
                    input {
                        id: "welcome-birthDate",
                        r#type: "text",
                        class: "text-input w-full p-3 rounded-lg",
                        placeholder: t.t("birthDateExample"),
                        value: "{birth_date}",
                        oninput: move |evt: Event<FormData>| birth_date.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "gradient-button w-full text-white p-3 rounded-lg shadow-md font-semibold",
                    {t.t("welcomeStart")}
                }
            }
        }
    }
}
