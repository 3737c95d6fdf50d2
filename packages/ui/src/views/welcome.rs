use chrono::Utc;
use dioxus::prelude::*;

use store::{Profile, User};

use crate::{use_app_state, WelcomeScreen};

/// Onboarding page. Creates the user record in the shell state.
#[component]
pub fn WelcomeView() -> Element {
    let state = use_app_state();
    let t = state.translator();
    let mut user = state.user;

    rsx! {
        WelcomeScreen {
            t,
            on_user_add: move |(name, profile): (String, Profile)| {
                let id = format!("user_{}", Utc::now().timestamp_millis());
                tracing::info!("created user {id}");
                user.set(Some(User::new(id, name, profile)));
            },
        }
    }
}
