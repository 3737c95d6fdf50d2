use dioxus::prelude::*;

use store::User;

use crate::views::WelcomeView;
use crate::{use_app_state, RemindersScreen, Screen};

#[component]
pub fn RemindersView(on_navigate: EventHandler<Screen>) -> Element {
    let state = use_app_state();
    let t = state.translator();
    let mut slot = state.user;

    let Some(user) = slot.read().clone() else {
        return rsx! { WelcomeView {} };
    };

    rsx! {
        RemindersScreen {
            on_navigate,
            user,
            on_update_user: move |updated: User| slot.set(Some(updated)),
            t,
        }
    }
}
