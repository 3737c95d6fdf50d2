use dioxus::prelude::*;

use ui::Screen;

use crate::Route;

fn route_for(screen: Screen) -> Route {
    match screen {
        Screen::Dashboard => Route::Dashboard {},
        Screen::Settings => Route::Settings {},
        Screen::Reminders => Route::Reminders {},
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::DashboardView { on_navigate: move |screen: Screen| { nav.push(route_for(screen)); } }
    }
}

#[component]
pub fn Reminders() -> Element {
    let nav = use_navigator();
    rsx! {
        ui::views::RemindersView { on_navigate: move |screen: Screen| { nav.push(route_for(screen)); } }
    }
}

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();
    // Browsers expose the install prompt through `beforeinstallprompt`; the
    // page shell is responsible for it, so the button stays disabled here.
    rsx! {
        ui::views::SettingsView {
            on_navigate: move |screen: Screen| { nav.push(route_for(screen)); },
            can_install: false,
        }
    }
}
