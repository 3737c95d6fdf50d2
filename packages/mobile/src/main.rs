use dioxus::prelude::*;

use ui::views::AppModal;
use ui::AppStateProvider;
use views::{Dashboard, Reminders, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/settings")]
    Settings {},
    #[route("/reminders")]
    Reminders {},
}

const TAILWIND: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Preferences live next to the app's data on device
    let config_dir = use_hook(ui::config_dir);
    if config_dir.is_none() {
        tracing::warn!("no data directory, preferences will not persist");
    }

    rsx! {
        document::Script { src: TAILWIND }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AppStateProvider {
            config_dir,
            Router::<Route> {}
            AppModal {}
        }
    }
}
