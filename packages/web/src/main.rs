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
    rsx! {
        // Global app resources
        document::Script { src: TAILWIND }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AppStateProvider {
            Router::<Route> {}
            AppModal {}
        }
    }
}
