use dioxus::prelude::*;

use crate::icons::{FaArrowLeft, FaGear};
use crate::Icon;

/// Sticky title bar with a back button and an optional settings button.
///
/// Without `on_settings_click` an empty placeholder keeps the title centered.
#[component]
pub fn Header(title: String, on_back: EventHandler<()>, on_settings_click: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "app-header p-4 text-white sticky top-0 z-10 shadow-md",
            div {
                class: "w-full flex items-center justify-between",
                div {
                    class: "flex-1 flex justify-start",
                    if let Some(on_settings_click) = on_settings_click {
                        button {
                            class: "p-2 rounded-full hover:bg-white/10",
                            title: "Settings",
                            aria_label: "Settings",
                            onclick: move |_| on_settings_click.call(()),
                            Icon { icon: FaGear, width: 20, height: 20 }
                        }
                    } else {
                        div { class: "w-10 h-10" }
                    }
                }
                h2 { class: "text-xl font-bold flex-shrink-0 text-center px-2", "{title}" }
                div {
                    class: "flex-1 flex justify-end",
                    button {
                        class: "p-2 rounded-full hover:bg-white/10 flex items-center justify-center",
                        aria_label: "Back",
                        onclick: move |_| on_back.call(()),
                        Icon { class: "rtl:rotate-180", icon: FaArrowLeft, width: 22, height: 22 }
                    }
                }
            }
        }
    }
}
