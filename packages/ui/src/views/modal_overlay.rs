use dioxus::prelude::*;

use crate::use_app_state;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card rounded-lg shadow-lg max-w-md w-full mx-4",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// The app-wide title/message modal. Renders nothing while the modal slot is empty.
#[component]
pub fn AppModal() -> Element {
    let state = use_app_state();
    let t = state.translator();
    let mut modal = state.modal;

    let Some(content) = modal() else {
        return rsx! {};
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| modal.set(None),
            div {
                class: "p-5 space-y-3",
                h3 { class: "text-lg font-bold", "{content.title}" }
                p { class: "text-sm whitespace-pre-line", "{content.message}" }
                div {
                    class: "flex justify-end",
                    button {
                        class: "btn-primary px-4 py-2 rounded-lg",
                        onclick: move |_| modal.set(None),
                        {t.t("close")}
                    }
                }
            }
        }
    }
}
