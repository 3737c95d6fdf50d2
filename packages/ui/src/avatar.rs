use dioxus::prelude::*;

use store::AvatarCustomization;

/// Journey character. Accessories the user has not unlocked are simply left out.
#[component]
pub fn Avatar(avatar: AvatarCustomization, level: u32) -> Element {
    rsx! {
        div {
            class: "avatar w-16 h-16 flex-shrink-0",
            "data-level": "{level}",
            svg {
                view_box: "0 0 100 100",
                xmlns: "http://www.w3.org/2000/svg",
                circle { cx: "50", cy: "50", r: "40", fill: "var(--color-primary-400)" }
                circle { cx: "38", cy: "45", r: "5", fill: "white" }
                circle { cx: "62", cy: "45", r: "5", fill: "white" }
                path { d: "M 35 65 Q 50 75 65 65", stroke: "white", stroke_width: "3", fill: "none" }
                if avatar.hat {
                    g {
                        path { d: "M 25 35 Q 50 20 75 35 L 80 40 L 20 40 Z", fill: "#A52A2A" }
                        rect { x: "15", y: "40", width: "70", height: "8", fill: "#A52A2A", rx: "2" }
                    }
                }
            }
        }
    }
}
