use dioxus::prelude::*;

use store::{active_days, JourneyProgress, User};

use crate::{Avatar, Translator};

/// Level, progress bar and active-day count for the dashboard.
#[component]
pub fn MyJourneyWidget(user: User, t: Translator) -> Element {
    let progress = JourneyProgress::from_xp(user.xp);
    let level = format!("{} {}", t.t("level"), t.num(progress.level));
    let xp = format!(
        "{}: {} / {}",
        t.t("xp"),
        t.num(progress.current_level_xp),
        t.num(progress.xp_for_next_level)
    );
    let days = format!("🔥 {} {}", t.num(active_days(&user.logs)), t.t("activeDays"));
    let width = progress.progress_percent;

    rsx! {
        div {
            class: "card p-4 rounded-xl shadow-md flex items-center gap-4",
            Avatar { avatar: user.avatar.clone(), level: progress.level }
            div {
                class: "flex-grow",
                div {
                    class: "flex justify-between items-baseline mb-1",
                    h3 { class: "font-bold", {t.t("myJourney")} }
                    span { class: "text-sm font-bold text-primary", "{level}" }
                }
                div {
                    class: "progress-track w-full rounded-full h-2.5",
                    div {
                        class: "progress-bar h-2.5 rounded-full",
                        style: "width: {width}%",
                    }
                }
                div {
                    class: "flex justify-between items-center text-xs text-muted mt-1",
                    span { "{xp}" }
                    span { "{days}" }
                }
            }
        }
    }
}
