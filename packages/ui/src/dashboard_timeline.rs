//! # Dashboard
//!
//! | Section        | Source                                      |
//! |----------------|---------------------------------------------|
//! | Date header    | today's Jalali date, localized              |
//! | Journey        | [`MyJourneyWidget`]                         |
//! | Last reading   | newest blood sugar across the whole history |
//! | Prediction     | [`GlucosePredictionCard`]                   |
//! | Timeline       | logs since local midnight, newest first     |

use chrono::{Datelike, Local};
use dioxus::prelude::*;

use store::{
    classify, last_reading, local_midnight, todays_logs, GlucoseBand, JalaliDate, LogEntry, LogIcon, LogKind,
    Prediction, User,
};

use crate::icons::{
    FaBed, FaCircleQuestion, FaDroplet, FaFaceSmile, FaGear, FaPerson, FaPersonRunning, FaPills, FaSyringe,
    FaUtensils,
};
use crate::{GlucosePredictionCard, Icon, ModalContent, MyJourneyWidget, Screen, Translator};

fn log_icon(icon: LogIcon) -> Element {
    match icon {
        LogIcon::BloodDrop => rsx! { Icon { icon: FaDroplet, width: 18, height: 18 } },
        LogIcon::Meal => rsx! { Icon { icon: FaUtensils, width: 18, height: 18 } },
        LogIcon::Activity => rsx! { Icon { icon: FaPersonRunning, width: 18, height: 18 } },
        LogIcon::Syringe => rsx! { Icon { icon: FaSyringe, width: 18, height: 18 } },
        LogIcon::Mood => rsx! { Icon { icon: FaFaceSmile, width: 18, height: 18 } },
        LogIcon::Body => rsx! { Icon { icon: FaPerson, width: 18, height: 18 } },
        LogIcon::Medication => rsx! { Icon { icon: FaPills, width: 18, height: 18 } },
        LogIcon::Sleep => rsx! { Icon { icon: FaBed, width: 18, height: 18 } },
        LogIcon::Neutral => rsx! { Icon { icon: FaCircleQuestion, width: 18, height: 18 } },
    }
}

/// One bubble of the timeline: icon, kind label, time and a kind-specific line.
#[component]
pub fn TimelineItem(log: LogEntry, t: Translator) -> Element {
    let visual = classify(&log, GlucoseBand::for_value);
    let background = visual.background;
    let time = t.num(&log.time);

    let content = match &log.kind {
        LogKind::BloodSugar { glucose } => {
            let glucose = t.num(glucose);
            rsx! { span { class: "font-bold text-lg", "{glucose}" } " mg/dL" }
        }
        LogKind::Meal { carbs, meal_type, description } => {
            let carbs = t.num(carbs);
            let label = description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| t.t(meal_type.name_key()));
            let gram = t.t("gram");
            rsx! { span { class: "font-bold text-lg", "{carbs}" } " {gram} - {label}" }
        }
        LogKind::Activity { activity_type, duration } => {
            let duration = format!("{} {}", t.num(duration), t.t("minute"));
            rsx! { span { class: "font-bold", "{activity_type}" } " - {duration}" }
        }
        LogKind::Insulin { insulin_dose, insulin_type } => {
            let dose = format!("{} {}", t.num(insulin_dose), t.t("unit"));
            rsx! { span { class: "font-bold", "{dose}" } " {insulin_type}" }
        }
        other => {
            let text = other.description().unwrap_or(other.tag()).to_string();
            rsx! { span { class: "font-bold", "{text}" } }
        }
    };

    rsx! {
        div {
            class: "timeline-item flex items-start",
            div {
                class: "flex flex-col items-center timeline-rail",
                div {
                    class: "w-10 h-10 rounded-full flex items-center justify-center z-10 text-white {background}",
                    {log_icon(visual.icon)}
                }
                div { class: "timeline-connector w-px h-full" }
            }
            div {
                class: "card rounded-lg p-3 shadow-sm w-full -mt-2",
                div {
                    class: "flex justify-between items-center text-xs text-muted",
                    span { {t.t(log.kind.menu_key())} }
                    span { "{time}" }
                }
                p { class: "mt-1 text-sm", {content} }
            }
        }
    }
}

/// Home screen for a signed-up user.
#[component]
pub fn DashboardTimeline(
    user: User,
    on_navigate: EventHandler<Screen>,
    on_modal: EventHandler<Option<ModalContent>>,
    is_estimating: bool,
    last_prediction: Option<Prediction>,
    on_estimate: EventHandler<()>,
    on_start_comparison: EventHandler<f64>,
    can_estimate: bool,
    t: Translator,
) -> Element {
    let now = Local::now();
    let midnight = local_midnight(&now);
    let today = todays_logs(&user.logs, midnight);
    let last = last_reading(&user.logs);
    let date_label = JalaliDate::from_gregorian(now.date_naive()).long_label(now.weekday(), t.language());

    let summary = match last {
        Some(reading) => {
            let glucose = t.num(reading.glucose);
            let time = format!("{}: {}", t.t("time"), t.num(&reading.time));
            let color = GlucoseBand::for_value(reading.glucose).text_class();
            rsx! {
                div {
                    class: "text-center",
                    span { class: "text-5xl font-bold {color}", "{glucose}" }
                    span { class: "text-lg text-muted ml-1", "mg/dL" }
                    p { class: "text-xs text-muted mt-1", "{time}" }
                }
            }
        }
        None => rsx! {
            p { class: "text-center text-muted py-4", {t.t("noDataYet")} }
        },
    };

    rsx! {
        div {
            class: "flex flex-col h-full",
            div {
                class: "dashboard-header sticky top-0 z-10 p-4",
                div {
                    class: "flex items-center justify-between",
                    div { class: "w-10" }
                    div {
                        h1 { class: "text-xl font-bold text-center", {t.t("appName")} }
                        p { class: "text-center text-xs text-muted", "{date_label}" }
                    }
                    button {
                        class: "p-2 rounded-full",
                        title: t.t("settings"),
                        onclick: move |_| on_navigate.call(Screen::Settings),
                        Icon { icon: FaGear, width: 20, height: 20 }
                    }
                }
            }
            div {
                class: "flex-grow overflow-y-auto px-4 pb-24 pt-4 space-y-6",
                MyJourneyWidget { user: user.clone(), t: t.clone() }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    div {
                        class: "space-y-6",
                        div {
                            class: "card rounded-xl p-4 shadow-md",
                            p { class: "text-sm text-muted text-center mb-2", {t.t("lastReading")} }
                            {summary}
                        }
                        GlucosePredictionCard {
                            is_estimating,
                            last_prediction,
                            on_estimate,
                            on_start_comparison,
                            can_estimate,
                            t: t.clone(),
                            on_modal,
                        }
                    }
                    div {
                        class: "space-y-4",
                        if today.is_empty() {
                            div {
                                class: "card text-center py-10 rounded-xl shadow-md",
                                p { class: "text-muted", {t.t("noDataToday")} }
                            }
                        } else {
                            for log in today {
                                TimelineItem { key: "{log.id}", log: log.clone(), t: t.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
