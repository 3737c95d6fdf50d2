use chrono::Local;
use dioxus::prelude::*;

use store::Prediction;

use crate::icons::FaWandMagicSparkles;
use crate::{Icon, ModalContent, Translator};

/// "What's my blood sugar?" card.
///
/// Before an estimate exists it shows a round estimate button, disabled while
/// `can_estimate` is false or an estimate is running. Afterwards it shows the
/// value and offers to compare it with a real reading.
#[component]
pub fn GlucosePredictionCard(
    is_estimating: bool,
    last_prediction: Option<Prediction>,
    on_estimate: EventHandler<()>,
    on_start_comparison: EventHandler<f64>,
    can_estimate: bool,
    t: Translator,
    on_modal: EventHandler<Option<ModalContent>>,
) -> Element {
    let explanation = ModalContent::from_keys(&t, "whatIsSmartEstimation", "smartEstimationExplanation");
    let button_label = if is_estimating { t.t("estimating") } else { t.t("estimateForMe") };

    let body = match last_prediction {
        None => rsx! {
            div {
                class: "w-full flex flex-col items-center justify-center",
                button {
                    class: "estimate-button w-20 h-20 rounded-full flex items-center justify-center shadow-lg",
                    disabled: !can_estimate || is_estimating,
                    aria_label: "{button_label}",
                    onclick: move |_| on_estimate.call(()),
                    if is_estimating {
                        div { class: "spinner h-10 w-10" }
                    } else {
                        Icon { icon: FaWandMagicSparkles, width: 36, height: 36 }
                    }
                }
                if !can_estimate {
                    p { class: "text-xs text-muted mt-2", {t.t("noInternetConnection")} }
                }
            }
        },
        Some(prediction) => {
            let at = format!(
                "{} {}",
                t.t("estimateAt"),
                t.num(prediction.timestamp.with_timezone(&Local).format("%H:%M"))
            );
            let value = t.num(prediction.value);
            let predicted = prediction.value;
            rsx! {
                div {
                    class: "w-full px-2",
                    p { class: "text-xs text-muted", "{at}" }
                    p { class: "text-6xl font-bold my-1 text-primary", "~{value}" }
                    button {
                        class: "w-full mt-2 btn-success py-2.5 rounded-lg font-semibold text-sm shadow-md",
                        onclick: move |_| on_start_comparison.call(predicted),
                        {t.t("compareWithReal")}
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "card p-4 rounded-xl shadow-md text-center flex flex-col justify-between h-full",
            div {
                class: "flex justify-center items-center gap-2",
                Icon { class: "text-primary", icon: FaWandMagicSparkles, width: 20, height: 20 }
                h3 { class: "text-base font-bold", {t.t("whatsYourBS")} }
            }
            div {
                class: "flex-grow flex flex-col items-center justify-center py-2 min-h-[150px]",
                {body}
            }
            button {
                class: "text-xs text-muted mt-2 hover:underline",
                onclick: move |_| on_modal.call(Some(explanation.clone())),
                {t.t("whatIsThis")}
            }
        }
    }
}
