use chrono::Utc;
use dioxus::prelude::*;

use store::prediction::estimate;
use store::last_reading;

use crate::views::WelcomeView;
use crate::{use_app_state, DashboardTimeline, ModalContent, Screen};

/// Home page: the onboarding form until a user exists, the dashboard after.
#[component]
pub fn DashboardView(on_navigate: EventHandler<Screen>) -> Element {
    let state = use_app_state();
    let t = state.translator();
    let mut modal = state.modal;
    let mut prediction = state.prediction;
    let mut is_estimating = state.is_estimating;

    let Some(user) = state.user.read().clone() else {
        return rsx! { WelcomeView {} };
    };

    let can_estimate = last_reading(&user.logs).is_some();
    let logs = user.logs.clone();
    let comparison_t = t.clone();
    let last = last_reading(&user.logs);

    rsx! {
        DashboardTimeline {
            user,
            on_navigate,
            on_modal: move |content: Option<ModalContent>| modal.set(content),
            is_estimating: is_estimating(),
            last_prediction: prediction(),
            on_estimate: move |_| {
                is_estimating.set(true);
                let result = estimate(&logs, Utc::now());
                if result.is_none() {
                    tracing::debug!("no blood sugar readings to estimate from");
                }
                prediction.set(result);
                is_estimating.set(false);
            },
            on_start_comparison: move |value: f64| {
                let t = &comparison_t;
                let mut message = format!("{}: ~{} mg/dL", t.t("comparisonEstimate"), t.num(value));
                if let Some(reading) = &last {
                    message.push_str(&format!(
                        "\n{}: {} mg/dL ({})",
                        t.t("comparisonReading"),
                        t.num(reading.glucose),
                        t.num(&reading.time)
                    ));
                }
                modal.set(Some(ModalContent::new(t.t("comparisonTitle"), message)));
            },
            can_estimate,
            t,
        }
    }
}
