//! Visual classification of health logs: which icon a timeline bubble shows and
//! which background it gets.

use crate::models::{LogEntry, LogKind};

/// Icon shown inside a timeline bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogIcon {
    BloodDrop,
    Meal,
    Activity,
    Syringe,
    Mood,
    Body,
    Medication,
    Sleep,
    Neutral,
}

/// Icon and background class for one log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogVisual {
    pub icon: LogIcon,
    pub background: &'static str,
}

const NEUTRAL_BG: &str = "bg-gray-500";

/// Glucose ranges in mg/dL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlucoseBand {
    /// Below 70.
    Low,
    /// 70 to 180.
    InRange,
    /// 181 to 250.
    High,
    /// Above 250.
    VeryHigh,
}

impl GlucoseBand {
    /// Default banding used across the app.
    pub fn for_value(glucose: f64) -> Self {
        if glucose < 70.0 {
            GlucoseBand::Low
        } else if glucose <= 180.0 {
            GlucoseBand::InRange
        } else if glucose <= 250.0 {
            GlucoseBand::High
        } else {
            GlucoseBand::VeryHigh
        }
    }

    /// Text color for large numeric readouts.
    pub fn text_class(&self) -> &'static str {
        match self {
            GlucoseBand::Low => "text-red-500 font-bold",
            GlucoseBand::InRange => "text-green-500",
            GlucoseBand::High => "text-yellow-500",
            GlucoseBand::VeryHigh => "text-red-700 font-bold",
        }
    }

    /// Background color for timeline bubbles.
    pub fn background_class(&self) -> &'static str {
        match self {
            GlucoseBand::Low => "bg-red-500",
            GlucoseBand::InRange => "bg-green-500",
            GlucoseBand::High => "bg-yellow-500",
            GlucoseBand::VeryHigh => "bg-red-700",
        }
    }
}

/// Classify a log for display. Blood-sugar backgrounds come from `banding`;
/// kinds without a dedicated color fall back to neutral gray.
pub fn classify(entry: &LogEntry, banding: impl Fn(f64) -> GlucoseBand) -> LogVisual {
    let icon = match entry.kind {
        LogKind::BloodSugar { .. } => LogIcon::BloodDrop,
        LogKind::Meal { .. } => LogIcon::Meal,
        LogKind::Activity { .. } => LogIcon::Activity,
        LogKind::Insulin { .. } => LogIcon::Syringe,
        LogKind::Mood { .. } => LogIcon::Mood,
        LogKind::PhysicalCondition { .. } => LogIcon::Body,
        LogKind::Medication { .. } => LogIcon::Medication,
        LogKind::Sleep { .. } => LogIcon::Sleep,
        LogKind::Unknown => LogIcon::Neutral,
    };
    let background = match entry.kind {
        LogKind::BloodSugar { glucose } => banding(glucose).background_class(),
        LogKind::Meal { .. } => "bg-orange-500",
        LogKind::Activity { .. } => "bg-sky-500",
        LogKind::Insulin { .. } => "bg-indigo-500",
        _ => NEUTRAL_BG,
    };
    LogVisual { icon, background }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(kind: LogKind) -> LogEntry {
        LogEntry {
            id: "log".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 10, 19, 8, 0, 0).unwrap(),
            time: "11:30".to_string(),
            jalali_date: "1403/07/28".to_string(),
            kind,
        }
    }

    #[test]
    fn test_blood_sugar_uses_banding() {
        let low = entry(LogKind::BloodSugar { glucose: 55.0 });
        let visual = classify(&low, GlucoseBand::for_value);
        assert_eq!(visual.icon, LogIcon::BloodDrop);
        assert_eq!(visual.background, "bg-red-500");

        // A caller-supplied banding wins over the default.
        let visual = classify(&low, |_| GlucoseBand::High);
        assert_eq!(visual.background, "bg-yellow-500");
    }

    #[test]
    fn test_fixed_kind_colors() {
        let meal = entry(LogKind::Meal {
            carbs: 30.0,
            meal_type: crate::models::MealType::Snack,
            description: None,
        });
        assert_eq!(classify(&meal, GlucoseBand::for_value).background, "bg-orange-500");

        let insulin = entry(LogKind::Insulin {
            insulin_dose: 4.0,
            insulin_type: "Novorapid".to_string(),
        });
        let visual = classify(&insulin, GlucoseBand::for_value);
        assert_eq!(visual.icon, LogIcon::Syringe);
        assert_eq!(visual.background, "bg-indigo-500");
    }

    #[test]
    fn test_other_kinds_fall_back_to_neutral() {
        let mood = entry(LogKind::Mood { description: None });
        let visual = classify(&mood, GlucoseBand::for_value);
        assert_eq!(visual.icon, LogIcon::Mood);
        assert_eq!(visual.background, NEUTRAL_BG);

        let unknown = entry(LogKind::Unknown);
        let visual = classify(&unknown, GlucoseBand::for_value);
        assert_eq!(visual.icon, LogIcon::Neutral);
        assert_eq!(visual.background, NEUTRAL_BG);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(GlucoseBand::for_value(69.9), GlucoseBand::Low);
        assert_eq!(GlucoseBand::for_value(70.0), GlucoseBand::InRange);
        assert_eq!(GlucoseBand::for_value(180.0), GlucoseBand::InRange);
        assert_eq!(GlucoseBand::for_value(181.0), GlucoseBand::High);
        assert_eq!(GlucoseBand::for_value(251.0), GlucoseBand::VeryHigh);
    }
}
