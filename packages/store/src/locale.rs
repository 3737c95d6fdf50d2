//! # Locale helpers
//!
//! - [`Language`] — the two UI languages and their text direction.
//! - [`localize_digits`] — renders ASCII digits as Persian digits for `fa`.
//! - [`JalaliDate`] — Gregorian → Solar Hijri conversion. Its `Display` form
//!   (`"1403/07/28"`) is the day bucket stored in
//!   [`LogEntry::jalali_date`](crate::models::LogEntry::jalali_date), and
//!   [`JalaliDate::long_label`] builds the dashboard's date line.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
}

impl Language {
    /// BCP 47 code for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::Fa => "fa",
            Language::En => "en",
        }
    }

    /// Value for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Fa => "rtl",
            Language::En => "ltr",
        }
    }
}

/// Replace ASCII digits with Persian digits when `lang` is [`Language::Fa`].
pub fn localize_digits(text: &str, lang: Language) -> String {
    match lang {
        Language::En => text.to_string(),
        Language::Fa => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => char::from_u32(0x06F0 + d).unwrap_or(c),
                _ => c,
            })
            .collect(),
    }
}

/// A date in the Solar Hijri (Jalali) calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct JalaliDate {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// 1..=31
    pub day: u32,
}

const MONTHS_FA: [&str; 12] = [
    "فروردین", "اردیبهشت", "خرداد", "تیر", "مرداد", "شهریور", "مهر", "آبان", "آذر", "دی", "بهمن", "اسفند",
];

const MONTHS_EN: [&str; 12] = [
    "Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar", "Mehr", "Aban", "Azar", "Dey",
    "Bahman", "Esfand",
];

/// Days before each Gregorian month in a non-leap year.
const GREGORIAN_MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

impl JalaliDate {
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let gy = i64::from(date.year());
        let gm = date.month() as usize;
        let gd = i64::from(date.day());

        let gy2 = if gm > 2 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
            + gd
            + GREGORIAN_MONTH_OFFSETS[gm - 1];

        let mut year = -1595 + 33 * (days / 12_053);
        days %= 12_053;
        year += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            year += (days - 1) / 365;
            days = (days - 1) % 365;
        }
        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    pub fn month_name(&self, lang: Language) -> &'static str {
        let index = (self.month.clamp(1, 12) - 1) as usize;
        match lang {
            Language::Fa => MONTHS_FA[index],
            Language::En => MONTHS_EN[index],
        }
    }

    /// "Saturday, 28 Mehr 1403" / "شنبه ۲۸ مهر ۱۴۰۳".
    pub fn long_label(&self, weekday: Weekday, lang: Language) -> String {
        let label = match lang {
            Language::Fa => format!(
                "{} {} {} {}",
                weekday_name(weekday, lang),
                self.day,
                self.month_name(lang),
                self.year
            ),
            Language::En => format!(
                "{}, {} {} {}",
                weekday_name(weekday, lang),
                self.day,
                self.month_name(lang),
                self.year
            ),
        };
        localize_digits(&label, lang)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

fn weekday_name(weekday: Weekday, lang: Language) -> &'static str {
    match (lang, weekday) {
        (Language::Fa, Weekday::Sat) => "شنبه",
        (Language::Fa, Weekday::Sun) => "یکشنبه",
        (Language::Fa, Weekday::Mon) => "دوشنبه",
        (Language::Fa, Weekday::Tue) => "سه‌شنبه",
        (Language::Fa, Weekday::Wed) => "چهارشنبه",
        (Language::Fa, Weekday::Thu) => "پنجشنبه",
        (Language::Fa, Weekday::Fri) => "جمعه",
        (Language::En, Weekday::Sat) => "Saturday",
        (Language::En, Weekday::Sun) => "Sunday",
        (Language::En, Weekday::Mon) => "Monday",
        (Language::En, Weekday::Tue) => "Tuesday",
        (Language::En, Weekday::Wed) => "Wednesday",
        (Language::En, Weekday::Thu) => "Thursday",
        (Language::En, Weekday::Fri) => "Friday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(JalaliDate::from_gregorian(date(2024, 10, 19)).to_string(), "1403/07/28");
        // Nowruz
        assert_eq!(JalaliDate::from_gregorian(date(2024, 3, 20)).to_string(), "1403/01/01");
        assert_eq!(JalaliDate::from_gregorian(date(2025, 3, 21)).to_string(), "1404/01/01");
        assert_eq!(JalaliDate::from_gregorian(date(2000, 1, 1)).to_string(), "1378/10/11");
        assert_eq!(JalaliDate::from_gregorian(date(2024, 12, 31)).to_string(), "1403/10/11");
    }

    #[test]
    fn test_localize_digits() {
        assert_eq!(localize_digits("12:05", Language::Fa), "۱۲:۰۵");
        assert_eq!(localize_digits("12:05", Language::En), "12:05");
        assert_eq!(localize_digits("mg/dL 7", Language::Fa), "mg/dL ۷");
    }

    #[test]
    fn test_long_label() {
        let jalali = JalaliDate::from_gregorian(date(2024, 10, 19));
        assert_eq!(jalali.long_label(Weekday::Sat, Language::En), "Saturday, 28 Mehr 1403");
        assert_eq!(jalali.long_label(Weekday::Sat, Language::Fa), "شنبه ۲۸ مهر ۱۴۰۳");
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::Fa.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
    }
}
