//! Translation lookup handed to every screen as the `t` prop.

use std::fmt::Display;
use std::rc::Rc;

use store::{localize_digits, Language};

type Lookup = Rc<dyn Fn(Language, &str) -> Option<String>>;

/// Resolves localization keys for one language.
///
/// The shell may plug in its own string table with [`Translator::with_lookup`];
/// keys it does not know fall back to the built-in table, then to the key
/// itself.
#[derive(Clone)]
pub struct Translator {
    language: Language,
    lookup: Option<Lookup>,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            lookup: None,
        }
    }

    pub fn with_lookup(language: Language, lookup: impl Fn(Language, &str) -> Option<String> + 'static) -> Self {
        Self {
            language,
            lookup: Some(Rc::new(lookup)),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`.
    pub fn t(&self, key: &str) -> String {
        self.lookup
            .as_ref()
            .and_then(|lookup| lookup(self.language, key))
            .or_else(|| builtin(self.language, key).map(str::to_string))
            .unwrap_or_else(|| key.to_string())
    }

    /// Render a number or numeric string with the language's digits.
    pub fn num(&self, value: impl Display) -> String {
        localize_digits(&value.to_string(), self.language)
    }
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && match (&self.lookup, &other.lookup) {
                (None, None) => true,
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("language", &self.language)
            .field("lookup", &self.lookup.is_some())
            .finish()
    }
}

fn builtin(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::En => builtin_en(key),
        Language::Fa => builtin_fa(key).or_else(|| builtin_en(key)),
    }
}

fn builtin_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "appName" => "GlucoJourney",
        "welcomeMessage" => "Welcome to your smart diabetes assistant.",
        "welcomeStart" => "Let's start",
        "name" => "Name",
        "namePlaceholder" => "Your name",
        "birthDate" => "Birth date",
        "birthDateExample" => "e.g., 1996/04/09",
        "optional" => "optional",
        "back" => "Back",
        "settings" => "Settings",
        "close" => "Close",
        "cancel" => "Cancel",
        "success" => "Success",
        "error" => "Error",
        // dashboard
        "lastReading" => "Last reading",
        "time" => "Time",
        "noDataYet" => "No data yet",
        "noDataToday" => "Nothing logged today",
        "gram" => "g",
        "minute" => "min",
        "unit" => "units",
        "myJourney" => "My journey",
        "level" => "Level",
        "xp" => "XP",
        "activeDays" => "active days",
        "logMenuBloodSugar" => "Blood sugar",
        "logMenuMeal" => "Meal",
        "logMenuActivity" => "Activity",
        "logMenuInsulin" => "Insulin",
        "logMenuMood" => "Mood",
        "logMenuPhysicalCondition" => "Physical condition",
        "logMenuMedication" => "Medication",
        "logMenuSleep" => "Sleep",
        "logMenuUnknown" => "Log",
        "mealType_breakfast" => "Breakfast",
        "mealType_lunch" => "Lunch",
        "mealType_dinner" => "Dinner",
        "mealType_snack" => "Snack",
        // prediction
        "whatsYourBS" => "What's my blood sugar?",
        "estimating" => "Estimating",
        "estimateForMe" => "Estimate for me",
        "noInternetConnection" => "Not enough data to estimate",
        "estimateAt" => "Estimated at",
        "compareWithReal" => "Compare with a real reading",
        "whatIsThis" => "What is this?",
        "whatIsSmartEstimation" => "What is smart estimation?",
        "smartEstimationExplanation" => "The estimate weighs your three most recent readings, newest first. It is a hint, not a measurement.",
        "comparisonTitle" => "Estimate vs. reading",
        "comparisonEstimate" => "Estimate",
        "comparisonReading" => "Last reading",
        // settings
        "settingsTitle" => "Settings",
        "installApp" => "Install the app",
        "installAppDesc" => "Add the app to your home screen for quick, offline access.",
        "installOnDevice" => "Install on this device",
        "installAppPrompt" => "Use your browser menu to add this app to the home screen.",
        "googleDriveSync" => "Google Drive sync",
        "googleDriveSyncDesc" => "Keep a copy of your data in your Google Drive.",
        "signInWithGoogle" => "Sign in with Google",
        "lastSync" => "Last sync",
        "syncing" => "Syncing",
        "syncNow" => "Sync now",
        "restoring" => "Restoring",
        "restoreFromDrive" => "Restore from Drive",
        "signOut" => "Sign out",
        "syncSuccess" => "Your data was saved to Google Drive.",
        "syncError" => "Sync failed. Please try again.",
        "restoreFromDriveSuccess" => "Your data was restored from Google Drive.",
        "restoreFromDriveError" => "Restoring from Google Drive failed.",
        "quickSettings" => "Quick settings",
        "language" => "Language",
        "comingSoon" => "Coming soon",
        "notifications" => "Notifications",
        "notificationsEnabled" => "Notifications are enabled.",
        "notificationsDenied" => "Notifications are blocked for this app.",
        "changeTheme" => "Change theme",
        "darkMode" => "Dark mode",
        "autoMode" => "Automatic",
        "lightMode" => "Light mode",
        "summaryTimeframe" => "Summary timeframe",
        "timeFrame_daily" => "Daily",
        "timeFrame_weekly" => "Weekly",
        "timeFrame_monthly" => "Monthly",
        "timeFrame_quarterly" => "Quarterly",
        "reminders" => "Reminders",
        "remindersDesc" => "Blood sugar checks and medication times",
        "backupRestore" => "Backup & restore",
        "backupRestoreDesc" => "Save your data to a file or load it back from one.",
        "backup" => "Backup",
        "restore" => "Restore",
        "backupSaved" => "Backup file saved.",
        "backupFailed" => "Could not create the backup file.",
        "restoreSuccess" => "Your data was restored from the file.",
        "restoreError" => "This file is not a valid backup.",
        "aboutAppTitle" => "About",
        "aboutAppMessage" => "GlucoJourney helps you log blood sugar, meals, activity and insulin, and keeps you motivated along the way.",
        "contactUs" => "Contact us",
        "contactUsDesc" => "Join the community for news and support.",
        "eitaaGroup" => "Eitaa group",
        "eitaaChannel" => "Eitaa channel",
        "version" => "Version",
        "developedBy" => "Idea and development by Seyed Saber Ayoubi",
        // reminders
        "remindersTitle" => "Reminders",
        "noReminders" => "No reminders yet",
        "addReminder" => "Add reminder",
        "reminderType" => "Reminder type",
        "reminderTime" => "Time",
        "reminderType_check_bg" => "Check blood sugar",
        "reminderType_take_meds" => "Take medication",
        _ => return None,
    })
}

fn builtin_fa(key: &str) -> Option<&'static str> {
    Some(match key {
        "appName" => "همراه قند",
        "welcomeMessage" => "به دستیار هوشمند مدیریت دیابت خود خوش آمدید.",
        "welcomeStart" => "شروع کنیم",
        "name" => "نام",
        "namePlaceholder" => "نام شما",
        "birthDate" => "تاریخ تولد",
        "birthDateExample" => "مثال: ۱۳۷۵/۰۱/۲۰",
        "optional" => "اختیاری",
        "back" => "بازگشت",
        "settings" => "تنظیمات",
        "close" => "بستن",
        "cancel" => "انصراف",
        "success" => "موفق",
        "error" => "خطا",
        "lastReading" => "آخرین اندازه‌گیری",
        "time" => "ساعت",
        "noDataYet" => "هنوز داده‌ای ثبت نشده",
        "noDataToday" => "امروز چیزی ثبت نشده",
        "gram" => "گرم",
        "minute" => "دقیقه",
        "unit" => "واحد",
        "myJourney" => "سفر من",
        "level" => "سطح",
        "xp" => "امتیاز",
        "activeDays" => "روز فعال",
        "logMenuBloodSugar" => "قند خون",
        "logMenuMeal" => "وعده غذایی",
        "logMenuActivity" => "فعالیت",
        "logMenuInsulin" => "انسولین",
        "logMenuMood" => "حال",
        "logMenuPhysicalCondition" => "وضعیت جسمی",
        "logMenuMedication" => "دارو",
        "logMenuSleep" => "خواب",
        "logMenuUnknown" => "ثبت",
        "mealType_breakfast" => "صبحانه",
        "mealType_lunch" => "ناهار",
        "mealType_dinner" => "شام",
        "mealType_snack" => "میان‌وعده",
        "whatsYourBS" => "قندم چنده؟",
        "estimating" => "در حال تخمین",
        "estimateForMe" => "برایم تخمین بزن",
        "estimateAt" => "تخمین در",
        "compareWithReal" => "مقایسه با اندازه‌گیری واقعی",
        "whatIsThis" => "این چیست؟",
        "settingsTitle" => "تنظیمات",
        "syncing" => "در حال همگام‌سازی",
        "syncNow" => "همگام‌سازی",
        "restoring" => "در حال بازیابی",
        "restoreFromDrive" => "بازیابی از درایو",
        "signOut" => "خروج",
        "quickSettings" => "تنظیمات سریع",
        "comingSoon" => "به‌زودی",
        "reminders" => "یادآورها",
        "backupRestore" => "پشتیبان‌گیری و بازیابی",
        "backup" => "پشتیبان‌گیری",
        "restore" => "بازیابی",
        "aboutAppTitle" => "درباره برنامه",
        "contactUs" => "تماس با ما",
        "eitaaGroup" => "گروه ایتا",
        "eitaaChannel" => "کانال ایتا",
        "version" => "نسخه",
        "developedBy" => "ایده پردازی و توسعه توسط سید صابر ایوبی",
        "remindersTitle" => "یادآورها",
        "noReminders" => "هنوز یادآوری ندارید",
        "addReminder" => "افزودن یادآور",
        "reminderType" => "نوع یادآور",
        "reminderTime" => "ساعت",
        "reminderType_check_bg" => "اندازه‌گیری قند خون",
        "reminderType_take_meds" => "مصرف دارو",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_chain() {
        let fa = Translator::new(Language::Fa);
        assert_eq!(fa.t("level"), "سطح");
        // Missing in fa, present in en.
        assert_eq!(fa.t("syncSuccess"), "Your data was saved to Google Drive.");
        // Missing everywhere.
        assert_eq!(fa.t("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_custom_lookup_wins() {
        let t = Translator::with_lookup(Language::En, |_, key| (key == "level").then(|| "Lvl".to_string()));
        assert_eq!(t.t("level"), "Lvl");
        assert_eq!(t.t("xp"), "XP");
    }

    #[test]
    fn test_num_uses_language_digits() {
        assert_eq!(Translator::new(Language::Fa).num(250), "۲۵۰");
        assert_eq!(Translator::new(Language::En).num("08:30"), "08:30");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Translator::new(Language::En), Translator::new(Language::En));
        assert_ne!(Translator::new(Language::En), Translator::new(Language::Fa));
    }
}
