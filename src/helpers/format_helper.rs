use chrono::{DateTime, Local, Locale, TimeZone, Utc};
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, LOCALE_ENV_VARS, NOT_AVAILABLE};
use crate::structs::config::display_config::DisplayConfig;

pub fn format_average(value: f64) -> String {
    format!("{:.1}", value)
}

/// Averages that are missing, or zero because nothing was rated yet, show as
/// not available.
pub fn format_optional_average(value: Option<f64>) -> String {
    match value {
        Some(avg) if avg != 0.0 && avg.is_finite() => format_average(avg),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Parses POSIX locale names such as `fr_BE.UTF-8` or `de_DE@euro`.
pub fn locale_from_name(name: &str) -> Option<Locale> {
    let base = name.split(|c: char| c == '.' || c == '@').next()?.trim();
    match base {
        "" => None,
        "C" => Locale::try_from("POSIX").ok(),
        _ => Locale::try_from(base).ok(),
    }
}

/// The configured locale, else the first recognised one from the
/// environment, else POSIX.
pub fn resolve_locale(configured: Option<&str>) -> Locale {
    configured
        .and_then(locale_from_name)
        .or_else(|| {
            LOCALE_ENV_VARS
                .iter()
                .filter_map(|var| std::env::var(var).ok())
                .find_map(|value| locale_from_name(&value))
        })
        .unwrap_or(Locale::POSIX)
}

/// Date and time in the viewer's time zone and locale, joined by a single space.
pub fn format_submitted(timestamp: &DateTime<Utc>, display: &DisplayConfig, locale: Locale) -> String {
    format_in_zone(&timestamp.with_timezone(&Local), &display.date_format, &display.time_format, locale)
}

pub fn format_in_zone<Tz: TimeZone>(timestamp: &DateTime<Tz>, date_format: &str, time_format: &str, locale: Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let date_format = if ConfigManager::is_valid_pattern(date_format) { date_format } else { DEFAULT_DATE_FORMAT };
    let time_format = if ConfigManager::is_valid_pattern(time_format) { time_format } else { DEFAULT_TIME_FORMAT };
    format!(
        "{} {}",
        timestamp.format_localized(date_format, locale),
        timestamp.format_localized(time_format, locale)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn timestamp() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn averages_use_one_decimal() {
        assert_eq!(format_average(8.26), "8.3");
        assert_eq!(format_average(0.0), "0.0");
        assert_eq!(format_optional_average(Some(7.0)), "7.0");
        assert_eq!(format_optional_average(Some(0.0)), "N/A");
        assert_eq!(format_optional_average(None), "N/A");
    }

    #[test]
    fn date_and_time_are_joined_by_one_space() {
        assert_eq!(format_in_zone(&timestamp(), "%x", "%X", Locale::POSIX), "03/14/25 09:26:53");
        assert_eq!(format_in_zone(&timestamp(), "%Y-%m-%d", "%H:%M", Locale::POSIX), "2025-03-14 09:26");
    }

    #[test]
    fn locale_decides_date_layout() {
        assert_eq!(format_in_zone(&timestamp(), "%x", "%X", Locale::de_DE), "14.03.2025 09:26:53");
        assert_eq!(format_in_zone(&timestamp(), "%B", "%H:%M", Locale::fr_FR), "mars 09:26");
    }

    #[test]
    fn invalid_patterns_fall_back_to_defaults() {
        assert_eq!(format_in_zone(&timestamp(), "%Q", "", Locale::POSIX), "03/14/25 09:26:53");
    }

    #[test]
    fn locale_names_accept_encoding_suffixes() {
        assert_eq!(locale_from_name("de_DE.UTF-8"), Some(Locale::de_DE));
        assert_eq!(locale_from_name("de_DE@euro"), Some(Locale::de_DE));
        assert_eq!(locale_from_name("C.UTF-8"), Some(Locale::POSIX));
        assert_eq!(locale_from_name("klingon"), None);
        assert_eq!(locale_from_name(""), None);
    }

    #[test]
    fn configured_locale_wins() {
        assert_eq!(resolve_locale(Some("fr_FR")), Locale::fr_FR);
    }
}
