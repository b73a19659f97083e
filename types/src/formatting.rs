//! Locale-aware date formatting for race cards.
//!
//! Month and weekday names follow what browsers produce for the long
//! `month`/`weekday` styles: Spanish names are lowercase, English names
//! are capitalized. Cards capitalize the weekday themselves through
//! [`capitalize_first`].

use chrono::{Datelike, NaiveDate, Weekday};

use crate::locale::Locale;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Indexed by Weekday::num_days_from_monday
const WEEKDAYS_ES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Long month name for a 1-based month number.
///
/// Out-of-range months yield an empty string.
///
/// # Examples
/// ```
/// use racecal_types::{Locale, formatting::month_name};
/// assert_eq!(month_name(Locale::Es, 3), "marzo");
/// assert_eq!(month_name(Locale::En, 12), "December");
/// assert_eq!(month_name(Locale::Es, 13), "");
/// ```
pub fn month_name(locale: Locale, month: u32) -> &'static str {
    let table = match locale {
        Locale::Es => &MONTHS_ES,
        Locale::En => &MONTHS_EN,
    };
    month
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Long weekday name.
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use racecal_types::{Locale, formatting::weekday_name};
/// assert_eq!(weekday_name(Locale::Es, Weekday::Wed), "miércoles");
/// assert_eq!(weekday_name(Locale::En, Weekday::Sun), "Sunday");
/// ```
pub fn weekday_name(locale: Locale, weekday: Weekday) -> &'static str {
    let idx = weekday.num_days_from_monday() as usize;
    match locale {
        Locale::Es => WEEKDAYS_ES[idx],
        Locale::En => WEEKDAYS_EN[idx],
    }
}

/// Uppercase the first character, leaving the rest untouched.
///
/// # Examples
/// ```
/// use racecal_types::formatting::capitalize_first;
/// assert_eq!(capitalize_first("sábado"), "Sábado");
/// assert_eq!(capitalize_first("ñu"), "Ñu");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Month and year line of a race card, e.g. `marzo 2024`.
pub fn format_month_year(locale: Locale, date: NaiveDate) -> String {
    format!("{} {}", month_name(locale, date.month()), date.year())
}

/// Weekday line of a race card, capitalized, e.g. `Domingo`.
pub fn format_weekday(locale: Locale, date: NaiveDate) -> String {
    capitalize_first(weekday_name(locale, date.weekday()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year(Locale::Es, date(2024, 3, 10)), "marzo 2024");
        assert_eq!(format_month_year(Locale::Es, date(2025, 9, 1)), "septiembre 2025");
        assert_eq!(format_month_year(Locale::En, date(2024, 3, 10)), "March 2024");
    }

    #[test]
    fn test_format_weekday() {
        // 2024-03-10 was a Sunday
        assert_eq!(format_weekday(Locale::Es, date(2024, 3, 10)), "Domingo");
        assert_eq!(format_weekday(Locale::En, date(2024, 3, 10)), "Sunday");
        assert_eq!(format_weekday(Locale::Es, date(2024, 3, 13)), "Miércoles");
        assert_eq!(format_weekday(Locale::Es, date(2024, 3, 16)), "Sábado");
    }

    #[test]
    fn test_every_month_has_a_name() {
        for locale in [Locale::Es, Locale::En] {
            for m in 1..=12 {
                assert!(!month_name(locale, m).is_empty());
            }
            assert_eq!(month_name(locale, 0), "");
        }
    }
}
