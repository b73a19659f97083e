//! Shared types for the race calendar.
//!
//! Everything here is plain data: the race document as served to the
//! browser, the derived tournament records, the calendar configuration
//! and the locale tables used to format dates and fixed texts.

pub mod config;
pub mod formatting;
pub mod locale;
pub mod race;

pub use config::CalendarConfig;
pub use locale::{Locale, LocaleTexts};
pub use race::{Race, RaceDocument, Tournament, parse_race_date};
