//! Calendar view derivation.
//!
//! A pure function of the race list and the active filters. The front end
//! maps the resulting [`CalendarView`] onto elements one to one.

use chrono::Datelike;
use racecal_types::formatting::{format_month_year, format_weekday};
use racecal_types::{CalendarConfig, Locale, Race};

use crate::filter::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: Locale,
    pub animation_step_ms: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&CalendarConfig::default())
    }
}

impl From<&CalendarConfig> for RenderOptions {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            locale: config.locale,
            animation_step_ms: config.animation_step_ms,
        }
    }
}

/// Render descriptor for one race card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceCard {
    /// Day of month, shown in the date badge
    pub day: u32,
    pub month_year: String,
    pub weekday: String,
    pub title: String,
    pub location: String,
    pub organizer: String,
    pub tournament_id: String,
    pub tournament_label: String,
    pub color: String,
    /// Staggered entry animation. Cosmetic.
    pub animation_delay_ms: u32,
}

impl RaceCard {
    pub fn new(race: &Race, index: usize, options: &RenderOptions) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            day: race.date.day(),
            month_year: format_month_year(options.locale, race.date),
            weekday: format_weekday(options.locale, race.date),
            title: race.title.clone(),
            location: race.location.clone(),
            organizer: race.organizer.clone(),
            tournament_id: race.tournament_id.clone(),
            tournament_label: race.tournament_label.clone(),
            color: race.color.clone(),
            animation_delay_ms: index.saturating_mul(options.animation_step_ms),
        }
    }
}

/// A full-width message shown instead of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub title: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarView {
    Loading { text: &'static str },
    /// No race matches the active filters
    Empty(Placeholder),
    Cards(Vec<RaceCard>),
    /// The race document could not be loaded
    Error(Placeholder),
}

impl CalendarView {
    pub fn loading(locale: Locale) -> Self {
        Self::Loading {
            text: locale.texts().loading,
        }
    }

    pub fn empty(locale: Locale) -> Self {
        let texts = locale.texts();
        Self::Empty(Placeholder {
            title: texts.empty_title,
            hint: texts.empty_hint,
        })
    }

    pub fn error(locale: Locale) -> Self {
        let texts = locale.texts();
        Self::Error(Placeholder {
            title: texts.error_title,
            hint: texts.error_hint,
        })
    }

    pub fn cards(&self) -> &[RaceCard] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// Races of active tournaments, ascending by date. Ties keep document order.
pub fn filter_and_sort<'a>(races: &'a [Race], filters: &FilterState) -> Vec<&'a Race> {
    let mut shown: Vec<&Race> = races
        .iter()
        .filter(|race| filters.is_active(&race.tournament_id))
        .collect();
    shown.sort_by_key(|race| race.date);
    shown
}

pub fn render(races: &[Race], filters: &FilterState, options: &RenderOptions) -> CalendarView {
    let shown = filter_and_sort(races, filters);
    if shown.is_empty() {
        return CalendarView::empty(options.locale);
    }
    CalendarView::Cards(
        shown
            .into_iter()
            .enumerate()
            .map(|(i, race)| RaceCard::new(race, i, options))
            .collect(),
    )
}
