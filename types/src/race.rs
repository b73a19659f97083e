//! Race records as they appear in the static race document.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Top-level shape of the race document: `{ "races": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceDocument {
    pub races: Vec<Race>,
}

/// A single race event. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Tournament identifier (the `tournament` key in the document)
    #[serde(rename = "tournament")]
    pub tournament_id: String,
    pub tournament_label: String,
    /// CSS color token used for chips, dots and tags
    pub color: String,
    #[serde(deserialize_with = "deserialize_race_date")]
    pub date: NaiveDate,
    pub title: String,
    pub location: String,
    pub organizer: String,
}

/// A tournament derived from the race list. One per distinct id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub label: String,
    pub color: String,
}

impl Tournament {
    pub fn from_race(race: &Race) -> Self {
        Self {
            id: race.tournament_id.clone(),
            label: race.tournament_label.clone(),
            color: race.color.clone(),
        }
    }
}

/// Parse the calendar day out of an ISO date string.
///
/// Accepts a plain `YYYY-MM-DD` date, an RFC 3339 timestamp or a local
/// `YYYY-MM-DDTHH:MM[:SS]` timestamp. Timestamps keep the day as written,
/// no timezone conversion is applied.
pub fn parse_race_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

fn deserialize_race_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_race_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid race date `{raw}`")))
}
