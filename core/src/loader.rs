//! Race document parsing and tournament derivation.
//!
//! Fetching is done by the front end; this module only turns the fetched
//! bytes into a [`Catalog`].

use hashbrown::HashMap;
use racecal_types::{Race, RaceDocument, Tournament};

use crate::error::LoadError;

/// Everything known after a successful load. Never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub races: Vec<Race>,
    /// Distinct tournaments in first-seen order
    pub tournaments: Vec<Tournament>,
}

impl Catalog {
    pub fn from_races(races: Vec<Race>) -> Self {
        let tournaments = derive_tournaments(&races);
        tracing::info!(
            races = races.len(),
            tournaments = tournaments.len(),
            "Race catalog loaded"
        );
        Self { races, tournaments }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        Ok(Self::from_races(parse_races(bytes)?))
    }

    pub fn tournament(&self, id: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }
}

/// Parse a `{ "races": [...] }` document.
pub fn parse_races(bytes: &[u8]) -> Result<Vec<Race>, LoadError> {
    let doc: RaceDocument = serde_json::from_slice(bytes)?;
    Ok(doc.races)
}

/// Distinct tournaments keyed by id, in order of first appearance.
///
/// Label and color are taken from the first race of each tournament.
pub fn derive_tournaments(races: &[Race]) -> Vec<Tournament> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tournaments: Vec<Tournament> = Vec::new();

    for race in races {
        match index.get(race.tournament_id.as_str()) {
            Some(&i) => {
                let known = &tournaments[i];
                if known.label != race.tournament_label || known.color != race.color {
                    tracing::debug!(
                        tournament = %race.tournament_id,
                        label = %race.tournament_label,
                        "Tournament label/color differs from first occurrence, keeping first"
                    );
                }
            }
            None => {
                index.insert(&race.tournament_id, tournaments.len());
                tournaments.push(Tournament::from_race(race));
            }
        }
    }

    tournaments
}
