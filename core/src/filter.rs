//! Active tournament filters and the picker's search term.
//!
//! The active set and the checkbox/chip surfaces are one piece of state:
//! rows and chips are derived from the set on every read, so a chip
//! removal unchecks its row without any extra bookkeeping.

use hashbrown::HashSet;
use racecal_types::Tournament;

/// One row in the picker's checkbox list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxRow {
    pub id: String,
    pub label: String,
    pub color: String,
    pub checked: bool,
    /// False when the search term hides the row
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FilterState {
    // Known ids in tournament order
    known: Vec<String>,
    active: HashSet<String>,
    search_term: String,
}

impl FilterState {
    /// All tournaments start active.
    pub fn new(tournaments: &[Tournament]) -> Self {
        let known: Vec<String> = tournaments.iter().map(|t| t.id.clone()).collect();
        let active = known.iter().cloned().collect();
        Self {
            known,
            active,
            search_term: String::new(),
        }
    }

    fn is_known(&self, id: &str) -> bool {
        self.known.iter().any(|k| k == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Active ids in tournament order.
    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.known
            .iter()
            .filter(|id| self.active.contains(id.as_str()))
            .map(String::as_str)
    }

    /// Flip membership. Returns false for unknown ids.
    pub fn toggle(&mut self, id: &str) -> bool {
        let active = !self.is_active(id);
        self.set_active(id, active)
    }

    /// Set membership explicitly (checkbox change). Returns whether the set changed.
    pub fn set_active(&mut self, id: &str, active: bool) -> bool {
        if !self.is_known(id) {
            tracing::warn!(tournament = %id, "Ignoring filter change for unknown tournament");
            return false;
        }
        if active {
            self.active.insert(id.to_string())
        } else {
            self.active.remove(id)
        }
    }

    /// Chip close button: always deactivates.
    pub fn remove(&mut self, id: &str) -> bool {
        self.set_active(id, false)
    }

    pub fn select_all(&mut self, active: bool) {
        if active {
            self.active = self.known.iter().cloned().collect();
        } else {
            self.active.clear();
        }
    }

    /// Whether the select-all checkbox should read as checked.
    pub fn all_selected(&self) -> bool {
        self.known.iter().all(|id| self.active.contains(id))
    }

    /// Set the picker search term. Only affects row visibility.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Case-insensitive substring match of `label` against the search term.
    pub fn matches_search(&self, label: &str) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        label
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    /// Chips for the active tournaments, in tournament order.
    pub fn chips<'a>(&self, tournaments: &'a [Tournament]) -> Vec<&'a Tournament> {
        tournaments
            .iter()
            .filter(|t| self.is_active(&t.id))
            .collect()
    }

    pub fn checkbox_rows(&self, tournaments: &[Tournament]) -> Vec<CheckboxRow> {
        tournaments
            .iter()
            .map(|t| CheckboxRow {
                id: t.id.clone(),
                label: t.label.clone(),
                color: t.color.clone(),
                checked: self.is_active(&t.id),
                visible: self.matches_search(&t.label),
            })
            .collect()
    }
}
