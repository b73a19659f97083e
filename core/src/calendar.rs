//! Application state and command dispatch.
//!
//! The front end owns one [`CalendarState`], turns each user interaction
//! into a [`Command`], applies it and then rebuilds the whole
//! [`ViewSnapshot`]. There is no incremental update path.

use racecal_types::Tournament;

use crate::error::LoadError;
use crate::filter::{CheckboxRow, FilterState};
use crate::loader::Catalog;
use crate::picker::{ClickTarget, PickerState};
use crate::view::{self, CalendarView, RenderOptions};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleFilter(String),
    /// Checkbox change carrying the new checked value
    SetFilter(String, bool),
    /// Chip close button
    RemoveFilter(String),
    SelectAll(bool),
    SetSearchTerm(String),
    PickerClick(ClickTarget),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready(Catalog),
    /// Holds the diagnostic message; the user only sees the error view
    Failed(String),
}

/// Everything the page renders, recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub calendar: CalendarView,
    pub chips: Vec<Tournament>,
    pub rows: Vec<CheckboxRow>,
    pub all_selected: bool,
    pub search_term: String,
    pub picker_open: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CalendarState {
    phase: LoadPhase,
    filters: FilterState,
    picker: PickerState,
    options: RenderOptions,
}

impl CalendarState {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.phase {
            LoadPhase::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn picker(&self) -> PickerState {
        self.picker
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Record the outcome of the single load attempt.
    ///
    /// Only the first outcome is kept; later calls are ignored.
    pub fn loaded(&mut self, result: Result<Catalog, LoadError>) {
        if !matches!(self.phase, LoadPhase::Loading) {
            tracing::warn!("Load outcome received twice, ignoring");
            return;
        }
        match result {
            Ok(catalog) => {
                self.filters = FilterState::new(&catalog.tournaments);
                self.phase = LoadPhase::Ready(catalog);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading races");
                self.filters = FilterState::default();
                self.phase = LoadPhase::Failed(e.to_string());
            }
        }
    }

    /// Apply one command. Returns whether anything visible changed.
    pub fn apply(&mut self, command: Command) -> bool {
        tracing::debug!(?command, "Applying command");

        let ready = matches!(self.phase, LoadPhase::Ready(_));
        match command {
            Command::PickerClick(target) => self.picker.on_click(target),
            _ if !ready => {
                tracing::debug!("No races loaded, ignoring filter command");
                false
            }
            Command::ToggleFilter(id) => self.filters.toggle(&id),
            Command::SetFilter(id, active) => self.filters.set_active(&id, active),
            Command::RemoveFilter(id) => self.filters.remove(&id),
            Command::SelectAll(active) => {
                let before = self.filters.active_count();
                self.filters.select_all(active);
                before != self.filters.active_count()
            }
            Command::SetSearchTerm(term) => {
                let changed = term != self.filters.search_term();
                self.filters.search(term);
                changed
            }
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let locale = self.options.locale;
        let (calendar, tournaments): (CalendarView, &[Tournament]) = match &self.phase {
            LoadPhase::Loading => (CalendarView::loading(locale), &[]),
            LoadPhase::Failed(_) => (CalendarView::error(locale), &[]),
            LoadPhase::Ready(catalog) => (
                view::render(&catalog.races, &self.filters, &self.options),
                &catalog.tournaments,
            ),
        };

        ViewSnapshot {
            calendar,
            chips: self.filters.chips(tournaments).into_iter().cloned().collect(),
            rows: self.filters.checkbox_rows(tournaments),
            all_selected: self.filters.all_selected(),
            search_term: self.filters.search_term().to_string(),
            picker_open: self.picker.is_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"races": [
        {"tournament": "x", "tournamentLabel": "Copa X", "color": "red",
         "date": "2024-03-10", "title": "A", "location": "l", "organizer": "o"},
        {"tournament": "y", "tournamentLabel": "Liga Y", "color": "blue",
         "date": "2024-02-01", "title": "B", "location": "l", "organizer": "o"}
    ]}"#;

    fn ready_state() -> CalendarState {
        let mut state = CalendarState::new(RenderOptions::default());
        state.loaded(Catalog::from_json(DOC.as_bytes()));
        state
    }

    fn titles(snapshot: &ViewSnapshot) -> Vec<String> {
        snapshot.calendar.cards().iter().map(|c| c.title.clone()).collect()
    }

    fn chip_ids(snapshot: &ViewSnapshot) -> Vec<String> {
        snapshot.chips.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_initial_snapshot_shows_everything() {
        let state = ready_state();
        let snap = state.snapshot();
        assert_eq!(titles(&snap), vec!["B", "A"]);
        assert_eq!(chip_ids(&snap), vec!["x", "y"]);
        assert!(snap.rows.iter().all(|r| r.checked && r.visible));
        assert!(snap.all_selected);
        assert!(!snap.picker_open);
    }

    #[test]
    fn test_loading_snapshot() {
        let state = CalendarState::new(RenderOptions::default());
        let snap = state.snapshot();
        assert!(matches!(snap.calendar, CalendarView::Loading { .. }));
        assert!(snap.rows.is_empty());
        assert!(snap.chips.is_empty());
    }

    #[test]
    fn test_failed_load_shows_error_and_ignores_filters() {
        let mut state = CalendarState::new(RenderOptions::default());
        state.loaded(Catalog::from_json(b"{ broken"));

        assert!(matches!(state.phase(), LoadPhase::Failed(_)));
        assert!(state.catalog().is_none());
        assert!(!state.apply(Command::SelectAll(true)));

        let snap = state.snapshot();
        assert_eq!(snap.calendar, CalendarView::error(state.options().locale));
        assert!(snap.rows.is_empty());

        // A later success cannot revive a failed session
        state.loaded(Catalog::from_json(DOC.as_bytes()));
        assert!(matches!(state.phase(), LoadPhase::Failed(_)));
    }

    #[test]
    fn test_toggle_pair_restores_view() {
        let mut state = ready_state();
        let before = state.snapshot();

        assert!(state.apply(Command::ToggleFilter("x".into())));
        let mid = state.snapshot();
        assert_eq!(titles(&mid), vec!["B"]);
        assert_eq!(chip_ids(&mid), vec!["y"]);
        assert!(!mid.all_selected);

        assert!(state.apply(Command::ToggleFilter("x".into())));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_chip_removal_unchecks_checkbox() {
        let mut state = ready_state();
        assert!(state.apply(Command::RemoveFilter("y".into())));
        let snap = state.snapshot();
        let row = snap.rows.iter().find(|r| r.id == "y").unwrap();
        assert!(!row.checked);
        assert_eq!(titles(&snap), vec!["A"]);

        // Removing again is a no-op
        assert!(!state.apply(Command::RemoveFilter("y".into())));
    }

    #[test]
    fn test_checkbox_change() {
        let mut state = ready_state();
        assert!(state.apply(Command::SetFilter("x".into(), false)));
        assert!(!state.apply(Command::SetFilter("x".into(), false)));
        assert!(state.apply(Command::SetFilter("x".into(), true)));
        assert_eq!(titles(&state.snapshot()), vec!["B", "A"]);
    }

    #[test]
    fn test_select_all_false_then_true() {
        let mut state = ready_state();
        assert!(state.apply(Command::SelectAll(false)));
        let snap = state.snapshot();
        assert_eq!(snap.calendar, CalendarView::empty(state.options().locale));
        assert!(snap.chips.is_empty());
        assert!(snap.rows.iter().all(|r| !r.checked));

        assert!(state.apply(Command::SelectAll(true)));
        assert_eq!(titles(&state.snapshot()), vec!["B", "A"]);
        assert!(!state.apply(Command::SelectAll(true)));
    }

    #[test]
    fn test_search_leaves_calendar_untouched() {
        let mut state = ready_state();
        state.apply(Command::RemoveFilter("x".into()));
        let before = state.snapshot();

        assert!(state.apply(Command::SetSearchTerm("nothing matches".into())));
        let after = state.snapshot();
        assert!(after.rows.iter().all(|r| !r.visible));
        assert_eq!(after.calendar, before.calendar);
        assert_eq!(after.chips, before.chips);
        assert_eq!(
            state.filters().active_ids().collect::<Vec<_>>(),
            vec!["y"]
        );
    }

    #[test]
    fn test_picker_clicks() {
        let mut state = ready_state();
        assert!(state.apply(Command::PickerClick(ClickTarget::Summary)));
        assert!(state.snapshot().picker_open);
        assert!(!state.apply(Command::PickerClick(ClickTarget::Panel)));
        assert!(state.picker().is_open());
        assert!(state.apply(Command::PickerClick(ClickTarget::Outside)));
        assert!(!state.snapshot().picker_open);
    }

    #[test]
    fn test_picker_works_before_load() {
        let mut state = CalendarState::new(RenderOptions::default());
        assert!(state.apply(Command::PickerClick(ClickTarget::Summary)));
        assert!(!state.apply(Command::ToggleFilter("x".into())));
    }
}
