//! Calendar state shared through context.
//!
//! Components never touch [`CalendarState`] directly: they send a
//! [`Command`] through the store, and the root re-renders from a fresh
//! snapshot.

use dioxus::prelude::*;
use racecal_core::{CalendarState, Catalog, Command, LoadError, RenderOptions, ViewSnapshot};

#[derive(Clone, Copy)]
pub struct CalendarStore {
    state: Signal<CalendarState>,
}

impl CalendarStore {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            state: Signal::new(CalendarState::new(options)),
        }
    }

    /// Apply a user command. Every command is followed by a full recompute.
    pub fn dispatch(&mut self, command: Command) {
        let changed = self.state.write().apply(command);
        tracing::trace!(changed, "Command dispatched");
    }

    pub fn finish_load(&mut self, result: Result<Catalog, LoadError>) {
        self.state.write().loaded(result);
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.read().snapshot()
    }
}

/// Create the store at the app root.
pub fn use_calendar_provider(options: RenderOptions) -> CalendarStore {
    use_context_provider(move || CalendarStore::new(options))
}

/// Get the store from context.
pub fn use_calendar() -> CalendarStore {
    use_context::<CalendarStore>()
}
