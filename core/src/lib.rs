//! Race calendar core.
//!
//! Target-independent logic behind the calendar page: parsing the race
//! document, deriving tournaments, tracking the active filters and the
//! picker, and deriving the card list to render.

pub mod calendar;
pub mod error;
pub mod filter;
pub mod loader;
pub mod picker;
pub mod view;

pub use calendar::{CalendarState, Command, LoadPhase, ViewSnapshot};
pub use error::LoadError;
pub use filter::{CheckboxRow, FilterState};
pub use loader::{Catalog, derive_tournaments, parse_races};
pub use picker::{ClickTarget, PickerState};
pub use view::{CalendarView, Placeholder, RaceCard, RenderOptions, filter_and_sort, render};
