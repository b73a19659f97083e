//! UI Components

pub mod calendar_grid;
pub mod filter_picker;

pub use calendar_grid::CalendarGrid;
pub use filter_picker::FilterPicker;
