//! Open/closed state of the tournament picker dropdown.

/// Where a click landed, relative to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The chips summary control (outside the open panel)
    Summary,
    /// Inside the dropdown panel
    Panel,
    /// Anywhere else on the page
    Outside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerState {
    #[default]
    Closed,
    Open,
}

impl PickerState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Returns whether the state changed.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        let next = match (target, *self) {
            (ClickTarget::Summary, Self::Closed) => Self::Open,
            (ClickTarget::Summary, Self::Open) => Self::Closed,
            (ClickTarget::Panel, state) => state,
            (ClickTarget::Outside, _) => Self::Closed,
        };
        let changed = next != *self;
        *self = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_toggles() {
        let mut picker = PickerState::default();
        assert!(!picker.is_open());
        assert!(picker.on_click(ClickTarget::Summary));
        assert!(picker.is_open());
        assert!(picker.on_click(ClickTarget::Summary));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_panel_clicks_keep_it_open() {
        let mut picker = PickerState::Open;
        assert!(!picker.on_click(ClickTarget::Panel));
        assert!(picker.is_open());

        let mut closed = PickerState::Closed;
        assert!(!closed.on_click(ClickTarget::Panel));
        assert!(!closed.is_open());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut picker = PickerState::Open;
        assert!(picker.on_click(ClickTarget::Outside));
        assert_eq!(picker, PickerState::Closed);
        assert!(!picker.on_click(ClickTarget::Outside));
    }
}
