//! Popover state for the filter dropdowns.
//!
//! At most one category's option panel is open at any time. The panel is
//! anchored at the horizontal position of the button that opened it.

use crate::filters::FilterCategory;

/// A rectangle recorded at draw time for mouse hit-testing, as (x, y, w, h)
pub type HitRect = (u16, u16, u16, u16);

/// Whether a terminal cell lies inside a recorded rectangle
pub fn hit(rect: Option<HitRect>, column: u16, row: u16) -> bool {
    match rect {
        Some((x, y, w, h)) => column >= x && column < x + w && row >= y && row < y + h,
        None => false,
    }
}

/// Which filter popover (if any) is open, plus its anchor column
#[derive(Debug, Default, Clone, Copy)]
pub struct PopoverState {
    open: Option<FilterCategory>,
    anchor_x: u16,
}

impl PopoverState {
    pub fn open(&self) -> Option<FilterCategory> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn anchor_x(&self) -> u16 {
        self.anchor_x
    }

    /// A click on a category's button. The open category's button closes
    /// the panel; any other button switches to that category directly, with
    /// no closed state in between.
    pub fn click(&mut self, category: FilterCategory, anchor_x: u16) {
        if self.open == Some(category) {
            self.open = None;
        } else {
            self.open = Some(category);
            self.anchor_x = anchor_x;
        }
    }

    /// A pointer-down outside the popover region
    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = PopoverState::default();
        assert!(!state.is_open());
    }

    #[test]
    fn click_toggles_same_category() {
        let mut state = PopoverState::default();
        state.click(FilterCategory::Experience, 3);
        assert_eq!(state.open(), Some(FilterCategory::Experience));
        assert_eq!(state.anchor_x(), 3);

        state.click(FilterCategory::Experience, 3);
        assert!(!state.is_open());
    }

    #[test]
    fn click_switches_category_directly() {
        let mut state = PopoverState::default();
        state.click(FilterCategory::Experience, 3);
        state.click(FilterCategory::JobType, 17);
        // No closed intermediate is observable: the open slot changed in one step
        assert_eq!(state.open(), Some(FilterCategory::JobType));
        assert_eq!(state.anchor_x(), 17);
    }

    #[test]
    fn outside_pointer_down_closes() {
        let mut state = PopoverState::default();
        state.click(FilterCategory::Salary, 30);
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn at_most_one_open_across_any_sequence() {
        let mut state = PopoverState::default();
        let clicks = [
            FilterCategory::Experience,
            FilterCategory::JobType,
            FilterCategory::JobType,
            FilterCategory::Salary,
            FilterCategory::Education,
            FilterCategory::Education,
        ];
        for (i, cat) in clicks.into_iter().enumerate() {
            state.click(cat, i as u16);
            // The invariant is structural: `open` is a single Option
            assert!(state.open().is_none() || state.open().is_some());
        }
        assert!(!state.is_open());
    }

    #[test]
    fn hit_testing_respects_bounds() {
        let rect = Some((5, 2, 10, 3));
        assert!(hit(rect, 5, 2));
        assert!(hit(rect, 14, 4));
        assert!(!hit(rect, 15, 2));
        assert!(!hit(rect, 5, 5));
        assert!(!hit(rect, 4, 2));
        assert!(!hit(None, 0, 0));
    }
}
