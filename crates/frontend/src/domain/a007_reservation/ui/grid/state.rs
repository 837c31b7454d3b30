use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::date_utils;

#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    /// Selected store, or `None` for all stores (per-store fan-out).
    pub store: Option<(String, String)>,
    /// First date of the 7-day window.
    pub anchor: NaiveDate,
}

impl GridState {
    pub fn new() -> Self {
        Self {
            store: None,
            anchor: date_utils::today(),
        }
    }

    pub fn shift_week(&mut self, weeks: i64) {
        self.anchor = date_utils::shift_anchor(self.anchor, weeks);
    }

    pub fn reset_to_today(&mut self) {
        self.anchor = date_utils::today();
    }
}

pub fn create_state() -> RwSignal<GridState> {
    RwSignal::new(GridState::new())
}
