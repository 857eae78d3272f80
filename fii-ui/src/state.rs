//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use fii_core::TableState;

/// Dropdown panels of the options bar. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Sort,
    View,
    Filter,
}

/// Shared state of the ranking page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Records, columns, filters and pagination
    pub table: Signal<TableState>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if the dataset could not be loaded
    pub error_msg: Signal<Option<String>>,
    /// Small viewport detected on mount
    pub is_mobile: Signal<bool>,
    /// Currently open dropdown panel
    pub open_menu: Signal<Option<Menu>>,
    /// When the dataset finished loading
    pub updated_at: Signal<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(TableState::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            is_mobile: Signal::new(false),
            open_menu: Signal::new(None),
            updated_at: Signal::new(None),
        }
    }

    /// Open `menu`, or close it if it is already open.
    pub fn toggle_menu(&mut self, menu: Menu) {
        let next = if (self.open_menu)() == Some(menu) {
            None
        } else {
            Some(menu)
        };
        self.open_menu.set(next);
    }

    pub fn close_menus(&mut self) {
        self.open_menu.set(None);
    }

    pub fn is_open(&self, menu: Menu) -> bool {
        (self.open_menu)() == Some(menu)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
