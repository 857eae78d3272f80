//! Shared Dioxus widgets and browser bridge for the FII ranking page.
//!
//! This crate provides:
//! - `js_bridge`: data fetch, alerts and viewport checks via `web-sys`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: reusable RSX widgets (option button, multi-select,
//!   range slider, toggle, status boxes)

pub mod components;
pub mod js_bridge;
pub mod state;
