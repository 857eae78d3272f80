//! Core types and table engine for the FII ranking.
//!
//! This crate has no web dependencies so it can be shared between the
//! Dioxus page and the native CLI:
//! - `record`: `FundRecord`, field keys and the `Dataset` wrapper
//! - `column`: column descriptors and derived multi-select options
//! - `filter`: per-column filter values and the record predicate
//! - `sort`: single-key sort over the loaded record set
//! - `pagination`: page count and visible slice bookkeeping
//! - `format`: pt-BR number and timestamp formatting
//! - `table`: `TableState`, the container that ties everything together

pub mod column;
pub mod filter;
pub mod format;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod table;

pub use column::{Column, FilterKind, RangeConfig, SelectOption, SortState};
pub use filter::{FilterValue, Filters};
pub use format::NumberFormat;
pub use pagination::Pagination;
pub use record::{Dataset, FieldKey, FieldValue, FundRecord};
pub use table::TableState;

/// Sample dataset shared by the unit tests of this crate.
#[cfg(test)]
pub(crate) const FIXTURE_JSON: &str = include_str!("../../fixtures/fii.json");
