//! Per-column filter values and the record predicate.

use crate::column::{Column, FilterKind};
use crate::record::{FieldKey, FieldValue, FundRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Current value of one column's filter. The shape follows the column's
/// [`FilterKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Allowed stringified values; empty accepts everything.
    Selected(BTreeSet<String>),
    /// Inclusive `[low, high]` bounds.
    Range(f64, f64),
    /// `false` accepts everything, `true` keeps only records whose flag is set.
    Toggle(bool),
}

impl FilterValue {
    /// The accept-all value for a column kind. Range filters are unbounded
    /// on both sides; the slider domain only bounds what the handles can show.
    pub fn default_for(kind: &FilterKind) -> Self {
        match kind {
            FilterKind::MultiSelect { .. } => FilterValue::Selected(BTreeSet::new()),
            FilterKind::Range(_) => FilterValue::Range(f64::NEG_INFINITY, f64::INFINITY),
            FilterKind::Toggle { .. } => FilterValue::Toggle(false),
        }
    }

    /// Range bounds given in either order.
    pub fn range(a: f64, b: f64) -> Self {
        FilterValue::Range(a.min(b), a.max(b))
    }

    /// Range from slider handles. A handle resting on its domain edge leaves
    /// that side open, so both handles at the edges accept everything.
    pub fn from_slider(a: f64, b: f64, domain: (f64, f64)) -> Self {
        let (low, high) = (a.min(b), a.max(b));
        let low = if low <= domain.0 { f64::NEG_INFINITY } else { low };
        let high = if high >= domain.1 { f64::INFINITY } else { high };
        FilterValue::Range(low, high)
    }

    /// Handle positions for a range filter, clamped into the slider domain.
    pub fn slider_position(&self, domain: (f64, f64)) -> (f64, f64) {
        match self {
            FilterValue::Range(low, high) => (
                low.clamp(domain.0, domain.1),
                high.clamp(domain.0, domain.1),
            ),
            _ => domain,
        }
    }

    pub fn selected<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Selected(values.into_iter().map(Into::into).collect())
    }

    /// Whether a single field value passes this filter.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match self {
            FilterValue::Selected(set) => set.is_empty() || set.contains(&value.stringify()),
            FilterValue::Range(low, high) => {
                let v = value.as_f64();
                *low <= v && v <= *high
            }
            FilterValue::Toggle(false) => true,
            FilterValue::Toggle(true) => value.as_bool() == Some(true),
        }
    }

    fn fits(&self, kind: &FilterKind) -> bool {
        matches!(
            (self, kind),
            (FilterValue::Selected(_), FilterKind::MultiSelect { .. })
                | (FilterValue::Range(..), FilterKind::Range(_))
                | (FilterValue::Toggle(_), FilterKind::Toggle { .. })
        )
    }
}

/// Filter values keyed by field. Built with an entry for every column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filters {
    values: BTreeMap<FieldKey, FilterValue>,
}

impl Filters {
    /// Accept-all filters for every column in `columns`.
    pub fn defaults_for(columns: &[Column]) -> Self {
        Self {
            values: columns
                .iter()
                .map(|c| (c.key, FilterValue::default_for(&c.filter)))
                .collect(),
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&FilterValue> {
        self.values.get(&key)
    }

    pub fn set(&mut self, key: FieldKey, value: FilterValue) {
        self.values.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the filter for `column` differs from its accept-all default.
    pub fn is_active(&self, column: &Column) -> bool {
        self.get(column.key)
            .is_some_and(|v| *v != FilterValue::default_for(&column.filter))
    }

    /// A record passes when it passes the filter of every column, visible or not.
    pub fn matches(&self, record: &FundRecord, columns: &[Column]) -> bool {
        columns.iter().all(|column| match self.get(column.key) {
            Some(filter) if filter.fits(&column.filter) => {
                filter.accepts(&record.field(column.key))
            }
            Some(filter) => {
                log::warn!(
                    "Ignoring {:?} filter on {} ({:?} column)",
                    filter,
                    column.key,
                    column.filter
                );
                true
            }
            None => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::default_columns;
    use crate::record::Dataset;
    use crate::FIXTURE_JSON;

    fn fixture() -> (Vec<FundRecord>, Vec<Column>) {
        (Dataset::from_json(FIXTURE_JSON).unwrap().results, default_columns())
    }

    fn passing<'a>(records: &'a [FundRecord], columns: &[Column], filters: &Filters) -> Vec<&'a str> {
        records
            .iter()
            .filter(|r| filters.matches(r, columns))
            .map(|r| r.ticker.as_str())
            .collect()
    }

    #[test]
    fn defaults_accept_every_record() {
        let (records, columns) = fixture();
        let filters = Filters::defaults_for(&columns);
        assert_eq!(filters.len(), columns.len());
        assert_eq!(passing(&records, &columns, &filters).len(), records.len());
        assert!(columns.iter().all(|c| !filters.is_active(c)));
    }

    #[test]
    fn range_filter_is_inclusive() {
        let (records, columns) = fixture();
        let mut filters = Filters::defaults_for(&columns);
        filters.set(FieldKey::PrecoAtual, FilterValue::range(104.9, 139.8));
        assert_eq!(
            passing(&records, &columns, &filters),
            vec!["XPML11", "HGRE11", "VISC11", "RBVA11"]
        );
    }

    #[test]
    fn range_bounds_are_ordered() {
        assert_eq!(FilterValue::range(5.0, 1.0), FilterValue::Range(1.0, 5.0));
    }

    #[test]
    fn multi_select_checks_membership() {
        let (records, columns) = fixture();
        let mut filters = Filters::defaults_for(&columns);
        filters.set(FieldKey::Setor, FilterValue::selected(["Shoppings", "Varejo"]));
        assert_eq!(
            passing(&records, &columns, &filters),
            vec!["XPML11", "VISC11", "RBVA11"]
        );
        assert!(filters.is_active(&columns[2]));
    }

    #[test]
    fn toggle_keeps_only_favorites_when_on() {
        let (records, columns) = fixture();
        let mut filters = Filters::defaults_for(&columns);
        filters.set(FieldKey::Favoritar, FilterValue::Toggle(true));
        assert_eq!(
            passing(&records, &columns, &filters),
            vec!["HGLG11", "KNRI11", "VISC11"]
        );
        filters.set(FieldKey::Favoritar, FilterValue::Toggle(false));
        assert_eq!(passing(&records, &columns, &filters).len(), records.len());
    }

    #[test]
    fn filters_combine_with_and() {
        let (records, columns) = fixture();
        let mut filters = Filters::defaults_for(&columns);
        filters.set(FieldKey::Setor, FilterValue::selected(["Shoppings"]));
        filters.set(FieldKey::VariacaoDia, FilterValue::range(0.0, 20.0));
        assert_eq!(passing(&records, &columns, &filters), vec!["VISC11"]);
    }

    #[test]
    fn hidden_columns_still_filter() {
        let (records, mut columns) = fixture();
        columns[2].visible = false;
        let mut filters = Filters::defaults_for(&columns);
        filters.set(FieldKey::Setor, FilterValue::selected(["Varejo"]));
        assert_eq!(passing(&records, &columns, &filters), vec!["RBVA11"]);
    }

    #[test]
    fn mismatched_filter_shape_accepts_all() {
        let (records, columns) = fixture();
        let mut filters = Filters::defaults_for(&columns);
        filters.set(FieldKey::Ticker, FilterValue::Range(0.0, 1.0));
        assert_eq!(passing(&records, &columns, &filters).len(), records.len());
    }

    #[test]
    fn default_range_accepts_values_beyond_the_slider_domain() {
        let (mut records, columns) = fixture();
        records[0].preco_atual = 250.0;
        records[1].patrimonio = 2_500_000_000.0;
        records[2].variacao_cota_desde_ipo = -12.0;
        let filters = Filters::defaults_for(&columns);
        assert_eq!(passing(&records, &columns, &filters).len(), records.len());
    }

    #[test]
    fn slider_edges_leave_the_range_open() {
        let domain = (0.0, 1_000_000_000.0);
        assert_eq!(
            FilterValue::from_slider(0.0, 1_000_000_000.0, domain),
            FilterValue::Range(f64::NEG_INFINITY, f64::INFINITY)
        );
        assert_eq!(
            FilterValue::from_slider(500.0, 1_000_000_000.0, domain),
            FilterValue::Range(500.0, f64::INFINITY)
        );
        assert_eq!(
            FilterValue::from_slider(700.0, 0.0, domain),
            FilterValue::Range(f64::NEG_INFINITY, 700.0)
        );
        assert_eq!(
            FilterValue::from_slider(10.0, 20.0, domain),
            FilterValue::Range(10.0, 20.0)
        );
    }

    #[test]
    fn slider_position_clamps_open_bounds() {
        let domain = (-20.0, 20.0);
        let open = FilterValue::Range(f64::NEG_INFINITY, 5.0);
        assert_eq!(open.slider_position(domain), (-20.0, 5.0));
        assert_eq!(FilterValue::Toggle(true).slider_position(domain), domain);
    }
}
