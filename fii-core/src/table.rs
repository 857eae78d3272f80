//! `TableState`: the single container for records, columns, filters and pages.
//!
//! Every mutating operation finishes with an explicit recomputation in the
//! order filters -> filtered set -> page count/current page -> visible slice.
//! Loading data, changing a filter or changing the page size return to page 1;
//! sorting and visibility changes keep the current page.

use crate::column::{self, default_columns, Column, SortState};
use crate::filter::{FilterValue, Filters};
use crate::pagination::Pagination;
use crate::record::{FieldKey, FundRecord};
use crate::sort;

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    /// All loaded records, kept in the active sort order.
    records: Vec<FundRecord>,
    columns: Vec<Column>,
    filters: Filters,
    pagination: Pagination,
    /// Indices into `records` that pass every filter, in sort order.
    filtered: Vec<usize>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(default_columns())
    }
}

impl TableState {
    pub fn new(columns: Vec<Column>) -> Self {
        let filters = Filters::defaults_for(&columns);
        Self {
            records: Vec::new(),
            columns,
            filters,
            pagination: Pagination::default(),
            filtered: Vec::new(),
        }
    }

    /// Replace the record set wholesale.
    pub fn load(&mut self, mut records: Vec<FundRecord>) {
        column::refresh_options(&mut self.columns, &records);
        sort::apply_active_sort(&mut records, &self.columns);
        self.records = records;
        log::info!("Loaded {} funds into the table", self.records.len());
        self.refilter();
    }

    pub fn set_filter(&mut self, key: FieldKey, value: FilterValue) {
        self.filters.set(key, value);
        self.refilter();
    }

    /// Back to the accept-all filter of every column.
    pub fn clear_filters(&mut self) {
        self.filters = Filters::defaults_for(&self.columns);
        self.refilter();
    }

    /// See [`sort::toggle_sort`]. The current page is kept.
    pub fn toggle_sort(&mut self, key: FieldKey) -> Option<SortState> {
        let state = sort::toggle_sort(&mut self.columns, key)?;
        sort::sort_records(&mut self.records, key, state.ascending);
        self.recompute_filtered();
        Some(state)
    }

    pub fn toggle_visibility(&mut self, key: FieldKey) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.key == key) {
            column.visible = !column.visible;
        }
    }

    /// Hide every column outside [`column::MOBILE_COLUMNS`].
    pub fn apply_mobile_layout(&mut self) {
        for column in self.columns.iter_mut() {
            if !column.is_mobile_column() {
                column.visible = false;
            }
        }
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.pagination.set_items_per_page(items_per_page);
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev_page()
    }

    fn refilter(&mut self) {
        self.recompute_filtered();
        self.pagination.reset(self.filtered.len());
    }

    fn recompute_filtered(&mut self) {
        let filters = &self.filters;
        let columns = &self.columns;
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| filters.matches(record, columns))
            .map(|(i, _)| i)
            .collect();
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, key: FieldKey) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.visible)
    }

    pub fn visible_column_count(&self) -> usize {
        self.visible_columns().count()
    }

    pub fn all_columns_visible(&self) -> bool {
        self.columns.iter().all(|c| c.visible)
    }

    pub fn active_sort(&self) -> Option<&Column> {
        sort::active_sort(&self.columns)
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn filter(&self, key: FieldKey) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// All records passing the filters, in sort order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &FundRecord> {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    /// The records on the current page.
    pub fn visible_rows(&self) -> Vec<&FundRecord> {
        self.pagination
            .slice(&self.filtered)
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::FilterKind;
    use crate::record::Dataset;
    use crate::FIXTURE_JSON;

    fn loaded() -> TableState {
        let mut table = TableState::default();
        table.load(Dataset::from_json(FIXTURE_JSON).unwrap().results);
        table
    }

    fn numbered(count: u64) -> Vec<FundRecord> {
        (0..count)
            .map(|i| FundRecord {
                id: i,
                ticker: format!("FII{:03}11", i),
                setor: if i % 2 == 0 { "Logística" } else { "Shoppings" }.to_string(),
                preco_atual: 50.0 + i as f64,
                ..FundRecord::default()
            })
            .collect()
    }

    fn tickers(rows: &[&FundRecord]) -> Vec<String> {
        rows.iter().map(|r| r.ticker.clone()).collect()
    }

    #[test]
    fn load_sorts_by_ticker_and_derives_options() {
        let table = loaded();
        assert_eq!(table.record_count(), 8);
        assert_eq!(table.filtered_count(), 8);
        assert_eq!(table.visible_rows()[0].ticker, "BRCR11");
        match &table.column(FieldKey::Setor).unwrap().filter {
            FilterKind::MultiSelect { options } => {
                assert_eq!(options.len(), 6);
                // dataset order, not ticker order
                assert_eq!(options[0].value, "Logística");
                assert_eq!(options[1].value, "Shoppings");
            }
            other => panic!("unexpected filter kind {:?}", other),
        }
    }

    #[test]
    fn out_of_domain_records_survive_load_and_clear() {
        let mut records = Dataset::from_json(FIXTURE_JSON).unwrap().results;
        records[0].patrimonio = 2e9;
        records[1].numero_cotistas = 3e5;
        records[2].variacao_cota_desde_ipo = -12.0;
        records[3].liquidez_diaria = 4e7;

        let mut table = TableState::default();
        table.load(records);
        assert_eq!(table.filtered_count(), table.record_count());

        // HGLG11 and KNRI11 are above R$ 1 bi
        table.set_filter(FieldKey::Patrimonio, FilterValue::range(0.0, 1e9));
        assert_eq!(table.filtered_count(), table.record_count() - 2);

        table.clear_filters();
        assert_eq!(table.filtered_count(), table.record_count());
    }

    #[test]
    fn every_column_has_a_filter_entry() {
        let table = TableState::default();
        for column in table.columns() {
            assert!(table.filter(column.key).is_some());
        }
    }

    #[test]
    fn twenty_five_records_paginate_into_two_pages() {
        let mut table = TableState::default();
        let records = numbered(25);
        table.load(records.clone());
        assert_eq!(table.pagination().page_count(), 2);

        let first = table.visible_rows();
        assert_eq!(first.len(), 20);
        assert_eq!(first[0].ticker, records[0].ticker);
        assert_eq!(first[19].ticker, records[19].ticker);

        assert!(table.next_page());
        let second = table.visible_rows();
        assert_eq!(second.len(), 5);
        assert_eq!(second[4].ticker, records[24].ticker);
        assert!(!table.next_page());
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut table = TableState::default();
        table.load(numbered(45));
        table.next_page();
        table.next_page();
        assert_eq!(table.pagination().current_page(), 3);

        table.set_filter(FieldKey::Setor, FilterValue::selected(["Logística"]));
        assert_eq!(table.pagination().current_page(), 1);
        assert_eq!(table.filtered_count(), 23);
        assert_eq!(table.pagination().page_count(), 2);
    }

    #[test]
    fn items_per_page_change_resets_to_first_page() {
        let mut table = TableState::default();
        table.load(numbered(45));
        table.next_page();
        table.set_items_per_page(10);
        assert_eq!(table.pagination().current_page(), 1);
        assert_eq!(table.pagination().page_count(), 5);
    }

    #[test]
    fn no_matches_means_no_pages() {
        let mut table = loaded();
        table.set_filter(FieldKey::Ticker, FilterValue::selected(["NOPE11"]));
        assert_eq!(table.filtered_count(), 0);
        assert_eq!(table.pagination().page_count(), 0);
        assert!(table.visible_rows().is_empty());
    }

    #[test]
    fn clearing_filters_restores_full_set() {
        let mut table = loaded();
        table.set_filter(FieldKey::Favoritar, FilterValue::Toggle(true));
        table.set_filter(FieldKey::PVp, FilterValue::range(1.02, 2.0));
        assert_eq!(table.filtered_count(), 2);
        table.clear_filters();
        assert_eq!(table.filtered_count(), table.record_count());
    }

    #[test]
    fn sort_keeps_filtered_membership_and_page() {
        let mut table = TableState::default();
        table.load(numbered(45));
        table.set_filter(FieldKey::Setor, FilterValue::selected(["Shoppings"]));
        table.next_page();

        let state = table.toggle_sort(FieldKey::PrecoAtual).unwrap();
        assert!(state.ascending);
        assert_eq!(table.pagination().current_page(), 2);
        let asc: Vec<String> = table.filtered_records().map(|r| r.ticker.clone()).collect();

        let state = table.toggle_sort(FieldKey::PrecoAtual).unwrap();
        assert!(!state.ascending);
        let mut desc: Vec<String> = table.filtered_records().map(|r| r.ticker.clone()).collect();
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc.len(), 22);
    }

    #[test]
    fn visibility_toggle_and_mobile_layout() {
        let mut table = loaded();
        assert!(table.all_columns_visible());
        table.toggle_visibility(FieldKey::Setor);
        assert!(!table.all_columns_visible());
        assert_eq!(table.visible_column_count(), 14);
        table.toggle_visibility(FieldKey::Setor);
        assert!(table.all_columns_visible());

        table.apply_mobile_layout();
        let visible: Vec<FieldKey> = table.visible_columns().map(|c| c.key).collect();
        assert_eq!(
            visible,
            vec![FieldKey::Ticker, FieldKey::VariacaoDia, FieldKey::Favoritar]
        );
        assert_eq!(table.filtered_count(), 8);
    }

    #[test]
    fn reload_replaces_records() {
        let mut table = loaded();
        table.load(numbered(3));
        assert_eq!(table.record_count(), 3);
        assert_eq!(
            tickers(&table.visible_rows()),
            vec!["FII00011", "FII00111", "FII00211"]
        );
    }
}
