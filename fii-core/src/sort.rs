//! Single-key sorting of the record set.

use crate::column::{Column, SortState};
use crate::record::{FieldKey, FundRecord};

/// Make `key` the active sort column.
///
/// Activating the column that is already active flips its direction;
/// any other column becomes active in ascending order and every other
/// column is deactivated. Returns the new sort state of `key`, or `None`
/// if no column has that key.
pub fn toggle_sort(columns: &mut [Column], key: FieldKey) -> Option<SortState> {
    let target = columns.iter().find(|c| c.key == key)?.sort;
    let ascending = if target.by_this {
        !target.ascending
    } else {
        true
    };

    for column in columns.iter_mut() {
        if column.key == key {
            column.sort = SortState {
                by_this: true,
                ascending,
            };
        } else {
            column.sort.by_this = false;
        }
    }
    Some(SortState {
        by_this: true,
        ascending,
    })
}

/// The active sort column, if any.
pub fn active_sort(columns: &[Column]) -> Option<&Column> {
    columns.iter().find(|c| c.sort.by_this)
}

/// Sort records in place by one field.
pub fn sort_records(records: &mut [FundRecord], key: FieldKey, ascending: bool) {
    records.sort_by(|a, b| {
        let ord = a.field(key).compare(&b.field(key));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Apply whatever sort the column list currently describes.
pub fn apply_active_sort(records: &mut [FundRecord], columns: &[Column]) {
    if let Some(column) = active_sort(columns) {
        sort_records(records, column.key, column.sort.ascending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::default_columns;
    use crate::record::Dataset;
    use crate::FIXTURE_JSON;

    fn tickers(records: &[FundRecord]) -> Vec<&str> {
        records.iter().map(|r| r.ticker.as_str()).collect()
    }

    #[test]
    fn toggling_active_column_flips_direction() {
        let mut columns = default_columns();
        let state = toggle_sort(&mut columns, FieldKey::Ticker).unwrap();
        assert!(state.by_this);
        assert!(!state.ascending);
        let state = toggle_sort(&mut columns, FieldKey::Ticker).unwrap();
        assert!(state.ascending);
    }

    #[test]
    fn toggling_new_column_starts_ascending_and_deactivates_others() {
        let mut columns = default_columns();
        toggle_sort(&mut columns, FieldKey::Ticker);
        let state = toggle_sort(&mut columns, FieldKey::PVp).unwrap();
        assert!(state.ascending);
        let active: Vec<_> = columns.iter().filter(|c| c.sort.by_this).map(|c| c.key).collect();
        assert_eq!(active, vec![FieldKey::PVp]);
        assert_eq!(active_sort(&columns).unwrap().key, FieldKey::PVp);
    }

    #[test]
    fn unknown_column_is_a_no_op() {
        let mut columns = default_columns();
        columns.retain(|c| c.key != FieldKey::Setor);
        let before = columns.clone();
        assert!(toggle_sort(&mut columns, FieldKey::Setor).is_none());
        assert_eq!(columns, before);
    }

    #[test]
    fn sorts_numbers_numerically() {
        let mut records = Dataset::from_json(FIXTURE_JSON).unwrap().results;
        sort_records(&mut records, FieldKey::PrecoAtual, true);
        assert_eq!(
            tickers(&records),
            vec!["BRCR11", "KNCR11", "XPML11", "VISC11", "RBVA11", "HGRE11", "KNRI11", "HGLG11"]
        );
    }

    #[test]
    fn descending_reverses_ascending() {
        let mut asc = Dataset::from_json(FIXTURE_JSON).unwrap().results;
        let mut desc = asc.clone();
        sort_records(&mut asc, FieldKey::Ticker, true);
        sort_records(&mut desc, FieldKey::Ticker, false);
        let mut reversed = tickers(&asc);
        reversed.reverse();
        assert_eq!(tickers(&desc), reversed);
        assert_eq!(asc[0].ticker, "BRCR11");
    }
}
