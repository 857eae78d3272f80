//! Terminal rendering of a ranking page, plus the dataset summary.

use anyhow::Context;
use fii_core::column::derive_options;
use fii_core::{Dataset, FieldKey, FilterKind, FilterValue, TableState};
use log::info;

/// Columns always printed by `rank`; the sort column is appended when missing.
const PRINTED_COLUMNS: [FieldKey; 5] = [
    FieldKey::Ticker,
    FieldKey::Setor,
    FieldKey::PrecoAtual,
    FieldKey::UltimoDy,
    FieldKey::PVp,
];

pub struct RankOptions {
    pub sort: FieldKey,
    pub descending: bool,
    pub page: usize,
    pub per_page: usize,
    pub sectors: Vec<String>,
    pub favorites: bool,
    pub ranges: Vec<String>,
}

fn load(input: &str) -> anyhow::Result<Dataset> {
    let body =
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?;
    Dataset::from_json(&body)
}

pub fn run_check(input: &str) -> anyhow::Result<()> {
    let dataset = load(input)?;
    println!("{}", summarize(&dataset));
    Ok(())
}

/// Record count, favorites and the distinct sectors of a dataset.
pub fn summarize(dataset: &Dataset) -> String {
    let sectors = derive_options(&dataset.results, FieldKey::Setor);
    let favorites = dataset.results.iter().filter(|r| r.favoritar).count();
    let mut out = format!(
        "{} funds, {} favorites, {} sectors",
        dataset.results.len(),
        favorites,
        sectors.len()
    );
    for sector in sectors {
        out.push_str("\n  ");
        out.push_str(&sector.value);
    }
    out
}

/// Parse `FIELD=LOW:HIGH` into a range filter on a range-typed column.
pub fn parse_range(spec: &str, table: &TableState) -> anyhow::Result<(FieldKey, FilterValue)> {
    let (field, bounds) = spec
        .split_once('=')
        .with_context(|| format!("expected FIELD=LOW:HIGH, got '{}'", spec))?;
    let key: FieldKey = field.trim().parse().map_err(anyhow::Error::msg)?;
    match table.column(key).map(|c| &c.filter) {
        Some(FilterKind::Range(_)) => {}
        _ => anyhow::bail!("{} is not a numeric column", key),
    }
    let (low, high) = bounds
        .split_once(':')
        .with_context(|| format!("expected LOW:HIGH, got '{}'", bounds))?;
    let low: f64 = low.trim().parse().with_context(|| format!("bad lower bound '{}'", low))?;
    let high: f64 = high.trim().parse().with_context(|| format!("bad upper bound '{}'", high))?;
    Ok((key, FilterValue::range(low, high)))
}

/// Build the table state `rank` prints: filters, sort and page applied.
pub fn build_table(dataset: Dataset, options: &RankOptions) -> anyhow::Result<TableState> {
    let mut table = TableState::default();
    table.load(dataset.results);

    if !options.sectors.is_empty() {
        table.set_filter(FieldKey::Setor, FilterValue::selected(options.sectors.iter().cloned()));
    }
    if options.favorites {
        table.set_filter(FieldKey::Favoritar, FilterValue::Toggle(true));
    }
    for spec in &options.ranges {
        let (key, value) = parse_range(spec, &table)?;
        table.set_filter(key, value);
    }

    // At most two toggles: activate, then flip if the direction is wrong.
    for _ in 0..2 {
        let done = table
            .active_sort()
            .is_some_and(|c| c.key == options.sort && c.sort.ascending != options.descending);
        if done {
            break;
        }
        table.toggle_sort(options.sort);
    }

    table.set_items_per_page(options.per_page);
    for _ in 1..options.page {
        if !table.next_page() {
            break;
        }
    }
    Ok(table)
}

/// Plain-text table of the current page.
pub fn render_page(table: &TableState) -> String {
    let mut keys: Vec<FieldKey> = PRINTED_COLUMNS.to_vec();
    if let Some(sorted) = table.active_sort() {
        if !keys.contains(&sorted.key) {
            keys.push(sorted.key);
        }
    }
    let columns: Vec<_> = keys.iter().filter_map(|k| table.column(*k)).collect();

    let header: Vec<String> = columns.iter().map(|c| c.name.to_string()).collect();
    let rows: Vec<Vec<String>> = table
        .visible_rows()
        .into_iter()
        .map(|record| {
            columns
                .iter()
                .map(|c| match c.filter {
                    FilterKind::Toggle { .. } => {
                        let star = if record.favoritar { "★" } else { "" };
                        star.to_string()
                    }
                    _ => c.display_value(record),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(&header);
    out.push('\n');
    if rows.is_empty() {
        out.push_str("Nenhum resultado para exibir :(\n");
    }
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    let pages = table.pagination();
    out.push_str(&format!(
        "Página {} de {} ({} resultados)",
        pages.current_page(),
        pages.page_count(),
        table.filtered_count()
    ));
    out
}

pub fn run_rank(input: &str, options: &RankOptions) -> anyhow::Result<()> {
    let table = build_table(load(input)?, options)?;
    info!(
        "{} of {} funds match, sorted by {}",
        table.filtered_count(),
        table.record_count(),
        options.sort
    );
    println!("{}", render_page(&table));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = include_str!("../../fixtures/fii.json");

    fn options() -> RankOptions {
        RankOptions {
            sort: FieldKey::Ticker,
            descending: false,
            page: 1,
            per_page: 20,
            sectors: Vec::new(),
            favorites: false,
            ranges: Vec::new(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_json(FIXTURE_JSON).unwrap()
    }

    fn tickers(table: &TableState) -> Vec<String> {
        table.visible_rows().iter().map(|r| r.ticker.clone()).collect()
    }

    #[test]
    fn parse_range_accepts_numeric_columns() {
        let table = TableState::default();
        let (key, value) = parse_range("p_vp=1.1:0.8", &table).unwrap();
        assert_eq!(key, FieldKey::PVp);
        assert_eq!(value, FilterValue::Range(0.8, 1.1));
    }

    #[test]
    fn parse_range_rejects_bad_specs() {
        let table = TableState::default();
        assert!(parse_range("p_vp", &table).is_err());
        assert!(parse_range("p_vp=1", &table).is_err());
        assert!(parse_range("p_vp=a:b", &table).is_err());
        assert!(parse_range("setor=0:1", &table).is_err());
        assert!(parse_range("nope=0:1", &table).is_err());
    }

    #[test]
    fn descending_sort_on_default_column() {
        let table = build_table(dataset(), &RankOptions { descending: true, ..options() }).unwrap();
        assert_eq!(tickers(&table)[0], "XPML11");
        assert!(!table.active_sort().unwrap().sort.ascending);
    }

    #[test]
    fn sort_by_other_column_ascending() {
        let opts = RankOptions {
            sort: FieldKey::PVp,
            ..options()
        };
        let table = build_table(dataset(), &opts).unwrap();
        assert_eq!(tickers(&table)[0], "BRCR11");
        assert!(table.active_sort().unwrap().sort.ascending);
    }

    #[test]
    fn filters_and_paging_apply() {
        let opts = RankOptions {
            sectors: vec!["Shoppings".into(), "Lajes Corporativas".into()],
            per_page: 3,
            page: 2,
            ..options()
        };
        let table = build_table(dataset(), &opts).unwrap();
        assert_eq!(table.filtered_count(), 4);
        assert_eq!(table.pagination().current_page(), 2);
        assert_eq!(tickers(&table), vec!["XPML11"]);
    }

    #[test]
    fn page_past_the_end_stops_on_last_page() {
        let opts = RankOptions { page: 9, per_page: 5, ..options() };
        let table = build_table(dataset(), &opts).unwrap();
        assert_eq!(table.pagination().current_page(), 2);
    }

    #[test]
    fn render_page_lists_rows_and_footer() {
        let opts = RankOptions { favorites: true, ..options() };
        let table = build_table(dataset(), &opts).unwrap();
        let text = render_page(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Ticker"));
        assert!(lines[1].starts_with("HGLG11"));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "Página 1 de 1 (3 resultados)");
    }

    #[test]
    fn render_page_shows_placeholder_when_empty() {
        let opts = RankOptions {
            ranges: vec!["preco_atual=500:600".into()],
            ..options()
        };
        let table = build_table(dataset(), &opts).unwrap();
        let text = render_page(&table);
        assert!(text.contains("Nenhum resultado para exibir :("));
        assert!(text.ends_with("Página 1 de 0 (0 resultados)"));
    }

    #[test]
    fn summary_counts_sectors_and_favorites() {
        let text = summarize(&dataset());
        assert!(text.starts_with("8 funds, 3 favorites, 6 sectors"));
        assert!(text.contains("\n  Varejo"));
    }
}
