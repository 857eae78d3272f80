//! Column descriptors for the ranking table.
//!
//! The column list is fixed at startup by [`default_columns`]; only the
//! visibility flag, the sort state and the derived multi-select options
//! change at runtime.

use crate::format::NumberFormat;
use crate::record::{FieldKey, FundRecord};
use serde::Serialize;
use std::collections::HashSet;

/// Columns that stay visible (and filterable) on small screens.
pub const MOBILE_COLUMNS: [FieldKey; 3] = [FieldKey::Ticker, FieldKey::VariacaoDia, FieldKey::Favoritar];

/// Whether this column is the active sort key, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub by_this: bool,
    pub ascending: bool,
}

impl SortState {
    pub const INACTIVE: SortState = SortState {
        by_this: false,
        ascending: true,
    };
}

/// One selectable entry of a multi-select filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Stable identifier derived from `value`.
    pub key: u64,
    pub value: String,
}

impl SelectOption {
    pub fn new(value: String) -> Self {
        Self {
            key: option_key(&value),
            value,
        }
    }
}

/// Slider configuration of a range-filtered column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeConfig {
    pub domain: (f64, f64),
    pub step: f64,
    pub format: NumberFormat,
}

/// The filter widget a column uses, with its widget-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FilterKind {
    MultiSelect { options: Vec<SelectOption> },
    Range(RangeConfig),
    Toggle { label: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub id: u32,
    pub key: FieldKey,
    pub name: &'static str,
    pub visible: bool,
    pub sort: SortState,
    pub filter: FilterKind,
}

impl Column {
    fn multi_select(id: u32, key: FieldKey, name: &'static str) -> Self {
        Self {
            id,
            key,
            name,
            visible: true,
            sort: SortState::INACTIVE,
            filter: FilterKind::MultiSelect {
                options: Vec::new(),
            },
        }
    }

    fn range(
        id: u32,
        key: FieldKey,
        name: &'static str,
        domain: (f64, f64),
        step: f64,
        format: NumberFormat,
    ) -> Self {
        Self {
            id,
            key,
            name,
            visible: true,
            sort: SortState::INACTIVE,
            filter: FilterKind::Range(RangeConfig {
                domain,
                step,
                format,
            }),
        }
    }

    /// Text shown in a table cell for this column's value of `record`.
    pub fn display_value(&self, record: &FundRecord) -> String {
        let value = record.field(self.key);
        match &self.filter {
            FilterKind::Range(config) => config.format.format(value.as_f64()),
            FilterKind::Toggle { .. } => String::new(),
            FilterKind::MultiSelect { .. } => value.stringify(),
        }
    }

    pub fn is_mobile_column(&self) -> bool {
        MOBILE_COLUMNS.contains(&self.key)
    }
}

/// The fixed column list of the ranking page. Sorted by ticker, ascending.
pub fn default_columns() -> Vec<Column> {
    use NumberFormat::*;

    let mut ticker = Column::multi_select(1, FieldKey::Ticker, "Ticker");
    ticker.sort = SortState {
        by_this: true,
        ascending: true,
    };

    vec![
        ticker,
        Column::multi_select(2, FieldKey::NomeFundo, "Nome do Fundo"),
        Column::multi_select(3, FieldKey::Setor, "Setor"),
        Column::range(4, FieldKey::PrecoAtual, "Preço Atual", (0.0, 200.0), 1.0, Currency),
        Column::range(5, FieldKey::VariacaoDia, "Variação no Dia", (-20.0, 20.0), 1.0, Percent),
        Column::range(6, FieldKey::UltimoDividendo, "Último Dividendo", (0.0, 20.0), 1.0, Currency),
        Column::range(7, FieldKey::UltimoDy, "Último DY", (-20.0, 20.0), 1.0, Percent),
        Column::range(
            8,
            FieldKey::VariacaoCotaDesdeIpo,
            "Variação Cota desde IPO",
            (0.0, 100.0),
            1.0,
            Currency,
        ),
        Column::range(
            9,
            FieldKey::VariacaoCotaDividendosDesdeIpo,
            "Variação da Cota + Dividendos desde IPO",
            (0.0, 100.0),
            1.0,
            Currency,
        ),
        Column::range(10, FieldKey::PVp, "P/VP", (0.0, 2.0), 0.1, Decimal),
        Column::range(11, FieldKey::PercentualEmCaixa, "% em Caixa", (0.0, 100.0), 1.0, Percent),
        Column::range(
            12,
            FieldKey::NumeroCotistas,
            "Número de Cotistas",
            (0.0, 100_000.0),
            1000.0,
            Integer,
        ),
        Column::range(
            13,
            FieldKey::Patrimonio,
            "Patrimônio",
            (0.0, 1_000_000_000.0),
            1000.0,
            Currency,
        ),
        Column::range(
            14,
            FieldKey::LiquidezDiaria,
            "Liquidez Diária",
            (0.0, 15_000_000.0),
            1000.0,
            Currency,
        ),
        Column {
            id: 15,
            key: FieldKey::Favoritar,
            name: "Favoritar",
            visible: true,
            sort: SortState::INACTIVE,
            filter: FilterKind::Toggle {
                label: "Apenas favoritos",
            },
        },
    ]
}

/// 64-bit FNV-1a hash of an option value.
pub fn option_key(value: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    value.bytes().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}

/// Distinct stringified values of `key` across all records, in first-seen order.
pub fn derive_options(records: &[FundRecord], key: FieldKey) -> Vec<SelectOption> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.field(key).stringify())
        .filter(|value| seen.insert(value.clone()))
        .map(SelectOption::new)
        .collect()
}

/// Recompute the options of every multi-select column from `records`.
pub fn refresh_options(columns: &mut [Column], records: &[FundRecord]) {
    for column in columns.iter_mut() {
        if let FilterKind::MultiSelect { options } = &mut column.filter {
            *options = derive_options(records, column.key);
            log::debug!("{} has {} filter options", column.key, options.len());
        }
    }
}
