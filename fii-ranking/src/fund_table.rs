//! The ranking table itself: current page of the filtered, sorted funds.

use dioxus::prelude::*;
use fii_core::{Column, FilterKind, FundRecord, SortState};
use fii_ui::state::AppState;

/// Scrollable wrapper of the table; reset to the top on page changes.
pub const TABLE_CONTAINER_ID: &str = "tableContainer";

/// Arrow shown next to the active sort column's header.
fn sort_indicator(sort: SortState) -> &'static str {
    match (sort.by_this, sort.ascending) {
        (false, _) => "",
        (true, true) => "↓",
        (true, false) => "↑",
    }
}

#[component]
pub fn FundTable() -> Element {
    let mut state = use_context::<AppState>();
    let (columns, rows) = {
        let table = state.table.read();
        let columns: Vec<Column> = table.visible_columns().cloned().collect();
        let rows: Vec<FundRecord> = table.visible_rows().into_iter().cloned().collect();
        (columns, rows)
    };
    let colspan = columns.len().max(1);

    rsx! {
        div {
            id: TABLE_CONTAINER_ID,
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            {
                                let key = column.key;
                                let arrow = sort_indicator(column.sort);
                                rsx! {
                                    th {
                                        key: "{column.id}",
                                        class: if column.sort.by_this { "active" } else { "" },
                                        onclick: move |_| {
                                            state.table.write().toggle_sort(key);
                                        },
                                        "{column.name} {arrow}"
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for record in rows.iter() {
                        tr {
                            key: "{record.id}",
                            for column in columns.iter() {
                                td {
                                    key: "{column.id}",
                                    class: if column.sort.by_this { "active" } else { "" },
                                    FundCell { column: column.clone(), record: record.clone() }
                                }
                            }
                        }
                    }
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{colspan}",
                                "Nenhum resultado para exibir :("
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FundCell(column: Column, record: FundRecord) -> Element {
    match column.filter {
        FilterKind::Toggle { .. } => {
            let favorite = record.field(column.key).as_bool().unwrap_or(false);
            if favorite {
                rsx! { span { class: "star active", "★" } }
            } else {
                rsx! { span { class: "star", title: "Favoritar...", "☆" } }
            }
        }
        _ => {
            let text = column.display_value(&record);
            rsx! { "{text}" }
        }
    }
}
