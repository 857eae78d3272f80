//! Options bar above the table: sort, column visibility, filters and paging.

use dioxus::prelude::*;
use fii_core::{Column, FieldKey, FilterKind, FilterValue};
use fii_ui::components::{CustomSelect, OptionButton, RangeSlider, Toggle};
use fii_ui::js_bridge;
use fii_ui::state::{AppState, Menu};

use crate::fund_table::TABLE_CONTAINER_ID;

/// Dropdown panels lay columns out in groups of this size.
const COLUMNS_PER_GROUP: usize = 5;

#[component]
pub fn OptionsBar() -> Element {
    let state = use_context::<AppState>();
    let is_mobile = (state.is_mobile)();

    rsx! {
        div {
            id: "options",
            div {
                if !is_mobile {
                    SortMenu {}
                    ViewMenu {}
                }
                FilterMenu {}
            }
            div {
                Pager {}
            }
        }
    }
}

/// Close button shared by the dropdown panels.
#[component]
fn CloseButton() -> Element {
    let mut state = use_context::<AppState>();
    rsx! {
        span {
            class: "close",
            onclick: move |_| state.close_menus(),
            "✕"
        }
    }
}

#[component]
fn SortMenu() -> Element {
    let mut state = use_context::<AppState>();
    let columns: Vec<Column> = state.table.read().columns().to_vec();
    let active_name = columns
        .iter()
        .find(|c| c.sort.by_this)
        .map(|c| c.name)
        .unwrap_or("-");

    rsx! {
        OptionButton {
            active: state.is_open(Menu::Sort),
            div {
                onclick: move |_| state.toggle_menu(Menu::Sort),
                "⇅ Ordenar por "
                strong { "{active_name}" }
            }
            div {
                class: "dropdown fadedOptions",
                CloseButton {}
                div {
                    class: "columns",
                    for (group_index, group) in columns.chunks(COLUMNS_PER_GROUP).enumerate() {
                        ul {
                            class: "column",
                            key: "{group_index}",
                            for column in group.iter() {
                                {
                                    let key = column.key;
                                    let sort = column.sort;
                                    rsx! {
                                        li {
                                            key: "{column.id}",
                                            class: if sort.by_this { "active" } else { "" },
                                            onclick: move |_| {
                                                state.table.write().toggle_sort(key);
                                            },
                                            span {
                                                "{column.name} "
                                                if sort.by_this {
                                                    if sort.ascending {
                                                        small { class: "active", "crescente" }
                                                    } else {
                                                        small { "decrescente" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                footer {
                    span { "Selecione uma das colunas acima para ordenar a tabela." }
                    span { "Clique novamente na coluna de ordenação para inverter a ordem." }
                }
            }
        }
    }
}

/// "Todos" when every column is shown, otherwise the visible count.
fn visible_badge(visible: usize, total: usize) -> String {
    if visible == total {
        "Todos".to_string()
    } else {
        visible.to_string()
    }
}

#[component]
fn ViewMenu() -> Element {
    let mut state = use_context::<AppState>();
    let (columns, visible, items_per_page, filtered) = {
        let table = state.table.read();
        (
            table.columns().to_vec(),
            table.visible_column_count(),
            table.pagination().items_per_page(),
            table.filtered_count(),
        )
    };
    let badge = visible_badge(visible, columns.len());
    let max_items = filtered.max(1);

    rsx! {
        OptionButton {
            active: state.is_open(Menu::View),
            div {
                onclick: move |_| state.toggle_menu(Menu::View),
                "☰ Exibir "
                span { class: "badge", "{badge}" }
            }
            div {
                class: "dropdown fadedOptions",
                CloseButton {}
                div {
                    class: "columns",
                    for (group_index, group) in columns.chunks(COLUMNS_PER_GROUP).enumerate() {
                        ul {
                            class: "column",
                            key: "{group_index}",
                            for column in group.iter() {
                                {
                                    let key = column.key;
                                    rsx! {
                                        li {
                                            key: "{column.id}",
                                            div {
                                                Toggle {
                                                    checked: column.visible,
                                                    label: column.name.to_string(),
                                                    on_change: move |_| state.table.write().toggle_visibility(key),
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                footer {
                    span {
                        "Exibindo "
                        input {
                            r#type: "number",
                            min: "1",
                            max: "{max_items}",
                            step: "1",
                            value: "{items_per_page}",
                            onchange: move |evt: Event<FormData>| {
                                if let Ok(count) = evt.value().parse::<usize>() {
                                    state.table.write().set_items_per_page(count);
                                }
                            },
                        }
                        " resultados por página"
                    }
                }
            }
        }
    }
}

#[component]
fn FilterMenu() -> Element {
    let mut state = use_context::<AppState>();
    let is_mobile = (state.is_mobile)();
    let (columns, filtered) = {
        let table = state.table.read();
        (table.columns().to_vec(), table.filtered_count())
    };

    rsx! {
        OptionButton {
            active: state.is_open(Menu::Filter),
            div {
                onclick: move |_| state.toggle_menu(Menu::Filter),
                "⧩ Filtros"
            }
            div {
                class: "dropdown",
                CloseButton {}
                div {
                    class: "columns",
                    for (group_index, group) in columns.chunks(COLUMNS_PER_GROUP).enumerate() {
                        ul {
                            class: "column",
                            key: "{group_index}",
                            for column in group.iter().filter(|c| !is_mobile || c.is_mobile_column()) {
                                li {
                                    key: "{column.id}",
                                    span { "{column.name}" }
                                    div {
                                        FilterWidget { column: column.clone() }
                                    }
                                }
                            }
                        }
                    }
                }
                footer {
                    span { "Exibindo {filtered} resultados compatíveis com seus critérios." }
                }
            }
        }
    }
}

/// The filter widget matching a column's kind, seeded with its current value.
#[component]
fn FilterWidget(column: Column) -> Element {
    let mut state = use_context::<AppState>();
    let key: FieldKey = column.key;
    let current = state.table.read().filter(key).cloned();

    match column.filter {
        FilterKind::MultiSelect { options } => {
            let selected: Vec<String> = match current {
                Some(FilterValue::Selected(set)) => set.into_iter().collect(),
                _ => Vec::new(),
            };
            rsx! {
                CustomSelect {
                    options,
                    selected,
                    on_change: move |values: Vec<String>| {
                        state.table.write().set_filter(key, FilterValue::selected(values));
                    },
                }
            }
        }
        FilterKind::Range(config) => {
            let domain = config.domain;
            let value = current
                .map(|v| v.slider_position(domain))
                .unwrap_or(domain);
            rsx! {
                RangeSlider {
                    domain: config.domain,
                    step: config.step,
                    value,
                    format: config.format,
                    on_change: move |(low, high): (f64, f64)| {
                        state
                            .table
                            .write()
                            .set_filter(key, FilterValue::from_slider(low, high, domain));
                    },
                }
            }
        }
        FilterKind::Toggle { label } => {
            let checked = matches!(current, Some(FilterValue::Toggle(true)));
            rsx! {
                Toggle {
                    checked,
                    label: label.to_string(),
                    on_change: move |on: bool| {
                        state.table.write().set_filter(key, FilterValue::Toggle(on));
                    },
                }
            }
        }
    }
}

#[component]
fn Pager() -> Element {
    let mut state = use_context::<AppState>();
    let (current, count) = {
        let table = state.table.read();
        (table.pagination().current_page(), table.pagination().page_count())
    };

    rsx! {
        OptionButton {
            hover_effect: true,
            div {
                span {
                    class: "pager-arrow",
                    title: "Página anterior",
                    onclick: move |_| {
                        if state.table.write().prev_page() {
                            js_bridge::scroll_to_top(TABLE_CONTAINER_ID);
                        }
                    },
                    "←"
                }
                " Página {current} de {count} "
                span {
                    class: "pager-arrow",
                    title: "Próxima página",
                    onclick: move |_| {
                        if state.table.write().next_page() {
                            js_bridge::scroll_to_top(TABLE_CONTAINER_ID);
                        }
                    },
                    "→"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_shows_todos_only_when_all_visible() {
        assert_eq!(visible_badge(15, 15), "Todos");
        assert_eq!(visible_badge(3, 15), "3");
    }
}
