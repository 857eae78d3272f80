//! Searchable multi-select dropdown.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use fii_core::SelectOption;

use crate::js_bridge;

#[derive(Props, Clone, PartialEq)]
pub struct CustomSelectProps {
    pub options: Vec<SelectOption>,
    /// Values selected when the widget mounts
    #[props(default = Vec::new())]
    pub selected: Vec<String>,
    /// Receives the full list of selected values after every change
    pub on_change: EventHandler<Vec<String>>,
}

/// Header text: "Nenhum", "1 selecionado", "3 selecionados".
pub(crate) fn selection_label(count: usize) -> String {
    match count {
        0 => "Nenhum".to_string(),
        1 => "1 selecionado".to_string(),
        n => format!("{} selecionados", n),
    }
}

/// Case-insensitive substring match; an empty term matches everything.
pub(crate) fn option_matches(value: &str, term: &str) -> bool {
    term.is_empty() || value.to_lowercase().contains(&term.to_lowercase())
}

/// Local state of one select: open flag, search text and selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SelectState {
    pub active: bool,
    pub search: String,
    pub selected: Vec<String>,
}

impl SelectState {
    pub fn new(selected: Vec<String>) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    pub fn toggle_open(&mut self) {
        self.active = !self.active;
    }

    /// Add `value` if absent, remove it if present. Returns the new selection.
    pub fn toggle(&mut self, value: &str) -> Vec<String> {
        match self.selected.iter().position(|v| v == value) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(value.to_string()),
        }
        self.selected.clone()
    }

    /// Focus left the root element. Moves inside it (e.g. to the search
    /// box) keep the panel open.
    pub fn blur(&mut self, focus_left_root: bool) {
        if focus_left_root {
            self.active = false;
        }
    }

    pub fn label(&self) -> String {
        selection_label(self.selected.len())
    }
}

static NEXT_SELECT_ID: AtomicUsize = AtomicUsize::new(0);

/// Multi-select with a search box. Owns its open flag, search text and
/// selection; reports the selection upward on every toggle. Closes when
/// focus leaves it.
#[component]
pub fn CustomSelect(props: CustomSelectProps) -> Element {
    let root_id = use_hook(|| {
        format!("custom-select-{}", NEXT_SELECT_ID.fetch_add(1, Ordering::Relaxed))
    });
    let initial = props.selected.clone();
    let mut select = use_signal(move || SelectState::new(initial));
    let on_change = props.on_change;

    let current = select();
    let term = current.search.clone();
    let any_match = props.options.iter().any(|o| option_matches(&o.value, &term));

    let root_class = if current.active { "custom-select active" } else { "custom-select _no_active" };
    let header_class = if current.selected.is_empty() {
        "selected-options"
    } else {
        "selected-options active"
    };
    let label = current.label();
    let focus_root = root_id.clone();

    rsx! {
        div {
            id: "{root_id}",
            class: "{root_class}",
            tabindex: "0",
            onfocusout: move |evt: Event<FocusData>| {
                let related = evt.try_as_web_event().and_then(|e| e.related_target());
                let left = js_bridge::focus_left(&focus_root, related);
                select.write().blur(left);
            },
            div {
                class: "{header_class}",
                onclick: move |_| select.write().toggle_open(),
                "{label}"
            }
            ul {
                class: "options",
                input {
                    r#type: "text",
                    placeholder: "Buscar...",
                    spellcheck: "false",
                    value: "{term}",
                    oninput: move |evt: Event<FormData>| select.write().search = evt.value(),
                }
                for option in props.options.iter() {
                    {
                        let value = option.value.clone();
                        let is_selected = current.selected.contains(&option.value);
                        rsx! {
                            li {
                                key: "{option.key}",
                                class: if is_selected { "active" } else { "_no_active" },
                                hidden: !option_matches(&option.value, &term),
                                onclick: move |_| {
                                    let selected = select.write().toggle(&value);
                                    on_change.call(selected);
                                },
                                "{option.value}"
                            }
                        }
                    }
                }
                li {
                    class: "noResults",
                    hidden: any_match,
                    "Nenhum resultado"
                }
            }
        }
    }
}
