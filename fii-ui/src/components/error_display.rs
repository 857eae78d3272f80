//! Inline error box shown in place of the table.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Extra class appended to `error-box`
    #[props(default = String::new())]
    pub class: String,
}

fn error_class(extra: &str) -> String {
    if extra.is_empty() {
        "error-box".to_string()
    } else {
        format!("error-box {}", extra)
    }
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let class = error_class(&props.class);

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            strong { "Erro: " }
            span { "{props.message}" }
        }
    }
}
