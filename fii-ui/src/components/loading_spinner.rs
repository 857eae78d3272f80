//! Placeholder shown while the dataset downloads.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Carregando dados...".to_string())]
    pub message: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            class: "loading",
            "aria-busy": "true",
            span { class: "loading-wheel" }
            span { "{props.message}" }
        }
    }
}
