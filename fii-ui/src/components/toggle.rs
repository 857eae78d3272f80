//! Labeled on/off switch.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ToggleProps {
    pub checked: bool,
    pub label: String,
    pub on_change: EventHandler<bool>,
}

/// A checkbox styled as a switch, with its label to the right.
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    let on_change = props.on_change;
    let class = if props.checked { "toggle checked" } else { "toggle" };

    rsx! {
        label {
            class: "{class}",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |evt: Event<FormData>| on_change.call(evt.checked()),
            }
            span { class: "toggle-track", span { class: "toggle-thumb" } }
            span { "{props.label}" }
        }
    }
}
