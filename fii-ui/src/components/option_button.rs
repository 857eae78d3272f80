//! Toggle-style container that hosts a dropdown panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct OptionButtonProps {
    /// Highlights the button and reveals its `.dropdown` child via CSS
    #[props(default = false)]
    pub active: bool,
    #[props(default = false)]
    pub hover_effect: bool,
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

/// CSS classes for the given flags, e.g. `"optionButton active _no_hoverEffect"`.
pub(crate) fn option_button_class(active: bool, hover_effect: bool) -> String {
    [
        "optionButton",
        if active { "active" } else { "_no_active" },
        if hover_effect { "hoverEffect" } else { "_no_hoverEffect" },
    ]
    .join(" ")
}

/// Purely presentational: the owner decides what `active` means.
#[component]
pub fn OptionButton(props: OptionButtonProps) -> Element {
    let class = option_button_class(props.active, props.hover_effect);
    let onclick = props.onclick;

    rsx! {
        div {
            class: "{class}",
            role: "button",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
