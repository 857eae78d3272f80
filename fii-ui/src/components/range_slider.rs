//! Dual-handle numeric range slider.
//!
//! Built from two overlaid `<input type="range">` elements sharing one rail.
//! `on_update` fires while a handle is dragged, `on_change` once it is released.

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use fii_core::NumberFormat;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handle {
    Low,
    High,
}

#[derive(Props, Clone, PartialEq)]
pub struct RangeSliderProps {
    pub domain: (f64, f64),
    pub step: f64,
    /// Initial `(low, high)`; defaults to the full domain
    pub value: Option<(f64, f64)>,
    /// Formats the handle labels; plain numbers when absent
    pub format: Option<NumberFormat>,
    /// Committed range, on release
    pub on_change: Option<EventHandler<(f64, f64)>>,
    /// Live range, while dragging
    pub on_update: Option<EventHandler<(f64, f64)>>,
}

/// Snap `raw` to the step grid inside `domain`.
pub(crate) fn snap(raw: f64, domain: (f64, f64), step: f64) -> f64 {
    let clamped = raw.clamp(domain.0, domain.1);
    if step <= 0.0 {
        return clamped;
    }
    let steps = ((clamped - domain.0) / step).round();
    // round away the float noise of e.g. 0.1 steps
    let snapped = ((domain.0 + steps * step) * 1e9).round() / 1e9;
    snapped.clamp(domain.0, domain.1)
}

/// New `(low, high)` after moving one handle to `raw`. Handles never cross.
pub(crate) fn move_handle(
    values: (f64, f64),
    handle: Handle,
    raw: f64,
    domain: (f64, f64),
    step: f64,
) -> (f64, f64) {
    let v = snap(raw, domain, step);
    match handle {
        Handle::Low => (v.min(values.1), values.1),
        Handle::High => (values.0, v.max(values.0)),
    }
}

/// The value a handle's input must be reset to when the dragged position
/// was snapped or stopped at the other handle.
pub(crate) fn correction(values: (f64, f64), handle: Handle, raw: f64) -> Option<f64> {
    let kept = match handle {
        Handle::Low => values.0,
        Handle::High => values.1,
    };
    (kept != raw).then_some(kept)
}

/// Position of `value` along the rail, 0-100.
pub(crate) fn percent(value: f64, domain: (f64, f64)) -> f64 {
    let span = domain.1 - domain.0;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - domain.0) / span * 100.0).clamp(0.0, 100.0)
}

fn label(value: f64, format: Option<NumberFormat>) -> String {
    match format {
        Some(f) => f.format(value),
        None => value.to_string(),
    }
}

#[component]
pub fn RangeSlider(props: RangeSliderProps) -> Element {
    let domain = props.domain;
    let step = props.step;
    let initial = props.value.unwrap_or(domain);
    let mut values = use_signal(move || initial);
    let on_change = props.on_change;
    let on_update = props.on_update;

    let (low, high) = values();
    let low_pct = percent(low, domain);
    let high_pct = percent(high, domain);
    let track_style = format!("left: {}%; width: {}%;", low_pct, high_pct - low_pct);
    let low_label = label(low, props.format);
    let high_label = label(high, props.format);

    let mut on_drag = move |handle: Handle, evt: Event<FormData>| {
        if let Ok(raw) = evt.value().parse::<f64>() {
            let next = move_handle(values(), handle, raw, domain, step);
            values.set(next);
            // An unchanged signal leaves the DOM input where the pointer put it
            if let Some(kept) = correction(next, handle, raw) {
                let input = evt
                    .try_as_web_event()
                    .and_then(|e| e.target())
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
                if let Some(input) = input {
                    input.set_value(&kept.to_string());
                }
            }
            if let Some(handler) = on_update {
                handler.call(next);
            }
        }
    };

    let commit = move |_evt: Event<FormData>| {
        if let Some(handler) = on_change {
            handler.call(values());
        }
    };

    rsx! {
        div {
            class: "range-slider",
            div {
                class: "range-slider-labels",
                span { class: "tooltiptext", "{low_label}" }
                span { class: "tooltiptext", "{high_label}" }
            }
            div {
                class: "range-slider-rail",
                div { class: "range-slider-track", style: "{track_style}" }
                input {
                    r#type: "range",
                    "aria-label": "mínimo",
                    min: "{domain.0}",
                    max: "{domain.1}",
                    step: "{step}",
                    value: "{low}",
                    oninput: move |evt| on_drag(Handle::Low, evt),
                    onchange: commit,
                }
                input {
                    r#type: "range",
                    "aria-label": "máximo",
                    min: "{domain.0}",
                    max: "{domain.1}",
                    step: "{step}",
                    value: "{high}",
                    oninput: move |evt| on_drag(Handle::High, evt),
                    onchange: commit,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_clamps_and_rounds_to_step() {
        assert_eq!(snap(250.0, (0.0, 200.0), 1.0), 200.0);
        assert_eq!(snap(-5.0, (0.0, 200.0), 1.0), 0.0);
        assert_eq!(snap(1234.0, (0.0, 100_000.0), 1000.0), 1000.0);
        assert_eq!(snap(0.34, (0.0, 2.0), 0.1), 0.3);
    }

    #[test]
    fn handles_do_not_cross() {
        let domain = (-20.0, 20.0);
        assert_eq!(move_handle((-5.0, 5.0), Handle::Low, 10.0, domain, 1.0), (5.0, 5.0));
        assert_eq!(move_handle((-5.0, 5.0), Handle::High, -10.0, domain, 1.0), (-5.0, -5.0));
        assert_eq!(move_handle((-5.0, 5.0), Handle::Low, -7.0, domain, 1.0), (-7.0, 5.0));
    }

    #[test]
    fn blocked_handle_is_written_back() {
        let domain = (-20.0, 20.0);
        let next = move_handle((-5.0, 5.0), Handle::Low, 9.0, domain, 1.0);
        assert_eq!(correction(next, Handle::Low, 9.0), Some(5.0));

        let next = move_handle((-5.0, 5.0), Handle::High, 7.4, domain, 1.0);
        assert_eq!(correction(next, Handle::High, 7.4), Some(7.0));

        let next = move_handle((-5.0, 5.0), Handle::Low, -3.0, domain, 1.0);
        assert_eq!(correction(next, Handle::Low, -3.0), None);
    }

    #[test]
    fn percent_spans_the_rail() {
        assert_eq!(percent(-20.0, (-20.0, 20.0)), 0.0);
        assert_eq!(percent(0.0, (-20.0, 20.0)), 50.0);
        assert_eq!(percent(20.0, (-20.0, 20.0)), 100.0);
        assert_eq!(percent(5.0, (1.0, 1.0)), 0.0);
    }
}
