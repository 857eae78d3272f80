//! Typed wrappers around the browser APIs the page needs.
//!
//! Fetching goes through `web-sys` Request/Response and `wasm-bindgen-futures`;
//! the few one-off DOM tweaks go through `js_sys::eval()` wrapped in try/catch
//! so a failing call never panics the app.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{EventTarget, Node, Request, RequestInit, Response};

/// Viewports at or below this width get the narrow column layout.
pub const MOBILE_MAX_WIDTH: f64 = 740.0;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('FII JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// GET `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no global window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        return Err(format!("HTTP {} while fetching {}", resp.status(), url));
    }

    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    log::info!("Fetched {}", url);
    body.as_string()
        .ok_or_else(|| format!("Response body of {} is not text", url))
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {}", js_err(e));
            }
        }
        None => log::warn!("alert without a window: {}", message),
    }
}

/// True on touch devices that report an orientation, or on narrow viewports.
pub fn is_mobile() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let has_orientation = js_sys::Reflect::get(&window, &JsValue::from_str("orientation"))
        .ok()
        .and_then(|v| v.as_f64())
        .is_some_and(|o| o > -1.0);

    let narrow = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .is_some_and(|w| w <= MOBILE_MAX_WIDTH);

    has_orientation || narrow
}

/// Scroll an element back to its top-left corner, e.g. after a page change.
pub fn scroll_to_top(element_id: &str) {
    let id = serde_json::to_string(element_id).unwrap_or_default();
    call_js(&format!(
        "var el = document.getElementById({}); if (el) {{ el.scrollTop = 0; el.scrollLeft = 0; }}",
        id
    ));
}

/// Whether focus moved from inside `root_id` to somewhere outside it.
/// `related` is the element receiving focus; `None` means focus left the page.
pub fn focus_left(root_id: &str, related: Option<EventTarget>) -> bool {
    let Some(node) = related.and_then(|t| t.dyn_into::<Node>().ok()) else {
        return true;
    };
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(root_id));
    match root {
        Some(root) => !root.contains(Some(&node)),
        None => true,
    }
}
