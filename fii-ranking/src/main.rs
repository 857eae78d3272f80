//! FII Ranking
//!
//! Ranks Brazilian real-estate investment funds (FIIs) in a table that can be
//! sorted by any column, filtered per column and paged.
//!
//! Data flow:
//! 1. On mount, the viewport is checked; small screens keep only the ticker,
//!    daily change and favorite columns.
//! 2. `./data/fii.json` is fetched once and loaded into the `TableState`
//!    (sorted, multi-select options derived, filters applied).
//! 3. Every widget event mutates the `TableState` signal, which recomputes
//!    the filtered set, the page count and the visible slice before rendering.
//! 4. If the fetch fails, a blocking alert asks the user to try again later.

mod fund_table;
mod toolbar;

use chrono::Utc;
use dioxus::prelude::*;
use fii_core::Dataset;
use fii_ui::components::{ErrorDisplay, LoadingSpinner, PageHeader};
use fii_ui::js_bridge;
use fii_ui::state::AppState;

use fund_table::FundTable;
use toolbar::OptionsBar;

/// Static dataset served next to the WASM bundle.
const DATA_URL: &str = "./data/fii.json";

const LOAD_ERROR_ALERT: &str = "Infelizmente, não foi possível carregar o arquivo de dados. Tente novamente em alguns instantes!";

/// Page stylesheet, embedded at compile time.
static STYLES: &str = include_str!("../assets/fii.css");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fii-ranking-root"))
        .launch(App);
}

async fn load_dataset() -> anyhow::Result<Dataset> {
    let body = js_bridge::fetch_text(DATA_URL)
        .await
        .map_err(anyhow::Error::msg)?;
    Dataset::from_json(&body)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Viewport check and one-time data load on mount
    use_effect(move || {
        if js_bridge::is_mobile() {
            log::info!("Small viewport detected, narrowing columns");
            state.is_mobile.set(true);
            state.table.write().apply_mobile_layout();
        }

        spawn(async move {
            match load_dataset().await {
                Ok(dataset) => {
                    state.table.write().load(dataset.results);
                    state.updated_at.set(Some(Utc::now()));
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load FII data: {:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                    state.loading.set(false);
                    js_bridge::alert(LOAD_ERROR_ALERT);
                }
            }
        });
    });

    let menu_open = (state.open_menu)().is_some();
    let overlay_class = if menu_open { "overlay active" } else { "overlay _no_active" };

    rsx! {
        style { "{STYLES}" }
        div {
            id: "container",
            div {
                class: "{overlay_class}",
                onclick: move |_| state.close_menus(),
            }
            PageHeader {
                title: "Ranking de Fundos de Investimentos Imobiliários (FIIs)".to_string(),
                home_url: "https://www.carteiraglobal.com/".to_string(),
                logo_alt: "carteira global".to_string(),
            }
            section {
                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    OptionsBar {}
                    FundTable {}
                }
            }
            UpdateFooter {}
        }
    }
}

/// "Tabela atualizada em <date> às <time>", in São Paulo time.
#[component]
fn UpdateFooter() -> Element {
    let state = use_context::<AppState>();
    let Some(updated_at) = (state.updated_at)() else {
        return rsx! { footer {} };
    };
    let (date, time) = fii_core::format::format_update_timestamp(&updated_at);

    rsx! {
        footer {
            span {
                class: "updates",
                "Tabela atualizada em "
                strong { "{date}" }
                " às "
                strong { "{time}" }
            }
        }
    }
}
