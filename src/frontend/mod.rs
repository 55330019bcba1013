//! Browser wiring. Each controller is installed independently: a feature
//! whose elements are missing from the page is skipped without affecting the
//! others.

mod contact;
mod dom;
mod parallax;
mod particles;
mod reveal;
mod theme;
mod tilt;
mod toast;
mod typing;

use gloo_events::EventListener;
use tracing::{debug, info, warn};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::{PortfolioConfig, CONFIG_ELEMENT_ID};
use crate::error::Result;

const YEAR_ID: &str = "year";

pub fn run() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Ok(document) = dom::document() else {
        warn!("no document available; interactions disabled");
        return;
    };

    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string());
    if ready_state.as_deref() == Some("loading") {
        EventListener::once(&document, "DOMContentLoaded", |_| install_all()).forget();
    } else {
        install_all();
    }
}

fn install_all() {
    let config = load_config();

    report("theme", theme::install());
    report("typing", typing::install(&config.typing));
    report("caret", typing::install_caret(config.typing.caret_ms));
    report("reveal", reveal::install(&config.reveal));
    report("parallax", parallax::install(&config.parallax));
    report("particles", particles::install(&config.particles));
    report("tilt", tilt::install());
    report("year", install_year());
    report("contact", contact::install(&config.contact));

    info!("portfolio interactions ready");
}

fn report(feature: &'static str, result: Result<()>) {
    match result {
        Ok(()) => debug!(feature, "installed"),
        Err(error) if error.is_missing_element() => debug!(feature, %error, "skipped"),
        Err(error) => warn!(feature, %error, "install failed"),
    }
}

fn load_config() -> PortfolioConfig {
    let Some(element) = dom::optional_by_id::<Element>(CONFIG_ELEMENT_ID) else {
        return PortfolioConfig::default();
    };

    let raw = element.text_content().unwrap_or_default();
    PortfolioConfig::from_json(&raw).unwrap_or_else(|error| {
        warn!(%error, "falling back to default portfolio config");
        PortfolioConfig::default()
    })
}

fn install_year() -> Result<()> {
    let target = dom::element_by_id::<Element>(YEAR_ID)?;
    let year = js_sys::Date::new_0().get_full_year();
    target.set_text_content(Some(&year.to_string()));
    Ok(())
}
