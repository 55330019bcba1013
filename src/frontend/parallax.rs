use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::dom;
use crate::config::ParallaxConfig;
use crate::error::Result;
use crate::parallax::{Parallax, HERO_SELECTOR, SPEED_ATTRIBUTE, SPEED_SELECTOR};

/// Recomputes offsets on every raw scroll event, without throttling.
pub fn install(config: &ParallaxConfig) -> Result<()> {
    let window = dom::browser_window()?;
    let hero = dom::document()?
        .query_selector(HERO_SELECTOR)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    let parallax = Parallax::from(config);

    let scroll_source = window.clone();
    EventListener::new(&window, "scroll", move |_| {
        let scroll_y = scroll_source.scroll_y().unwrap_or(0.0);

        if let Some(hero) = &hero {
            dom::set_style(
                hero,
                "background-position",
                &parallax.hero_background_position(scroll_y),
            );
        }

        for element in dom::query_all_html(SPEED_SELECTOR).unwrap_or_default() {
            let declared = element.get_attribute(SPEED_ATTRIBUTE);
            dom::set_style(
                &element,
                "transform",
                &parallax.element_transform(scroll_y, declared.as_deref()),
            );
        }
    })
    .forget();

    Ok(())
}
