use gloo_events::EventListener;
use js_sys::{Function, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Element;

use super::dom;
use crate::error::{PortfolioError, Result};
use crate::theme::{Theme, THEME_KEY};

pub fn install() -> Result<()> {
    apply_theme(read_stored_theme())?;

    for theme in Theme::ALL {
        let Some(button) = dom::optional_by_id::<Element>(theme.button_id()) else {
            continue;
        };
        EventListener::new(&button, "click", move |_| {
            apply_theme_with_transition(theme);
        })
        .forget();
    }

    Ok(())
}

fn read_stored_theme() -> Theme {
    let stored = dom::local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    Theme::resolve(stored.as_deref())
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn apply_theme(theme: Theme) -> Result<()> {
    let body = dom::document()?
        .body()
        .ok_or(PortfolioError::MissingElement("body"))?;
    let classes = body.class_list();
    for other in Theme::ALL {
        classes.remove_1(other.class_name())?;
    }
    classes.add_1(theme.class_name())?;

    for control in Theme::ALL {
        if let Some(button) = dom::optional_by_id::<Element>(control.button_id()) {
            let _ = button.set_attribute("aria-pressed", control.pressed_value(theme));
        }
    }

    persist_theme(theme);
    debug!(theme = theme.as_str(), "theme applied");
    Ok(())
}

fn apply_or_log(theme: Theme) {
    if let Err(error) = apply_theme(theme) {
        warn!(theme = theme.as_str(), %error, "failed to apply theme");
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if dom::prefers_reduced_motion() {
        apply_or_log(theme);
        return;
    }

    let Ok(document) = dom::document() else {
        apply_or_log(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_or_log(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_or_log(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_or_log(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_or_log(theme);
    }
}
