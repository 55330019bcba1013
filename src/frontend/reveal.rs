use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::config::RevealConfig;
use crate::error::Result;
use crate::reveal::{on_intersection, RevealAction, PENDING_CLASS, VISIBLE_CLASS};

pub fn install(config: &RevealConfig) -> Result<()> {
    let targets = dom::query_all(&config.selectors)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if on_intersection(entry.is_intersecting()) == RevealAction::Reveal {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        let _ = target.class_list().add_1(PENDING_CLASS);
        observer.observe(target);
    }

    Ok(())
}
