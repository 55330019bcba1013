use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use super::dom;
use crate::error::Result;
use crate::tilt::{tilt_style, Bounds, TILT_SELECTOR};

pub fn install() -> Result<()> {
    for card in dom::query_all_html(TILT_SELECTOR)? {
        let target = card.clone();
        EventListener::new(&card, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
            if let Some(style) = tilt_style(bounds, pointer.0, pointer.1) {
                dom::set_style(&target, "transform", &style.transform);
                dom::set_style(&target, "box-shadow", &style.box_shadow);
            }
        })
        .forget();

        let target = card.clone();
        EventListener::new(&card, "mouseleave", move |_| {
            dom::clear_style(&target, "transform");
            dom::clear_style(&target, "box-shadow");
        })
        .forget();
    }

    Ok(())
}
