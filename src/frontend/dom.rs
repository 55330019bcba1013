use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, Storage, Window};

use crate::error::{PortfolioError, Result};

pub fn browser_window() -> Result<Window> {
    window().ok_or(PortfolioError::MissingElement("window"))
}

pub fn document() -> Result<Document> {
    browser_window()?
        .document()
        .ok_or(PortfolioError::MissingElement("document"))
}

pub fn element_by_id<T: JsCast>(id: &'static str) -> Result<T> {
    document()?
        .get_element_by_id(id)
        .ok_or(PortfolioError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| PortfolioError::Js(format!("#{id} has an unexpected element type")))
}

pub fn optional_by_id<T: JsCast>(id: &'static str) -> Option<T> {
    element_by_id(id).ok()
}

pub fn query_all(selectors: &str) -> Result<Vec<Element>> {
    let nodes = document()?.query_selector_all(selectors)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_html(selectors: &str) -> Result<Vec<HtmlElement>> {
    Ok(query_all(selectors)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}
