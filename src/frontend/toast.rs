use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use super::dom;
use crate::notice::Notice;

/// The page's single status indicator. A new notice replaces both the text
/// and the pending hide timer of the previous one.
pub struct Toast {
    element: Option<HtmlElement>,
    hide: RefCell<Option<Timeout>>,
}

impl Toast {
    pub fn new(element: Option<HtmlElement>) -> Self {
        Self {
            element,
            hide: RefCell::new(None),
        }
    }

    pub fn show(&self, notice: &Notice) {
        let Some(element) = &self.element else {
            return;
        };

        element.set_hidden(false);
        element.set_text_content(Some(notice.text));
        dom::set_style(element, "background", notice.tone.background());
        dom::set_style(element, "color", notice.tone.color());

        let target = element.clone();
        let timeout = Timeout::new(notice.duration_ms, move || target.set_hidden(true));
        // Dropping the previous timeout cancels it.
        self.hide.replace(Some(timeout));
    }
}
