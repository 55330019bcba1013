use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::Element;

use super::dom;
use crate::caret::{next_opacity, CARET_SELECTOR};
use crate::config::TypingConfig;
use crate::error::Result;
use crate::typewriter::{Timings, Typewriter, TYPED_LINE_ID};

pub fn install(config: &TypingConfig) -> Result<()> {
    let target = dom::element_by_id::<Element>(TYPED_LINE_ID)?;
    let Some(writer) = Typewriter::new(&config.lines, Timings::from(config)) else {
        return Ok(());
    };

    type_next(Rc::new(RefCell::new(writer)), target);
    Ok(())
}

/// Runs one tick now and schedules the next; the chain lives as long as the
/// page.
fn type_next(writer: Rc<RefCell<Typewriter>>, target: Element) {
    let step = writer.borrow_mut().tick();
    target.set_text_content(Some(&step.text));
    Timeout::new(step.delay_ms, move || type_next(writer, target)).forget();
}

pub fn install_caret(interval_ms: u32) -> Result<()> {
    Interval::new(interval_ms, || {
        let Ok(carets) = dom::query_all_html(CARET_SELECTOR) else {
            return;
        };
        for caret in carets {
            let current = caret.style().get_property_value("opacity").unwrap_or_default();
            dom::set_style(&caret, "opacity", next_opacity(&current));
        }
    })
    .forget();
    Ok(())
}
