use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::dom;
use super::toast::Toast;
use crate::config::ContactConfig;
use crate::contact::{self, ContactDraft, Field, SubmitOutcome, FORM_ID};
use crate::error::Result;
use crate::notice::TOAST_ID;

pub fn install(config: &ContactConfig) -> Result<()> {
    let form = dom::element_by_id::<HtmlFormElement>(FORM_ID)?;
    let toast = Rc::new(Toast::new(dom::optional_by_id::<HtmlElement>(TOAST_ID)));

    {
        let form_fields = form.clone();
        let toast = Rc::clone(&toast);
        let config = config.clone();
        // Non-passive so that preventDefault keeps the browser on the page.
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let draft = read_draft(&form_fields);
                match contact::submit(&draft, &config) {
                    SubmitOutcome::Rejected { error, notice } => {
                        debug!(%error, "contact form rejected");
                        toast.show(&notice);
                    }
                    SubmitOutcome::OpenMailClient { link, notice } => {
                        open_mail_client(&link);
                        toast.show(&notice);
                    }
                }
            },
        )
        .forget();
    }

    EventListener::new(&form, "reset", move |_| toast.show(&contact::reset())).forget();

    Ok(())
}

fn read_draft(form: &HtmlFormElement) -> ContactDraft {
    ContactDraft::new(
        &field_value(form, Field::Location),
        &field_value(form, Field::Email),
        &field_value(form, Field::Message),
    )
}

fn field_value(form: &HtmlFormElement, field: Field) -> String {
    let selector = format!("[name=\"{}\"]", field.name());
    let Ok(Some(control)) = form.query_selector(&selector) else {
        return String::new();
    };

    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn open_mail_client(link: &str) {
    let navigated = dom::browser_window().and_then(|window| Ok(window.location().set_href(link)?));
    if let Err(error) = navigated {
        warn!(%error, "failed to open mail client link");
    }
}
