//! Contact form controller.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement};

use crate::net::relay::GlooRelay;
use crate::state::contact::{ContactForm, ContactPayload, submit};
use crate::state::notification::NotificationSink;
use crate::util::dom;

/// `#contactForm` as seen by the submit flow.
struct DomContactForm {
    form: HtmlFormElement,
}

impl ContactForm for DomContactForm {
    /// Read through `FormData`, so inputs, textareas, and selects all count.
    fn payload(&self) -> ContactPayload {
        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("could not read contact form: {e:?}");
                return ContactPayload::default();
            }
        };
        ContactPayload::from_lookup(|name| data.get(name).as_string())
    }

    fn action(&self) -> Option<String> {
        self.form.get_attribute("action")
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

pub struct ContactFormController;

impl ContactFormController {
    /// Intercept submission of `#contactForm`. Returns `false` when the
    /// page has no such form.
    pub fn attach<N>(notifier: Rc<N>) -> bool
    where
        N: NotificationSink + 'static,
    {
        let Some(form) = dom::by_id("contactForm").and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
            log::debug!("no #contactForm; contact form skipped");
            return false;
        };

        let target = form.clone();
        dom::listen(&target, "submit", move |e: Event| {
            e.prevent_default();
            let form = form.clone();
            let notifier = Rc::clone(&notifier);
            wasm_bindgen_futures::spawn_local(async move {
                let relay = GlooRelay::for_form(form.clone());
                let mut contact = DomContactForm { form };
                let outcome = submit(&mut contact, &relay, notifier.as_ref()).await;
                log::debug!("contact submission finished: {outcome:?}");
            });
        });
        true
    }
}
