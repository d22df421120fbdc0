//! Toast banner renderer.
//!
//! Renders whatever [`NotificationCenter`] says is current: showing a new
//! banner removes the previous node first, and the auto-dismiss timers
//! consult the center so a replaced or closed banner is never touched twice.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::config::NotificationConfig;
use crate::state::notification::{
    DismissStep, FADE_OUT_ANIMATION, NOTIFICATION_STYLES, NotificationCenter, NotificationId, NotificationKind,
    NotificationSink, STYLE_ELEMENT_ID, banner_css,
};
use crate::util::dom;

pub struct NotificationHost {
    center: Rc<RefCell<NotificationCenter>>,
    current: Rc<RefCell<Option<Element>>>,
}

impl NotificationHost {
    #[must_use]
    pub fn new(config: NotificationConfig) -> Self {
        dom::inject_style(STYLE_ELEMENT_ID, NOTIFICATION_STYLES);
        Self {
            center: Rc::new(RefCell::new(NotificationCenter::new(config))),
            current: Rc::new(RefCell::new(None)),
        }
    }

    fn render(&self, id: NotificationId, kind: NotificationKind, message: &str) -> Option<Element> {
        let doc = dom::document()?;
        let banner = doc.create_element("div").ok()?;
        banner.set_class_name(&kind.class_name());
        if let Err(e) = banner.set_attribute("style", &banner_css(kind)) {
            log::debug!("banner style rejected: {e:?}");
        }

        let content = doc.create_element("div").ok()?;
        content.set_class_name("notification-content");
        let icon = doc.create_element("span").ok()?;
        icon.set_class_name("notification-icon");
        icon.set_text_content(Some(kind.icon()));
        let text = doc.create_element("span").ok()?;
        text.set_class_name("notification-message");
        text.set_text_content(Some(message));
        let close = doc.create_element("button").ok()?;
        close.set_class_name("notification-close");
        close.set_text_content(Some("×"));

        for child in [&icon, &text, &close] {
            content.append_child(child).ok()?;
        }
        banner.append_child(&content).ok()?;

        let center = Rc::clone(&self.center);
        let current = Rc::clone(&self.current);
        dom::listen(&close, "click", move |_| {
            if center.borrow_mut().close(id) {
                remove_current(&current);
            }
        });

        doc.body()?.append_child(&banner).ok()?;
        Some(banner)
    }

    fn schedule_dismiss(&self, id: NotificationId, lifetime_ms: u32) {
        let center = Rc::clone(&self.center);
        let current = Rc::clone(&self.current);
        dom::after(lifetime_ms, move || {
            let step = center.borrow_mut().lifetime_elapsed(id);
            let DismissStep::Fade { fade_ms } = step else {
                return;
            };
            if let Some(banner) = current.borrow().as_ref() {
                dom::set_style(banner, "animation", FADE_OUT_ANIMATION);
            }
            dom::after(fade_ms, move || {
                if center.borrow_mut().fade_finished(id) == DismissStep::Remove {
                    remove_current(&current);
                }
            });
        });
    }
}

impl NotificationSink for NotificationHost {
    fn notify(&self, kind: NotificationKind, message: &str) {
        let (shown, _replaced) = self.center.borrow_mut().show(kind, message);
        remove_current(&self.current);
        // Banners left by anything else on the page go too.
        for stray in dom::query_all(".notification") {
            stray.remove();
        }

        let Some(banner) = self.render(shown.id, kind, message) else {
            log::warn!("could not render notification: {message}");
            return;
        };
        *self.current.borrow_mut() = Some(banner);
        let lifetime_ms = self.center.borrow().lifetime_ms();
        self.schedule_dismiss(shown.id, lifetime_ms);
    }
}

fn remove_current(current: &Rc<RefCell<Option<Element>>>) {
    if let Some(banner) = current.borrow_mut().take() {
        banner.remove();
    }
}
