//! Demo modal controller and footer shortcut.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::config::ModalConfig;
use crate::state::modal::{
    ACTIONS, CLOSE_BUTTON_CLASS, FADE_OUT_ANIMATION, FEATURES, MODAL_STYLES, ModalGeneration, ModalState,
    OVERLAY_CLASS, STYLE_ELEMENT_ID, TITLE,
};
use crate::util::dom;

pub struct DemoModalController {
    state: RefCell<ModalState>,
    fade_ms: u32,
}

impl DemoModalController {
    /// Wire `#demo-btn` and `#footer-demo`. Either may be absent.
    pub fn attach(config: &ModalConfig) -> Rc<Self> {
        let this = Rc::new(Self { state: RefCell::new(ModalState::new()), fade_ms: config.fade_ms });

        if let Some(button) = dom::by_id("demo-btn") {
            let modal = Rc::clone(&this);
            dom::listen(&button, "click", move |_| modal.show());
        }
        if let Some(button) = dom::by_id("footer-demo") {
            dom::listen(&button, "click", |_| {
                if let Some(projects) = dom::query("#projects") {
                    dom::smooth_scroll_to(&projects, None);
                }
            });
        }
        this
    }

    fn show(self: &Rc<Self>) {
        let Some(generation) = self.state.borrow_mut().open() else {
            return;
        };
        let Some(overlay) = build_overlay() else {
            self.state.borrow_mut().removed(generation);
            return;
        };

        if let Ok(Some(close)) = overlay.query_selector(&format!(".{CLOSE_BUTTON_CLASS}")) {
            let modal = Rc::clone(self);
            let target = overlay.clone();
            dom::listen(&close, "click", move |_| modal.close(&target, generation));
        }

        {
            let modal = Rc::clone(self);
            let target = overlay.clone();
            dom::listen(&overlay, "click", move |e: Event| {
                let on_backdrop = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .is_some_and(|clicked| clicked == target);
                if on_backdrop {
                    modal.close(&target, generation);
                }
            });
        }

        if let Ok(buttons) = overlay.query_selector_all(".demo-actions button") {
            for (index, action) in (0..buttons.length()).zip(ACTIONS) {
                let Some(button) = buttons.get(index) else {
                    continue;
                };
                let modal = Rc::clone(self);
                let target = overlay.clone();
                let section = action.target;
                dom::listen(&button, "click", move |_| {
                    if let Some(el) = dom::query(section) {
                        dom::smooth_scroll_to(&el, None);
                    }
                    target.remove();
                    modal.state.borrow_mut().removed(generation);
                });
            }
        }

        if self.state.borrow_mut().claim_style_injection() {
            dom::inject_style(STYLE_ELEMENT_ID, MODAL_STYLES);
        }
    }

    fn close(self: &Rc<Self>, overlay: &Element, generation: ModalGeneration) {
        if !self.state.borrow_mut().request_close() {
            return;
        }
        dom::set_style(overlay, "animation", FADE_OUT_ANIMATION);
        let modal = Rc::clone(self);
        let overlay = overlay.clone();
        dom::after(self.fade_ms, move || {
            overlay.remove();
            if !modal.state.borrow_mut().removed(generation) {
                log::debug!("stale modal fade timer ignored");
            }
        });
    }
}

/// Build the overlay from the fixed modal content and append it to `<body>`.
fn build_overlay() -> Option<Element> {
    let doc = dom::document()?;
    let overlay = doc.create_element("div").ok()?;
    overlay.set_class_name(OVERLAY_CLASS);

    let features = FEATURES
        .iter()
        .map(|f| format!(r#"<div class="demo-feature"><i class="{}"></i><h4>{}</h4><p>{}</p></div>"#, f.icon, f.title, f.body))
        .collect::<String>();
    let actions = ACTIONS
        .iter()
        .map(|a| format!(r#"<button class="{}">{}</button>"#, a.class, a.label))
        .collect::<String>();
    overlay.set_inner_html(&format!(
        r#"<div class="demo-modal">
    <div class="demo-modal-header">
        <h3>{TITLE}</h3>
        <button class="{CLOSE_BUTTON_CLASS}">&times;</button>
    </div>
    <div class="demo-modal-content">
        <div class="demo-features">{features}</div>
        <div class="demo-actions">{actions}</div>
    </div>
</div>"#
    ));

    doc.body()?.append_child(&overlay).ok()?;
    Some(overlay)
}
