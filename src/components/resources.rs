//! Scroll throttling, lazy images, and preload hints.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::config::{ObserverOptions, ResourceConfig};
use crate::state::resources::{LAZY_IMAGE_SELECTOR, LAZY_SRC_ATTR, ScrollThrottle, lazy_source, preload_links};
use crate::util::dom;

pub struct ResourceOptimizer;

impl ResourceOptimizer {
    pub fn attach(config: &ResourceConfig) {
        throttle_scroll_events();
        lazy_load_images();
        preload(config);
    }
}

/// Coalesce scroll bursts into one animation frame each.
fn throttle_scroll_events() {
    let Some(window) = dom::window() else {
        return;
    };
    let throttle = Rc::new(RefCell::new(ScrollThrottle::new()));
    let on_frame = {
        let throttle = Rc::clone(&throttle);
        Rc::new(Closure::<dyn FnMut(f64)>::new(move |_ts: f64| throttle.borrow_mut().frame_ran()))
    };
    let frame_window = window.clone();
    dom::listen(&window, "scroll", move |_| {
        if !throttle.borrow_mut().scroll_event() {
            return;
        }
        let callback: &js_sys::Function = (*on_frame).as_ref().unchecked_ref();
        if let Err(e) = frame_window.request_animation_frame(callback) {
            log::debug!("requestAnimationFrame failed: {e:?}");
            throttle.borrow_mut().frame_ran();
        }
    });
}

fn lazy_load_images() {
    let images = dom::query_all(LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return;
    }
    let options = ObserverOptions { threshold: 0.0, root_margin: "0px".to_owned() };
    dom::observe_once(&images, &options, |img| {
        let data_src = img.get_attribute(LAZY_SRC_ATTR);
        let Some(src) = lazy_source(data_src.as_deref()) else {
            return;
        };
        if let Err(e) = img.set_attribute("src", src) {
            log::warn!("lazy image swap failed: {e:?}");
            return;
        }
        if let Err(e) = img.remove_attribute(LAZY_SRC_ATTR) {
            log::debug!("could not drop {LAZY_SRC_ATTR}: {e:?}");
        }
    });
}

fn preload(config: &ResourceConfig) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(head) = doc.head() else {
        return;
    };
    for link in preload_links(&config.preload_images) {
        let Ok(el) = doc.create_element("link") else {
            continue;
        };
        let attrs = [("rel", link.rel), ("as", link.as_type), ("href", link.href.as_str())];
        if attrs.iter().any(|(name, value)| el.set_attribute(name, value).is_err()) {
            continue;
        }
        if let Err(e) = head.append_child(&el) {
            log::debug!("preload hint for {} rejected: {e:?}", link.href);
        }
    }
}
