//! Thin wrappers over the `web-sys` calls every component repeats.
//!
//! Lookups return `Option` so a page missing an element degrades to a no-op.
//! Listener and observer closures are leaked: components live as long as the
//! page, so there is nothing to unregister.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::config::ObserverOptions;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(el: &Element) -> Option<HtmlElement> {
    el.clone().dyn_into::<HtmlElement>().ok()
}

/// Set one inline style property. Non-HTML elements are skipped.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = as_html(el) {
        if let Err(e) = html.style().set_property(property, value) {
            log::debug!("style {property} rejected: {e:?}");
        }
    }
}

pub fn style_value(el: &Element, property: &str) -> String {
    as_html(el)
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        log::debug!("class {class} update failed: {e:?}");
    }
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll `el` into view, optionally aligning its block edge.
pub fn smooth_scroll_to(el: &Element, block: Option<ScrollLogicalPosition>) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    if let Some(block) = block {
        options.set_block(block);
    }
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Whether the event target lies inside `container`.
pub fn event_within(event: &Event, container: &Element) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// Attach a page-lifetime listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("failed to attach {event} listener: {e:?}");
        return;
    }
    cb.forget();
}

/// Append a `<style id=...>` to `<head>` unless one with that id exists.
pub fn inject_style(id: &str, css: &str) {
    let Some(doc) = document() else {
        return;
    };
    if doc.get_element_by_id(id).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    if let Err(e) = head.append_child(&style) {
        log::warn!("failed to inject #{id}: {e:?}");
    }
}

/// Observe `targets`, calling `on_visible` once per element the first time
/// it intersects. The element is unobserved afterwards.
pub fn observe_once<F>(targets: &[Element], options: &ObserverOptions, mut on_visible: F) -> Option<IntersectionObserver>
where
    F: FnMut(&Element) + 'static,
{
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            return None;
        }
    };
    cb.forget();
    for target in targets {
        observer.observe(target);
    }
    Some(observer)
}

/// Run `f` once after `ms` milliseconds.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    gloo_timers::callback::Timeout::new(ms, f).forget();
}
