//! Navigation bar controller: mobile menu, smooth scroll, active link.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollLogicalPosition};

use crate::config::NavConfig;
use crate::state::nav::{NavState, SectionBounds, href_for_section, section_id_from_href};
use crate::util::dom;

const ACTIVE_CLASS: &str = "active";
const SCROLLED_CLASS: &str = "scrolled";

pub struct NavigationController {
    state: RefCell<NavState>,
    navbar: Option<Element>,
    hamburger: Option<Element>,
    menu: Option<Element>,
    links: Vec<Element>,
}

impl NavigationController {
    /// Wire the navbar. Works with any subset of its elements present.
    pub fn attach(config: NavConfig) -> Rc<Self> {
        let this = Rc::new(Self {
            state: RefCell::new(NavState::new(config)),
            navbar: dom::by_id("navbar"),
            hamburger: dom::by_id("hamburger"),
            menu: dom::by_id("nav-menu"),
            links: dom::query_all(".nav-link"),
        });

        if let Some(hamburger) = &this.hamburger {
            let nav = Rc::clone(&this);
            dom::listen(hamburger, "click", move |_| {
                nav.state.borrow_mut().toggle_menu();
                nav.render_menu();
            });
        }

        for link in &this.links {
            let nav = Rc::clone(&this);
            let link_el = link.clone();
            dom::listen(link, "click", move |e: Event| {
                e.prevent_default();
                nav.follow_link(&link_el);
            });
        }

        if let Some(doc) = dom::document() {
            let nav = Rc::clone(&this);
            dom::listen(&doc, "click", move |e: Event| nav.document_clicked(&e));
        }

        if let Some(window) = dom::window() {
            let nav = Rc::clone(&this);
            dom::listen(&window, "scroll", move |_| nav.scrolled());
            let nav = Rc::clone(&this);
            dom::listen(&window, "resize", move |_| {
                let closed = nav.state.borrow_mut().resized(dom::viewport_width());
                if closed {
                    nav.render_menu();
                }
            });
        }

        this
    }

    fn follow_link(&self, link: &Element) {
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(section_id) = section_id_from_href(&href) else {
            return;
        };
        let Some(section) = dom::by_id(section_id) else {
            return;
        };
        dom::smooth_scroll_to(&section, Some(ScrollLogicalPosition::Start));
        self.state.borrow_mut().link_clicked(section_id);
        self.render_menu();
        self.render_active(section_id);
    }

    fn document_clicked(&self, event: &Event) {
        let (Some(menu), Some(hamburger)) = (&self.menu, &self.hamburger) else {
            return;
        };
        let inside_menu = dom::event_within(event, menu);
        let inside_toggle = dom::event_within(event, hamburger);
        let closed = self.state.borrow_mut().document_clicked(inside_menu, inside_toggle);
        if closed {
            self.render_menu();
        }
    }

    fn scrolled(&self) {
        let update = self.state.borrow_mut().scrolled(dom::scroll_y(), &sections());
        if let Some(navbar) = &self.navbar {
            dom::set_class(navbar, SCROLLED_CLASS, update.scrolled);
        }
        if let Some(section_id) = update.activated {
            self.render_active(&section_id);
        }
    }

    fn render_menu(&self) {
        let open = self.state.borrow().menu_open();
        for el in [&self.menu, &self.hamburger].into_iter().flatten() {
            dom::set_class(el, ACTIVE_CLASS, open);
        }
    }

    fn render_active(&self, section_id: &str) {
        let wanted = href_for_section(section_id);
        for link in &self.links {
            let is_active = link.get_attribute("href").as_deref() == Some(wanted.as_str());
            dom::set_class(link, ACTIVE_CLASS, is_active);
        }
    }
}

/// Bounds of every `section[id]`, in document order.
fn sections() -> Vec<SectionBounds> {
    dom::query_all("section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}
