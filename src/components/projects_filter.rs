//! Project filter controller.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::state::filter::{CardStyle, FilterState, ProjectFilter};
use crate::util::dom;

pub struct ProjectsFilter {
    state: RefCell<FilterState>,
    buttons: Vec<Element>,
    cards: Vec<Element>,
}

impl ProjectsFilter {
    /// Wire every `.filter-btn`. Returns `None` when the page has none.
    pub fn attach() -> Option<Rc<Self>> {
        let buttons = dom::query_all(".filter-btn");
        if buttons.is_empty() {
            log::debug!("no .filter-btn elements; project filter skipped");
            return None;
        }
        let this = Rc::new(Self {
            state: RefCell::new(FilterState::new()),
            buttons,
            cards: dom::query_all(".project-card"),
        });

        for (index, button) in this.buttons.iter().enumerate() {
            let filter = Rc::clone(&this);
            let button_el = button.clone();
            dom::listen(button, "click", move |_| {
                let selected = ProjectFilter::from_attr(button_el.get_attribute("data-filter").as_deref());
                filter.select(index, selected);
            });
        }
        Some(this)
    }

    fn select(&self, index: usize, selected: ProjectFilter) {
        let visibility = {
            let mut state = self.state.borrow_mut();
            let active = state.select(index, selected);
            let categories = self.cards.iter().map(|card| card.get_attribute("data-category")).collect::<Vec<_>>();
            active.visibility(categories.iter().map(Option::as_deref))
        };

        for (i, button) in self.buttons.iter().enumerate() {
            dom::set_class(button, "active", i == index);
        }
        for (card, visible) in self.cards.iter().zip(visibility) {
            let style = CardStyle::for_visibility(visible);
            dom::set_style(card, "display", style.display);
            if let Some(animation) = style.animation {
                dom::set_style(card, "animation", animation);
            }
        }
    }
}
