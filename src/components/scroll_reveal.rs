//! Fade/slide-in of content blocks on first sight.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::RevealConfig;
use crate::state::reveal::{HIDDEN_STYLE, REVEAL_SELECTOR, REVEALED_STYLE, RevealTracker};
use crate::util::dom;

pub struct ScrollRevealController;

impl ScrollRevealController {
    /// Hide every reveal target and observe it. Returns `false` when there
    /// are no targets or observation is unavailable.
    pub fn attach(config: &RevealConfig) -> bool {
        let targets = dom::query_all(REVEAL_SELECTOR);
        if targets.is_empty() {
            return false;
        }
        for el in &targets {
            for (property, value) in HIDDEN_STYLE {
                dom::set_style(el, property, value);
            }
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        let known = targets.clone();
        dom::observe_once(&targets, &config.observer_options(), move |el| {
            let Some(index) = known.iter().position(|t| t == el) else {
                return;
            };
            if !tracker.borrow_mut().intersected(index, true) {
                return;
            }
            for (property, value) in REVEALED_STYLE {
                dom::set_style(el, property, value);
            }
        })
        .is_some()
    }
}
