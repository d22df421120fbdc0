//! Hero background parallax.

use crate::config::ParallaxConfig;
use crate::state::parallax::{PARALLAX_SELECTOR, transform};
use crate::util::dom;

pub struct ParallaxController;

impl ParallaxController {
    pub fn attach(config: &ParallaxConfig) -> bool {
        let targets = dom::query_all(PARALLAX_SELECTOR);
        let Some(window) = dom::window() else {
            return false;
        };
        if targets.is_empty() {
            return false;
        }
        let speed = config.speed;
        dom::listen(&window, "scroll", move |_| {
            let value = transform(dom::scroll_y(), speed);
            for el in &targets {
                dom::set_style(el, "transform", &value);
            }
        });
        true
    }
}
