//! # portfolio
//!
//! WebAssembly interactivity for a static portfolio page: navigation
//! highlighting, project filtering, scroll-triggered reveals, a contact form
//! posted to a hosted form relay, a typewriter tagline, parallax, and small
//! resource helpers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Plain-Rust state machines, one per component (native-testable) |
//! | [`net`] | Form-relay transport for the contact form |
//! | [`config`] | Page tunables with an optional JSON override island |
//! | [`util`] | DOM helpers and the page's exported utility functions |
//! | `components` | Browser controllers wiring DOM events to `state` (`browser` feature) |
//!
//! Without the `browser` feature only the state, config, and transport
//! layers are compiled, which is how the test suite runs.

pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
pub mod components;

#[cfg(feature = "browser")]
mod boot {
    use std::rc::Rc;

    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::components::contact_form::ContactFormController;
    use crate::components::demo_modal::DemoModalController;
    use crate::components::navigation::NavigationController;
    use crate::components::notification::NotificationHost;
    use crate::components::parallax::ParallaxController;
    use crate::components::projects_filter::ProjectsFilter;
    use crate::components::resources::ResourceOptimizer;
    use crate::components::scroll_reveal::ScrollRevealController;
    use crate::components::skills::SkillsAnimation;
    use crate::components::typing::TypingEffectController;
    use crate::config::PortfolioConfig;
    use crate::util::dom;

    /// WASM entry point: install logging, then initialize the page once the
    /// DOM is parsed.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"portfolio: logger already installed".into());
        }

        let Some(document) = dom::document() else {
            return;
        };
        let loading = js_sys::Reflect::get(&document, &"readyState".into())
            .ok()
            .and_then(|v| v.as_string())
            .is_some_and(|state| state == "loading");
        if loading {
            dom::listen(&document, "DOMContentLoaded", |_| init());
        } else {
            init();
        }
    }

    fn init() {
        let Some(document) = dom::document() else {
            return;
        };
        let config = PortfolioConfig::from_document(&document);

        NavigationController::attach(config.nav.clone());
        ProjectsFilter::attach();
        if !SkillsAnimation::attach(&config.skills) {
            log::debug!("skill bars not animated");
        }
        let notifier = Rc::new(NotificationHost::new(config.notification.clone()));
        ContactFormController::attach(notifier);
        if !ScrollRevealController::attach(&config.reveal) {
            log::debug!("scroll reveal not active");
        }
        DemoModalController::attach(&config.modal);
        if !TypingEffectController::attach(config.typing.clone()) {
            log::debug!("no .hero-tagline; typing effect skipped");
        }
        if !ParallaxController::attach(&config.parallax) {
            log::debug!("no .hero-background; parallax skipped");
        }
        ResourceOptimizer::attach(&config.resources);

        let doc = document.clone();
        dom::listen(&document, "visibilitychange", move |_| {
            if doc.hidden() {
                log::debug!("Page hidden");
            } else {
                log::debug!("Page visible");
            }
        });

        log::info!("Portfolio initialized successfully!");
    }
}
