//! Navigation bar state: mobile menu toggle and scroll-driven link highlight.
//!
//! DESIGN
//! ======
//! The menu is a single open/closed flag mirrored onto both `#nav-menu` and
//! `#hamburger`. The active link is keyed by section id; the browser layer
//! maps it back to the `.nav-link[href="#id"]` element.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavConfig;

/// Vertical extent of one `section[id]`, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Result of processing one scroll event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    /// Whether the navbar should carry the `scrolled` class.
    pub scrolled: bool,
    /// Newly active section id, when the highlight changed.
    pub activated: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NavState {
    config: NavConfig,
    menu_open: bool,
    active: Option<String>,
}

impl NavState {
    #[must_use]
    pub fn new(config: NavConfig) -> Self {
        Self { config, menu_open: false, active: None }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Section id of the currently highlighted link.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Flip the mobile menu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the mobile menu. Returns `true` when it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// A link targeting an existing section was clicked.
    pub fn link_clicked(&mut self, section_id: &str) {
        self.menu_open = false;
        self.active = Some(section_id.to_owned());
    }

    /// A document click landed somewhere. Clicks inside the menu or on its
    /// toggle leave it alone.
    pub fn document_clicked(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if inside_menu || inside_toggle {
            return false;
        }
        self.close_menu()
    }

    /// Viewport resized. Closes the menu when wider than the breakpoint.
    pub fn resized(&mut self, viewport_width: f64) -> bool {
        if viewport_width > self.config.breakpoint_px {
            return self.close_menu();
        }
        false
    }

    /// Recompute navbar and highlight state for a scroll offset.
    ///
    /// When no section contains the probe line the previous highlight is
    /// kept.
    pub fn scrolled(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> ScrollUpdate {
        let scrolled = scroll_y > self.config.scrolled_threshold_px;
        let probe = scroll_y + self.config.header_offset_px;
        let mut activated = None;
        if let Some(id) = active_section(sections, probe) {
            if self.active.as_deref() != Some(id) {
                self.active = Some(id.to_owned());
                activated = Some(id.to_owned());
            }
        }
        ScrollUpdate { scrolled, activated }
    }
}

/// Id of the section whose bounds contain `probe`. Later sections win when
/// bounds overlap.
#[must_use]
pub fn active_section(sections: &[SectionBounds], probe: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Section id named by an in-page link (`#about` -> `about`).
#[must_use]
pub fn section_id_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Link `href` selecting the given section id.
#[must_use]
pub fn href_for_section(section_id: &str) -> String {
    format!("#{section_id}")
}
