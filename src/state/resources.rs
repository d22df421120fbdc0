//! Page resource helpers: scroll throttling, lazy images, preload hints.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_SRC_ATTR: &str = "data-src";

/// Coalesces bursts of scroll events into one animation frame.
#[derive(Clone, Debug, Default)]
pub struct ScrollThrottle {
    ticking: bool,
    frames: u64,
}

impl ScrollThrottle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A scroll event arrived. Returns `true` when the caller should
    /// request an animation frame.
    pub fn scroll_event(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// The requested frame ran.
    pub fn frame_ran(&mut self) {
        self.ticking = false;
        self.frames += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }

    /// Number of frames that have run.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Source to load for a lazy image, or `None` when there is nothing to swap.
#[must_use]
pub fn lazy_source(data_src: Option<&str>) -> Option<&str> {
    data_src.map(str::trim).filter(|src| !src.is_empty())
}

/// One `<link rel="preload">` hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreloadLink {
    pub rel: &'static str,
    pub as_type: &'static str,
    pub href: String,
}

/// Preload hints for the configured critical images. Blank and duplicate
/// entries are skipped.
#[must_use]
pub fn preload_links(images: &[String]) -> Vec<PreloadLink> {
    let mut links: Vec<PreloadLink> = Vec::with_capacity(images.len());
    for href in images.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if links.iter().any(|link| link.href == href) {
            continue;
        }
        links.push(PreloadLink { rel: "preload", as_type: "image", href: href.to_owned() });
    }
    links
}
