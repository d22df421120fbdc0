//! Scroll-proportional background offset.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

pub const PARALLAX_SELECTOR: &str = ".hero-background";

/// Vertical offset for a scroll position.
#[must_use]
pub fn offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// CSS `transform` value for a scroll position.
#[must_use]
pub fn transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", offset(scroll_y, speed))
}
