//! One-shot reveal animations driven by viewport intersection.
//!
//! Skill bars grow from `0%` back to their authored width; generic targets
//! fade and slide up. Either way each element animates once and is then
//! dropped from observation.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Elements that fade/slide in on first sight.
pub const REVEAL_SELECTOR: &str = ".about-content, .skill-category, .achievement-card, .profile-card, .cert-item, .project-card, .contact-item, .stat-card";

pub const SKILL_SELECTOR: &str = ".skill-progress";

/// Inline style applied before a reveal target has been seen.
pub const HIDDEN_STYLE: [(&str, &str); 3] =
    [("opacity", "0"), ("transform", "translateY(30px)"), ("transition", "all 0.6s ease")];

/// Inline style applied once a reveal target intersects.
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

pub const COLLAPSED_WIDTH: &str = "0%";

/// Tracks which observed elements have already animated.
///
/// Elements are keyed by their index in the observed list.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report. Returns `true` only the first time
    /// `index` is seen intersecting.
    pub fn intersected(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Width animation for one skill bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillGrowth {
    /// Width to restore after the delay. Empty clears the inline width so the
    /// stylesheet width applies.
    pub target_width: String,
    pub delay_ms: u32,
}

impl SkillGrowth {
    /// Plan the growth of a bar whose inline width is `authored`.
    #[must_use]
    pub fn plan(authored: &str, delay_ms: u32) -> Self {
        Self { target_width: authored.trim().to_owned(), delay_ms }
    }
}
