//! Page configuration: every tunable timing, threshold, and text list.
//!
//! Defaults reproduce the hand-authored page. A page may override any subset
//! by embedding a JSON data island:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "typing": { "texts": ["Hello", "World"] } }
//! </script>
//! ```
//!
//! Unknown keys are ignored and missing keys keep their defaults. A
//! malformed island is logged and the defaults are used instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional JSON configuration island.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

pub const DEFAULT_NAV_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 100.0;
pub const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 100.0;

pub const DEFAULT_NOTIFICATION_LIFETIME_MS: u32 = 5_000;
pub const DEFAULT_NOTIFICATION_FADE_MS: u32 = 300;

pub const DEFAULT_TYPE_MS: u32 = 100;
pub const DEFAULT_HOLD_FULL_MS: u32 = 2_000;
pub const DEFAULT_DELETE_MS: u32 = 50;
pub const DEFAULT_HOLD_EMPTY_MS: u32 = 500;
pub const DEFAULT_TYPING_START_DELAY_MS: u32 = 2_000;

pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const DEFAULT_SKILL_RESTORE_DELAY_MS: u32 = 200;
pub const DEFAULT_MODAL_FADE_MS: u32 = 300;

const DEFAULT_TYPING_TEXTS: [&str; 4] = [
    "Web Developer & Data Structures Expert",
    "Problem Solver & Code Enthusiast",
    "Tech Innovator & Algorithm Master",
    "Full Stack Developer & Competitive Programmer",
];

const DEFAULT_PRELOAD_IMAGES: [&str; 3] = [
    "attached_assets/WhatsApp Image 2025-06-16 at 22.32.13_fdb4f6a9_1751122802972.jpg",
    "attached_assets/image_1751123393418.png",
    "attached_assets/image_1751123521523.png",
];

/// Configuration failures. Never fatal: callers fall back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Top-level page configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub nav: NavConfig,
    pub notification: NotificationConfig,
    pub typing: TypingConfig,
    pub skills: SkillsConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub modal: ModalConfig,
    pub resources: ResourceConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Viewport width above which the mobile menu is force-closed.
    pub breakpoint_px: f64,
    /// Fixed header height added to the scroll offset for section lookup.
    pub header_offset_px: f64,
    /// Scroll offset past which the navbar gets the `scrolled` class.
    pub scrolled_threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_NAV_BREAKPOINT_PX,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub lifetime_ms: u32,
    pub fade_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: DEFAULT_NOTIFICATION_LIFETIME_MS,
            fade_ms: DEFAULT_NOTIFICATION_FADE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub texts: Vec<String>,
    pub type_ms: u32,
    pub hold_full_ms: u32,
    pub delete_ms: u32,
    pub hold_empty_ms: u32,
    pub start_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            texts: DEFAULT_TYPING_TEXTS.iter().map(|s| (*s).to_owned()).collect(),
            type_ms: DEFAULT_TYPE_MS,
            hold_full_ms: DEFAULT_HOLD_FULL_MS,
            delete_ms: DEFAULT_DELETE_MS,
            hold_empty_ms: DEFAULT_HOLD_EMPTY_MS,
            start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
        }
    }
}

/// Intersection observer options shared by the one-shot reveal animations.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

/// Skill progress bar animation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub threshold: f64,
    pub root_margin: String,
    /// Delay between collapsing a bar to `0%` and restoring its width.
    pub restore_delay_ms: u32,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            root_margin: "0px 0px -100px 0px".to_owned(),
            restore_delay_ms: DEFAULT_SKILL_RESTORE_DELAY_MS,
        }
    }
}

impl SkillsConfig {
    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions { threshold: self.threshold, root_margin: self.root_margin.clone() }
    }
}

/// Generic fade/slide-in reveal.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1, root_margin: "0px 0px -50px 0px".to_owned() }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions { threshold: self.threshold, root_margin: self.root_margin.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub speed: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { speed: DEFAULT_PARALLAX_SPEED }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub fade_ms: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { fade_ms: DEFAULT_MODAL_FADE_MS }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub preload_images: Vec<String>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            preload_images: DEFAULT_PRELOAD_IMAGES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value cannot drive the page.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or break a component.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing.texts.is_empty() {
            return Err(ConfigError::Invalid { field: "typing.texts", reason: "must not be empty" });
        }
        if self.typing.texts.iter().any(String::is_empty) {
            return Err(ConfigError::Invalid { field: "typing.texts", reason: "entries must not be empty" });
        }
        if self.typing.type_ms == 0 || self.typing.delete_ms == 0 {
            return Err(ConfigError::Invalid { field: "typing", reason: "tick durations must be positive" });
        }
        if self.notification.lifetime_ms == 0 {
            return Err(ConfigError::Invalid { field: "notification.lifetime_ms", reason: "must be positive" });
        }
        for (field, threshold) in [("skills.threshold", self.skills.threshold), ("reveal.threshold", self.reveal.threshold)] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::Invalid { field, reason: "must be within 0.0..=1.0" });
            }
        }
        if !self.nav.breakpoint_px.is_finite() || self.nav.breakpoint_px <= 0.0 {
            return Err(ConfigError::Invalid { field: "nav.breakpoint_px", reason: "must be positive" });
        }
        Ok(())
    }

    /// Load the override island from the current document, falling back to
    /// defaults when it is absent or invalid.
    #[cfg(feature = "browser")]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}
