//! Skill bar growth on first sight.

use crate::config::SkillsConfig;
use crate::state::reveal::{COLLAPSED_WIDTH, SKILL_SELECTOR, SkillGrowth};
use crate::util::dom;

pub struct SkillsAnimation;

impl SkillsAnimation {
    /// Observe every `.skill-progress`. Returns `false` when there are none
    /// or observation is unavailable.
    pub fn attach(config: &SkillsConfig) -> bool {
        let bars = dom::query_all(SKILL_SELECTOR);
        if bars.is_empty() {
            return false;
        }
        let delay_ms = config.restore_delay_ms;
        dom::observe_once(&bars, &config.observer_options(), move |bar| {
            let growth = SkillGrowth::plan(&dom::style_value(bar, "width"), delay_ms);
            dom::set_style(bar, "width", COLLAPSED_WIDTH);
            let bar = bar.clone();
            dom::after(growth.delay_ms, move || dom::set_style(&bar, "width", &growth.target_width));
        })
        .is_some()
    }
}
