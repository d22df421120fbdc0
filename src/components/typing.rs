//! Hero tagline typewriter.

use std::time::Duration;

use crate::config::TypingConfig;
use crate::state::typing::TypingMachine;
use crate::util::dom;

pub struct TypingEffectController;

impl TypingEffectController {
    /// Start the effect on `.hero-tagline`. Runs for the page's lifetime.
    pub fn attach(config: TypingConfig) -> bool {
        let Some(tagline) = dom::query(".hero-tagline") else {
            return false;
        };
        let Some(mut machine) = TypingMachine::new(config) else {
            return false;
        };
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(u64::from(machine.start_delay_ms()))).await;
            loop {
                let frame = machine.tick();
                tagline.set_text_content(Some(&frame.text));
                gloo_timers::future::sleep(Duration::from_millis(u64::from(frame.next_delay_ms))).await;
            }
        });
        true
    }
}
