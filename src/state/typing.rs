//! Typewriter tagline state machine.
//!
//! DESIGN
//! ======
//! Each `tick` produces the text to show and the delay before the next
//! tick, so the browser layer is a plain timer loop. Character positions
//! count Unicode scalar values; slicing never splits a code point.
//!
//! ```text
//!   Typing --(full)--> [hold_full] --> Deleting --(empty)--> [hold_empty] --> Typing(next)
//! ```

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::config::TypingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausingAtFull,
    Deleting,
    PausingAtEmpty,
}

/// One rendered frame of the effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingMachine {
    texts: Vec<String>,
    timings: TypingConfig,
    index: usize,
    chars: usize,
    phase: TypingPhase,
}

impl TypingMachine {
    /// Build a machine over `config.texts`. Returns `None` for an empty
    /// list, which would have nothing to type.
    #[must_use]
    pub fn new(config: TypingConfig) -> Option<Self> {
        if config.texts.is_empty() {
            return None;
        }
        Some(Self { texts: config.texts.clone(), timings: config, index: 0, chars: 0, phase: TypingPhase::Typing })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Index of the string currently being typed or deleted.
    pub fn text_index(&self) -> usize {
        self.index
    }

    pub fn start_delay_ms(&self) -> u32 {
        self.timings.start_delay_ms
    }

    /// Advance one step.
    pub fn tick(&mut self) -> TypingFrame {
        let target_len = self.texts[self.index].chars().count();

        match self.phase {
            TypingPhase::Typing | TypingPhase::PausingAtEmpty => {
                self.phase = TypingPhase::Typing;
                self.chars = (self.chars + 1).min(target_len);
            }
            TypingPhase::Deleting | TypingPhase::PausingAtFull => {
                self.phase = TypingPhase::Deleting;
                self.chars = self.chars.saturating_sub(1);
            }
        }
        let text = prefix(&self.texts[self.index], self.chars).to_owned();

        let next_delay_ms = match self.phase {
            TypingPhase::Typing if self.chars == target_len => {
                self.phase = TypingPhase::PausingAtFull;
                self.timings.hold_full_ms
            }
            TypingPhase::Deleting if self.chars == 0 => {
                self.phase = TypingPhase::PausingAtEmpty;
                self.index = (self.index + 1) % self.texts.len();
                self.timings.hold_empty_ms
            }
            TypingPhase::Deleting => self.timings.delete_ms,
            _ => self.timings.type_ms,
        };

        TypingFrame { text, next_delay_ms }
    }
}

/// First `chars` scalar values of `text`.
#[must_use]
pub fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
