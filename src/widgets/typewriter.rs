//! Hero headline typewriter.
//!
//! Types a phrase one character at a time, holds it, deletes it and moves on
//! to the next phrase, wrapping after the last.

use std::time::Duration;

/// Step timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between typed characters.
    pub type_step: Duration,
    /// Delay between deleted characters.
    pub delete_step: Duration,
    /// How long a complete phrase stays on screen.
    pub hold: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_step: Duration::from_millis(80),
            delete_step: Duration::from_millis(40),
            hold: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Cycling typewriter effect.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
    next_step: Duration,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Typewriter over `phrases`, starting at time zero with nothing typed.
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            next_step: timing.type_step,
            timing,
        }
    }

    /// Index of the phrase being typed.
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Currently visible text.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Catch up to `now`. Returns true when the visible text changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        let mut changed = false;
        while now >= self.next_step {
            let delay = self.step();
            changed = true;
            // Zero delays would never catch up.
            self.next_step += delay.max(Duration::from_millis(1));
        }
        changed
    }

    fn step(&mut self) -> Duration {
        let len = self.phrases[self.index].chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Holding;
                    self.timing.hold
                } else {
                    self.timing.type_step
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.timing.delete_step
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.timing.type_step
                } else {
                    self.timing.delete_step
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn timing() -> TypewriterTiming {
        TypewriterTiming {
            type_step: ms(10),
            delete_step: ms(5),
            hold: ms(100),
        }
    }

    #[test]
    fn types_one_char_per_step() {
        let mut tw = Typewriter::new(vec!["AI".into(), "Data".into()], timing());
        assert_eq!(tw.text(), "");
        assert!(tw.tick(ms(10)));
        assert_eq!(tw.text(), "A");
        tw.tick(ms(20));
        assert_eq!(tw.text(), "AI");
    }

    #[test]
    fn holds_then_deletes_then_moves_on() {
        let mut tw = Typewriter::new(vec!["AI".into(), "Data".into()], timing());
        tw.tick(ms(20));
        // hold for 100ms
        assert!(!tw.tick(ms(119)));
        assert_eq!(tw.text(), "AI");
        tw.tick(ms(120));
        tw.tick(ms(125));
        assert_eq!(tw.text(), "A");
        tw.tick(ms(130));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
        tw.tick(ms(140));
        assert_eq!(tw.text(), "D");
    }

    #[test]
    fn wraps_after_last_phrase() {
        let mut tw = Typewriter::new(vec!["A".into()], timing());
        tw.tick(ms(10)); // typed
        tw.tick(ms(110)); // hold over
        tw.tick(ms(115)); // deleted
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        let mut tw = Typewriter::new(vec!["Ünïcode".into()], timing());
        tw.tick(ms(20));
        assert_eq!(tw.text(), "Ün");
    }

    #[test]
    fn no_phrases_stays_blank() {
        let mut tw = Typewriter::new(Vec::new(), timing());
        assert!(!tw.tick(ms(1000)));
        assert_eq!(tw.text(), "");
    }
}
