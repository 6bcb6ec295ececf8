//! Prompt Selector
//!
//! Home page state: which seed prompt is showing, which topic button is
//! active, and whether the display is pulsing.
//!
//! Each pulse gets a new generation number. The clear scheduled by a pulse
//! only applies while that pulse is still the latest, so clicking twice in
//! quick succession never lets the first timer cut the second pulse short.

use std::time::Duration;

use super::effect::{Effect, Timing};
use crate::content::prompts::{PromptTopic, PROMPT_PLACEHOLDER};

/// Element id of the prompt display region
pub const PROMPT_DISPLAY_ANCHOR: &str = "prompt-display";

#[derive(Debug, Clone, PartialEq)]
pub struct PromptSelector {
    display: &'static str,
    active: Option<PromptTopic>,
    pulse: bool,
    generation: u64,
    timing: Timing,
}

impl Default for PromptSelector {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl PromptSelector {
    pub fn new(timing: Timing) -> Self {
        Self {
            display: PROMPT_PLACEHOLDER,
            active: None,
            pulse: false,
            generation: 0,
            timing,
        }
    }

    /// Text currently in the prompt display
    pub fn display(&self) -> &'static str {
        self.display
    }

    pub fn active(&self) -> Option<PromptTopic> {
        self.active
    }

    pub fn is_active(&self, topic: PromptTopic) -> bool {
        self.active == Some(topic)
    }

    /// Whether the highlight ring is on
    pub fn pulse(&self) -> bool {
        self.pulse
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show the prompt for `topic`, mark it active and start a pulse
    pub fn select_topic(&mut self, topic: PromptTopic) -> Vec<Effect> {
        tracing::debug!(topic = %topic, "Select prompt topic");

        self.display = topic.prompt();
        self.active = Some(topic);
        self.pulse = true;
        self.generation += 1;

        vec![Effect::ClearPulse {
            generation: self.generation,
            after: Duration::from_millis(self.timing.pulse_ms),
        }]
    }

    /// [`select_topic`](Self::select_topic), then bring the display into view
    pub fn show_topic(&mut self, topic: PromptTopic) -> Vec<Effect> {
        let mut effects = self.select_topic(topic);
        effects.push(Effect::ScrollToAnchor {
            anchor: PROMPT_DISPLAY_ANCHOR,
            offset_px: self.timing.scroll_offset_px,
            after: Duration::from_millis(self.timing.scroll_delay_ms),
        });
        effects
    }

    /// Timer callback: turn the pulse off if `generation` is still current.
    /// Returns whether anything changed.
    pub fn clear_pulse(&mut self, generation: u64) -> bool {
        if self.pulse && generation == self.generation {
            self.pulse = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let selector = PromptSelector::default();
        assert_eq!(selector.display(), PROMPT_PLACEHOLDER);
        assert_eq!(selector.active(), None);
        assert!(!selector.pulse());
    }

    #[test]
    fn test_select_every_topic() {
        let mut selector = PromptSelector::default();
        for topic in PromptTopic::ALL {
            selector.select_topic(topic);
            assert_eq!(selector.display(), topic.prompt());
            assert!(selector.is_active(topic));
        }
    }

    #[test]
    fn test_select_schedules_pulse_clear() {
        let mut selector = PromptSelector::default();
        let effects = selector.select_topic(PromptTopic::Ai);
        assert!(selector.pulse());
        assert_eq!(
            effects,
            vec![Effect::ClearPulse {
                generation: 1,
                after: Duration::from_millis(500),
            }]
        );

        assert!(selector.clear_pulse(1));
        assert!(!selector.pulse());
        // A second firing is a no-op
        assert!(!selector.clear_pulse(1));
    }

    #[test]
    fn test_stale_clear_keeps_newer_pulse() {
        let mut selector = PromptSelector::default();
        selector.select_topic(PromptTopic::Senior);
        selector.select_topic(PromptTopic::Portfolio);

        assert!(!selector.clear_pulse(1));
        assert!(selector.pulse());
        assert!(selector.clear_pulse(2));
        assert!(!selector.pulse());
    }

    #[test]
    fn test_show_topic_scrolls_after_delay() {
        let timing = Timing {
            pulse_ms: 300,
            scroll_delay_ms: 50,
            scroll_offset_px: 80.0,
        };
        let mut selector = PromptSelector::new(timing);
        let effects = selector.show_topic(PromptTopic::Senior);

        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[1],
            Effect::ScrollToAnchor {
                anchor: PROMPT_DISPLAY_ANCHOR,
                offset_px: 80.0,
                after: Duration::from_millis(50),
            }
        );
        assert_eq!(selector.display(), PromptTopic::Senior.prompt());
    }

    #[test]
    fn test_senior_ai_senior() {
        let mut selector = PromptSelector::default();

        selector.select_topic(PromptTopic::Senior);
        let first = selector.display();
        selector.select_topic(PromptTopic::Ai);
        assert_ne!(selector.display(), first);
        selector.select_topic(PromptTopic::Senior);

        assert_eq!(selector.display(), first);
        assert_eq!(selector.active(), Some(PromptTopic::Senior));
    }
}
