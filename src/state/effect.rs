//! Side effects requested by state transitions
//!
//! Models never touch the document. A transition returns the effects it wants
//! and the UI layer performs them: scrolling immediately, or arming a one-shot
//! timer that is cancelled when the owning view goes away.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing knobs for deferred effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// How long the highlight pulse stays on
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u64,

    /// Delay before scrolling the prompt display into view
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,

    /// Space kept above the prompt display when scrolling to it
    #[serde(default = "default_scroll_offset_px")]
    pub scroll_offset_px: f64,
}

fn default_pulse_ms() -> u64 {
    500
}

fn default_scroll_delay_ms() -> u64 {
    100
}

fn default_scroll_offset_px() -> f64 {
    100.0
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            pulse_ms: default_pulse_ms(),
            scroll_delay_ms: default_scroll_delay_ms(),
            scroll_offset_px: default_scroll_offset_px(),
        }
    }
}

/// A side effect for the UI to carry out
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Smooth-scroll the viewport to the top
    ScrollToTop,

    /// After `after`, clear the highlight pulse if it still belongs to `generation`
    ClearPulse { generation: u64, after: Duration },

    /// After `after`, scroll so the element with id `anchor` sits `offset_px`
    /// below the top of the viewport; skipped if the element is gone
    ScrollToAnchor {
        anchor: &'static str,
        offset_px: f64,
        after: Duration,
    },
}

impl Effect {
    /// Delay before the effect should run
    pub fn delay(&self) -> Duration {
        match self {
            Effect::ScrollToTop => Duration::ZERO,
            Effect::ClearPulse { after, .. } | Effect::ScrollToAnchor { after, .. } => *after,
        }
    }

    pub fn is_deferred(&self) -> bool {
        !self.delay().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = Timing::default();
        assert_eq!(timing.pulse_ms, 500);
        assert_eq!(timing.scroll_delay_ms, 100);
        assert_eq!(timing.scroll_offset_px, 100.0);
    }

    #[test]
    fn test_effect_delay() {
        assert!(!Effect::ScrollToTop.is_deferred());
        let clear = Effect::ClearPulse {
            generation: 1,
            after: Duration::from_millis(500),
        };
        assert_eq!(clear.delay(), Duration::from_millis(500));
        assert!(clear.is_deferred());
    }
}
