//! Effect Runner
//!
//! Carries out the [`Effect`]s returned by the state models. Deferred effects
//! become one-shot timers owned by the component that created the runner;
//! they are cancelled when that component unmounts.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use tandem::state::{Effect, SiteState};

#[derive(Clone, Copy)]
pub struct EffectRunner {
    site: RwSignal<SiteState>,
    pulse_timer: StoredValue<Option<Timeout>>,
    scroll_timer: StoredValue<Option<Timeout>>,
}

impl EffectRunner {
    pub fn new(site: RwSignal<SiteState>) -> Self {
        let runner = Self {
            site,
            pulse_timer: store_value(None),
            scroll_timer: store_value(None),
        };
        on_cleanup(move || runner.cancel());
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_one(effect);
        }
    }

    fn run_one(&self, effect: Effect) {
        match effect {
            Effect::ScrollToTop => perform_now(&effect),
            Effect::ClearPulse { generation, after } => {
                let site = self.site;
                let timer = Timeout::new(millis(after), move || {
                    site.try_update(|s| s.home.prompt.clear_pulse(generation));
                });
                // Replacing the old timer cancels it
                self.pulse_timer.update_value(|t| *t = Some(timer));
            }
            Effect::ScrollToAnchor {
                anchor,
                offset_px,
                after,
            } => {
                let timer = Timeout::new(millis(after), move || scroll_to_anchor(anchor, offset_px));
                self.scroll_timer.update_value(|t| *t = Some(timer));
            }
        }
    }

    /// Drop pending timers and settle the pulse they would have cleared
    fn cancel(&self) {
        self.pulse_timer.try_update_value(|t| t.take());
        self.scroll_timer.try_update_value(|t| t.take());
        self.site.try_update(|s| {
            let generation = s.home.prompt.generation();
            s.home.prompt.clear_pulse(generation)
        });
    }
}

/// Perform an immediate effect; deferred ones are ignored here
pub fn perform_now(effect: &Effect) {
    if let Effect::ScrollToTop = effect {
        scroll_to(0.0);
    }
}

fn millis(after: Duration) -> u32 {
    after.as_millis().min(u32::MAX as u128) as u32
}

fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scroll so `anchor` sits `offset_px` below the top; no-op if it is gone
fn scroll_to_anchor(anchor: &str, offset_px: f64) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    if let Some(element) = element {
        scroll_to(element.offset_top() as f64 - offset_px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis() {
        assert_eq!(millis(Duration::from_millis(500)), 500);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
