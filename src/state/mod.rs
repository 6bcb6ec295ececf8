//! Site State
//!
//! Transient UI state, owned per page. Nothing here touches the document; the
//! UI crate wraps these models in signals and performs the [`Effect`]s they
//! return.

pub mod effect;
pub mod explorer;
pub mod insights;
pub mod prompt;
pub mod router;

pub use effect::{Effect, Timing};
pub use explorer::{TopicExplorer, TopicSegment};
pub use insights::{InsightBoard, InsightFilter};
pub use prompt::{PromptSelector, PROMPT_DISPLAY_ANCHOR};
pub use router::{Page, ViewRouter};

use crate::config::SiteConfig;

/// Home page state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub prompt: PromptSelector,
}

/// Retro page state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetroState {
    pub insights: InsightBoard,
    pub explorer: TopicExplorer,
}

/// All transient state for the site. Navigation only touches the router, so
/// each page's selections survive a round trip to the other page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteState {
    pub router: ViewRouter,
    pub home: HomeState,
    pub retro: RetroState,
}

impl SiteState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            router: ViewRouter::new(config.default_page),
            home: HomeState {
                prompt: PromptSelector::new(config.timing),
            },
            retro: RetroState::default(),
        }
    }

    pub fn page(&self) -> Page {
        self.router.current()
    }

    pub fn navigate(&mut self, page: Page) -> Effect {
        self.router.navigate(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{InsightCategory, PromptTopic, TopicKey};

    #[test]
    fn test_new_uses_config() {
        let config = SiteConfig {
            default_page: Page::Home,
            ..SiteConfig::default()
        };
        let state = SiteState::new(&config);
        assert_eq!(state.page(), Page::Home);
    }

    #[test]
    fn test_round_trip_keeps_page_state() {
        let mut state = SiteState::new(&SiteConfig::default());

        state.retro.insights.set_filter(InsightFilter::Only(InsightCategory::Peak));
        state.retro.explorer.select(TopicKey::KnowledgeFrameworks);
        let retro_before = state.retro;

        state.navigate(Page::Home);
        state.home.prompt.select_topic(PromptTopic::Portfolio);
        state.navigate(Page::Retro);

        assert_eq!(state.retro, retro_before);

        state.navigate(Page::Home);
        assert_eq!(state.home.prompt.active(), Some(PromptTopic::Portfolio));
    }
}
