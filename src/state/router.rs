//! View Router
//!
//! Two pages, any reachable from any other. Every navigation scrolls back to
//! the top, including a navigation to the page already showing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::effect::Effect;
use crate::error::TandemError;

/// Top-level page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Prompt generator and future sandbox
    Home,
    /// Mentorship retrospective; the site opens here
    #[default]
    Retro,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Retro];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Retro => "retro",
        }
    }

    /// The page the header's call-to-action leads to
    pub fn other(self) -> Page {
        match self {
            Page::Home => Page::Retro,
            Page::Retro => Page::Home,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "retro" => Ok(Page::Retro),
            _ => Err(TandemError::UnknownPage(s.to_string())),
        }
    }
}

/// Holds the active page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewRouter {
    current: Page,
}

impl ViewRouter {
    pub fn new(initial: Page) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Switch to `page` and ask for a scroll to the top
    pub fn navigate(&mut self, page: Page) -> Effect {
        tracing::debug!(from = %self.current, to = %page, "Navigate");
        self.current = page;
        Effect::ScrollToTop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_retro() {
        assert_eq!(ViewRouter::default().current(), Page::Retro);
    }

    #[test]
    fn test_navigate_scrolls_to_top() {
        let mut router = ViewRouter::new(Page::Home);
        assert_eq!(router.navigate(Page::Retro), Effect::ScrollToTop);
        assert_eq!(router.current(), Page::Retro);

        // Same-page navigation still scrolls
        assert_eq!(router.navigate(Page::Retro), Effect::ScrollToTop);
        assert_eq!(router.current(), Page::Retro);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!("HOME".parse::<Page>().unwrap(), Page::Home);
        assert_eq!("retro".parse::<Page>().unwrap(), Page::Retro);
        assert!("about".parse::<Page>().is_err());
        assert_eq!(Page::Home.other(), Page::Retro);
    }
}
