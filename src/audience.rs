//! Audience Spotlight
//!
//! The retro page can be addressed to one mentee by name. When the page URL
//! mentions the configured keyword anywhere in its path, hash or query, the
//! mentee's name replaces the generic one and the hero image is shown.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::content::pages::role_paragraph;

/// Spotlight configuration (`[site.audience]`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AudienceConfig {
    /// URL keyword, matched case-insensitively
    #[serde(default = "default_keyword")]
    pub keyword: String,

    #[serde(default = "default_spotlight_name")]
    pub spotlight_name: String,

    #[serde(default = "default_mentee_name")]
    pub mentee_name: String,

    #[serde(default = "default_mentor_name")]
    pub mentor_name: String,

    #[serde(default = "default_hero_image")]
    pub hero_image: String,
}

fn default_keyword() -> String {
    "valtina".to_string()
}

fn default_spotlight_name() -> String {
    "Valtina".to_string()
}

fn default_mentee_name() -> String {
    "Mentee".to_string()
}

fn default_mentor_name() -> String {
    "Golden".to_string()
}

fn default_hero_image() -> String {
    "/assets/tandem-2025.png".to_string()
}

impl Default for AudienceConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            spotlight_name: default_spotlight_name(),
            mentee_name: default_mentee_name(),
            mentor_name: default_mentor_name(),
            hero_image: default_hero_image(),
        }
    }
}

impl AudienceConfig {
    /// Case-insensitive literal matcher for the keyword; `None` when empty
    pub fn matcher(&self) -> Option<Regex> {
        if self.keyword.trim().is_empty() {
            return None;
        }
        RegexBuilder::new(&regex::escape(self.keyword.trim()))
            .case_insensitive(true)
            .build()
            .ok()
    }
}

/// Who the retro page is addressed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Audience {
    pub mentee: String,
    pub mentor: String,
    /// Hero image to show, only when spotlighted
    pub hero_image: Option<String>,
}

impl Audience {
    /// Generic audience, no spotlight
    pub fn generic(config: &AudienceConfig) -> Self {
        Self {
            mentee: config.mentee_name.clone(),
            mentor: config.mentor_name.clone(),
            hero_image: None,
        }
    }

    /// Spotlighted audience
    pub fn spotlight(config: &AudienceConfig) -> Self {
        Self {
            mentee: config.spotlight_name.clone(),
            mentor: config.mentor_name.clone(),
            hero_image: Some(config.hero_image.clone()),
        }
    }

    /// Inspect the location parts of the current URL
    pub fn detect(path: &str, hash: &str, search: &str, config: &AudienceConfig) -> Self {
        let spotlighted = config
            .matcher()
            .map(|re| [path, hash, search].iter().any(|part| re.is_match(part)))
            .unwrap_or(false);

        if spotlighted {
            tracing::debug!(keyword = %config.keyword, "Audience spotlight on");
            Self::spotlight(config)
        } else {
            Self::generic(config)
        }
    }

    /// Same as [`Audience::detect`] for a full URL or a bare path
    pub fn detect_url(url: &str, config: &AudienceConfig) -> Self {
        let (path, search, hash) = split_location(url);
        Self::detect(path, hash, search, config)
    }

    pub fn is_spotlight(&self) -> bool {
        self.hero_image.is_some()
    }

    /// Role section paragraph with the names filled in
    pub fn role_paragraph(&self) -> String {
        role_paragraph(&self.mentee, &self.mentor)
    }
}

/// Split a URL into `(path, search, hash)` the way `window.location` does
pub fn split_location(url: &str) -> (&str, &str, &str) {
    let rest = match url.find("://") {
        Some(scheme_end) => {
            let after = &url[scheme_end + 3..];
            match after.find(|c: char| matches!(c, '/' | '?' | '#')) {
                Some(i) => &after[i..],
                None => "",
            }
        }
        None => url,
    };

    let (rest, hash) = match rest.find('#') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    let (path, search) = match rest.find('?') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    (path, search, hash)
}
