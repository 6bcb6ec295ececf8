//! Site Context
//!
//! The whole site state lives in one signal at the app root, so a page's
//! selections outlive the page's components.

use leptos::*;
use leptos_router::use_location;

use tandem::audience::Audience;
use tandem::config::SiteConfig;
use tandem::state::{Page, SiteState};

use super::effects::perform_now;

/// Id of the optional `<script type="application/json">` holding site config
pub const CONFIG_ELEMENT_ID: &str = "tandem-config";

/// Site state provided to all components
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub site: RwSignal<SiteState>,
    pub config: StoredValue<SiteConfig>,
    /// Who the retro page addresses, from the current URL
    pub audience: Memo<Audience>,
}

/// Provide site state to the component tree. Must run inside the router.
pub fn provide_site_context() {
    let config = load_site_config();
    let site = create_rw_signal(SiteState::new(&config));

    let location = use_location();
    let audience_config = config.audience.clone();
    let audience = create_memo(move |_| {
        Audience::detect(
            &location.pathname.get(),
            &location.hash.get(),
            &location.search.get(),
            &audience_config,
        )
    });

    provide_context(SiteContext {
        site,
        config: store_value(config),
        audience,
    });
}

/// Fetch the site context; panics outside [`provide_site_context`]
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not found")
}

impl SiteContext {
    pub fn page(&self) -> Page {
        self.site.with(|s| s.page())
    }

    /// Switch page and scroll to the top
    pub fn navigate(&self, page: Page) {
        if let Some(effect) = self.site.try_update(|s| s.navigate(page)) {
            perform_now(&effect);
        }
    }
}

/// Site config from the page's inline JSON, else defaults
pub fn load_site_config() -> SiteConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match inline {
        Some(json) => parse_site_config(&json).unwrap_or_else(|e| {
            web_sys::console::error_1(&format!("Invalid site config: {}", e).into());
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    }
}

pub fn parse_site_config(json: &str) -> Result<SiteConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_site_config("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse_site_config(
            r#"{"default_page": "home", "audience": {"keyword": "mira", "spotlight_name": "Mira"}}"#,
        )
        .unwrap();
        assert_eq!(config.default_page, Page::Home);
        assert_eq!(config.audience.keyword, "mira");
        assert_eq!(config.audience.mentor_name, "Golden");
        assert_eq!(config.timing.pulse_ms, 500);
    }

    #[test]
    fn test_bad_page_is_rejected() {
        assert!(parse_site_config(r#"{"default_page": "blog"}"#).is_err());
    }
}
