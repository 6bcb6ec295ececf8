//! # Tandem
//!
//! Design Tandem - the content, page state and chart models behind a two-page
//! mentorship site, shared by the browser UI (`tandem-ui`), a CLI and a local
//! preview server.
//!
//! ## Features
//!
//! - **Static content**: prompts, insights, dialogue topics and page chrome as
//!   read-only tables
//! - **Page state**: view router, prompt selector, insight filter and topic
//!   explorer as plain models that return the side effects they need
//! - **Charts**: declarative specs, layout math and a one-live-instance slot
//!   over any drawing backend
//! - **Preview**: an Axum server for a built bundle (native only)
//!
//! ## Modules
//!
//! - [`content`]: Static site content
//! - [`state`]: Transient UI state and effects
//! - [`charts`]: Chart specs, geometry and lifecycle
//! - [`audience`]: URL-driven audience spotlight
//! - [`config`]: Configuration loading
//!
//! ## Quick Start
//!
//! ```rust
//! use tandem::config::SiteConfig;
//! use tandem::content::{PromptTopic, TopicKey};
//! use tandem::state::{Page, SiteState};
//!
//! let mut site = SiteState::new(&SiteConfig::default());
//!
//! site.navigate(Page::Home);
//! site.home.prompt.select_topic(PromptTopic::Ai);
//! assert_eq!(site.home.prompt.display(), PromptTopic::Ai.prompt());
//!
//! site.navigate(Page::Retro);
//! site.retro.explorer.select(TopicKey::AiExperiments);
//! assert_eq!(site.retro.explorer.detail().count, 2);
//! ```

pub mod audience;
pub mod charts;
pub mod config;
pub mod content;
pub mod error;
pub mod state;

#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod preview;

// Re-export top-level types for convenience
pub use audience::{Audience, AudienceConfig};

pub use charts::{
    ChartBackend, ChartError, ChartHandle, ChartId, ChartKind, ChartSlot, ChartSpec, Color,
};

pub use config::{Config, ConfigError, ConfigSource, LoggingConfig, PreviewConfig, SiteConfig};

pub use content::{ContentSnapshot, InsightCategory, InsightEntry, PromptTopic, TopicKey};

pub use error::{TandemError, TandemResult};

pub use state::{
    Effect, InsightBoard, InsightFilter, Page, PromptSelector, SiteState, Timing, TopicExplorer,
    ViewRouter,
};

#[cfg(feature = "native")]
pub use preview::{build_router, serve, PreviewError, PreviewState};
