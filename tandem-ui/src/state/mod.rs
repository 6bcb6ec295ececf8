//! State Management
//!
//! Site state context and the runner for deferred effects.

pub mod effects;
pub mod site;

pub use effects::EffectRunner;
pub use site::{provide_site_context, use_site, SiteContext};
