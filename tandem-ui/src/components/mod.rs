//! UI Components
//!
//! Reusable Leptos components for both pages.

pub mod chart;
pub mod footer;
pub mod insight_card;
pub mod nav;
pub mod prompt_panel;
pub mod sandbox_card;
pub mod stat_card;
pub mod topic_explorer;

pub use chart::ChartCanvas;
pub use footer::SiteFooter;
pub use insight_card::InsightCard;
pub use nav::SiteHeader;
pub use prompt_panel::PromptPanel;
pub use sandbox_card::SandboxCard;
pub use stat_card::StatCard;
pub use topic_explorer::TopicExplorer;
