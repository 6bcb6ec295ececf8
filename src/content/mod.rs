//! Static Content
//!
//! Immutable tables the site renders from. Keys into these tables are closed
//! enums, so every lookup resolves.
//!
//! - [`prompts`]: seed prompts, sandbox cards, dialogue-engine steps
//! - [`insights`]: retrospective peak/friction entries
//! - [`topics`]: topic explorer bundles and their sessions
//! - [`pages`]: headers, footers and retro page copy

pub mod insights;
pub mod pages;
pub mod prompts;
pub mod session;
pub mod topics;

pub use insights::{InsightCategory, InsightEntry, INSIGHTS};
pub use pages::{FooterContent, HeaderContent, ImpactHighlight, KeyStat, NavSection};
pub use prompts::{EngineStep, PromptTopic, SandboxCard, ENGINE_STEPS, PROMPT_PLACEHOLDER, SANDBOX_CARDS};
pub use session::{parse_session, Session};
pub use topics::{TopicDetail, TopicKey};

use serde::Serialize;

use crate::charts::ChartSpec;
use crate::error::TandemResult;
use crate::state::router::Page;

/// Prompt entry in a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct PromptRecord {
    pub key: PromptTopic,
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Topic entry in a snapshot, with parsed sessions
#[derive(Debug, Clone, Serialize)]
pub struct TopicRecord {
    pub key: TopicKey,
    pub label: &'static str,
    #[serde(flatten)]
    pub detail: TopicDetail,
    pub sessions: Vec<Session>,
}

impl TopicRecord {
    pub fn for_key(key: TopicKey) -> TandemResult<Self> {
        let detail = *key.detail();
        Ok(Self {
            key,
            label: key.label(),
            sessions: detail.sessions()?,
            detail,
        })
    }
}

/// Per-page chrome in a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub page: Page,
    pub header: HeaderContent,
    pub footer: FooterContent,
}

/// Everything the site renders, as one serializable document
#[derive(Debug, Clone, Serialize)]
pub struct ContentSnapshot {
    pub version: &'static str,
    pub prompts: Vec<PromptRecord>,
    pub sandbox: &'static [SandboxCard],
    pub engine_steps: &'static [EngineStep],
    pub insights: &'static [InsightEntry],
    pub topics: Vec<TopicRecord>,
    pub key_stats: &'static [KeyStat],
    pub impact_highlights: &'static [ImpactHighlight],
    pub pages: Vec<PageRecord>,
    pub charts: Vec<ChartSpec>,
}

impl ContentSnapshot {
    /// Collect the full snapshot; fails only if a session item is malformed
    pub fn collect() -> TandemResult<Self> {
        let prompts = PromptTopic::ALL
            .into_iter()
            .map(|key| PromptRecord {
                key,
                label: key.button_label(),
                prompt: key.prompt(),
            })
            .collect();

        let topics = TopicKey::ALL
            .into_iter()
            .map(TopicRecord::for_key)
            .collect::<TandemResult<Vec<_>>>()?;

        let pages = Page::ALL
            .into_iter()
            .map(|page| PageRecord {
                page,
                header: pages::header(page),
                footer: pages::footer(page),
            })
            .collect();

        let charts = crate::charts::ChartId::ALL
            .into_iter()
            .map(ChartSpec::for_chart)
            .collect::<TandemResult<Vec<_>>>()?;

        Ok(Self {
            version: env!("CARGO_PKG_VERSION"),
            prompts,
            sandbox: &SANDBOX_CARDS,
            engine_steps: &ENGINE_STEPS,
            insights: &INSIGHTS,
            topics,
            key_stats: &pages::KEY_STATS,
            impact_highlights: &pages::IMPACT_HIGHLIGHTS,
            pages,
            charts,
        })
    }

    pub fn to_json_pretty(&self) -> TandemResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_contains_every_table() {
        let snapshot = ContentSnapshot::collect().unwrap();
        assert_eq!(snapshot.prompts.len(), 3);
        assert_eq!(snapshot.insights.len(), 5);
        assert_eq!(snapshot.topics.len(), 5);
        assert_eq!(snapshot.pages.len(), 2);
        assert_eq!(snapshot.charts.len(), 4);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = ContentSnapshot::collect().unwrap().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["prompts"][0]["key"], "senior");
        assert_eq!(value["insights"][3]["category"], "friction");
        assert_eq!(value["topics"][0]["key"], "org-strategy");
        assert_eq!(value["topics"][0]["count"], 4);
        assert_eq!(value["topics"][0]["sessions"][0]["date"], "2025-08-20");
        assert_eq!(value["pages"][1]["page"], "retro");
    }
}
