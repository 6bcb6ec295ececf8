//! Topic Explorer
//!
//! One selected key into the topic table. Legend buttons select by key, the
//! doughnut chart selects by segment index; both land on the same field.

use serde::Serialize;

use crate::content::topics::{total_sessions, TopicDetail, TopicKey};

/// Legend / chart entry for one topic
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TopicSegment {
    pub key: TopicKey,
    pub label: &'static str,
    pub count: u32,
    pub color: &'static str,
    /// Fraction of all sessions
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicExplorer {
    selected: TopicKey,
}

impl TopicExplorer {
    pub fn new(selected: TopicKey) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> TopicKey {
        self.selected
    }

    pub fn is_selected(&self, key: TopicKey) -> bool {
        self.selected == key
    }

    /// Legend click
    pub fn select(&mut self, key: TopicKey) {
        tracing::debug!(topic = key.slug(), "Select explorer topic");
        self.selected = key;
    }

    /// Chart click on segment `index`; out-of-range indices are ignored
    pub fn select_segment(&mut self, index: usize) -> bool {
        match TopicKey::from_index(index) {
            Some(key) => {
                self.select(key);
                true
            }
            None => false,
        }
    }

    /// Content for the selected key
    pub fn detail(&self) -> &'static TopicDetail {
        self.selected.detail()
    }

    /// All topics with their share of sessions, in chart order
    pub fn segments() -> Vec<TopicSegment> {
        let total = total_sessions().max(1) as f64;
        TopicKey::ALL
            .into_iter()
            .map(|key| {
                let detail = key.detail();
                TopicSegment {
                    key,
                    label: key.label(),
                    count: detail.count,
                    color: detail.color,
                    share: detail.count as f64 / total,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_first_topic() {
        let explorer = TopicExplorer::default();
        assert_eq!(explorer.selected(), TopicKey::ALL[0]);
    }

    #[test]
    fn test_detail_follows_selection() {
        let mut explorer = TopicExplorer::default();
        for key in TopicKey::ALL {
            explorer.select(key);
            let detail = explorer.detail();
            assert_eq!(detail, key.detail());
            assert_eq!(detail.count as usize, detail.items.len());
        }
    }

    #[test]
    fn test_segment_and_legend_converge() {
        let mut by_legend = TopicExplorer::default();
        let mut by_chart = TopicExplorer::default();

        by_legend.select(TopicKey::DesignPractice);
        assert!(by_chart.select_segment(3));
        assert_eq!(by_legend, by_chart);
    }

    #[test]
    fn test_out_of_range_segment_is_ignored() {
        let mut explorer = TopicExplorer::new(TopicKey::AiExperiments);
        assert!(!explorer.select_segment(9));
        assert_eq!(explorer.selected(), TopicKey::AiExperiments);
    }

    #[test]
    fn test_segment_shares() {
        let segments = TopicExplorer::segments();
        let total: f64 = segments.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((segments[0].share - 4.0 / 14.0).abs() < 1e-9);
    }
}
