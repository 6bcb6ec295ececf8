//! Insight Filter
//!
//! A predicate over the fixed insight list. The source table is never touched
//! and table order is kept.

use std::fmt;
use std::str::FromStr;

use crate::content::insights::{InsightCategory, InsightEntry, INSIGHTS};
use crate::error::TandemError;

/// Active insight filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsightFilter {
    #[default]
    All,
    Only(InsightCategory),
}

impl InsightFilter {
    /// Filter buttons in display order
    pub const ALL: [InsightFilter; 3] = [
        InsightFilter::All,
        InsightFilter::Only(InsightCategory::Peak),
        InsightFilter::Only(InsightCategory::Friction),
    ];

    pub fn key(self) -> &'static str {
        match self {
            InsightFilter::All => "all",
            InsightFilter::Only(category) => category.key(),
        }
    }

    /// Label on the filter button
    pub fn label(self) -> &'static str {
        match self {
            InsightFilter::All => "全部",
            InsightFilter::Only(InsightCategory::Peak) => "高峰體驗",
            InsightFilter::Only(InsightCategory::Friction) => "阻力體驗",
        }
    }

    pub fn matches(self, entry: &InsightEntry) -> bool {
        match self {
            InsightFilter::All => true,
            InsightFilter::Only(category) => entry.category == category,
        }
    }
}

impl fmt::Display for InsightFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InsightFilter {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(InsightFilter::All),
            "peak" => Ok(InsightFilter::Only(InsightCategory::Peak)),
            "friction" => Ok(InsightFilter::Only(InsightCategory::Friction)),
            _ => Err(TandemError::UnknownFilter(s.to_string())),
        }
    }
}

/// Retro page insight section state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsightBoard {
    filter: InsightFilter,
}

impl InsightBoard {
    pub fn filter(&self) -> InsightFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: InsightFilter) {
        tracing::debug!(filter = %filter, "Set insight filter");
        self.filter = filter;
    }

    /// Entries passing the current filter, in table order
    pub fn visible(&self) -> impl Iterator<Item = &'static InsightEntry> {
        let filter = self.filter;
        INSIGHTS.iter().filter(move |entry| filter.matches(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keeps_order() {
        let board = InsightBoard::default();
        let ids: Vec<_> = board.visible().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_peak_only() {
        let mut board = InsightBoard::default();
        board.set_filter("peak".parse().unwrap());

        let visible: Vec<_> = board.visible().collect();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|e| e.category == InsightCategory::Peak));
    }

    #[test]
    fn test_friction_then_all() {
        let mut board = InsightBoard::default();
        board.set_filter(InsightFilter::Only(InsightCategory::Friction));
        let ids: Vec<_> = board.visible().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 5]);

        board.set_filter(InsightFilter::All);
        assert_eq!(board.visible().count(), INSIGHTS.len());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("ALL".parse::<InsightFilter>().unwrap(), InsightFilter::All);
        assert!(matches!(
            "highs".parse::<InsightFilter>(),
            Err(TandemError::UnknownFilter(_))
        ));
    }
}
