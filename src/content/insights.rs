//! Retrospective insight entries

use serde::Serialize;
use std::fmt;

/// Insight category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Peak,
    Friction,
}

impl InsightCategory {
    pub fn key(self) -> &'static str {
        match self {
            InsightCategory::Peak => "peak",
            InsightCategory::Friction => "friction",
        }
    }

    /// Small caps label on the card
    pub fn badge(self) -> &'static str {
        match self {
            InsightCategory::Peak => "High",
            InsightCategory::Friction => "Friction",
        }
    }

    /// Left border accent of the card
    pub fn accent(self) -> &'static str {
        match self {
            InsightCategory::Peak => "#6B8E99",
            InsightCategory::Friction => "#D4A373",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One retrospective record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsightEntry {
    pub id: u32,
    pub category: InsightCategory,
    pub title: &'static str,
    pub context: &'static str,
    pub action: &'static str,
    pub mindset: &'static str,
}

pub static INSIGHTS: [InsightEntry; 5] = [
    InsightEntry {
        id: 1,
        category: InsightCategory::Peak,
        title: "字串平台導入復盤",
        context: "面對系統導入失敗的自我懷疑。",
        action: "學會「點到為止」。",
        mindset: "看清組織架構限制，不再全盤負擔責任。",
    },
    InsightEntry {
        id: 2,
        category: InsightCategory::Peak,
        title: "Future School 計畫",
        context: "計畫暫停後的預期落差。",
        action: "轉換視角至學習區。",
        mindset: "執行的機會本身就是收穫，放下表現壓力。",
    },
    InsightEntry {
        id: 3,
        category: InsightCategory::Peak,
        title: "AI 工作流應用",
        context: "Golden 分享的 AI 履歷分析與 NotebookLM。",
        action: "獲取具體 Use Case 啟發。",
        mindset: "擴展思維邊界，看見工具轉化的可能性。",
    },
    InsightEntry {
        id: 4,
        category: InsightCategory::Friction,
        title: "破碎化的分享",
        context: "內容流於展覽資訊或 Small Talk。",
        action: "未來需更有意識規劃。",
        mindset: "瑣碎內容容易讓對話失焦，應聚焦核心議題。",
    },
    InsightEntry {
        id: 5,
        category: InsightCategory::Friction,
        title: "社交弱連結處理",
        context: "Golden 建議的社交方式難以立即執行。",
        action: "重新評估資源分配。",
        mindset: "雖未完全實行，但已開始潛移默化地影響行為決策。",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_ordered_and_unique() {
        let ids: Vec<_> = INSIGHTS.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_split() {
        let peaks = INSIGHTS
            .iter()
            .filter(|i| i.category == InsightCategory::Peak)
            .count();
        assert_eq!(peaks, 3);
        assert_eq!(INSIGHTS.len() - peaks, 2);
    }
}
