//! Prompt generator content for the home page
//!
//! The three seed prompts, the placeholder shown before any selection, the
//! four "future sandbox" cards and the dialogue-engine steps.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::TandemError;

/// Text shown in the prompt display before a topic is chosen
pub const PROMPT_PLACEHOLDER: &str = "點擊下方按鈕，為你們的對話實驗選擇一個起點...";

/// Prompt topic key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTopic {
    Senior,
    Ai,
    Portfolio,
}

impl PromptTopic {
    /// All topics in button order
    pub const ALL: [PromptTopic; 3] = [PromptTopic::Senior, PromptTopic::Ai, PromptTopic::Portfolio];

    /// Key used in URLs and on the command line
    pub fn key(self) -> &'static str {
        match self {
            PromptTopic::Senior => "senior",
            PromptTopic::Ai => "ai",
            PromptTopic::Portfolio => "portfolio",
        }
    }

    /// Label on the selector button
    pub fn button_label(self) -> &'static str {
        match self {
            PromptTopic::Senior => "Future Senior",
            PromptTopic::Ai => "AI Design",
            PromptTopic::Portfolio => "Portfolio",
        }
    }

    /// The seed prompt for this topic
    pub fn prompt(self) -> &'static str {
        match self {
            PromptTopic::Senior => {
                "「假設未來五年的 Senior 設計師不需畫圖，他們的主要工作是『引導 AI 代理人進行多維度的決策實驗』。這對現有的職涯晉升標準會造成什麼衝擊？」"
            }
            PromptTopic::Ai => {
                "「如果 AI 時代下的設計不再有『固定介面』，而是根據使用者的當下情緒即時生成。設計師該如何設計這種『流動的意圖』？」"
            }
            PromptTopic::Portfolio => {
                "「未來的作品集如果是一段『你與 AI 共同解決問題的錄影回放』，面試官會從中尋找什麼樣的獨特信號？」"
            }
        }
    }
}

impl fmt::Display for PromptTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PromptTopic {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PromptTopic::ALL
            .into_iter()
            .find(|t| t.key() == wanted)
            .ok_or_else(|| TandemError::UnknownPrompt(s.to_string()))
    }
}

/// One card in the future sandbox grid
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SandboxCard {
    pub target: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: [&'static str; 3],
    /// Prompt opened when the card is clicked; hover-only cards have none
    pub topic: Option<PromptTopic>,
}

impl SandboxCard {
    /// "Target 01" style badge
    pub fn badge(&self) -> String {
        format!("Target {:02}", self.target)
    }
}

pub static SANDBOX_CARDS: [SandboxCard; 4] = [
    SandboxCard {
        target: 1,
        icon: "🎓",
        title: "未來的 Senior 是什麼樣的？",
        summary: "當技術門檻降低，資深者的價值在於「決策品質」還是「知識編排」？探討從執行者轉向「架構師」的軌跡。",
        tags: ["#角色重定義", "#策略思考", "#經驗資產化"],
        topic: Some(PromptTopic::Senior),
    },
    SandboxCard {
        target: 2,
        icon: "🤖",
        title: "AI 時代下的設計？",
        summary: "設計不再是畫布上的像素，而是「意圖」的傳達。探討人機共生的工作流，以及設計師如何成為 AI 的「靈魂工程師」。",
        tags: ["#意圖驅動", "#人機共振", "#設計系統2.0"],
        topic: Some(PromptTopic::Ai),
    },
    SandboxCard {
        target: 3,
        icon: "📂",
        title: "作品集會長什麼樣？",
        summary: "捨棄靜態的 Case Study。未來的作品集是否是一套「可互動的思考模型」？展示你的「推理過程」而非最後的 UI。",
        tags: ["#動態推演", "#思考透明化", "#互動式自傳"],
        topic: Some(PromptTopic::Portfolio),
    },
    SandboxCard {
        target: 4,
        icon: "🛰️",
        title: "Generative AI 是什麼樣的特定樣貌？",
        summary: "當 Agent 代替人類操作 UI。探討「非人類使用者」的界面設計，以及如何建立一套讓 AI 能理解且安全操作的語言。",
        tags: ["#AgenticUI", "#語義介面", "#未來交互機制"],
        topic: None,
    },
];

/// A step of the dialogue engine timeline
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EngineStep {
    pub title: &'static str,
    pub detail: &'static str,
}

pub static ENGINE_STEPS: [EngineStep; 3] = [
    EngineStep {
        title: "Step 01：提出命題 (Prompting)",
        detail: "「假設 2030 年作品集不再需要網站，那會是什麼？」",
    },
    EngineStep {
        title: "Step 02：對話激盪 (Resonance)",
        detail: "兩人的視角交錯，利用 AI 產出極端案例（Extremes）來挑戰邊界。",
    },
    EngineStep {
        title: "Step 03：意義收斂 (Synthesis)",
        detail: "在對話中創造出的「新詞彙」或「新模型」，即是實驗的產出。",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topic_keys() {
        assert_eq!("senior".parse::<PromptTopic>().unwrap(), PromptTopic::Senior);
        assert_eq!(" AI ".parse::<PromptTopic>().unwrap(), PromptTopic::Ai);
        assert!(matches!(
            "gen-ai".parse::<PromptTopic>(),
            Err(TandemError::UnknownPrompt(_))
        ));
    }

    #[test]
    fn test_prompts_are_distinct() {
        let prompts: Vec<_> = PromptTopic::ALL.iter().map(|t| t.prompt()).collect();
        assert_eq!(prompts.len(), 3);
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
        assert!(prompts.iter().all(|p| *p != PROMPT_PLACEHOLDER));
    }

    #[test]
    fn test_only_last_card_is_hover_only() {
        let bound: Vec<_> = SANDBOX_CARDS.iter().filter_map(|c| c.topic).collect();
        assert_eq!(bound, PromptTopic::ALL.to_vec());
        assert!(SANDBOX_CARDS[3].topic.is_none());
        assert_eq!(SANDBOX_CARDS[0].badge(), "Target 01");
    }
}
