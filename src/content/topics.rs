//! Topic explorer table
//!
//! Five growth axes the dialogue sessions clustered around. Each topic owns a
//! color, a long description and the dated sessions that belong to it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::content::session::{parse_session, Session};
use crate::error::{TandemError, TandemResult};

/// Topic explorer key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicKey {
    #[default]
    OrgStrategy,
    CareerStability,
    AiExperiments,
    DesignPractice,
    KnowledgeFrameworks,
}

impl TopicKey {
    /// All topics in chart and legend order
    pub const ALL: [TopicKey; 5] = [
        TopicKey::OrgStrategy,
        TopicKey::CareerStability,
        TopicKey::AiExperiments,
        TopicKey::DesignPractice,
        TopicKey::KnowledgeFrameworks,
    ];

    /// ASCII slug for the command line
    pub fn slug(self) -> &'static str {
        match self {
            TopicKey::OrgStrategy => "org-strategy",
            TopicKey::CareerStability => "career-stability",
            TopicKey::AiExperiments => "ai-experiments",
            TopicKey::DesignPractice => "design-practice",
            TopicKey::KnowledgeFrameworks => "knowledge-frameworks",
        }
    }

    /// Display label, also the chart segment label
    pub fn label(self) -> &'static str {
        match self {
            TopicKey::OrgStrategy => "組織策略與權力",
            TopicKey::CareerStability => "職涯定位與心理穩定",
            TopicKey::AiExperiments => "AI 工具與未來實驗",
            TopicKey::DesignPractice => "設計實務與研究方法",
            TopicKey::KnowledgeFrameworks => "知識內化與框架設計",
        }
    }

    /// Position in [`TopicKey::ALL`]
    pub fn index(self) -> usize {
        match self {
            TopicKey::OrgStrategy => 0,
            TopicKey::CareerStability => 1,
            TopicKey::AiExperiments => 2,
            TopicKey::DesignPractice => 3,
            TopicKey::KnowledgeFrameworks => 4,
        }
    }

    /// Key at a chart segment index
    pub fn from_index(index: usize) -> Option<TopicKey> {
        TopicKey::ALL.get(index).copied()
    }

    pub fn detail(self) -> &'static TopicDetail {
        &TOPICS[self.index()]
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TopicKey {
    type Err = TandemError;

    /// Accepts either the slug or the display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TopicKey::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(s) || k.label() == s)
            .ok_or_else(|| TandemError::UnknownTopic(s.to_string()))
    }
}

/// Content bundle behind one topic key
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TopicDetail {
    pub count: u32,
    pub color: &'static str,
    pub description: &'static str,
    /// Session items written `yymmdd - title`
    pub items: &'static [&'static str],
}

impl TopicDetail {
    /// Parse every item into a dated session
    pub fn sessions(&self) -> TandemResult<Vec<Session>> {
        self.items.iter().map(|item| parse_session(item)).collect()
    }

    /// Heading above the item list, with the stored count
    pub fn sessions_heading(&self) -> String {
        format!("關鍵對話 ({})", self.count)
    }

    /// Item lines for display: dated when every item parses, else as stored
    pub fn display_items(&self) -> Vec<String> {
        match self.sessions() {
            Ok(sessions) => sessions
                .into_iter()
                .map(|s| format!("{} {}", s.date.format("%Y.%m.%d"), s.title))
                .collect(),
            Err(e) => {
                tracing::warn!("Showing raw topic items: {}", e);
                self.items.iter().map(|item| item.to_string()).collect()
            }
        }
    }
}

static TOPICS: [TopicDetail; 5] = [
    TopicDetail {
        count: 4,
        color: "#6B8E99",
        description: "「不對事實生氣，而是理解事實背後的動力學。」在高度混亂的組織環境中，對話的核心從單純的情緒抒發轉向「結構性拆解」。我們引入了政治學與經濟學的視角，重新審視跨部門協作中的權力失衡、責任與利益的錯配（Accountability Misalignment）。透過將職場互動視為一場複雜的博弈，我們學習如何在高溝通成本的環境下，精確判斷何時應堅持 Credit、何時該戰略性放手，從而降低身處其中的心理摩擦力。",
        items: &[
            "250820 - 跨部門溝通成本與共享式領導盤點",
            "250926 - 政治學視角：權力結構與利益錯配分析",
            "251003 - 與新 PM 合作挑戰、刺蝟法則應用",
            "251121 - 組織變動下做事之無力感、商業模式重整",
        ],
    },
    TopicDetail {
        count: 4,
        color: "#D4A373",
        description: "「在混亂環境中，建立內在價值的防禦邊界。」當外部評價標準與 R&R（角色與職責）變得模糊時，如何透過自我驗證機制保持穩定是本計畫的關鍵。對話聚焦於如何在「表現區」與「學習區」之間取得動態平衡。我們實踐了「節制感（Moderation）」的概念，學會不再盲目追求 100 分的完美，而是建立心理錨點，將工作環境視為低成本的「實驗場域」，有效避免了因過度輸出而導致的職涯燃盡（Burn-out）。",
        items: &[
            "250912 - 職能成熟度：設計師在 AI 時代的價值定位",
            "251031 - 作品集策略、社群情緒價值反思",
            "251114 - 曼陀號心得：對市場價值的危機意識",
            "251128 - 續約兩難：對「優越感陷阱」的警惕",
        ],
    },
    TopicDetail {
        count: 2,
        color: "#2D4A54",
        description: "「設計師不再是畫布的奴隸，而是意圖的編排者。」這組對話不只停留在工具的操作層次，而是重新定義 AI 時代下的設計職能。我們探討了如何將重複性的勞動「委派（Delegate）」給 AI，藉此擴張設計師的守備範圍。進一步地，我們開啟了對未來設計樣貌的激盪，例如當 AI Agent 取代人類操作介面時（A2UI），設計師如何轉向「靈魂工程師」的角色，為 AI 的產出注入美學意圖與邏輯約束。",
        items: &[
            "250919 - AI 對產品開發團隊角色之泛化影響",
            "251128 - 運用 AI 進行自我探索與職涯定位",
        ],
    },
    TopicDetail {
        count: 2,
        color: "#5E7B84",
        description: "「回歸工藝本質，推動研究的民主化。」即便身處策略層級的討論，專業執行力的磨練仍是設計師的底氣。對話涉及了如何透過純文字編排練習來內化 Layout Sense，以及在大規模組織中維護設計系統與 Icon 管理的高昂成本。我們也探討了「研究民主化」的困境，思考設計師如何從親自下場訪談，轉向擔任「訪談陪跑教練」或「Reviewer」的角色，以應對資源匱乏與時程緊湊的實務挑戰。",
        items: &[
            "251015 - Icon 管理經驗、書封排版練習提升 Sense",
            "251111 - 訪談 Pilot Run 經驗、研究流程系統化",
        ],
    },
    TopicDetail {
        count: 2,
        color: "#BDC9CD",
        description: "「意義是在對話中創造，產出是在框架中累積。」這部分的探討旨在提升「思考的投報率」。我們討論如何高效地將 Coffee Chat、講座、書籍的輸入轉化為可隨時調用的結構化資產。透過 Bloom 分類法與 GCAR 敘事框架，我們嘗試建立「設計協力車」專屬的共學模式。目標是將每一次感性的、發散的互動，最終收斂成具備跨情境轉移價值（Transferable）的思維模型與行動策略。",
        items: &[
            "250801 - 資訊內化策略、GCAR 專案敘事框架",
            "251205 - 商業創新理論、設計協力車未來框架",
        ],
    },
];

/// Total number of sessions across all topics
pub fn total_sessions() -> u32 {
    TopicKey::ALL.iter().map(|k| k.detail().count).sum()
}

/// Every session across all topics, oldest first
pub fn timeline() -> TandemResult<Vec<(TopicKey, Session)>> {
    let mut all = Vec::new();
    for key in TopicKey::ALL {
        for session in key.detail().sessions()? {
            all.push((key, session));
        }
    }
    all.sort_by(|a, b| a.1.date.cmp(&b.1.date).then(a.0.cmp(&b.0)));
    Ok(all)
}
