//! Page chrome and retrospective copy
//!
//! Header and footer data for both pages (one shared header component renders
//! either), plus the retro page's key stats, impact highlights and role copy.

use serde::Serialize;

use crate::state::router::Page;

/// In-page anchor link in the header
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavSection {
    pub anchor: &'static str,
    pub label: &'static str,
}

/// Everything the shared header needs for one page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeaderContent {
    pub brand: &'static str,
    pub subtitle: &'static str,
    pub subtitle_color: Option<&'static str>,
    /// The brand is a button back to this page, if any
    pub brand_target: Option<Page>,
    pub sections: &'static [NavSection],
    pub cta_label: &'static str,
    pub cta_target: Page,
    pub cta_color: &'static str,
}

/// Footer lines for one page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FooterContent {
    pub headline: &'static str,
    pub tagline: Option<&'static str>,
    pub credit_label: &'static str,
    pub credit_url: &'static str,
}

pub const BRAND: &str = "設計協力車";
pub const CREDIT_URL: &str = "http://goldentseng.com/";

static HOME_SECTIONS: [NavSection; 3] = [
    NavSection { anchor: "manifesto", label: "實驗宣言" },
    NavSection { anchor: "sandbox", label: "未來沙盒" },
    NavSection { anchor: "engine", label: "對話引擎" },
];

static RETRO_SECTIONS: [NavSection; 4] = [
    NavSection { anchor: "overview", label: "總覽" },
    NavSection { anchor: "roles", label: "角色定位" },
    NavSection { anchor: "insights", label: "體驗回顧" },
    NavSection { anchor: "value", label: "價值與未來" },
];

/// Header content for a page
pub fn header(page: Page) -> HeaderContent {
    match page {
        Page::Home => HeaderContent {
            brand: BRAND,
            subtitle: "實驗室 2.0",
            subtitle_color: Some("#E1B382"),
            brand_target: None,
            sections: &HOME_SECTIONS,
            cta_label: "成長回顧",
            cta_target: Page::Retro,
            cta_color: "#F6E0C9",
        },
        Page::Retro => HeaderContent {
            brand: BRAND,
            subtitle: "Retro 2025",
            subtitle_color: None,
            brand_target: Some(Page::Home),
            sections: &RETRO_SECTIONS,
            cta_label: "未來實驗室",
            cta_target: Page::Home,
            cta_color: "#E0E7E9",
        },
    }
}

/// Footer content for a page
pub fn footer(page: Page) -> FooterContent {
    match page {
        Page::Home => FooterContent {
            headline: "Future Narrative Lab | Prototype 01",
            tagline: Some("「對話不是為了達成共識，而是為了看見更多的可能。」"),
            credit_label: "Golden (http://goldentseng.com/)",
            credit_url: CREDIT_URL,
        },
        Page::Retro => FooterContent {
            headline: "© 2025 Design Tandem Project.",
            tagline: None,
            credit_label: "Golden (http://goldentseng.com/)",
            credit_url: CREDIT_URL,
        },
    }
}

/// Headline figure on the retro hero
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeyStat {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub static KEY_STATS: [KeyStat; 4] = [
    KeyStat { value: "9.0", label: "心理狀態改變", color: "#6B8E99" },
    KeyStat { value: "8.5", label: "信任程度", color: "#D4A373" },
    KeyStat { value: "8.0", label: "關係連結", color: "#6B8E99" },
    KeyStat { value: "14+", label: "對話次數", color: "#D4A373" },
];

/// Scored bullet beside the impact chart
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImpactHighlight {
    pub heading: &'static str,
    pub detail: &'static str,
    /// `None` renders the neutral gray dot
    pub color: Option<&'static str>,
}

pub static IMPACT_HIGHLIGHTS: [ImpactHighlight; 3] = [
    ImpactHighlight {
        heading: "心理狀態 (9/10):",
        detail: "焦慮感顯著降低，學會了「點到為止」的節制感。",
        color: Some("#6B8E99"),
    },
    ImpactHighlight {
        heading: "知識提升 (8/10):",
        detail: "獲得新的商業思維框架與 AI 應用啟發。",
        color: Some("#D4A373"),
    },
    ImpactHighlight {
        heading: "工作表現 (6/10):",
        detail: "受限於組織混亂，直接行動較難，但心態轉向積極學習。",
        color: None,
    },
];

pub const RETRO_BADGE: &str = "成長加速回饋計畫";
pub const RETRO_HEADLINE: &str = "不僅是導師，更是一面「鏡子」";
pub const RETRO_INTRO: &str =
    "在這半年的協作中，這不只是一個單向的指導，而是一個即時反映現狀、盲點與機會的過程。";
pub const RETRO_TESTIMONIAL: &str = "\"跟你聊完,有一種情緒被釋放，或是覺得變聰明了的感覺。\"";

pub const ROLE_HEADLINE: &str = "角色定位：不做共犯，做軍師";
pub const ROLE_QUOTE: &str = "「因為我們立場不同了，這反而是好事。生活中太多跟我立場一樣（一起抱怨）的人，但你提供了跳脫框架的視角。」";

/// Role paragraph with the mentee and mentor names filled in
pub fn role_paragraph(mentee: &str, mentor: &str) -> String {
    format!(
        "在互動中， {} 認為 {} 的角色最不像「共犯」，而更傾向於「標竿」與「軍師」。這是一種基於不同立場的穩定力量。",
        mentee, mentor
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_point_at_the_other_page() {
        for page in Page::ALL {
            assert_ne!(header(page).cta_target, page);
        }
        assert_eq!(header(Page::Retro).brand_target, Some(Page::Home));
        assert!(header(Page::Home).brand_target.is_none());
    }

    #[test]
    fn test_role_paragraph_uses_names() {
        let text = role_paragraph("Valtina", "Golden");
        assert!(text.contains(" Valtina 認為 Golden 的角色"));
    }
}
