//! Chart specifications
//!
//! Declarative description of each chart on the site: kind, labels, one
//! dataset and its styling. Backends turn a spec into pixels.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::color::Color;
use crate::content::topics::TopicKey;
use crate::error::{TandemError, TandemResult};

/// The four charts on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    /// Home page: depth of the experiment
    Vision,
    /// Retro page: five impact dimensions
    Impact,
    /// Retro page: how the mentor's role was perceived
    Roles,
    /// Retro page: sessions per topic, drives the topic explorer
    Topics,
}

impl ChartId {
    pub const ALL: [ChartId; 4] = [ChartId::Vision, ChartId::Impact, ChartId::Roles, ChartId::Topics];

    pub fn key(self) -> &'static str {
        match self {
            ChartId::Vision => "vision",
            ChartId::Impact => "impact",
            ChartId::Roles => "roles",
            ChartId::Topics => "topics",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChartId {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ChartId::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| TandemError::UnknownChart(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Radar,
    HorizontalBar,
    Doughnut,
}

/// How a value label is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// `4`
    Plain,
    /// `8.5/10`
    OutOfTen,
}

impl LabelFormat {
    pub fn format(self, value: f64) -> String {
        let number = format_number(value);
        match self {
            LabelFormat::Plain => number,
            LabelFormat::OutOfTen => format!("{}/10", number),
        }
    }
}

/// Value label color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelColor {
    Fixed(Color),
    /// Dark or light, whichever reads on the item's fill
    Contrast,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueLabels {
    pub format: LabelFormat,
    pub color: LabelColor,
    pub font_px: f64,
}

/// Category axis labels (radar point labels, bar row labels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLabels {
    pub color: Color,
    pub font_px: f64,
}

/// Stroke drawn between doughnut segments
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentGap {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: Option<&'static str>,
    pub values: Vec<f64>,
    /// One fill for radar areas, one per item for bars and segments
    pub fills: Vec<Color>,
    pub stroke: Option<Color>,
    pub point: Option<Color>,
    pub line_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStyle {
    /// Value at the outer edge of the scale (radar, bar)
    pub scale_max: f64,
    pub value_labels: Option<ValueLabels>,
    pub axis_labels: Option<AxisLabels>,
    pub grid: Option<Color>,
    /// Doughnut hole as a fraction of the outer radius
    pub cutout: f64,
    pub segment_gap: Option<SegmentGap>,
    /// How far a hovered segment is pushed out, in pixels
    pub hover_offset: f64,
    /// Whether clicks on items are reported back
    pub interactive: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            scale_max: 10.0,
            value_labels: None,
            axis_labels: None,
            grid: None,
            cutout: 0.0,
            segment_gap: None,
            hover_offset: 0.0,
            interactive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub dataset: Dataset,
    pub style: ChartStyle,
}

impl ChartSpec {
    /// Spec for one of the site's charts
    pub fn for_chart(id: ChartId) -> TandemResult<Self> {
        match id {
            ChartId::Vision => Self::vision(),
            ChartId::Impact => Self::impact(),
            ChartId::Roles => Self::roles(),
            ChartId::Topics => Self::topics(),
        }
    }

    fn vision() -> TandemResult<Self> {
        let amber = Color::hex("#E1B382")?;
        Ok(Self {
            id: ChartId::Vision,
            kind: ChartKind::Radar,
            labels: vec!["技術前瞻性", "人文關懷", "商業邏輯", "敘事魅力", "實作可能性"],
            dataset: Dataset {
                label: Some("實驗探索深度"),
                values: vec![9.0, 8.0, 7.0, 10.0, 6.0],
                fills: vec![amber.with_alpha(0.2)],
                stroke: Some(amber),
                point: Some(amber),
                line_width: 2.0,
            },
            style: ChartStyle {
                axis_labels: Some(AxisLabels {
                    color: Color::hex("#999999")?,
                    font_px: 12.0,
                }),
                grid: Some(Color::rgba(255, 255, 255, 0.1)),
                ..ChartStyle::default()
            },
        })
    }

    fn impact() -> TandemResult<Self> {
        let teal = Color::hex("#6B8E99")?;
        Ok(Self {
            id: ChartId::Impact,
            kind: ChartKind::Radar,
            labels: vec!["心理狀態", "知識提升", "關係連結", "工作表現", "信任程度"],
            dataset: Dataset {
                label: Some("得分"),
                values: vec![9.0, 8.0, 8.0, 6.0, 8.5],
                fills: vec![teal.with_alpha(0.2)],
                stroke: Some(teal),
                point: Some(teal),
                line_width: 2.0,
            },
            style: ChartStyle {
                value_labels: Some(ValueLabels {
                    format: LabelFormat::OutOfTen,
                    color: LabelColor::Fixed(Color::hex("#1A2B34")?),
                    font_px: 14.0,
                }),
                axis_labels: Some(AxisLabels {
                    color: Color::hex("#666666")?,
                    font_px: 12.0,
                }),
                grid: Some(Color::rgba(0, 0, 0, 0.1)),
                ..ChartStyle::default()
            },
        })
    }

    fn roles() -> TandemResult<Self> {
        let fills = ["#6B8E99", "#6B8E99", "#6B8E99", "#9FB6BC", "#D4A373"]
            .into_iter()
            .map(Color::hex)
            .collect::<TandemResult<Vec<_>>>()?;
        Ok(Self {
            id: ChartId::Roles,
            kind: ChartKind::HorizontalBar,
            labels: vec!["標竿", "軍師", "鏡子", "教練", "共犯"],
            dataset: Dataset {
                label: None,
                values: vec![9.0, 9.0, 8.0, 7.0, 2.0],
                fills,
                stroke: None,
                point: None,
                line_width: 0.0,
            },
            style: ChartStyle {
                value_labels: Some(ValueLabels {
                    format: LabelFormat::OutOfTen,
                    color: LabelColor::Fixed(Color::rgb(255, 255, 255)),
                    font_px: 14.0,
                }),
                axis_labels: Some(AxisLabels {
                    color: Color::hex("#666666")?,
                    font_px: 12.0,
                }),
                ..ChartStyle::default()
            },
        })
    }

    fn topics() -> TandemResult<Self> {
        let fills = TopicKey::ALL
            .into_iter()
            .map(|k| Color::hex(k.detail().color))
            .collect::<TandemResult<Vec<_>>>()?;
        Ok(Self {
            id: ChartId::Topics,
            kind: ChartKind::Doughnut,
            labels: TopicKey::ALL.into_iter().map(TopicKey::label).collect(),
            dataset: Dataset {
                label: None,
                values: TopicKey::ALL
                    .into_iter()
                    .map(|k| k.detail().count as f64)
                    .collect(),
                fills,
                stroke: None,
                point: None,
                line_width: 0.0,
            },
            style: ChartStyle {
                value_labels: Some(ValueLabels {
                    format: LabelFormat::Plain,
                    color: LabelColor::Contrast,
                    font_px: 18.0,
                }),
                cutout: 0.55,
                segment_gap: Some(SegmentGap {
                    color: Color::hex("#F9F7F2")?,
                    width: 4.0,
                }),
                hover_offset: 15.0,
                interactive: true,
                ..ChartStyle::default()
            },
        })
    }

    /// Fill for item `index`; a single fill applies to every item
    pub fn fill(&self, index: usize) -> Option<Color> {
        match self.dataset.fills.as_slice() {
            [single] => Some(*single),
            fills => fills.get(index).copied(),
        }
    }

    /// Text and color of the value label for item `index`
    pub fn value_label(&self, index: usize) -> Option<(String, Color)> {
        let labels = self.style.value_labels?;
        let value = *self.dataset.values.get(index)?;
        let color = match labels.color {
            LabelColor::Fixed(color) => color,
            LabelColor::Contrast => self.fill(index)?.contrast_text(),
        };
        Some((labels.format.format(value), color))
    }

    /// Tooltip text for item `index` on the topic doughnut
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let label = self.labels.get(index)?;
        let value = self.dataset.values.get(index)?;
        Some(match self.kind {
            ChartKind::Doughnut => format!("{}: {} 次對話", label, format_number(*value)),
            _ => format!("{}: {}", label, format_number(*value)),
        })
    }
}

/// `9.0` -> `9`, `8.5` -> `8.5`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
