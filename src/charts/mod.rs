//! Charts
//!
//! Declarative chart specs for the four site charts, the layout math to draw
//! them, and the slot that keeps one live instance per canvas.

pub mod color;
pub mod geometry;
pub mod slot;
pub mod spec;

pub use color::{Color, DARK_TEXT, LIGHT_TEXT};
pub use geometry::{
    bar_layout, doughnut_layout, radar_layout, BarRect, DoughnutLayout, Point, RadarLayout, Rect,
};
pub use slot::{ChartBackend, ChartError, ChartHandle, ChartSlot};
pub use spec::{
    format_number, AxisLabels, ChartId, ChartKind, ChartSpec, ChartStyle, Dataset, LabelColor,
    LabelFormat, SegmentGap, ValueLabels,
};
