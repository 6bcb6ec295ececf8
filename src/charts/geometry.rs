//! Chart geometry
//!
//! Pure layout math for the three chart kinds, in canvas coordinates (y grows
//! downward, angles grow clockwise, zero angle points right). Backends only
//! stroke and fill what these functions return.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Space reserved around a radar for its point labels
pub const RADAR_LABEL_MARGIN: f64 = 28.0;
/// Share of a bar row the bar itself occupies
pub const BAR_THICKNESS: f64 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle`
    pub fn polar(self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

// ============ Radar ============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarLayout {
    pub center: Point,
    pub radius: f64,
    /// Concentric grid polygons, innermost first
    pub rings: Vec<Vec<Point>>,
    /// Outer end of each axis
    pub spokes: Vec<Point>,
    /// Data polygon
    pub points: Vec<Point>,
    /// Where each axis label is centered
    pub label_anchors: Vec<Point>,
}

/// Angle of axis `index` out of `count`, first axis straight up
pub fn radar_angle(index: usize, count: usize) -> f64 {
    -FRAC_PI_2 + index as f64 * TAU / count.max(1) as f64
}

pub fn radar_layout(area: Rect, values: &[f64], scale_max: f64, ring_count: usize) -> RadarLayout {
    let center = area.center();
    let radius = (area.width.min(area.height) / 2.0 - RADAR_LABEL_MARGIN).max(0.0);
    let n = values.len();
    let max = if scale_max > 0.0 { scale_max } else { 1.0 };

    let rings = (1..=ring_count)
        .map(|ring| {
            let r = radius * ring as f64 / ring_count as f64;
            (0..n).map(|i| center.polar(r, radar_angle(i, n))).collect()
        })
        .collect();

    let spokes = (0..n).map(|i| center.polar(radius, radar_angle(i, n))).collect();

    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| center.polar(radius * (v / max).clamp(0.0, 1.0), radar_angle(i, n)))
        .collect();

    let label_anchors = (0..n)
        .map(|i| center.polar(radius + RADAR_LABEL_MARGIN / 2.0, radar_angle(i, n)))
        .collect();

    RadarLayout {
        center,
        radius,
        rings,
        spokes,
        points,
        label_anchors,
    }
}

// ============ Horizontal bar ============

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarRect {
    pub rect: Rect,
    /// Vertical center of the row, for the category label
    pub row_center: f64,
}

/// One bar per value, top to bottom; `label_width` is kept free on the left
pub fn bar_layout(area: Rect, values: &[f64], scale_max: f64, label_width: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = if scale_max > 0.0 { scale_max } else { 1.0 };
    let row = area.height / values.len() as f64;
    let thickness = row * BAR_THICKNESS;
    let track = (area.width - label_width).max(0.0);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let row_center = area.y + row * (i as f64 + 0.5);
            BarRect {
                rect: Rect::new(
                    area.x + label_width,
                    row_center - thickness / 2.0,
                    track * (v / max).clamp(0.0, 1.0),
                    thickness,
                ),
                row_center,
            }
        })
        .collect()
}

// ============ Doughnut ============

/// Angular span of one segment, absolute canvas angles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc {
    pub start: f64,
    pub end: f64,
}

impl Arc {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoughnutLayout {
    pub center: Point,
    pub outer: f64,
    pub inner: f64,
    pub arcs: Vec<Arc>,
}

/// Segments start at twelve o'clock and run clockwise. `hover_offset` is kept
/// free around the ring so a pushed-out segment stays on the canvas.
pub fn doughnut_layout(area: Rect, values: &[f64], cutout: f64, hover_offset: f64) -> DoughnutLayout {
    let center = area.center();
    let outer = (area.width.min(area.height) / 2.0 - hover_offset).max(0.0);
    let inner = outer * cutout.clamp(0.0, 1.0);
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();

    let mut arcs = Vec::with_capacity(values.len());
    let mut angle = -FRAC_PI_2;
    for v in values {
        let sweep = if total > 0.0 { TAU * v.max(0.0) / total } else { 0.0 };
        arcs.push(Arc {
            start: angle,
            end: angle + sweep,
        });
        angle += sweep;
    }

    DoughnutLayout {
        center,
        outer,
        inner,
        arcs,
    }
}

impl DoughnutLayout {
    /// Segment under `p`, if `p` is on the ring
    pub fn segment_at(&self, p: Point) -> Option<usize> {
        let distance = p.distance(self.center);
        if distance < self.inner || distance > self.outer {
            return None;
        }

        let angle = (p.y - self.center.y).atan2(p.x - self.center.x);
        // Measure from twelve o'clock so segment spans never wrap
        let from_top = (angle + FRAC_PI_2).rem_euclid(TAU);

        self.arcs.iter().position(|arc| {
            let start = arc.start + FRAC_PI_2;
            let end = arc.end + FRAC_PI_2;
            arc.sweep() > 0.0 && from_top >= start && from_top < end
        })
    }

    /// Where the value label of segment `index` is centered
    pub fn label_position(&self, index: usize) -> Option<Point> {
        let arc = self.arcs.get(index)?;
        Some(self.center.polar((self.inner + self.outer) / 2.0, arc.mid()))
    }

    /// Center offset for a hovered segment pushed out by `offset`
    pub fn exploded_center(&self, index: usize, offset: f64) -> Option<Point> {
        let arc = self.arcs.get(index)?;
        Some(self.center.polar(offset, arc.mid()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0.0, 0.0, 200.0, 200.0);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_radar_first_axis_points_up() {
        let layout = radar_layout(AREA, &[10.0, 5.0, 5.0, 5.0, 5.0], 10.0, 5);
        let top = layout.points[0];
        assert!(close(top.x, 100.0));
        assert!(close(top.y, 100.0 - layout.radius));
        assert_eq!(layout.rings.len(), 5);
        assert_eq!(layout.rings[0].len(), 5);
    }

    #[test]
    fn test_radar_clamps_values() {
        let layout = radar_layout(AREA, &[20.0, -1.0, 0.0], 10.0, 1);
        assert!(close(layout.points[0].distance(layout.center), layout.radius));
        assert!(close(layout.points[1].distance(layout.center), 0.0));
    }

    #[test]
    fn test_bar_widths_scale() {
        let area = Rect::new(0.0, 0.0, 160.0, 100.0);
        let bars = bar_layout(area, &[10.0, 5.0], 10.0, 60.0);
        assert_eq!(bars.len(), 2);
        assert!(close(bars[0].rect.x, 60.0));
        assert!(close(bars[0].rect.width, 100.0));
        assert!(close(bars[1].rect.width, 50.0));
        assert!(close(bars[0].row_center, 25.0));
        assert!(close(bars[1].row_center, 75.0));
        assert!(bar_layout(area, &[], 10.0, 60.0).is_empty());
    }

    #[test]
    fn test_doughnut_arcs_cover_circle() {
        let layout = doughnut_layout(AREA, &[4.0, 4.0, 2.0, 2.0, 2.0], 0.55, 15.0);
        let sweep: f64 = layout.arcs.iter().map(Arc::sweep).sum();
        assert!(close(sweep, TAU));
        assert!(close(layout.arcs[0].start, -FRAC_PI_2));
        assert!(close(layout.outer, 85.0));
        assert!(close(layout.inner, 85.0 * 0.55));
    }

    #[test]
    fn test_hit_test_finds_each_segment() {
        let layout = doughnut_layout(AREA, &[4.0, 4.0, 2.0, 2.0, 2.0], 0.55, 15.0);
        for i in 0..5 {
            let p = layout.label_position(i).unwrap();
            assert_eq!(layout.segment_at(p), Some(i));
        }
    }

    #[test]
    fn test_hit_test_misses_hole_and_outside() {
        let layout = doughnut_layout(AREA, &[1.0, 1.0], 0.5, 0.0);
        assert_eq!(layout.segment_at(layout.center), None);
        assert_eq!(layout.segment_at(Point::new(199.0, 199.0)), None);
        // Just left of twelve o'clock belongs to the last segment
        let p = layout.center.polar(75.0, -FRAC_PI_2 - 0.01);
        assert_eq!(layout.segment_at(p), Some(1));
    }

    #[test]
    fn test_empty_doughnut_has_no_hits() {
        let layout = doughnut_layout(AREA, &[0.0, 0.0], 0.5, 0.0);
        let p = layout.center.polar(75.0, 0.0);
        assert_eq!(layout.segment_at(p), None);
    }
}
