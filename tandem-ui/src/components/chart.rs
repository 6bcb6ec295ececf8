//! Chart Component
//!
//! Draws a [`ChartSpec`] on an HTML5 canvas. The canvas backend paints the
//! layouts from `tandem::charts::geometry`; the component keeps one live chart
//! per canvas through a [`ChartSlot`].

use leptos::*;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use tandem::charts::{
    bar_layout, doughnut_layout, radar_layout, ChartBackend, ChartError, ChartHandle, ChartId,
    ChartKind, ChartSlot, ChartSpec, Color, Point, Rect,
};

/// Grid rings on radar charts
const RADAR_RINGS: usize = 5;
/// Space for row labels left of horizontal bars
const BAR_LABEL_WIDTH: f64 = 48.0;
/// Value labels sit this far inside the end of a bar
const BAR_LABEL_INSET: f64 = 10.0;
const FONT_FAMILY: &str = "'Noto Sans TC', sans-serif";

/// Canvas chart component
#[component]
pub fn ChartCanvas(
    /// Which site chart to draw
    id: ChartId,
    /// Called with the item index when an item is clicked
    #[prop(optional)]
    on_select: Option<Callback<usize>>,
    #[prop(default = 400)] width: u32,
    #[prop(default = 300)] height: u32,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let slot = store_value(ChartSlot::<CanvasChart>::new());

    let spec = match ChartSpec::for_chart(id) {
        Ok(spec) => Some(spec),
        Err(e) => {
            web_sys::console::error_1(&format!("Chart {} unavailable: {}", id, e).into());
            None
        }
    };

    // (Re)draw once the canvas is attached
    create_effect(move |_| {
        let canvas = canvas_ref.get().map(|c| {
            let el: &HtmlCanvasElement = &c;
            el.clone()
        });
        let Some(spec) = spec.as_ref() else {
            return;
        };

        slot.update_value(|slot| {
            if let Err(e) = slot.mount(&CanvasBackend, canvas.as_ref(), spec) {
                web_sys::console::error_1(&format!("Failed to draw chart {}: {}", id, e).into());
            }
        });
    });

    on_cleanup(move || {
        slot.try_update_value(|slot| slot.unmount());
    });

    let on_click = move |ev: MouseEvent| {
        let index = slot.with_value(|slot| slot.handle().and_then(|chart| chart.item_at(&ev)));
        if let (Some(index), Some(callback)) = (index, on_select.as_ref()) {
            callback.call(index);
        }
    };

    let on_move = move |ev: MouseEvent| {
        slot.update_value(|slot| {
            if let Some(chart) = slot.handle_mut() {
                let index = chart.item_at(&ev);
                chart.set_hover(index);
            }
        });
    };

    let on_leave = move |_: MouseEvent| {
        slot.update_value(|slot| {
            if let Some(chart) = slot.handle_mut() {
                chart.set_hover(None);
            }
        });
    };

    view! {
        <canvas
            node_ref=canvas_ref
            width=width.to_string()
            height=height.to_string()
            class=class
            on:click=on_click
            on:mousemove=on_move
            on:mouseleave=on_leave
        />
    }
}

/// Draws charts on a canvas 2d context
pub struct CanvasBackend;

impl ChartBackend for CanvasBackend {
    type Surface = HtmlCanvasElement;
    type Handle = CanvasChart;

    fn render(&self, surface: &HtmlCanvasElement, spec: &ChartSpec) -> Result<CanvasChart, ChartError> {
        let ctx = surface
            .get_context("2d")
            .map_err(|e| ChartError::Backend(format!("{:?}", e)))?
            .ok_or(ChartError::SurfaceUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::SurfaceUnavailable)?;

        let chart = CanvasChart {
            canvas: surface.clone(),
            ctx,
            spec: spec.clone(),
            hover: None,
        };
        chart.draw();
        Ok(chart)
    }
}

/// A chart drawn on one canvas
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    spec: ChartSpec,
    hover: Option<usize>,
}

impl ChartHandle for CanvasChart {
    fn destroy(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
        self.canvas.set_title("");
        self.hover = None;
    }
}

impl CanvasChart {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }

    /// Item under the pointer; only interactive charts report items
    pub fn item_at(&self, ev: &MouseEvent) -> Option<usize> {
        if !self.spec.style.interactive || self.spec.kind != ChartKind::Doughnut {
            return None;
        }

        // Canvas pixels may be scaled by CSS
        let scale_x = self.width() / (self.canvas.client_width().max(1) as f64);
        let scale_y = self.height() / (self.canvas.client_height().max(1) as f64);
        let point = Point::new(ev.offset_x() as f64 * scale_x, ev.offset_y() as f64 * scale_y);

        doughnut_layout(
            self.area(),
            &self.spec.dataset.values,
            self.spec.style.cutout,
            self.spec.style.hover_offset,
        )
        .segment_at(point)
    }

    /// Highlight one item; redraws only on change
    pub fn set_hover(&mut self, index: Option<usize>) {
        if self.hover == index {
            return;
        }
        self.hover = index;

        let title = index.and_then(|i| self.spec.tooltip(i)).unwrap_or_default();
        self.canvas.set_title(&title);
        let _ = self.canvas.style().set_property(
            "cursor",
            if index.is_some() { "pointer" } else { "default" },
        );

        self.draw();
    }

    pub fn draw(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
        match self.spec.kind {
            ChartKind::Radar => self.draw_radar(),
            ChartKind::HorizontalBar => self.draw_bars(),
            ChartKind::Doughnut => self.draw_doughnut(),
        }
    }

    fn draw_radar(&self) {
        let ctx = &self.ctx;
        let spec = &self.spec;
        let layout = radar_layout(self.area(), &spec.dataset.values, spec.style.scale_max, RADAR_RINGS);

        // Grid rings and spokes
        if let Some(grid) = spec.style.grid {
            ctx.set_stroke_style(&grid.to_css().into());
            ctx.set_line_width(1.0);
            for ring in &layout.rings {
                trace_polygon(ctx, ring);
                ctx.stroke();
            }
            for spoke in &layout.spokes {
                ctx.begin_path();
                ctx.move_to(layout.center.x, layout.center.y);
                ctx.line_to(spoke.x, spoke.y);
                ctx.stroke();
            }
        }

        // Axis labels
        if let Some(axis) = spec.style.axis_labels {
            set_font(ctx, axis.font_px, false);
            ctx.set_fill_style(&axis.color.to_css().into());
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            for (label, anchor) in spec.labels.iter().zip(&layout.label_anchors) {
                let _ = ctx.fill_text(label, anchor.x, anchor.y);
            }
        }

        // Data area
        trace_polygon(ctx, &layout.points);
        if let Some(fill) = spec.fill(0) {
            ctx.set_fill_style(&fill.to_css().into());
            ctx.fill();
        }
        if let Some(stroke) = spec.dataset.stroke {
            ctx.set_stroke_style(&stroke.to_css().into());
            ctx.set_line_width(spec.dataset.line_width);
            ctx.stroke();
        }

        // Points
        if let Some(point_color) = spec.dataset.point {
            ctx.set_fill_style(&point_color.to_css().into());
            for point in &layout.points {
                ctx.begin_path();
                let _ = ctx.arc(point.x, point.y, 3.0, 0.0, TAU);
                ctx.fill();
            }
        }

        // Value labels just above each point
        for (i, point) in layout.points.iter().enumerate() {
            if let Some((text, color)) = spec.value_label(i) {
                self.fill_label(&text, color, point.x, point.y - 12.0, "center");
            }
        }
    }

    fn draw_bars(&self) {
        let ctx = &self.ctx;
        let spec = &self.spec;
        let bars = bar_layout(self.area(), &spec.dataset.values, spec.style.scale_max, BAR_LABEL_WIDTH);

        for (i, bar) in bars.iter().enumerate() {
            if let Some(fill) = spec.fill(i) {
                ctx.set_fill_style(&fill.to_css().into());
                ctx.fill_rect(bar.rect.x, bar.rect.y, bar.rect.width, bar.rect.height);
            }

            if let (Some(axis), Some(label)) = (spec.style.axis_labels, spec.labels.get(i)) {
                set_font(ctx, axis.font_px, false);
                ctx.set_fill_style(&axis.color.to_css().into());
                ctx.set_text_align("right");
                ctx.set_text_baseline("middle");
                let _ = ctx.fill_text(label, BAR_LABEL_WIDTH - 8.0, bar.row_center);
            }

            if let Some((text, color)) = spec.value_label(i) {
                let x = bar.rect.x + bar.rect.width - BAR_LABEL_INSET;
                self.fill_label(&text, color, x, bar.row_center, "right");
            }
        }
    }

    fn draw_doughnut(&self) {
        let ctx = &self.ctx;
        let spec = &self.spec;
        let layout = doughnut_layout(
            self.area(),
            &spec.dataset.values,
            spec.style.cutout,
            spec.style.hover_offset,
        );

        for (i, arc) in layout.arcs.iter().enumerate() {
            if arc.sweep() <= 0.0 {
                continue;
            }
            let center = match self.hover {
                Some(h) if h == i => layout
                    .exploded_center(i, spec.style.hover_offset)
                    .unwrap_or(layout.center),
                _ => layout.center,
            };

            ctx.begin_path();
            let _ = ctx.arc(center.x, center.y, layout.outer, arc.start, arc.end);
            let _ = ctx.arc_with_anticlockwise(center.x, center.y, layout.inner, arc.end, arc.start, true);
            ctx.close_path();

            if let Some(fill) = spec.fill(i) {
                ctx.set_fill_style(&fill.to_css().into());
                ctx.fill();
            }
            if let Some(gap) = spec.style.segment_gap {
                ctx.set_stroke_style(&gap.color.to_css().into());
                ctx.set_line_width(gap.width);
                ctx.stroke();
            }
        }

        for i in 0..layout.arcs.len() {
            let (Some((text, color)), Some(mut at)) = (spec.value_label(i), layout.label_position(i)) else {
                continue;
            };
            if self.hover == Some(i) {
                if let Some(shifted) = layout.exploded_center(i, spec.style.hover_offset) {
                    at = Point::new(at.x + shifted.x - layout.center.x, at.y + shifted.y - layout.center.y);
                }
            }
            self.fill_label(&text, color, at.x, at.y, "center");
        }
    }

    fn fill_label(&self, text: &str, color: Color, x: f64, y: f64, align: &str) {
        let size = self.spec.style.value_labels.map(|v| v.font_px).unwrap_or(12.0);
        set_font(&self.ctx, size, true);
        self.ctx.set_fill_style(&color.to_css().into());
        self.ctx.set_text_align(align);
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, x, y);
    }
}

fn set_font(ctx: &CanvasRenderingContext2d, px: f64, bold: bool) {
    let weight = if bold { "bold " } else { "" };
    ctx.set_font(&format!("{}{}px {}", weight, px, FONT_FAMILY));
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(p.x, p.y);
        } else {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.close_path();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas = document
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        canvas.set_width(320);
        canvas.set_height(320);
        canvas
    }

    #[wasm_bindgen_test]
    fn test_every_chart_renders() {
        let surface = canvas();
        let mut slot = ChartSlot::<CanvasChart>::new();

        for id in ChartId::ALL {
            let spec = ChartSpec::for_chart(id).unwrap();
            assert!(slot.mount(&CanvasBackend, Some(&surface), &spec).unwrap());
            assert!(slot.is_live());
        }

        slot.unmount();
        assert!(!slot.is_live());
    }

    #[wasm_bindgen_test]
    fn test_hover_sets_tooltip() {
        let surface = canvas();
        let spec = ChartSpec::for_chart(ChartId::Topics).unwrap();
        let mut chart = CanvasBackend.render(&surface, &spec).unwrap();

        chart.set_hover(Some(0));
        assert_eq!(surface.title(), spec.tooltip(0).unwrap());

        chart.destroy();
        assert_eq!(surface.title(), "");
    }
}
