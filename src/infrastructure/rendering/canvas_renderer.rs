use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartLayout, PlotPoint, PriceSeries, SeriesKind},
    errors::{AppError, RenderingResult},
    logging::LogComponent,
};
use crate::log_debug;
use crate::time_utils::{format_price, format_time_label};

const BACKGROUND: &str = "#ffffff";
const GRID: &str = "#e5e7eb";
const LABEL: &str = "#6b7280";
const LINE: &str = "#3b82f6";
const LATEST: &str = "#10b981";
const HIGHLIGHT: &str = "#1d4ed8";
const GRID_LINES: usize = 5;

fn js_error(what: &'static str) -> impl Fn(JsValue) -> AppError {
    move |err| AppError::Rendering(format!("{what}: {err:?}"))
}

/// Canvas 2D renderer for the price line chart
pub struct CanvasRenderer {
    layout: ChartLayout,
    kind: SeriesKind,
}

impl CanvasRenderer {
    pub fn new(width: u32, height: u32, kind: SeriesKind) -> Self {
        Self { layout: ChartLayout::new(width, height), kind }
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Size the canvas and get its 2D context
    fn get_canvas_context(&self, canvas: &HtmlCanvasElement) -> RenderingResult<CanvasRenderingContext2d> {
        canvas.set_width(self.layout.width as u32);
        canvas.set_height(self.layout.height as u32);

        canvas
            .get_context("2d")
            .map_err(js_error("Failed to get 2D context"))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("Failed to cast to 2D context".to_string()))
    }

    /// Draw the whole chart. `highlight` marks the hovered sample.
    pub fn render_chart(
        &self,
        canvas: &HtmlCanvasElement,
        series: &PriceSeries,
        highlight: Option<usize>,
    ) -> RenderingResult<()> {
        let context = self.get_canvas_context(canvas)?;

        context.clear_rect(0.0, 0.0, self.layout.width, self.layout.height);
        context.set_fill_style_str(BACKGROUND);
        context.fill_rect(0.0, 0.0, self.layout.width, self.layout.height);

        if series.is_empty() {
            return self.render_no_data_message(&context);
        }

        let points = self.layout.project(series);
        self.render_price_scale(&context, series)?;
        self.render_time_labels(&context, series)?;
        self.render_line(&context, &points);
        self.render_current_price(&context, series, &points)?;
        if let Some(point) = highlight.and_then(|index| points.get(index)) {
            self.render_highlight(&context, point);
        }

        log_debug!(LogComponent::Infrastructure("CanvasRenderer"), "Rendered {} {} points", series.len(), self.kind);
        Ok(())
    }

    fn render_price_scale(&self, context: &CanvasRenderingContext2d, series: &PriceSeries) -> RenderingResult<()> {
        context.set_line_width(1.0);
        context.set_font("12px sans-serif");
        context.set_text_align("right");
        context.set_text_baseline("middle");

        for tick in self.layout.price_ticks(series, GRID_LINES) {
            context.set_stroke_style_str(GRID);
            context.begin_path();
            context.move_to(self.layout.plot_left(), tick.y);
            context.line_to(self.layout.plot_right(), tick.y);
            context.stroke();

            context.set_fill_style_str(LABEL);
            context
                .fill_text(&format_price(tick.value, self.kind.unit()), self.layout.plot_left() - 8.0, tick.y)
                .map_err(js_error("Failed to draw price label"))?;
        }
        Ok(())
    }

    fn render_time_labels(&self, context: &CanvasRenderingContext2d, series: &PriceSeries) -> RenderingResult<()> {
        let Some((first, last)) = series.time_range() else {
            return Ok(());
        };
        let span = last - first;
        let y = self.layout.plot_bottom() + 16.0;

        context.set_fill_style_str(LABEL);
        context.set_font("12px sans-serif");
        context.set_text_baseline("middle");

        context.set_text_align("left");
        context
            .fill_text(&format_time_label(first, span), self.layout.plot_left(), y)
            .map_err(js_error("Failed to draw time label"))?;

        if span > 0 {
            context.set_text_align("right");
            context
                .fill_text(&format_time_label(last, span), self.layout.plot_right(), y)
                .map_err(js_error("Failed to draw time label"))?;
        }
        Ok(())
    }

    fn render_line(&self, context: &CanvasRenderingContext2d, points: &[PlotPoint]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        context.set_stroke_style_str(LINE);
        context.set_line_width(2.0);
        context.begin_path();
        context.move_to(first.x, first.y);
        for point in rest {
            context.line_to(point.x, point.y);
        }
        context.stroke();

        // a lone sample has no segment to show
        if rest.is_empty() {
            self.render_dot(context, first, LINE, 3.0);
        }
    }

    fn render_current_price(
        &self,
        context: &CanvasRenderingContext2d,
        series: &PriceSeries,
        points: &[PlotPoint],
    ) -> RenderingResult<()> {
        let (Some(latest), Some(point)) = (series.latest(), points.last()) else {
            return Ok(());
        };

        self.render_dot(context, point, LATEST, 4.0);
        context.set_fill_style_str(LATEST);
        context.set_font("bold 12px sans-serif");
        context.set_text_align("right");
        context.set_text_baseline("bottom");
        context
            .fill_text(
                &format_price(latest.value.value(), self.kind.unit()),
                self.layout.plot_right(),
                (point.y - 8.0).max(self.layout.plot_top() + 12.0),
            )
            .map_err(js_error("Failed to draw current price"))
    }

    fn render_highlight(&self, context: &CanvasRenderingContext2d, point: &PlotPoint) {
        context.set_stroke_style_str(GRID);
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(point.x, self.layout.plot_top());
        context.line_to(point.x, self.layout.plot_bottom());
        context.stroke();
        self.render_dot(context, point, HIGHLIGHT, 4.0);
    }

    fn render_dot(&self, context: &CanvasRenderingContext2d, point: &PlotPoint, color: &str, radius: f64) {
        context.set_fill_style_str(color);
        context.begin_path();
        let _ = context.arc(point.x, point.y, radius, 0.0, std::f64::consts::TAU);
        context.fill();
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> RenderingResult<()> {
        context.set_fill_style_str(LABEL);
        context.set_font("16px sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context
            .fill_text("No chart data", self.layout.width / 2.0, self.layout.height / 2.0)
            .map_err(js_error("Failed to draw placeholder"))
    }
}
