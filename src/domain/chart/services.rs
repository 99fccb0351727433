use super::entities::PriceSeries;
use super::value_objects::{PlotPoint, PriceTick};

/// Fraction of the value spread added above and below the series.
const VALUE_HEADROOM: f64 = 0.05;

/// Pixel geometry of the price chart and the projection of a series into it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Space left of the plot reserved for price labels.
    pub axis_space: f64,
}

impl ChartLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width: width as f64, height: height as f64, padding: 30.0, axis_space: 70.0 }
    }

    pub fn plot_left(&self) -> f64 {
        self.padding + self.axis_space
    }

    pub fn plot_right(&self) -> f64 {
        (self.width - self.padding).max(self.plot_left())
    }

    pub fn plot_top(&self) -> f64 {
        self.padding
    }

    pub fn plot_bottom(&self) -> f64 {
        (self.height - self.padding).max(self.plot_top())
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    /// Value interval mapped onto the plot height. A flat series gets a
    /// synthetic spread so it is drawn through the vertical centre.
    pub fn value_bounds(&self, series: &PriceSeries) -> Option<(f64, f64)> {
        let (min, max) = series.value_range()?;
        let spread = max - min;
        let pad = if spread <= f64::EPSILON {
            (min.abs() * VALUE_HEADROOM).max(1.0)
        } else {
            spread * VALUE_HEADROOM
        };
        Some((min - pad, max + pad))
    }

    pub fn y_for(&self, value: f64, bounds: (f64, f64)) -> f64 {
        let (low, high) = bounds;
        let ratio = (value - low) / (high - low);
        self.plot_bottom() - ratio * self.plot_height()
    }

    /// Project every sample to canvas pixels, oldest on the left.
    pub fn project(&self, series: &PriceSeries) -> Vec<PlotPoint> {
        let (Some(bounds), Some((first, last))) = (self.value_bounds(series), series.time_range()) else {
            return Vec::new();
        };
        let span = (last - first) as f64;

        series
            .points()
            .iter()
            .map(|point| {
                let x = if span > 0.0 {
                    let offset = (point.timestamp.value() - first) as f64;
                    self.plot_left() + offset / span * self.plot_width()
                } else {
                    self.plot_left() + self.plot_width() / 2.0
                };
                PlotPoint { x, y: self.y_for(point.value.value(), bounds) }
            })
            .collect()
    }

    /// `count` evenly spaced grid lines from the lowest to the highest value.
    pub fn price_ticks(&self, series: &PriceSeries, count: usize) -> Vec<PriceTick> {
        let Some((low, high)) = self.value_bounds(series) else {
            return Vec::new();
        };
        if count < 2 {
            return Vec::new();
        }

        let step = (high - low) / (count - 1) as f64;
        (0..count)
            .map(|i| {
                let value = low + step * i as f64;
                PriceTick { value, y: self.y_for(value, (low, high)) }
            })
            .collect()
    }

    /// Convert a pointer x offset in CSS pixels to canvas pixels. The canvas
    /// may be drawn narrower than its backing width.
    pub fn canvas_x(&self, css_x: f64, rendered_width: f64) -> f64 {
        if rendered_width > 0.0 { css_x * self.width / rendered_width } else { css_x }
    }

    /// Index of the sample horizontally closest to `x` (canvas pixels).
    pub fn nearest_index(&self, series: &PriceSeries, x: f64) -> Option<usize> {
        self.project(series)
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
            .map(|(index, _)| index)
    }
}
