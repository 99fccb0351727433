use derive_more::Display;

use crate::domain::item::{Price, Timestamp};

/// Value Object - which currency series the chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SeriesKind {
    #[default]
    #[display(fmt = "refined")]
    Refined,
    #[display(fmt = "keys")]
    Keys,
}

impl SeriesKind {
    /// Unit suffix used on price labels.
    pub fn unit(&self) -> &'static str {
        match self {
            SeriesKind::Refined => "ref",
            SeriesKind::Keys => "keys",
        }
    }
}

/// Value Object - one sample on the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub timestamp: Timestamp,
    pub value: Price,
}

impl ChartPoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp: Timestamp::new(timestamp), value: Price::new(value) }
    }
}

/// Value Object - a chart point projected to canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Value Object - one horizontal grid line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTick {
    pub value: f64,
    pub y: f64,
}
