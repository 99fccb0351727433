use crate::domain::item::PriceHistoryPoint;

use super::value_objects::ChartPoint;

/// Time-ordered series of chart samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<ChartPoint>,
}

impl PriceSeries {
    pub fn new(mut points: Vec<ChartPoint>) -> Self {
        // stable: equal timestamps keep server order
        points.sort_by_key(|point| point.timestamp);
        Self { points }
    }

    pub fn from_history(history: &[PriceHistoryPoint]) -> Self {
        Self::new(
            history
                .iter()
                .map(|point| ChartPoint { timestamp: point.timestamp, value: point.price })
                .collect(),
        )
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&ChartPoint> {
        self.points.last()
    }

    /// Lowest and highest value, `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |range, point| {
            let value = point.value.value();
            Some(match range {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            })
        })
    }

    /// First and last timestamp, `None` for an empty series.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.timestamp.value(), last.timestamp.value())),
            _ => None,
        }
    }
}
