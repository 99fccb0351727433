use serde::{Deserialize, Serialize};

use super::value_objects::{ItemId, Price, Quality, Timestamp};

/// One recorded price of an item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    pub price: Price,
    pub timestamp: Timestamp,
}

impl PriceHistoryPoint {
    pub fn new(price: f64, timestamp: i64) -> Self {
        Self { price: Price::new(price), timestamp: Timestamp::new(timestamp) }
    }
}

/// Row returned by the item search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u32,
    pub name: String,
    pub quality: Quality,
}

impl SearchResult {
    pub fn new(id: u32, name: impl Into<String>, quality: i32) -> Self {
        Self { id, name: name.into(), quality: Quality::new(quality) }
    }

    pub fn item_id(&self) -> ItemId {
        ItemId::from(self.id)
    }
}
