//! Leptos components.

pub mod app;
pub mod item_detail;
pub mod item_search;
pub mod price_chart;

pub use app::{App, HomePage};
pub use item_detail::ItemDetailPage;
pub use item_search::ItemSearch;
pub use price_chart::PriceChart;
