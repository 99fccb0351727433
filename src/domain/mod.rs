pub mod chart;
pub mod errors;
pub mod item;
pub mod logging;
