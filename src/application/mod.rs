//! Framework-free state machines driving the presentation layer.

pub mod item_detail;
pub mod search;
pub mod sequencer;

pub use item_detail::*;
pub use search::*;
pub use sequencer::*;
