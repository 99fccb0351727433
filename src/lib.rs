//! Marketplace price tracker: a debounced item search and a per-item
//! price history view, rendered client-side with Leptos.

use leptos::*;

use crate::config::AppConfig;
use crate::domain::logging::{LogComponent, init_logger, init_time_provider};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use crate::presentation::App;

pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Install logging and mount the application into `<body>`.
pub fn launch() {
    console_error_panic_hook::set_once();

    init_time_provider(Box::new(BrowserTimeProvider::new()));
    // config warnings are buffered until the logger exists
    let config = AppConfig::from_document();
    init_logger(Box::new(ConsoleLogger::new(config.log_level)));

    log_info!(
        LogComponent::Presentation("Launch"),
        "Price tracker starting (api base '{}', debounce {}ms)",
        config.api_base,
        config.search_debounce_ms
    );

    mount_to_body(move || view! { <App config=config/> });
}
