//! Runtime configuration.
//!
//! Defaults are compiled in; a page can override them with
//! `<meta name="tracker:<key>" content="...">` tags, e.g.
//! `<meta name="tracker:api-base" content="http://localhost:8080">`.

use std::str::FromStr;

use wasm_bindgen::JsCast;

use crate::domain::logging::{LogComponent, LogLevel};
use crate::log_warn;

const META_PREFIX: &str = "tracker:";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for API requests, empty for same-origin.
    pub api_base: String,
    /// Quiet period before a search is sent.
    pub search_debounce_ms: u32,
    pub chart_width: u32,
    pub chart_height: u32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_debounce_ms: 1100,
            chart_width: 800,
            chart_height: 360,
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
        }
    }
}

impl AppConfig {
    /// Defaults with overrides from the document's `tracker:*` meta tags.
    pub fn from_document() -> Self {
        let mut config = Self::default();
        config.apply_overrides(read_meta_overrides());
        config
    }

    /// Apply `(key, value)` pairs. Unknown keys and unparsable values are
    /// skipped with a warning.
    pub fn apply_overrides<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in overrides {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            let applied = match key {
                "api-base" => {
                    self.api_base = value.trim_end_matches('/').to_string();
                    true
                }
                "search-debounce-ms" => parse_into(value, &mut self.search_debounce_ms),
                "chart-width" => parse_into(value, &mut self.chart_width),
                "chart-height" => parse_into(value, &mut self.chart_height),
                "log-level" => parse_into(value, &mut self.log_level),
                _ => false,
            };
            if !applied {
                log_warn!(LogComponent::Presentation("Config"), "Ignoring config override {}={}", key, value);
            }
        }
    }
}

fn parse_into<T: FromStr>(value: &str, slot: &mut T) -> bool {
    match value.parse() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

fn read_meta_overrides() -> Vec<(String, String)> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("meta[name^='tracker:']") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .filter_map(|meta| {
            let name = meta.name();
            name.strip_prefix(META_PREFIX).map(|key| (key.to_string(), meta.content()))
        })
        .collect()
}
