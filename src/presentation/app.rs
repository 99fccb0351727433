use leptos::*;
use leptos_router::{Route, Router, Routes};

use crate::config::AppConfig;
use crate::presentation::item_detail::ItemDetailPage;
use crate::presentation::item_search::ItemSearch;

const STYLES: &str = r#"
.tracker-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: #f3f4f6;
    min-height: 100vh;
    color: #111827;
}

.home {
    max-width: 40rem;
    margin: 0 auto;
    padding: 6rem 1rem;
    text-align: center;
}

.home h1 {
    font-size: 2.25rem;
    margin-bottom: 0.5rem;
}

.subtitle {
    color: #6b7280;
    margin-bottom: 2rem;
}

.item-search {
    position: relative;
    width: 100%;
    max-width: 36rem;
    margin: 0 auto;
    text-align: left;
}

.search-box {
    position: relative;
}

.search-input {
    box-sizing: border-box;
    width: 100%;
    padding: 1rem 1.5rem;
    font-size: 1.125rem;
    color: #111827;
    background: #ffffff;
    border: 2px solid #e5e7eb;
    border-radius: 0.75rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.search-input:focus {
    outline: none;
    border-color: transparent;
    box-shadow: 0 0 0 2px #3b82f6;
}

.spinner {
    position: absolute;
    right: 1rem;
    top: 50%;
    width: 1.5rem;
    height: 1.5rem;
    margin-top: -0.75rem;
    border-radius: 50%;
    border-bottom: 2px solid #3b82f6;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.search-dropdown {
    position: absolute;
    z-index: 10;
    width: 100%;
    margin-top: 0.5rem;
    background: #ffffff;
    border: 2px solid #e5e7eb;
    border-radius: 0.75rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    overflow: hidden;
}

.search-result {
    display: block;
    width: 100%;
    padding: 0.75rem 1.5rem;
    text-align: left;
    font-size: 1rem;
    color: #111827;
    background: none;
    border: none;
    cursor: pointer;
}

.search-result:hover,
.search-result:focus {
    outline: none;
    background: #f9fafb;
}

.quality-strange { color: #cf6a32; }
.quality-unusual { color: #8650ac; }
.quality-vintage { color: #476291; }
.quality-genuine { color: #4d7455; }
.quality-haunted { color: #38f3ab; }
.quality-collectors { color: #aa0000; }

.item-detail {
    max-width: 42rem;
    margin: 0 auto;
    padding: 3rem 1rem;
}

.back-link {
    color: #3b82f6;
    text-decoration: none;
}

.item-title {
    font-size: 1.875rem;
    font-weight: 700;
    text-align: center;
    margin: 1rem 0 1.5rem;
}

.chart-panel {
    position: relative;
    height: 400px;
    background: #ffffff;
    border-radius: 0.75rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    padding: 1rem;
}

.price-chart {
    position: relative;
}

.price-chart canvas {
    max-width: 100%;
    cursor: crosshair;
}

.chart-tooltip {
    position: absolute;
    top: 0.5rem;
    left: 50%;
    transform: translateX(-50%);
    background: rgba(17, 24, 39, 0.9);
    color: #ffffff;
    padding: 0.25rem 0.75rem;
    border-radius: 0.375rem;
    font-size: 0.75rem;
    pointer-events: none;
    white-space: nowrap;
}

.status {
    text-align: center;
    padding-top: 2rem;
}

.status-loading { color: #3b82f6; }
.status-error { color: #ef4444; }
.status-empty { color: #6b7280; }
"#;

/// Root component: provides configuration and the route table
#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <style>{STYLES}</style>
        <Router>
            <main class="tracker-app">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/items/:id" view=ItemDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Marketplace Price Tracker"</h1>
            <p class="subtitle">"Search for an item to see how its price moved"</p>
            <ItemSearch/>
        </section>
    }
}
