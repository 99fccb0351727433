use leptos::*;
use leptos_router::use_params_map;

use crate::application::{DetailLoad, DetailPresentation, ItemDetailState};
use crate::config::AppConfig;
use crate::domain::chart::{PriceSeries, SeriesKind};
use crate::domain::item::{ItemId, ItemRepository};
use crate::domain::logging::LogComponent;
use crate::infrastructure::HttpItemRepository;
use crate::log_info;
use crate::presentation::price_chart::PriceChart;

/// `/items/:id`: price history of one item.
#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let repository = store_value(HttpItemRepository::new(config.api_base));
    let params = use_params_map();
    let state = create_rw_signal(ItemDetailState::new());

    let item_id = create_memo(move |_| {
        params.with(|params| ItemId::new(params.get("id").cloned().unwrap_or_default()))
    });

    // both fetches start together; each lands independently
    create_effect(move |_| {
        let id = item_id.get();
        let Some(DetailLoad { item_id, history, name }) = state.try_update(|s| s.begin(id)) else {
            return;
        };
        log_info!(LogComponent::Presentation("ItemDetail"), "Loading item {}", item_id);

        let history_repository = repository.get_value();
        let history_id = item_id.clone();
        spawn_local(async move {
            let result = history_repository.price_history(&history_id).await;
            state.try_update(|s| s.apply_history(history, result));
        });

        let name_repository = repository.get_value();
        spawn_local(async move {
            let result = name_repository.lookup_name(&item_id).await;
            state.try_update(|s| s.apply_name(name, result));
        });
    });

    let presentation = create_memo(move |_| state.with(ItemDetailState::presentation));
    let heading = move || state.with(ItemDetailState::heading);

    view! {
        <div class="item-detail">
            <a href="/" class="back-link">"← Back to search"</a>
            <h1 class="item-title">{heading}</h1>
            <div class="chart-panel">
                {move || match presentation.get() {
                    DetailPresentation::Loading => {
                        view! { <div class="status status-loading">"Loading..."</div> }.into_view()
                    }
                    DetailPresentation::Failed(message) => {
                        view! { <div class="status status-error">{message}</div> }.into_view()
                    }
                    DetailPresentation::Chart(series) => {
                        view! {
                            <PriceChart refined=series keys=PriceSeries::default() selected=SeriesKind::Refined/>
                        }
                            .into_view()
                    }
                    DetailPresentation::Empty => {
                        view! { <div class="status status-empty">"No price history available."</div> }.into_view()
                    }
                }}
            </div>
        </div>
    }
}
