use futures::future::{AbortHandle, Abortable};
use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::{NavigateOptions, use_navigate};
use wasm_bindgen::JsCast;

use crate::application::{RequestTicket, SearchMachine, SearchRequest, SettleOutcome};
use crate::config::AppConfig;
use crate::domain::item::{ItemRepository, SearchResult};
use crate::domain::logging::LogComponent;
use crate::event_utils::document_event_listener;
use crate::infrastructure::HttpItemRepository;
use crate::{log_debug, log_info};

/// Search-as-you-type box with a results dropdown.
#[component]
pub fn ItemSearch() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let debounce_ms = config.search_debounce_ms;
    let repository = store_value(HttpItemRepository::new(config.api_base));

    let state = create_rw_signal(SearchMachine::new());
    let pending_timer = store_value::<Option<Timeout>>(None);
    let in_flight = store_value::<Option<AbortHandle>>(None);
    let container_ref = create_node_ref::<html::Div>();
    let navigate = store_value(use_navigate());

    let run_search = move |ticket: RequestTicket| {
        let outcome = state.try_update(|m| m.settle(ticket)).unwrap_or(SettleOutcome::Ignored);
        match outcome {
            SettleOutcome::Search(SearchRequest { ticket, query }) => {
                let (abort_handle, registration) = AbortHandle::new_pair();
                in_flight.update_value(|slot| {
                    if let Some(previous) = slot.replace(abort_handle) {
                        previous.abort();
                    }
                });

                let repository = repository.get_value();
                spawn_local(async move {
                    match Abortable::new(repository.search(&query), registration).await {
                        Ok(result) => {
                            state.try_update(|m| m.resolve(ticket, result));
                        }
                        Err(_) => {
                            log_debug!(LogComponent::Presentation("ItemSearch"), "Search for '{}' aborted", query);
                        }
                    }
                });
            }
            SettleOutcome::Cleared => {
                in_flight.update_value(|slot| {
                    if let Some(previous) = slot.take() {
                        previous.abort();
                    }
                });
            }
            SettleOutcome::Ignored | SettleOutcome::Unchanged => {}
        }
    };

    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        let Some(ticket) = state.try_update(|m| m.input(text)) else {
            return;
        };
        // replacing the timer drops and cancels the previous one
        pending_timer.update_value(|slot| {
            *slot = Some(Timeout::new(debounce_ms, move || run_search(ticket)));
        });
    };

    let select = move |result: &SearchResult| {
        let Some(route) = state.try_update(|m| m.select(result)) else {
            return;
        };
        log_info!(LogComponent::Presentation("ItemSearch"), "Opening {} ({})", result.name, route);
        navigate.with_value(|navigate| navigate(&route, NavigateOptions::default()));
    };

    let outside_click = document_event_listener(ev::mousedown, move |event: web_sys::MouseEvent| {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| container.contains(Some(&node)));
        state.try_update(|m| m.pointer_down(inside));
    });

    on_cleanup(move || {
        outside_click.remove();
        pending_timer.try_update_value(|slot| {
            slot.take();
        });
        in_flight.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        });
    });

    view! {
        <div
            class="item-search"
            node_ref=container_ref
            data-phase=move || state.with(|m| m.phase().as_ref().to_string())
        >
            <div class="search-box">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search for TF2 items..."
                    prop:value=move || state.with(|m| m.query().to_string())
                    on:input=on_input
                />
                <Show when=move || state.with(SearchMachine::is_searching)>
                    <div class="spinner"></div>
                </Show>
            </div>
            <Show when=move || state.with(SearchMachine::dropdown_visible)>
                <div class="search-dropdown">
                    <For
                        each=move || state.with(|m| m.results().to_vec())
                        key=|result| result.id
                        children=move |result: SearchResult| {
                            let class = format!("search-result {}", result.quality.css_class());
                            let title = result.quality.label();
                            let name = result.name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    title=title
                                    on:click=move |_| select(&result)
                                >
                                    {name}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
