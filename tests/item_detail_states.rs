mod common;

use common::{InMemoryItems, sample_history, team_captain};
use futures::executor::block_on;
use item_price_tracker::application::{DetailPresentation, ItemDetailState};
use item_price_tracker::domain::errors::AppError;
use item_price_tracker::domain::item::{ItemId, ItemRepository};

/// Mount the detail view for `id` and let both fetches land.
fn load(state: &mut ItemDetailState, repository: &InMemoryItems, id: &str) {
    let load = state.begin(ItemId::new(id));
    let history = block_on(repository.price_history(&load.item_id));
    let name = block_on(repository.lookup_name(&load.item_id));
    assert!(state.apply_history(load.history, history));
    assert!(state.apply_name(load.name, name));
}

#[test]
fn history_present_shows_chart() {
    let repository = InMemoryItems::default()
        .with_history("5", Ok(sample_history()))
        .with_search("5", vec![team_captain()]);
    let mut state = ItemDetailState::new();

    load(&mut state, &repository, "5");

    assert!(!state.is_loading());
    assert_eq!(state.error(), None);
    match state.presentation() {
        DetailPresentation::Chart(series) => assert_eq!(series.len(), 3),
        other => panic!("expected a chart, got {other:?}"),
    }
    assert_eq!(state.heading(), "Team Captain Price History");
}

#[test]
fn empty_history_shows_message_not_chart() {
    let repository = InMemoryItems::default().with_history("9", Ok(Vec::new()));
    let mut state = ItemDetailState::new();

    load(&mut state, &repository, "9");

    assert_eq!(state.presentation(), DetailPresentation::Empty);
    assert_eq!(state.heading(), "Item Price History");
}

#[test]
fn failed_history_shows_error_over_previous_chart() {
    let repository = InMemoryItems::default()
        .with_history("5", Ok(sample_history()))
        .with_history("6", Err(AppError::http_status(500, "Internal Server Error")));
    let mut state = ItemDetailState::new();

    load(&mut state, &repository, "5");
    assert!(matches!(state.presentation(), DetailPresentation::Chart(_)));

    load(&mut state, &repository, "6");

    assert_eq!(
        state.presentation(),
        DetailPresentation::Failed("Failed to fetch price history".to_string())
    );
    assert!(state.history().is_empty());
}

#[test]
fn name_lookup_failure_keeps_fallback_heading() {
    let repository = InMemoryItems::default().with_history("5", Ok(sample_history())).failing();
    let mut state = ItemDetailState::new();

    load(&mut state, &repository, "5");

    assert_eq!(state.item_name(), "");
    assert_eq!(state.heading(), "Item Price History");
    assert!(matches!(state.presentation(), DetailPresentation::Chart(_)));
}

#[test]
fn name_lookup_uses_id_as_query() {
    let repository = InMemoryItems::default().with_history("5", Ok(Vec::new()));
    let mut state = ItemDetailState::new();

    load(&mut state, &repository, "5");

    assert_eq!(*repository.searched.borrow(), ["5"]);
}

#[test]
fn response_for_previous_item_is_dropped() {
    let repository = InMemoryItems::default()
        .with_history("5", Ok(sample_history()))
        .with_history("6", Ok(Vec::new()))
        .with_search("5", vec![team_captain()]);
    let mut state = ItemDetailState::new();

    let first = state.begin(ItemId::new("5"));
    let second = state.begin(ItemId::new("6"));

    let history = block_on(repository.price_history(&second.item_id));
    assert!(state.apply_history(second.history, history));

    // the slower load for item 5 arrives afterwards
    let stale_history = block_on(repository.price_history(&first.item_id));
    let stale_name = block_on(repository.lookup_name(&first.item_id));
    assert!(!state.apply_history(first.history, stale_history));
    assert!(!state.apply_name(first.name, stale_name));

    assert_eq!(state.item_id(), Some(&ItemId::new("6")));
    assert_eq!(state.presentation(), DetailPresentation::Empty);
    assert_eq!(state.heading(), "Item Price History");
}
