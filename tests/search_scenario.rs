mod common;

use common::{InMemoryItems, team_captain};
use futures::executor::block_on;
use item_price_tracker::application::{ResolveOutcome, SearchMachine, SearchPhase, SettleOutcome};
use item_price_tracker::domain::item::{ItemRepository, SearchResult};

/// Type `text`, let the debounce settle and run whatever search it asks for.
fn type_and_settle(machine: &mut SearchMachine, repository: &InMemoryItems, text: &str) -> SettleOutcome {
    let ticket = machine.input(text);
    let outcome = machine.settle(ticket);
    if let SettleOutcome::Search(request) = &outcome {
        let result = block_on(repository.search(&request.query));
        assert_eq!(machine.resolve(request.ticket, result), ResolveOutcome::Applied);
    }
    outcome
}

#[test]
fn scout_hat_opens_team_captain() {
    let repository = InMemoryItems::default().with_search("scout hat", vec![team_captain()]);
    let mut machine = SearchMachine::new();

    type_and_settle(&mut machine, &repository, "scout hat");

    assert_eq!(machine.phase(), SearchPhase::ShowingResults);
    assert!(machine.dropdown_visible());
    let names: Vec<&str> = machine.results().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Team Captain"]);

    let mut navigations = Vec::new();
    let picked = machine.results()[0].clone();
    navigations.push(machine.select(&picked));

    assert_eq!(navigations, ["/items/5"]);
    assert!(!machine.is_open());
    assert!(!machine.dropdown_visible());
    assert_eq!(repository.search_calls.get(), 1);
}

#[test]
fn clearing_query_empties_results_without_request() {
    let repository = InMemoryItems::default().with_search("scout hat", vec![team_captain()]);
    let mut machine = SearchMachine::new();

    type_and_settle(&mut machine, &repository, "scout hat");
    assert_eq!(repository.search_calls.get(), 1);

    let outcome = type_and_settle(&mut machine, &repository, "");

    assert_eq!(outcome, SettleOutcome::Cleared);
    assert!(machine.results().is_empty());
    assert_eq!(machine.phase(), SearchPhase::Idle);
    assert_eq!(repository.search_calls.get(), 1);
}

#[test]
fn empty_response_shows_no_results() {
    let repository = InMemoryItems::default();
    let mut machine = SearchMachine::new();

    type_and_settle(&mut machine, &repository, "nothing like this");

    assert_eq!(machine.phase(), SearchPhase::NoResults);
    assert!(!machine.dropdown_visible());
}

#[test]
fn failed_search_clears_list_quietly() {
    let ok = InMemoryItems::default().with_search("scout", vec![team_captain()]);
    let broken = InMemoryItems::default().failing();
    let mut machine = SearchMachine::new();

    type_and_settle(&mut machine, &ok, "scout");
    assert_eq!(machine.results().len(), 1);

    type_and_settle(&mut machine, &broken, "scout hat");

    assert_eq!(machine.phase(), SearchPhase::Failed);
    assert!(machine.results().is_empty());
    assert!(!machine.is_searching());
    // dropdown was open when the failure landed and stays open
    assert!(machine.is_open());
}

#[test]
fn failed_search_leaves_dismissed_dropdown_closed() {
    let ok = InMemoryItems::default().with_search("scout", vec![team_captain()]);
    let broken = InMemoryItems::default().failing();
    let mut machine = SearchMachine::new();
    type_and_settle(&mut machine, &ok, "scout");

    let ticket = machine.input("scout hat");
    let SettleOutcome::Search(request) = machine.settle(ticket) else {
        panic!("expected a search");
    };
    machine.pointer_down(false);
    let result = block_on(broken.search(&request.query));
    machine.resolve(request.ticket, result);

    assert!(!machine.is_open());
    assert_eq!(machine.phase(), SearchPhase::Failed);
}

#[test]
fn slow_early_response_cannot_overwrite_later_one() {
    let repository = InMemoryItems::default()
        .with_search("scout", vec![team_captain()])
        .with_search("scout hat", vec![team_captain(), SearchResult::new(7, "Scout Hat", 11)]);
    let mut machine = SearchMachine::new();

    let ticket = machine.input("scout");
    let first = match machine.settle(ticket) {
        SettleOutcome::Search(request) => request,
        other => panic!("expected a search, got {other:?}"),
    };
    let ticket = machine.input("scout hat");
    let second = match machine.settle(ticket) {
        SettleOutcome::Search(request) => request,
        other => panic!("expected a search, got {other:?}"),
    };

    // second answer lands first
    let late = block_on(repository.search(&second.query));
    assert_eq!(machine.resolve(second.ticket, late), ResolveOutcome::Applied);
    let early = block_on(repository.search(&first.query));
    assert_eq!(machine.resolve(first.ticket, early), ResolveOutcome::Stale);

    assert_eq!(machine.results().len(), 2);
    assert_eq!(machine.phase(), SearchPhase::ShowingResults);
}

#[test]
fn outside_press_closes_dropdown_inside_press_keeps_it() {
    let repository = InMemoryItems::default().with_search("scout hat", vec![team_captain()]);
    let mut machine = SearchMachine::new();
    type_and_settle(&mut machine, &repository, "scout hat");

    machine.pointer_down(true);
    assert!(machine.dropdown_visible());

    machine.pointer_down(false);
    assert!(!machine.dropdown_visible());
    assert_eq!(machine.results().len(), 1);

    // typing reopens with the current rows
    machine.input("scout hats");
    assert!(machine.dropdown_visible());
}
