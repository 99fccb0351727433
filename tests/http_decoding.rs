use insta::assert_json_snapshot;
use item_price_tracker::application::{SearchMachine, SearchPhase, SettleOutcome};
use item_price_tracker::domain::errors::AppError;
use item_price_tracker::domain::item::{PriceHistoryPoint, QualityKind, SearchResult};
use item_price_tracker::infrastructure::HttpItemRepository;
use item_price_tracker::infrastructure::http::decode_list;

#[test]
fn decodes_history_body() {
    let body = r#"[{"price": 12.33, "timestamp": 1700000000}, {"price": 13, "timestamp": 1700086400}]"#;
    let points: Vec<PriceHistoryPoint> = decode_list(body).unwrap();
    assert_eq!(
        points,
        [PriceHistoryPoint::new(12.33, 1_700_000_000), PriceHistoryPoint::new(13.0, 1_700_086_400)]
    );
}

#[test]
fn decodes_search_rows() {
    let body = r#"[{"id": 5, "name": "Team Captain", "quality": 6}, {"id": 11, "name": "Strange Scattergun", "quality": 11}]"#;
    let rows: Vec<SearchResult> = decode_list(body).unwrap();

    assert_eq!(rows[0].quality.kind(), Some(QualityKind::Unique));
    assert_eq!(rows[1].quality.css_class(), "quality-strange");
    assert_json_snapshot!(rows, @r###"
    [
      {
        "id": 5,
        "name": "Team Captain",
        "quality": 6
      },
      {
        "id": 11,
        "name": "Strange Scattergun",
        "quality": 11
      }
    ]
    "###);
}

#[test]
fn null_body_is_an_empty_list() {
    let rows: Vec<SearchResult> = decode_list("null").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn malformed_body_is_a_decode_error() {
    let err = decode_list::<SearchResult>(r#"{"error": "boom"}"#).unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[test]
fn same_origin_by_default() {
    let repository = HttpItemRepository::default();
    assert_eq!(repository.search_url("Team Captain"), "/api/items/search?q=Team%20Captain");
}

#[test]
fn unknown_quality_code_does_not_reject_the_body() {
    let body = r#"[{"id": 5, "name": "Team Captain", "quality": 6}, {"id": 9, "name": "Odd Hat", "quality": 300}]"#;
    let rows: Vec<SearchResult> = decode_list(body).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].name, "Odd Hat");
    assert_eq!(rows[1].quality.label(), "Quality 300");

    let mut machine = SearchMachine::new();
    let ticket = machine.input("hat");
    let SettleOutcome::Search(request) = machine.settle(ticket) else {
        panic!("expected a search");
    };
    machine.resolve(request.ticket, Ok(rows));
    assert_eq!(machine.phase(), SearchPhase::ShowingResults);
    assert_eq!(machine.results().len(), 2);
}
