mod support;

use querysort_core::prelude::*;
use support::{INVALID_DIRECTIONS, RecordingQuery, Track, Unsorted, init_tracing};

#[test]
fn test_invalid_direction_behaves_like_ascending() {
    init_tracing();
    for raw in INVALID_DIRECTIONS {
        for key in ["name", "plays", "missing"] {
            let mut with_raw = RecordingQuery::with_base("select * from tracks");
            let mut with_asc = with_raw.clone();

            Track::scope_sort(&mut with_raw, key, raw);
            Track::scope_sort(&mut with_asc, key, "asc");

            assert_eq!(with_raw, with_asc, "direction {raw:?} for key {key:?}");
        }
    }
}

#[test]
fn test_unknown_key_leaves_query_unchanged() {
    init_tracing();
    for dir in ["asc", "desc", "garbage"] {
        let mut query = RecordingQuery::with_base("select * from tracks");
        let before = query.clone();

        Track::scope_sort(&mut query, "duration", dir);

        assert_eq!(query, before);
        assert!(query.handler_calls.is_empty());
    }
}

#[test]
fn test_known_key_invokes_handler_exactly_once() {
    for dir in SortDirection::ALL {
        let mut query = RecordingQuery::default();

        Track::scope_sort(&mut query, "name", dir.as_str());

        assert_eq!(query.handler_calls, vec![("name", dir)]);
        assert_eq!(
            query.clauses,
            vec![format!("order by name {}", dir.sql_keyword())]
        );
    }
}

#[test]
fn test_aggregate_handler_adds_clauses_before_ordering() {
    let mut query = RecordingQuery::with_base("select * from tracks");

    Track::scope_sort(&mut query, "plays", "desc");

    assert_eq!(
        query.clauses,
        vec![
            "select * from tracks",
            "select max(play_count) as max_plays",
            "group by tracks.id",
            "order by max_plays DESC",
        ]
    );
}

#[test]
fn test_model_without_sortables_is_always_noop() {
    let mut query = RecordingQuery::with_base("select * from albums");
    let before = query.clone();

    Unsorted::scope_sort(&mut query, "name", "desc");

    assert_eq!(query, before);
}

#[test]
fn test_scope_sort_returns_same_query_for_chaining() {
    let mut query = RecordingQuery::default();

    Track::scope_sort(&mut query, "name", "asc").order_by("id", SortDirection::Asc);

    assert_eq!(
        query.clauses,
        vec!["order by name ASC", "order by id ASC"]
    );
}

#[test]
fn test_request_round_trip_through_model() {
    let request = RequestParams::from_query_string("page=3&sort_key=plays&sort_dir=desc");
    let sort = SortParams::from_request(&request).unwrap();

    let mut query = RecordingQuery::default();
    query.sorted_by::<Track>(&sort.sort_key, sort.sort_dir.as_deref().unwrap_or(DEFAULT_SORT_DIR));

    assert_eq!(query.handler_calls, vec![("plays", SortDirection::Desc)]);
}
