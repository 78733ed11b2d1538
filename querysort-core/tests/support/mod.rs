//! Fixture models shared by the integration tests.
#![allow(dead_code)]

use querysort_core::prelude::*;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness; `RUST_LOG=querysort_core=debug`
/// shows direction fallbacks and skipped keys.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory query that records every mutation applied to it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingQuery {
    pub clauses: Vec<String>,
    pub handler_calls: Vec<(&'static str, SortDirection)>,
}

impl RecordingQuery {
    pub fn with_base(clause: &str) -> Self {
        Self {
            clauses: vec![clause.to_string()],
            handler_calls: Vec::new(),
        }
    }
}

impl OrderBy for RecordingQuery {
    fn order_by(&mut self, column: &str, direction: SortDirection) -> &mut Self {
        self.clauses
            .push(format!("order by {column} {}", direction.sql_keyword()));
        self
    }
}

/// Model with a plain column sort and an aggregate sort.
pub struct Track;

impl Sortable for Track {
    type Query = RecordingQuery;

    fn sortables() -> SortSpec<Self::Query> {
        SortSpec::new()
            .on("name", |query: &mut RecordingQuery, dir| {
                query.handler_calls.push(("name", dir));
                query.order_by("name", dir);
            })
            .on("plays", |query: &mut RecordingQuery, dir| {
                query.handler_calls.push(("plays", dir));
                query.clauses.push("select max(play_count) as max_plays".to_string());
                query.clauses.push("group by tracks.id".to_string());
                query.order_by("max_plays", dir);
            })
    }
}

/// Model that never declared any sortables.
pub struct Unsorted;

impl Sortable for Unsorted {
    type Query = RecordingQuery;
}

pub const INVALID_DIRECTIONS: &[&str] =
    &["", "ASC", "Desc", "descending", " asc", "asc ", "up", "1", "null"];
