#![cfg(feature = "sqlx")]

use querysort_core::prelude::*;
use querysort_core::push_order_by_nulls;
use sqlx::{Postgres, QueryBuilder};

type PgQuery = QueryBuilder<'static, Postgres>;

struct Movie;

impl Sortable for Movie {
    type Query = PgQuery;

    fn sortables() -> SortSpec<Self::Query> {
        SortSpec::new()
            .on("title", |query: &mut PgQuery, dir| {
                query.order_by("LOWER(m.title)", dir).order_by("m.id", dir);
            })
            .on("released", |query: &mut PgQuery, dir| {
                push_order_by_nulls(query, "m.release_date", dir, NullsPosition::Last);
            })
            .on("watch_count", |query: &mut PgQuery, dir| {
                query.push(" GROUP BY m.id");
                query.order_by("COUNT(w.user_id)", dir);
            })
    }
}

fn base() -> PgQuery {
    QueryBuilder::new("SELECT m.id FROM movies m LEFT JOIN watches w ON w.movie_id = m.id")
}

#[test]
fn test_title_sort() {
    let mut query = base();
    Movie::scope_sort(&mut query, "title", "desc");

    assert_eq!(
        query.sql(),
        "SELECT m.id FROM movies m LEFT JOIN watches w ON w.movie_id = m.id \
         ORDER BY LOWER(m.title) DESC, m.id DESC"
    );
}

#[test]
fn test_nullable_column_sort_with_bad_direction() {
    let mut query = base();
    Movie::scope_sort(&mut query, "released", "DROP TABLE movies");

    assert!(query.sql().ends_with(" ORDER BY m.release_date ASC NULLS LAST"));
}

#[test]
fn test_aggregate_sort() {
    let mut query = base();
    Movie::scope_sort(&mut query, "watch_count", "desc");

    assert!(query.sql().ends_with(" GROUP BY m.id ORDER BY COUNT(w.user_id) DESC"));
}

#[test]
fn test_unknown_key_keeps_sql() {
    let mut query = base();
    let before = query.sql().to_string();

    Movie::scope_sort(&mut query, "m.title; --", "asc");

    assert_eq!(query.sql(), before);
}
