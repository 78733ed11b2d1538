//! `ORDER BY` support for query objects.
//!
//! Handlers are free to mutate their query however they like, but most of
//! them just append an ordering term. [`OrderBy`] captures that mutation so
//! handlers can be written once against any builder that supports it.

use querysort_model::SortDirection;

/// Query objects that accept ordering terms.
pub trait OrderBy {
    /// Append `column` in `direction` to the query's ordering.
    ///
    /// `column` is trusted SQL (a column name or expression chosen by the
    /// handler), never request input.
    fn order_by(&mut self, column: &str, direction: SortDirection) -> &mut Self;
}

/// Where null values land in an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsPosition {
    First,
    Last,
}

impl NullsPosition {
    pub const fn sql_keyword(self) -> &'static str {
        match self {
            NullsPosition::First => "FIRST",
            NullsPosition::Last => "LAST",
        }
    }
}

/// Whether the tail of `sql` is an `ORDER BY` list that can take another term.
///
/// Only an `ORDER BY` at the outermost nesting level of the tail counts; one
/// closed inside a subquery or window definition does not.
fn has_open_order_by(sql: &str) -> bool {
    let upper = sql.to_ascii_uppercase();
    let Some(start) = last_order_by(&upper) else {
        return false;
    };

    let mut depth = 0usize;
    for c in upper[start..].chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    true
}

/// Byte offset of the last `ORDER BY` keyword pair in uppercased `sql`.
///
/// `ORDER` must start a word (preceded by whitespace, `)` or nothing) and be
/// separated from `BY` by any run of whitespace, so newline- and
/// tab-formatted SQL is recognized while identifiers like `REORDER_BY` are not.
fn last_order_by(upper: &str) -> Option<usize> {
    let bytes = upper.as_bytes();
    upper
        .match_indices("ORDER")
        .map(|(idx, _)| idx)
        .filter(|&idx| {
            let starts_word = idx == 0
                || bytes[idx - 1] == b')'
                || bytes[idx - 1].is_ascii_whitespace();
            if !starts_word {
                return false;
            }
            let rest = &bytes[idx + "ORDER".len()..];
            let gap = rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
            if gap == 0 || !rest[gap..].starts_with(b"BY") {
                return false;
            }
            rest.get(gap + 2).is_none_or(|b| b.is_ascii_whitespace())
        })
        .last()
}

#[cfg(feature = "sqlx")]
mod sql_builder {
    use sqlx::{Database, QueryBuilder};

    use super::{NullsPosition, OrderBy, SortDirection, has_open_order_by};

    fn push_term<DB: Database>(builder: &mut QueryBuilder<'_, DB>, column: &str) {
        if has_open_order_by(builder.sql()) {
            builder.push(", ");
        } else {
            builder.push(" ORDER BY ");
        }
        builder.push(column);
    }

    impl<DB: Database> OrderBy for QueryBuilder<'_, DB> {
        fn order_by(&mut self, column: &str, direction: SortDirection) -> &mut Self {
            push_term(self, column);
            self.push(" ");
            self.push(direction.sql_keyword());
            self
        }
    }

    /// Like [`OrderBy::order_by`], with an explicit `NULLS FIRST|LAST`.
    pub fn push_order_by_nulls<'b, 'args, DB: Database>(
        builder: &'b mut QueryBuilder<'args, DB>,
        column: &str,
        direction: SortDirection,
        nulls: NullsPosition,
    ) -> &'b mut QueryBuilder<'args, DB> {
        push_term(builder, column);
        builder.push(" ");
        builder.push(direction.sql_keyword());
        builder.push(" NULLS ");
        builder.push(nulls.sql_keyword());
        builder
    }
}

#[cfg(feature = "sqlx")]
pub use sql_builder::push_order_by_nulls;
