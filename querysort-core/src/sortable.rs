//! The per-model sorting capability.
//!
//! A model opts in by implementing [`Sortable`] and returning its handler
//! table from [`Sortable::sortables`]. Everything else has a default:
//!
//! ```
//! use querysort_core::prelude::*;
//!
//! struct Movie;
//!
//! impl Sortable for Movie {
//!     type Query = Vec<String>;
//!
//!     fn sortables() -> SortSpec<Self::Query> {
//!         SortSpec::new().on("title", |query: &mut Vec<String>, dir| {
//!             query.push(format!("title {}", dir.sql_keyword()));
//!         })
//!     }
//! }
//!
//! let mut query = Vec::new();
//! Movie::scope_sort(&mut query, "title", "sideways");
//! assert_eq!(query, ["title ASC"]);
//! ```

use querysort_model::{RequestParams, SortDirection};
use tracing::debug;

use crate::handlers::SortSpec;
use crate::params;

pub trait Sortable {
    /// Query object the handlers mutate.
    type Query;

    /// Directions accepted from request input.
    fn sort_directions() -> &'static [SortDirection] {
        &SortDirection::ALL
    }

    /// Direction used when the requested one is not accepted.
    fn default_sort_dir() -> SortDirection {
        SortDirection::Asc
    }

    /// Sort key to handler mapping for this model. Empty unless overridden.
    ///
    /// Called on every [`Sortable::scope_sort`], so a table built inline is
    /// rebuilt (one allocation per handler) per request. Models on hot paths
    /// can build it once in a `once_cell::sync::Lazy<SortSpec<_>>` static and
    /// return a clone, which only bumps a reference count.
    fn sortables() -> SortSpec<Self::Query> {
        SortSpec::new()
    }

    /// Resolve a raw request direction against this model's accepted set.
    fn resolve_sort_dir(direction: &str) -> SortDirection {
        match Self::sort_directions()
            .iter()
            .copied()
            .find(|dir| dir.as_str() == direction)
        {
            Some(dir) => dir,
            None => {
                let fallback = Self::default_sort_dir();
                debug!(
                    model = std::any::type_name::<Self>(),
                    requested = direction,
                    fallback = fallback.as_str(),
                    "unrecognized sort direction, using default"
                );
                fallback
            }
        }
    }

    /// Apply the sort registered under `key` to `query`.
    ///
    /// Unknown keys leave the query untouched and unrecognized directions
    /// fall back to [`Sortable::default_sort_dir`]. Never fails.
    fn scope_sort<'q>(
        query: &'q mut Self::Query,
        key: &str,
        direction: &str,
    ) -> &'q mut Self::Query {
        let direction = Self::resolve_sort_dir(direction);
        let handlers = Self::sortables();

        if !handlers.apply(query, key, direction) {
            debug!(
                model = std::any::type_name::<Self>(),
                key,
                "unknown sort key, query left unchanged"
            );
        }

        query
    }

    fn valid_sorting(params: &RequestParams) -> RequestParams {
        params::valid_sorting(params)
    }

    fn sort_key_active(key: &str, params: &RequestParams) -> bool {
        params::sort_key_active(key, params)
    }

    fn reverse_sort_dir(dir: &str) -> &'static str {
        params::reverse_sort_dir(dir)
    }

    fn sort_params(key: &str, dir: &str) -> RequestParams {
        params::sort_params(key, dir)
    }

    fn switch_sorting(params: &RequestParams) -> RequestParams {
        params::switch_sorting(params)
    }
}

/// Query-side entry point, so callers can write
/// `query.sorted_by::<Movie>("title", "desc")`.
pub trait SortQueryExt: Sized {
    fn sorted_by<M>(&mut self, key: &str, direction: &str) -> &mut Self
    where
        M: Sortable<Query = Self>;
}

impl<Q> SortQueryExt for Q {
    fn sorted_by<M>(&mut self, key: &str, direction: &str) -> &mut Self
    where
        M: Sortable<Query = Self>,
    {
        M::scope_sort(self, key, direction)
    }
}
