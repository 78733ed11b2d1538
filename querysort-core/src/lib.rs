//! Per-model, direction-aware sorting for query builders.
//!
//! A model implements [`Sortable`] to expose a table of named sort keys,
//! each backed by a handler that mutates the model's query object. Request
//! input is resolved through [`Sortable::scope_sort`], which normalizes the
//! direction and ignores unknown keys, so untrusted query strings can be
//! passed straight through.
//!
//! The [`params`] helpers filter, test and flip `sort_key` / `sort_dir`
//! pairs inside arbitrary request parameters, which is what pagination
//! links need to carry the current sort forward or toggle it.

#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod order;
pub mod params;
pub mod prelude;
pub mod sortable;

pub use config::SortingConfig;
pub use error::{Result, SortError};
pub use handlers::{SortHandler, SortSpec};
#[cfg(feature = "sqlx")]
pub use order::push_order_by_nulls;
pub use order::{NullsPosition, OrderBy};
pub use params::{
    ParamNames, reverse_sort_dir, sort_key_active, sort_params, switch_sorting,
    valid_sorting,
};
pub use sortable::{SortQueryExt, Sortable};

pub use querysort_model::{
    DEFAULT_SORT_DIR, ModelError, ParamValue, RequestParams, SORT_DIR, SORT_KEY,
    SortDirection, SortParams,
};
