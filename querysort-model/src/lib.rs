//! Shared value types for querysort: sort directions, request parameters
//! and the sort key / direction pair carried between them.
#![allow(missing_docs)]

pub mod direction;
pub mod error;
pub mod prelude;
pub mod request;
pub mod sort_params;

pub use direction::SortDirection;
pub use error::{ModelError, Result as ModelResult};
pub use request::{ParamValue, RequestParams};
pub use sort_params::{DEFAULT_SORT_DIR, SORT_DIR, SORT_KEY, SortParams};
