pub use crate::direction::SortDirection;
pub use crate::error::ModelError;
pub use crate::request::{ParamValue, RequestParams};
pub use crate::sort_params::{DEFAULT_SORT_DIR, SORT_DIR, SORT_KEY, SortParams};
