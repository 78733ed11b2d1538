pub use crate::handlers::{SortHandler, SortSpec};
pub use crate::order::{NullsPosition, OrderBy};
pub use crate::params::ParamNames;
pub use crate::sortable::{SortQueryExt, Sortable};
pub use querysort_model::prelude::*;
