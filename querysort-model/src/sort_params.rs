use crate::direction::SortDirection;
use crate::request::{ParamValue, RequestParams};

/// Request parameter carrying the requested sort key.
pub const SORT_KEY: &str = "sort_key";
/// Request parameter carrying the requested sort direction.
pub const SORT_DIR: &str = "sort_dir";
/// Direction string used when a caller does not pick one.
pub const DEFAULT_SORT_DIR: &str = "asc";

/// A sort key and raw direction as they travel through request parameters.
///
/// The direction is kept as the raw string the client sent (or nothing at
/// all). Use [`SortParams::direction`] to get the normalized value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortParams {
    pub sort_key: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sort_dir: Option<String>,
}

impl SortParams {
    /// Sort by `key` ascending.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_direction(key, DEFAULT_SORT_DIR)
    }

    pub fn with_direction(key: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            sort_key: key.into(),
            sort_dir: Some(dir.into()),
        }
    }

    /// Pull the sort pair out of arbitrary request parameters using the
    /// given parameter names. Returns `None` when no sort key is present;
    /// a missing direction stays missing.
    pub fn from_request_with(
        params: &RequestParams,
        key_param: &str,
        dir_param: &str,
    ) -> Option<Self> {
        let sort_key = params.get(key_param)?.to_param_string();
        let sort_dir = params.get(dir_param).map(ParamValue::to_param_string);
        Some(Self { sort_key, sort_dir })
    }

    pub fn from_request(params: &RequestParams) -> Option<Self> {
        Self::from_request_with(params, SORT_KEY, SORT_DIR)
    }

    /// Normalized direction; unknown or missing values become the default.
    pub fn direction(&self) -> SortDirection {
        self.sort_dir
            .as_deref()
            .map(SortDirection::normalize)
            .unwrap_or_default()
    }

    pub fn into_request_params_with(self, key_param: &str, dir_param: &str) -> RequestParams {
        let mut params = RequestParams::with_capacity(2);
        params.insert(key_param, self.sort_key);
        if let Some(dir) = self.sort_dir {
            params.insert(dir_param, dir);
        }
        params
    }

    pub fn into_request_params(self) -> RequestParams {
        self.into_request_params_with(SORT_KEY, SORT_DIR)
    }

    /// Render as a URL query string, e.g. `sort_key=title&sort_dir=desc`.
    pub fn into_query_string(self) -> String {
        self.into_request_params().to_query_string()
    }
}

impl From<SortParams> for RequestParams {
    fn from(params: SortParams) -> Self {
        params.into_request_params()
    }
}
