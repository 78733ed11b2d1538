//! Helpers for sort parameters carried in request data.
//!
//! These work on arbitrary [`RequestParams`] that usually hold unrelated
//! keys (page numbers, filters). They never fail: missing or malformed
//! sort parameters simply drop out of the result.
//!
//! The free functions use the default `sort_key` / `sort_dir` names. Use a
//! [`ParamNames`] (usually from [`crate::config::SortingConfig`]) when the
//! application exposes different names.

use once_cell::sync::Lazy;
use querysort_model::{ParamValue, RequestParams, SORT_DIR, SORT_KEY, SortParams};
use serde::{Deserialize, Serialize};

/// Names of the two recognized sort parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamNames {
    pub key_param: String,
    pub dir_param: String,
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            key_param: SORT_KEY.to_string(),
            dir_param: SORT_DIR.to_string(),
        }
    }
}

static DEFAULT_NAMES: Lazy<ParamNames> = Lazy::new(ParamNames::default);

impl ParamNames {
    pub fn new(key_param: impl Into<String>, dir_param: impl Into<String>) -> Self {
        Self {
            key_param: key_param.into(),
            dir_param: dir_param.into(),
        }
    }

    pub fn is_sort_param(&self, name: &str) -> bool {
        name == self.key_param || name == self.dir_param
    }

    /// Keep only the sort key / direction entries, values and order untouched.
    pub fn valid_sorting(&self, params: &RequestParams) -> RequestParams {
        let mut filtered = params.clone();
        filtered.retain(|key, _| self.is_sort_param(key));
        filtered
    }

    /// Whether `key` is the sort key currently requested in `params`.
    pub fn sort_key_active(&self, key: &str, params: &RequestParams) -> bool {
        params
            .get(&self.key_param)
            .is_some_and(|value| value.loosely_eq_str(key))
    }

    pub fn sort_params(&self, key: &str, dir: &str) -> RequestParams {
        SortParams::with_direction(key, dir)
            .into_request_params_with(&self.key_param, &self.dir_param)
    }

    /// [`ParamNames::valid_sorting`] with the direction flipped for toggle links.
    pub fn switch_sorting(&self, params: &RequestParams) -> RequestParams {
        let mut sorting = self.valid_sorting(params);
        if let Some(dir) = sorting.get_mut(&self.dir_param) {
            *dir = ParamValue::from(reverse_param_dir(dir));
        }
        sorting
    }

    pub fn extract(&self, params: &RequestParams) -> Option<SortParams> {
        SortParams::from_request_with(params, &self.key_param, &self.dir_param)
    }
}

/// Filter `params` down to the `sort_key` and `sort_dir` entries.
///
/// Despite the name, values are not checked here. Direction legality is
/// enforced when the sort is applied.
pub fn valid_sorting(params: &RequestParams) -> RequestParams {
    DEFAULT_NAMES.valid_sorting(params)
}

pub fn sort_key_active(key: &str, params: &RequestParams) -> bool {
    DEFAULT_NAMES.sort_key_active(key, params)
}

/// `"desc"` for exactly `"asc"`, `"asc"` for anything else (including garbage).
pub fn reverse_sort_dir(dir: &str) -> &'static str {
    if dir == "asc" { "desc" } else { "asc" }
}

/// [`reverse_sort_dir`] for a loosely-typed value: anything loosely equal
/// to `"asc"` (including `true`) reverses to `"desc"`.
fn reverse_param_dir(dir: &ParamValue) -> &'static str {
    if dir.loosely_eq_str("asc") { "desc" } else { "asc" }
}

/// Build `{sort_key: key, sort_dir: dir}`.
pub fn sort_params(key: &str, dir: &str) -> RequestParams {
    DEFAULT_NAMES.sort_params(key, dir)
}

pub fn switch_sorting(params: &RequestParams) -> RequestParams {
    DEFAULT_NAMES.switch_sorting(params)
}
