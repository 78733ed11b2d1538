mod support;

use querysort_core::prelude::*;
use querysort_core::{
    SortingConfig, reverse_sort_dir, sort_key_active, sort_params, switch_sorting, valid_sorting,
};
use support::Track;

fn listing_request() -> RequestParams {
    RequestParams::from_query_string("?genre=jazz&sort_key=name&page=2&sort_dir=asc")
}

#[test]
fn test_valid_sorting_from_query_string() {
    let filtered = valid_sorting(&listing_request());

    assert_eq!(filtered.to_query_string(), "sort_key=name&sort_dir=asc");
}

#[test]
fn test_model_helpers_match_free_functions() {
    let request = listing_request();

    assert_eq!(Track::valid_sorting(&request), valid_sorting(&request));
    assert_eq!(Track::switch_sorting(&request), switch_sorting(&request));
    assert_eq!(Track::sort_params("name", "desc"), sort_params("name", "desc"));
    assert_eq!(Track::reverse_sort_dir("asc"), reverse_sort_dir("asc"));
    assert_eq!(
        Track::sort_key_active("name", &request),
        sort_key_active("name", &request)
    );
}

#[test]
fn test_toggle_link_for_active_column() {
    let request = listing_request();

    let links: Vec<(String, String)> = ["name", "plays"]
        .into_iter()
        .map(|column| {
            let params = if Track::sort_key_active(column, &request) {
                Track::switch_sorting(&request)
            } else {
                SortParams::new(column).into_request_params()
            };
            (column.to_string(), params.to_query_string())
        })
        .collect();

    assert_eq!(
        links,
        vec![
            ("name".to_string(), "sort_key=name&sort_dir=desc".to_string()),
            ("plays".to_string(), "sort_key=plays&sort_dir=asc".to_string()),
        ]
    );
}

#[test]
fn test_switch_twice_from_garbage_settles_on_desc() {
    let request = RequestParams::new()
        .with("sort_key", "name")
        .with("sort_dir", "sideways");

    let once = switch_sorting(&request);
    let twice = switch_sorting(&once);

    assert_eq!(once.get("sort_dir"), Some(&ParamValue::from("asc")));
    assert_eq!(twice.get("sort_dir"), Some(&ParamValue::from("desc")));
}

#[test]
fn test_json_request_body() {
    let body = serde_json::json!({ "sort_key": 10, "sort_dir": "desc", "per_page": 25 });
    let request = RequestParams::try_from(body).unwrap();

    assert!(sort_key_active("10", &request));
    assert!(sort_key_active("10.0", &request));
    assert!(!sort_key_active("name", &request));
    assert_eq!(valid_sorting(&request).len(), 2);
}

#[test]
fn test_configured_names_from_toml() {
    let config = SortingConfig::from_toml_str(
        "[sorting]\nkey_param = \"order\"\ndir_param = \"direction\"\n",
    )
    .unwrap();
    let request = RequestParams::from_query_string("order=name&direction=desc&page=4");

    let names = &config.params;
    assert_eq!(
        names.switch_sorting(&request).to_query_string(),
        "order=name&direction=asc"
    );
    assert!(valid_sorting(&request).is_empty());
}
