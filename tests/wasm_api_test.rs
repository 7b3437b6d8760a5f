// WASM API smoke test
//
// Runs only in the browser test harness (wasm-pack test --headless).

#![cfg(target_arch = "wasm32")]

use geoblacklight_views::api::{
    document_available, init_view_environment, render_help_text, render_viewer_container,
    results_map_selector,
};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const LOCALE: &str = "en:\n  geoblacklight:\n    help_text: {}\n";

fn record(access: &str) -> JsValue {
    let value = serde_json::json!({
        "id": "stanford-abc",
        "dct_accessRights_s": access,
        "schema_provider_s": "Stanford"
    });
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

#[wasm_bindgen_test]
fn test_render_viewer_container_in_browser() {
    init_view_environment("INSTITUTION: Stanford\n", "en", LOCALE, None).unwrap();

    let html = render_viewer_container(record("Public"), false).unwrap();
    assert!(html.starts_with("<div id=\"map\""));

    assert!(!document_available(record("Restricted"), false).unwrap());
    assert!(document_available(record("Restricted"), true).unwrap());

    assert_eq!(results_map_selector("bookmarks").unwrap(), "bookmarks");
    assert!(render_help_text("viewer_protocol", "wms")
        .unwrap()
        .contains("translation-missing"));
}

#[wasm_bindgen_test]
fn test_non_object_record_is_rejected() {
    init_view_environment("INSTITUTION: Stanford\n", "en", LOCALE, None).unwrap();

    let err = render_viewer_container(JsValue::from_str("not a record"), false).unwrap_err();
    assert_eq!(
        err.as_string().unwrap(),
        "Invalid record: expected an object"
    );
}
