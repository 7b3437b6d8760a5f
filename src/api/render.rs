//! Rendering operations for the WASM API
//!
//! Lets the browser render the same fragments as the server: the item map
//! container, availability checks, snippets, and help text popovers.

use crate::api::helpers::{deserialize, js_error, lock_environment, with_environment};
use crate::config::{CatalogConfig, Settings};
use crate::helpers::ViewEnvironment;
use crate::i18n::Translations;
use crate::models::SolrDocument;
use crate::{wasm_log, wasm_warn};
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Load settings and a locale catalog; replaces any earlier environment
///
/// # Arguments
/// * `settings_yaml` - Application settings (YAML)
/// * `locale` - Locale to select from the catalog, e.g. `en`
/// * `locale_yaml` - Locale catalog (YAML)
/// * `basemap` - Optional basemap provider
#[wasm_bindgen(js_name = initViewEnvironment)]
pub fn init_view_environment(
    settings_yaml: &str,
    locale: &str,
    locale_yaml: &str,
    basemap: Option<String>,
) -> Result<(), JsValue> {
    let settings = Settings::from_yaml_str(settings_yaml).map_err(|e| js_error("Settings", e))?;
    let translations =
        Translations::from_yaml_str(locale, locale_yaml).map_err(|e| js_error("Locale", e))?;
    let env = ViewEnvironment::new(settings, translations)
        .map_err(|e| js_error("Partials", e))?
        .with_catalog(CatalogConfig {
            basemap_provider: basemap,
        });

    let mut guard = lock_environment()?;
    if guard.is_some() {
        wasm_warn!("Replacing existing view environment");
    }
    *guard = Some(env);
    wasm_log!("View environment initialized (locale={})", locale);
    Ok(())
}

fn load_document(env: &ViewEnvironment, record: JsValue) -> Result<SolrDocument, JsValue> {
    let value: Value = deserialize(record, "Invalid record")?;
    if !value.is_object() {
        return Err(js_error("Invalid record", "expected an object"));
    }
    Ok(SolrDocument::from_value(value, &env.settings))
}

/// Render the item map container for a record
#[wasm_bindgen(js_name = renderViewerContainer)]
pub fn render_viewer_container(record: JsValue, signed_in: bool) -> Result<String, JsValue> {
    with_environment(|env| {
        let document = load_document(env, record)?;
        let ctx = env.context().with_document(&document).signed_in(signed_in);
        ctx.viewer_container()
            .map(|html| html.into_string())
            .ok_or_else(|| js_error("renderViewerContainer", "no record"))
    })
}

/// Whether a record is viewable by the current user
#[wasm_bindgen(js_name = documentAvailable)]
pub fn document_available(record: JsValue, signed_in: bool) -> Result<bool, JsValue> {
    with_environment(|env| {
        let document = load_document(env, record)?;
        Ok(env
            .context()
            .with_document(&document)
            .signed_in(signed_in)
            .document_available())
    })
}

/// Search result snippet for a field value (string or array)
#[wasm_bindgen(js_name = renderSnippet)]
pub fn render_snippet(value: JsValue) -> Result<String, JsValue> {
    let value: Value = deserialize(value, "Invalid field value")?;
    with_environment(|env| Ok(env.context().snippit(&value)))
}

/// Help text popover markup for a feature/key pair
#[wasm_bindgen(js_name = renderHelpText)]
pub fn render_help_text(feature: &str, key: &str) -> Result<String, JsValue> {
    with_environment(|env| {
        Ok(env
            .context()
            .render_help_text_entry(feature, key)
            .into_string())
    })
}

/// `data-map` value for the results map
#[wasm_bindgen(js_name = resultsMapSelector)]
pub fn results_map_selector(controller_name: &str) -> Result<String, JsValue> {
    with_environment(|env| {
        Ok(env
            .context()
            .results_js_map_selector(controller_name)
            .to_string())
    })
}
