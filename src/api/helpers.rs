//! Shared helpers for WASM API operations
//!
//! Console logging macros, JS value conversion, and access to the loaded
//! view environment.

use crate::helpers::ViewEnvironment;
use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

// Environment loaded by `initViewEnvironment`
lazy_static! {
    static ref ENVIRONMENT: Mutex<Option<ViewEnvironment>> = Mutex::new(None);
}

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(error_context, e))
}

/// Log an error and convert it to a JS string value
pub fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let msg = format!("{}: {}", context, err);
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Environment Access
// ============================================================================

/// Lock the environment slot
pub fn lock_environment() -> Result<MutexGuard<'static, Option<ViewEnvironment>>, JsValue> {
    ENVIRONMENT
        .lock()
        .map_err(|e| js_error("Environment lock poisoned", e))
}

/// Run `f` against the loaded environment
pub fn with_environment<R>(f: impl FnOnce(&ViewEnvironment) -> Result<R, JsValue>) -> Result<R, JsValue> {
    let guard = lock_environment()?;
    let env = guard
        .as_ref()
        .ok_or_else(|| JsValue::from_str("View environment not initialized"))?;
    f(env)
}
