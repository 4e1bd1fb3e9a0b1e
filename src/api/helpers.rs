//! Shared helpers for the placement API
//!
//! Browser console output, JS value conversion and parsing of the string
//! arguments the renderer passes in.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::{ArrowColor, GridMode, MotionType};

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log an info message to the browser console
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message to the browser console
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message to the browser console
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_info(msg: &str) {
    info(&format!("[placement] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[placement] {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[placement] {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript; maps become plain objects
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Argument Parsing
// ============================================================================

/// Parse an arrow color name ("blue" / "red")
pub fn parse_color(color: &str) -> Result<ArrowColor, String> {
    match color.to_ascii_lowercase().as_str() {
        "blue" => Ok(ArrowColor::Blue),
        "red" => Ok(ArrowColor::Red),
        other => Err(format!("Invalid arrow color: '{}' (must be 'blue' or 'red')", other)),
    }
}

/// Parse a grid mode name ("diamond" / "box")
pub fn parse_grid_mode(grid_mode: &str) -> Result<GridMode, String> {
    match grid_mode.to_ascii_lowercase().as_str() {
        "diamond" => Ok(GridMode::Diamond),
        "box" => Ok(GridMode::Box),
        other => Err(format!("Invalid grid mode: '{}' (must be 'diamond' or 'box')", other)),
    }
}

/// Parse a motion type name ("pro", "anti", ...)
pub fn parse_motion_type(motion_type: &str) -> Result<MotionType, String> {
    let lower = motion_type.to_ascii_lowercase();
    MotionType::ALL
        .into_iter()
        .find(|t| t.as_key() == lower)
        .ok_or_else(|| format!("Invalid motion type: '{}'", motion_type))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}
