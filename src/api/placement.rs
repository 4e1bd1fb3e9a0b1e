//! Placement API functions
//!
//! JavaScript entry points for the renderer. The module owns one placement
//! dataset for the lifetime of the page; everything below the API layer
//! receives it explicitly.

use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{
    deserialize, parse_color, parse_grid_mode, parse_motion_type, serialize, validation_error,
};
use crate::config::EngineConfig;
use crate::diagnostics::tuples::analyze_directional_tuples;
use crate::models::{AdjustmentPoint, PictographData};
use crate::placement::lookup::{EmbeddedPlacementSource, JsonPlacementSource};
use crate::placement::{DefaultPlacementLookup, PlacementDataService, PlacementOrchestrator};
use crate::{wasm_error, wasm_info, wasm_warn};

// WASM-owned placement dataset and configuration
lazy_static! {
    static ref PLACEMENT_DATA: PlacementDataService = PlacementDataService::new();
    static ref CONFIG: Mutex<EngineConfig> = Mutex::new(EngineConfig::default());
}

fn current_config() -> EngineConfig {
    match CONFIG.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn orchestrator() -> PlacementOrchestrator<'static> {
    PlacementOrchestrator::new(&PLACEMENT_DATA).with_tuple_diagnostics(current_config().diagnose_tuples)
}

/// Apply configuration and, if enabled, load the compiled-in dataset
#[wasm_bindgen(js_name = initPlacementEngine)]
pub fn init_placement_engine(config_js: JsValue) -> Result<(), JsValue> {
    let config: EngineConfig = if config_js.is_undefined() || config_js.is_null() {
        EngineConfig::default()
    } else {
        deserialize(config_js, "Failed to deserialize engine config")?
    };

    log::set_max_level(config.level_filter());

    if config.load_embedded_data {
        PLACEMENT_DATA
            .load_placement_data(&EmbeddedPlacementSource)
            .map_err(|e| validation_error(e.to_string()))?;
    }

    wasm_info!(
        "Placement engine initialized (log level {}, dataset loaded: {})",
        config.log_level,
        PLACEMENT_DATA.is_loaded()
    );

    match CONFIG.lock() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
    Ok(())
}

/// Load a placement dataset fetched by the host
///
/// Fails if a dataset (embedded or fetched) is already loaded.
#[wasm_bindgen(js_name = loadPlacementData)]
pub fn load_placement_data(json: &str) -> Result<(), JsValue> {
    PLACEMENT_DATA
        .load_new_placement_data(&JsonPlacementSource(json.to_string()))
        .map_err(|e| validation_error(e.to_string()))
}

#[wasm_bindgen(js_name = isPlacementDataLoaded)]
pub fn is_placement_data_loaded() -> bool {
    PLACEMENT_DATA.is_loaded()
}

/// Placement of one arrow: `{ position: {x, y}, rotationDegrees, location, quadrant }`
#[wasm_bindgen(js_name = calculateArrowPlacement)]
pub fn calculate_arrow_placement(pictograph_js: JsValue, color: &str) -> Result<JsValue, JsValue> {
    let pictograph: PictographData = deserialize(pictograph_js, "Failed to deserialize pictograph")?;
    let color = parse_color(color).map_err(validation_error)?;

    let motion = pictograph
        .motion(color)
        .ok_or_else(|| validation_error(format!("Pictograph has no {} motion", color)))?;

    let result = orchestrator().calculate_placement(motion, &pictograph).map_err(|e| {
        wasm_error!("Placement failed: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    serialize(&result, "Failed to serialize placement")
}

/// Placements of every arrow, keyed by color
#[wasm_bindgen(js_name = calculatePictographPlacements)]
pub fn calculate_pictograph_placements(pictograph_js: JsValue) -> Result<JsValue, JsValue> {
    let pictograph: PictographData = deserialize(pictograph_js, "Failed to deserialize pictograph")?;

    let results = orchestrator().calculate_all(&pictograph).map_err(|e| {
        wasm_error!("Placement failed: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    serialize(&results, "Failed to serialize placements")
}

/// Default-table keys for the given grid mode and motion type
#[wasm_bindgen(js_name = getAvailablePlacementKeys)]
pub fn get_available_placement_keys(grid_mode: &str, motion_type: &str) -> Result<JsValue, JsValue> {
    let grid_mode = parse_grid_mode(grid_mode).map_err(validation_error)?;
    let motion_type = parse_motion_type(motion_type).map_err(validation_error)?;

    let keys = DefaultPlacementLookup::new(&PLACEMENT_DATA)
        .get_available_placement_keys(grid_mode, motion_type.as_key())
        .map_err(|e| validation_error(e.to_string()))?;

    serialize(&keys, "Failed to serialize placement keys")
}

/// Run the directional-tuple rule check against a sample offset
#[wasm_bindgen(js_name = analyzeDirectionalTuples)]
pub fn analyze_directional_tuples_js(x: f64, y: f64) -> Result<JsValue, JsValue> {
    let marks = analyze_directional_tuples(AdjustmentPoint::new(x, y));
    if !marks.is_empty() {
        wasm_warn!("{} directional tuple problems found", marks.len());
    }
    serialize(&marks, "Failed to serialize diagnostics")
}
