//! Placement Engine WASM API
//!
//! This module provides the JavaScript-facing API for the arrow placement
//! engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, argument parsing, error handling, and logging
//! - `placement`: Engine initialization, dataset loading and placement calculation

pub mod helpers;
pub mod placement;

pub use placement::{
    analyze_directional_tuples_js, calculate_arrow_placement, calculate_pictograph_placements,
    get_available_placement_keys, init_placement_engine, is_placement_data_loaded,
    load_placement_data,
};
