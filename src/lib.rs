//! Pictograph Arrow Placement WASM Module
//!
//! Computes where each arrow of a movement-notation pictograph is drawn
//! (offset and rotation) from the symbolic motions it depicts.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod models;
pub mod placement;

// Re-export commonly used types
pub use config::EngineConfig;
pub use models::*;
pub use placement::{PlacementDataService, PlacementError, PlacementOrchestrator};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("Logger already initialized: {}", e);
    }

    log::info!("Pictograph placement WASM module initialized");
}
