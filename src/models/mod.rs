//! Models module for the placement engine
//!
//! This module contains the data records exchanged with the letter loader
//! (inputs) and the renderer (outputs).

pub mod elements;
pub mod motion;
pub mod placement;

// Re-export commonly used types
pub use elements::*;
pub use motion::*;
pub use placement::*;
