//! Arrow placement engine
//!
//! Given one motion of a pictograph, computes where its arrow glyph is
//! drawn and how it is rotated.
//!
//! # Module Structure
//!
//! - `quadrant`: grid topology and quadrant selection
//! - `location`: display location per motion type
//! - `rotation`: rotation angle tables
//! - `keys`: lookup keys for the placement tables
//! - `lookup`: placement dataset, special and default lookups
//! - `tuples`: quadrant variants of a base offset
//! - `orchestrator`: the full pipeline

pub mod errors;
pub mod keys;
pub mod location;
pub mod lookup;
pub mod orchestrator;
pub mod quadrant;
pub mod rotation;
pub mod tuples;

pub use errors::{PlacementError, Result};
pub use location::calculate_location;
pub use lookup::{
    DefaultPlacementLookup, EmbeddedPlacementSource, PlacementData, PlacementDataService,
    PlacementDataSource, SpecialPlacementLookup,
};
pub use orchestrator::PlacementOrchestrator;
pub use quadrant::{calculate_quadrant_index, determine_grid_mode};
pub use rotation::{calculate_rotation, validate_motion_data};
pub use tuples::generate_directional_tuples;
