//! Placement adjustment lookups
//!
//! - `dataset`: the authored tables, their sources and the load-once service
//! - `special`: letter-specific overrides (most specific wins)
//! - `default`: coarse fallback with total coverage

pub mod dataset;
pub mod default;
pub mod special;

pub use dataset::{
    EmbeddedPlacementSource, FilePlacementSource, JsonPlacementSource, PlacementData,
    PlacementDataService, PlacementDataSource, YamlPlacementSource,
};
pub use default::DefaultPlacementLookup;
pub use special::SpecialPlacementLookup;
