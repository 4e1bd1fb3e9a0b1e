//! Default placement lookup
//!
//! Coarse table with total coverage: once the dataset is loaded every
//! query returns an offset, falling back through progressively less
//! specific keys and finally to the origin.

use crate::models::{AdjustmentPoint, GridMode};
use crate::placement::errors::Result;
use crate::placement::keys::format_turns;

use super::dataset::PlacementDataService;

pub struct DefaultPlacementLookup<'a> {
    service: &'a PlacementDataService,
}

impl<'a> DefaultPlacementLookup<'a> {
    pub fn new(service: &'a PlacementDataService) -> Self {
        Self { service }
    }

    pub fn is_loaded(&self) -> bool {
        self.service.is_loaded()
    }

    /// Base offset for an attribute key at the given turns
    ///
    /// Tried in order: exact turns under `attribute_key`, zero turns under
    /// `attribute_key`, then the same two under `motion_type_key`.
    pub fn get_default_adjustment(
        &self,
        attribute_key: &str,
        turns: f64,
        motion_type_key: &str,
        grid_mode: GridMode,
    ) -> Result<AdjustmentPoint> {
        let data = self.service.data()?;
        let attrs = data
            .default
            .get(&grid_mode)
            .and_then(|types| types.get(motion_type_key));

        let turns_key = format_turns(turns);
        let found = attrs.and_then(|attrs| {
            [attribute_key, motion_type_key].into_iter().find_map(|key| {
                let by_turns = attrs.get(key)?;
                by_turns.get(&turns_key).or_else(|| by_turns.get("0")).copied()
            })
        });
        if let Some(point) = found {
            return Ok(point);
        }

        log::warn!(
            "No default placement for {}/{}/{} at {} turns, using origin",
            grid_mode,
            motion_type_key,
            attribute_key,
            turns_key
        );
        Ok(AdjustmentPoint::ZERO)
    }

    /// Offset stored under exactly `key` at exactly `turns`, if any
    ///
    /// Missing turns are a miss here; the zero-turns fallback belongs to
    /// `get_default_adjustment`.
    pub fn find_adjustment(
        &self,
        key: &str,
        turns: f64,
        motion_type_key: &str,
        grid_mode: GridMode,
    ) -> Result<Option<AdjustmentPoint>> {
        let data = self.service.data()?;
        Ok(data
            .default
            .get(&grid_mode)
            .and_then(|types| types.get(motion_type_key))
            .and_then(|attrs| attrs.get(key))
            .and_then(|by_turns| by_turns.get(&format_turns(turns)))
            .copied())
    }

    /// Attribute keys available for a grid mode and motion type
    pub fn get_available_placement_keys(
        &self,
        grid_mode: GridMode,
        motion_type_key: &str,
    ) -> Result<Vec<String>> {
        let data = self.service.data()?;
        Ok(data
            .default
            .get(&grid_mode)
            .and_then(|types| types.get(motion_type_key))
            .map(|attrs| attrs.keys().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::errors::PlacementError;
    use crate::placement::lookup::dataset::{JsonPlacementSource, PlacementDataSource};

    fn fixture() -> PlacementDataService {
        let json = r#"{
            "default": {
                "diamond": {
                    "pro": {
                        "pro": {"0": {"x": 10.0, "y": 20.0}, "1": {"x": 15.0, "y": 25.0}},
                        "pro_to_layer2": {"0": {"x": -5.0, "y": 5.0}}
                    }
                }
            }
        }"#;
        PlacementDataService::with_data(JsonPlacementSource(json.to_string()).load().unwrap())
    }

    #[test]
    fn test_exact_match() {
        let service = fixture();
        let lookup = DefaultPlacementLookup::new(&service);
        let p = lookup.get_default_adjustment("pro", 1.0, "pro", GridMode::Diamond).unwrap();
        assert_eq!(p, AdjustmentPoint::new(15.0, 25.0));
    }

    #[test]
    fn test_unknown_turns_fall_back_to_zero_turns() {
        let service = fixture();
        let lookup = DefaultPlacementLookup::new(&service);
        let p = lookup
            .get_default_adjustment("pro_to_layer2", 2.5, "pro", GridMode::Diamond)
            .unwrap();
        assert_eq!(p, AdjustmentPoint::new(-5.0, 5.0));
    }

    #[test]
    fn test_unknown_attribute_falls_back_to_motion_type() {
        let service = fixture();
        let lookup = DefaultPlacementLookup::new(&service);
        let p = lookup
            .get_default_adjustment("pro_to_layer3", 1.0, "pro", GridMode::Diamond)
            .unwrap();
        assert_eq!(p, AdjustmentPoint::new(15.0, 25.0));
    }

    #[test]
    fn test_find_adjustment_does_not_fall_back_across_keys() {
        let service = fixture();
        let lookup = DefaultPlacementLookup::new(&service);
        let found = lookup
            .find_adjustment("pro_alpha", 0.0, "pro", GridMode::Diamond)
            .unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_find_adjustment_requires_exact_turns() {
        let service = fixture();
        let lookup = DefaultPlacementLookup::new(&service);
        assert_eq!(
            lookup
                .find_adjustment("pro_to_layer2", 1.0, "pro", GridMode::Diamond)
                .unwrap(),
            None
        );
        assert_eq!(
            lookup
                .find_adjustment("pro", 1.0, "pro", GridMode::Diamond)
                .unwrap(),
            Some(AdjustmentPoint::new(15.0, 25.0))
        );
    }

    #[test]
    fn test_no_entry_still_returns_numbers() {
        let service = fixture();
        let lookup = DefaultPlacementLookup::new(&service);
        let p = lookup
            .get_default_adjustment("nonexistent", 3.0, "float", GridMode::Box)
            .unwrap();
        assert_eq!(p, AdjustmentPoint::ZERO);
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn test_unloaded_is_distinguishable_from_zero() {
        let service = PlacementDataService::new();
        let lookup = DefaultPlacementLookup::new(&service);
        assert!(!lookup.is_loaded());
        let err = lookup
            .get_default_adjustment("pro", 0.0, "pro", GridMode::Diamond)
            .unwrap_err();
        assert_eq!(err, PlacementError::DatasetUnavailable);
    }

    #[test]
    fn test_available_keys() {
        let service = fixture();
        let lookup = DefaultPlacementLookup::new(&service);
        let keys = lookup.get_available_placement_keys(GridMode::Diamond, "pro").unwrap();
        assert_eq!(keys, vec!["pro".to_string(), "pro_to_layer2".to_string()]);
        assert!(lookup
            .get_available_placement_keys(GridMode::Box, "dash")
            .unwrap()
            .is_empty());
    }
}
