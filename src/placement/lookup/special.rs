//! Special placement lookup
//!
//! Hand-authored overrides for letter/orientation/turn combinations where
//! the default offset would look wrong. A miss is the common case and is
//! reported as `Ok(None)`.

use crate::models::{AdjustmentPoint, MotionData, PictographData};
use crate::placement::errors::Result;
use crate::placement::keys::{orientation_key, special_selectors, turns_tuple_key};

use super::dataset::PlacementDataService;

pub struct SpecialPlacementLookup<'a> {
    service: &'a PlacementDataService,
}

impl<'a> SpecialPlacementLookup<'a> {
    pub fn new(service: &'a PlacementDataService) -> Self {
        Self { service }
    }

    /// Override offset for this motion, if the letter defines one
    ///
    /// `placement_key`, when given, is tried as a selector before the
    /// arrow's color and motion type.
    pub fn get_special_adjustment(
        &self,
        motion: &MotionData,
        pictograph: &PictographData,
        placement_key: Option<&str>,
    ) -> Result<Option<AdjustmentPoint>> {
        let data = self.service.data()?;

        let Some(letter) = pictograph.letter.as_deref() else {
            return Ok(None);
        };

        let ori_key = orientation_key(motion, pictograph);
        let turns_key = turns_tuple_key(pictograph);

        let Some(entry) = data
            .special
            .get(&pictograph.grid_mode)
            .and_then(|letters| letters.get(letter))
            .and_then(|oris| oris.get(&ori_key))
            .and_then(|tuples| tuples.get(&turns_key))
        else {
            return Ok(None);
        };

        let found = placement_key
            .into_iter()
            .chain(special_selectors(motion))
            .find_map(|selector| entry.get(selector).copied());

        if let Some(point) = found {
            log::debug!(
                "Special placement for {} {} ({}, {}): ({}, {})",
                letter,
                motion.color,
                ori_key,
                turns_key,
                point.x,
                point.y
            );
        }
        Ok(found)
    }
}
