//! Placement orchestrator
//!
//! Single-pass pipeline per arrow:
//!
//! 1. validate the motion (problems only lower confidence, never abort)
//! 2. resolve the display location
//! 3. base offset: special override, else default table
//! 4. expand the base into four quadrant variants
//! 5. pick the quadrant of the resolved location
//! 6. select that variant
//! 7. resolve the rotation angle
//!
//! Nothing here mutates shared state, so both arrows of a pictograph can
//! be placed independently.

use std::collections::BTreeMap;

use crate::diagnostics::tuples::check_tuples;
use crate::diagnostics::{DiagnosticMark, DiagnosticSeverity, Diagnostics};
use crate::models::{AdjustmentPoint, ArrowColor, ArrowPlacementResult, GridLocation, MotionData, PictographData};
use crate::placement::errors::Result;
use crate::placement::keys::{attribute_key, placement_key};
use crate::placement::location::calculate_location;
use crate::placement::lookup::{DefaultPlacementLookup, PlacementDataService, SpecialPlacementLookup};
use crate::placement::quadrant::{calculate_quadrant_index, determine_grid_mode};
use crate::placement::rotation::{calculate_rotation, validate_motion_data};
use crate::placement::tuples::generate_directional_tuples;

pub struct PlacementOrchestrator<'a> {
    special: SpecialPlacementLookup<'a>,
    default: DefaultPlacementLookup<'a>,
    diagnose_tuples: bool,
}

impl<'a> PlacementOrchestrator<'a> {
    pub fn new(service: &'a PlacementDataService) -> Self {
        Self {
            special: SpecialPlacementLookup::new(service),
            default: DefaultPlacementLookup::new(service),
            diagnose_tuples: true,
        }
    }

    /// Enable or disable the directional-tuple degeneracy check
    pub fn with_tuple_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnose_tuples = enabled;
        self
    }

    /// Position and rotation of one arrow
    pub fn calculate_placement(
        &self,
        motion: &MotionData,
        pictograph: &PictographData,
    ) -> Result<ArrowPlacementResult> {
        let mut diagnostics = Diagnostics::new();
        self.place(motion, pictograph, &mut diagnostics)
    }

    /// Like `calculate_placement`, also returning what degraded along the way
    pub fn calculate_placement_with_diagnostics(
        &self,
        motion: &MotionData,
        pictograph: &PictographData,
    ) -> Result<(ArrowPlacementResult, Diagnostics)> {
        let mut diagnostics = Diagnostics::new();
        let result = self.place(motion, pictograph, &mut diagnostics)?;
        Ok((result, diagnostics))
    }

    /// Place every arrow of the pictograph
    pub fn calculate_all(
        &self,
        pictograph: &PictographData,
    ) -> Result<BTreeMap<ArrowColor, ArrowPlacementResult>> {
        pictograph
            .motions
            .iter()
            .map(|(color, motion)| {
                self.calculate_placement(motion, pictograph)
                    .map(|result| (*color, result))
            })
            .collect()
    }

    fn place(
        &self,
        motion: &MotionData,
        pictograph: &PictographData,
        diagnostics: &mut Diagnostics,
    ) -> Result<ArrowPlacementResult> {
        if !validate_motion_data(Some(motion)) {
            log::warn!(
                "Incomplete {} {} motion, placing with defaults",
                motion.color,
                motion.motion_type
            );
            diagnostics.add(DiagnosticMark::new(
                Some(motion.color),
                DiagnosticSeverity::Warning,
                "invalid_motion",
                "Motion has no rotation direction",
            ));
        }

        let location = calculate_location(motion);
        let base = self.resolve_base_adjustment(motion, pictograph)?;

        let grid_mode = determine_grid_mode(motion, location);
        let tuples = generate_directional_tuples(motion, grid_mode, base);
        if self.diagnose_tuples {
            self.check_tuples(motion, base, &tuples, diagnostics);
        }

        let quadrant = calculate_quadrant_index(motion, location);
        let position = tuples[quadrant.index()];
        let rotation_degrees = normalize_degrees(calculate_rotation(motion, location));

        log::debug!(
            "Placed {} {} at {} (quadrant {}): ({}, {}) @ {}°",
            motion.color,
            motion.motion_type,
            location,
            quadrant.index(),
            position.x,
            position.y,
            rotation_degrees
        );

        Ok(ArrowPlacementResult {
            position,
            rotation_degrees,
            location,
            quadrant,
        })
    }

    /// Special override if one exists, otherwise the default table
    pub fn resolve_base_adjustment(
        &self,
        motion: &MotionData,
        pictograph: &PictographData,
    ) -> Result<AdjustmentPoint> {
        let refined_key = placement_key(motion, pictograph);

        if let Some(point) = self
            .special
            .get_special_adjustment(motion, pictograph, refined_key.as_deref())?
        {
            return Ok(point);
        }

        let motion_type_key = motion.motion_type.as_key();
        if let Some(key) = refined_key.as_deref() {
            if let Some(point) =
                self.default
                    .find_adjustment(key, motion.turns, motion_type_key, pictograph.grid_mode)?
            {
                return Ok(point);
            }
        }

        self.default.get_default_adjustment(
            &attribute_key(motion, pictograph),
            motion.turns,
            motion_type_key,
            pictograph.grid_mode,
        )
    }

    fn check_tuples(
        &self,
        motion: &MotionData,
        base: AdjustmentPoint,
        tuples: &[AdjustmentPoint; 4],
        diagnostics: &mut Diagnostics,
    ) {
        let marks = check_tuples(motion, base, tuples);
        for mark in &marks {
            log::warn!("{}", mark.message);
        }
        diagnostics.extend(marks);
    }
}

/// Fold any angle into [0, 360)
fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Location and rotation only, for callers that position arrows themselves
pub fn calculate_location_and_rotation(motion: &MotionData) -> (GridLocation, f64) {
    let location = calculate_location(motion);
    (location, normalize_degrees(calculate_rotation(motion, location)))
}
