//! Motion and pictograph records
//!
//! These are supplied by the letter-definition loader or a live editor
//! session and are read-only to the placement engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::elements::{ArrowColor, GridLocation, GridMode, MotionType, Orientation, RotationDirection};

/// One color's movement within a single beat
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MotionData {
    pub color: ArrowColor,
    pub motion_type: MotionType,
    #[serde(default)]
    pub start_location: Option<GridLocation>,
    #[serde(default)]
    pub end_location: Option<GridLocation>,
    #[serde(default)]
    pub start_orientation: Orientation,
    #[serde(default)]
    pub end_orientation: Orientation,
    #[serde(default)]
    pub rotation_direction: Option<RotationDirection>,
    /// Full and partial turns (0.5 steps are common)
    #[serde(default)]
    pub turns: f64,
}

impl MotionData {
    /// Create a motion with in/in orientations and zero turns
    pub fn new(
        color: ArrowColor,
        motion_type: MotionType,
        start: GridLocation,
        end: GridLocation,
        rotation_direction: RotationDirection,
    ) -> Self {
        Self {
            color,
            motion_type,
            start_location: Some(start),
            end_location: Some(end),
            start_orientation: Orientation::In,
            end_orientation: Orientation::In,
            rotation_direction: Some(rotation_direction),
            turns: 0.0,
        }
    }

    pub fn with_turns(mut self, turns: f64) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_orientations(mut self, start: Orientation, end: Orientation) -> Self {
        self.start_orientation = start;
        self.end_orientation = end;
        self
    }
}

/// A single diagram: two simultaneous motions on one grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PictographData {
    /// Letter identity, absent while a pictograph is being generated
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default)]
    pub grid_mode: GridMode,
    #[serde(default)]
    pub motions: BTreeMap<ArrowColor, MotionData>,
}

impl PictographData {
    pub fn new(letter: Option<&str>, grid_mode: GridMode) -> Self {
        Self {
            letter: letter.map(str::to_string),
            grid_mode,
            motions: BTreeMap::new(),
        }
    }

    /// Insert a motion under its own color
    pub fn with_motion(mut self, motion: MotionData) -> Self {
        self.motions.insert(motion.color, motion);
        self
    }

    pub fn motion(&self, color: ArrowColor) -> Option<&MotionData> {
        self.motions.get(&color)
    }

    /// The other color's motion, if present
    pub fn sibling_of(&self, color: ArrowColor) -> Option<&MotionData> {
        self.motions.get(&color.other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_pictograph() {
        let json = r#"{
            "letter": "A",
            "gridMode": "diamond",
            "motions": {
                "blue": {
                    "color": "blue",
                    "motionType": "pro",
                    "startLocation": "s",
                    "endLocation": "w",
                    "startOrientation": "in",
                    "endOrientation": "in",
                    "rotationDirection": "cw",
                    "turns": 0.5
                }
            }
        }"#;

        let picto: PictographData = serde_json::from_str(json).unwrap();
        let blue = picto.motion(ArrowColor::Blue).unwrap();
        assert_eq!(blue.motion_type, MotionType::Pro);
        assert_eq!(blue.start_location, Some(GridLocation::S));
        assert_eq!(blue.turns, 0.5);
        assert!(picto.sibling_of(ArrowColor::Blue).is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"color": "red", "motionType": "static"}"#;
        let motion: MotionData = serde_json::from_str(json).unwrap();
        assert_eq!(motion.start_location, None);
        assert_eq!(motion.rotation_direction, None);
        assert_eq!(motion.turns, 0.0);
    }
}
