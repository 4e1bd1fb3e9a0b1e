//! Enumerations for pictograph motions
//!
//! This module defines the closed vocabularies used throughout the
//! placement engine: motion types, rotation directions, compass
//! locations, grid topologies, orientations and arrow colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of motion a single hand performs within one beat
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    /// Hand stays put, prop may spin in place
    Static,
    /// Prop rotates in the same direction as the hand path
    Pro,
    /// Prop rotates against the hand path
    Anti,
    /// Hand travels straight across the grid
    Dash,
    /// Hand travels without prop rotation
    Float,
}

impl MotionType {
    /// All supported motion types
    pub const ALL: [MotionType; 5] = [
        MotionType::Static,
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Dash,
        MotionType::Float,
    ];

    /// Key used by the placement datasets ("pro", "static", ...)
    pub fn as_key(&self) -> &'static str {
        match self {
            MotionType::Static => "static",
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Dash => "dash",
            MotionType::Float => "float",
        }
    }

    /// Pro, anti and float all travel between adjacent points
    pub fn is_shift(&self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Rotation direction of the prop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    #[serde(rename = "cw", alias = "clockwise")]
    Clockwise,
    #[serde(rename = "ccw", alias = "counter_clockwise", alias = "counterClockwise")]
    CounterClockwise,
    /// Only meaningful for dash and static motions
    #[serde(rename = "no_rot", alias = "noRotation", alias = "no_rotation")]
    NoRotation,
}

/// One of the 8 compass points of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLocation {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl GridLocation {
    /// Compass points in clockwise order starting at north
    pub const ALL: [GridLocation; 8] = [
        GridLocation::N,
        GridLocation::NE,
        GridLocation::E,
        GridLocation::SE,
        GridLocation::S,
        GridLocation::SW,
        GridLocation::W,
        GridLocation::NW,
    ];

    fn compass_index(&self) -> usize {
        match self {
            GridLocation::N => 0,
            GridLocation::NE => 1,
            GridLocation::E => 2,
            GridLocation::SE => 3,
            GridLocation::S => 4,
            GridLocation::SW => 5,
            GridLocation::W => 6,
            GridLocation::NW => 7,
        }
    }

    pub fn is_cardinal(&self) -> bool {
        self.compass_index() % 2 == 0
    }

    pub fn is_diagonal(&self) -> bool {
        !self.is_cardinal()
    }

    /// Rotate clockwise by `steps` eighth-turns (45° each); negative steps go counter-clockwise
    pub fn rotate_clockwise(&self, steps: i32) -> GridLocation {
        let idx = (self.compass_index() as i32 + steps).rem_euclid(8) as usize;
        GridLocation::ALL[idx]
    }

    /// Diametrically opposite point
    pub fn opposite(&self) -> GridLocation {
        self.rotate_clockwise(4)
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GridLocation::N => "n",
            GridLocation::NE => "ne",
            GridLocation::E => "e",
            GridLocation::SE => "se",
            GridLocation::S => "s",
            GridLocation::SW => "sw",
            GridLocation::W => "w",
            GridLocation::NW => "nw",
        };
        f.write_str(s)
    }
}

/// Grid topology
///
/// Diamond grids use the cardinal points as primary axes, box grids use
/// the diagonal points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    #[default]
    Diamond,
    Box,
}

impl GridMode {
    pub fn as_key(&self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Prop orientation at the start or end of a motion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    /// In/out point along the radius of the grid
    pub fn is_radial(&self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }

    /// Layer number used by the placement keys (1 = radial, 2 = non-radial)
    pub fn layer(&self) -> u8 {
        if self.is_radial() {
            1
        } else {
            2
        }
    }
}

/// Which arrow of the pictograph a motion belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowColor {
    Blue,
    Red,
}

impl ArrowColor {
    pub fn as_key(&self) -> &'static str {
        match self {
            ArrowColor::Blue => "blue",
            ArrowColor::Red => "red",
        }
    }

    pub fn other(&self) -> ArrowColor {
        match self {
            ArrowColor::Blue => ArrowColor::Red,
            ArrowColor::Red => ArrowColor::Blue,
        }
    }
}

impl fmt::Display for ArrowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_clockwise_wraps() {
        assert_eq!(GridLocation::NW.rotate_clockwise(1), GridLocation::N);
        assert_eq!(GridLocation::N.rotate_clockwise(-2), GridLocation::W);
        assert_eq!(GridLocation::E.rotate_clockwise(8), GridLocation::E);
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(GridLocation::N.opposite(), GridLocation::S);
        assert_eq!(GridLocation::NE.opposite(), GridLocation::SW);
        assert_eq!(GridLocation::W.opposite(), GridLocation::E);
    }

    #[test]
    fn test_cardinal_diagonal_split() {
        let cardinals: Vec<_> = GridLocation::ALL.iter().filter(|l| l.is_cardinal()).collect();
        assert_eq!(cardinals.len(), 4);
        assert!(GridLocation::SE.is_diagonal());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&RotationDirection::CounterClockwise).unwrap();
        assert_eq!(json, "\"ccw\"");
        let parsed: RotationDirection = serde_json::from_str("\"noRotation\"").unwrap();
        assert_eq!(parsed, RotationDirection::NoRotation);
        let loc: GridLocation = serde_json::from_str("\"sw\"").unwrap();
        assert_eq!(loc, GridLocation::SW);
        assert_eq!(serde_json::to_string(&MotionType::Float).unwrap(), "\"float\"");
    }
}
