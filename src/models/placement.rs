//! Placement geometry: offsets, quadrants and final results

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::elements::GridLocation;

/// 2D offset in the grid's local coordinate space (y grows downward)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct AdjustmentPoint {
    pub x: f64,
    pub y: f64,
}

impl AdjustmentPoint {
    pub const ZERO: AdjustmentPoint = AdjustmentPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate 90° clockwise on screen: (x, y) -> (-y, x)
    pub fn rotated_quarter(&self) -> Self {
        Self::new(-self.y, self.x)
    }
}

/// One of the four 90° sectors of the grid
///
/// The integer values are the slot indices into every 4-tuple table;
/// the NE, SE, SW, NW order must not change.
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QuadrantIndex {
    Ne = 0,
    Se = 1,
    Sw = 2,
    Nw = 3,
}

impl QuadrantIndex {
    pub const ALL: [QuadrantIndex; 4] = [
        QuadrantIndex::Ne,
        QuadrantIndex::Se,
        QuadrantIndex::Sw,
        QuadrantIndex::Nw,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Final position and rotation of one arrow glyph
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArrowPlacementResult {
    pub position: AdjustmentPoint,
    /// Degrees in [0, 360)
    pub rotation_degrees: f64,
    /// Resolved display location of the arrow
    pub location: GridLocation,
    pub quadrant: QuadrantIndex,
}
