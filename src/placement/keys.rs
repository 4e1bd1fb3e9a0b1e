//! Placement key generation
//!
//! Builds the string keys used to index the default and special placement
//! tables. All functions are pure and depend only on the pictograph and the
//! motion being placed.

use crate::models::{ArrowColor, GridLocation, MotionData, PictographData};

/// Relationship between the two hands at the end of the beat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndPosition {
    /// Hands on opposite points
    Alpha,
    /// Hands on the same point
    Beta,
    /// Hands a quarter or eighth turn apart
    Gamma,
}

impl EndPosition {
    pub fn as_key(&self) -> &'static str {
        match self {
            EndPosition::Alpha => "alpha",
            EndPosition::Beta => "beta",
            EndPosition::Gamma => "gamma",
        }
    }
}

/// Orientation key for the special-placement table
///
/// Layer 1 means both start orientations are radial (in/out), layer 2
/// both non-radial, layer 3 one of each.
pub fn orientation_key(motion: &MotionData, pictograph: &PictographData) -> String {
    let own = motion.start_orientation.layer();
    let sibling = pictograph
        .sibling_of(motion.color)
        .map(|m| m.start_orientation.layer())
        .unwrap_or(own);

    if own == sibling {
        return format!("from_layer{}", own);
    }

    let (blue, red) = match motion.color {
        ArrowColor::Blue => (own, sibling),
        ArrowColor::Red => (sibling, own),
    };
    format!("from_layer3_blue{}_red{}", blue, red)
}

/// Turns of both arrows as "(blue, red)"
pub fn turns_tuple_key(pictograph: &PictographData) -> String {
    let turns_of = |color| pictograph.motion(color).map(|m| m.turns).unwrap_or(0.0);
    format!(
        "({}, {})",
        format_turns(turns_of(ArrowColor::Blue)),
        format_turns(turns_of(ArrowColor::Red))
    )
}

/// Coarse default-table bucket from the end orientations
///
/// Plain motion type when both arrows end radial, otherwise suffixed with
/// the end layer ("pro_to_layer2", "dash_to_layer3").
pub fn attribute_key(motion: &MotionData, pictograph: &PictographData) -> String {
    let own = motion.end_orientation.layer();
    let sibling = pictograph
        .sibling_of(motion.color)
        .map(|m| m.end_orientation.layer())
        .unwrap_or(own);

    let motion_key = motion.motion_type.as_key();
    match (own, sibling) {
        (1, 1) => motion_key.to_string(),
        (2, 2) => format!("{}_to_layer2", motion_key),
        _ => format!("{}_to_layer3", motion_key),
    }
}

/// Where the two hands finish relative to each other
pub fn end_position(pictograph: &PictographData) -> Option<EndPosition> {
    let blue = pictograph.motion(ArrowColor::Blue)?.end_location?;
    let red = pictograph.motion(ArrowColor::Red)?.end_location?;
    Some(classify_end_position(blue, red))
}

fn classify_end_position(a: GridLocation, b: GridLocation) -> EndPosition {
    if a == b {
        EndPosition::Beta
    } else if a.opposite() == b {
        EndPosition::Alpha
    } else {
        EndPosition::Gamma
    }
}

/// Attribute key refined by the end position, tried before the plain key
pub fn placement_key(motion: &MotionData, pictograph: &PictographData) -> Option<String> {
    end_position(pictograph)
        .map(|pos| format!("{}_{}", attribute_key(motion, pictograph), pos.as_key()))
}

/// Innermost keys of a special entry, in lookup order
pub fn special_selectors(motion: &MotionData) -> [&'static str; 2] {
    [motion.color.as_key(), motion.motion_type.as_key()]
}

/// Turn count as used in table keys: "0", "1", "0.5", "2.5"
pub fn format_turns(turns: f64) -> String {
    if turns.fract() == 0.0 {
        format!("{}", turns as i64)
    } else {
        format!("{}", turns)
    }
}
