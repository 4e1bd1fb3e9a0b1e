//! Directional tuple generation
//!
//! One base offset is authored per placement key; the four quadrant
//! variants are derived from it. Each rule is a seed transform (a sign and
//! axis swap of the base), and every following quadrant is the previous one
//! turned 90° clockwise, so rotating a motion a quarter turn around the
//! grid selects the next tuple in NE, SE, SW, NW order.

use crate::models::{AdjustmentPoint, GridLocation, GridMode, MotionData, MotionType, RotationDirection};

/// Sign/axis swap applied to the base offset for the NE quadrant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedTransform {
    /// (x, y)
    Identity,
    /// (-y, x)
    Quarter,
    /// (-x, -y)
    Half,
    /// (-x, y)
    MirrorX,
    /// (x, -y)
    MirrorY,
    /// (-y, -x)
    ReflectDiagonal,
}

impl SeedTransform {
    pub fn apply(&self, base: AdjustmentPoint) -> AdjustmentPoint {
        let AdjustmentPoint { x, y } = base;
        match self {
            SeedTransform::Identity => AdjustmentPoint::new(x, y),
            SeedTransform::Quarter => AdjustmentPoint::new(-y, x),
            SeedTransform::Half => AdjustmentPoint::new(-x, -y),
            SeedTransform::MirrorX => AdjustmentPoint::new(-x, y),
            SeedTransform::MirrorY => AdjustmentPoint::new(x, -y),
            SeedTransform::ReflectDiagonal => AdjustmentPoint::new(-y, -x),
        }
    }
}

/// Direction the hand travels around the grid, used by float motions
pub fn hand_path_direction(motion: &MotionData) -> Option<RotationDirection> {
    let (start, end) = (motion.start_location?, motion.end_location?);
    if start.rotate_clockwise(2) == end {
        Some(RotationDirection::Clockwise)
    } else if start.rotate_clockwise(-2) == end {
        Some(RotationDirection::CounterClockwise)
    } else {
        None
    }
}

/// Seed transform for a motion on the given grid
pub fn seed_transform(motion: &MotionData, grid_mode: GridMode) -> SeedTransform {
    use RotationDirection::*;
    use SeedTransform::*;

    // Floats carry no prop rotation of their own; the hand path decides
    let direction = match motion.motion_type {
        MotionType::Float => hand_path_direction(motion).or(motion.rotation_direction),
        _ => motion.rotation_direction,
    }
    .unwrap_or(NoRotation);

    match (grid_mode, motion.motion_type, direction) {
        (GridMode::Diamond, MotionType::Pro | MotionType::Float, CounterClockwise) => ReflectDiagonal,
        (GridMode::Diamond, MotionType::Pro | MotionType::Float, _) => Identity,
        (GridMode::Diamond, MotionType::Anti, CounterClockwise) => Identity,
        (GridMode::Diamond, MotionType::Anti, _) => ReflectDiagonal,
        (GridMode::Diamond, MotionType::Dash | MotionType::Static, Clockwise) => MirrorY,
        (GridMode::Diamond, MotionType::Dash | MotionType::Static, CounterClockwise) => Half,
        (GridMode::Diamond, MotionType::Dash | MotionType::Static, NoRotation) => Identity,

        (GridMode::Box, MotionType::Pro | MotionType::Float, CounterClockwise) => Identity,
        (GridMode::Box, MotionType::Pro | MotionType::Float, _) => MirrorX,
        (GridMode::Box, MotionType::Anti, CounterClockwise) => MirrorX,
        (GridMode::Box, MotionType::Anti, _) => Identity,
        (GridMode::Box, MotionType::Dash, Clockwise) => Quarter,
        (GridMode::Box, MotionType::Dash, CounterClockwise) => MirrorX,
        (GridMode::Box, MotionType::Dash, NoRotation) => Identity,
        (GridMode::Box, MotionType::Static, CounterClockwise) => ReflectDiagonal,
        (GridMode::Box, MotionType::Static, _) => Identity,
    }
}

/// Expand a base offset into its NE, SE, SW, NW variants
pub fn generate_directional_tuples(
    motion: &MotionData,
    grid_mode: GridMode,
    base: AdjustmentPoint,
) -> [AdjustmentPoint; 4] {
    let first = seed_transform(motion, grid_mode).apply(base);
    let second = first.rotated_quarter();
    let third = second.rotated_quarter();
    let fourth = third.rotated_quarter();
    [first, second, third, fourth]
}

/// All four variants equal the base: the rule did not transform anything
///
/// Expected for static motions and zero offsets; for anything else it
/// means a broken rule.
pub fn is_degenerate(motion: &MotionData, base: AdjustmentPoint, tuples: &[AdjustmentPoint; 4]) -> bool {
    motion.motion_type != MotionType::Static
        && base != AdjustmentPoint::ZERO
        && tuples.iter().all(|t| *t == base)
}

/// The same motion turned a quarter turn clockwise around the grid center
pub fn rotate_motion_quarter(motion: &MotionData) -> MotionData {
    let turn = |loc: Option<GridLocation>| loc.map(|l| l.rotate_clockwise(2));
    MotionData {
        start_location: turn(motion.start_location),
        end_location: turn(motion.end_location),
        ..motion.clone()
    }
}
