//! Arrow location resolution
//!
//! Each motion type has its own strategy for choosing the compass point an
//! arrow is drawn at. The set of motion types is closed, so the strategies
//! are selected with a plain `match`.

use crate::models::{GridLocation, MotionData, MotionType, RotationDirection};

/// Resolve the displayed grid location of a motion's arrow
pub fn calculate_location(motion: &MotionData) -> GridLocation {
    match motion.motion_type {
        MotionType::Static => static_location(motion),
        MotionType::Pro | MotionType::Anti | MotionType::Float => shift_location(motion),
        MotionType::Dash => dash_location(motion),
    }
}

/// Static arrows stay at their start point
fn static_location(motion: &MotionData) -> GridLocation {
    match motion.start_location {
        Some(loc) => loc,
        None => {
            log::warn!(
                "Static {} motion has no start location, defaulting to north",
                motion.color
            );
            GridLocation::N
        }
    }
}

/// Shift arrows sit between the two adjacent points they travel between
fn shift_location(motion: &MotionData) -> GridLocation {
    let (start, end) = match (motion.start_location, motion.end_location) {
        (Some(start), Some(end)) => (start, end),
        (start, _) => {
            log::warn!(
                "{} {} motion is missing a location, defaulting to its start",
                motion.color,
                motion.motion_type
            );
            return start.unwrap_or(GridLocation::N);
        }
    };

    shift_midpoint(start, end).unwrap_or_else(|| {
        log::warn!(
            "No shift location for {} -> {} ({} {}), defaulting to start",
            start,
            end,
            motion.color,
            motion.motion_type
        );
        start
    })
}

/// Unordered adjacent pair -> point between them
pub fn shift_midpoint(start: GridLocation, end: GridLocation) -> Option<GridLocation> {
    use GridLocation::*;

    match (start, end) {
        (N, E) | (E, N) => Some(NE),
        (E, S) | (S, E) => Some(SE),
        (S, W) | (W, S) => Some(SW),
        (W, N) | (N, W) => Some(NW),
        (NE, SE) | (SE, NE) => Some(E),
        (SE, SW) | (SW, SE) => Some(S),
        (SW, NW) | (NW, SW) => Some(W),
        (NW, NE) | (NE, NW) => Some(N),
        _ => None,
    }
}

/// Dash arrows sit beside the line they travel along
///
/// Without rotation both sides of the line are valid, so the side is fixed
/// per ordered pair. With a rotation direction (at any turn count) the side
/// follows that direction from the start point, matching the direction
/// table `calculate_rotation` uses for the same motion.
fn dash_location(motion: &MotionData) -> GridLocation {
    let Some(start) = motion.start_location else {
        log::warn!("Dash {} motion has no start location, defaulting to north", motion.color);
        return GridLocation::N;
    };

    match motion.rotation_direction {
        Some(RotationDirection::Clockwise) => start.rotate_clockwise(2),
        Some(RotationDirection::CounterClockwise) => start.rotate_clockwise(-2),
        _ => {
            let end = motion.end_location.unwrap_or_else(|| start.opposite());
            dash_side(start, end).unwrap_or_else(|| {
                log::warn!(
                    "No dash location for {} -> {} ({}), defaulting to start",
                    start,
                    end,
                    motion.color
                );
                start
            })
        }
    }
}

/// Ordered opposite pair -> side of the dash line
pub fn dash_side(start: GridLocation, end: GridLocation) -> Option<GridLocation> {
    use GridLocation::*;

    match (start, end) {
        (N, S) => Some(E),
        (E, W) => Some(S),
        (S, N) => Some(W),
        (W, E) => Some(N),
        (NE, SW) => Some(SE),
        (SE, NW) => Some(SW),
        (SW, NE) => Some(NW),
        (NW, SE) => Some(NE),
        _ => None,
    }
}
