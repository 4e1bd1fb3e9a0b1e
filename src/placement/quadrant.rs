//! Quadrant selection
//!
//! Maps a resolved arrow location to one of the four 90° sectors. Which
//! compass points start a sector depends on the grid topology the arrow
//! sits on, and that topology follows from the motion family:
//!
//! - shift motions (pro/anti/float) on a diagonal point and static/dash
//!   motions on a cardinal point live on a diamond grid
//! - the reverse combinations live on a box grid
//!
//! Sectors run clockwise from their primary point. On a diagonal-primary
//! layout the cardinal that follows a diagonal shares its sector; on a
//! cardinal-primary layout the diagonal that follows a cardinal does.

use crate::models::{GridLocation, GridMode, MotionData, QuadrantIndex};

/// Determine the grid topology an arrow is drawn on
pub fn determine_grid_mode(motion: &MotionData, location: GridLocation) -> GridMode {
    let cardinal = location.is_cardinal();
    if motion.motion_type.is_shift() {
        if cardinal {
            GridMode::Box
        } else {
            GridMode::Diamond
        }
    } else if cardinal {
        GridMode::Diamond
    } else {
        GridMode::Box
    }
}

/// Map a location into its quadrant for the given motion
pub fn calculate_quadrant_index(motion: &MotionData, location: GridLocation) -> QuadrantIndex {
    let grid_mode = determine_grid_mode(motion, location);
    let diagonal_primary = motion.motion_type.is_shift() == (grid_mode == GridMode::Diamond);

    if diagonal_primary {
        diagonal_primary_quadrant(location)
    } else {
        cardinal_primary_quadrant(location)
    }
}

fn diagonal_primary_quadrant(location: GridLocation) -> QuadrantIndex {
    match location {
        GridLocation::NE | GridLocation::E => QuadrantIndex::Ne,
        GridLocation::SE | GridLocation::S => QuadrantIndex::Se,
        GridLocation::SW | GridLocation::W => QuadrantIndex::Sw,
        GridLocation::NW | GridLocation::N => QuadrantIndex::Nw,
    }
}

fn cardinal_primary_quadrant(location: GridLocation) -> QuadrantIndex {
    match location {
        GridLocation::N | GridLocation::NE => QuadrantIndex::Ne,
        GridLocation::E | GridLocation::SE => QuadrantIndex::Se,
        GridLocation::S | GridLocation::SW => QuadrantIndex::Sw,
        GridLocation::W | GridLocation::NW => QuadrantIndex::Nw,
    }
}
