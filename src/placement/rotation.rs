//! Arrow rotation resolution
//!
//! Every angle is an authored table entry. The tables are calibrated
//! against the reference notation, and the pinned tests at the bottom of
//! this file protect them. Do not replace them with formulas.

use crate::models::{GridLocation, MotionData, MotionType, RotationDirection};

/// Resolve the rotation angle (degrees) of a motion's arrow at `location`
///
/// Never fails: unsupported combinations degrade to 0° with a warning.
pub fn calculate_rotation(motion: &MotionData, location: GridLocation) -> f64 {
    match motion.motion_type {
        MotionType::Static => static_rotation(location),
        MotionType::Pro | MotionType::Float => match motion.rotation_direction {
            Some(RotationDirection::Clockwise) => pro_clockwise(location),
            Some(RotationDirection::CounterClockwise) => pro_counter_clockwise(location),
            Some(RotationDirection::NoRotation) => {
                log::warn!("{} motion without rotation, using clockwise table", motion.motion_type);
                pro_clockwise(location)
            }
            None => missing_direction(motion),
        },
        MotionType::Anti => match motion.rotation_direction {
            Some(RotationDirection::Clockwise) => anti_clockwise(location),
            Some(RotationDirection::CounterClockwise) => anti_counter_clockwise(location),
            Some(RotationDirection::NoRotation) => {
                log::warn!("anti motion without rotation, using clockwise table");
                anti_clockwise(location)
            }
            None => missing_direction(motion),
        },
        MotionType::Dash => match motion.rotation_direction {
            Some(RotationDirection::NoRotation) => dash_no_rotation(motion),
            Some(RotationDirection::Clockwise) => dash_clockwise(location),
            Some(RotationDirection::CounterClockwise) => dash_counter_clockwise(location),
            None => missing_direction(motion),
        },
    }
}

/// Whether a motion is complete enough to calculate
///
/// The calculator itself never fails; callers use this to decide whether
/// to trust the result.
pub fn validate_motion_data(motion: Option<&MotionData>) -> bool {
    match motion {
        Some(m) => MotionType::ALL.contains(&m.motion_type) && m.rotation_direction.is_some(),
        None => false,
    }
}

fn missing_direction(motion: &MotionData) -> f64 {
    log::warn!(
        "{} {} motion has no rotation direction, defaulting to 0°",
        motion.color,
        motion.motion_type
    );
    0.0
}

/// Static arrows point toward the grid center
fn static_rotation(location: GridLocation) -> f64 {
    match location {
        GridLocation::N => 180.0,
        GridLocation::NE => 225.0,
        GridLocation::E => 270.0,
        GridLocation::SE => 315.0,
        GridLocation::S => 0.0,
        GridLocation::SW => 45.0,
        GridLocation::W => 90.0,
        GridLocation::NW => 135.0,
    }
}

// Pro and float share these tables
fn pro_clockwise(location: GridLocation) -> f64 {
    match location {
        GridLocation::N => 225.0,
        GridLocation::NE => 0.0,
        GridLocation::E => 315.0,
        GridLocation::SE => 90.0,
        GridLocation::S => 45.0,
        GridLocation::SW => 180.0,
        GridLocation::W => 135.0,
        GridLocation::NW => 270.0,
    }
}

fn pro_counter_clockwise(location: GridLocation) -> f64 {
    match location {
        GridLocation::N => 225.0,
        GridLocation::NE => 270.0,
        GridLocation::E => 315.0,
        GridLocation::SE => 0.0,
        GridLocation::S => 45.0,
        GridLocation::SW => 90.0,
        GridLocation::W => 135.0,
        GridLocation::NW => 180.0,
    }
}

fn anti_clockwise(location: GridLocation) -> f64 {
    match location {
        GridLocation::N => 315.0,
        GridLocation::NE => 270.0,
        GridLocation::E => 45.0,
        GridLocation::SE => 0.0,
        GridLocation::S => 135.0,
        GridLocation::SW => 90.0,
        GridLocation::W => 225.0,
        GridLocation::NW => 180.0,
    }
}

fn anti_counter_clockwise(location: GridLocation) -> f64 {
    match location {
        GridLocation::N => 135.0,
        GridLocation::NE => 0.0,
        GridLocation::E => 225.0,
        GridLocation::SE => 90.0,
        GridLocation::S => 315.0,
        GridLocation::SW => 180.0,
        GridLocation::W => 45.0,
        GridLocation::NW => 270.0,
    }
}

/// Without rotation the angle follows the travel line, not the display point
fn dash_no_rotation(motion: &MotionData) -> f64 {
    use GridLocation::*;

    let (Some(start), Some(end)) = (motion.start_location, motion.end_location) else {
        log::warn!("Dash {} motion is missing a location, defaulting to 0°", motion.color);
        return 0.0;
    };

    match (start, end) {
        (N, S) => 90.0,
        (S, N) => 270.0,
        (E, W) => 180.0,
        (W, E) => 0.0,
        (NE, SW) => 135.0,
        (SW, NE) => 315.0,
        (NW, SE) => 45.0,
        (SE, NW) => 225.0,
        _ => {
            log::warn!("No dash rotation for {} -> {}, defaulting to 0°", start, end);
            0.0
        }
    }
}

fn dash_clockwise(location: GridLocation) -> f64 {
    match location {
        GridLocation::N => 270.0,
        GridLocation::NE => 315.0,
        GridLocation::E => 0.0,
        GridLocation::SE => 45.0,
        GridLocation::S => 90.0,
        GridLocation::SW => 135.0,
        GridLocation::W => 180.0,
        GridLocation::NW => 225.0,
    }
}

fn dash_counter_clockwise(location: GridLocation) -> f64 {
    match location {
        GridLocation::N => 90.0,
        GridLocation::NE => 135.0,
        GridLocation::E => 180.0,
        GridLocation::SE => 225.0,
        GridLocation::S => 270.0,
        GridLocation::SW => 315.0,
        GridLocation::W => 0.0,
        GridLocation::NW => 45.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArrowColor;

    fn motion(
        motion_type: MotionType,
        start: GridLocation,
        end: GridLocation,
        rot: RotationDirection,
    ) -> MotionData {
        MotionData::new(ArrowColor::Red, motion_type, start, end, rot)
    }

    const CANONICAL: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

    #[test]
    fn test_static_rotation_pins() {
        let m = motion(MotionType::Static, GridLocation::S, GridLocation::S, RotationDirection::NoRotation);
        assert_eq!(calculate_rotation(&m, GridLocation::S), 0.0);
        assert_eq!(calculate_rotation(&m, GridLocation::N), 180.0);
    }

    #[test]
    fn test_static_rotation_ignores_direction_and_turns() {
        for loc in GridLocation::ALL {
            let base = motion(MotionType::Static, loc, loc, RotationDirection::NoRotation);
            let expected = calculate_rotation(&base, loc);
            for rot in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
                let m = motion(MotionType::Static, loc, loc, rot).with_turns(2.5);
                assert_eq!(calculate_rotation(&m, loc), expected);
            }
        }
    }

    #[test]
    fn test_pro_north_is_225_in_both_directions() {
        let cw = motion(MotionType::Pro, GridLocation::NW, GridLocation::NE, RotationDirection::Clockwise);
        let ccw = motion(MotionType::Pro, GridLocation::NE, GridLocation::NW, RotationDirection::CounterClockwise);
        assert_eq!(calculate_rotation(&cw, GridLocation::N), 225.0);
        assert_eq!(calculate_rotation(&ccw, GridLocation::N), 225.0);
    }

    #[test]
    fn test_float_reuses_pro_tables() {
        for rot in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
            for loc in GridLocation::ALL {
                let pro = motion(MotionType::Pro, GridLocation::N, GridLocation::E, rot);
                let float = motion(MotionType::Float, GridLocation::N, GridLocation::E, rot);
                assert_eq!(calculate_rotation(&pro, loc), calculate_rotation(&float, loc));
            }
        }
    }

    #[test]
    fn test_anti_differs_from_pro() {
        let pro = motion(MotionType::Pro, GridLocation::N, GridLocation::E, RotationDirection::Clockwise);
        let anti = motion(MotionType::Anti, GridLocation::N, GridLocation::E, RotationDirection::Clockwise);
        let differing = GridLocation::ALL
            .iter()
            .filter(|&&loc| calculate_rotation(&pro, loc) != calculate_rotation(&anti, loc))
            .count();
        assert_eq!(differing, 8);
    }

    #[test]
    fn test_dash_no_rotation_depends_on_pair() {
        let ew = motion(MotionType::Dash, GridLocation::E, GridLocation::W, RotationDirection::NoRotation);
        assert_eq!(calculate_rotation(&ew, GridLocation::S), 180.0);
        // Display location does not matter without rotation
        assert_eq!(calculate_rotation(&ew, GridLocation::N), 180.0);

        let ns = motion(MotionType::Dash, GridLocation::N, GridLocation::S, RotationDirection::NoRotation);
        let sn = motion(MotionType::Dash, GridLocation::S, GridLocation::N, RotationDirection::NoRotation);
        let a = calculate_rotation(&ns, GridLocation::E);
        let b = calculate_rotation(&sn, GridLocation::W);
        assert_eq!((b - a).rem_euclid(360.0), 180.0);
    }

    #[test]
    fn test_dash_reversed_pairs_differ_by_half_turn() {
        for start in GridLocation::ALL {
            let end = start.opposite();
            let fwd = motion(MotionType::Dash, start, end, RotationDirection::NoRotation);
            let back = motion(MotionType::Dash, end, start, RotationDirection::NoRotation);
            let diff = (calculate_rotation(&back, start) - calculate_rotation(&fwd, start)).rem_euclid(360.0);
            assert_eq!(diff, 180.0, "{:?} <-> {:?}", start, end);
        }
    }

    #[test]
    fn test_dash_unknown_pair_falls_back_to_zero() {
        let m = motion(MotionType::Dash, GridLocation::N, GridLocation::E, RotationDirection::NoRotation);
        assert_eq!(calculate_rotation(&m, GridLocation::N), 0.0);
    }

    #[test]
    fn test_missing_direction_falls_back_to_zero() {
        let mut m = motion(MotionType::Anti, GridLocation::N, GridLocation::E, RotationDirection::Clockwise);
        m.rotation_direction = None;
        assert_eq!(calculate_rotation(&m, GridLocation::NE), 0.0);
        assert!(!validate_motion_data(Some(&m)));
    }

    #[test]
    fn test_every_supported_combination_is_canonical() {
        let directions = [
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
            RotationDirection::NoRotation,
        ];
        for motion_type in MotionType::ALL {
            for rot in directions {
                for start in GridLocation::ALL {
                    let m = motion(motion_type, start, start.opposite(), rot);
                    for loc in GridLocation::ALL {
                        let angle = calculate_rotation(&m, loc);
                        assert!(angle.is_finite());
                        assert!(CANONICAL.contains(&angle), "{:?} {:?} {:?} -> {}", motion_type, rot, loc, angle);
                    }
                }
            }
        }
    }

    #[test]
    fn test_validate_motion_data() {
        let m = motion(MotionType::Pro, GridLocation::N, GridLocation::E, RotationDirection::Clockwise);
        assert!(validate_motion_data(Some(&m)));
        assert!(!validate_motion_data(None));
    }
}
