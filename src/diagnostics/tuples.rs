//! Directional tuple diagnostics - detects broken transformation rules
//!
//! Two checks per rule:
//! - Degenerate: all four variants equal the base (nothing was transformed)
//! - Broken chain: a variant is not the previous one turned a quarter turn

use crate::models::{AdjustmentPoint, ArrowColor, GridLocation, GridMode, MotionData, MotionType, RotationDirection};
use crate::placement::tuples::{generate_directional_tuples, is_degenerate};

use super::{DiagnosticMark, DiagnosticSeverity};

/// Check one generated tuple set
pub fn check_tuples(
    motion: &MotionData,
    base: AdjustmentPoint,
    tuples: &[AdjustmentPoint; 4],
) -> Vec<DiagnosticMark> {
    let mut marks = Vec::new();

    if is_degenerate(motion, base, tuples) {
        marks.push(DiagnosticMark::new(
            Some(motion.color),
            DiagnosticSeverity::Warning,
            "degenerate_tuples",
            format!(
                "All directional tuples equal the base ({}, {}) for {} {:?}",
                base.x, base.y, motion.motion_type, motion.rotation_direction
            ),
        ));
    }

    for k in 0..4 {
        let next = (k + 1) % 4;
        if tuples[next] != tuples[k].rotated_quarter() {
            marks.push(DiagnosticMark::new(
                Some(motion.color),
                DiagnosticSeverity::Error,
                "broken_tuple_chain",
                format!(
                    "Tuple {} is not tuple {} turned 90° for {} {:?}",
                    next, k, motion.motion_type, motion.rotation_direction
                ),
            ));
        }
    }

    marks
}

/// Run every (motion type, rotation direction, grid mode) rule against `base`
///
/// Returns an empty list when every rule is healthy.
pub fn analyze_directional_tuples(base: AdjustmentPoint) -> Vec<DiagnosticMark> {
    let directions = [
        RotationDirection::Clockwise,
        RotationDirection::CounterClockwise,
        RotationDirection::NoRotation,
    ];

    let mut all_marks = Vec::new();
    for grid_mode in [GridMode::Diamond, GridMode::Box] {
        for motion_type in MotionType::ALL {
            for rot in directions {
                let motion = MotionData::new(ArrowColor::Blue, motion_type, GridLocation::N, GridLocation::E, rot);
                let tuples = generate_directional_tuples(&motion, grid_mode, base);
                all_marks.extend(check_tuples(&motion, base, &tuples));
            }
        }
    }
    all_marks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_pro() -> MotionData {
        MotionData::new(
            ArrowColor::Blue,
            MotionType::Pro,
            GridLocation::N,
            GridLocation::E,
            RotationDirection::Clockwise,
        )
    }

    #[test]
    fn test_all_rules_are_healthy() {
        let marks = analyze_directional_tuples(AdjustmentPoint::new(35.0, -15.0));
        assert!(marks.is_empty(), "unexpected diagnostics: {:?}", marks);
    }

    #[test]
    fn test_degenerate_tuples_are_flagged() {
        let base = AdjustmentPoint::new(10.0, 5.0);
        let tuples = [base; 4];
        let marks = check_tuples(&blue_pro(), base, &tuples);
        assert!(marks.iter().any(|m| m.kind == "degenerate_tuples"));
        assert!(marks.iter().any(|m| m.kind == "broken_tuple_chain"));
    }

    #[test]
    fn test_static_identical_tuples_are_not_degenerate() {
        let base = AdjustmentPoint::new(10.0, 5.0);
        let mut motion = blue_pro();
        motion.motion_type = MotionType::Static;
        let marks = check_tuples(&motion, base, &[base; 4]);
        assert!(marks.iter().all(|m| m.kind != "degenerate_tuples"));
    }
}
