//! Rotation angle and mirror flag for arrow glyphs.
//!
//! A small table-driven side computation next to the adjustment
//! pipeline: the renderer receives the angle in degrees and a mirror
//! flag along with the adjusted position.

use crate::types::{Location, Motion, MotionType, RotationDirection};

use super::directional::quadrant_index;

/// Whether the glyph is drawn mirrored. Anti arrows mirror under
/// clockwise rotation; every other type mirrors under counter-clockwise.
pub fn is_mirrored(motion: &Motion) -> bool {
    match (motion.motion_type, motion.rotation_direction) {
        (MotionType::Anti, RotationDirection::Clockwise) => true,
        (MotionType::Anti, _) => false,
        (_, RotationDirection::CounterClockwise) => true,
        _ => false,
    }
}

/// Glyph rotation in degrees for the arrow's location.
///
/// Clockwise arrows step 90 degrees per quadrant; counter-clockwise
/// arrows run the reflected orbit; without a rotation sense the angle
/// follows the quadrant directly.
pub fn rotation_angle(motion: &Motion, arrow_location: Location) -> f64 {
    let q = quadrant_index(arrow_location);
    match motion.rotation_direction {
        RotationDirection::Clockwise | RotationDirection::NoRotation => (q as f64) * 90.0,
        RotationDirection::CounterClockwise => ((3 - q) as f64) * 90.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, PropColor, Turns};

    fn motion(motion_type: MotionType, rotation: RotationDirection) -> Motion {
        Motion {
            motion_type,
            start_location: Location::North,
            end_location: Location::East,
            rotation_direction: rotation,
            turns: Turns::Whole(1),
            start_orientation: Orientation::In,
            end_orientation: None,
            color: PropColor::Blue,
        }
    }

    #[test]
    fn anti_mirrors_on_clockwise_others_on_counter_clockwise() {
        assert!(is_mirrored(&motion(MotionType::Anti, RotationDirection::Clockwise)));
        assert!(!is_mirrored(&motion(
            MotionType::Anti,
            RotationDirection::CounterClockwise
        )));
        assert!(is_mirrored(&motion(
            MotionType::Pro,
            RotationDirection::CounterClockwise
        )));
        assert!(!is_mirrored(&motion(MotionType::Pro, RotationDirection::Clockwise)));
        assert!(!is_mirrored(&motion(MotionType::Static, RotationDirection::NoRotation)));
    }

    #[test]
    fn clockwise_angles_step_by_quadrant() {
        let m = motion(MotionType::Pro, RotationDirection::Clockwise);
        assert_eq!(rotation_angle(&m, Location::NorthEast), 0.0);
        assert_eq!(rotation_angle(&m, Location::SouthEast), 90.0);
        assert_eq!(rotation_angle(&m, Location::SouthWest), 180.0);
        assert_eq!(rotation_angle(&m, Location::NorthWest), 270.0);
    }

    #[test]
    fn counter_clockwise_runs_the_reflected_orbit() {
        let m = motion(MotionType::Pro, RotationDirection::CounterClockwise);
        assert_eq!(rotation_angle(&m, Location::NorthEast), 270.0);
        assert_eq!(rotation_angle(&m, Location::SouthEast), 180.0);
        assert_eq!(rotation_angle(&m, Location::SouthWest), 90.0);
        assert_eq!(rotation_angle(&m, Location::NorthWest), 0.0);
    }

    #[test]
    fn cardinals_share_their_diagonal_quadrant_angle() {
        let m = motion(MotionType::Static, RotationDirection::Clockwise);
        assert_eq!(
            rotation_angle(&m, Location::North),
            rotation_angle(&m, Location::NorthEast)
        );
        assert_eq!(
            rotation_angle(&m, Location::West),
            rotation_angle(&m, Location::NorthWest)
        );
    }
}
