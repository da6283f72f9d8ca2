//! Quadrant-dependent generalization of base adjustment vectors.
//!
//! The placement tables store one canonical quadrant per entry. This
//! module derives the arrow's quadrant from its location and applies a
//! fixed signed permutation so the stored vector is geometrically
//! correct at all 8 locations. Pro/Anti mirror differently than
//! Dash/Static under quadrant rotation, and a Float motion borrows its
//! effective rotation sense from its handpath.

use glam::{DVec2, dvec2};

use crate::errors::OrientationError;
use crate::handpath::{self, Handpath};
use crate::types::{Location, Motion, MotionType, RotationDirection};

/// Quadrant of a location, independent of grid mode. Cardinals share
/// the quadrant of the diagonal they remap to in the layer-2 tables
/// (N with NE, E with SE, S with SW, W with NW).
pub fn quadrant_index(location: Location) -> usize {
    match location {
        Location::North | Location::NorthEast => 0,
        Location::East | Location::SouthEast => 1,
        Location::South | Location::SouthWest => 2,
        Location::West | Location::NorthWest => 3,
    }
}

/// Rotation sense used to pick a tuple set. Float motions take theirs
/// from the handpath; dash/static handpaths yield no rotation sense.
fn effective_rotation(motion: &Motion) -> Result<RotationDirection, OrientationError> {
    if motion.motion_type != MotionType::Float {
        return Ok(motion.rotation_direction);
    }
    let path = handpath::classify_or_err(motion.start_location, motion.end_location)?;
    Ok(match path {
        Handpath::Clockwise => RotationDirection::Clockwise,
        Handpath::CounterClockwise => RotationDirection::CounterClockwise,
        Handpath::Dash | Handpath::Static => RotationDirection::NoRotation,
    })
}

/// The four per-quadrant images of a base vector, index 0 being the
/// canonical stored quadrant. Every entry is a signed permutation of
/// the base components, so each transform is invertible.
pub fn directional_tuples(
    motion: &Motion,
    base: DVec2,
) -> Result<[DVec2; 4], OrientationError> {
    let (x, y) = (base.x, base.y);
    let rotation = effective_rotation(motion)?;

    use MotionType::*;
    use RotationDirection::*;
    Ok(match (motion.motion_type, rotation) {
        // Shift motions: Pro's clockwise orbit is the plain rotation
        // orbit; Anti swaps chirality with Pro.
        (Pro | Float, Clockwise) | (Anti, CounterClockwise) => {
            [dvec2(x, y), dvec2(-y, x), dvec2(-x, -y), dvec2(y, -x)]
        }
        (Pro | Float, CounterClockwise) | (Anti, Clockwise) => {
            [dvec2(-y, -x), dvec2(x, -y), dvec2(y, x), dvec2(-x, y)]
        }
        // A shift without a rotation sense falls back to the rotation
        // orbit (float over a dash/static handpath lands here).
        (Pro | Anti | Float, NoRotation) => {
            [dvec2(x, y), dvec2(-y, x), dvec2(-x, -y), dvec2(y, -x)]
        }

        (Static, Clockwise) => [dvec2(x, y), dvec2(-y, x), dvec2(-x, -y), dvec2(y, -x)],
        (Static, CounterClockwise) => {
            [dvec2(-x, y), dvec2(-y, -x), dvec2(x, -y), dvec2(y, x)]
        }
        // Mirror across the vertical axis per quadrant.
        (Static, NoRotation) => [dvec2(x, y), dvec2(-x, y), dvec2(-x, -y), dvec2(x, -y)],

        (Dash, Clockwise) => [dvec2(x, -y), dvec2(y, x), dvec2(-x, y), dvec2(-y, -x)],
        (Dash, CounterClockwise) => {
            [dvec2(-x, -y), dvec2(y, -x), dvec2(x, y), dvec2(-y, x)]
        }
        (Dash, NoRotation) => [dvec2(x, y), dvec2(-y, x), dvec2(-x, -y), dvec2(y, -x)],
    })
}

/// Transform a base vector for the quadrant the arrow occupies.
pub fn apply(
    motion: &Motion,
    arrow_location: Location,
    base: DVec2,
) -> Result<DVec2, OrientationError> {
    let tuples = directional_tuples(motion, base)?;
    Ok(tuples[quadrant_index(arrow_location)])
}
