//! Grid coordinate tables: where an arrow's base point sits in the
//! 950x950 scene before any adjustment is applied.
//!
//! Two disjoint tables cover the two motion categories. Static and dash
//! arrows sit on hand points; pro, anti and float arrows sit on layer-2
//! points, which are purely diagonal — a cardinal key is remapped to a
//! fixed diagonal neighbor (N→NE, E→SE, S→SW, W→NW). That remap is
//! asymmetric on purpose; the placement tables are tuned against it.

use glam::{DVec2, dvec2};

use crate::types::{Location, Motion, MotionType};

/// Scene edge length in pixels.
pub const SCENE_SIZE: f64 = 950.0;

/// Scene center.
pub const CENTER: DVec2 = DVec2::new(475.0, 475.0);

/// Cardinal hand-point radius.
const HAND_RADIUS: f64 = 143.1;

/// Per-axis offset of the diagonal hand points (HAND_RADIUS / sqrt 2).
const HAND_DIAGONAL: f64 = 101.2;

/// Per-axis offset of the layer-2 diagonal points.
const LAYER2_DIAGONAL: f64 = 143.1;

/// Hand point for a location: cardinals at `HAND_RADIUS` from center,
/// diagonals at the corresponding diagonal offset.
pub fn hand_point(location: Location) -> DVec2 {
    let c = CENTER;
    match location {
        Location::North => dvec2(c.x, c.y - HAND_RADIUS),
        Location::East => dvec2(c.x + HAND_RADIUS, c.y),
        Location::South => dvec2(c.x, c.y + HAND_RADIUS),
        Location::West => dvec2(c.x - HAND_RADIUS, c.y),
        Location::NorthEast => dvec2(c.x + HAND_DIAGONAL, c.y - HAND_DIAGONAL),
        Location::SouthEast => dvec2(c.x + HAND_DIAGONAL, c.y + HAND_DIAGONAL),
        Location::SouthWest => dvec2(c.x - HAND_DIAGONAL, c.y + HAND_DIAGONAL),
        Location::NorthWest => dvec2(c.x - HAND_DIAGONAL, c.y - HAND_DIAGONAL),
    }
}

/// Layer-2 point for a location. Cardinals remap to a fixed diagonal
/// neighbor rather than carrying their own values.
pub fn layer2_point(location: Location) -> DVec2 {
    let c = CENTER;
    let diagonal = match location {
        Location::North => Location::NorthEast,
        Location::East => Location::SouthEast,
        Location::South => Location::SouthWest,
        Location::West => Location::NorthWest,
        other => other,
    };
    match diagonal {
        Location::NorthEast => dvec2(c.x + LAYER2_DIAGONAL, c.y - LAYER2_DIAGONAL),
        Location::SouthEast => dvec2(c.x + LAYER2_DIAGONAL, c.y + LAYER2_DIAGONAL),
        Location::SouthWest => dvec2(c.x - LAYER2_DIAGONAL, c.y + LAYER2_DIAGONAL),
        Location::NorthWest => dvec2(c.x - LAYER2_DIAGONAL, c.y - LAYER2_DIAGONAL),
        _ => unreachable!("cardinals remapped above"),
    }
}

/// Base scene point for a motion's arrow, selected by motion category:
/// layer-2 points for shift motions (pro/anti/float), hand points for
/// static and dash.
///
/// Total over the closed motion-type enum; every motion gets a real
/// grid point, never an error.
pub fn initial_position(motion: &Motion) -> DVec2 {
    match motion.motion_type {
        MotionType::Pro | MotionType::Anti | MotionType::Float => {
            layer2_point(motion.end_location)
        }
        MotionType::Static | MotionType::Dash => hand_point(motion.end_location),
    }
}
