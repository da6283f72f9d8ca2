//! Built-in fallback adjustments for the synchronous path.
//!
//! Covers only the common motion-type × whole-turn cases. This is an
//! approximation for callers that cannot wait for the real tables to
//! load, not a parity guarantee with the loaded lookup.

use glam::{DVec2, dvec2};

use crate::types::{MotionType, Turns};

/// Fallback base adjustment, or None outside the covered cases
/// (half turns, the float sentinel, and counts above 3).
pub fn builtin_adjustment(motion_type: MotionType, turns: Turns) -> Option<DVec2> {
    let n = match turns {
        Turns::Whole(n @ 0..=3) => n,
        _ => return None,
    };
    Some(match (motion_type, n) {
        (MotionType::Pro, 0) => dvec2(0.0, 25.0),
        (MotionType::Pro, 1) => dvec2(-15.0, 40.0),
        (MotionType::Pro, 2) => dvec2(0.0, 55.0),
        (MotionType::Pro, 3) => dvec2(-15.0, 70.0),

        (MotionType::Anti, 0) => dvec2(0.0, -25.0),
        (MotionType::Anti, 1) => dvec2(15.0, -40.0),
        (MotionType::Anti, 2) => dvec2(0.0, -55.0),
        (MotionType::Anti, 3) => dvec2(15.0, -70.0),

        (MotionType::Static, 0) => dvec2(0.0, 0.0),
        (MotionType::Static, 1) => dvec2(10.0, 10.0),
        (MotionType::Static, 2) => dvec2(20.0, 20.0),
        (MotionType::Static, 3) => dvec2(30.0, 30.0),

        (MotionType::Dash, 0) => dvec2(20.0, 0.0),
        (MotionType::Dash, 1) => dvec2(30.0, 10.0),
        (MotionType::Dash, 2) => dvec2(40.0, 20.0),
        (MotionType::Dash, 3) => dvec2(50.0, 30.0),

        // A float normally carries the float sentinel, but the type
        // admits whole turns; give it the pro baseline.
        (MotionType::Float, _) => dvec2(0.0, 25.0),

        _ => unreachable!("turn count bounded to 0..=3 above"),
    })
}
