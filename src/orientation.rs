//! End-orientation resolution and cross-beat propagation.
//!
//! Three disjoint rules cover the whole input space:
//!
//! - **Float** motions (or the float turn sentinel) resolve by handpath:
//!   the rotational category of the location transition picks the end
//!   orientation from a fixed 8-entry map.
//! - **Whole turns** resolve by parity: Pro/Static keep their orientation
//!   on even counts and switch on odd; Anti/Dash do the exact opposite.
//!   The inversion between the two families is load-bearing.
//! - **Half turns** resolve through two 8-entry decision tables per
//!   family, selected by whether `turns mod 2 == 0.5`.
//!
//! The resolver is total over the enumerated domain; the single
//! unresolvable configuration (a half turn with no rotation sense) is a
//! hard error carrying full context, never a silent default.

use crate::errors::OrientationError;
use crate::handpath::{self, Handpath};
use crate::types::{
    Beat, Motion, MotionType, Orientation, ParityFamily, PropColor, RotationDirection, Turns,
};

/// Compute the end orientation for one motion.
pub fn resolve_end_orientation(motion: &Motion) -> Result<Orientation, OrientationError> {
    if motion.motion_type == MotionType::Float || motion.turns == Turns::Float {
        return resolve_float(motion);
    }
    match motion.turns {
        Turns::Whole(n) => {
            // Float was handled above, so the family always exists here.
            let family = motion
                .motion_type
                .family()
                .ok_or_else(|| unresolved(motion))?;
            Ok(resolve_whole(family, n, motion.start_orientation))
        }
        Turns::Half(_) => {
            let family = motion
                .motion_type
                .family()
                .ok_or_else(|| unresolved(motion))?;
            resolve_half(motion, family)
        }
        Turns::Float => unreachable!("float sentinel handled above"),
    }
}

fn unresolved(motion: &Motion) -> OrientationError {
    OrientationError::UnresolvedOrientation {
        motion_type: motion.motion_type,
        turns: motion.turns,
        rotation_direction: motion.rotation_direction,
        start_orientation: motion.start_orientation,
    }
}

/// Float rule: classify the handpath, then map (start orientation ×
/// handpath direction). Dash and static handpaths leave the orientation
/// unchanged (a defined fallback, not a bug).
fn resolve_float(motion: &Motion) -> Result<Orientation, OrientationError> {
    let path = handpath::classify_or_err(motion.start_location, motion.end_location)?;
    Ok(float_orientation(motion.start_orientation, path))
}

/// The fixed 8-entry float map. Each orientation pair maps diagonally
/// into the other pair, flipped by handpath direction.
pub(crate) fn float_orientation(start: Orientation, path: Handpath) -> Orientation {
    match (start, path) {
        (Orientation::In, Handpath::Clockwise) => Orientation::Clock,
        (Orientation::Out, Handpath::Clockwise) => Orientation::Counter,
        (Orientation::Clock, Handpath::Clockwise) => Orientation::Out,
        (Orientation::Counter, Handpath::Clockwise) => Orientation::In,
        (Orientation::In, Handpath::CounterClockwise) => Orientation::Counter,
        (Orientation::Out, Handpath::CounterClockwise) => Orientation::Clock,
        (Orientation::Clock, Handpath::CounterClockwise) => Orientation::In,
        (Orientation::Counter, Handpath::CounterClockwise) => Orientation::Out,
        // No rotational component: orientation carries through.
        (other, Handpath::Dash | Handpath::Static) => other,
    }
}

/// Whole-turn parity rule. Pro/Static: even unchanged, odd switched.
/// Anti/Dash: even switched, odd unchanged.
fn resolve_whole(family: ParityFamily, turns: u8, start: Orientation) -> Orientation {
    let even = turns % 2 == 0;
    let unchanged = match family {
        ParityFamily::ProStatic => even,
        ParityFamily::AntiDash => !even,
    };
    if unchanged { start } else { start.switched() }
}

/// Half-turn rule: an 8x2x2 decision table. Every cell names its result
/// explicitly; there is no computed fallback.
fn resolve_half(motion: &Motion, family: ParityFamily) -> Result<Orientation, OrientationError> {
    use Orientation::*;
    use RotationDirection::*;

    let rotation = match motion.rotation_direction {
        NoRotation => return Err(unresolved(motion)),
        dir => dir,
    };

    // The two families are exact mirrors: Anti/Dash on the ">0.5 parity"
    // branch reads Pro/Static's other branch, and vice versa.
    let past_even = match family {
        ParityFamily::ProStatic => motion.turns.is_half_past_even(),
        ParityFamily::AntiDash => !motion.turns.is_half_past_even(),
    };

    Ok(match (motion.start_orientation, rotation, past_even) {
        (In, Clockwise, true) => Clock,
        (In, CounterClockwise, true) => Counter,
        (Out, Clockwise, true) => Counter,
        (Out, CounterClockwise, true) => Clock,
        (Clock, Clockwise, true) => Out,
        (Clock, CounterClockwise, true) => In,
        (Counter, Clockwise, true) => In,
        (Counter, CounterClockwise, true) => Out,

        (In, Clockwise, false) => Counter,
        (In, CounterClockwise, false) => Clock,
        (Out, Clockwise, false) => Clock,
        (Out, CounterClockwise, false) => Counter,
        (Clock, Clockwise, false) => In,
        (Clock, CounterClockwise, false) => Out,
        (Counter, Clockwise, false) => Out,
        (Counter, CounterClockwise, false) => In,

        (_, NoRotation, _) => unreachable!("rejected above"),
    })
}

/// Resolve both motions of a pictograph's beat, returning the beat with
/// end orientations populated. Pure transform, no aliasing.
pub fn resolve_beat(beat: Beat) -> Result<Beat, OrientationError> {
    let blue_end = resolve_end_orientation(&beat.pictograph.blue)?;
    let red_end = resolve_end_orientation(&beat.pictograph.red)?;
    let pictograph = beat
        .pictograph
        .with_motion(PropColor::Blue, beat.pictograph.blue.with_end_orientation(blue_end))
        .with_motion(PropColor::Red, beat.pictograph.red.with_end_orientation(red_end));
    Ok(Beat { pictograph, ..beat })
}

/// Propagate orientations across a sequence, strictly left to right.
///
/// For every beat after the first, each motion's start orientation is
/// forced to the same color's end orientation from the previous beat,
/// then its own end orientation is resolved. Beats depend on their
/// predecessor, so this is inherently ordered.
pub fn propagate_orientations(beats: Vec<Beat>) -> Result<Vec<Beat>, OrientationError> {
    let mut out: Vec<Beat> = Vec::with_capacity(beats.len());
    for beat in beats {
        let chained = match out.last() {
            None => beat,
            Some(prev) => {
                let mut pic = beat.pictograph;
                for color in [PropColor::Blue, PropColor::Red] {
                    // resolve_beat populated the previous end orientations.
                    let prev_end = prev
                        .pictograph
                        .motion(color)
                        .end_orientation
                        .expect("previous beat resolved");
                    pic = pic.with_motion(color, pic.motion(color).with_start_orientation(prev_end));
                }
                Beat { pictograph: pic, ..beat }
            }
        };
        out.push(resolve_beat(chained)?);
    }
    Ok(out)
}

/// Verify the cross-beat continuity invariant on an already-propagated
/// sequence. A violation is a hard error, not a warning.
pub fn check_continuity(beats: &[Beat]) -> Result<(), OrientationError> {
    for (i, pair) in beats.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        for color in [PropColor::Blue, PropColor::Red] {
            let expected = match prev.pictograph.motion(color).end_orientation {
                Some(ori) => ori,
                None => resolve_end_orientation(prev.pictograph.motion(color))?,
            };
            let found = next.pictograph.motion(color).start_orientation;
            if found != expected {
                return Err(OrientationError::ContinuityBroken {
                    beat_index: i + 1,
                    color,
                    expected,
                    found,
                });
            }
        }
    }
    Ok(())
}
