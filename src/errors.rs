//! Error types with diagnostic codes using miette.
//!
//! Two failure philosophies coexist in the engine and are kept apart by
//! type: orientation resolution hard-fails (a data or programming defect,
//! the pictograph cannot be drawn), while placement lookup failures may
//! be degraded by the orchestrator to a defined-but-visibly-wrong value.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{
    Location, MotionType, Orientation, PropColor, RotationDirection, Turns,
};

/// Errors from orientation resolution and sequence propagation.
///
/// Every variant is a hard failure: callers must treat these as blocking.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum OrientationError {
    #[error("unclassified handpath: {start} -> {end}")]
    #[diagnostic(
        code(kinegram::orientation::unclassified_handpath),
        help("every location pair must fall in one of the CW/CCW/dash/static tables; this pair is missing from all four")
    )]
    UnclassifiedHandpath { start: Location, end: Location },

    #[error(
        "unresolved orientation for {motion_type} motion ({turns} turns, {rotation_direction}, from {start_orientation})"
    )]
    #[diagnostic(code(kinegram::orientation::unresolved))]
    UnresolvedOrientation {
        motion_type: MotionType,
        turns: Turns,
        rotation_direction: RotationDirection,
        start_orientation: Orientation,
    },

    #[error(
        "orientation continuity broken at beat {beat_index} ({color}): starts {found} but previous beat ended {expected}"
    )]
    #[diagnostic(
        code(kinegram::orientation::continuity_broken),
        help("run propagate_orientations over the sequence before relying on per-beat orientations")
    )]
    ContinuityBroken {
        beat_index: usize,
        color: PropColor,
        expected: Orientation,
        found: Orientation,
    },
}

/// Errors from the placement lookup pipeline.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// Neither the special nor the default table held an entry. The
    /// orchestrator degrades this to a zero adjustment; other callers
    /// may treat it as fatal.
    #[error("adjustment lookup failed for {motion_type} ({turns} turns, {color}) in letter {letter}")]
    #[diagnostic(code(kinegram::placement::lookup_failed))]
    AdjustmentLookupFailed {
        letter: String,
        motion_type: MotionType,
        turns: Turns,
        color: PropColor,
    },

    /// The backing store could not produce the placement tables.
    #[error("placement table load failed: {message}")]
    #[diagnostic(code(kinegram::placement::table_load))]
    TableLoad { message: String },
}

impl PlacementError {
    /// True for failures the orchestrator may degrade to a defined
    /// fallback value instead of propagating.
    pub fn is_degradable(&self) -> bool {
        matches!(self, PlacementError::AdjustmentLookupFailed { .. })
    }
}

/// Umbrella error for the full placement pipeline: callers pattern-match
/// the variant to tell blocking failures from degradable ones.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Orientation(#[from] OrientationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Placement(#[from] PlacementError),
}
