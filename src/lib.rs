//! Orientation and arrow-placement resolution for kinetic movement
//! notation pictographs.
//!
//! A pictograph encodes two simultaneous prop motions (blue and red) on
//! an 8-direction grid. For every motion this crate computes, fully
//! deterministically:
//!
//! - the prop's **end orientation** after its turn sequence
//!   ([`orientation::resolve_end_orientation`],
//!   [`orientation::propagate_orientations`]), and
//! - the **position, rotation angle and mirror flag** at which the
//!   motion's arrow glyph must be drawn
//!   ([`placement::ArrowPlacementEngine`]).
//!
//! Rendering, persistence and table parsing live elsewhere; the
//! placement tables arrive through the [`placement::PlacementLoader`]
//! contract and are loaded at most once.
//!
//! Two failure philosophies coexist by design: orientation resolution
//! hard-fails on unresolvable input (a data defect), while missing
//! placement entries degrade to a defined-but-visibly-wrong value so
//! the editor stays usable.

pub mod coords;
pub mod errors;
pub mod handpath;
pub mod keys;
pub mod log;
pub mod orientation;
pub mod placement;
pub mod types;

pub use errors::{EngineError, OrientationError, PlacementError};
pub use handpath::Handpath;
pub use orientation::{check_continuity, propagate_orientations, resolve_end_orientation};
pub use placement::{ArrowPlacementEngine, PlacementLoader, PlacementStore, PlacementTables};
pub use types::{
    ArrowPlacement, Beat, GridMode, Letter, LetterBase, Location, Motion, MotionType,
    Orientation, Pictograph, PropColor, RotationDirection, Turns,
};
