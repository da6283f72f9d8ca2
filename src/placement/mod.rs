//! The arrow placement pipeline.
//!
//! Submodules:
//! - `store`: two-tier special→default lookup over loaded tables
//! - `directional`: quadrant-dependent generalization of base vectors
//! - `defaults`: built-in fallback table for the unloaded path
//! - `rotation`: glyph rotation angle and mirror flag
//!
//! `ArrowPlacementEngine` ties them together: generate the lookup keys
//! once, resolve a base adjustment, run it through the directional
//! transform, and compose the renderer-facing `ArrowPlacement`.

pub mod defaults;
pub mod directional;
pub mod rotation;
pub mod store;

pub use store::{DefaultKey, PlacementLoader, PlacementStore, PlacementTables, SpecialKey};

use glam::DVec2;

use crate::coords;
use crate::errors::EngineError;
use crate::keys::KeySet;
use crate::log::{debug, warn};
use crate::types::{ArrowPlacement, Location, Pictograph, PropColor};

/// The externally-called entry point for arrow placement.
pub struct ArrowPlacementEngine {
    store: PlacementStore,
}

impl ArrowPlacementEngine {
    pub fn new(loader: impl PlacementLoader + 'static) -> ArrowPlacementEngine {
        ArrowPlacementEngine {
            store: PlacementStore::new(loader),
        }
    }

    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    /// Final (x, y) adjustment for one motion's arrow at its location.
    ///
    /// A miss in both lookup tiers degrades to a zero adjustment and is
    /// logged: the editor stays usable with incomplete placement data,
    /// at the cost of a visibly unadjusted arrow. Orientation-level
    /// failures (an unclassifiable float handpath) and table load
    /// failures still propagate as hard errors.
    pub fn calculate_adjustment(
        &self,
        pictograph: &Pictograph,
        color: PropColor,
        arrow_location: Location,
    ) -> Result<DVec2, EngineError> {
        let keys = KeySet::generate(pictograph, color);
        let motion = pictograph.motion(color);

        let base = match self.store.base_adjustment(pictograph.letter, &keys) {
            Ok(base) => base,
            Err(err) if err.is_degradable() => {
                warn!("placement lookup failed, degrading to zero adjustment: {}", err);
                return Ok(DVec2::ZERO);
            }
            Err(err) => return Err(err.into()),
        };

        debug!(
            "base adjustment {:?} for keys {} / {}",
            base, keys.turns_tuple, keys.placement
        );
        Ok(directional::apply(motion, arrow_location, base)?)
    }

    /// Synchronous variant for callers that cannot wait on the initial
    /// table load: never touches the loader, consulting only the
    /// built-in whole-turn fallback table. An approximation, not parity
    /// with `calculate_adjustment`.
    pub fn calculate_adjustment_unloaded(
        &self,
        pictograph: &Pictograph,
        color: PropColor,
        arrow_location: Location,
    ) -> Result<DVec2, EngineError> {
        let motion = pictograph.motion(color);
        let base = match defaults::builtin_adjustment(motion.motion_type, motion.turns) {
            Some(base) => base,
            None => {
                warn!(
                    "no builtin fallback for {} with {} turns, degrading to zero",
                    motion.motion_type, motion.turns
                );
                return Ok(DVec2::ZERO);
            }
        };
        Ok(directional::apply(motion, arrow_location, base)?)
    }

    /// Everything the renderer needs for one arrow: the base grid point
    /// plus the adjustment, the rotation angle, and the mirror flag.
    /// The arrow sits at the motion's end location.
    pub fn place_arrow(
        &self,
        pictograph: &Pictograph,
        color: PropColor,
    ) -> Result<ArrowPlacement, EngineError> {
        let motion = pictograph.motion(color);
        let arrow_location = motion.end_location;
        let adjustment = self.calculate_adjustment(pictograph, color, arrow_location)?;
        Ok(ArrowPlacement {
            position: coords::initial_position(motion) + adjustment,
            rotation_angle: rotation::rotation_angle(motion, arrow_location),
            mirrored: rotation::is_mirrored(motion),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PlacementError;
    use crate::keys::KeySet;
    use crate::types::{
        GridMode, Letter, LetterBase, Location, Motion, MotionType, Orientation,
        RotationDirection, Turns,
    };
    use glam::dvec2;

    fn pictograph() -> Pictograph {
        let m = |color| Motion {
            motion_type: MotionType::Pro,
            start_location: Location::North,
            end_location: Location::East,
            rotation_direction: RotationDirection::Clockwise,
            turns: Turns::Whole(1),
            start_orientation: Orientation::In,
            end_orientation: None,
            color,
        };
        Pictograph {
            letter: Letter::plain(LetterBase::A),
            grid_mode: GridMode::Diamond,
            blue: m(PropColor::Blue),
            red: m(PropColor::Red),
        }
    }

    fn special_key(pic: &Pictograph, color: PropColor) -> SpecialKey {
        let keys = KeySet::generate(pic, color);
        SpecialKey {
            letter: pic.letter,
            orientation: keys.orientation,
            turns_tuple: keys.turns_tuple,
            attribute: keys.attribute,
            color,
        }
    }

    #[test]
    fn special_entry_wins_and_is_quadrant_transformed() {
        let pic = pictograph();
        let tables = PlacementTables::new()
            .with_special(special_key(&pic, PropColor::Blue), dvec2(10.0, 5.0))
            .with_default(
                DefaultKey {
                    placement: KeySet::generate(&pic, PropColor::Blue).placement,
                    turns: Turns::Whole(1),
                },
                dvec2(1.0, 1.0),
            );
        let engine = ArrowPlacementEngine::new(tables);

        // East sits in quadrant 1; Pro/CW rotates (10,5) to (-5,10).
        let adj = engine
            .calculate_adjustment(&pic, PropColor::Blue, Location::East)
            .unwrap();
        assert_eq!(adj, dvec2(-5.0, 10.0));
    }

    #[test]
    fn total_lookup_miss_degrades_to_zero() {
        let engine = ArrowPlacementEngine::new(PlacementTables::new());
        let adj = engine
            .calculate_adjustment(&pictograph(), PropColor::Blue, Location::East)
            .unwrap();
        assert_eq!(adj, DVec2::ZERO);
    }

    struct FailingLoader;

    impl PlacementLoader for FailingLoader {
        fn load(&self) -> Result<PlacementTables, PlacementError> {
            Err(PlacementError::TableLoad {
                message: "backing store unavailable".to_string(),
            })
        }
    }

    #[test]
    fn load_failure_propagates_instead_of_degrading() {
        let engine = ArrowPlacementEngine::new(FailingLoader);
        let err = engine
            .calculate_adjustment(&pictograph(), PropColor::Blue, Location::East)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Placement(PlacementError::TableLoad { .. })
        ));
    }

    #[test]
    fn unloaded_variant_never_touches_the_loader() {
        let engine = ArrowPlacementEngine::new(FailingLoader);
        // Pro with 1 whole turn has a builtin fallback; quadrant 1
        // rotates (-15,40) to (-40,-15).
        let adj = engine
            .calculate_adjustment_unloaded(&pictograph(), PropColor::Blue, Location::East)
            .unwrap();
        assert_eq!(adj, dvec2(-40.0, -15.0));
        assert!(!engine.store().is_loaded());
    }

    #[test]
    fn unloaded_variant_degrades_outside_the_builtin_cases() {
        let mut pic = pictograph();
        pic.blue.turns = Turns::Half(0);
        let engine = ArrowPlacementEngine::new(PlacementTables::new());
        let adj = engine
            .calculate_adjustment_unloaded(&pic, PropColor::Blue, Location::East)
            .unwrap();
        assert_eq!(adj, DVec2::ZERO);
    }

    #[test]
    fn place_arrow_composes_position_rotation_and_mirror() {
        let pic = pictograph();
        let tables = PlacementTables::new()
            .with_special(special_key(&pic, PropColor::Blue), dvec2(10.0, 5.0));
        let engine = ArrowPlacementEngine::new(tables);

        let placement = engine.place_arrow(&pic, PropColor::Blue).unwrap();
        // End location East remaps to the SE layer-2 point; quadrant 1
        // rotates the special entry (10,5) to (-5,10).
        let base = crate::coords::layer2_point(Location::East);
        assert_eq!(placement.position, base + dvec2(-5.0, 10.0));
        assert_eq!(placement.rotation_angle, 90.0);
        assert!(!placement.mirrored);
    }
}
