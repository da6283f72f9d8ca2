//! Lookup-key derivation for the placement tables.
//!
//! The source data keys its entries on strings; here every key is a
//! typed value with `Hash`/`Eq` so the compiler checks what goes into a
//! table, and `Display` renders the canonical string form for
//! diagnostics and snapshot tests. Identical inputs always produce
//! identical keys — the two-tier lookup relies on that.

use std::fmt;

use crate::types::{
    GridMode, Motion, MotionType, Pictograph, PropColor, RotationDirection, Turns,
};

/// Which orientation layer a motion starts from. Special-placement
/// entries vary by the incoming orientation's pair, not its exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientationKey {
    /// Start orientation is In or Out.
    FromRadial,
    /// Start orientation is Clock or Counter.
    FromRotational,
}

impl OrientationKey {
    pub fn for_motion(motion: &Motion) -> OrientationKey {
        if motion.start_orientation.is_radial() {
            OrientationKey::FromRadial
        } else {
            OrientationKey::FromRotational
        }
    }
}

impl fmt::Display for OrientationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationKey::FromRadial => write!(f, "from_radial"),
            OrientationKey::FromRotational => write!(f, "from_rotational"),
        }
    }
}

/// The joint turn configuration of a pictograph, blue first. Special
/// placements are keyed on both motions' turns, not one in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnsTuple {
    pub blue: Turns,
    pub red: Turns,
}

impl TurnsTuple {
    pub fn for_pictograph(pictograph: &Pictograph) -> TurnsTuple {
        TurnsTuple {
            blue: pictograph.blue.turns,
            red: pictograph.red.turns,
        }
    }
}

impl fmt::Display for TurnsTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.blue, self.red)
    }
}

/// Minimal arrow descriptor: the one property of the drawn arrow that
/// default placement distinguishes beyond motion type and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKind {
    /// The arrow carries a visible turn count (non-zero turns).
    Turning,
    /// Zero turns or the float sentinel.
    Plain,
}

impl ArrowKind {
    pub fn for_motion(motion: &Motion) -> ArrowKind {
        match motion.turns {
            Turns::Whole(0) | Turns::Float => ArrowKind::Plain,
            Turns::Whole(_) | Turns::Half(_) => ArrowKind::Turning,
        }
    }
}

/// Selects among default-placement sub-tables for one motion type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeKey {
    pub motion_type: MotionType,
    pub rotation_direction: RotationDirection,
    pub arrow: ArrowKind,
}

impl AttributeKey {
    pub fn for_motion(motion: &Motion) -> AttributeKey {
        AttributeKey {
            motion_type: motion.motion_type,
            rotation_direction: motion.rotation_direction,
            arrow: ArrowKind::for_motion(motion),
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.motion_type, self.rotation_direction)?;
        if self.arrow == ArrowKind::Turning {
            write!(f, "_turns")?;
        }
        Ok(())
    }
}

/// The final index into the default-placement table: attribute key plus
/// the pictograph's grid mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementKey {
    pub attribute: AttributeKey,
    pub grid_mode: GridMode,
}

impl PlacementKey {
    pub fn new(motion: &Motion, pictograph: &Pictograph) -> PlacementKey {
        PlacementKey {
            attribute: AttributeKey::for_motion(motion),
            grid_mode: pictograph.grid_mode,
        }
    }
}

impl fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.attribute, self.grid_mode)
    }
}

/// All keys for one (motion, pictograph) pair, generated in one pass so
/// the orchestrator derives them exactly once per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySet {
    pub orientation: OrientationKey,
    pub turns_tuple: TurnsTuple,
    pub attribute: AttributeKey,
    pub placement: PlacementKey,
    pub color: PropColor,
}

impl KeySet {
    pub fn generate(pictograph: &Pictograph, color: PropColor) -> KeySet {
        let motion = pictograph.motion(color);
        KeySet {
            orientation: OrientationKey::for_motion(motion),
            turns_tuple: TurnsTuple::for_pictograph(pictograph),
            attribute: AttributeKey::for_motion(motion),
            placement: PlacementKey::new(motion, pictograph),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        GridMode, Letter, LetterBase, Location, Orientation, Pictograph,
    };

    fn motion(color: PropColor, turns: Turns, start_orientation: Orientation) -> Motion {
        Motion {
            motion_type: MotionType::Pro,
            start_location: Location::North,
            end_location: Location::East,
            rotation_direction: RotationDirection::Clockwise,
            turns,
            start_orientation,
            end_orientation: None,
            color,
        }
    }

    fn pictograph(blue_turns: Turns, red_turns: Turns) -> Pictograph {
        Pictograph {
            letter: Letter::plain(LetterBase::G),
            grid_mode: GridMode::Diamond,
            blue: motion(PropColor::Blue, blue_turns, Orientation::In),
            red: motion(PropColor::Red, red_turns, Orientation::Clock),
        }
    }

    #[test]
    fn orientation_key_follows_the_pair() {
        let radial = motion(PropColor::Blue, Turns::Whole(1), Orientation::Out);
        let rotational = motion(PropColor::Blue, Turns::Whole(1), Orientation::Counter);
        assert_eq!(OrientationKey::for_motion(&radial), OrientationKey::FromRadial);
        assert_eq!(
            OrientationKey::for_motion(&rotational),
            OrientationKey::FromRotational
        );
    }

    #[test]
    fn turns_tuple_orders_blue_first() {
        let pic = pictograph(Turns::Whole(1), Turns::Half(0));
        let tuple = TurnsTuple::for_pictograph(&pic);
        assert_eq!(tuple.blue, Turns::Whole(1));
        assert_eq!(tuple.red, Turns::Half(0));
    }

    #[test]
    fn arrow_kind_distinguishes_turning_arrows() {
        assert_eq!(
            ArrowKind::for_motion(&motion(PropColor::Blue, Turns::Whole(0), Orientation::In)),
            ArrowKind::Plain
        );
        assert_eq!(
            ArrowKind::for_motion(&motion(PropColor::Blue, Turns::Float, Orientation::In)),
            ArrowKind::Plain
        );
        assert_eq!(
            ArrowKind::for_motion(&motion(PropColor::Blue, Turns::Half(0), Orientation::In)),
            ArrowKind::Turning
        );
    }

    #[test]
    fn identical_inputs_yield_identical_keys() {
        let pic = pictograph(Turns::Whole(2), Turns::Float);
        let a = KeySet::generate(&pic, PropColor::Blue);
        let b = KeySet::generate(&pic, PropColor::Blue);
        assert_eq!(a, b);
    }

    #[test]
    fn key_renderings() {
        let pic = pictograph(Turns::Whole(1), Turns::Float);
        let keys = KeySet::generate(&pic, PropColor::Blue);
        insta::assert_snapshot!(keys.orientation.to_string(), @"from_radial");
        insta::assert_snapshot!(keys.turns_tuple.to_string(), @"(1, fl)");
        insta::assert_snapshot!(keys.attribute.to_string(), @"pro_cw_turns");
        insta::assert_snapshot!(keys.placement.to_string(), @"pro_cw_turns_diamond");
    }

    #[test]
    fn half_turn_tuple_rendering() {
        let pic = pictograph(Turns::Half(1), Turns::Whole(0));
        let tuple = TurnsTuple::for_pictograph(&pic);
        insta::assert_snapshot!(tuple.to_string(), @"(1.5, 0)");
    }
}
