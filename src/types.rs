//! Core value types for the placement engine.
//!
//! Everything here is a small immutable value: locations on the 8-point
//! grid, the four prop orientations, motion descriptors, and the
//! pictograph that owns one motion per color. Motions are replaced, not
//! mutated, when a derived field is recomputed.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

/// One of the 8 symbolic compass points of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Location {
    /// All 8 locations, cardinals first.
    pub const ALL: [Location; 8] = [
        Location::North,
        Location::East,
        Location::South,
        Location::West,
        Location::NorthEast,
        Location::SouthEast,
        Location::SouthWest,
        Location::NorthWest,
    ];

    /// The 4 cardinal locations.
    pub const CARDINALS: [Location; 4] = [
        Location::North,
        Location::East,
        Location::South,
        Location::West,
    ];

    /// The 4 diagonal locations.
    pub const DIAGONALS: [Location; 4] = [
        Location::NorthEast,
        Location::SouthEast,
        Location::SouthWest,
        Location::NorthWest,
    ];

    /// The location directly across the grid center.
    pub fn opposite(self) -> Location {
        match self {
            Location::North => Location::South,
            Location::East => Location::West,
            Location::South => Location::North,
            Location::West => Location::East,
            Location::NorthEast => Location::SouthWest,
            Location::SouthEast => Location::NorthWest,
            Location::SouthWest => Location::NorthEast,
            Location::NorthWest => Location::SouthEast,
        }
    }

    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Location::North | Location::East | Location::South | Location::West
        )
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Location::North => "n",
            Location::East => "e",
            Location::South => "s",
            Location::West => "w",
            Location::NorthEast => "ne",
            Location::SouthEast => "se",
            Location::SouthWest => "sw",
            Location::NorthWest => "nw",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Location::North),
            "e" => Ok(Location::East),
            "s" => Ok(Location::South),
            "w" => Ok(Location::West),
            "ne" => Ok(Location::NorthEast),
            "se" => Ok(Location::SouthEast),
            "sw" => Ok(Location::SouthWest),
            "nw" => Ok(Location::NorthWest),
            other => Err(format!("unknown location: {}", other)),
        }
    }
}

/// Prop orientation relative to the grid center.
///
/// The four values form two opposite pairs: {In, Out} (radial) and
/// {Clock, Counter} (rotational). `switched` maps each value to its
/// pair partner and is an involution with no fixed points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::In,
        Orientation::Out,
        Orientation::Clock,
        Orientation::Counter,
    ];

    /// The pair partner: In↔Out, Clock↔Counter.
    pub fn switched(self) -> Orientation {
        match self {
            Orientation::In => Orientation::Out,
            Orientation::Out => Orientation::In,
            Orientation::Clock => Orientation::Counter,
            Orientation::Counter => Orientation::Clock,
        }
    }

    /// True for In/Out (pointing along a radius of the grid).
    pub fn is_radial(self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }

    /// True for Clock/Counter (pointing along the tangent).
    pub fn is_rotational(self) -> bool {
        !self.is_radial()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clock => "clock",
            Orientation::Counter => "counter",
        };
        write!(f, "{}", s)
    }
}

/// Rotation sense of a motion's prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
    NoRotation,
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RotationDirection::Clockwise => "cw",
            RotationDirection::CounterClockwise => "ccw",
            RotationDirection::NoRotation => "no_rot",
        };
        write!(f, "{}", s)
    }
}

/// The five motion types.
///
/// Pro and Static share one orientation parity; Anti and Dash share the
/// opposite parity. Float is resolved by handpath, not parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionType {
    Pro,
    Anti,
    Static,
    Dash,
    Float,
}

impl MotionType {
    pub const ALL: [MotionType; 5] = [
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Static,
        MotionType::Dash,
        MotionType::Float,
    ];

    /// True for Pro/Anti/Float: motions whose arrow sits on a layer-2
    /// point rather than a hand point.
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }

    /// The parity family, or None for Float (handpath-resolved).
    pub fn family(self) -> Option<ParityFamily> {
        match self {
            MotionType::Pro | MotionType::Static => Some(ParityFamily::ProStatic),
            MotionType::Anti | MotionType::Dash => Some(ParityFamily::AntiDash),
            MotionType::Float => None,
        }
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Static => "static",
            MotionType::Dash => "dash",
            MotionType::Float => "float",
        };
        write!(f, "{}", s)
    }
}

/// Orientation parity family of a motion type, used by the whole-turn
/// and half-turn resolution rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityFamily {
    /// Pro and Static.
    ProStatic,
    /// Anti and Dash.
    AntiDash,
}

/// Turn count of a motion.
///
/// The *kind* matters as much as the value: whole and half counts select
/// different resolution rules, and `Float` is a sentinel, not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turns {
    /// 0, 1, 2, 3...
    Whole(u8),
    /// n + 0.5 turns; `Half(1)` is 1.5 turns.
    Half(u8),
    /// The float sentinel (renders as "fl" in keys).
    Float,
}

impl Turns {
    /// Parse a numeric turn count, rejecting anything that is neither a
    /// whole number nor a half-integer.
    pub fn from_f64(val: f64) -> Result<Turns, String> {
        if !val.is_finite() || val < 0.0 {
            return Err(format!("invalid turn count: {}", val));
        }
        let whole = val.trunc();
        if whole > u8::MAX as f64 {
            return Err(format!("turn count out of range: {}", val));
        }
        if val == whole {
            Ok(Turns::Whole(whole as u8))
        } else if val - whole == 0.5 {
            Ok(Turns::Half(whole as u8))
        } else {
            Err(format!("turn count is neither whole nor half: {}", val))
        }
    }

    /// Numeric value, or None for the float sentinel.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Turns::Whole(n) => Some(n as f64),
            Turns::Half(n) => Some(n as f64 + 0.5),
            Turns::Float => None,
        }
    }

    /// True when `turns mod 2 == 0.5` (0.5, 2.5, ...). Selects between
    /// the two branches of the half-turn decision tables.
    pub fn is_half_past_even(self) -> bool {
        matches!(self, Turns::Half(n) if n % 2 == 0)
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turns::Whole(n) => write!(f, "{}", n),
            Turns::Half(n) => write!(f, "{}.5", n),
            Turns::Float => write!(f, "fl"),
        }
    }
}

/// Which of the two simultaneous props a motion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropColor {
    Blue,
    Red,
}

impl PropColor {
    pub fn other(self) -> PropColor {
        match self {
            PropColor::Blue => PropColor::Red,
            PropColor::Red => PropColor::Blue,
        }
    }
}

impl fmt::Display for PropColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropColor::Blue => write!(f, "blue"),
            PropColor::Red => write!(f, "red"),
        }
    }
}

/// Base symbol of a pictograph letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum LetterBase {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Alpha, Beta, Gamma, Sigma, Delta, Theta, Omega, Phi, Psi, Lambda,
}

impl fmt::Display for LetterBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LetterBase::*;
        let s = match self {
            A => "A", B => "B", C => "C", D => "D", E => "E", F => "F",
            G => "G", H => "H", I => "I", J => "J", K => "K", L => "L",
            M => "M", N => "N", O => "O", P => "P", Q => "Q", R => "R",
            S => "S", T => "T", U => "U", V => "V", W => "W", X => "X",
            Y => "Y", Z => "Z",
            Alpha => "α", Beta => "β", Gamma => "Γ",
            Sigma => "Σ", Delta => "Δ", Theta => "θ",
            Omega => "Ω", Phi => "Φ", Psi => "Ψ", Lambda => "Λ",
        };
        write!(f, "{}", s)
    }
}

/// A pictograph letter: a base symbol with an optional dash variant
/// ("W-", "Σ-", ...). Carries no geometry; it only discriminates
/// special-placement table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub base: LetterBase,
    pub dashed: bool,
}

impl Letter {
    pub const fn plain(base: LetterBase) -> Letter {
        Letter { base, dashed: false }
    }

    pub const fn dash(base: LetterBase) -> Letter {
        Letter { base, dashed: true }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if self.dashed {
            write!(f, "-")?;
        }
        Ok(())
    }
}

/// Grid layout mode of a pictograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridMode {
    Diamond,
    Box,
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridMode::Diamond => write!(f, "diamond"),
            GridMode::Box => write!(f, "box"),
        }
    }
}

/// One prop's movement within a single beat.
///
/// `end_orientation` is derived by the orientation resolver, never
/// supplied as input; `with_end_orientation` produces the updated copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub motion_type: MotionType,
    pub start_location: Location,
    pub end_location: Location,
    pub rotation_direction: RotationDirection,
    pub turns: Turns,
    pub start_orientation: Orientation,
    pub end_orientation: Option<Orientation>,
    pub color: PropColor,
}

impl Motion {
    /// A copy with the derived end orientation filled in.
    pub fn with_end_orientation(self, ori: Orientation) -> Motion {
        Motion {
            end_orientation: Some(ori),
            ..self
        }
    }

    /// A copy with the start orientation replaced (used by sequence
    /// propagation to chain beats together). Clears the stale derived
    /// end orientation.
    pub fn with_start_orientation(self, ori: Orientation) -> Motion {
        Motion {
            start_orientation: ori,
            end_orientation: None,
            ..self
        }
    }
}

/// One beat's diagram: a letter, a grid mode, and one motion per color.
///
/// Orientation and placement of either motion depend on the sibling
/// motion's turns and orientation, so this is the unit of computation,
/// not the lone `Motion`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pictograph {
    pub letter: Letter,
    pub grid_mode: GridMode,
    pub blue: Motion,
    pub red: Motion,
}

impl Pictograph {
    pub fn motion(&self, color: PropColor) -> &Motion {
        match color {
            PropColor::Blue => &self.blue,
            PropColor::Red => &self.red,
        }
    }

    /// The other color's motion.
    pub fn sibling(&self, color: PropColor) -> &Motion {
        self.motion(color.other())
    }

    /// A copy with one color's motion replaced.
    pub fn with_motion(self, color: PropColor, motion: Motion) -> Pictograph {
        match color {
            PropColor::Blue => Pictograph { blue: motion, ..self },
            PropColor::Red => Pictograph { red: motion, ..self },
        }
    }
}

/// A pictograph at a known position in a sequence. The index only feeds
/// diagnostics on continuity failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beat {
    pub index: usize,
    pub pictograph: Pictograph,
}

/// What the renderer needs to draw one arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    /// Final scene-space position (base point + adjustment).
    pub position: DVec2,
    /// Rotation of the glyph in degrees.
    pub rotation_angle: f64,
    /// Whether the glyph is drawn mirrored.
    pub mirrored: bool,
}
