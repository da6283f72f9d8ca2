//! Handpath classification: the rotational category implied by a
//! location-to-location transition.
//!
//! Built from four fixed pair tables. A pair absent from all four is
//! returned as `None` (unclassified) rather than defaulting to any
//! rotation value; callers must treat that as a data-integrity failure.

use crate::errors::OrientationError;
use crate::types::Location;

/// Rotational category of a (start, end) transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handpath {
    Clockwise,
    CounterClockwise,
    /// Straight across the grid to the opposite location.
    Dash,
    /// No movement.
    Static,
}

/// The 4 cardinal clockwise steps plus the 4 diagonal clockwise steps.
const CLOCKWISE_PAIRS: [(Location, Location); 8] = [
    (Location::North, Location::East),
    (Location::East, Location::South),
    (Location::South, Location::West),
    (Location::West, Location::North),
    (Location::NorthEast, Location::SouthEast),
    (Location::SouthEast, Location::SouthWest),
    (Location::SouthWest, Location::NorthWest),
    (Location::NorthWest, Location::NorthEast),
];

/// Classify a transition, or None if the pair is in none of the tables.
///
/// The counter-clockwise table is the mirror image of `CLOCKWISE_PAIRS`,
/// the dash table is each location to its opposite, and the static table
/// is the 8 identity pairs.
pub fn classify(start: Location, end: Location) -> Option<Handpath> {
    if start == end {
        return Some(Handpath::Static);
    }
    if end == start.opposite() {
        return Some(Handpath::Dash);
    }
    if CLOCKWISE_PAIRS.contains(&(start, end)) {
        return Some(Handpath::Clockwise);
    }
    if CLOCKWISE_PAIRS.contains(&(end, start)) {
        return Some(Handpath::CounterClockwise);
    }
    None
}

/// Classify a transition, surfacing an unclassified pair as a typed
/// hard error carrying both locations.
pub fn classify_or_err(start: Location, end: Location) -> Result<Handpath, OrientationError> {
    classify(start, end).ok_or(OrientationError::UnclassifiedHandpath { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_clockwise_steps() {
        assert_eq!(
            classify(Location::South, Location::West),
            Some(Handpath::Clockwise)
        );
        assert_eq!(
            classify(Location::North, Location::East),
            Some(Handpath::Clockwise)
        );
        assert_eq!(
            classify(Location::West, Location::North),
            Some(Handpath::Clockwise)
        );
    }

    #[test]
    fn diagonal_clockwise_steps() {
        assert_eq!(
            classify(Location::NorthEast, Location::SouthEast),
            Some(Handpath::Clockwise)
        );
        assert_eq!(
            classify(Location::NorthWest, Location::NorthEast),
            Some(Handpath::Clockwise)
        );
    }

    #[test]
    fn counter_clockwise_is_the_mirror_table() {
        assert_eq!(
            classify(Location::East, Location::North),
            Some(Handpath::CounterClockwise)
        );
        assert_eq!(
            classify(Location::SouthEast, Location::NorthEast),
            Some(Handpath::CounterClockwise)
        );
    }

    #[test]
    fn same_axis_reversal_is_dash() {
        assert_eq!(classify(Location::North, Location::South), Some(Handpath::Dash));
        assert_eq!(
            classify(Location::SouthWest, Location::NorthEast),
            Some(Handpath::Dash)
        );
    }

    #[test]
    fn identity_is_static() {
        for loc in Location::ALL {
            assert_eq!(classify(loc, loc), Some(Handpath::Static));
        }
    }

    #[test]
    fn cardinal_to_diagonal_is_unclassified() {
        // A cardinal never steps directly to a diagonal in any table.
        assert_eq!(classify(Location::North, Location::NorthEast), None);
        assert_eq!(classify(Location::SouthWest, Location::South), None);
    }

    #[test]
    fn unclassified_pair_surfaces_as_error() {
        let err = classify_or_err(Location::North, Location::NorthEast).unwrap_err();
        assert_eq!(
            err,
            OrientationError::UnclassifiedHandpath {
                start: Location::North,
                end: Location::NorthEast,
            }
        );
    }

    #[test]
    fn every_clockwise_pair_reverses_to_counter_clockwise() {
        for (a, b) in CLOCKWISE_PAIRS {
            assert_eq!(classify(a, b), Some(Handpath::Clockwise));
            assert_eq!(classify(b, a), Some(Handpath::CounterClockwise));
        }
    }

    #[test]
    fn all_64_pairs_classify_or_report() {
        // Totality over the full grid: every pair is either in exactly
        // one table or explicitly unclassified.
        let mut classified = 0;
        for a in Location::ALL {
            for b in Location::ALL {
                if classify(a, b).is_some() {
                    classified += 1;
                }
            }
        }
        // 8 static + 8 dash + 8 cw + 8 ccw
        assert_eq!(classified, 32);
    }
}
