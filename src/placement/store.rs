//! Two-tier placement lookup over externally supplied tables.
//!
//! The tables are opaque key→vector resources loaded once from a
//! backing store the engine never sees directly; it depends only on the
//! `PlacementLoader` contract. After a successful load the tables are
//! immutable and shared by reference, so no locking is needed beyond
//! the single-flight memoization of the load itself.

use std::collections::HashMap;

use glam::DVec2;
use once_cell::sync::OnceCell;

use crate::errors::PlacementError;
use crate::keys::{AttributeKey, KeySet, OrientationKey, PlacementKey, TurnsTuple};
use crate::types::{Letter, PropColor, Turns};

/// Key of a hand-authored special placement: one per-letter exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialKey {
    pub letter: Letter,
    pub orientation: OrientationKey,
    pub turns_tuple: TurnsTuple,
    pub attribute: AttributeKey,
    pub color: PropColor,
}

/// Key of a generic, letter-independent default placement. Motion type
/// and grid mode travel inside the placement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultKey {
    pub placement: PlacementKey,
    pub turns: Turns,
}

/// The two lookup tables, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct PlacementTables {
    pub special: HashMap<SpecialKey, DVec2>,
    pub default: HashMap<DefaultKey, DVec2>,
}

impl PlacementTables {
    pub fn new() -> PlacementTables {
        PlacementTables::default()
    }

    pub fn with_special(mut self, key: SpecialKey, adjustment: DVec2) -> PlacementTables {
        self.special.insert(key, adjustment);
        self
    }

    pub fn with_default(mut self, key: DefaultKey, adjustment: DVec2) -> PlacementTables {
        self.default.insert(key, adjustment);
        self
    }
}

/// The backing-store contract: produce both tables, once.
pub trait PlacementLoader: Send + Sync {
    fn load(&self) -> Result<PlacementTables, PlacementError>;
}

/// Tables already in memory load as themselves (useful in tests and for
/// callers that assembled the tables elsewhere).
impl PlacementLoader for PlacementTables {
    fn load(&self) -> Result<PlacementTables, PlacementError> {
        Ok(self.clone())
    }
}

/// Owns the loader and memoizes its single successful load.
///
/// Concurrent callers that arrive before the load finished all resolve
/// from the one underlying fetch; a successful load never runs twice.
/// A failed load leaves the cell empty so a later call may retry.
pub struct PlacementStore {
    loader: Box<dyn PlacementLoader>,
    tables: OnceCell<PlacementTables>,
}

impl PlacementStore {
    pub fn new(loader: impl PlacementLoader + 'static) -> PlacementStore {
        PlacementStore {
            loader: Box::new(loader),
            tables: OnceCell::new(),
        }
    }

    /// The loaded tables, loading them on first use.
    pub fn tables(&self) -> Result<&PlacementTables, PlacementError> {
        self.tables.get_or_try_init(|| self.loader.load())
    }

    /// True once a load has succeeded. The synchronous adjustment path
    /// uses this to avoid ever triggering a load.
    pub fn is_loaded(&self) -> bool {
        self.tables.get().is_some()
    }

    /// Two-tier lookup: the special tier always wins; the default tier
    /// is the fallback; a miss in both is a typed error, never a silent
    /// substitute.
    pub fn base_adjustment(
        &self,
        letter: Letter,
        keys: &KeySet,
    ) -> Result<DVec2, PlacementError> {
        let tables = self.tables()?;

        let special = SpecialKey {
            letter,
            orientation: keys.orientation,
            turns_tuple: keys.turns_tuple,
            attribute: keys.attribute,
            color: keys.color,
        };
        if let Some(&adjustment) = tables.special.get(&special) {
            return Ok(adjustment);
        }

        let turns = match keys.color {
            PropColor::Blue => keys.turns_tuple.blue,
            PropColor::Red => keys.turns_tuple.red,
        };
        let default = DefaultKey {
            placement: keys.placement,
            turns,
        };
        if let Some(&adjustment) = tables.default.get(&default) {
            return Ok(adjustment);
        }

        Err(PlacementError::AdjustmentLookupFailed {
            letter: letter.to_string(),
            motion_type: keys.attribute.motion_type,
            turns,
            color: keys.color,
        })
    }
}
