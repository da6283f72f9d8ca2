//! Logging macros behind the `tracing` cargo feature.
//!
//! The engine logs little: warnings on its soft-degrade paths (a
//! placement lookup miss collapsing to a zero adjustment, a motion
//! outside the built-in fallback cases of the unloaded variant) and a
//! debug line per resolved base adjustment. Hard failures carry their
//! context in typed errors instead, so logging stays optional.
//! Without the feature the macros expand to nothing and the degraded
//! hot path pays no formatting cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

// Feature off: swallow the arguments entirely so even the format
// expressions are never evaluated.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
