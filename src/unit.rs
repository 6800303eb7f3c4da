//! Unit values for gaps and track sizing.

pub use crate::style::unit::{GridGap, TrackSize, UnitExt};
