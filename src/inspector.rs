//! Debug-overlay support: computed track metrics and overlay labels.
//!
//! Reading track counts depends on a live rendering environment, so the
//! environment stays behind the [`ComputedTracks`] trait; this module only
//! interprets what it reports.

use std::fmt;

use crate::responsive::ResponsiveValue;
use crate::style::{GridItemStyle, GridStyle};

/// Computed track lists as exposed by the rendering environment.
///
/// Implemented by the embedder over a live element, mirroring the
/// computed `grid-template-columns`/`grid-template-rows` values. Should
/// be read after layout has settled.
pub trait ComputedTracks {
    fn grid_template_columns(&self) -> Option<String>;
    fn grid_template_rows(&self) -> Option<String>;
}

/// Track counts observed on a live element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackMetrics {
    pub columns: usize,
    pub rows: usize,
}

impl fmt::Display for TrackMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.columns, self.rows)
    }
}

/// Reads the current track counts from a rendered element.
///
/// A missing, empty, or `none` track list reports zero tracks on that
/// axis; transient unavailability is not an error.
pub fn read_tracks(el: &impl ComputedTracks) -> TrackMetrics {
    TrackMetrics {
        columns: count_tracks(el.grid_template_columns()),
        rows: count_tracks(el.grid_template_rows()),
    }
}

fn count_tracks(list: Option<String>) -> usize {
    match list.as_deref() {
        None | Some("none") => 0,
        Some(list) => list.split_whitespace().count(),
    }
}

/// Overlay caption for a container, e.g. `Grid: 3 × responsive`.
pub fn overlay_label(style: &GridStyle) -> String {
    format!(
        "Grid: {} × {}",
        axis_label(style.columns.as_ref()),
        axis_label(style.rows.as_ref())
    )
}

/// Overlay caption for an item, e.g. `span 2 × auto`.
pub fn item_label(style: &GridItemStyle) -> String {
    format!(
        "{} × {}",
        axis_label(style.column.as_ref()),
        axis_label(style.row.as_ref())
    )
}

fn axis_label<T: fmt::Display>(value: Option<&ResponsiveValue<T>>) -> String {
    value.map_or_else(|| "auto".to_string(), ToString::to_string)
}
