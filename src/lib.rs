//! # grid_style
//! A pure, framework-independent style engine for responsive CSS Grid
//! layouts: declarative grid configuration in, flat CSS property maps out.
//!
//! The engine has three moving parts:
//!
//! - **Breakpoint resolution** ([`responsive`]): an observed width picks
//!   the active [`Breakpoint`] from an ordered threshold table.
//! - **Responsive values** ([`responsive`]): any configuration field can
//!   be a scalar or a partial per-breakpoint mapping. Mappings resolve
//!   mobile-first: the cascade walks from the active breakpoint down to
//!   `base` and takes the first defined entry, never searching upward.
//! - **Style compilation** ([`style`]): [`GridStyle`] and
//!   [`GridItemStyle`] compile against a [`GridCx`] into a [`StyleMap`]
//!   that a rendering layer applies to a real element.
//!
//! ## Example
//! ```
//! use grid_style::prelude::*;
//!
//! let mut system = GridSystem::new().with_spacing(SpacingPreset::Relaxed);
//! let cx = system.observe(1024.0);
//! assert_eq!(cx.breakpoint, Breakpoint::Lg);
//!
//! let grid = GridStyle::new()
//!     .columns(1)
//!     .responsive(Breakpoint::Md, |s| s.columns(3));
//!
//! let style = grid.compute(&cx);
//! assert_eq!(style.get("display").unwrap().to_string(), "grid");
//! assert_eq!(
//!     style.get("grid-template-columns").unwrap().to_string(),
//!     "repeat(3, 1fr)",
//! );
//! // No gap was configured, so the ambient preset applies.
//! assert_eq!(style.get("gap").unwrap().to_string(), "24px");
//! ```
//!
//! Everything in the core is a pure function over immutable inputs: the
//! same configuration and context always compile to the same map, and
//! nothing here touches global state. Reactivity stays at the boundary:
//! an external resize source drives a [`SizeObserver`], which recomputes
//! the context and hands it to the embedder on every notification.
//!
//! The default breakpoint thresholds (`base`=0, `sm`=640, `md`=768,
//! `lg`=1024, `xl`=1280, `2xl`=1536) are part of the crate's public
//! contract; see [`responsive::Breakpoints`].

pub mod context;
pub mod inspector;
pub mod responsive;
pub mod style;
pub mod unit;

pub use context::{GridCx, GridSystem, MissingContextError, SizeObserver};
pub use inspector::{ComputedTracks, TrackMetrics, read_tracks};
pub use responsive::{Breakpoint, BreakpointMap, Breakpoints, ResponsiveValue, resolve_breakpoint};
pub use style::{ConfigurationError, GridItemStyle, GridStyle, StyleMap, StyleValue};
pub use taffy;

pub mod prelude {
    pub use crate::context::{GridCx, GridSystem, SizeObserver};
    pub use crate::responsive::{
        Breakpoint, BreakpointMap, Breakpoints, ResponsiveValue, resolve_breakpoint,
    };
    pub use crate::style::{
        AlignContent, AlignItems, GapValue, GridAutoFlow, GridItemStyle, GridLine, GridPlacement,
        GridStyle, SpacingPreset, StyleMap, StyleValue, TrackTemplate,
    };
    pub use crate::unit::{GridGap, TrackSize, UnitExt};
}
