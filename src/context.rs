//! Resolution context and the size-observation boundary.
//!
//! The core compilers are pure; everything event-driven lives here. An
//! embedder owns a [`GridSystem`], feeds it width observations (viewport
//! or container resizes), and compiles styles against the [`GridCx`] it
//! hands back. Each observation produces a complete, independent context;
//! recomputation is idempotent and cheap, so redundant notifications are
//! harmless.

use crate::responsive::{Breakpoint, Breakpoints};
use crate::style::SpacingPreset;

/// Style compilation was requested before any width observation
/// established an active breakpoint. Programmer error, not retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no active grid context; no width has been observed yet")]
pub struct MissingContextError;

/// Immutable resolution context for one style-compilation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCx {
    /// The active breakpoint resolved from the last observed width.
    pub breakpoint: Breakpoint,
    /// Ambient spacing preset used when no gap resolves.
    pub spacing: SpacingPreset,
}

impl GridCx {
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            spacing: SpacingPreset::default(),
        }
    }

    pub fn with_spacing(mut self, spacing: SpacingPreset) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Ambient provider for a tree of grids.
///
/// Owns the breakpoint threshold table and the default spacing preset,
/// and tracks the breakpoint of the most recent width observation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridSystem {
    breakpoints: Breakpoints,
    spacing: SpacingPreset,
    current: Option<Breakpoint>,
}

impl GridSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingPreset) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn spacing(&self) -> SpacingPreset {
        self.spacing
    }

    /// Feeds a width observation and returns the fresh context.
    pub fn observe(&mut self, width: f64) -> GridCx {
        let bp = self.breakpoints.get_width_bp(width);
        self.current = Some(bp);
        GridCx {
            breakpoint: bp,
            spacing: self.spacing,
        }
    }

    /// The current context.
    ///
    /// Errs until the first width observation arrives; compiling without
    /// an observed breakpoint is a contract violation of the surrounding
    /// component tree.
    pub fn cx(&self) -> Result<GridCx, MissingContextError> {
        let breakpoint = self.current.ok_or(MissingContextError)?;
        Ok(GridCx {
            breakpoint,
            spacing: self.spacing,
        })
    }
}

/// Outward reactivity interface: adapts an external resize source to the
/// breakpoint resolver.
///
/// The handler runs on every notification with the recomputed context.
/// The returned flag reports whether the active breakpoint changed, so
/// embedders can skip restyling when it did not.
pub struct SizeObserver {
    system: GridSystem,
    handler: Box<dyn FnMut(GridCx)>,
}

impl SizeObserver {
    pub fn new(system: GridSystem, handler: impl FnMut(GridCx) + 'static) -> Self {
        Self {
            system,
            handler: Box::new(handler),
        }
    }

    /// Handles a width-changed notification.
    pub fn notify(&mut self, width: f64) -> bool {
        let before = self.system.current;
        let cx = self.system.observe(width);
        (self.handler)(cx);
        before != Some(cx.breakpoint)
    }

    /// Size variant; height does not participate in resolution.
    pub fn notify_size(&mut self, width: f64, _height: f64) -> bool {
        self.notify(width)
    }

    pub fn system(&self) -> &GridSystem {
        &self.system
    }
}
