//! Breakpoint tiers and the mobile-first responsive value cascade.
//!
//! A [`Breakpoint`] names a width tier. A [`ResponsiveValue`] is either a
//! plain value or a partial per-breakpoint mapping; resolving it walks from
//! the active breakpoint down toward [`Breakpoint::Base`] and takes the
//! first defined entry. A value set at a small breakpoint therefore stays
//! in effect at every larger breakpoint until overridden, and a value set
//! only at larger breakpoints never leaks downward.

use std::fmt;

/// Named width tier, smallest to largest.
///
/// The ordering is total: each tier has a distinct minimum-width threshold
/// in [`Breakpoints`], and `Base` is always present with threshold `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::Display, strum::AsRefStr, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Breakpoint {
    #[strum(serialize = "base")]
    #[cfg_attr(feature = "serde", serde(rename = "base"))]
    Base,
    #[strum(serialize = "sm")]
    #[cfg_attr(feature = "serde", serde(rename = "sm"))]
    Sm,
    #[strum(serialize = "md")]
    #[cfg_attr(feature = "serde", serde(rename = "md"))]
    Md,
    #[strum(serialize = "lg")]
    #[cfg_attr(feature = "serde", serde(rename = "lg"))]
    Lg,
    #[strum(serialize = "xl")]
    #[cfg_attr(feature = "serde", serde(rename = "xl"))]
    Xl,
    #[strum(serialize = "2xl")]
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints in ascending threshold order.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// The cascade sequence for this breakpoint: itself, then every
    /// smaller tier down to `Base`. Larger tiers are never visited.
    pub fn downward(self) -> impl Iterator<Item = Breakpoint> {
        (0..=self as usize).rev().map(|i| Self::ALL[i])
    }
}

/// Minimum-width breakpoint thresholds in pixels.
///
/// The default table is a versioned contract shared with existing callers;
/// changing a threshold changes resolution results everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    base: f64,
    sm: f64,
    md: f64,
    lg: f64,
    xl: f64,
    xxl: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            base: 0.0,
            sm: 640.0,
            md: 768.0,
            lg: 1024.0,
            xl: 1280.0,
            xxl: 1536.0,
        }
    }
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// The minimum width at which `bp` becomes active.
    pub fn threshold(&self, bp: Breakpoint) -> f64 {
        match bp {
            Breakpoint::Base => self.base,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    /// Returns the largest breakpoint whose threshold is at most `width`.
    ///
    /// `Base` has threshold `0`, so every non-negative width matches at
    /// least one tier; a width of `0` (an unmeasured element) is `Base`.
    pub fn get_width_bp(&self, width: f64) -> Breakpoint {
        Breakpoint::ALL
            .into_iter()
            .rev()
            .find(|bp| self.threshold(*bp) <= width)
            .unwrap_or(Breakpoint::Base)
    }
}

/// Resolves a width against the default threshold table.
pub fn resolve_breakpoint(width: f64) -> Breakpoint {
    Breakpoints::default().get_width_bp(width)
}

/// A partial mapping from breakpoint to value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointMap<T> {
    slots: [Option<T>; 6],
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None, None, None],
        }
    }
}

impl<T> BreakpointMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for exactly `bp`, replacing any previous entry.
    pub fn set(mut self, bp: Breakpoint, value: impl Into<T>) -> Self {
        self.slots[bp as usize] = Some(value.into());
        self
    }

    /// The entry defined for exactly `bp`, without cascading.
    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        self.slots[bp as usize].as_ref()
    }

    /// Resolves for `bp` by cascading down toward `Base`.
    ///
    /// Returns `None` when every defined entry sits above `bp`; the
    /// cascade never searches upward.
    pub fn resolve(&self, bp: Breakpoint) -> Option<&T> {
        bp.downward().find_map(|b| self.slots[b as usize].as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Breakpoints with a defined entry, ascending.
    pub fn keys(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter(|bp| self.slots[*bp as usize].is_some())
    }

    pub fn base(self, value: impl Into<T>) -> Self {
        self.set(Breakpoint::Base, value)
    }

    pub fn sm(self, value: impl Into<T>) -> Self {
        self.set(Breakpoint::Sm, value)
    }

    pub fn md(self, value: impl Into<T>) -> Self {
        self.set(Breakpoint::Md, value)
    }

    pub fn lg(self, value: impl Into<T>) -> Self {
        self.set(Breakpoint::Lg, value)
    }

    pub fn xl(self, value: impl Into<T>) -> Self {
        self.set(Breakpoint::Xl, value)
    }

    pub fn xxl(self, value: impl Into<T>) -> Self {
        self.set(Breakpoint::Xxl, value)
    }
}

/// A value that is either uniform across breakpoints or breakpoint-keyed.
///
/// The scalar form resolves to itself at every breakpoint. The mapped form
/// resolves with the mobile-first cascade of [`BreakpointMap::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsiveValue<T> {
    Scalar(T),
    ByBreakpoint(BreakpointMap<T>),
}

impl<T> ResponsiveValue<T> {
    /// The effective value at `bp`, if any.
    pub fn resolve(&self, bp: Breakpoint) -> Option<&T> {
        match self {
            ResponsiveValue::Scalar(value) => Some(value),
            ResponsiveValue::ByBreakpoint(map) => map.resolve(bp),
        }
    }

    /// Adds an override at exactly `bp`, converting a scalar into a map
    /// with its previous value anchored at `Base`.
    pub fn at(self, bp: Breakpoint, value: impl Into<T>) -> Self {
        let map = match self {
            ResponsiveValue::Scalar(current) => BreakpointMap::new().base(current),
            ResponsiveValue::ByBreakpoint(map) => map,
        };
        ResponsiveValue::ByBreakpoint(map.set(bp, value))
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, ResponsiveValue::ByBreakpoint(_))
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Scalar(value)
    }
}

impl<T> From<BreakpointMap<T>> for ResponsiveValue<T> {
    fn from(map: BreakpointMap<T>) -> Self {
        ResponsiveValue::ByBreakpoint(map)
    }
}

impl<T: fmt::Display> fmt::Display for ResponsiveValue<T> {
    /// Overlay form: scalars print their value, mappings print `responsive`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponsiveValue::Scalar(value) => value.fmt(f),
            ResponsiveValue::ByBreakpoint(_) => f.write_str("responsive"),
        }
    }
}

/// Conversions into `ResponsiveValue<T>` through a scalar's own `Into<T>`.
///
/// A blanket impl would collide with `From<T> for ResponsiveValue<T>`, so
/// value modules enumerate their conversions explicitly.
macro_rules! responsive_from {
    ($($from:ty => $to:ty),+ $(,)?) => {
        $(
            impl From<$from> for $crate::responsive::ResponsiveValue<$to> {
                fn from(value: $from) -> Self {
                    $crate::responsive::ResponsiveValue::Scalar(value.into())
                }
            }
        )+
    };
}

pub(crate) use responsive_from;

#[cfg(test)]
mod tests {
    use super::{Breakpoint, BreakpointMap, Breakpoints, ResponsiveValue, resolve_breakpoint};

    #[test]
    fn width_resolution() {
        assert_eq!(resolve_breakpoint(0.0), Breakpoint::Base);
        assert_eq!(resolve_breakpoint(639.0), Breakpoint::Base);
        assert_eq!(resolve_breakpoint(640.0), Breakpoint::Sm);
        assert_eq!(resolve_breakpoint(1023.0), Breakpoint::Md);
        assert_eq!(resolve_breakpoint(1024.0), Breakpoint::Lg);
        assert_eq!(resolve_breakpoint(2560.0), Breakpoint::Xxl);
    }

    #[test]
    fn width_resolution_is_monotonic() {
        let bps = Breakpoints::default();
        let mut last = bps.get_width_bp(0.0);
        for w in 0..2000 {
            let bp = bps.get_width_bp(w as f64);
            assert!(bps.threshold(bp) >= bps.threshold(last));
            assert!(bps.threshold(bp) <= w as f64);
            last = bp;
        }
    }

    #[test]
    fn downward_sequence() {
        let seq: Vec<_> = Breakpoint::Md.downward().collect();
        assert_eq!(seq, vec![Breakpoint::Md, Breakpoint::Sm, Breakpoint::Base]);
    }

    #[test]
    fn scalar_resolves_everywhere() {
        let value = ResponsiveValue::from(7);
        assert_eq!(value.resolve(Breakpoint::Base), Some(&7));
        assert_eq!(value.resolve(Breakpoint::Xxl), Some(&7));
    }

    #[test]
    fn cascade_falls_back_to_smaller_tiers() {
        let value: ResponsiveValue<i32> = BreakpointMap::new().base(1).lg(3).into();
        assert_eq!(value.resolve(Breakpoint::Base), Some(&1));
        assert_eq!(value.resolve(Breakpoint::Md), Some(&1));
        assert_eq!(value.resolve(Breakpoint::Lg), Some(&3));
        assert_eq!(value.resolve(Breakpoint::Xl), Some(&3));
    }

    #[test]
    fn cascade_never_searches_upward() {
        let value: ResponsiveValue<i32> = BreakpointMap::new().sm(5).into();
        assert_eq!(value.resolve(Breakpoint::Base), None);
        assert_eq!(value.resolve(Breakpoint::Sm), Some(&5));
        assert_eq!(value.resolve(Breakpoint::Xxl), Some(&5));
    }

    #[test]
    fn at_promotes_scalar_to_base_entry() {
        let value = ResponsiveValue::from(1).at(Breakpoint::Md, 4);
        assert_eq!(value.resolve(Breakpoint::Base), Some(&1));
        assert_eq!(value.resolve(Breakpoint::Sm), Some(&1));
        assert_eq!(value.resolve(Breakpoint::Md), Some(&4));
        assert_eq!(value.resolve(Breakpoint::Xxl), Some(&4));
    }

    #[test]
    fn breakpoint_names_round_trip() {
        assert_eq!(Breakpoint::Xxl.to_string(), "2xl");
        assert_eq!("2xl".parse::<Breakpoint>(), Ok(Breakpoint::Xxl));
        assert_eq!(Breakpoint::Base.as_ref(), "base");
        assert!("huge".parse::<Breakpoint>().is_err());
    }
}
