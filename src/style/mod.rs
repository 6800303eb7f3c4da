//! Grid configuration builders and the style compilers.
//!
//! [`GridStyle`] describes a grid container and [`GridItemStyle`] a child
//! placed in it. Both are plain data: every field is optional, and any
//! field can hold a breakpoint-keyed [`ResponsiveValue`] instead of a
//! scalar. Compiling against a [`GridCx`] resolves each field
//! independently for the active breakpoint and assembles a flat
//! [`StyleMap`] of CSS properties for the rendering layer to apply.
//!
//! Precedence inside one compiled map is fixed: span shorthand first,
//! explicit placement over it, and the raw `style` override map over
//! everything.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::context::GridCx;
use crate::responsive::{Breakpoint, BreakpointMap, ResponsiveValue};

pub mod unit;
mod values;

#[cfg(test)]
mod tests;

pub use unit::{GridGap, TrackSize, UnitExt};
pub use values::{
    AlignContent, AlignItems, ConfigurationError, CssValue, DEFAULT_MAX_ITEM_WIDTH,
    DEFAULT_MIN_ITEM_WIDTH, GapValue, GridAutoFlow, GridLine, GridPlacement, JustifyContent,
    JustifyItems, SpacingPreset, TrackTemplate,
};

/// A single property value in a compiled style map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StyleValue {
    Str(Cow<'static, str>),
    Num(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Num(n) => n.fmt(f),
        }
    }
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        StyleValue::Str(Cow::Borrowed(value))
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for StyleValue {
    fn from(value: Cow<'static, str>) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Num(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Num(value as f64)
    }
}

/// A flat mapping from CSS property name to value.
///
/// Insertion order is preserved so the map serializes the way it was
/// built; later insertions for the same key replace the earlier value in
/// place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleMap {
    props: IndexMap<Cow<'static, str>, StyleValue, FxBuildHasher>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) {
        self.props.insert(name.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.props.get(name)
    }

    /// Applies `over` on top of `self`; its entries win on conflict.
    pub fn apply(mut self, over: StyleMap) -> Self {
        for (name, value) in over.props {
            self.props.insert(name, value);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(name, value)| (name.as_ref(), value))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// Folds a responsive override into `slot` at exactly `bp`.
///
/// A scalar already present in the slot is anchored at `Base` first, so
/// it keeps applying below `bp`.
fn fold_at<T: Clone>(
    slot: &mut Option<ResponsiveValue<T>>,
    over: Option<ResponsiveValue<T>>,
    bp: Breakpoint,
) {
    let Some(over) = over else { return };
    let Some(value) = over.resolve(bp).cloned() else {
        return;
    };
    let current = slot
        .take()
        .unwrap_or_else(|| ResponsiveValue::ByBreakpoint(BreakpointMap::new()));
    *slot = Some(current.at(bp, value));
}

/// Declarative configuration for a grid container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridStyle {
    pub columns: Option<ResponsiveValue<TrackTemplate>>,
    pub rows: Option<ResponsiveValue<TrackTemplate>>,
    /// `grid-template-areas` source text.
    pub areas: Option<ResponsiveValue<Cow<'static, str>>>,
    /// Both-axis gap: a spacing preset or a responsive gap value.
    pub gap: Option<GapValue>,
    pub column_gap: Option<ResponsiveValue<GridGap>>,
    pub row_gap: Option<ResponsiveValue<GridGap>>,
    pub auto_flow: Option<ResponsiveValue<GridAutoFlow>>,
    pub auto_rows: Option<ResponsiveValue<Cow<'static, str>>>,
    pub auto_columns: Option<ResponsiveValue<Cow<'static, str>>>,
    pub justify_items: Option<ResponsiveValue<AlignItems>>,
    pub align_items: Option<ResponsiveValue<AlignItems>>,
    pub justify_content: Option<ResponsiveValue<AlignContent>>,
    pub align_content: Option<ResponsiveValue<AlignContent>>,
    /// `minmax()` lower bound for auto-fit/auto-fill templates.
    pub min_item_width: Option<ResponsiveValue<Cow<'static, str>>>,
    /// `minmax()` upper bound for auto-fit/auto-fill templates.
    pub max_item_width: Option<ResponsiveValue<Cow<'static, str>>>,
    pub aspect_ratio: Option<ResponsiveValue<Cow<'static, str>>>,
    /// Raw overrides merged last, over every computed property.
    pub style: StyleMap,
}

impl GridStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: impl Into<ResponsiveValue<TrackTemplate>>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn rows(mut self, rows: impl Into<ResponsiveValue<TrackTemplate>>) -> Self {
        self.rows = Some(rows.into());
        self
    }

    pub fn areas(mut self, areas: impl Into<ResponsiveValue<Cow<'static, str>>>) -> Self {
        self.areas = Some(areas.into());
        self
    }

    /// Sets the gap for both axes.
    pub fn gap(mut self, gap: impl Into<GapValue>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn column_gap(mut self, gap: impl Into<ResponsiveValue<GridGap>>) -> Self {
        self.column_gap = Some(gap.into());
        self
    }

    pub fn row_gap(mut self, gap: impl Into<ResponsiveValue<GridGap>>) -> Self {
        self.row_gap = Some(gap.into());
        self
    }

    pub fn auto_flow(mut self, flow: impl Into<ResponsiveValue<GridAutoFlow>>) -> Self {
        self.auto_flow = Some(flow.into());
        self
    }

    pub fn auto_rows(mut self, rows: impl Into<ResponsiveValue<Cow<'static, str>>>) -> Self {
        self.auto_rows = Some(rows.into());
        self
    }

    pub fn auto_columns(mut self, columns: impl Into<ResponsiveValue<Cow<'static, str>>>) -> Self {
        self.auto_columns = Some(columns.into());
        self
    }

    pub fn justify_items(mut self, align: impl Into<ResponsiveValue<AlignItems>>) -> Self {
        self.justify_items = Some(align.into());
        self
    }

    pub fn align_items(mut self, align: impl Into<ResponsiveValue<AlignItems>>) -> Self {
        self.align_items = Some(align.into());
        self
    }

    pub fn justify_content(mut self, align: impl Into<ResponsiveValue<AlignContent>>) -> Self {
        self.justify_content = Some(align.into());
        self
    }

    pub fn align_content(mut self, align: impl Into<ResponsiveValue<AlignContent>>) -> Self {
        self.align_content = Some(align.into());
        self
    }

    pub fn min_item_width(mut self, width: impl Into<ResponsiveValue<Cow<'static, str>>>) -> Self {
        self.min_item_width = Some(width.into());
        self
    }

    pub fn max_item_width(mut self, width: impl Into<ResponsiveValue<Cow<'static, str>>>) -> Self {
        self.max_item_width = Some(width.into());
        self
    }

    pub fn aspect_ratio(mut self, ratio: impl Into<ResponsiveValue<Cow<'static, str>>>) -> Self {
        self.aspect_ratio = Some(ratio.into());
        self
    }

    /// Adds a raw property override; raw entries always win over computed
    /// properties with the same name.
    pub fn raw(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) -> Self {
        self.style.insert(name, value);
        self
    }

    /// Overrides fields at exactly `bp`, keeping smaller tiers intact.
    ///
    /// Scalar settings made inside the closure land in the per-field
    /// breakpoint maps:
    ///
    /// ```
    /// use grid_style::prelude::*;
    ///
    /// let style = GridStyle::new()
    ///     .columns(1)
    ///     .responsive(Breakpoint::Md, |s| s.columns(3));
    /// ```
    pub fn responsive(mut self, bp: Breakpoint, f: impl FnOnce(GridStyle) -> GridStyle) -> Self {
        let over = f(GridStyle::new());
        fold_at(&mut self.columns, over.columns, bp);
        fold_at(&mut self.rows, over.rows, bp);
        fold_at(&mut self.areas, over.areas, bp);
        fold_at(&mut self.column_gap, over.column_gap, bp);
        fold_at(&mut self.row_gap, over.row_gap, bp);
        fold_at(&mut self.auto_flow, over.auto_flow, bp);
        fold_at(&mut self.auto_rows, over.auto_rows, bp);
        fold_at(&mut self.auto_columns, over.auto_columns, bp);
        fold_at(&mut self.justify_items, over.justify_items, bp);
        fold_at(&mut self.align_items, over.align_items, bp);
        fold_at(&mut self.justify_content, over.justify_content, bp);
        fold_at(&mut self.align_content, over.align_content, bp);
        fold_at(&mut self.min_item_width, over.min_item_width, bp);
        fold_at(&mut self.max_item_width, over.max_item_width, bp);
        fold_at(&mut self.aspect_ratio, over.aspect_ratio, bp);
        if let Some(gap) = over.gap {
            let value = match gap {
                GapValue::Preset(preset) => Some(preset.gap()),
                GapValue::Value(value) => value.resolve(bp).cloned(),
            };
            if let Some(value) = value {
                let current = match self.gap.take() {
                    Some(GapValue::Value(current)) => current,
                    Some(GapValue::Preset(preset)) => ResponsiveValue::Scalar(preset.gap()),
                    None => ResponsiveValue::ByBreakpoint(BreakpointMap::new()),
                };
                self.gap = Some(GapValue::Value(current.at(bp, value)));
            }
        }
        self.style = self.style.apply(over.style);
        self
    }

    /// Compiles the container style for the context's active breakpoint.
    ///
    /// `display: grid` and the resolved gap are always emitted; every
    /// other property appears only when it resolves to a value.
    pub fn compute(&self, cx: &GridCx) -> StyleMap {
        let bp = cx.breakpoint;
        let mut style = StyleMap::new();

        let columns = self.columns.as_ref().and_then(|v| v.resolve(bp));
        let rows = self.rows.as_ref().and_then(|v| v.resolve(bp));
        let areas = self.areas.as_ref().and_then(|v| v.resolve(bp));

        let gap = match &self.gap {
            Some(gap) => gap.resolve(bp, cx.spacing),
            None => cx.spacing.gap(),
        };

        style.insert("display", "grid");
        style.insert("gap", gap.to_css());

        if let Some(columns) = columns {
            style.insert("grid-template-columns", columns.to_css());
        }
        if let Some(rows) = rows {
            style.insert("grid-template-rows", rows.to_css());
        }
        if let Some(areas) = areas {
            style.insert("grid-template-areas", areas.clone());
        }

        // Auto-sizing templates re-emit the column template with the
        // configured minmax() bounds, replacing the generic transform.
        if let Some(token) = columns.and_then(TrackTemplate::auto_token) {
            let min = self
                .min_item_width
                .as_ref()
                .and_then(|v| v.resolve(bp))
                .map_or(DEFAULT_MIN_ITEM_WIDTH, |v| v.as_ref());
            let max = self
                .max_item_width
                .as_ref()
                .and_then(|v| v.resolve(bp))
                .map_or(DEFAULT_MAX_ITEM_WIDTH, |v| v.as_ref());
            style.insert(
                "grid-template-columns",
                format!("repeat({token}, minmax({min}, {max}))"),
            );
        }

        if let Some(gap) = self.column_gap.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("column-gap", gap.to_css());
        }
        if let Some(gap) = self.row_gap.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("row-gap", gap.to_css());
        }
        if let Some(flow) = self.auto_flow.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-auto-flow", flow.to_css());
        }
        if let Some(rows) = self.auto_rows.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-auto-rows", rows.clone());
        }
        if let Some(columns) = self.auto_columns.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-auto-columns", columns.clone());
        }
        if let Some(align) = self.justify_items.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("justify-items", align.to_css());
        }
        if let Some(align) = self.align_items.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("align-items", align.to_css());
        }
        if let Some(align) = self.justify_content.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("justify-content", align.to_css());
        }
        if let Some(align) = self.align_content.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("align-content", align.to_css());
        }
        if let Some(ratio) = self.aspect_ratio.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("aspect-ratio", ratio.clone());
        }

        style.apply(self.style.clone())
    }
}

/// Declarative configuration for one grid item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridItemStyle {
    /// Full column placement; overwrites any `span` shorthand.
    pub column: Option<ResponsiveValue<GridPlacement>>,
    /// Full row placement; overwrites any `row_span` shorthand.
    pub row: Option<ResponsiveValue<GridPlacement>>,
    pub column_start: Option<ResponsiveValue<GridPlacement>>,
    pub column_end: Option<ResponsiveValue<GridPlacement>>,
    pub row_start: Option<ResponsiveValue<GridPlacement>>,
    pub row_end: Option<ResponsiveValue<GridPlacement>>,
    /// Named template area to occupy.
    pub area: Option<ResponsiveValue<Cow<'static, str>>>,
    pub order: Option<ResponsiveValue<i32>>,
    pub justify_self: Option<ResponsiveValue<AlignItems>>,
    pub align_self: Option<ResponsiveValue<AlignItems>>,
    /// Column span shorthand, expanded to `span N`.
    pub span: Option<ResponsiveValue<u16>>,
    /// Row span shorthand, expanded to `span N`.
    pub row_span: Option<ResponsiveValue<u16>>,
    pub aspect_ratio: Option<ResponsiveValue<Cow<'static, str>>>,
    /// Raw overrides merged last, over every computed property.
    pub style: StyleMap,
}

impl GridItemStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, placement: impl Into<ResponsiveValue<GridPlacement>>) -> Self {
        self.column = Some(placement.into());
        self
    }

    pub fn row(mut self, placement: impl Into<ResponsiveValue<GridPlacement>>) -> Self {
        self.row = Some(placement.into());
        self
    }

    pub fn column_start(mut self, placement: impl Into<ResponsiveValue<GridPlacement>>) -> Self {
        self.column_start = Some(placement.into());
        self
    }

    pub fn column_end(mut self, placement: impl Into<ResponsiveValue<GridPlacement>>) -> Self {
        self.column_end = Some(placement.into());
        self
    }

    pub fn row_start(mut self, placement: impl Into<ResponsiveValue<GridPlacement>>) -> Self {
        self.row_start = Some(placement.into());
        self
    }

    pub fn row_end(mut self, placement: impl Into<ResponsiveValue<GridPlacement>>) -> Self {
        self.row_end = Some(placement.into());
        self
    }

    pub fn area(mut self, area: impl Into<ResponsiveValue<Cow<'static, str>>>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn order(mut self, order: impl Into<ResponsiveValue<i32>>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn justify_self(mut self, align: impl Into<ResponsiveValue<AlignItems>>) -> Self {
        self.justify_self = Some(align.into());
        self
    }

    pub fn align_self(mut self, align: impl Into<ResponsiveValue<AlignItems>>) -> Self {
        self.align_self = Some(align.into());
        self
    }

    /// Spans `n` columns from the auto-placed position.
    pub fn span(mut self, span: impl Into<ResponsiveValue<u16>>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Spans `n` rows from the auto-placed position.
    pub fn row_span(mut self, span: impl Into<ResponsiveValue<u16>>) -> Self {
        self.row_span = Some(span.into());
        self
    }

    pub fn aspect_ratio(mut self, ratio: impl Into<ResponsiveValue<Cow<'static, str>>>) -> Self {
        self.aspect_ratio = Some(ratio.into());
        self
    }

    pub fn raw(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) -> Self {
        self.style.insert(name, value);
        self
    }

    /// Overrides fields at exactly `bp`, keeping smaller tiers intact.
    pub fn responsive(mut self, bp: Breakpoint, f: impl FnOnce(GridItemStyle) -> GridItemStyle) -> Self {
        let over = f(GridItemStyle::new());
        fold_at(&mut self.column, over.column, bp);
        fold_at(&mut self.row, over.row, bp);
        fold_at(&mut self.column_start, over.column_start, bp);
        fold_at(&mut self.column_end, over.column_end, bp);
        fold_at(&mut self.row_start, over.row_start, bp);
        fold_at(&mut self.row_end, over.row_end, bp);
        fold_at(&mut self.area, over.area, bp);
        fold_at(&mut self.order, over.order, bp);
        fold_at(&mut self.justify_self, over.justify_self, bp);
        fold_at(&mut self.align_self, over.align_self, bp);
        fold_at(&mut self.span, over.span, bp);
        fold_at(&mut self.row_span, over.row_span, bp);
        fold_at(&mut self.aspect_ratio, over.aspect_ratio, bp);
        self.style = self.style.apply(over.style);
        self
    }

    /// Compiles the item style for the context's active breakpoint.
    ///
    /// Span shorthand is expanded first; explicit `column`/`row`
    /// placement overwrites it on its axis.
    pub fn compute(&self, cx: &GridCx) -> StyleMap {
        let bp = cx.breakpoint;
        let mut style = StyleMap::new();

        if let Some(span) = self.span.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-column", format!("span {span}"));
        }
        if let Some(span) = self.row_span.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-row", format!("span {span}"));
        }

        if let Some(placement) = self.column.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-column", placement.to_css());
        }
        if let Some(placement) = self.row.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-row", placement.to_css());
        }

        if let Some(placement) = self.column_start.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-column-start", placement.to_css());
        }
        if let Some(placement) = self.column_end.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-column-end", placement.to_css());
        }
        if let Some(placement) = self.row_start.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-row-start", placement.to_css());
        }
        if let Some(placement) = self.row_end.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-row-end", placement.to_css());
        }
        if let Some(area) = self.area.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("grid-area", area.clone());
        }
        if let Some(order) = self.order.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("order", *order);
        }
        if let Some(align) = self.justify_self.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("justify-self", align.to_css());
        }
        if let Some(align) = self.align_self.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("align-self", align.to_css());
        }
        if let Some(ratio) = self.aspect_ratio.as_ref().and_then(|v| v.resolve(bp)) {
            style.insert("aspect-ratio", ratio.clone());
        }

        style.apply(self.style.clone())
    }
}
