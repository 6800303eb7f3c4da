//! Domain value types and their CSS renditions.
//!
//! Everything here is an input-side vocabulary type: structured stand-ins
//! for the shorthand the configuration surface accepts (track counts,
//! `auto-fit` sentinels, placement expressions, spacing presets). Each
//! renders to its final CSS string through [`CssValue`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

pub use taffy::GridAutoFlow;
pub use taffy::style::{AlignContent, AlignItems, JustifyContent, JustifyItems};

use crate::responsive::{Breakpoint, BreakpointMap, ResponsiveValue, responsive_from};
use crate::style::unit::{GridGap, TrackSize};

/// Default `minmax()` lower bound for `auto-fit`/`auto-fill` templates.
pub const DEFAULT_MIN_ITEM_WIDTH: &str = "250px";
/// Default `minmax()` upper bound for `auto-fit`/`auto-fill` templates.
pub const DEFAULT_MAX_ITEM_WIDTH: &str = "1fr";

/// Malformed or unrecognized configuration input.
///
/// Raised while parsing configuration, before style compilation begins;
/// the compilers themselves are total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unrecognized spacing preset `{0}`")]
    UnknownSpacingPreset(String),
    #[error("malformed grid placement `{0}`")]
    MalformedPlacement(String),
}

/// Renders a value to its final CSS form.
pub trait CssValue {
    fn to_css(&self) -> Cow<'static, str>;
}

/// Named shorthand for a fixed gap size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(strum::Display, strum::AsRefStr, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpacingPreset {
    None,
    Tight,
    #[default]
    Standard,
    Relaxed,
    Wide,
}

impl SpacingPreset {
    /// The fixed pixel size of this preset.
    pub fn px(self) -> f64 {
        match self {
            SpacingPreset::None => 0.0,
            SpacingPreset::Tight => 8.0,
            SpacingPreset::Standard => 16.0,
            SpacingPreset::Relaxed => 24.0,
            SpacingPreset::Wide => 32.0,
        }
    }

    pub fn gap(self) -> GridGap {
        GridGap::Px(self.px())
    }

    /// Parses a preset token, rejecting anything outside the fixed set.
    pub fn parse(token: &str) -> Result<Self, ConfigurationError> {
        token
            .parse()
            .map_err(|_| ConfigurationError::UnknownSpacingPreset(token.to_string()))
    }
}

impl CssValue for SpacingPreset {
    fn to_css(&self) -> Cow<'static, str> {
        self.gap().to_css()
    }
}

impl CssValue for GridGap {
    fn to_css(&self) -> Cow<'static, str> {
        match self {
            GridGap::Custom(raw) => raw.clone(),
            px => Cow::Owned(px.to_string()),
        }
    }
}

/// A column or row template.
///
/// Covers the shorthand the configuration accepts: a plain track count,
/// the `auto-fit`/`auto-fill` sentinels, an explicit track list, or a raw
/// template string passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackTemplate {
    Count(u16),
    AutoFit,
    AutoFill,
    Tracks(SmallVec<[TrackSize; 4]>),
    Custom(Cow<'static, str>),
}

impl TrackTemplate {
    pub fn tracks<I>(tracks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TrackSize>,
    {
        TrackTemplate::Tracks(tracks.into_iter().map(Into::into).collect())
    }

    /// Whether this template is one of the auto-sizing sentinels.
    pub fn is_auto_sizing(&self) -> bool {
        matches!(self, TrackTemplate::AutoFit | TrackTemplate::AutoFill)
    }

    /// The repeat token of an auto-sizing sentinel.
    pub(crate) fn auto_token(&self) -> Option<&'static str> {
        match self {
            TrackTemplate::AutoFit => Some("auto-fit"),
            TrackTemplate::AutoFill => Some("auto-fill"),
            _ => None,
        }
    }
}

impl CssValue for TrackTemplate {
    fn to_css(&self) -> Cow<'static, str> {
        match self {
            TrackTemplate::Count(n) => Cow::Owned(format!("repeat({n}, 1fr)")),
            TrackTemplate::AutoFit | TrackTemplate::AutoFill => {
                let token = self.auto_token().unwrap_or("auto-fit");
                Cow::Owned(format!(
                    "repeat({token}, minmax({DEFAULT_MIN_ITEM_WIDTH}, {DEFAULT_MAX_ITEM_WIDTH}))"
                ))
            }
            TrackTemplate::Tracks(tracks) => {
                let css: Vec<String> = tracks.iter().map(ToString::to_string).collect();
                Cow::Owned(css.join(" "))
            }
            TrackTemplate::Custom(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for TrackTemplate {
    /// Overlay form: the input shape, not the compiled template.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackTemplate::Count(n) => write!(f, "{n}"),
            TrackTemplate::AutoFit => f.write_str("auto-fit"),
            TrackTemplate::AutoFill => f.write_str("auto-fill"),
            TrackTemplate::Tracks(_) | TrackTemplate::Custom(_) => f.write_str(&self.to_css()),
        }
    }
}

impl From<u16> for TrackTemplate {
    fn from(count: u16) -> Self {
        TrackTemplate::Count(count)
    }
}

impl From<i32> for TrackTemplate {
    fn from(count: i32) -> Self {
        TrackTemplate::Count(count.max(0) as u16)
    }
}

impl From<&'static str> for TrackTemplate {
    fn from(value: &'static str) -> Self {
        match value {
            "auto-fit" => TrackTemplate::AutoFit,
            "auto-fill" => TrackTemplate::AutoFill,
            raw => TrackTemplate::Custom(Cow::Borrowed(raw)),
        }
    }
}

impl From<String> for TrackTemplate {
    fn from(value: String) -> Self {
        match value.as_str() {
            "auto-fit" => TrackTemplate::AutoFit,
            "auto-fill" => TrackTemplate::AutoFill,
            _ => TrackTemplate::Custom(Cow::Owned(value)),
        }
    }
}

impl From<Vec<TrackSize>> for TrackTemplate {
    fn from(tracks: Vec<TrackSize>) -> Self {
        TrackTemplate::Tracks(SmallVec::from_vec(tracks))
    }
}

/// One side of a placement expression on a single grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLine {
    Auto,
    /// A 1-based (or negative, counted from the end) grid line.
    Line(i16),
    Span(u16),
}

impl fmt::Display for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridLine::Auto => f.write_str("auto"),
            GridLine::Line(line) => write!(f, "{line}"),
            GridLine::Span(span) => write!(f, "span {span}"),
        }
    }
}

impl From<i32> for GridLine {
    fn from(line: i32) -> Self {
        GridLine::Line(line as i16)
    }
}

impl FromStr for GridLine {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || ConfigurationError::MalformedPlacement(s.to_string());
        if s == "auto" {
            return Ok(GridLine::Auto);
        }
        if let Some(count) = s.strip_prefix("span ") {
            let span: u16 = count.trim().parse().map_err(|_| malformed())?;
            if span == 0 {
                return Err(malformed());
            }
            return Ok(GridLine::Span(span));
        }
        // Grid lines are 1-based; line 0 does not exist.
        let line: i16 = s.parse().map_err(|_| malformed())?;
        if line == 0 {
            return Err(malformed());
        }
        Ok(GridLine::Line(line))
    }
}

/// Full placement for one axis: a single line reference or a
/// `start / end` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPlacement {
    Single(GridLine),
    Pair(GridLine, GridLine),
}

impl GridPlacement {
    pub fn auto() -> Self {
        GridPlacement::Single(GridLine::Auto)
    }

    pub fn line(line: i16) -> Self {
        GridPlacement::Single(GridLine::Line(line))
    }

    pub fn span(span: u16) -> Self {
        GridPlacement::Single(GridLine::Span(span))
    }

    pub fn between(start: impl Into<GridLine>, end: impl Into<GridLine>) -> Self {
        GridPlacement::Pair(start.into(), end.into())
    }
}

impl fmt::Display for GridPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridPlacement::Single(line) => line.fmt(f),
            GridPlacement::Pair(start, end) => write!(f, "{start} / {end}"),
        }
    }
}

impl CssValue for GridPlacement {
    fn to_css(&self) -> Cow<'static, str> {
        match self {
            GridPlacement::Single(GridLine::Auto) => Cow::Borrowed("auto"),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl From<i32> for GridPlacement {
    fn from(line: i32) -> Self {
        GridPlacement::Single(line.into())
    }
}

impl From<GridLine> for GridPlacement {
    fn from(line: GridLine) -> Self {
        GridPlacement::Single(line)
    }
}

impl FromStr for GridPlacement {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            None => Ok(GridPlacement::Single(s.parse()?)),
            Some((_, end)) if end.contains('/') => {
                Err(ConfigurationError::MalformedPlacement(s.to_string()))
            }
            Some((start, end)) => Ok(GridPlacement::Pair(start.parse()?, end.parse()?)),
        }
    }
}

/// The container `gap` input: a spacing preset or a responsive gap value.
///
/// Preset inputs short-circuit the cascade entirely; responsive inputs
/// resolve for the active breakpoint and fall back to the ambient default
/// preset when nothing is defined at or below it.
#[derive(Debug, Clone, PartialEq)]
pub enum GapValue {
    Preset(SpacingPreset),
    Value(ResponsiveValue<GridGap>),
}

impl GapValue {
    pub fn resolve(&self, bp: Breakpoint, default_spacing: SpacingPreset) -> GridGap {
        match self {
            GapValue::Preset(preset) => preset.gap(),
            GapValue::Value(value) => value
                .resolve(bp)
                .cloned()
                .unwrap_or_else(|| default_spacing.gap()),
        }
    }
}

impl From<SpacingPreset> for GapValue {
    fn from(preset: SpacingPreset) -> Self {
        GapValue::Preset(preset)
    }
}

impl From<GridGap> for GapValue {
    fn from(gap: GridGap) -> Self {
        GapValue::Value(ResponsiveValue::Scalar(gap))
    }
}

impl From<f64> for GapValue {
    fn from(px: f64) -> Self {
        GridGap::Px(px).into()
    }
}

impl From<i32> for GapValue {
    fn from(px: i32) -> Self {
        GridGap::Px(px as f64).into()
    }
}

impl From<&'static str> for GapValue {
    /// Strings matching a preset token become that preset; anything else
    /// is a raw gap length.
    fn from(value: &'static str) -> Self {
        match SpacingPreset::parse(value) {
            Ok(preset) => GapValue::Preset(preset),
            Err(_) => GridGap::from(value).into(),
        }
    }
}

impl From<String> for GapValue {
    fn from(value: String) -> Self {
        match SpacingPreset::parse(&value) {
            Ok(preset) => GapValue::Preset(preset),
            Err(_) => GridGap::from(value).into(),
        }
    }
}

impl From<ResponsiveValue<GridGap>> for GapValue {
    fn from(value: ResponsiveValue<GridGap>) -> Self {
        GapValue::Value(value)
    }
}

impl From<BreakpointMap<GridGap>> for GapValue {
    fn from(map: BreakpointMap<GridGap>) -> Self {
        GapValue::Value(map.into())
    }
}

impl CssValue for AlignItems {
    fn to_css(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            AlignItems::Start => "start",
            AlignItems::End => "end",
            AlignItems::FlexStart => "flex-start",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Center => "center",
            AlignItems::Baseline => "baseline",
            AlignItems::Stretch => "stretch",
        })
    }
}

impl CssValue for AlignContent {
    fn to_css(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            AlignContent::Start => "start",
            AlignContent::End => "end",
            AlignContent::FlexStart => "flex-start",
            AlignContent::FlexEnd => "flex-end",
            AlignContent::Center => "center",
            AlignContent::Stretch => "stretch",
            AlignContent::SpaceBetween => "space-between",
            AlignContent::SpaceEvenly => "space-evenly",
            AlignContent::SpaceAround => "space-around",
        })
    }
}

impl CssValue for GridAutoFlow {
    fn to_css(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            GridAutoFlow::Row => "row",
            GridAutoFlow::Column => "column",
            GridAutoFlow::RowDense => "row dense",
            GridAutoFlow::ColumnDense => "column dense",
        })
    }
}

impl CssValue for Cow<'static, str> {
    fn to_css(&self) -> Cow<'static, str> {
        self.clone()
    }
}

responsive_from! {
    u16 => TrackTemplate,
    i32 => TrackTemplate,
    &'static str => TrackTemplate,
    String => TrackTemplate,
    Vec<TrackSize> => TrackTemplate,
    f64 => GridGap,
    i32 => GridGap,
    &'static str => GridGap,
    String => GridGap,
    i32 => GridPlacement,
    GridLine => GridPlacement,
    &'static str => Cow<'static, str>,
    String => Cow<'static, str>,
}
