use std::borrow::Cow;
use std::fmt;

/// A gap value: a pixel length or a raw CSS length string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum GridGap {
    Px(f64),
    Custom(Cow<'static, str>),
}

impl fmt::Display for GridGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's shortest display keeps integral values bare: 16 -> "16px"
            GridGap::Px(px) => write!(f, "{px}px"),
            GridGap::Custom(raw) => f.write_str(raw),
        }
    }
}

impl From<f64> for GridGap {
    fn from(value: f64) -> Self {
        GridGap::Px(value)
    }
}

impl From<f32> for GridGap {
    fn from(value: f32) -> Self {
        GridGap::Px(value as f64)
    }
}

impl From<i32> for GridGap {
    fn from(value: i32) -> Self {
        GridGap::Px(value as f64)
    }
}

impl From<&'static str> for GridGap {
    fn from(value: &'static str) -> Self {
        GridGap::Custom(Cow::Borrowed(value))
    }
}

impl From<String> for GridGap {
    fn from(value: String) -> Self {
        GridGap::Custom(Cow::Owned(value))
    }
}

/// One track in an explicit template: a fraction of free space or a raw
/// CSS track sizing function.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackSize {
    Fr(f64),
    Custom(Cow<'static, str>),
}

impl fmt::Display for TrackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackSize::Fr(fr) => write!(f, "{fr}fr"),
            TrackSize::Custom(raw) => f.write_str(raw),
        }
    }
}

impl From<f64> for TrackSize {
    fn from(value: f64) -> Self {
        TrackSize::Fr(value)
    }
}

impl From<i32> for TrackSize {
    fn from(value: i32) -> Self {
        TrackSize::Fr(value as f64)
    }
}

impl From<&'static str> for TrackSize {
    fn from(value: &'static str) -> Self {
        TrackSize::Custom(Cow::Borrowed(value))
    }
}

impl From<String> for TrackSize {
    fn from(value: String) -> Self {
        TrackSize::Custom(Cow::Owned(value))
    }
}

pub trait UnitExt {
    fn px(self) -> GridGap;
    fn fr(self) -> TrackSize;
}

impl UnitExt for f64 {
    fn px(self) -> GridGap {
        GridGap::Px(self)
    }

    fn fr(self) -> TrackSize {
        TrackSize::Fr(self)
    }
}

impl UnitExt for i32 {
    fn px(self) -> GridGap {
        GridGap::Px(self as f64)
    }

    fn fr(self) -> TrackSize {
        TrackSize::Fr(self as f64)
    }
}
