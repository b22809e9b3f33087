use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// Pixel size of one rendered surface.
///
/// Width may be zero while the container has not been measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height > 0.0
    }
}

/// One sample of one series at one category label.
///
/// `key` names the series, `label` the horizontal category. Points sharing a
/// key should share a color; the first color seen for a key wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl DataPoint {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        value: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
            color: color.into(),
        }
    }

    pub fn from_decimal(
        key: impl Into<String>,
        label: impl Into<String>,
        value: Decimal,
        color: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self::new(key, label, decimal_to_f64(value, "value")?, color))
    }

    /// Stand-in passed to tick formatters for labels that carry no sample.
    #[must_use]
    pub(crate) fn placeholder(label: &str) -> Self {
        Self::new("", label, 0.0, "")
    }
}

/// Measured or assumed size of a rendered box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// Identity of one rendered tooltip, used to attach measurements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TooltipKey {
    /// Tooltip attached to one series point at a global category index.
    Point { series: String, index: usize },
    /// Aggregate tooltip summarizing every series at a global category index.
    Aggregate { index: usize },
}

impl TooltipKey {
    #[must_use]
    pub fn point(series: impl Into<String>, index: usize) -> Self {
        Self::Point {
            series: series.into(),
            index,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Point { index, .. } | Self::Aggregate { index } => *index,
        }
    }
}

impl fmt::Display for TooltipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point { series, index } => write!(f, "{series}_{index}"),
            Self::Aggregate { index } => write!(f, "all_{index}"),
        }
    }
}
