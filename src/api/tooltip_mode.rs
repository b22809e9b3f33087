use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

pub type PointTooltipFn = Box<dyn Fn(&DataPoint) -> String>;
pub type AggregateTooltipFn = Box<dyn Fn(&[DataPoint]) -> String>;

/// X-axis label override: `(sample point, global index, all data) -> text`.
pub type TickFormatter = Box<dyn Fn(&DataPoint, usize, &[DataPoint]) -> String>;

/// Which tooltip is drawn for the hovered category.
///
/// Per-point and aggregate customizers exclude each other by construction.
#[derive(Default)]
pub enum TooltipMode {
    /// Each hovered point shows its own value.
    #[default]
    Default,
    /// Each hovered point shows caller-rendered content.
    PerPoint(PointTooltipFn),
    /// One tooltip summarizes every series at the hovered category.
    Aggregate(AggregateTooltipFn),
}

impl TooltipMode {
    #[must_use]
    pub fn per_point<F>(render: F) -> Self
    where
        F: Fn(&DataPoint) -> String + 'static,
    {
        Self::PerPoint(Box::new(render))
    }

    #[must_use]
    pub fn aggregate<F>(render: F) -> Self
    where
        F: Fn(&[DataPoint]) -> String + 'static,
    {
        Self::Aggregate(Box::new(render))
    }

    /// Builds a mode from two independently optional customizers.
    ///
    /// Supplying both is a caller contract violation.
    pub fn from_parts(
        per_point: Option<PointTooltipFn>,
        aggregate: Option<AggregateTooltipFn>,
    ) -> ChartResult<Self> {
        match (per_point, aggregate) {
            (Some(_), Some(_)) => Err(ChartError::ConflictingTooltipModes),
            (Some(render), None) => Ok(Self::PerPoint(render)),
            (None, Some(render)) => Ok(Self::Aggregate(render)),
            (None, None) => Ok(Self::Default),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TooltipModeKind {
        match self {
            Self::Default => TooltipModeKind::Default,
            Self::PerPoint(_) => TooltipModeKind::PerPoint,
            Self::Aggregate(_) => TooltipModeKind::Aggregate,
        }
    }

    #[must_use]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }

    /// Content of the per-point tooltip, `None` in aggregate mode.
    #[must_use]
    pub(crate) fn point_content(&self, point: &DataPoint) -> Option<String> {
        match self {
            Self::Default => Some(point.value.to_string()),
            Self::PerPoint(render) => Some(render(point)),
            Self::Aggregate(_) => None,
        }
    }
}

impl fmt::Debug for TooltipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TooltipMode").field(&self.kind()).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipModeKind {
    Default,
    PerPoint,
    Aggregate,
}
