use serde::{Deserialize, Serialize};

use crate::core::VisibleWindow;
use crate::interaction::{HoverTarget, ScrollState};
use crate::render::Renderer;

use super::{LineChartConfig, LineChartEngine, TooltipModeKind};

/// Serializable view of engine state for diagnostics and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub config: LineChartConfig,
    pub point_count: usize,
    pub label_count: usize,
    pub series_keys: Vec<String>,
    pub container_width: f64,
    pub window: VisibleWindow,
    pub scroll: ScrollState,
    pub hovered: Option<HoverTarget>,
    pub tooltip_mode: TooltipModeKind,
}

impl<R: Renderer> LineChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            config: self.config,
            point_count: self.data.len(),
            label_count: self.series.label_count(),
            series_keys: self.series.keys().map(str::to_owned).collect(),
            container_width: self.container_width,
            window: self.window(),
            scroll: self.scroll.state(),
            hovered: self.hover.hovered().cloned(),
            tooltip_mode: self.tooltip_mode.kind(),
        }
    }
}
