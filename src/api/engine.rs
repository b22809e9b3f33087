use tracing::{debug, trace};

use crate::core::{CategoryAxis, DataPoint, SeriesSet, VisibleWindow, WindowInput, YScale};
use crate::error::ChartResult;
use crate::interaction::{HoverState, HoverTarget, ScrollTracker};
use crate::render::{RenderFrame, Renderer};

use super::{LineChartConfig, TickFormatter, TooltipMode, TooltipSizeCache};

/// Main orchestration facade consumed by host applications.
///
/// `LineChartEngine` owns the data snapshot, the derived labels/series and
/// Y scale, container width, scroll and hover state. Host events mutate it
/// synchronously; `render` materializes the current state into a frame.
pub struct LineChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LineChartConfig,
    pub(super) tooltip_mode: TooltipMode,
    pub(super) tick_formatter: Option<TickFormatter>,
    pub(super) data: Vec<DataPoint>,
    pub(super) series: SeriesSet,
    pub(super) scale: YScale,
    pub(super) container_width: f64,
    pub(super) scroll: ScrollTracker,
    pub(super) hover: HoverState,
    pub(super) tooltip_sizes: TooltipSizeCache,
    pub(super) revision: u64,
    pub(super) last_frame: Option<RenderFrame>,
    pub(super) last_frame_revision: Option<u64>,
}

impl<R: Renderer> LineChartEngine<R> {
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        debug!(?config, "creating line chart engine");
        Ok(Self {
            renderer,
            config,
            tooltip_mode: TooltipMode::Default,
            tick_formatter: None,
            data: Vec::new(),
            series: SeriesSet::default(),
            scale: YScale::from_values(
                std::iter::empty(),
                config.chart_height,
                config.y_ticks,
                config.padding_ratio,
            ),
            container_width: 0.0,
            scroll: ScrollTracker::new(config.is_scroll),
            hover: HoverState::default(),
            tooltip_sizes: TooltipSizeCache::default(),
            revision: 0,
            last_frame: None,
            last_frame_revision: None,
        })
    }

    #[must_use]
    pub fn with_tooltip_mode(mut self, mode: TooltipMode) -> Self {
        self.set_tooltip_mode(mode);
        self
    }

    pub fn set_tooltip_mode(&mut self, mode: TooltipMode) {
        debug!(mode = ?mode.kind(), "set tooltip mode");
        self.tooltip_mode = mode;
        self.tooltip_sizes.invalidate();
        self.touch();
    }

    #[must_use]
    pub fn tooltip_mode(&self) -> &TooltipMode {
        &self.tooltip_mode
    }

    #[must_use]
    pub fn with_tick_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&DataPoint, usize, &[DataPoint]) -> String + 'static,
    {
        self.tick_formatter = Some(Box::new(formatter));
        self.touch();
        self
    }

    #[must_use]
    pub fn config(&self) -> LineChartConfig {
        self.config
    }

    /// Replaces the configuration, rebuilding the scale and re-pinning the view.
    pub fn set_config(&mut self, config: LineChartConfig) -> ChartResult<()> {
        let config = config.validate()?;
        debug!(?config, "set config");
        self.config = config;
        self.scroll.set_scroll_enabled(config.is_scroll);
        self.scale = YScale::from_points(
            &self.data,
            config.chart_height,
            config.y_ticks,
            config.padding_ratio,
        );
        self.pin_to_tail_if_following();
        self.touch();
        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.series.labels().collect()
    }

    #[must_use]
    pub fn scale(&self) -> &YScale {
        &self.scale
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&HoverTarget> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn category_axis(&self) -> CategoryAxis {
        CategoryAxis::new(self.config.y_axis_width, self.config.point_width)
    }

    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        VisibleWindow::compute(WindowInput {
            point_width: self.config.point_width,
            container_width: self.container_width,
            scroll_left: self.scroll.state().scroll_left,
            scroll_enabled: self.config.is_scroll,
            label_count: self.series.label_count(),
        })
    }

    #[must_use]
    pub fn visible_labels(&self) -> Vec<&str> {
        let window = self.window();
        self.series
            .labels_in(window.start_index, window.end_index)
            .map(|(_, label)| label)
            .collect()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        trace!(
            revision = self.revision,
            polylines = frame.polylines.len(),
            tooltips = frame.tooltips.len(),
            "rendered frame"
        );
        self.last_frame = Some(frame);
        self.last_frame_revision = Some(self.revision);
        Ok(())
    }

    /// Frame produced by the most recent successful `render`.
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Marks every derived frame as outdated.
    pub(super) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
