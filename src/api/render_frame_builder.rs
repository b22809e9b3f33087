use crate::core::{TooltipKey, Viewport};
use crate::render::{RenderFrame, Renderer, TooltipPrimitive};

use super::axis_frame_builder::{
    AxisFrameContext, X_AXIS_BAND_PX, build_grid, build_hover_guide, build_x_axis_labels,
    build_y_axis_labels,
};
use super::line_group_builder::{LineGroupContext, build_line_group};
use super::tooltip_layout::{
    DEFAULT_AGGREGATE_TOOLTIP_SIZE, TooltipBounds, aggregate_anchor, place_tooltip,
};
use super::{AggregateTooltipFn, LineChartEngine, TooltipMode};

impl<R: Renderer> LineChartEngine<R> {
    /// Materializes the current state into a frame without rendering it.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let window = self.window();
        let axis = self.category_axis();
        let chart_height = self.config.chart_height;
        let scroll_left = self.scroll.state().scroll_left;

        let mut frame = RenderFrame::new(Viewport::new(
            self.config.y_axis_width + window.virtual_width,
            chart_height + X_AXIS_BAND_PX,
        ));

        let axis_ctx = AxisFrameContext {
            series_set: &self.series,
            data: &self.data,
            window,
            axis,
            scale: &self.scale,
            y_axis_width: self.config.y_axis_width,
            scroll_left,
            tick_formatter: self.tick_formatter.as_ref(),
        };
        build_grid(&mut frame, &axis_ctx);
        build_y_axis_labels(&mut frame, &axis_ctx);
        build_x_axis_labels(&mut frame, &axis_ctx);

        let hovered_index = self
            .hover
            .hovered_index()
            .filter(|index| window.contains(*index));
        if let Some(index) = hovered_index {
            build_hover_guide(&mut frame, axis.x_for_index(index), chart_height);
        }

        let tooltip_bounds = TooltipBounds {
            viewport_left: scroll_left,
            viewport_width: self.container_width,
            chart_height,
        };
        let group_ctx = LineGroupContext {
            series_set: &self.series,
            window,
            axis,
            scale: &self.scale,
            hovered_index,
            tooltip_mode: &self.tooltip_mode,
            tooltip_sizes: &self.tooltip_sizes,
            tooltip_bounds,
        };
        for series in self.series.series() {
            build_line_group(&mut frame, series, &group_ctx);
        }

        if let (TooltipMode::Aggregate(render), Some(index)) = (&self.tooltip_mode, hovered_index)
        {
            if let Some(tooltip) = self.aggregate_tooltip(render, index, tooltip_bounds) {
                frame.tooltips.push(tooltip);
            }
        }

        frame
    }

    fn aggregate_tooltip(
        &self,
        render: &AggregateTooltipFn,
        index: usize,
        bounds: TooltipBounds,
    ) -> Option<TooltipPrimitive> {
        let label = self.series.label(index)?;
        let points = self.series.points_at(label);
        let anchor = aggregate_anchor(&points, self.category_axis().x_for_index(index), &self.scale)?;
        let key = TooltipKey::Aggregate { index };
        let size = self
            .tooltip_sizes
            .get(&key)
            .or_else(|| self.tooltip_sizes.aggregate_size())
            .unwrap_or(DEFAULT_AGGREGATE_TOOLTIP_SIZE);
        let placement = place_tooltip(anchor, size, bounds);

        Some(TooltipPrimitive {
            key,
            x: placement.x,
            y: placement.y,
            width: placement.size.width,
            height: placement.size.height,
            content: render(&points),
            text_color: None,
        })
    }
}
