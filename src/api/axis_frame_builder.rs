use crate::core::{CategoryAxis, DataPoint, SeriesSet, VisibleWindow, YScale};
use crate::render::{Color, LinePrimitive, RenderFrame, StrokeDash, TextHAlign, TextPrimitive};

use super::TickFormatter;

/// Height of the X-axis label band below the plot area.
pub const X_AXIS_BAND_PX: f64 = 40.0;
pub const AXIS_FONT_SIZE_PX: f64 = 12.0;

const GRID_COLOR: &str = "#ccc";
const BASELINE_COLOR: &str = "#333";
const AXIS_LABEL_COLOR: &str = "#666";
const HOVER_GUIDE_COLOR: &str = "#E2E2E9";
const GRID_DASH: StrokeDash = StrokeDash::new(4.0, 2.0);
const HOVER_GUIDE_DASH: StrokeDash = StrokeDash::new(3.0, 2.0);

#[derive(Clone, Copy)]
pub struct AxisFrameContext<'a> {
    pub series_set: &'a SeriesSet,
    pub data: &'a [DataPoint],
    pub window: VisibleWindow,
    pub axis: CategoryAxis,
    pub scale: &'a YScale,
    pub y_axis_width: f64,
    pub scroll_left: f64,
    pub tick_formatter: Option<&'a TickFormatter>,
}

/// Dashed horizontal grid line per visible Y tick plus the solid baseline.
pub fn build_grid(frame: &mut RenderFrame, ctx: &AxisFrameContext<'_>) {
    let x1 = ctx.y_axis_width;
    let x2 = frame.viewport.width.max(x1);
    let chart_height = ctx.scale.chart_height();

    for tick in ctx.scale.ticks() {
        let y = ctx.scale.value_to_pixel(*tick);
        if y >= 0.0 {
            frame.lines.push(
                LinePrimitive::new(x1, y, x2, y, 1.0, Color::new(GRID_COLOR)).with_dash(GRID_DASH),
            );
        }
    }
    frame.lines.push(LinePrimitive::new(
        x1,
        chart_height,
        x2,
        chart_height,
        1.0,
        Color::new(BASELINE_COLOR),
    ));
}

/// Y tick labels, pinned to the current scroll offset.
pub fn build_y_axis_labels(frame: &mut RenderFrame, ctx: &AxisFrameContext<'_>) {
    let x = ctx.scroll_left + (ctx.y_axis_width - 6.0).max(0.0);
    for tick in ctx.scale.ticks() {
        frame.texts.push(TextPrimitive::new(
            tick.to_string(),
            x,
            ctx.scale.value_to_pixel(*tick) + AXIS_FONT_SIZE_PX / 3.0,
            AXIS_FONT_SIZE_PX,
            Color::new(AXIS_LABEL_COLOR),
            TextHAlign::Right,
        ));
    }
}

/// X tick labels for the visible window only.
pub fn build_x_axis_labels(frame: &mut RenderFrame, ctx: &AxisFrameContext<'_>) {
    let y = ctx.scale.chart_height() + X_AXIS_BAND_PX / 2.0;
    for (index, label) in ctx
        .series_set
        .labels_in(ctx.window.start_index, ctx.window.end_index)
    {
        let text = match ctx.tick_formatter {
            Some(formatter) => {
                let sample = ctx
                    .data
                    .iter()
                    .find(|point| point.label == label)
                    .cloned()
                    .unwrap_or_else(|| DataPoint::placeholder(label));
                formatter(&sample, index, ctx.data)
            }
            None => label.to_owned(),
        };
        frame.texts.push(TextPrimitive::new(
            text,
            ctx.axis.x_for_index(index),
            y,
            AXIS_FONT_SIZE_PX,
            Color::new(AXIS_LABEL_COLOR),
            TextHAlign::Center,
        ));
    }
}

/// Vertical guide through the hovered category.
pub fn build_hover_guide(frame: &mut RenderFrame, x: f64, chart_height: f64) {
    frame.lines.push(
        LinePrimitive::new(x, 0.0, x, chart_height, 1.0, Color::new(HOVER_GUIDE_COLOR))
            .with_dash(HOVER_GUIDE_DASH),
    );
}
