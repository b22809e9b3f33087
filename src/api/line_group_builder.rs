use crate::core::{CategoryAxis, DataPoint, Series, SeriesSet, TooltipKey, VisibleWindow, YScale};
use crate::render::{CirclePrimitive, Color, PolylinePrimitive, RenderFrame, TooltipPrimitive};

use super::tooltip_layout::{
    DEFAULT_TOOLTIP_SIZE, TooltipAnchor, TooltipBounds, place_tooltip,
};
use super::{TooltipMode, TooltipSizeCache};

pub const LINE_STROKE_WIDTH: f64 = 2.0;
pub const MARKER_RADIUS: f64 = 3.0;
const FALLBACK_SERIES_COLOR: &str = "#000";

/// Shared inputs of every series drawn in one pass.
#[derive(Debug, Clone, Copy)]
pub struct LineGroupContext<'a> {
    pub series_set: &'a SeriesSet,
    pub window: VisibleWindow,
    pub axis: CategoryAxis,
    pub scale: &'a YScale,
    pub hovered_index: Option<usize>,
    pub tooltip_mode: &'a TooltipMode,
    pub tooltip_sizes: &'a TooltipSizeCache,
    pub tooltip_bounds: TooltipBounds,
}

/// One series point inside the visible window, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint<'a> {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub point: &'a DataPoint,
}

/// Projects the points of `series` that fall inside the visible window.
///
/// Labels the series has no point at are skipped, so the polyline joins the
/// neighbouring points across the gap instead of dropping to the baseline.
/// Markers are drawn only for points that exist.
#[must_use]
pub fn project_visible_points<'a>(
    series: &'a Series,
    ctx: &LineGroupContext<'_>,
) -> Vec<ProjectedPoint<'a>> {
    ctx.series_set
        .labels_in(ctx.window.start_index, ctx.window.end_index)
        .filter_map(|(index, label)| {
            let point = series.point_at(label)?;
            Some(ProjectedPoint {
                index,
                x: ctx.axis.x_for_index(index),
                y: ctx.scale.value_to_pixel(point.value),
                point,
            })
        })
        .collect()
}

/// Appends the polyline, markers and hovered-point tooltip of one series.
pub fn build_line_group(frame: &mut RenderFrame, series: &Series, ctx: &LineGroupContext<'_>) {
    let points = project_visible_points(series, ctx);
    if points.is_empty() {
        return;
    }

    frame.polylines.push(PolylinePrimitive {
        series_key: series.key().to_owned(),
        points: points.iter().map(|p| (p.x, p.y)).collect(),
        stroke_width: LINE_STROKE_WIDTH,
        color: paint(series.color()),
    });

    for projected in &points {
        frame.circles.push(CirclePrimitive {
            cx: projected.x,
            cy: projected.y,
            radius: MARKER_RADIUS,
            color: paint(&projected.point.color),
        });
    }

    let Some(hovered) = ctx.hovered_index else {
        return;
    };
    let Some(projected) = points.iter().find(|p| p.index == hovered) else {
        return;
    };
    let Some(content) = ctx.tooltip_mode.point_content(projected.point) else {
        return;
    };

    let key = TooltipKey::point(series.key(), projected.index);
    let size = ctx.tooltip_sizes.size_or(&key, DEFAULT_TOOLTIP_SIZE);
    let anchor = TooltipAnchor {
        x: projected.x,
        y: projected.y,
        is_series_tail: projected.index == series.last_index(),
    };
    let placement = place_tooltip(anchor, size, ctx.tooltip_bounds);
    let text_color = matches!(ctx.tooltip_mode, TooltipMode::Default)
        .then(|| paint(&projected.point.color));

    frame.tooltips.push(TooltipPrimitive {
        key,
        x: placement.x,
        y: placement.y,
        width: placement.size.width,
        height: placement.size.height,
        content,
        text_color,
    });
}

fn paint(css: &str) -> Color {
    if css.trim().is_empty() {
        Color::new(FALLBACK_SERIES_COLOR)
    } else {
        Color::new(css)
    }
}
