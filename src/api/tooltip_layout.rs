use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{BoxSize, DataPoint, YScale};

/// Assumed per-point tooltip box before the first measurement.
pub const DEFAULT_TOOLTIP_SIZE: BoxSize = BoxSize::new(60.0, 30.0);
/// Assumed aggregate tooltip box before the first measurement.
pub const DEFAULT_AGGREGATE_TOOLTIP_SIZE: BoxSize = BoxSize::new(120.0, 40.0);
/// Points closer than this to a viewport edge align the tooltip inward.
pub const TOOLTIP_EDGE_MARGIN_PX: f64 = 50.0;
/// Vertical gap between a point and its tooltip.
pub const TOOLTIP_GAP_PX: f64 = 8.0;

/// Point a tooltip is attached to, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub x: f64,
    pub y: f64,
    /// The point is the newest of its series.
    pub is_series_tail: bool,
}

/// Region a tooltip must stay inside.
///
/// `viewport_left..viewport_left + viewport_width` is the horizontally
/// visible part of the content; `0..chart_height` the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipBounds {
    pub viewport_left: f64,
    pub viewport_width: f64,
    pub chart_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipHAlign {
    /// Left edge at the anchor.
    Start,
    Center,
    /// Right edge at the anchor.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipVSide {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub x: f64,
    pub y: f64,
    pub size: BoxSize,
    pub h_align: TooltipHAlign,
    pub v_side: TooltipVSide,
}

/// Positions a tooltip box next to its anchor without leaving the chart.
///
/// Horizontally the box is centered, except near the left viewport edge
/// (start-aligned) and for the series tail or near the right edge
/// (end-aligned). Vertically it sits above the anchor unless that would
/// cross the top, in which case it goes below, clamped to the bottom.
#[must_use]
pub fn place_tooltip(anchor: TooltipAnchor, size: BoxSize, bounds: TooltipBounds) -> TooltipPlacement {
    let relative_x = anchor.x - bounds.viewport_left;
    let h_align = if relative_x < TOOLTIP_EDGE_MARGIN_PX {
        TooltipHAlign::Start
    } else if anchor.is_series_tail || relative_x > bounds.viewport_width - TOOLTIP_EDGE_MARGIN_PX
    {
        TooltipHAlign::End
    } else {
        TooltipHAlign::Center
    };
    let x = match h_align {
        TooltipHAlign::Start => anchor.x,
        TooltipHAlign::Center => anchor.x - size.width / 2.0,
        TooltipHAlign::End => anchor.x - size.width,
    };

    let above = anchor.y - size.height - TOOLTIP_GAP_PX;
    let (y, v_side) = if above < 0.0 {
        let below = anchor.y + TOOLTIP_GAP_PX;
        (below.min(bounds.chart_height - size.height), TooltipVSide::Below)
    } else {
        (above, TooltipVSide::Above)
    };

    TooltipPlacement {
        x,
        y,
        size,
        h_align,
        v_side,
    }
}

/// Anchor of an aggregate tooltip: the vertically median point at `x`.
///
/// Using the median keeps the box away from outlier series.
#[must_use]
pub fn aggregate_anchor(points: &[DataPoint], x: f64, scale: &YScale) -> Option<TooltipAnchor> {
    let mut ys: Vec<f64> = points
        .iter()
        .map(|point| scale.value_to_pixel(point.value))
        .collect();
    if ys.is_empty() {
        return None;
    }
    ys.sort_by_key(|y| OrderedFloat(*y));
    Some(TooltipAnchor {
        x,
        y: ys[ys.len() / 2],
        is_series_tail: false,
    })
}
