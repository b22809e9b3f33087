mod axis_frame_builder;
mod chart_config;
mod data_controller;
mod engine;
mod engine_snapshot;
mod hover_resolver;
mod json_contract;
mod line_group_builder;
mod render_frame_builder;
mod tooltip_cache;
mod tooltip_layout;
mod tooltip_measurement;
mod tooltip_mode;
mod viewport_controller;

pub use axis_frame_builder::{AXIS_FONT_SIZE_PX, X_AXIS_BAND_PX};
pub use chart_config::LineChartConfig;
pub use engine::LineChartEngine;
pub use engine_snapshot::ChartSnapshot;
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use line_group_builder::{
    LINE_STROKE_WIDTH, LineGroupContext, MARKER_RADIUS, ProjectedPoint, build_line_group,
    project_visible_points,
};
pub use tooltip_cache::TooltipSizeCache;
pub use tooltip_layout::{
    DEFAULT_AGGREGATE_TOOLTIP_SIZE, DEFAULT_TOOLTIP_SIZE, TOOLTIP_EDGE_MARGIN_PX, TOOLTIP_GAP_PX,
    TooltipAnchor, TooltipBounds, TooltipHAlign, TooltipPlacement, TooltipVSide,
    aggregate_anchor, place_tooltip,
};
pub use tooltip_mode::{
    AggregateTooltipFn, PointTooltipFn, TickFormatter, TooltipMode, TooltipModeKind,
};
