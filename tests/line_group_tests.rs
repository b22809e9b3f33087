use linechart_rs::api::{
    LINE_STROKE_WIDTH, LineGroupContext, MARKER_RADIUS, TooltipBounds, TooltipMode,
    TooltipSizeCache, build_line_group, project_visible_points,
};
use linechart_rs::core::{
    CategoryAxis, DataPoint, SeriesSet, TooltipKey, Viewport, VisibleWindow, YScale,
};
use linechart_rs::render::RenderFrame;

struct Fixture {
    series_set: SeriesSet,
    scale: YScale,
    sizes: TooltipSizeCache,
}

impl Fixture {
    fn new(points: &[DataPoint]) -> Self {
        Self {
            series_set: SeriesSet::from_points(points),
            scale: YScale::from_points(points, 200.0, 5, 0.2),
            sizes: TooltipSizeCache::default(),
        }
    }

    fn ctx<'a>(
        &'a self,
        mode: &'a TooltipMode,
        hovered_index: Option<usize>,
    ) -> LineGroupContext<'a> {
        LineGroupContext {
            series_set: &self.series_set,
            window: VisibleWindow {
                start_index: 0,
                end_index: self.series_set.label_count(),
                virtual_width: 300.0,
            },
            axis: CategoryAxis::new(40.0, 60.0),
            scale: &self.scale,
            hovered_index,
            tooltip_mode: mode,
            tooltip_sizes: &self.sizes,
            tooltip_bounds: TooltipBounds {
                viewport_left: 0.0,
                viewport_width: 300.0,
                chart_height: 200.0,
            },
        }
    }
}

fn sparse_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new("a", "Mon", 10.0, "#f00"),
        DataPoint::new("b", "Mon", 20.0, "#00f"),
        DataPoint::new("a", "Tue", 30.0, "#f00"),
        DataPoint::new("b", "Wed", 40.0, "#00f"),
    ]
}

fn empty_frame() -> RenderFrame {
    RenderFrame::new(Viewport::new(340.0, 240.0))
}

#[test]
fn projection_skips_labels_without_a_point() {
    let fixture = Fixture::new(&sparse_points());
    let mode = TooltipMode::Default;
    let ctx = fixture.ctx(&mode, None);

    let b = fixture.series_set.get("b").expect("series b");
    let projected = project_visible_points(b, &ctx);
    let indices: Vec<usize> = projected.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(projected[1].x, 160.0);
    assert_eq!(projected[1].y, fixture.scale.value_to_pixel(40.0));
}

#[test]
fn polyline_bridges_a_missing_label_instead_of_dropping_to_baseline() {
    let fixture = Fixture::new(&sparse_points());
    let mode = TooltipMode::Default;
    let ctx = fixture.ctx(&mode, None);
    let mut frame = empty_frame();

    let b = fixture.series_set.get("b").expect("series b");
    build_line_group(&mut frame, b, &ctx);

    let polyline = &frame.polylines[0];
    assert_eq!(
        polyline.points,
        vec![
            (40.0, fixture.scale.value_to_pixel(20.0)),
            (160.0, fixture.scale.value_to_pixel(40.0)),
        ]
    );
    assert!(polyline.points.iter().all(|(_, y)| *y != fixture.scale.value_to_pixel(0.0)));
    assert_eq!(frame.circles.len(), 2);
}

#[test]
fn series_draws_polyline_and_one_marker_per_point() {
    let fixture = Fixture::new(&sparse_points());
    let mode = TooltipMode::Default;
    let ctx = fixture.ctx(&mode, None);
    let mut frame = empty_frame();

    let a = fixture.series_set.get("a").expect("series a");
    build_line_group(&mut frame, a, &ctx);

    assert_eq!(frame.polylines.len(), 1);
    let polyline = &frame.polylines[0];
    assert_eq!(polyline.series_key, "a");
    assert_eq!(polyline.points.len(), 2);
    assert_eq!(polyline.stroke_width, LINE_STROKE_WIDTH);
    assert_eq!(polyline.color.as_str(), "#f00");
    assert_eq!(frame.circles.len(), 2);
    assert!(frame.circles.iter().all(|c| c.radius == MARKER_RADIUS));
    assert!(frame.tooltips.is_empty());
}

#[test]
fn single_point_series_renders_a_single_vertex() {
    let points = vec![DataPoint::new("a", "Mon", 5.0, "#f00")];
    let fixture = Fixture::new(&points);
    let mode = TooltipMode::Default;
    let ctx = fixture.ctx(&mode, None);
    let mut frame = empty_frame();

    build_line_group(&mut frame, fixture.series_set.get("a").expect("series a"), &ctx);

    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.polylines[0].points.len(), 1);
    assert_eq!(frame.circles.len(), 1);
    assert!(frame.validate().is_ok());
}

#[test]
fn series_outside_the_window_draws_nothing() {
    let fixture = Fixture::new(&sparse_points());
    let mode = TooltipMode::Default;
    let mut ctx = fixture.ctx(&mode, None);
    ctx.window = VisibleWindow {
        start_index: 2,
        end_index: 3,
        virtual_width: 300.0,
    };
    let mut frame = empty_frame();

    build_line_group(&mut frame, fixture.series_set.get("a").expect("series a"), &ctx);

    assert!(frame.is_empty());
}

#[test]
fn hovered_point_gets_default_tooltip_in_series_color() {
    let fixture = Fixture::new(&sparse_points());
    let mode = TooltipMode::Default;
    let ctx = fixture.ctx(&mode, Some(0));
    let mut frame = empty_frame();

    build_line_group(&mut frame, fixture.series_set.get("b").expect("series b"), &ctx);

    assert_eq!(frame.tooltips.len(), 1);
    let tooltip = &frame.tooltips[0];
    assert_eq!(tooltip.key, TooltipKey::point("b", 0));
    assert_eq!(tooltip.content, "20");
    assert_eq!(tooltip.text_color.as_ref().map(|c| c.as_str()), Some("#00f"));
    assert_eq!((tooltip.width, tooltip.height), (60.0, 30.0));
}

#[test]
fn hovered_label_missing_from_series_has_no_tooltip() {
    let fixture = Fixture::new(&sparse_points());
    let mode = TooltipMode::Default;
    let ctx = fixture.ctx(&mode, Some(1));
    let mut frame = empty_frame();

    build_line_group(&mut frame, fixture.series_set.get("b").expect("series b"), &ctx);

    assert!(frame.tooltips.is_empty());
}

#[test]
fn per_point_customizer_renders_content() {
    let fixture = Fixture::new(&sparse_points());
    let mode = TooltipMode::per_point(|point| format!("{}={}", point.key, point.value));
    let ctx = fixture.ctx(&mode, Some(1));
    let mut frame = empty_frame();

    build_line_group(&mut frame, fixture.series_set.get("a").expect("series a"), &ctx);

    assert_eq!(frame.tooltips.len(), 1);
    assert_eq!(frame.tooltips[0].content, "a=30");
    assert!(frame.tooltips[0].text_color.is_none());
}

#[test]
fn aggregate_mode_suppresses_per_point_tooltips() {
    let fixture = Fixture::new(&sparse_points());
    let mode = TooltipMode::aggregate(|points| points.len().to_string());
    let ctx = fixture.ctx(&mode, Some(0));
    let mut frame = empty_frame();

    for series in fixture.series_set.series() {
        build_line_group(&mut frame, series, &ctx);
    }

    assert_eq!(frame.polylines.len(), 2);
    assert!(frame.tooltips.is_empty());
}

#[test]
fn empty_series_color_falls_back_to_black() {
    let points = vec![DataPoint::new("a", "Mon", 5.0, "")];
    let fixture = Fixture::new(&points);
    let mode = TooltipMode::Default;
    let ctx = fixture.ctx(&mode, None);
    let mut frame = empty_frame();

    build_line_group(&mut frame, fixture.series_set.get("a").expect("series a"), &ctx);

    assert_eq!(frame.polylines[0].color.as_str(), "#000");
    assert!(frame.validate().is_ok());
}
