use linechart_rs::{ChartError, ChartResult};
use linechart_rs::api::{LineChartConfig, LineChartEngine, TooltipMode};
use linechart_rs::core::{DataPoint, Viewport};
use linechart_rs::render::{RenderFrame, Renderer, SvgRenderer};

fn svg_engine(mode: TooltipMode) -> ChartResult<LineChartEngine<SvgRenderer>> {
    let mut engine =
        LineChartEngine::new(SvgRenderer::new(), LineChartConfig::default())?.with_tooltip_mode(mode);
    engine.set_data(vec![
        DataPoint::new("a", "<Mon>", 10.0, "#f00"),
        DataPoint::new("a", "Tue", 20.0, "#f00"),
    ]);
    engine.set_container_width(300.0);
    Ok(engine)
}

#[test]
fn svg_document_contains_series_markers_and_axes() {
    let mut engine = svg_engine(TooltipMode::Default).expect("engine init");
    engine.render().expect("render");

    let svg = engine.renderer().document();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"<polyline data-series="a""#));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains(r#"stroke-dasharray="4 2""#));
    assert!(svg.contains("&lt;Mon&gt;"));
    assert!(!svg.contains("<Mon>"));
}

#[test]
fn tooltips_are_keyed_for_host_measurement() {
    let mut engine = svg_engine(TooltipMode::Default).expect("engine init");
    engine.on_pointer_move(100.0, 50.0);
    engine.render().expect("render");

    let svg = engine.renderer().document();
    assert!(svg.contains("<foreignObject"));
    assert!(svg.contains(r#"data-tooltip-key="a_1""#));
    assert!(svg.contains("color:#f00"));
    assert!(svg.contains(">20</div>"));
}

#[test]
fn aggregate_tooltip_uses_aggregate_key() {
    let mut engine = svg_engine(TooltipMode::aggregate(|points| {
        format!("{} series", points.len())
    }))
    .expect("engine init");
    engine.on_pointer_move(100.0, 50.0);
    engine.render().expect("render");

    let svg = engine.into_renderer().into_document();
    assert!(svg.contains(r#"data-tooltip-key="all_1""#));
    assert!(svg.contains(">1 series</div>"));
}

#[test]
fn invalid_frame_is_rejected_before_writing() {
    let mut renderer = SvgRenderer::new();
    let frame = RenderFrame::new(Viewport::new(100.0, 0.0));

    let result = renderer.render(&frame);
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
    assert!(renderer.document().is_empty());
}
