use linechart_rs::core::{CategoryAxis, VisibleWindow, WindowInput, visible_labels};

fn scroll_input(label_count: usize, container_width: f64, scroll_left: f64) -> WindowInput {
    WindowInput {
        point_width: 60.0,
        container_width,
        scroll_left,
        scroll_enabled: true,
        label_count,
    }
}

#[test]
fn scroll_window_at_origin_includes_trailing_overscan() {
    let window = VisibleWindow::compute(scroll_input(100, 300.0, 0.0));

    assert_eq!(window.start_index, 0);
    assert_eq!(window.end_index, 6);
    assert_eq!(window.virtual_width, 6_000.0);
}

#[test]
fn scroll_window_adds_one_category_of_overscan_on_each_side() {
    let window = VisibleWindow::compute(scroll_input(100, 300.0, 600.0));
    assert_eq!((window.start_index, window.end_index), (9, 16));

    let window = VisibleWindow::compute(scroll_input(100, 300.0, 630.0));
    assert_eq!((window.start_index, window.end_index), (9, 17));
}

#[test]
fn scroll_window_is_clamped_to_label_count() {
    let window = VisibleWindow::compute(scroll_input(10, 300.0, 400.0));

    assert_eq!(window.start_index, 5);
    assert_eq!(window.end_index, 10);
}

#[test]
fn tail_window_shows_newest_labels() {
    let window = VisibleWindow::compute(WindowInput {
        scroll_enabled: false,
        ..scroll_input(100, 300.0, 0.0)
    });

    assert_eq!(window.start_index, 94);
    assert_eq!(window.end_index, 100);
    assert_eq!(window.len(), 6);
}

#[test]
fn tail_window_with_few_labels_covers_everything() {
    let window = VisibleWindow::compute(WindowInput {
        scroll_enabled: false,
        ..scroll_input(3, 300.0, 0.0)
    });

    assert_eq!((window.start_index, window.end_index), (0, 3));
    // Content never shrinks below the container.
    assert_eq!(window.virtual_width, 300.0);
}

#[test]
fn empty_label_set_yields_empty_window() {
    let window = VisibleWindow::compute(scroll_input(0, 300.0, 0.0));

    assert!(window.is_empty());
    assert_eq!(window.virtual_width, 300.0);
}

#[test]
fn zero_width_container_still_materializes_the_tail() {
    let window = VisibleWindow::compute(WindowInput {
        scroll_enabled: false,
        ..scroll_input(8, 0.0, 0.0)
    });

    assert_eq!((window.start_index, window.end_index), (7, 8));
}

#[test]
fn invalid_point_width_yields_empty_window() {
    let window = VisibleWindow::compute(WindowInput {
        point_width: 0.0,
        ..scroll_input(10, 300.0, 0.0)
    });

    assert!(window.is_empty());
}

#[test]
fn non_finite_scroll_offset_is_treated_as_origin() {
    let window = VisibleWindow::compute(scroll_input(100, 300.0, f64::NAN));

    assert_eq!((window.start_index, window.end_index), (0, 6));
}

#[test]
fn visible_labels_slice_matches_window() {
    let labels: Vec<String> = (0..10).map(|i| format!("L{i}")).collect();
    let window = VisibleWindow::compute(scroll_input(labels.len(), 120.0, 180.0));

    let visible = visible_labels(&labels, window);
    assert_eq!(visible.first().map(String::as_str), Some("L2"));
    assert_eq!(visible.len(), window.len());
}

#[test]
fn category_axis_resolves_nearest_index_with_distance() {
    let axis = CategoryAxis::new(40.0, 60.0);

    assert_eq!(axis.x_for_index(3), 220.0);
    assert_eq!(axis.nearest_index(230.0, 10), Some((3, 10.0)));
    assert_eq!(axis.nearest_index(-40.0, 10), None);
    assert_eq!(axis.nearest_index(40.0 + 60.0 * 10.0, 10), None);
    assert_eq!(axis.nearest_index(f64::NAN, 10), None);
}

#[test]
fn tail_window_saturates_for_sub_pixel_point_width() {
    let window = VisibleWindow::compute(WindowInput {
        point_width: 1e-300,
        container_width: 1_000.0,
        scroll_left: 0.0,
        scroll_enabled: false,
        label_count: 3,
    });

    assert_eq!((window.start_index, window.end_index), (0, 3));
}
