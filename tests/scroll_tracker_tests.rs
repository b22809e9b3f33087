use linechart_rs::interaction::{SCROLL_END_TOLERANCE_PX, ScrollMetrics, ScrollTracker};

#[test]
fn within_end_tolerance_is_not_user_scrolling() {
    let mut tracker = ScrollTracker::new(true);

    assert!(tracker.on_scroll(ScrollMetrics::new(698.0, 1_000.0, 300.0)));
    assert_eq!(tracker.state().scroll_left, 698.0);
    assert!(!tracker.state().is_user_scrolling);
    assert!(tracker.follows_tail());
}

#[test]
fn beyond_end_tolerance_is_user_scrolling() {
    let mut tracker = ScrollTracker::new(true);

    let metrics = ScrollMetrics::new(697.0, 1_000.0, 300.0);
    assert!(metrics.distance_to_end() > SCROLL_END_TOLERANCE_PX);
    assert!(tracker.on_scroll(metrics));
    assert!(tracker.state().is_user_scrolling);
    assert!(!tracker.follows_tail());
}

#[test]
fn scroll_events_are_ignored_when_scrolling_is_disabled() {
    let mut tracker = ScrollTracker::new(false);

    assert!(!tracker.on_scroll(ScrollMetrics::new(10.0, 1_000.0, 300.0)));
    assert_eq!(tracker.state().scroll_left, 0.0);
    assert!(!tracker.state().is_user_scrolling);
}

#[test]
fn repeated_identical_scroll_reports_no_change() {
    let mut tracker = ScrollTracker::new(true);
    let metrics = ScrollMetrics::new(100.0, 1_000.0, 300.0);

    assert!(tracker.on_scroll(metrics));
    assert!(!tracker.on_scroll(metrics));
}

#[test]
fn growth_pins_to_tail_when_following() {
    let mut tracker = ScrollTracker::new(true);

    let pinned = tracker.on_labels_count(20, ScrollMetrics::new(0.0, 1_240.0, 300.0));
    assert_eq!(pinned, Some(940.0));
    assert_eq!(tracker.state().scroll_left, 940.0);
    assert_eq!(tracker.labels_count(), 20);
}

#[test]
fn growth_leaves_user_position_untouched() {
    let mut tracker = ScrollTracker::new(true);
    tracker.on_scroll(ScrollMetrics::new(100.0, 1_240.0, 300.0));

    let pinned = tracker.on_labels_count(21, ScrollMetrics::new(100.0, 1_300.0, 300.0));
    assert_eq!(pinned, None);
    assert_eq!(tracker.state().scroll_left, 100.0);
    assert!(tracker.state().is_user_scrolling);
}

#[test]
fn unchanged_label_count_does_not_move_the_view() {
    let mut tracker = ScrollTracker::new(true);
    let metrics = ScrollMetrics::new(0.0, 1_000.0, 300.0);

    assert!(tracker.on_labels_count(5, metrics).is_some());
    assert!(tracker.on_labels_count(5, metrics).is_none());
}

#[test]
fn returning_to_the_end_resumes_tail_following() {
    let mut tracker = ScrollTracker::new(true);
    tracker.on_scroll(ScrollMetrics::new(100.0, 1_000.0, 300.0));
    assert!(!tracker.follows_tail());

    tracker.on_scroll(ScrollMetrics::new(700.0, 1_000.0, 300.0));
    assert!(tracker.follows_tail());
    assert_eq!(
        tracker.on_labels_count(1, ScrollMetrics::new(700.0, 1_060.0, 300.0)),
        Some(760.0)
    );
}

#[test]
fn disabling_scroll_clears_user_scrolling() {
    let mut tracker = ScrollTracker::new(true);
    tracker.on_scroll(ScrollMetrics::new(100.0, 1_000.0, 300.0));

    tracker.set_scroll_enabled(false);
    assert!(!tracker.scroll_enabled());
    assert!(!tracker.state().is_user_scrolling);
    assert!(tracker.follows_tail());
}

#[test]
fn content_narrower_than_container_pins_to_origin() {
    let metrics = ScrollMetrics::new(0.0, 200.0, 300.0);

    assert_eq!(metrics.tail_scroll_left(), 0.0);
}

#[test]
fn clamp_pulls_offset_inside_shrunken_content() {
    let mut tracker = ScrollTracker::new(true);
    tracker.on_scroll(ScrollMetrics::new(900.0, 1_240.0, 300.0));
    assert!(tracker.state().is_user_scrolling);

    assert_eq!(tracker.clamp(ScrollMetrics::new(900.0, 340.0, 300.0)), Some(40.0));
    assert_eq!(tracker.state().scroll_left, 40.0);
    assert!(!tracker.state().is_user_scrolling);
    assert!(tracker.follows_tail());
}

#[test]
fn clamp_leaves_an_offset_that_still_fits() {
    let mut tracker = ScrollTracker::new(true);
    tracker.on_scroll(ScrollMetrics::new(100.0, 1_240.0, 300.0));
    let before = tracker.state();

    assert_eq!(tracker.clamp(ScrollMetrics::new(100.0, 640.0, 300.0)), None);
    assert_eq!(tracker.state(), before);
}
