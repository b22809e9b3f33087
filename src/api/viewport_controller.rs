use tracing::{debug, trace};

use crate::interaction::{ScrollMetrics, ScrollState};
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Applies a container width reported by the resize observer.
    ///
    /// Returns `true` when the width changed.
    pub fn set_container_width(&mut self, width: f64) -> bool {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if width == self.container_width {
            return false;
        }
        debug!(from = self.container_width, to = width, "container width changed");
        self.container_width = width;
        self.pin_to_tail_if_following();
        self.touch();
        true
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Total scrollable width: Y-axis column plus the virtual plot width.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.config.y_axis_width + self.window().virtual_width
    }

    #[must_use]
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.scroll.state().scroll_left,
            self.content_width(),
            self.container_width,
        )
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    /// Applies a user scroll event. Ignored while scrolling is disabled.
    ///
    /// The offset is clamped to the scrollable range. Returns `true` when the
    /// scroll state changed.
    pub fn on_scroll(&mut self, scroll_left: f64) -> bool {
        let current = self.scroll_metrics();
        let scroll_left = if scroll_left.is_finite() {
            scroll_left.clamp(0.0, current.tail_scroll_left())
        } else {
            current.scroll_left
        };
        let metrics = ScrollMetrics {
            scroll_left,
            ..current
        };
        if !self.scroll.on_scroll(metrics) {
            return false;
        }
        let state = self.scroll.state();
        trace!(
            scroll_left = state.scroll_left,
            is_user_scrolling = state.is_user_scrolling,
            "scrolled"
        );
        self.touch();
        true
    }

    /// Keeps the scroll offset inside the current scrollable range.
    pub(super) fn clamp_scroll_to_content(&mut self) {
        let metrics = self.scroll_metrics();
        if let Some(scroll_left) = self.scroll.clamp(metrics) {
            debug!(
                scroll_left,
                content_width = metrics.scroll_width,
                "clamped scroll offset to shrunken content"
            );
        }
    }

    pub(super) fn pin_to_tail_if_following(&mut self) {
        self.clamp_scroll_to_content();
        let metrics = self.scroll_metrics();
        if let Some(scroll_left) = self.scroll.pin_to_tail(metrics) {
            trace!(scroll_left, "pinned view to tail");
        }
    }
}
