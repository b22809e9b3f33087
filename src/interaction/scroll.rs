use serde::{Deserialize, Serialize};

/// Distance from the content end still treated as "at the end".
pub const SCROLL_END_TOLERANCE_PX: f64 = 2.0;

/// Geometry of the horizontal scroll container at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// Scroll offset that shows the right edge of the content.
    #[must_use]
    pub fn tail_scroll_left(self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    #[must_use]
    pub fn distance_to_end(self) -> f64 {
        self.scroll_width - self.client_width - self.scroll_left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub scroll_left: f64,
    /// User has scrolled away from the newest data.
    pub is_user_scrolling: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_left: 0.0,
            is_user_scrolling: false,
        }
    }
}

/// Horizontal scroll tracking with tail-follow on new data.
///
/// While the user sits at the newest data (or scrolling is disabled) growth
/// of the label set pins the view to the tail. A user inspecting older data
/// is left where they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollTracker {
    scroll_enabled: bool,
    state: ScrollState,
    labels_count: usize,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(scroll_enabled: bool) -> Self {
        Self {
            scroll_enabled,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
        if !enabled {
            self.state.is_user_scrolling = false;
        }
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[must_use]
    pub fn labels_count(&self) -> usize {
        self.labels_count
    }

    /// Whether data growth should move the view to the tail.
    #[must_use]
    pub fn follows_tail(&self) -> bool {
        !self.scroll_enabled || !self.state.is_user_scrolling
    }

    /// Records a user scroll event. Ignored while scrolling is disabled.
    ///
    /// Returns `true` when the tracked state changed.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if !self.scroll_enabled {
            return false;
        }
        let next = ScrollState {
            scroll_left: metrics.scroll_left,
            is_user_scrolling: metrics.distance_to_end() > SCROLL_END_TOLERANCE_PX,
        };
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }

    /// Reacts to a change of the label count.
    ///
    /// Returns the scroll offset the host must apply when the view is pinned
    /// to the tail, `None` when the count is unchanged or the user is
    /// inspecting older data.
    pub fn on_labels_count(&mut self, count: usize, metrics: ScrollMetrics) -> Option<f64> {
        if count == self.labels_count {
            return None;
        }
        self.labels_count = count;
        self.pin_to_tail(metrics)
    }

    /// Pulls the offset back inside `0..=tail_scroll_left` after the content
    /// shrank or the container widened.
    ///
    /// An offset that still fits is left alone, including while the user is
    /// inspecting older data. Returns the new offset when it moved.
    pub fn clamp(&mut self, metrics: ScrollMetrics) -> Option<f64> {
        let tail = metrics.tail_scroll_left();
        if self.state.scroll_left <= tail && self.state.scroll_left >= 0.0 {
            return None;
        }
        let clamped = ScrollMetrics {
            scroll_left: self.state.scroll_left.clamp(0.0, tail),
            ..metrics
        };
        self.state = ScrollState {
            scroll_left: clamped.scroll_left,
            is_user_scrolling: self.scroll_enabled
                && clamped.distance_to_end() > SCROLL_END_TOLERANCE_PX,
        };
        Some(clamped.scroll_left)
    }

    /// Moves the view to the tail when following it.
    pub fn pin_to_tail(&mut self, metrics: ScrollMetrics) -> Option<f64> {
        if !self.follows_tail() {
            return None;
        }
        let tail = metrics.tail_scroll_left();
        self.state = ScrollState {
            scroll_left: tail,
            is_user_scrolling: false,
        };
        Some(tail)
    }
}
