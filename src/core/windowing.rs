use serde::{Deserialize, Serialize};

/// Inputs of one visible-window computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowInput {
    pub point_width: f64,
    pub container_width: f64,
    pub scroll_left: f64,
    pub scroll_enabled: bool,
    pub label_count: usize,
}

/// Category index range materialized for one render pass.
///
/// `start_index..end_index` covers the viewport plus one category of
/// overscan on each side. `virtual_width` is the scrollable content width
/// of the plot and never shrinks below the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize,
    pub virtual_width: f64,
}

impl VisibleWindow {
    #[must_use]
    pub fn compute(input: WindowInput) -> Self {
        let len = input.label_count;
        let container_width = sanitize_extent(input.container_width);
        let virtual_width = (len as f64 * input.point_width).max(container_width);

        if !input.point_width.is_finite() || input.point_width <= 0.0 {
            return Self {
                start_index: 0,
                end_index: 0,
                virtual_width: container_width,
            };
        }

        let (start_index, end_index) = if input.scroll_enabled {
            let scroll_left = sanitize_extent(input.scroll_left);
            let first = (scroll_left / input.point_width).floor() - 1.0;
            let last = ((scroll_left + container_width) / input.point_width).ceil() + 1.0;
            let end = clamp_index(last, len);
            (clamp_index(first, len).min(end), end)
        } else {
            // Saturating: sub-pixel point widths overflow the category count.
            let visible = (container_width / input.point_width).ceil() as usize;
            (len.saturating_sub(visible.saturating_add(1)), len)
        };

        Self {
            start_index,
            end_index,
            virtual_width,
        }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end_index - self.start_index
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start_index == self.end_index
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.start_index..self.end_index).contains(&index)
    }
}

/// Slice of `labels` inside the window.
#[must_use]
pub fn visible_labels(labels: &[String], window: VisibleWindow) -> &[String] {
    let end = window.end_index.min(labels.len());
    let start = window.start_index.min(end);
    &labels[start..end]
}

/// Horizontal placement of categories in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub offset: f64,
    pub point_width: f64,
}

impl CategoryAxis {
    #[must_use]
    pub fn new(offset: f64, point_width: f64) -> Self {
        Self {
            offset,
            point_width,
        }
    }

    #[must_use]
    pub fn x_for_index(self, index: usize) -> f64 {
        self.offset + index as f64 * self.point_width
    }

    /// Nearest category to `x` and its horizontal distance, if inside `0..label_count`.
    #[must_use]
    pub fn nearest_index(self, x: f64, label_count: usize) -> Option<(usize, f64)> {
        if !x.is_finite() || self.point_width <= 0.0 {
            return None;
        }
        let slot = ((x - self.offset) / self.point_width).round();
        if slot < 0.0 || slot >= label_count as f64 {
            return None;
        }
        let index = slot as usize;
        Some((index, (x - self.x_for_index(index)).abs()))
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn clamp_index(value: f64, len: usize) -> usize {
    if value <= 0.0 {
        0
    } else {
        (value as usize).min(len)
    }
}
