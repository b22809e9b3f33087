use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::trace;

use crate::interaction::{HOVER_TOLERANCE_PX, HoverTarget};
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Handles a pointer move in content coordinates.
    ///
    /// Returns `true` when the hover state changed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        let target = self.resolve_hover(x, y);
        if !self.hover.on_pointer_move(target) {
            return false;
        }
        trace!(hovered = ?self.hover.hovered(), x, y, "hover changed");
        self.tooltip_sizes.invalidate();
        self.touch();
        true
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        if !self.hover.on_pointer_leave() {
            return false;
        }
        trace!("hover cleared on pointer leave");
        self.tooltip_sizes.invalidate();
        self.touch();
        true
    }

    /// Nearest category within tolerance, and the series whose point there
    /// is vertically closest to the pointer.
    pub(super) fn resolve_hover(&self, x: f64, y: f64) -> Option<HoverTarget> {
        let (index, distance) = self
            .category_axis()
            .nearest_index(x, self.series.label_count())?;
        if distance > HOVER_TOLERANCE_PX {
            return None;
        }
        let label = self.series.label(index)?;

        let candidates: SmallVec<[(OrderedFloat<f64>, &str); 8]> = self
            .series
            .series()
            .filter_map(|series| {
                let point = series.point_at(label)?;
                let dy = (self.scale.value_to_pixel(point.value) - y).abs();
                Some((OrderedFloat(dy), series.key()))
            })
            .collect();

        candidates
            .into_iter()
            .min_by_key(|candidate| candidate.0)
            .map(|(_, key)| HoverTarget::new(key, index))
    }
}
