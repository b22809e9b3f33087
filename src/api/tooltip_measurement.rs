use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::render::{Renderer, TooltipMeasurer};

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Measure-after-render pass for tooltip boxes.
    ///
    /// Runs only when the size cache is stale and the last rendered frame
    /// reflects the current state. The cache is replaced by the sizes of the
    /// tooltips in that frame. Returns `true` when any measured size differs
    /// from the size used for layout, i.e. another render is needed.
    pub fn measure_tooltips<M>(&mut self, measurer: &mut M) -> bool
    where
        M: TooltipMeasurer + ?Sized,
    {
        if !self.tooltip_sizes.is_stale() || self.last_frame_revision != Some(self.revision) {
            return false;
        }
        let Some(frame) = self.last_frame.as_ref() else {
            return false;
        };

        let mut measured = IndexMap::with_capacity(frame.tooltips.len());
        let mut relayout = false;
        for tooltip in &frame.tooltips {
            let Some(size) = measurer.measure(tooltip) else {
                continue;
            };
            if !size.is_finite() || size.width < 0.0 || size.height < 0.0 {
                warn!(key = %tooltip.key, ?size, "discarding invalid tooltip measurement");
                continue;
            }
            if size.width != tooltip.width || size.height != tooltip.height {
                relayout = true;
            }
            measured.insert(tooltip.key.clone(), size);
        }

        debug!(measured = measured.len(), relayout, "measured tooltips");
        self.tooltip_sizes.replace(measured);
        if relayout {
            self.touch();
        }
        relayout
    }

    /// Renders, measures tooltips and re-renders when measurement moved them.
    ///
    /// Returns `true` when a second pass was rendered.
    pub fn render_measured<M>(&mut self, measurer: &mut M) -> ChartResult<bool>
    where
        M: TooltipMeasurer + ?Sized,
    {
        self.render()?;
        if self.measure_tooltips(measurer) {
            self.render()?;
            return Ok(true);
        }
        Ok(false)
    }

    #[must_use]
    pub fn tooltip_sizes(&self) -> &super::TooltipSizeCache {
        &self.tooltip_sizes
    }
}
