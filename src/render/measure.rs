use crate::core::BoxSize;
use crate::render::TooltipPrimitive;

/// Measurement capability of the rendering layer.
///
/// Called after a frame is rendered; returns the actual box of the element
/// rendered for `tooltip`, or `None` if it is not attached.
pub trait TooltipMeasurer {
    fn measure(&mut self, tooltip: &TooltipPrimitive) -> Option<BoxSize>;
}

impl<F> TooltipMeasurer for F
where
    F: FnMut(&TooltipPrimitive) -> Option<BoxSize>,
{
    fn measure(&mut self, tooltip: &TooltipPrimitive) -> Option<BoxSize> {
        self(tooltip)
    }
}

/// Estimates tooltip boxes from text length for hosts without a layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetricsMeasurer {
    pub char_width: f64,
    pub line_height: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
}

impl Default for TextMetricsMeasurer {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 14.0,
            horizontal_padding: 16.0,
            vertical_padding: 16.0,
        }
    }
}

impl TextMetricsMeasurer {
    #[must_use]
    pub fn estimate(&self, content: &str) -> BoxSize {
        let (lines, widest) = content
            .lines()
            .fold((0_usize, 0_usize), |(lines, widest), line| {
                (lines + 1, widest.max(line.chars().count()))
            });
        let lines = lines.max(1);
        BoxSize::new(
            widest as f64 * self.char_width + self.horizontal_padding,
            lines as f64 * self.line_height + self.vertical_padding,
        )
    }
}

impl TooltipMeasurer for TextMetricsMeasurer {
    fn measure(&mut self, tooltip: &TooltipPrimitive) -> Option<BoxSize> {
        Some(self.estimate(&tooltip.content))
    }
}
