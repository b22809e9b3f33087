use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_PADDING_RATIO;
use crate::error::{ChartError, ChartResult};

/// Public chart configuration.
///
/// Serializable so host applications can persist chart setup; every field
/// falls back to its default when missing from the input. Callbacks
/// (tooltip customizers, tick formatter) are attached on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    /// Plot area height in pixels.
    #[serde(default = "default_chart_height")]
    pub chart_height: f64,
    /// Number of tick intervals on the Y axis (`y_ticks + 1` ticks including zero).
    #[serde(default = "default_y_ticks")]
    pub y_ticks: u32,
    /// Reserved width of the Y-axis label column.
    #[serde(default = "default_y_axis_width")]
    pub y_axis_width: f64,
    /// Headroom fraction above the largest value.
    #[serde(default = "default_padding_ratio")]
    pub padding_ratio: f64,
    /// Horizontal scrolling with virtualization; otherwise pinned to the newest data.
    #[serde(default)]
    pub is_scroll: bool,
    /// Pixel pitch between adjacent categories.
    #[serde(default = "default_point_width")]
    pub point_width: f64,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            chart_height: default_chart_height(),
            y_ticks: default_y_ticks(),
            y_axis_width: default_y_axis_width(),
            padding_ratio: default_padding_ratio(),
            is_scroll: false,
            point_width: default_point_width(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chart_height(mut self, chart_height: f64) -> Self {
        self.chart_height = chart_height;
        self
    }

    #[must_use]
    pub fn with_y_ticks(mut self, y_ticks: u32) -> Self {
        self.y_ticks = y_ticks;
        self
    }

    #[must_use]
    pub fn with_y_axis_width(mut self, y_axis_width: f64) -> Self {
        self.y_axis_width = y_axis_width;
        self
    }

    #[must_use]
    pub fn with_padding_ratio(mut self, padding_ratio: f64) -> Self {
        self.padding_ratio = padding_ratio;
        self
    }

    /// Enables horizontal scrolling and viewport virtualization.
    #[must_use]
    pub fn with_scroll(mut self, is_scroll: bool) -> Self {
        self.is_scroll = is_scroll;
        self
    }

    #[must_use]
    pub fn with_point_width(mut self, point_width: f64) -> Self {
        self.point_width = point_width;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.chart_height.is_finite() || self.chart_height <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "chart height must be finite and > 0".to_owned(),
            ));
        }
        if self.y_ticks == 0 {
            return Err(ChartError::InvalidConfig(
                "y ticks must be >= 1".to_owned(),
            ));
        }
        if !self.y_axis_width.is_finite() || self.y_axis_width < 0.0 {
            return Err(ChartError::InvalidConfig(
                "y axis width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(ChartError::InvalidConfig(
                "padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.point_width.is_finite() || self.point_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "point width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()
    }
}

fn default_chart_height() -> f64 {
    200.0
}

fn default_y_ticks() -> u32 {
    5
}

fn default_y_axis_width() -> f64 {
    40.0
}

fn default_padding_ratio() -> f64 {
    DEFAULT_PADDING_RATIO
}

fn default_point_width() -> f64 {
    60.0
}
