use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

pub const DEFAULT_PADDING_RATIO: f64 = 0.2;

/// Vertical value-to-pixel mapping with zero always inside the value range.
///
/// Pixel `0` is the top of the plot area and `chart_height` is the zero
/// baseline for non-negative data. Tick values run evenly from `0` to the
/// padded maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YScale {
    chart_height: f64,
    max_value: f64,
    min_value: f64,
    scaled_max: f64,
    ticks: Vec<f64>,
}

impl YScale {
    /// Builds a scale from raw values.
    ///
    /// `y_ticks == 0` is treated as one tick interval.
    #[must_use]
    pub fn from_values<I>(values: I, chart_height: f64, y_ticks: u32, padding_ratio: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (max_value, min_value) = values
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(max, min), value| {
                (max.max(value), min.min(value))
            });
        let scaled_max = max_value + (max_value - min_value) * padding_ratio;

        let intervals = y_ticks.max(1);
        let step = scaled_max / f64::from(intervals);
        let ticks = (0..=intervals)
            .map(|i| (step * f64::from(i)).round())
            .collect();

        Self {
            chart_height,
            max_value,
            min_value,
            scaled_max,
            ticks,
        }
    }

    #[must_use]
    pub fn from_points(
        points: &[DataPoint],
        chart_height: f64,
        y_ticks: u32,
        padding_ratio: f64,
    ) -> Self {
        Self::from_values(
            points.iter().map(|point| point.value),
            chart_height,
            y_ticks,
            padding_ratio,
        )
    }

    /// Maps a value to its vertical pixel coordinate.
    ///
    /// Degenerate results (NaN) collapse onto the baseline.
    #[must_use]
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        let y = self.chart_height - (value / self.safe_scaled_max()) * self.chart_height;
        if y.is_nan() { self.chart_height } else { y }
    }

    /// Padded maximum with the all-zero case replaced by `1`.
    #[must_use]
    pub fn safe_scaled_max(&self) -> f64 {
        if self.scaled_max == 0.0 {
            1.0
        } else {
            self.scaled_max
        }
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    #[must_use]
    pub fn scaled_max(&self) -> f64 {
        self.scaled_max
    }
}
