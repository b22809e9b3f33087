use tracing::{debug, trace, warn};

use crate::core::{DataPoint, SeriesSet, YScale};
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Replaces the data snapshot.
    ///
    /// Points with non-finite values are dropped.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        let original_count = points.len();
        let points = canonicalize_points(points);
        debug!(
            original_count,
            canonical_count = points.len(),
            "set data points"
        );
        self.data = points;
        self.refresh_derived();
    }

    /// Appends one sample, following the tail unless the user scrolled away.
    pub fn append_point(&mut self, point: DataPoint) {
        if !point.value.is_finite() {
            warn!(key = %point.key, label = %point.label, "skipping non-finite point");
            return;
        }
        self.data.push(point);
        trace!(count = self.data.len(), "append data point");
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        self.series = SeriesSet::from_points(&self.data);
        self.scale = YScale::from_points(
            &self.data,
            self.config.chart_height,
            self.config.y_ticks,
            self.config.padding_ratio,
        );
        self.tooltip_sizes.invalidate();

        let hover_survives = self.hover.hovered().is_some_and(|target| {
            target.index < self.series.label_count() && self.series.get(&target.key).is_some()
        });
        if !hover_survives && self.hover.on_pointer_leave() {
            debug!("cleared hover after data change");
        }

        self.clamp_scroll_to_content();
        let metrics = self.scroll_metrics();
        if let Some(scroll_left) = self
            .scroll
            .on_labels_count(self.series.label_count(), metrics)
        {
            trace!(
                scroll_left,
                labels = self.series.label_count(),
                "pinned view to newest data"
            );
        }
        self.touch();
    }
}

fn canonicalize_points(points: Vec<DataPoint>) -> Vec<DataPoint> {
    let mut dropped = 0_usize;
    let kept: Vec<DataPoint> = points
        .into_iter()
        .filter(|point| {
            let keep = point.value.is_finite();
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect();
    if dropped > 0 {
        warn!(dropped, "dropped points with non-finite values");
    }
    kept
}
