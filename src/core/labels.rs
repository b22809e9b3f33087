use indexmap::{IndexMap, IndexSet};

use crate::core::DataPoint;

/// Returns every label in first-seen order without duplicates.
#[must_use]
pub fn extract_labels(points: &[DataPoint]) -> Vec<String> {
    points
        .iter()
        .map(|point| point.label.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Groups points by series key, keeping input order inside each series.
#[must_use]
pub fn group_points(points: &[DataPoint]) -> IndexMap<String, Vec<DataPoint>> {
    let mut groups: IndexMap<String, Vec<DataPoint>> = IndexMap::new();
    for point in points {
        groups
            .entry(point.key.clone())
            .or_default()
            .push(point.clone());
    }
    groups
}

/// Groups points by series key and then by label.
///
/// A later point for the same `(key, label)` pair replaces the earlier one.
#[must_use]
pub fn group_points_by_label(
    points: &[DataPoint],
) -> IndexMap<String, IndexMap<String, DataPoint>> {
    group_points(points)
        .into_iter()
        .map(|(key, series)| {
            let by_label = series
                .into_iter()
                .map(|point| (point.label.clone(), point))
                .collect();
            (key, by_label)
        })
        .collect()
}

/// One line of the chart: its points keyed by label.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    key: String,
    color: String,
    points: IndexMap<String, DataPoint>,
    last_index: usize,
}

impl Series {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// First color seen for this series.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn point_at(&self, label: &str) -> Option<&DataPoint> {
        self.points.get(label)
    }

    /// Highest global category index this series has a point at.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Labels plus label-keyed series derived from one data snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    labels: IndexSet<String>,
    series: IndexMap<String, Series>,
}

impl SeriesSet {
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Self {
        let labels: IndexSet<String> = extract_labels(points).into_iter().collect();
        let series = group_points_by_label(points)
            .into_iter()
            .filter_map(|(key, points)| {
                let color = points.values().next()?.color.clone();
                let last_index = points
                    .keys()
                    .filter_map(|label| labels.get_index_of(label))
                    .max()
                    .unwrap_or(0);
                let series = Series {
                    key: key.clone(),
                    color,
                    points,
                    last_index,
                };
                Some((key, series))
            })
            .collect();

        Self { labels, series }
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get_index(index).map(String::as_str)
    }

    #[must_use]
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Labels with global indices inside `start..end`.
    pub fn labels_in(&self, start: usize, end: usize) -> impl Iterator<Item = (usize, &str)> {
        (start..end.min(self.labels.len()))
            .filter_map(|index| self.label(index).map(|label| (index, label)))
    }

    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Series> {
        self.series.get(key)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Points of every series at one label, in series order.
    #[must_use]
    pub fn points_at(&self, label: &str) -> Vec<DataPoint> {
        self.series
            .values()
            .filter_map(|series| series.point_at(label).cloned())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
