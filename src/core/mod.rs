pub mod labels;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod windowing;

pub use labels::{Series, SeriesSet, extract_labels, group_points, group_points_by_label};
pub use scale::{DEFAULT_PADDING_RATIO, YScale};
pub use types::{BoxSize, DataPoint, TooltipKey, Viewport};
pub use windowing::{CategoryAxis, VisibleWindow, WindowInput, visible_labels};
