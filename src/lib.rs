//! linechart-rs: headless engine for a virtualized, scrollable line chart.
//!
//! The engine owns chart state (data snapshot, container width, scroll
//! position, hover) and reacts to discrete host events. Each render pass
//! materializes a backend-agnostic `RenderFrame`; tooltip boxes are refined
//! through a measure-after-render pass driven by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChartConfig, LineChartEngine, TooltipMode};
pub use error::{ChartError, ChartResult};
