use serde::{Deserialize, Serialize};

pub mod resize;
pub mod scroll;

pub use resize::{ElementHandle, ManualResizeSource, ObserverToken, ResizeObserver, ResizeSource};
pub use scroll::{SCROLL_END_TOLERANCE_PX, ScrollMetrics, ScrollState, ScrollTracker};

/// Maximum horizontal distance between pointer and category for a hover.
pub const HOVER_TOLERANCE_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverPhase {
    Idle,
    Active,
}

/// Hovered series and global category index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub key: String,
    pub index: usize,
}

impl HoverTarget {
    #[must_use]
    pub fn new(key: impl Into<String>, index: usize) -> Self {
        Self {
            key: key.into(),
            index,
        }
    }
}

/// Pointer hover state machine: idle or active on one target.
///
/// Transitions happen synchronously with pointer events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    hovered: Option<HoverTarget>,
}

impl HoverState {
    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        if self.hovered.is_some() {
            HoverPhase::Active
        } else {
            HoverPhase::Idle
        }
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&HoverTarget> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered.as_ref().map(|target| target.index)
    }

    /// Applies the resolved target of one pointer move.
    ///
    /// Returns `true` when the state changed.
    pub fn on_pointer_move(&mut self, target: Option<HoverTarget>) -> bool {
        if self.hovered == target {
            return false;
        }
        self.hovered = target;
        true
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        self.hovered.take().is_some()
    }
}
