use indexmap::IndexMap;

use crate::core::{BoxSize, TooltipKey};

/// Measured tooltip sizes keyed by tooltip identity.
///
/// Sizes are consumed by the next layout pass. The cache is marked stale
/// whenever data, tooltip mode or hover changes and is refilled wholesale
/// by the following measurement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipSizeCache {
    sizes: IndexMap<TooltipKey, BoxSize>,
    stale: bool,
}

impl TooltipSizeCache {
    #[must_use]
    pub fn get(&self, key: &TooltipKey) -> Option<BoxSize> {
        self.sizes.get(key).copied()
    }

    #[must_use]
    pub fn size_or(&self, key: &TooltipKey, fallback: BoxSize) -> BoxSize {
        self.get(key).unwrap_or(fallback)
    }

    /// Most recently measured aggregate box, whichever category it was for.
    ///
    /// The aggregate tooltip keeps its size across hovered categories.
    #[must_use]
    pub fn aggregate_size(&self) -> Option<BoxSize> {
        self.sizes
            .iter()
            .rev()
            .find(|(key, _)| matches!(key, TooltipKey::Aggregate { .. }))
            .map(|(_, size)| *size)
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Replaces every entry with `measured` and clears the stale flag.
    pub fn replace(&mut self, measured: IndexMap<TooltipKey, BoxSize>) {
        self.sizes = measured;
        self.stale = false;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
