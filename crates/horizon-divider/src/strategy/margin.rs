//! Margin strategies.

use std::sync::{Arc, OnceLock};

use super::MarginStrategy;

/// Every group uses the same margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMargin(pub u32);

impl MarginStrategy for FixedMargin {
    fn margin(&self, _: usize, _: usize) -> u32 {
        self.0
    }
}

/// Every group uses the same margins, which differ per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsetMargin {
    pub before: u32,
    pub after: u32,
}

impl MarginStrategy for InsetMargin {
    /// The start-side margin.
    fn margin(&self, _: usize, _: usize) -> u32 {
        self.before
    }

    fn margin_before(&self, _: usize, _: usize) -> u32 {
        self.before
    }

    fn margin_after(&self, _: usize, _: usize) -> u32 {
        self.after
    }
}

/// A constant margin for every group.
pub fn fixed(px: u32) -> FixedMargin {
    FixedMargin(px)
}

/// Constant margins with a different value on each side.
pub fn insets(before: u32, after: u32) -> InsetMargin {
    InsetMargin { before, after }
}

/// The shared zero margin.
pub fn none() -> Arc<dyn MarginStrategy> {
    static NONE: OnceLock<Arc<dyn MarginStrategy>> = OnceLock::new();
    NONE.get_or_init(|| Arc::new(FixedMargin(0))).clone()
}
