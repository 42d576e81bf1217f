//! Visibility strategies.

use std::sync::{Arc, OnceLock};

use super::{Visibility, VisibilityStrategy};

/// Every group uses the same visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedVisibility(pub Visibility);

impl VisibilityStrategy for FixedVisibility {
    fn visibility(&self, _: usize, _: usize) -> Visibility {
        self.0
    }
}

/// Hides the divider after the last line while keeping the dividers between
/// its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HideLast;

impl VisibilityStrategy for HideLast {
    fn visibility(&self, group_count: usize, group_index: usize) -> Visibility {
        if group_index + 1 == group_count {
            Visibility::ItemsOnly
        } else {
            Visibility::All
        }
    }
}

/// A constant visibility for every group.
pub fn fixed(visibility: Visibility) -> FixedVisibility {
    FixedVisibility(visibility)
}

/// The shared default: everything visible.
pub fn all() -> Arc<dyn VisibilityStrategy> {
    static ALL: OnceLock<Arc<dyn VisibilityStrategy>> = OnceLock::new();
    ALL.get_or_init(|| Arc::new(FixedVisibility(Visibility::All))).clone()
}

/// The shared hide-last strategy.
pub fn hide_last() -> Arc<dyn VisibilityStrategy> {
    static HIDE_LAST: OnceLock<Arc<dyn VisibilityStrategy>> = OnceLock::new();
    HIDE_LAST.get_or_init(|| Arc::new(HideLast)).clone()
}
