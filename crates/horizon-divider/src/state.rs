//! Host list state handed to measurement and paint passes.

use std::fmt;

use horizon_divider_render::Rect;

use crate::layout::LayoutProbe;

/// What the host list reports at the start of a pass.
#[derive(Clone, Copy)]
pub struct ListState<'a> {
    /// Number of items in the list's adapter.
    pub item_count: usize,
    /// The layout arranging the items, if one is attached yet.
    pub layout: Option<&'a dyn LayoutProbe>,
}

impl<'a> ListState<'a> {
    /// State of a list with an attached layout.
    pub fn new(item_count: usize, layout: &'a dyn LayoutProbe) -> Self {
        Self {
            item_count,
            layout: Some(layout),
        }
    }

    /// State of a list with no layout attached yet.
    pub fn without_layout(item_count: usize) -> Self {
        Self {
            item_count,
            layout: None,
        }
    }

    /// The layout, if the list has items to decorate.
    pub fn ready_layout(&self) -> Option<&'a dyn LayoutProbe> {
        self.layout.filter(|_| self.item_count > 0)
    }
}

impl fmt::Debug for ListState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListState")
            .field("item_count", &self.item_count)
            .field("orientation", &self.layout.map(|layout| layout.orientation()))
            .finish()
    }
}

/// A child view currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleChild {
    /// Adapter position, or `None` while the child is being removed.
    pub position: Option<usize>,
    /// Final pixel bounds of the child.
    pub bounds: Rect,
}

impl VisibleChild {
    /// A child bound to an adapter position.
    pub fn new(position: usize, bounds: Rect) -> Self {
        Self {
            position: Some(position),
            bounds,
        }
    }

    /// A child that no longer has an adapter position.
    pub fn detached(bounds: Rect) -> Self {
        Self {
            position: None,
            bounds,
        }
    }
}
