//! Logical axis frames.
//!
//! Offsets and paint rectangles are computed along a main axis (the scroll
//! direction) and a cross axis, with the cross-axis start being the side the
//! layout starts from. [`AxisFrame`] maps those logical rectangles to physical
//! pixels and back, mirroring the x axis for right-to-left layouts by
//! negating it.

use horizon_divider_render::Rect;

use crate::group::{GroupPosition, LinePlacement};
use crate::layout::{LayoutDirection, Orientation};
use crate::strategy::Visibility;

/// Convert an unsigned strategy result to pixel arithmetic.
pub(crate) fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// A rectangle in main/cross coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LogicalRect {
    pub main_start: i32,
    pub main_end: i32,
    pub cross_start: i32,
    pub cross_end: i32,
}

impl LogicalRect {
    pub fn is_empty(&self) -> bool {
        self.main_end <= self.main_start || self.cross_end <= self.cross_start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AxisFrame {
    orientation: Orientation,
    mirrored: bool,
}

impl AxisFrame {
    pub fn new(orientation: Orientation, direction: LayoutDirection) -> Self {
        Self {
            orientation,
            mirrored: direction.is_rtl(),
        }
    }

    fn x_range(&self, left: i32, right: i32) -> (i32, i32) {
        if self.mirrored {
            (right.saturating_neg(), left.saturating_neg())
        } else {
            (left, right)
        }
    }

    pub fn to_logical(&self, rect: Rect) -> LogicalRect {
        let (x_start, x_end) = self.x_range(rect.left, rect.right);
        match self.orientation {
            Orientation::Vertical => LogicalRect {
                main_start: rect.top,
                main_end: rect.bottom,
                cross_start: x_start,
                cross_end: x_end,
            },
            Orientation::Horizontal => LogicalRect {
                main_start: x_start,
                main_end: x_end,
                cross_start: rect.top,
                cross_end: rect.bottom,
            },
        }
    }

    pub fn to_physical(&self, rect: LogicalRect) -> Rect {
        let (x_start, x_end, top, bottom) = match self.orientation {
            Orientation::Vertical => (rect.cross_start, rect.cross_end, rect.main_start, rect.main_end),
            Orientation::Horizontal => (rect.main_start, rect.main_end, rect.cross_start, rect.cross_end),
        };
        // Negation is its own inverse.
        let (left, right) = self.x_range(x_start, x_end);
        Rect::new(left, top, right, bottom)
    }
}

/// How one group's divider size splits around an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct DividerExtents {
    /// Full divider after the line, on the main axis.
    pub trailing: i32,
    /// Half divider on the cross-axis start side.
    pub before_half: i32,
    /// Half divider on the cross-axis end side.
    pub after_half: i32,
}

impl DividerExtents {
    /// Split `size` for the item at `group`.
    ///
    /// The earlier item of a pair takes the odd pixel, so a 1px divider keeps
    /// its pixel on the after side. The last item of the list has nothing to
    /// share its after side with and keeps the full size there.
    pub fn new(size: u32, visibility: Visibility, group: &GroupPosition) -> Self {
        let size = px(size);
        let mut extents = Self {
            trailing: if visibility.shows_group() { size } else { 0 },
            ..Self::default()
        };
        if !visibility.shows_items() {
            return extents;
        }
        let before = size / 2;
        let after = if group.is_last_item { size } else { size - before };
        match group.placement() {
            LinePlacement::Whole => {}
            LinePlacement::First => extents.after_half = after,
            LinePlacement::Last => extents.before_half = before,
            LinePlacement::Middle => {
                extents.before_half = before;
                extents.after_half = after;
            }
        }
        extents
    }
}
