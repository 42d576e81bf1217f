//! Inset measurement.
//!
//! The measurement pass runs before items have pixel positions. For each
//! item it reserves room for the divider after the item's line and, in
//! grids, for the half dividers shared with its neighbors in the line.
//!
//! Insets are computed in logical terms ([`ItemInsets`]) and mapped to
//! physical edges with [`ItemInsets::to_edges`].

use crate::axis::{DividerExtents, px};
use crate::divider::Divider;
use crate::group::{self, GroupPosition, LinePlacement};
use crate::layout::{LayoutDirection, Orientation, SpanLayout};
use crate::logging::targets;
use crate::state::ListState;

/// Room reserved around one item, in logical terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ItemInsets {
    /// Cross-axis inset on the side the layout starts from.
    pub before: i32,
    /// Cross-axis inset on the opposite side.
    pub after: i32,
    /// Main-axis inset after the item.
    pub trailing: i32,
}

impl ItemInsets {
    /// No insets.
    pub const ZERO: Self = Self {
        before: 0,
        after: 0,
        trailing: 0,
    };

    /// Check if no room is reserved.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Map the insets to physical edges.
    pub fn to_edges(&self, orientation: Orientation, direction: LayoutDirection) -> EdgeInsets {
        let rtl = direction.is_rtl();
        match orientation {
            Orientation::Vertical => {
                let (left, right) = if rtl {
                    (self.after, self.before)
                } else {
                    (self.before, self.after)
                };
                EdgeInsets::new(left, 0, right, self.trailing)
            }
            Orientation::Horizontal => {
                let (left, right) = if rtl { (self.trailing, 0) } else { (0, self.trailing) };
                EdgeInsets::new(left, self.before, right, self.after)
            }
        }
    }
}

/// Room reserved around one item, per physical edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    /// Create edge insets.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Computes item insets for one divider.
#[derive(Debug, Clone, Copy)]
pub struct OffsetEngine<'a> {
    divider: &'a Divider,
}

impl<'a> OffsetEngine<'a> {
    /// Create an engine measuring with `divider`.
    pub fn new(divider: &'a Divider) -> Self {
        Self { divider }
    }

    /// Room to reserve around the item at `position`.
    ///
    /// Lists without a layout or without items, and positions past the end of
    /// the list, get no insets.
    pub fn compute_inset(&self, position: usize, state: &ListState<'_>) -> ItemInsets {
        let Some(layout) = state.ready_layout() else {
            tracing::trace!(
                target: targets::OFFSET,
                item_count = state.item_count,
                "list not ready, skipping measurement"
            );
            return ItemInsets::ZERO;
        };
        if position >= state.item_count {
            tracing::trace!(
                target: targets::OFFSET,
                position,
                item_count = state.item_count,
                "position outside the list"
            );
            return ItemInsets::ZERO;
        }
        let span = SpanLayout::from_probe(layout);
        let group = group::locate(position, state.item_count, &span);
        self.insets_for(&group, layout.orientation())
    }

    fn insets_for(&self, group: &GroupPosition, orientation: Orientation) -> ItemInsets {
        let (count, index) = (group.group_count, group.group_index);
        let visibility = self.divider.visibility_at(count, index);
        if !visibility.is_visible() {
            return ItemInsets::ZERO;
        }
        let drawable = self.divider.drawable_at(count, index);
        let size = self.divider.size_at(drawable.as_ref(), orientation, count, index);
        let extents = DividerExtents::new(size, visibility, group);

        let placement = group.placement();
        let items_shown = visibility.shows_items();
        let margins = items_shown && placement != LinePlacement::Whole;
        let margin_before = if margins { px(self.divider.margin_before_at(count, index)) } else { 0 };
        let margin_after = if margins { px(self.divider.margin_after_at(count, index)) } else { 0 };
        ItemInsets {
            before: if items_shown && placement.has_before_neighbor() {
                extents.before_half.saturating_add(margin_before)
            } else {
                0
            },
            after: if items_shown && placement.has_after_neighbor() {
                extents.after_half.saturating_add(margin_after)
            } else {
                0
            },
            trailing: extents.trailing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridLayout, LinearLayout};
    use crate::strategy::Visibility;

    #[test]
    fn list_items_get_trailing_only() {
        let divider = Divider::builder().with_size(10).build().unwrap();
        let layout = LinearLayout::vertical();
        let state = ListState::new(5, &layout);
        let engine = OffsetEngine::new(&divider);

        for position in 0..5 {
            let insets = engine.compute_inset(position, &state);
            assert_eq!(insets, ItemInsets { before: 0, after: 0, trailing: 10 });
        }
    }

    #[test]
    fn empty_or_detached_lists_get_nothing() {
        let divider = Divider::builder().with_size(10).build().unwrap();
        let engine = OffsetEngine::new(&divider);
        let layout = LinearLayout::vertical();

        assert!(engine.compute_inset(0, &ListState::new(0, &layout)).is_zero());
        assert!(engine.compute_inset(0, &ListState::without_layout(4)).is_zero());
        assert!(engine.compute_inset(9, &ListState::new(4, &layout)).is_zero());
    }

    #[test]
    fn grid_halves_include_margin() {
        let divider = Divider::builder().with_size(9).with_margin(2).build().unwrap();
        let layout = GridLayout::vertical(3);
        let state = ListState::new(6, &layout);
        let engine = OffsetEngine::new(&divider);

        assert_eq!(engine.compute_inset(0, &state), ItemInsets { before: 0, after: 7, trailing: 9 });
        assert_eq!(engine.compute_inset(1, &state), ItemInsets { before: 6, after: 7, trailing: 9 });
        assert_eq!(engine.compute_inset(2, &state), ItemInsets { before: 6, after: 0, trailing: 9 });
    }

    #[test]
    fn huge_values_saturate() {
        let divider = Divider::builder().with_size(u32::MAX).with_margin(u32::MAX).build().unwrap();
        let layout = GridLayout::vertical(2);
        let state = ListState::new(4, &layout);
        let insets = OffsetEngine::new(&divider).compute_inset(0, &state);
        assert_eq!(insets, ItemInsets { before: 0, after: i32::MAX, trailing: i32::MAX });
    }

    #[test]
    fn uneven_insets_pick_their_side() {
        let divider = Divider::builder().with_size(4).with_insets(1, 5).build().unwrap();
        let layout = GridLayout::vertical(3);
        let state = ListState::new(6, &layout);
        let insets = OffsetEngine::new(&divider).compute_inset(1, &state);
        assert_eq!(insets, ItemInsets { before: 3, after: 7, trailing: 4 });
    }

    #[test]
    fn whole_line_items_ignore_margin() {
        let divider = Divider::builder().with_size(4).with_margin(3).build().unwrap();
        let layout = GridLayout::vertical(2).with_span_sizes(|p| if p == 0 { 2 } else { 1 });
        let state = ListState::new(3, &layout);
        let engine = OffsetEngine::new(&divider);

        assert_eq!(engine.compute_inset(0, &state), ItemInsets { before: 0, after: 0, trailing: 4 });
    }

    #[test]
    fn group_only_drops_halves() {
        let divider = Divider::builder()
            .with_size(4)
            .with_visibility_strategy(|_: usize, _: usize| Visibility::GroupOnly)
            .build()
            .unwrap();
        let layout = GridLayout::vertical(2);
        let state = ListState::new(4, &layout);
        let insets = OffsetEngine::new(&divider).compute_inset(0, &state);
        assert_eq!(insets, ItemInsets { before: 0, after: 0, trailing: 4 });
    }

    #[test]
    fn edges_follow_orientation_and_direction() {
        let insets = ItemInsets { before: 1, after: 2, trailing: 3 };
        assert_eq!(
            insets.to_edges(Orientation::Vertical, LayoutDirection::LeftToRight),
            EdgeInsets::new(1, 0, 2, 3)
        );
        assert_eq!(
            insets.to_edges(Orientation::Vertical, LayoutDirection::RightToLeft),
            EdgeInsets::new(2, 0, 1, 3)
        );
        assert_eq!(
            insets.to_edges(Orientation::Horizontal, LayoutDirection::LeftToRight),
            EdgeInsets::new(0, 1, 3, 2)
        );
        assert_eq!(
            insets.to_edges(Orientation::Horizontal, LayoutDirection::RightToLeft),
            EdgeInsets::new(3, 1, 0, 2)
        );
    }
}
