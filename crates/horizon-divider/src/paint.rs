//! Divider painting.
//!
//! The paint pass runs once per frame after every visible child has final
//! pixel bounds. For each child it computes up to three segments:
//!
//! - the trailing divider after the child's line, on the main axis
//! - the before half shared with the previous item of the line
//! - the after half shared with the next item of the line
//!
//! The trailing segment spans the child's own cross extent. Half segments run
//! along the child plus the trailing divider, so the junction square below
//! each half is painted exactly once.

use horizon_divider_render::{Drawable, DrawingSurface, Rect};

use crate::axis::{AxisFrame, DividerExtents, LogicalRect, px};
use crate::divider::Divider;
use crate::error::{DividerError, Result};
use crate::group::{self, LinePlacement};
use crate::layout::SpanLayout;
use crate::logging::targets;
use crate::state::{ListState, VisibleChild};

/// Which part of a divider a segment paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    /// The divider after the child's line.
    Trailing,
    /// The half divider on the cross-axis start side.
    BeforeHalf,
    /// The half divider on the cross-axis end side.
    AfterHalf,
}

/// One rectangle to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerSegment {
    /// Adapter position of the child the segment belongs to.
    pub position: usize,
    /// Line of the child.
    pub group_index: usize,
    /// What the segment paints.
    pub role: SegmentRole,
    /// Physical pixel bounds.
    pub bounds: Rect,
    /// The drawable to stretch over the bounds, tint included.
    pub drawable: Drawable,
}

/// Computes and paints divider segments for one divider.
#[derive(Debug, Clone, Copy)]
pub struct PaintEngine<'a> {
    divider: &'a Divider,
}

impl<'a> PaintEngine<'a> {
    /// Create an engine painting with `divider`.
    pub fn new(divider: &'a Divider) -> Self {
        Self { divider }
    }

    /// Compute every segment for the visible children.
    ///
    /// Fails with [`DividerError::UnresolvedDrawable`] if a visible group has
    /// no drawable; no segments are returned in that case.
    pub fn segments(&self, state: &ListState<'_>, children: &[VisibleChild]) -> Result<Vec<DividerSegment>> {
        if self.divider.is_space() {
            return Ok(Vec::new());
        }
        let Some(layout) = state.ready_layout() else {
            tracing::trace!(
                target: targets::PAINT,
                item_count = state.item_count,
                "list not ready, skipping paint"
            );
            return Ok(Vec::new());
        };

        let orientation = layout.orientation();
        let frame = AxisFrame::new(orientation, layout.layout_direction());
        let span = SpanLayout::from_probe(layout);
        let group_count = group::group_count_of(state.item_count, &span);
        let mut segments = Vec::with_capacity(children.len());

        for child in children {
            let Some(position) = child.position.filter(|&p| p < state.item_count) else {
                tracing::trace!(
                    target: targets::PAINT,
                    position = ?child.position,
                    "child has no adapter position, skipping"
                );
                continue;
            };
            let group = group::locate_among(position, state.item_count, group_count, &span);
            let (count, index) = (group.group_count, group.group_index);

            let visibility = self.divider.visibility_at(count, index);
            if !visibility.is_visible() {
                continue;
            }
            let Some(drawable) = self.divider.drawable_at(count, index) else {
                tracing::error!(
                    target: targets::PAINT,
                    group_index = index,
                    group_count = count,
                    "divider has no drawable for a visible group"
                );
                return Err(DividerError::unresolved(count, index));
            };
            let size = self.divider.size_at(Some(&drawable), orientation, count, index);
            let margin_before = px(self.divider.margin_before_at(count, index));
            let margin_after = px(self.divider.margin_after_at(count, index));
            let extents = DividerExtents::new(size, visibility, &group);
            let bounds = frame.to_logical(child.bounds);

            let mut push = |role, rect: LogicalRect| {
                if rect.is_empty() {
                    return;
                }
                segments.push(DividerSegment {
                    position,
                    group_index: index,
                    role,
                    bounds: frame.to_physical(rect),
                    drawable: drawable.clone(),
                });
            };

            if extents.trailing > 0 {
                let (cross_start, cross_end) = match group.placement() {
                    LinePlacement::Whole => (
                        bounds.cross_start.saturating_add(margin_before),
                        bounds.cross_end.saturating_sub(margin_after),
                    ),
                    _ => (bounds.cross_start, bounds.cross_end),
                };
                push(
                    SegmentRole::Trailing,
                    LogicalRect {
                        main_start: bounds.main_end,
                        main_end: bounds.main_end.saturating_add(extents.trailing),
                        cross_start,
                        cross_end,
                    },
                );
            }

            let main_end = bounds.main_end.saturating_add(extents.trailing);
            push(
                SegmentRole::BeforeHalf,
                LogicalRect {
                    main_start: bounds.main_start,
                    main_end,
                    cross_start: bounds.cross_start.saturating_sub(extents.before_half),
                    cross_end: bounds.cross_start,
                },
            );
            push(
                SegmentRole::AfterHalf,
                LogicalRect {
                    main_start: bounds.main_start,
                    main_end,
                    cross_start: bounds.cross_end,
                    cross_end: bounds.cross_end.saturating_add(extents.after_half),
                },
            );
        }

        tracing::trace!(
            target: targets::PAINT,
            children = children.len(),
            segments = segments.len(),
            "computed divider segments"
        );
        Ok(segments)
    }

    /// Compute the segments and hand each to `surface`.
    pub fn paint(
        &self,
        surface: &mut dyn DrawingSurface,
        state: &ListState<'_>,
        children: &[VisibleChild],
    ) -> Result<()> {
        for segment in self.segments(state, children)? {
            surface.draw(segment.bounds, &segment.drawable);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridLayout, LayoutDirection, LinearLayout, Orientation};
    use horizon_divider_render::{Color, RecordingSurface};

    fn list_children(count: usize, height: i32, gap: i32) -> Vec<VisibleChild> {
        (0..count)
            .map(|p| {
                let top = p as i32 * (height + gap);
                VisibleChild::new(p, Rect::new(0, top, 100, top + height))
            })
            .collect()
    }

    #[test]
    fn list_paints_trailing_lines() {
        let divider = Divider::builder().with_color(Color::BLACK).with_size(2).build().unwrap();
        let layout = LinearLayout::vertical();
        let state = ListState::new(3, &layout);
        let segments = PaintEngine::new(&divider)
            .segments(&state, &list_children(3, 20, 2))
            .unwrap();

        let bounds: Vec<_> = segments.iter().map(|s| s.bounds).collect();
        assert_eq!(
            bounds,
            vec![
                Rect::new(0, 20, 100, 22),
                Rect::new(0, 42, 100, 44),
                Rect::new(0, 64, 100, 66),
            ]
        );
        assert!(segments.iter().all(|s| s.role == SegmentRole::Trailing));
    }

    #[test]
    fn list_margin_shrinks_cross_axis() {
        let divider = Divider::builder().with_size(1).with_margin(8).build().unwrap();
        let layout = LinearLayout::vertical();
        let state = ListState::new(1, &layout);
        let segments = PaintEngine::new(&divider)
            .segments(&state, &list_children(1, 20, 1))
            .unwrap();
        assert_eq!(segments[0].bounds, Rect::new(8, 20, 92, 21));
    }

    #[test]
    fn horizontal_rtl_trailing_goes_left() {
        let divider = Divider::builder().with_size(3).build().unwrap();
        let layout = LinearLayout::horizontal().with_direction(LayoutDirection::RightToLeft);
        let state = ListState::new(1, &layout);
        let children = [VisibleChild::new(0, Rect::new(200, 0, 300, 50))];
        let segments = PaintEngine::new(&divider).segments(&state, &children).unwrap();
        assert_eq!(segments[0].bounds, Rect::new(197, 0, 200, 50));
    }

    #[test]
    fn space_paints_nothing() {
        let divider = Divider::builder().as_space().with_size(5).build().unwrap();
        let layout = LinearLayout::vertical();
        let state = ListState::new(3, &layout);
        let mut surface = RecordingSurface::new();
        PaintEngine::new(&divider)
            .paint(&mut surface, &state, &list_children(3, 20, 5))
            .unwrap();
        assert!(surface.is_empty());
    }

    #[test]
    fn removed_children_are_skipped() {
        let divider = Divider::builder().with_size(1).build().unwrap();
        let layout = LinearLayout::vertical();
        let state = ListState::new(2, &layout);
        let children = [
            VisibleChild::detached(Rect::new(0, 0, 10, 10)),
            VisibleChild::new(1, Rect::new(0, 11, 10, 21)),
        ];
        let segments = PaintEngine::new(&divider).segments(&state, &children).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].position, 1);
    }

    #[test]
    fn unresolved_drawable_fails() {
        let divider = Divider::builder()
            .with_drawable_strategy(|_: usize, index: usize| (index == 0).then(|| Drawable::solid(Color::RED)))
            .with_size(1)
            .build()
            .unwrap();
        let layout = LinearLayout::vertical();
        let state = ListState::new(2, &layout);
        let err = PaintEngine::new(&divider)
            .segments(&state, &list_children(2, 10, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            DividerError::UnresolvedDrawable {
                group_index: 1,
                group_count: 2
            }
        ));
    }

    #[test]
    fn huge_size_saturates() {
        let divider = Divider::builder().with_size(u32::MAX).build().unwrap();
        let layout = LinearLayout::vertical();
        let state = ListState::new(1, &layout);
        let segments = PaintEngine::new(&divider)
            .segments(&state, &list_children(1, 20, 0))
            .unwrap();
        assert_eq!(segments[0].bounds, Rect::new(0, 20, 100, i32::MAX));

        let layout = GridLayout::new(Orientation::Horizontal, 2).with_direction(LayoutDirection::RightToLeft);
        let state = ListState::new(2, &layout);
        let children = [VisibleChild::new(0, Rect::new(-50, 0, 0, 40))];
        let segments = PaintEngine::new(&divider).segments(&state, &children).unwrap();
        assert!(!segments.is_empty());
        assert!(segments.iter().all(|s| !s.bounds.is_empty()));
    }

    #[test]
    fn uneven_margins_shrink_each_side() {
        let divider = Divider::builder().with_size(1).with_insets(4, 10).build().unwrap();
        let layout = LinearLayout::vertical();
        let state = ListState::new(1, &layout);
        let segments = PaintEngine::new(&divider)
            .segments(&state, &list_children(1, 20, 1))
            .unwrap();
        assert_eq!(segments[0].bounds, Rect::new(4, 20, 90, 21));

        let layout = LinearLayout::vertical().with_direction(LayoutDirection::RightToLeft);
        let state = ListState::new(1, &layout);
        let segments = PaintEngine::new(&divider)
            .segments(&state, &list_children(1, 20, 1))
            .unwrap();
        assert_eq!(segments[0].bounds, Rect::new(10, 20, 96, 21));
    }

    #[test]
    fn grid_middle_item_paints_both_halves() {
        let divider = Divider::builder().with_size(4).build().unwrap();
        let layout = GridLayout::new(Orientation::Vertical, 3);
        let state = ListState::new(6, &layout);
        let children = [VisibleChild::new(1, Rect::new(52, 0, 100, 30))];
        let segments = PaintEngine::new(&divider).segments(&state, &children).unwrap();

        let roles: Vec<_> = segments.iter().map(|s| (s.role, s.bounds)).collect();
        assert_eq!(
            roles,
            vec![
                (SegmentRole::Trailing, Rect::new(52, 30, 100, 34)),
                (SegmentRole::BeforeHalf, Rect::new(50, 0, 52, 34)),
                (SegmentRole::AfterHalf, Rect::new(100, 0, 102, 34)),
            ]
        );
    }
}
