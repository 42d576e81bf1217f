//! Group arithmetic over span layouts.
//!
//! A group is one line of the list: a single item in a plain list, or the run
//! of items sharing a row (vertical grids) or column (horizontal grids). Items
//! fill a line from span index 0; an item whose span size does not fit in the
//! remainder of the current line starts the next one, and a line filled
//! exactly closes.
//!
//! Nothing here is cached. Positions are resolved per pass against the
//! current [`SpanLayout`], so inserts and span size changes are picked up on
//! the next pass.

use crate::layout::SpanLayout;

/// Where an item sits inside its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePlacement {
    /// The item fills its line on its own.
    Whole,
    /// The item starts a line shared with later items.
    First,
    /// The item has neighbors on both sides.
    Middle,
    /// The item closes a line shared with earlier items.
    Last,
}

impl LinePlacement {
    /// Check if the item has a neighbor before it in the line.
    pub fn has_before_neighbor(self) -> bool {
        matches!(self, Self::Middle | Self::Last)
    }

    /// Check if the item has a neighbor after it in the line.
    pub fn has_after_neighbor(self) -> bool {
        matches!(self, Self::First | Self::Middle)
    }
}

/// The resolved group coordinates of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPosition {
    /// Adapter position of the item.
    pub position: usize,
    /// Index of the line holding the item.
    pub group_index: usize,
    /// Number of lines in the list.
    pub group_count: usize,
    /// Cells per line.
    pub span_count: usize,
    /// Cells occupied by the item.
    pub span_size: usize,
    /// Cells occupied in the item's line up to and including the item.
    pub accumulated_span: usize,
    /// Whether this is the last item of the list.
    pub is_last_item: bool,
}

impl GroupPosition {
    /// Classify the item inside its line.
    pub fn placement(&self) -> LinePlacement {
        if self.span_count == 1 || self.span_size == self.span_count {
            LinePlacement::Whole
        } else if self.accumulated_span == self.span_size {
            LinePlacement::First
        } else if self.accumulated_span == self.span_count {
            LinePlacement::Last
        } else {
            LinePlacement::Middle
        }
    }

    /// Remainder marker of the item in its line: `1` for the first item, `0`
    /// for the last one or a whole-line item, the accumulated span otherwise.
    pub fn remainder_in_span(&self) -> usize {
        match self.placement() {
            LinePlacement::Whole | LinePlacement::Last => 0,
            LinePlacement::First => 1,
            LinePlacement::Middle => self.accumulated_span % self.span_count,
        }
    }

    /// Check if the item belongs to the last line of the list.
    pub fn is_last_group(&self) -> bool {
        self.group_index + 1 == self.group_count
    }
}

/// Line index and span index of `position`.
fn line_cursor(position: usize, span: &SpanLayout<'_>) -> (usize, usize) {
    let span_count = span.span_count();
    let mut group = 0;
    let mut used = 0;
    for previous in 0..position {
        let size = span.span_size_of(previous);
        used += size;
        if used == span_count {
            used = 0;
            group += 1;
        } else if used > span_count {
            used = size;
            group += 1;
        }
    }
    if used + span.span_size_of(position) > span_count {
        (group + 1, 0)
    } else {
        (group, used)
    }
}

/// Index of the line holding the item at `position`.
pub fn group_index_of(position: usize, span: &SpanLayout<'_>) -> usize {
    if !span.is_spanned() {
        return position;
    }
    line_cursor(position, span).0
}

/// Number of lines needed to lay out `item_count` items.
pub fn group_count_of(item_count: usize, span: &SpanLayout<'_>) -> usize {
    if !span.is_spanned() {
        return item_count;
    }
    let span_count = span.span_count();
    let mut count = 0;
    let mut used = 0;
    for position in 0..item_count {
        let size = span.span_size_of(position);
        if used == 0 || used + size > span_count {
            count += 1;
            used = size;
        } else {
            used += size;
        }
        if used >= span_count {
            used = 0;
        }
    }
    count
}

/// Cells occupied in the line of `position` by the items before it plus the
/// item itself.
pub fn accumulated_span_in_line(position: usize, span: &SpanLayout<'_>) -> usize {
    let size = span.span_size_of(position);
    if !span.is_spanned() {
        return size;
    }
    line_cursor(position, span).1 + size
}

/// Remainder marker of `position`, see [`GroupPosition::remainder_in_span`].
pub fn remainder_in_span(position: usize, span: &SpanLayout<'_>) -> usize {
    locate(position, position + 1, span).remainder_in_span()
}

/// Resolve every group coordinate of `position` in one walk.
pub fn locate(position: usize, item_count: usize, span: &SpanLayout<'_>) -> GroupPosition {
    locate_among(position, item_count, group_count_of(item_count, span), span)
}

/// Like [`locate`], with the group count of the list already known.
///
/// Paint passes resolve many positions against one list and count its
/// groups once.
pub fn locate_among(
    position: usize,
    item_count: usize,
    group_count: usize,
    span: &SpanLayout<'_>,
) -> GroupPosition {
    let is_last_item = position + 1 == item_count;
    if !span.is_spanned() {
        return GroupPosition {
            position,
            group_index: position,
            group_count,
            span_count: 1,
            span_size: 1,
            accumulated_span: 1,
            is_last_item,
        };
    }
    let (group_index, span_index) = line_cursor(position, span);
    let span_size = span.span_size_of(position);
    GroupPosition {
        position,
        group_index,
        group_count,
        span_count: span.span_count(),
        span_size,
        accumulated_span: span_index + span_size,
        is_last_item,
    }
}
