//! Layout probing for the list hosting a divider.
//!
//! Dividers never position items themselves. They read the host's layout shape
//! through the [`LayoutProbe`] trait:
//!
//! - [`LinearLayout`] - a plain scrolling list (span count 1)
//! - [`GridLayout`] - a uniform grid, optionally with per-item span sizes
//! - [`StaggeredGridLayout`] - a staggered grid, grouped like a plain list
//!
//! [`SpanLayout`] is the snapshot of span metadata the group arithmetic works
//! on. It sanitizes whatever the probe reports so the arithmetic can rely on
//! `1 <= span_size <= span_count`.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use crate::logging::targets;

/// The scroll direction of a list (its main axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items flow top to bottom; dividers are horizontal lines below items.
    #[default]
    Vertical,
    /// Items flow along the x axis; dividers are vertical lines after items.
    Horizontal,
}

impl Orientation {
    /// Check if the main axis is vertical.
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    /// Check if the main axis is horizontal.
    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}

/// Direction of the physical x axis.
///
/// Right-to-left mirrors the cross axis of vertical lists and the main axis
/// of horizontal lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Start edge on the left.
    #[default]
    LeftToRight,
    /// Start edge on the right.
    RightToLeft,
}

impl LayoutDirection {
    /// Check if the x axis is mirrored.
    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }
}

/// Read access to the layout shape of a host list.
pub trait LayoutProbe {
    /// The main axis of the list.
    fn orientation(&self) -> Orientation;

    /// The direction of the x axis. Defaults to left-to-right.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::LeftToRight
    }

    /// Number of cells in one line. Plain lists report 1.
    fn span_count(&self) -> usize {
        1
    }

    /// Number of cells the item at `position` occupies in its line.
    fn span_size(&self, position: usize) -> usize {
        let _ = position;
        1
    }

    /// Staggered grids have no stable lines and are grouped item by item.
    fn is_staggered(&self) -> bool {
        false
    }
}

/// A plain scrolling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearLayout {
    orientation: Orientation,
    direction: LayoutDirection,
}

impl LinearLayout {
    /// Create a list layout with the given orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            direction: LayoutDirection::default(),
        }
    }

    /// Create a vertical list layout.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Create a horizontal list layout.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Set the layout direction using builder pattern.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl LayoutProbe for LinearLayout {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }
}

/// Span size lookup for grids whose items occupy more than one cell.
pub type SpanSizeLookup = Arc<dyn Fn(usize) -> usize + Send + Sync>;

/// A uniform grid.
#[derive(Clone)]
pub struct GridLayout {
    orientation: Orientation,
    direction: LayoutDirection,
    span_count: usize,
    span_sizes: Option<SpanSizeLookup>,
}

impl GridLayout {
    /// Create a grid with `span_count` cells per line, every item spanning one cell.
    pub fn new(orientation: Orientation, span_count: usize) -> Self {
        Self {
            orientation,
            direction: LayoutDirection::default(),
            span_count,
            span_sizes: None,
        }
    }

    /// Create a vertically scrolling grid.
    pub fn vertical(span_count: usize) -> Self {
        Self::new(Orientation::Vertical, span_count)
    }

    /// Create a horizontally scrolling grid.
    pub fn horizontal(span_count: usize) -> Self {
        Self::new(Orientation::Horizontal, span_count)
    }

    /// Set a per-item span size lookup using builder pattern.
    pub fn with_span_sizes(mut self, lookup: impl Fn(usize) -> usize + Send + Sync + 'static) -> Self {
        self.span_sizes = Some(Arc::new(lookup));
        self
    }

    /// Set the layout direction using builder pattern.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl fmt::Debug for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridLayout")
            .field("orientation", &self.orientation)
            .field("direction", &self.direction)
            .field("span_count", &self.span_count)
            .field("custom_span_sizes", &self.span_sizes.is_some())
            .finish()
    }
}

impl LayoutProbe for GridLayout {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn span_count(&self) -> usize {
        self.span_count
    }

    fn span_size(&self, position: usize) -> usize {
        self.span_sizes.as_ref().map_or(1, |lookup| lookup(position))
    }
}

/// A staggered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredGridLayout {
    orientation: Orientation,
    direction: LayoutDirection,
    span_count: usize,
}

impl StaggeredGridLayout {
    /// Create a staggered grid with `span_count` lanes.
    pub fn new(orientation: Orientation, span_count: usize) -> Self {
        Self {
            orientation,
            direction: LayoutDirection::default(),
            span_count,
        }
    }

    /// Set the layout direction using builder pattern.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl LayoutProbe for StaggeredGridLayout {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn span_count(&self) -> usize {
        self.span_count
    }

    fn is_staggered(&self) -> bool {
        true
    }
}

enum SpanSizes<'a> {
    Uniform,
    Probe(&'a dyn LayoutProbe),
}

/// Span metadata of the current layout pass.
///
/// Out-of-range span sizes are logged once per snapshot, so take one snapshot
/// per pass.
pub struct SpanLayout<'a> {
    span_count: usize,
    sizes: SpanSizes<'a>,
    clamp_logged: Cell<bool>,
}

impl<'a> SpanLayout<'a> {
    /// A layout where every line holds exactly one item.
    pub fn single() -> Self {
        Self {
            span_count: 1,
            sizes: SpanSizes::Uniform,
            clamp_logged: Cell::new(false),
        }
    }

    /// A grid with `span_count` cells per line and single-cell items.
    pub fn uniform(span_count: usize) -> Self {
        Self {
            span_count: span_count.max(1),
            sizes: SpanSizes::Uniform,
            clamp_logged: Cell::new(false),
        }
    }

    /// Snapshot the span metadata of a probe.
    ///
    /// Staggered grids collapse to a span count of 1.
    pub fn from_probe(probe: &'a dyn LayoutProbe) -> Self {
        if probe.is_staggered() {
            return Self::single();
        }
        let reported = probe.span_count();
        if reported == 0 {
            tracing::warn!(target: targets::LAYOUT, "layout reported a span count of 0, using 1");
            return Self::single();
        }
        if reported == 1 {
            return Self::single();
        }
        Self {
            span_count: reported,
            sizes: SpanSizes::Probe(probe),
            clamp_logged: Cell::new(false),
        }
    }

    /// Number of cells in one line.
    pub fn span_count(&self) -> usize {
        self.span_count
    }

    /// Check if lines can hold more than one item.
    pub fn is_spanned(&self) -> bool {
        self.span_count > 1
    }

    /// Number of cells occupied by the item at `position`, clamped to
    /// `1..=span_count`.
    pub fn span_size_of(&self, position: usize) -> usize {
        let reported = match self.sizes {
            SpanSizes::Uniform => return 1,
            SpanSizes::Probe(probe) => probe.span_size(position),
        };
        if reported == 0 || reported > self.span_count {
            let clamped = reported.clamp(1, self.span_count);
            if self.clamp_logged.replace(true) {
                return clamped;
            }
            tracing::warn!(
                target: targets::LAYOUT,
                position,
                reported,
                clamped,
                span_count = self.span_count,
                "span size out of range, further sizes clamped silently this pass"
            );
            return clamped;
        }
        reported
    }
}

impl fmt::Debug for SpanLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanLayout")
            .field("span_count", &self.span_count)
            .field("uniform", &matches!(self.sizes, SpanSizes::Uniform))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_layout_is_single_span() {
        let layout = LinearLayout::horizontal();
        let span = SpanLayout::from_probe(&layout);
        assert_eq!(layout.orientation(), Orientation::Horizontal);
        assert_eq!(span.span_count(), 1);
        assert!(!span.is_spanned());
        assert_eq!(span.span_size_of(7), 1);
    }

    #[test]
    fn grid_layout_reports_span_sizes() {
        let layout = GridLayout::vertical(3).with_span_sizes(|position| if position == 0 { 3 } else { 1 });
        let span = SpanLayout::from_probe(&layout);
        assert_eq!(span.span_count(), 3);
        assert_eq!(span.span_size_of(0), 3);
        assert_eq!(span.span_size_of(1), 1);
    }

    #[test]
    fn staggered_grid_collapses_to_single_span() {
        let layout = StaggeredGridLayout::new(Orientation::Vertical, 4);
        assert_eq!(layout.span_count(), 4);
        assert_eq!(SpanLayout::from_probe(&layout).span_count(), 1);
    }

    #[test]
    fn out_of_range_span_sizes_are_clamped() {
        let layout = GridLayout::vertical(2).with_span_sizes(|position| position * 5);
        let span = SpanLayout::from_probe(&layout);
        assert_eq!(span.span_size_of(0), 1);
        assert_eq!(span.span_size_of(1), 2);
        assert!(span.clamp_logged.get());
    }

    #[test]
    fn in_range_span_sizes_log_nothing() {
        let layout = GridLayout::vertical(3).with_span_sizes(|position| position % 3 + 1);
        let span = SpanLayout::from_probe(&layout);
        for position in 0..9 {
            assert_eq!(span.span_size_of(position), position % 3 + 1);
        }
        assert!(!span.clamp_logged.get());
    }

    #[test]
    fn zero_span_count_falls_back_to_single() {
        let layout = GridLayout::vertical(0);
        assert_eq!(SpanLayout::from_probe(&layout).span_count(), 1);
        assert_eq!(SpanLayout::uniform(0).span_count(), 1);
    }

    #[test]
    fn direction_defaults_to_left_to_right() {
        assert!(!LinearLayout::vertical().layout_direction().is_rtl());
        let rtl = GridLayout::vertical(2).with_direction(LayoutDirection::RightToLeft);
        assert!(rtl.layout_direction().is_rtl());
    }
}
