//! Per-group customization of dividers.
//!
//! Every property of a divider is resolved through a strategy called with the
//! list's group count and the index of the group being measured or painted.
//! Each strategy is a single-method trait implemented for plain closures, so
//! ad-hoc rules need no wrapper type:
//!
//! ```
//! use horizon_divider::strategy::{TintStrategy, Visibility, VisibilityStrategy};
//! use horizon_divider::Color;
//!
//! let striped = |_count: usize, index: usize| if index % 2 == 0 { Color::RED } else { Color::BLUE };
//! assert_eq!(striped.tint(10, 3), Color::BLUE);
//!
//! let hide_first = |_count: usize, index: usize| {
//!     if index == 0 { Visibility::None } else { Visibility::All }
//! };
//! assert_eq!(hide_first.visibility(4, 0), Visibility::None);
//! ```
//!
//! The submodules provide constant and default implementations. Defaults
//! that do not depend on configuration are shared singletons.

pub mod drawable;
pub mod margin;
pub mod size;
pub mod tint;
pub mod visibility;

use horizon_divider_render::{Color, Drawable};

use crate::layout::Orientation;

/// Which parts of a divider are shown for a group.
///
/// The group divider is the trailing line after a group; item dividers are
/// the half dividers between items sharing a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Nothing is shown.
    None,
    /// Only the dividers between items of the same line are shown.
    ItemsOnly,
    /// Only the divider after the line is shown.
    GroupOnly,
    /// Everything is shown.
    #[default]
    All,
}

impl Visibility {
    /// Check if the dividers between items of a line are shown.
    pub fn shows_items(self) -> bool {
        matches!(self, Self::ItemsOnly | Self::All)
    }

    /// Check if the divider after the line is shown.
    pub fn shows_group(self) -> bool {
        matches!(self, Self::GroupOnly | Self::All)
    }

    /// Check if anything is shown.
    pub fn is_visible(self) -> bool {
        self != Self::None
    }
}

/// Resolves the thickness of a divider along the main axis.
pub trait SizeStrategy: Send + Sync {
    /// Size in pixels for the group, given the drawable that will be painted.
    fn size(
        &self,
        drawable: Option<&Drawable>,
        orientation: Orientation,
        group_count: usize,
        group_index: usize,
    ) -> u32;
}

impl<F> SizeStrategy for F
where
    F: Fn(Option<&Drawable>, Orientation, usize, usize) -> u32 + Send + Sync,
{
    fn size(
        &self,
        drawable: Option<&Drawable>,
        orientation: Orientation,
        group_count: usize,
        group_index: usize,
    ) -> u32 {
        self(drawable, orientation, group_count, group_index)
    }
}

/// Resolves the inset of a divider on the cross axis.
///
/// Both sides use [`margin`](Self::margin) unless the side methods are
/// overridden.
pub trait MarginStrategy: Send + Sync {
    /// Margin in pixels for the group.
    fn margin(&self, group_count: usize, group_index: usize) -> u32;

    /// Margin on the cross-axis start side.
    fn margin_before(&self, group_count: usize, group_index: usize) -> u32 {
        self.margin(group_count, group_index)
    }

    /// Margin on the cross-axis end side.
    fn margin_after(&self, group_count: usize, group_index: usize) -> u32 {
        self.margin(group_count, group_index)
    }
}

impl<F> MarginStrategy for F
where
    F: Fn(usize, usize) -> u32 + Send + Sync,
{
    fn margin(&self, group_count: usize, group_index: usize) -> u32 {
        self(group_count, group_index)
    }
}

/// Resolves the tint applied to a divider's drawable.
pub trait TintStrategy: Send + Sync {
    /// Tint color for the group.
    fn tint(&self, group_count: usize, group_index: usize) -> Color;
}

impl<F> TintStrategy for F
where
    F: Fn(usize, usize) -> Color + Send + Sync,
{
    fn tint(&self, group_count: usize, group_index: usize) -> Color {
        self(group_count, group_index)
    }
}

/// Resolves which parts of a divider are shown.
pub trait VisibilityStrategy: Send + Sync {
    /// Visibility for the group.
    fn visibility(&self, group_count: usize, group_index: usize) -> Visibility;
}

impl<F> VisibilityStrategy for F
where
    F: Fn(usize, usize) -> Visibility + Send + Sync,
{
    fn visibility(&self, group_count: usize, group_index: usize) -> Visibility {
        self(group_count, group_index)
    }
}

/// Resolves the asset a divider paints.
pub trait DrawableStrategy: Send + Sync {
    /// Drawable for the group. `None` means nothing can be painted.
    fn drawable(&self, group_count: usize, group_index: usize) -> Option<Drawable>;
}

impl<F> DrawableStrategy for F
where
    F: Fn(usize, usize) -> Option<Drawable> + Send + Sync,
{
    fn drawable(&self, group_count: usize, group_index: usize) -> Option<Drawable> {
        self(group_count, group_index)
    }
}
