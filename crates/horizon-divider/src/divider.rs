//! The frozen divider configuration.

use std::fmt;
use std::sync::Arc;

use horizon_divider_render::Drawable;

use crate::builder::DividerBuilder;
use crate::layout::Orientation;
use crate::strategy::{
    DrawableStrategy, MarginStrategy, SizeStrategy, TintStrategy, Visibility, VisibilityStrategy,
};

/// What a divider paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerKind {
    /// A solid color fill.
    Color,
    /// An image, or whatever a custom drawable strategy returns.
    Image,
    /// Empty space. Insets are reserved but nothing is painted.
    Space,
}

/// An immutable divider: the strategies resolving every property per group.
///
/// Created with [`Divider::builder`]. Cloning is cheap and clones share their
/// strategies.
#[derive(Clone)]
pub struct Divider {
    pub(crate) kind: DividerKind,
    pub(crate) drawable: Option<Arc<dyn DrawableStrategy>>,
    pub(crate) size: Arc<dyn SizeStrategy>,
    pub(crate) margin: Arc<dyn MarginStrategy>,
    pub(crate) tint: Option<Arc<dyn TintStrategy>>,
    pub(crate) visibility: Arc<dyn VisibilityStrategy>,
}

static_assertions::assert_impl_all!(Divider: Send, Sync);

impl Divider {
    /// Start building a divider.
    pub fn builder() -> DividerBuilder {
        DividerBuilder::new()
    }

    /// What this divider paints.
    pub fn kind(&self) -> DividerKind {
        self.kind
    }

    /// Check if this divider only reserves space.
    pub fn is_space(&self) -> bool {
        self.kind == DividerKind::Space
    }

    /// Check if a tint is applied to the resolved drawables.
    pub fn is_tinted(&self) -> bool {
        self.tint.is_some()
    }

    /// Visibility of the group.
    pub fn visibility_at(&self, group_count: usize, group_index: usize) -> Visibility {
        self.visibility.visibility(group_count, group_index)
    }

    /// Drawable of the group with its tint applied.
    ///
    /// Space dividers never consult a drawable strategy and return `None`.
    pub fn drawable_at(&self, group_count: usize, group_index: usize) -> Option<Drawable> {
        let drawable = self.drawable.as_ref()?.drawable(group_count, group_index)?;
        Some(match &self.tint {
            Some(tint) => drawable.with_tint(tint.tint(group_count, group_index)),
            None => drawable,
        })
    }

    /// Size of the group in pixels.
    pub fn size_at(
        &self,
        drawable: Option<&Drawable>,
        orientation: Orientation,
        group_count: usize,
        group_index: usize,
    ) -> u32 {
        self.size.size(drawable, orientation, group_count, group_index)
    }

    /// Margin of the group in pixels.
    pub fn margin_at(&self, group_count: usize, group_index: usize) -> u32 {
        self.margin.margin(group_count, group_index)
    }

    /// Margin of the group on the cross-axis start side.
    pub fn margin_before_at(&self, group_count: usize, group_index: usize) -> u32 {
        self.margin.margin_before(group_count, group_index)
    }

    /// Margin of the group on the cross-axis end side.
    pub fn margin_after_at(&self, group_count: usize, group_index: usize) -> u32 {
        self.margin.margin_after(group_count, group_index)
    }
}

impl fmt::Debug for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Divider")
            .field("kind", &self.kind)
            .field("tinted", &self.is_tinted())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_divider_render::Color;

    #[test]
    fn drawable_carries_tint() {
        let asset = horizon_divider_render::ImageAsset::filled(2, 2, Color::BLACK).unwrap();
        let divider = Divider::builder()
            .with_image(asset)
            .with_tint(Color::RED)
            .build()
            .unwrap();

        let drawable = divider.drawable_at(3, 0).unwrap();
        assert_eq!(drawable.tint(), Some(Color::RED));
        assert_eq!(divider.size_at(Some(&drawable), Orientation::Vertical, 3, 0), 2);
    }

    #[test]
    fn space_has_no_drawable() {
        let divider = Divider::builder().as_space().build().unwrap();
        assert!(divider.is_space());
        assert_eq!(divider.drawable_at(1, 0), None);
    }

    #[test]
    fn clones_share_strategies() {
        let divider = Divider::builder().build().unwrap();
        let copy = divider.clone();
        assert!(Arc::ptr_eq(&divider.size, &copy.size));
        assert_eq!(format!("{copy:?}"), "Divider { kind: Color, tinted: false, .. }");
    }
}
