//! Drawable strategies.

use horizon_divider_render::{Color, Drawable, ImageAsset};

use super::DrawableStrategy;

/// Every group paints the same drawable.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDrawable(pub Drawable);

impl DrawableStrategy for FixedDrawable {
    fn drawable(&self, _: usize, _: usize) -> Option<Drawable> {
        Some(self.0.clone())
    }
}

/// A constant drawable for every group.
pub fn fixed(drawable: impl Into<Drawable>) -> FixedDrawable {
    FixedDrawable(drawable.into())
}

/// A solid color fill for every group.
pub fn solid(color: Color) -> FixedDrawable {
    FixedDrawable(Drawable::solid(color))
}

/// The same image for every group.
pub fn image(asset: ImageAsset) -> FixedDrawable {
    FixedDrawable(Drawable::image(asset))
}
