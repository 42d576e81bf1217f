//! Size strategies.

use std::sync::{Arc, OnceLock};

use horizon_divider_render::Drawable;

use super::SizeStrategy;
use crate::config::DividerDefaults;
use crate::layout::Orientation;

/// Every group uses the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize(pub u32);

impl SizeStrategy for FixedSize {
    fn size(&self, _: Option<&Drawable>, _: Orientation, _: usize, _: usize) -> u32 {
        self.0
    }
}

/// Uses the drawable's natural thickness along the main axis, or a fallback
/// for drawables without an intrinsic size.
///
/// Vertical lists stack dividers vertically, so the image height is used;
/// horizontal lists use the image width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntrinsicSize {
    fallback: u32,
}

impl IntrinsicSize {
    /// Create an intrinsic size strategy with the given fallback.
    pub fn new(fallback: u32) -> Self {
        Self { fallback }
    }

    /// The size used for drawables without an intrinsic size.
    pub fn fallback(&self) -> u32 {
        self.fallback
    }
}

impl SizeStrategy for IntrinsicSize {
    fn size(&self, drawable: Option<&Drawable>, orientation: Orientation, _: usize, _: usize) -> u32 {
        let Some(natural) = drawable.and_then(Drawable::intrinsic_size) else {
            return self.fallback;
        };
        let extent = match orientation {
            Orientation::Vertical => natural.height,
            Orientation::Horizontal => natural.width,
        };
        u32::try_from(extent).unwrap_or(self.fallback)
    }
}

/// A constant size for every group.
pub fn fixed(px: u32) -> FixedSize {
    FixedSize(px)
}

/// Intrinsic size with an explicit fallback.
pub fn intrinsic_or(fallback: u32) -> IntrinsicSize {
    IntrinsicSize::new(fallback)
}

/// The shared default: intrinsic size, falling back to the built-in default size.
pub fn default_size() -> Arc<dyn SizeStrategy> {
    static DEFAULT: OnceLock<Arc<dyn SizeStrategy>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(IntrinsicSize::new(DividerDefaults::DEFAULT_SIZE)))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_divider_render::{Color, ImageAsset};

    #[test]
    fn fixed_ignores_inputs() {
        let strategy = fixed(7);
        assert_eq!(strategy.size(None, Orientation::Horizontal, 3, 2), 7);
    }

    #[test]
    fn intrinsic_follows_main_axis() {
        let asset = ImageAsset::filled(10, 4, Color::BLACK).unwrap();
        let drawable = Drawable::image(asset);
        let strategy = intrinsic_or(1);

        assert_eq!(strategy.size(Some(&drawable), Orientation::Vertical, 1, 0), 4);
        assert_eq!(strategy.size(Some(&drawable), Orientation::Horizontal, 1, 0), 10);
    }

    #[test]
    fn intrinsic_falls_back_for_solid_fills() {
        let drawable = Drawable::solid(Color::BLACK);
        assert_eq!(intrinsic_or(2).size(Some(&drawable), Orientation::Vertical, 1, 0), 2);
        assert_eq!(intrinsic_or(2).size(None, Orientation::Vertical, 1, 0), 2);
    }

    #[test]
    fn default_is_shared() {
        let a = default_size();
        let b = default_size();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.size(None, Orientation::Vertical, 1, 0), DividerDefaults::DEFAULT_SIZE);
    }
}
