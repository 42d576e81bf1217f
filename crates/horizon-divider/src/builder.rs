//! Fluent construction of dividers.
//!
//! Every property resolves with the same precedence: an explicit strategy
//! wins over a constant option, which wins over the configured
//! [`DividerDefaults`].
//!
//! ```
//! use horizon_divider::{Color, Divider, DividerKind};
//!
//! let divider = Divider::builder()
//!     .with_color(Color::GRAY)
//!     .with_size(2)
//!     .with_margin(16)
//!     .hide_last_divider()
//!     .build()?;
//! assert_eq!(divider.kind(), DividerKind::Color);
//! assert_eq!(divider.margin_at(4, 0), 16);
//! # Ok::<(), horizon_divider::ConfigError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_divider_render::{Color, ImageAsset};

use crate::config::DividerDefaults;
use crate::divider::{Divider, DividerKind};
use crate::error::ConfigError;
use crate::logging::targets;
use crate::strategy::{
    self, DrawableStrategy, MarginStrategy, SizeStrategy, TintStrategy, VisibilityStrategy,
};

/// Builder for [`Divider`].
#[derive(Clone, Default)]
pub struct DividerBuilder {
    defaults: DividerDefaults,
    color: Option<Color>,
    image: Option<ImageAsset>,
    space: bool,
    size: Option<u32>,
    margin: Option<(u32, u32)>,
    tint: Option<Color>,
    hide_last: bool,
    size_strategy: Option<Arc<dyn SizeStrategy>>,
    margin_strategy: Option<Arc<dyn MarginStrategy>>,
    tint_strategy: Option<Arc<dyn TintStrategy>>,
    visibility_strategy: Option<Arc<dyn VisibilityStrategy>>,
    drawable_strategy: Option<Arc<dyn DrawableStrategy>>,
}

impl DividerBuilder {
    /// Create a builder using the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use these defaults for every property left unset.
    pub fn with_defaults(mut self, defaults: DividerDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Paint a solid color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Paint an image.
    pub fn with_image(mut self, image: ImageAsset) -> Self {
        self.image = Some(image);
        self
    }

    /// Reserve space without painting anything.
    pub fn as_space(mut self) -> Self {
        self.space = true;
        self
    }

    /// Use a constant size in pixels.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Use a constant cross-axis margin in pixels.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = Some((margin, margin));
        self
    }

    /// Use constant cross-axis margins that differ between the start and the
    /// end side. Replaces [`with_margin`](Self::with_margin).
    pub fn with_insets(mut self, before: u32, after: u32) -> Self {
        self.margin = Some((before, after));
        self
    }

    /// Tint the image with a constant color.
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Hide the divider after the last line.
    pub fn hide_last_divider(mut self) -> Self {
        self.hide_last = true;
        self
    }

    /// Resolve sizes with a custom strategy.
    pub fn with_size_strategy(mut self, strategy: impl SizeStrategy + 'static) -> Self {
        self.size_strategy = Some(Arc::new(strategy));
        self
    }

    /// Resolve margins with a custom strategy.
    pub fn with_margin_strategy(mut self, strategy: impl MarginStrategy + 'static) -> Self {
        self.margin_strategy = Some(Arc::new(strategy));
        self
    }

    /// Resolve tints with a custom strategy.
    pub fn with_tint_strategy(mut self, strategy: impl TintStrategy + 'static) -> Self {
        self.tint_strategy = Some(Arc::new(strategy));
        self
    }

    /// Resolve visibility with a custom strategy.
    pub fn with_visibility_strategy(mut self, strategy: impl VisibilityStrategy + 'static) -> Self {
        self.visibility_strategy = Some(Arc::new(strategy));
        self
    }

    /// Resolve drawables with a custom strategy.
    pub fn with_drawable_strategy(mut self, strategy: impl DrawableStrategy + 'static) -> Self {
        self.drawable_strategy = Some(Arc::new(strategy));
        self
    }

    fn space_conflict(&self) -> Option<&'static str> {
        [
            ("color", self.color.is_some()),
            ("image", self.image.is_some()),
            ("tint", self.tint.is_some()),
            ("tint_strategy", self.tint_strategy.is_some()),
            ("drawable_strategy", self.drawable_strategy.is_some()),
        ]
        .into_iter()
        .find_map(|(option, set)| set.then_some(option))
    }

    fn kind(&self) -> DividerKind {
        if self.space {
            DividerKind::Space
        } else if self.image.is_some() || (self.drawable_strategy.is_some() && self.color.is_none()) {
            DividerKind::Image
        } else {
            DividerKind::Color
        }
    }

    /// Validate the options and freeze them into a [`Divider`].
    pub fn build(self) -> Result<Divider, ConfigError> {
        if self.color.is_some() && self.image.is_some() {
            return Err(ConfigError::ConflictingDrawable);
        }
        if self.space {
            if let Some(option) = self.space_conflict() {
                return Err(ConfigError::space_with(option));
            }
        }
        let kind = self.kind();
        if self.tint.is_some() && kind != DividerKind::Image {
            return Err(ConfigError::TintWithoutImage);
        }
        if self.hide_last && self.visibility_strategy.is_some() {
            tracing::debug!(
                target: targets::BUILDER,
                "visibility strategy overrides hide_last_divider"
            );
        }

        let defaults = self.defaults;

        let drawable: Option<Arc<dyn DrawableStrategy>> = match kind {
            DividerKind::Space => None,
            _ => Some(match (self.drawable_strategy, self.image) {
                (Some(custom), _) => custom,
                (None, Some(image)) => Arc::new(strategy::drawable::image(image)),
                (None, None) => Arc::new(strategy::drawable::solid(
                    self.color.unwrap_or(defaults.color),
                )),
            }),
        };

        let size: Arc<dyn SizeStrategy> = match (self.size_strategy, self.size) {
            (Some(custom), _) => custom,
            (None, Some(px)) => Arc::new(strategy::size::fixed(px)),
            (None, None) if defaults.size == DividerDefaults::DEFAULT_SIZE => {
                strategy::size::default_size()
            }
            (None, None) => Arc::new(strategy::size::intrinsic_or(defaults.size)),
        };

        let margin: Arc<dyn MarginStrategy> = match (self.margin_strategy, self.margin) {
            (Some(custom), _) => custom,
            (None, Some((before, after))) if before == after => Arc::new(strategy::margin::fixed(before)),
            (None, Some((before, after))) => Arc::new(strategy::margin::insets(before, after)),
            (None, None) if defaults.margin == 0 => strategy::margin::none(),
            (None, None) => Arc::new(strategy::margin::fixed(defaults.margin)),
        };

        let tint: Option<Arc<dyn TintStrategy>> = match (self.tint_strategy, self.tint) {
            (Some(custom), _) => Some(custom),
            (None, Some(color)) => Some(Arc::new(strategy::tint::fixed(color))),
            (None, None) => None,
        };

        let visibility = match self.visibility_strategy {
            Some(custom) => custom,
            None if self.hide_last => strategy::visibility::hide_last(),
            None => strategy::visibility::all(),
        };

        tracing::debug!(
            target: targets::BUILDER,
            ?kind,
            tinted = tint.is_some(),
            hide_last = self.hide_last,
            "built divider"
        );

        Ok(Divider {
            kind,
            drawable,
            size,
            margin,
            tint,
            visibility,
        })
    }
}

impl fmt::Debug for DividerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DividerBuilder")
            .field("defaults", &self.defaults)
            .field("color", &self.color)
            .field("image", &self.image)
            .field("space", &self.space)
            .field("size", &self.size)
            .field("margin", &self.margin)
            .field("tint", &self.tint)
            .field("hide_last", &self.hide_last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Orientation;
    use crate::strategy::Visibility;
    use horizon_divider_render::Drawable;

    fn asset() -> ImageAsset {
        ImageAsset::filled(4, 3, Color::BLACK).unwrap()
    }

    #[test]
    fn default_divider_is_light_gray_line() {
        let divider = DividerBuilder::new().build().unwrap();
        assert_eq!(divider.kind(), DividerKind::Color);
        assert_eq!(divider.drawable_at(1, 0), Some(Drawable::solid(DividerDefaults::DEFAULT_COLOR)));
        assert_eq!(divider.size_at(None, Orientation::Vertical, 1, 0), 1);
        assert_eq!(divider.margin_at(1, 0), 0);
        assert_eq!(divider.visibility_at(1, 0), Visibility::All);
    }

    #[test]
    fn color_and_image_conflict() {
        let err = DividerBuilder::new().with_color(Color::RED).with_image(asset()).build().unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingDrawable));
    }

    #[test]
    fn tint_requires_image() {
        let err = DividerBuilder::new().with_tint(Color::RED).build().unwrap_err();
        assert!(matches!(err, ConfigError::TintWithoutImage));

        let err = DividerBuilder::new().with_color(Color::BLUE).with_tint(Color::RED).build().unwrap_err();
        assert!(matches!(err, ConfigError::TintWithoutImage));

        let ok = DividerBuilder::new()
            .with_drawable_strategy(|_: usize, _: usize| Some(Drawable::solid(Color::BLACK)))
            .with_tint(Color::RED)
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn tint_strategy_works_on_any_kind() {
        let divider = DividerBuilder::new()
            .with_tint_strategy(|_: usize, _: usize| Color::GREEN)
            .build()
            .unwrap();
        assert_eq!(divider.drawable_at(2, 1).unwrap().tint(), Some(Color::GREEN));
    }

    #[test]
    fn space_rejects_drawing_options() {
        let err = DividerBuilder::new().as_space().with_color(Color::RED).build().unwrap_err();
        assert!(matches!(err, ConfigError::SpaceWithDrawing { option: "color" }));

        let err = DividerBuilder::new()
            .as_space()
            .with_drawable_strategy(|_: usize, _: usize| -> Option<Drawable> { None })
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::SpaceWithDrawing { option: "drawable_strategy" }));

        let space = DividerBuilder::new().as_space().with_size(8).with_margin(2).build().unwrap();
        assert_eq!(space.kind(), DividerKind::Space);
        assert_eq!(space.size_at(None, Orientation::Vertical, 1, 0), 8);
    }

    #[test]
    fn strategies_override_constants() {
        let divider = DividerBuilder::new()
            .with_size(2)
            .with_size_strategy(|_: Option<&Drawable>, _: Orientation, _: usize, index: usize| index as u32)
            .with_margin(5)
            .with_margin_strategy(|_: usize, _: usize| 9u32)
            .hide_last_divider()
            .with_visibility_strategy(|_: usize, _: usize| Visibility::GroupOnly)
            .build()
            .unwrap();

        assert_eq!(divider.size_at(None, Orientation::Vertical, 4, 3), 3);
        assert_eq!(divider.margin_at(4, 3), 9);
        assert_eq!(divider.visibility_at(4, 3), Visibility::GroupOnly);
    }

    #[test]
    fn insets_replace_margin() {
        let divider = DividerBuilder::new().with_margin(5).with_insets(2, 8).build().unwrap();
        assert_eq!(divider.margin_before_at(3, 1), 2);
        assert_eq!(divider.margin_after_at(3, 1), 8);

        let even = DividerBuilder::new().with_insets(4, 4).build().unwrap();
        assert_eq!(even.margin_before_at(3, 1), 4);
        assert_eq!(even.margin_after_at(3, 1), 4);
    }

    #[test]
    fn defaults_fill_unset_options() {
        let defaults = DividerDefaults::default().with_size(6).with_margin(3).with_color(Color::BLUE);
        let divider = DividerBuilder::new().with_defaults(defaults).build().unwrap();
        assert_eq!(divider.size_at(None, Orientation::Horizontal, 1, 0), 6);
        assert_eq!(divider.margin_at(1, 0), 3);
        assert_eq!(divider.drawable_at(1, 0), Some(Drawable::solid(Color::BLUE)));
    }

    #[test]
    fn image_size_is_intrinsic() {
        let divider = DividerBuilder::new().with_image(asset()).build().unwrap();
        let drawable = divider.drawable_at(1, 0);
        assert_eq!(divider.kind(), DividerKind::Image);
        assert_eq!(divider.size_at(drawable.as_ref(), Orientation::Vertical, 1, 0), 3);
        assert_eq!(divider.size_at(drawable.as_ref(), Orientation::Horizontal, 1, 0), 4);
    }

    #[test]
    fn hide_last_divider_sets_visibility() {
        let divider = DividerBuilder::new().hide_last_divider().build().unwrap();
        assert_eq!(divider.visibility_at(3, 1), Visibility::All);
        assert_eq!(divider.visibility_at(3, 2), Visibility::ItemsOnly);
    }
}
