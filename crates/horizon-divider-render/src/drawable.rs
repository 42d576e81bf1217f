//! Paintable divider assets.
//!
//! A [`Drawable`] is either a solid fill or an image, optionally carrying a
//! tint. Tinting never touches the underlying asset: [`Drawable::with_tint`]
//! returns a new value that shares the same pixels, and surfaces that need
//! recolored pixels ask for them with [`ImageAsset::tinted`].

use std::fmt;
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::types::{Color, Size};

/// An immutable, cheaply clonable image.
#[derive(Clone)]
pub struct ImageAsset {
    pixels: Arc<RgbaImage>,
}

impl ImageAsset {
    /// Wrap already decoded pixels.
    ///
    /// Returns [`RenderError::InvalidDimensions`] for images with no pixels.
    pub fn new(pixels: RgbaImage) -> RenderResult<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: Arc::new(pixels),
        })
    }

    /// Decode an encoded image (PNG, JPEG, ...) from memory.
    pub fn from_encoded(bytes: &[u8]) -> RenderResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        tracing::debug!(
            width = decoded.width(),
            height = decoded.height(),
            "decoded divider image"
        );
        Self::new(decoded.to_rgba8())
    }

    /// Create a single-color image of the given size.
    pub fn filled(width: u32, height: u32, color: Color) -> RenderResult<Self> {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(color.to_rgba8())))
    }

    /// The natural size of the image in pixels.
    pub fn intrinsic_size(&self) -> Size {
        Size::from(self.pixels.dimensions())
    }

    /// Access the raw pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Produce a recolored copy where every pixel takes the tint's color and
    /// keeps its own coverage (source-in compositing).
    pub fn tinted(&self, tint: Color) -> RgbaImage {
        let [r, g, b, a] = tint.to_rgba8();
        let mut out = (*self.pixels).clone();
        for pixel in out.pixels_mut() {
            let coverage = (u16::from(pixel[3]) * u16::from(a) / 255) as u8;
            *pixel = Rgba([r, g, b, coverage]);
        }
        out
    }
}

impl PartialEq for ImageAsset {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.pixels.dimensions();
        f.debug_struct("ImageAsset")
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}

/// What a drawable paints.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableSource {
    /// Solid color fill. Has no intrinsic size.
    Solid(Color),
    /// Image stretched to the divider bounds.
    Image(ImageAsset),
}

/// A visual asset handed to a [`DrawingSurface`](crate::DrawingSurface).
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    source: DrawableSource,
    tint: Option<Color>,
}

impl Drawable {
    /// Create a solid color drawable.
    pub fn solid(color: Color) -> Self {
        Self {
            source: DrawableSource::Solid(color),
            tint: None,
        }
    }

    /// Create an image drawable.
    pub fn image(asset: ImageAsset) -> Self {
        Self {
            source: DrawableSource::Image(asset),
            tint: None,
        }
    }

    /// What this drawable paints.
    pub fn source(&self) -> &DrawableSource {
        &self.source
    }

    /// The tint applied on top of the source, if any.
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// Check if this drawable paints an image.
    pub fn is_image(&self) -> bool {
        matches!(self.source, DrawableSource::Image(_))
    }

    /// Return a tinted copy of this drawable. The source is shared, not
    /// modified.
    pub fn with_tint(&self, tint: Color) -> Self {
        Self {
            source: self.source.clone(),
            tint: Some(tint),
        }
    }

    /// The natural size of the drawable, if it has one.
    ///
    /// Solid fills have no intrinsic size.
    pub fn intrinsic_size(&self) -> Option<Size> {
        match &self.source {
            DrawableSource::Solid(_) => None,
            DrawableSource::Image(asset) => Some(asset.intrinsic_size()),
        }
    }

    /// The color a solid drawable paints once its tint is applied.
    ///
    /// Returns `None` for images.
    pub fn fill_color(&self) -> Option<Color> {
        match (&self.source, self.tint) {
            (DrawableSource::Solid(color), None) => Some(*color),
            (DrawableSource::Solid(color), Some(tint)) => Some(tint.with_alpha(tint.a * color.a)),
            (DrawableSource::Image(_), _) => None,
        }
    }
}

impl From<Color> for Drawable {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

impl From<ImageAsset> for Drawable {
    fn from(asset: ImageAsset) -> Self {
        Self::image(asset)
    }
}
