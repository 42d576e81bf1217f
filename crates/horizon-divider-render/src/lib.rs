//! Pixel geometry and paintable assets for Horizon Divider.
//!
//! This crate provides the types divider geometry is expressed in and the
//! surface trait it is painted through. It performs no rasterization itself.
//!
//! # Drawing Dividers
//!
//! ```
//! use horizon_divider_render::{Color, Drawable, DrawingSurface, Rect, RecordingSurface};
//!
//! let mut surface = RecordingSurface::new();
//! surface.begin_frame();
//! surface.draw(Rect::new(0, 48, 320, 49), &Drawable::solid(Color::LIGHT_GRAY));
//! let stats = surface.end_frame();
//! assert_eq!(stats.draw_calls, 1);
//! ```
//!
//! # Tinting Images
//!
//! Tints are carried alongside the drawable rather than baked into it:
//!
//! ```
//! use horizon_divider_render::{Color, Drawable, ImageAsset};
//!
//! let asset = ImageAsset::filled(8, 2, Color::BLACK)?;
//! let tinted = Drawable::image(asset.clone()).with_tint(Color::RED);
//! assert_eq!(tinted.tint(), Some(Color::RED));
//!
//! // Surfaces that rasterize can ask for recolored pixels.
//! let pixels = asset.tinted(Color::RED);
//! assert_eq!(pixels.get_pixel(0, 0).0, [255, 0, 0, 255]);
//! # Ok::<(), horizon_divider_render::RenderError>(())
//! ```

mod drawable;
mod error;
mod surface;
mod types;

pub use drawable::{Drawable, DrawableSource, ImageAsset};
pub use error::{RenderError, RenderResult};
pub use surface::{DrawCall, DrawingSurface, FrameStats, RecordingSurface};
pub use types::{Color, Rect, Size};

// Re-export the image crate so callers can build assets without a direct dependency.
pub use image;
