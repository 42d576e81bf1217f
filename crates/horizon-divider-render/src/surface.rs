//! Drawing surface abstraction.
//!
//! This module defines the [`DrawingSurface`] trait through which divider
//! geometry leaves the engine. Implementations own rasterization: a GPU
//! renderer, a software canvas, or the [`RecordingSurface`] used by hosts
//! that batch their own draw lists.

use crate::drawable::Drawable;
use crate::types::Rect;

/// Statistics from a paint pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of draw calls submitted.
    pub draw_calls: u32,
    /// Number of draw calls that painted an image.
    pub image_draws: u32,
}

/// The 2D drawing interface dividers paint through.
///
/// # Frame Lifecycle
///
/// ```ignore
/// surface.begin_frame();
/// surface.draw(Rect::new(0, 40, 320, 41), &drawable);
/// let stats = surface.end_frame();
/// ```
pub trait DrawingSurface {
    /// Paint `drawable` stretched over `bounds`.
    fn draw(&mut self, bounds: Rect, drawable: &Drawable);

    /// Begin a new frame. The default implementation does nothing.
    fn begin_frame(&mut self) {}

    /// End the current frame and return statistics about it.
    fn end_frame(&mut self) -> FrameStats {
        FrameStats::default()
    }
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Where the drawable was painted.
    pub bounds: Rect,
    /// What was painted, tint included.
    pub drawable: Drawable,
}

/// A surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    stats: FrameStats,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls recorded since the last [`clear`](Self::clear).
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Bounds of every recorded draw call, in order.
    pub fn bounds(&self) -> Vec<Rect> {
        self.calls.iter().map(|call| call.bounds).collect()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.stats = FrameStats::default();
    }

    /// Take the recorded calls, leaving the surface empty.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        self.stats = FrameStats::default();
        std::mem::take(&mut self.calls)
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw(&mut self, bounds: Rect, drawable: &Drawable) {
        self.stats.draw_calls += 1;
        if drawable.is_image() {
            self.stats.image_draws += 1;
        }
        self.calls.push(DrawCall {
            bounds,
            drawable: drawable.clone(),
        });
    }

    fn begin_frame(&mut self) {
        self.clear();
    }

    fn end_frame(&mut self) -> FrameStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::ImageAsset;
    use crate::types::Color;

    #[test]
    fn records_calls_in_order() {
        let mut surface = RecordingSurface::new();
        surface.begin_frame();
        surface.draw(Rect::new(0, 0, 10, 1), &Drawable::solid(Color::RED));
        surface.draw(Rect::new(0, 5, 10, 6), &Drawable::solid(Color::BLUE));

        assert_eq!(
            surface.bounds(),
            vec![Rect::new(0, 0, 10, 1), Rect::new(0, 5, 10, 6)]
        );
        assert_eq!(surface.calls()[1].drawable.fill_color(), Some(Color::BLUE));
        assert_eq!(
            surface.end_frame(),
            FrameStats {
                draw_calls: 2,
                image_draws: 0
            }
        );
    }

    #[test]
    fn begin_frame_discards_previous_calls() {
        let mut surface = RecordingSurface::new();
        let image = Drawable::image(ImageAsset::filled(1, 1, Color::BLACK).unwrap());
        surface.draw(Rect::new(0, 0, 1, 1), &image);
        assert_eq!(surface.end_frame().image_draws, 1);

        surface.begin_frame();
        assert!(surface.is_empty());
        assert_eq!(surface.end_frame(), FrameStats::default());
    }
}
