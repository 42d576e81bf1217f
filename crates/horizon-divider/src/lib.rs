//! Divider geometry for virtualized lists and grids.
//!
//! This crate decorates the items of a list with dividers without touching
//! the item views themselves. It provides:
//!
//! - **Group arithmetic**: which line an item sits on and where inside it
//! - **Measurement**: the insets each item needs to make room for dividers
//! - **Painting**: the rectangles to fill, handed to a [`DrawingSurface`]
//! - **Strategies**: per-line size, margin, tint, visibility and drawable
//!
//! Plain lists, uniform grids (with per-item span sizes) and staggered grids
//! share one code path; a plain list is a grid with one cell per line.
//!
//! # Example
//!
//! ```
//! use horizon_divider::prelude::*;
//!
//! let divider = Divider::builder()
//!     .with_color(Color::GRAY)
//!     .with_size(2)
//!     .build()?;
//!
//! let layout = GridLayout::vertical(2);
//! let state = ListState::new(4, &layout);
//! let controller = DividerController::<NoHost>::new(divider);
//!
//! // Measurement: item 0 starts its line and shares a half divider with item 1.
//! let insets = controller.measure(0, &state);
//! assert_eq!(insets, ItemInsets { before: 0, after: 1, trailing: 2 });
//!
//! // Painting: one trailing line plus the half on the shared edge.
//! let mut surface = RecordingSurface::new();
//! let children = [VisibleChild::new(0, Rect::new(0, 0, 100, 40))];
//! controller.paint(&mut surface, &state, &children)?;
//! assert_eq!(surface.bounds(), vec![Rect::new(0, 40, 100, 42), Rect::new(100, 0, 101, 42)]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod axis;
mod builder;
mod config;
mod controller;
mod divider;
mod error;
mod offset;
mod paint;
mod state;

pub mod group;
pub mod layout;
pub mod logging;
pub mod strategy;

pub use builder::DividerBuilder;
pub use config::DividerDefaults;
pub use controller::{DecorationHost, DecorationId, DividerController, NoHost};
pub use divider::{Divider, DividerKind};
pub use error::{ConfigError, DividerError, Result};
pub use group::{GroupPosition, LinePlacement};
pub use layout::{
    GridLayout, LayoutDirection, LayoutProbe, LinearLayout, Orientation, SpanLayout, StaggeredGridLayout,
};
pub use offset::{EdgeInsets, ItemInsets, OffsetEngine};
pub use paint::{DividerSegment, PaintEngine, SegmentRole};
pub use state::{ListState, VisibleChild};
pub use strategy::Visibility;

pub use horizon_divider_render::{
    Color, DrawCall, Drawable, DrawableSource, DrawingSurface, FrameStats, ImageAsset, RecordingSurface, Rect,
    Size,
};

// Re-export parking_lot so hosts can share handles with the same mutex type.
pub use parking_lot;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::builder::DividerBuilder;
    pub use crate::controller::{DecorationHost, DecorationId, DividerController, NoHost};
    pub use crate::divider::{Divider, DividerKind};
    pub use crate::layout::{
        GridLayout, LayoutDirection, LayoutProbe, LinearLayout, Orientation, StaggeredGridLayout,
    };
    pub use crate::offset::{EdgeInsets, ItemInsets};
    pub use crate::state::{ListState, VisibleChild};
    pub use crate::strategy::{
        DrawableStrategy, MarginStrategy, SizeStrategy, TintStrategy, Visibility, VisibilityStrategy,
    };
    pub use horizon_divider_render::{Color, Drawable, DrawingSurface, ImageAsset, RecordingSurface, Rect};
}
