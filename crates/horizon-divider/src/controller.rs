//! Lifecycle glue between a divider and the list it decorates.
//!
//! A host list exposes its decoration registry through [`DecorationHost`].
//! [`DividerController`] owns the host handle while attached and releases it
//! on [`detach`](DividerController::detach):
//!
//! ```
//! use std::sync::Arc;
//! use horizon_divider::parking_lot::Mutex;
//! use horizon_divider::{DecorationHost, DecorationId, Divider, DividerController};
//!
//! #[derive(Default)]
//! struct List {
//!     decorations: Vec<DecorationId>,
//! }
//!
//! impl DecorationHost for List {
//!     fn add_item_decoration(&mut self, id: DecorationId) {
//!         self.decorations.push(id);
//!     }
//!     fn remove_item_decoration(&mut self, id: DecorationId) {
//!         self.decorations.retain(|d| *d != id);
//!     }
//!     fn contains_item_decoration(&self, id: DecorationId) -> bool {
//!         self.decorations.contains(&id)
//!     }
//!     fn invalidate_item_decorations(&mut self) {}
//! }
//!
//! let list = Arc::new(Mutex::new(List::default()));
//! let mut controller = DividerController::new(Divider::builder().build()?);
//! controller.attach(list.clone());
//! controller.attach(list.clone());
//! assert_eq!(list.lock().decorations.len(), 1);
//!
//! controller.detach();
//! assert!(list.lock().decorations.is_empty());
//! # Ok::<(), horizon_divider::ConfigError>(())
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use horizon_divider_render::DrawingSurface;
use parking_lot::Mutex;

use crate::divider::Divider;
use crate::error::Result;
use crate::logging::targets;
use crate::offset::{ItemInsets, OffsetEngine};
use crate::paint::PaintEngine;
use crate::state::{ListState, VisibleChild};

/// Identifies one divider registered with a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecorationId(u64);

impl DecorationId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// The decoration registry of a host list.
pub trait DecorationHost {
    /// Register a decoration. The host measures and paints it from now on.
    fn add_item_decoration(&mut self, id: DecorationId);

    /// Unregister a decoration.
    fn remove_item_decoration(&mut self, id: DecorationId);

    /// Check if a decoration is registered.
    fn contains_item_decoration(&self, id: DecorationId) -> bool;

    /// Schedule a new measurement pass for every decoration.
    fn invalidate_item_decorations(&mut self);
}

impl<H: DecorationHost + ?Sized> DecorationHost for &mut H {
    fn add_item_decoration(&mut self, id: DecorationId) {
        (**self).add_item_decoration(id);
    }

    fn remove_item_decoration(&mut self, id: DecorationId) {
        (**self).remove_item_decoration(id);
    }

    fn contains_item_decoration(&self, id: DecorationId) -> bool {
        (**self).contains_item_decoration(id)
    }

    fn invalidate_item_decorations(&mut self) {
        (**self).invalidate_item_decorations();
    }
}

impl<H: DecorationHost + ?Sized> DecorationHost for Arc<Mutex<H>> {
    fn add_item_decoration(&mut self, id: DecorationId) {
        self.lock().add_item_decoration(id);
    }

    fn remove_item_decoration(&mut self, id: DecorationId) {
        self.lock().remove_item_decoration(id);
    }

    fn contains_item_decoration(&self, id: DecorationId) -> bool {
        self.lock().contains_item_decoration(id)
    }

    fn invalidate_item_decorations(&mut self) {
        self.lock().invalidate_item_decorations();
    }
}

/// A host that registers nothing, for controllers whose passes are driven
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoHost;

impl DecorationHost for NoHost {
    fn add_item_decoration(&mut self, _: DecorationId) {}

    fn remove_item_decoration(&mut self, _: DecorationId) {}

    fn contains_item_decoration(&self, _: DecorationId) -> bool {
        false
    }

    fn invalidate_item_decorations(&mut self) {}
}

/// Attaches a [`Divider`] to a host list and runs its passes.
#[derive(Debug)]
pub struct DividerController<H> {
    id: DecorationId,
    divider: Divider,
    host: Option<H>,
}

impl<H: DecorationHost> DividerController<H> {
    /// Create a detached controller.
    pub fn new(divider: Divider) -> Self {
        Self {
            id: DecorationId::next(),
            divider,
            host: None,
        }
    }

    /// The identifier registered with the host.
    pub fn id(&self) -> DecorationId {
        self.id
    }

    /// The divider being applied.
    pub fn divider(&self) -> &Divider {
        &self.divider
    }

    /// The host handle, while attached.
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Check if the controller holds a host.
    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// Register with `host`.
    ///
    /// A host that already holds this decoration is invalidated instead of
    /// registering it twice. Attaching to a different host first unregisters
    /// from the previous one.
    pub fn attach(&mut self, mut host: H) {
        let registered = host.contains_item_decoration(self.id);
        if let Some(mut previous) = self.host.take() {
            if !registered {
                previous.remove_item_decoration(self.id);
                tracing::debug!(target: targets::CONTROLLER, id = self.id.0, "moved to a new host");
            }
        }
        if registered {
            host.invalidate_item_decorations();
            tracing::debug!(target: targets::CONTROLLER, id = self.id.0, "already attached, invalidating");
        } else {
            host.add_item_decoration(self.id);
            tracing::debug!(target: targets::CONTROLLER, id = self.id.0, "attached");
        }
        self.host = Some(host);
    }

    /// Unregister from the host and hand its handle back.
    ///
    /// Returns `None` if the controller was not attached.
    pub fn detach(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        host.remove_item_decoration(self.id);
        tracing::debug!(target: targets::CONTROLLER, id = self.id.0, "detached");
        Some(host)
    }

    /// Ask the host for a new measurement pass. Returns `false` if detached.
    pub fn invalidate(&mut self) -> bool {
        match self.host.as_mut() {
            Some(host) => {
                host.invalidate_item_decorations();
                true
            }
            None => false,
        }
    }

    /// Swap the divider and invalidate the host so the change is measured.
    pub fn replace_divider(&mut self, divider: Divider) -> Divider {
        let previous = std::mem::replace(&mut self.divider, divider);
        self.invalidate();
        previous
    }

    /// Room to reserve around the item at `position`.
    pub fn measure(&self, position: usize, state: &ListState<'_>) -> ItemInsets {
        OffsetEngine::new(&self.divider).compute_inset(position, state)
    }

    /// Paint the dividers of the visible children.
    pub fn paint(
        &self,
        surface: &mut dyn DrawingSurface,
        state: &ListState<'_>,
        children: &[VisibleChild],
    ) -> Result<()> {
        PaintEngine::new(&self.divider).paint(surface, state, children)
    }
}
