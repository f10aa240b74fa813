//! Shared lookup table of surfaces.

use crate::surface::Surface;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Handle to a surface held in a [`SurfaceRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Owns surfaces and hands out ids for them.
///
/// Ids are never reused within one registry. Lookups return a shared handle,
/// so a surface stays alive while in use even if it is removed meanwhile.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    next_id: AtomicU64,
    surfaces: RwLock<HashMap<SurfaceId, Arc<Surface>>>,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface, returning its id.
    pub fn insert(&self, surface: Surface) -> SurfaceId {
        self.insert_shared(Arc::new(surface))
    }

    /// Register an already shared surface.
    pub fn insert_shared(&self, surface: Arc<Surface>) -> SurfaceId {
        let id = SurfaceId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.surfaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, surface);
        tracing::trace!(%id, "surface registered");
        id
    }

    #[must_use]
    pub fn get(&self, id: SurfaceId) -> Option<Arc<Surface>> {
        self.surfaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn remove(&self, id: SurfaceId) -> Option<Arc<Surface>> {
        let removed = self
            .surfaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        if removed.is_some() {
            tracing::trace!(%id, "surface removed");
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, id: SurfaceId) -> bool {
        self.surfaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<SurfaceId> {
        let mut ids: Vec<_> = self
            .surfaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }
}
