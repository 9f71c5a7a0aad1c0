use alloc::{boxed::Box, sync::Arc, vec::Vec};

use crate::any::{self, TypeInfo};

/// The singleton instances, keyed by type identity.
///
/// A concrete component type owns exactly one entry; every capability it
/// declares aliases the same `Arc` under the capability's own identity, so
/// concrete and capability lookups observe one shared instance. Entries live
/// for the lifetime of the container.
pub struct BeanStore {
    map: any::Map,
}

impl Default for BeanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BeanStore {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { map: any::Map::new() }
    }

    /// Records `bean` under the identity of `T`.
    ///
    /// `T` may be a concrete component type or a `dyn Capability` type; the
    /// previous entry, if any, is returned.
    pub fn insert<T>(&mut self, bean: Arc<T>) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.map
            .insert(TypeInfo::of::<T>(), Box::new(bean))
            .and_then(|boxed| boxed.downcast::<Arc<T>>().ok())
            .map(|boxed| *boxed)
    }

    #[must_use]
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.map
            .get(&TypeInfo::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<Arc<T>>())
            .cloned()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, type_info: &TypeInfo) -> bool {
        self.map.contains_key(type_info)
    }

    #[must_use]
    pub fn type_infos(&self) -> Vec<TypeInfo> {
        self.map.keys().copied().collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
