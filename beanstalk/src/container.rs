use alloc::{sync::Arc, vec::Vec};
use core::{any::type_name, fmt};
use parking_lot::Mutex;
use tracing::{debug, error, info_span};

use crate::{
    any::TypeInfo,
    errors::{GetErrorKind, InitErrorKind, ResolveErrorKind},
    registry::TypeRegistry,
    resolver::BeanResolver,
    scan::scan,
    store::BeanStore,
};

/// The public entry point: scan, wire, then serve lookups.
///
/// All state lives in the returned value; cloning shares the same beans.
/// Construction is eager — after [`Container::initialize`] returns, every
/// discovered component exists and is wired, and the container is a read-only
/// lookup surface.
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

struct ContainerInner {
    registry: TypeRegistry,
    beans: Mutex<BeanStore>,
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("components", &self.inner.registry.len())
            .field("beans", &self.inner.beans.lock().len())
            .finish()
    }
}

impl Container {
    /// Scans `namespace`, registers every discovered component and resolves
    /// the whole graph.
    ///
    /// A namespace with no components yields an empty, usable container.
    ///
    /// # Errors
    /// - Returns [`InitErrorKind::Scan`] if the namespace cannot be traversed
    /// - Returns [`InitErrorKind::Resolve`] if any component cannot be
    ///   constructed; no partially wired container is returned
    pub fn initialize(namespace: &str) -> Result<Self, InitErrorKind> {
        let span = info_span!("initialize", namespace);
        let _guard = span.enter();

        let descriptors = scan(namespace)?;
        let registry = TypeRegistry::with_descriptors(descriptors);
        debug!(components = registry.len(), "Registry populated");

        let mut store = BeanStore::new();
        BeanResolver::new(&registry, &mut store).resolve_all()?;
        debug!(beans = store.len(), "Eager resolution finished");

        Ok(Self {
            inner: Arc::new(ContainerInner {
                registry,
                beans: Mutex::new(store),
            }),
        })
    }

    /// Gets the singleton registered for `Dep`, which may be a concrete
    /// component type or a `dyn Capability` type.
    ///
    /// Repeated calls return the identical instance.
    ///
    /// # Errors
    /// Returns [`GetErrorKind::BeanNotFound`] if `Dep` was never registered;
    /// the container stays usable
    pub fn get<Dep>(&self) -> Result<Arc<Dep>, GetErrorKind>
    where
        Dep: ?Sized + Send + Sync + 'static,
    {
        let span = info_span!("get", dependency = type_name::<Dep>());
        let _guard = span.enter();

        match self.inner.beans.lock().get::<Dep>() {
            Some(bean) => {
                debug!("Found bean");
                Ok(bean)
            }
            None => {
                let err = GetErrorKind::BeanNotFound {
                    type_info: TypeInfo::of::<Dep>(),
                };
                error!("{err}");
                Err(err)
            }
        }
    }

    /// Re-runs eager resolution over the registry.
    ///
    /// Every component is already cached after initialization, so this
    /// constructs nothing and exists for callers that want to assert the
    /// wiring is complete.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind`] under the same conditions as initialization
    pub fn resolve_all(&self) -> Result<(), ResolveErrorKind> {
        let mut beans = self.inner.beans.lock();
        BeanResolver::new(&self.inner.registry, &mut beans).resolve_all()
    }

    /// Lists every cached bean type, concrete and capability alike.
    #[must_use]
    pub fn beans(&self) -> Vec<TypeInfo> {
        self.inner.beans.lock().type_infos()
    }

    /// Whether `type_info` is known to the registry, as a concrete component
    /// or as a declared capability.
    #[must_use]
    pub fn is_registered(&self, type_info: &TypeInfo) -> bool {
        self.inner.registry.contains(type_info)
    }
}
