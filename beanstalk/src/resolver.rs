use alloc::{sync::Arc, vec::Vec};
use tracing::{debug, error};

use crate::{
    any::TypeInfo,
    errors::{DependencyChain, ResolveErrorKind},
    registry::TypeRegistry,
    store::BeanStore,
};

/// Turns the registry into live singletons, depth-first.
///
/// The resolver owns the in-progress resolution stack: the top entry is the
/// component whose constructor is currently running, which is what names the
/// requester in a [`ResolveErrorKind::DependencyNotFound`] and what closes a
/// [`ResolveErrorKind::CyclicDependency`] chain.
pub struct BeanResolver<'r> {
    registry: &'r TypeRegistry,
    store: &'r mut BeanStore,
    stack: Vec<TypeInfo>,
}

impl<'r> BeanResolver<'r> {
    #[inline]
    #[must_use]
    pub fn new(registry: &'r TypeRegistry, store: &'r mut BeanStore) -> Self {
        Self {
            registry,
            store,
            stack: Vec::new(),
        }
    }

    /// Resolves every registered component.
    ///
    /// Components already in the store are reused, so running this a second
    /// time constructs nothing.
    ///
    /// # Errors
    /// Returns the first [`ResolveErrorKind`] encountered; the store may hold
    /// the beans constructed before the failure
    pub fn resolve_all(&mut self) -> Result<(), ResolveErrorKind> {
        let components = self.registry.component_types().collect::<Vec<_>>();
        for type_info in components {
            self.resolve_component(type_info)?;
        }
        Ok(())
    }

    /// Resolves one concrete component, constructing its dependency subgraph
    /// as needed.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::DependencyNotFound`] if the type is not registered
    /// - Returns [`ResolveErrorKind::NoConstructor`] if the component declared no constructor
    /// - Returns [`ResolveErrorKind::CyclicDependency`] if the type is already being resolved
    /// - Returns [`ResolveErrorKind::Instantiate`] if the constructor itself fails
    pub fn resolve_component(&mut self, type_info: TypeInfo) -> Result<(), ResolveErrorKind> {
        if self.store.contains(&type_info) {
            debug!(component = type_info.name, "Reusing cached bean");
            return Ok(());
        }

        if let Some(position) = self.stack.iter().position(|entry| *entry == type_info) {
            let mut chain = self.stack[position..].to_vec();
            chain.push(type_info);
            let err = ResolveErrorKind::CyclicDependency {
                chain: DependencyChain(chain.into_boxed_slice()),
            };
            error!("{err}");
            return Err(err);
        }

        let registry = self.registry;
        let Some(descriptor) = registry.get(&type_info) else {
            let err = ResolveErrorKind::DependencyNotFound {
                dependency: type_info,
                requested_by: self.requester(type_info),
            };
            error!("{err}");
            return Err(err);
        };
        let Some(constructor) = descriptor.constructor else {
            let err = ResolveErrorKind::NoConstructor { component: type_info };
            error!("{err}");
            return Err(err);
        };

        debug!(component = type_info.name, "Constructing component");
        self.stack.push(type_info);
        let constructed = constructor(self);
        self.stack.pop();
        constructed?;

        for capability in &descriptor.capabilities {
            if registry.resolve_capability(&capability.type_info) == Some(type_info) {
                (capability.bind)(self.store);
                debug!(
                    capability = capability.type_info.name,
                    component = type_info.name,
                    "Capability aliased"
                );
            }
        }

        Ok(())
    }

    /// Resolves an injected constructor parameter.
    ///
    /// Lookup order: cached bean, then registered concrete type, then
    /// capability mapped to its implementation.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::DependencyNotFound`] naming the missing
    ///   type and the component requesting it if `Dep` is neither cached nor registered
    /// - Propagates construction failures of the dependency subgraph
    pub fn resolve_dependency<Dep>(&mut self) -> Result<Arc<Dep>, ResolveErrorKind>
    where
        Dep: ?Sized + Send + Sync + 'static,
    {
        let type_info = TypeInfo::of::<Dep>();

        if let Some(bean) = self.store.get::<Dep>() {
            debug!(dependency = type_info.name, "Found in cache");
            return Ok(bean);
        }

        if self.registry.get(&type_info).is_some() {
            self.resolve_component(type_info)?;
        } else if let Some(concrete) = self.registry.resolve_capability(&type_info) {
            self.resolve_component(concrete)?;
        } else {
            let err = ResolveErrorKind::DependencyNotFound {
                dependency: type_info,
                requested_by: self.requester(type_info),
            };
            error!("{err}");
            return Err(err);
        }

        self.store.get::<Dep>().ok_or_else(|| {
            let err = ResolveErrorKind::DependencyNotFound {
                dependency: type_info,
                requested_by: self.requester(type_info),
            };
            error!("{err}");
            err
        })
    }

    /// Records a constructed bean under its concrete type.
    pub fn insert<T>(&mut self, bean: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.store.insert(bean);
    }

    fn requester(&self, fallback: TypeInfo) -> TypeInfo {
        self.stack.last().copied().unwrap_or(fallback)
    }
}
