use alloc::sync::Arc;

use crate::{any::TypeInfo, component::Dependency, errors::ResolveErrorKind, resolver::BeanResolver};

/// How a constructor parameter obtains its value during graph resolution.
pub trait DependencyResolver: Sized {
    /// # Errors
    /// Returns [`ResolveErrorKind`] if the parameter cannot be satisfied
    fn resolve(resolver: &mut BeanResolver<'_>) -> Result<Self, ResolveErrorKind>;

    #[must_use]
    fn dependency() -> Dependency;
}

/// Marks a constructor parameter for auto-injection.
///
/// `Dep` may be a concrete component type or a `dyn Capability` type; either
/// way the shared singleton is handed over.
pub struct Inject<Dep: ?Sized>(pub Arc<Dep>);

impl<Dep> DependencyResolver for Inject<Dep>
where
    Dep: ?Sized + Send + Sync + 'static,
{
    fn resolve(resolver: &mut BeanResolver<'_>) -> Result<Self, ResolveErrorKind> {
        resolver.resolve_dependency().map(Self)
    }

    fn dependency() -> Dependency {
        Dependency {
            type_info: TypeInfo::of::<Dep>(),
            injected: true,
        }
    }
}

/// An unmarked constructor parameter is never auto-wired: it always resolves
/// to `None`, even when a matching type is registered.
impl<Dep> DependencyResolver for Option<Dep>
where
    Dep: 'static,
{
    fn resolve(_resolver: &mut BeanResolver<'_>) -> Result<Self, ResolveErrorKind> {
        Ok(None)
    }

    fn dependency() -> Dependency {
        Dependency {
            type_info: TypeInfo::of::<Dep>(),
            injected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{sync::Arc, vec::Vec};

    use super::{DependencyResolver, Inject};
    use crate::{
        any::TypeInfo,
        component::ComponentDescriptor,
        registry::TypeRegistry,
        resolver::BeanResolver,
        store::BeanStore,
    };

    struct Marker;

    #[test]
    fn test_dependency_metadata() {
        assert!(<Inject<Marker> as DependencyResolver>::dependency().injected);
        assert!(!<Option<Marker> as DependencyResolver>::dependency().injected);
        assert_eq!(
            <Option<Marker> as DependencyResolver>::dependency().type_info,
            TypeInfo::of::<Marker>()
        );
    }

    #[test]
    fn test_unmarked_parameter_stays_empty() {
        let registry = TypeRegistry::with_descriptors(Vec::from([ComponentDescriptor {
            type_info: TypeInfo::of::<Marker>(),
            capabilities: Vec::new(),
            dependencies: Vec::new(),
            constructor: Some(|resolver| {
                resolver.insert(Arc::new(Marker));
                Ok(())
            }),
        }]));
        let mut store = BeanStore::new();
        let mut resolver = BeanResolver::new(&registry, &mut store);
        resolver.resolve_all().unwrap();

        let unmarked = <Option<Marker> as DependencyResolver>::resolve(&mut resolver).unwrap();
        assert!(unmarked.is_none());

        let marked = <Inject<Marker> as DependencyResolver>::resolve(&mut resolver).unwrap();
        let marked_again = <Inject<Marker> as DependencyResolver>::resolve(&mut resolver).unwrap();
        assert!(Arc::ptr_eq(&marked.0, &marked_again.0));
    }
}
