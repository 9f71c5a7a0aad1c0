use alloc::vec::Vec;

use crate::{any::TypeInfo, errors::ResolveErrorKind, resolver::BeanResolver, store::BeanStore};

/// One constructor parameter, in declaration order.
///
/// `injected` mirrors the parameter marker: `true` for parameters resolved
/// from the container, `false` for placeholder parameters that are never
/// auto-wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub type_info: TypeInfo,
    pub injected: bool,
}

/// Builds a component and records it in the resolver it was handed.
pub type Constructor = fn(&mut BeanResolver<'_>) -> Result<(), ResolveErrorKind>;

/// A capability declared by a component.
///
/// `bind` aliases the already-constructed singleton into the store under the
/// capability type. It is applied by the resolver only when the registry maps
/// the capability to the component that declared it.
pub struct CapabilityBinding {
    pub type_info: TypeInfo,
    pub bind: fn(&mut BeanStore),
}

/// Everything the container knows about a discoverable component type.
///
/// `constructor` is `None` for a component that declared no `#[construct]`
/// method; such a component is still scanned and registered, and fails at
/// resolution with [`ResolveErrorKind::NoConstructor`].
pub struct ComponentDescriptor {
    pub type_info: TypeInfo,
    pub capabilities: Vec<CapabilityBinding>,
    pub dependencies: Vec<Dependency>,
    pub constructor: Option<Constructor>,
}

/// A static registration record, one per `#[component]` type.
///
/// The descriptor is behind a getter because the identity of a type is only
/// computable at runtime; the record itself must be constructible in a
/// `static`.
pub struct ComponentEntry {
    pub module_path: &'static str,
    pub descriptor: fn() -> ComponentDescriptor,
}
