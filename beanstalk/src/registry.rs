use alloc::{collections::BTreeMap, vec::Vec};
use tracing::debug;

use crate::{any::TypeInfo, component::ComponentDescriptor};

/// Everything the scan discovered, indexed for resolution.
///
/// Populated once from the scan output, read-only afterward. Keys are type
/// identities; the capability map records which concrete type implements each
/// declared capability, with the last registration winning on collisions.
pub struct TypeRegistry {
    components: BTreeMap<TypeInfo, ComponentDescriptor>,
    capabilities: BTreeMap<TypeInfo, TypeInfo>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: BTreeMap::new(),
            capabilities: BTreeMap::new(),
        }
    }

    /// Builds a registry by registering `descriptors` in order.
    #[must_use]
    pub fn with_descriptors(descriptors: Vec<ComponentDescriptor>) -> Self {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor);
        }
        registry
    }

    /// Registers a component and claims every capability it declares.
    ///
    /// A capability already claimed by an earlier registration is overwritten,
    /// never rejected.
    pub fn register(&mut self, descriptor: ComponentDescriptor) {
        for capability in &descriptor.capabilities {
            if let Some(previous) = self.capabilities.insert(capability.type_info, descriptor.type_info) {
                debug!(
                    capability = capability.type_info.name,
                    previous = previous.name,
                    component = descriptor.type_info.name,
                    "Capability implementation overridden"
                );
            }
        }

        debug!(component = descriptor.type_info.name, "Registered component");
        self.components.insert(descriptor.type_info, descriptor);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, type_info: &TypeInfo) -> Option<&ComponentDescriptor> {
        self.components.get(type_info)
    }

    /// Maps a capability to the concrete type that currently implements it.
    #[inline]
    #[must_use]
    pub fn resolve_capability(&self, capability: &TypeInfo) -> Option<TypeInfo> {
        self.capabilities.get(capability).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, type_info: &TypeInfo) -> bool {
        self.components.contains_key(type_info) || self.capabilities.contains_key(type_info)
    }

    pub(crate) fn component_types(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.components.keys().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
