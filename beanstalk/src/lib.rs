#![no_std]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod component;
pub(crate) mod container;
pub(crate) mod errors;
pub(crate) mod inject;
pub(crate) mod registry;
pub(crate) mod resolver;
pub(crate) mod scan;
pub(crate) mod store;

pub mod entries;
pub mod macros_utils;

pub use any::TypeInfo;
pub use component::{CapabilityBinding, ComponentDescriptor, ComponentEntry, Constructor, Dependency};
pub use container::Container;
pub use errors::{DependencyChain, GetErrorKind, InitErrorKind, InstantiateErrorKind, ResolveErrorKind, ScanErrorKind};
pub use inject::{DependencyResolver, Inject};
pub use registry::TypeRegistry;
pub use resolver::BeanResolver;
pub use scan::scan;
pub use store::BeanStore;

/// Marks an inherent impl block as a managed component.
///
/// The annotated type is registered for discovery by [`scan`] under the module
/// it is declared in. Capabilities are declared with `provides(..)`, the
/// constructor with `#[construct]` on one method of the block:
///
/// ```ignore
/// trait Notifier: Send + Sync {
///     fn send(&self, message: &str);
/// }
///
/// struct EmailNotifier;
///
/// #[component(provides(dyn Notifier))]
/// impl EmailNotifier {
///     #[construct]
///     fn new() -> Result<Self, InstantiateErrorKind> {
///         Ok(Self)
///     }
/// }
/// ```
#[cfg(feature = "macros")]
pub use beanstalk_macros::component;
