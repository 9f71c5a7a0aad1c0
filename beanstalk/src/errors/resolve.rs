use alloc::boxed::Box;
use core::fmt::{self, Display, Formatter};

use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("No implementation registered for `{dependency}` required by `{requested_by}`")]
    DependencyNotFound {
        dependency: TypeInfo,
        requested_by: TypeInfo,
    },
    #[error("Component `{component}` has no usable constructor")]
    NoConstructor { component: TypeInfo },
    #[error("Cyclic dependency detected: {chain}")]
    CyclicDependency { chain: DependencyChain },
    #[error(transparent)]
    Instantiate(#[from] InstantiateErrorKind),
}

/// The in-progress resolution path that closed into a cycle.
///
/// The first and last entries name the same type.
#[derive(Debug)]
pub struct DependencyChain(pub Box<[TypeInfo]>);

impl Display for DependencyChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for type_info in &self.0 {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "`{type_info}`")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
