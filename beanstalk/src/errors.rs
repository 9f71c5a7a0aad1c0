mod container;
mod resolve;
mod scan;

pub use container::{GetErrorKind, InitErrorKind};
pub use resolve::{DependencyChain, InstantiateErrorKind, ResolveErrorKind};
pub use scan::ScanErrorKind;
