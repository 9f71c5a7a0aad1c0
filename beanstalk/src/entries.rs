//! The link-time registration table behind component discovery.
//!
//! Every `#[component]` expansion places one [`ComponentEntry`] in the slice;
//! [`crate::scan`] reads it back filtered by namespace. The table replaces
//! classpath scanning: which entries exist is settled at link time, and the
//! scanner only decides which of them a given namespace can see.

use crate::component::ComponentEntry;

pub use linkme::{self, distributed_slice};

#[distributed_slice]
pub static __COMPONENT_ENTRIES: [ComponentEntry];
