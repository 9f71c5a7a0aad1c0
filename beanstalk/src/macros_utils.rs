//! Re-exports for `#[component]` expansions. Not public API.

pub mod aliases {
    #![allow(dead_code)]

    #[cfg(feature = "std")]
    mod std {
        extern crate std;

        pub type Vec<T> = std::vec::Vec<T>;
        pub type Box<T> = std::boxed::Box<T>;
        pub use std::sync::Arc;
    }

    mod alloc {
        extern crate alloc;

        pub type Vec<T> = alloc::vec::Vec<T>;
        pub type Box<T> = alloc::boxed::Box<T>;
        pub use alloc::sync::Arc;
    }

    #[cfg(feature = "std")]
    pub use std::{Arc, Box, Vec};

    #[cfg(not(feature = "std"))]
    pub use alloc::{Arc, Box, Vec};
}
