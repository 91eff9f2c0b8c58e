//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for shared vectors, callbacks, subscription maps.

pub mod aliases;

pub use aliases::*;
