//! Configuration types
//!
//! Fixed gameplay constants and the structures that carry them.

pub mod types;

pub use types::*;
