//! Bookshelf application library
//!
//! The library catalog: books with inventory counters, duplicate-name
//! protection, and upcoming titles from an external provider.

pub mod modules;

/// Re-export commonly used types
pub use modules::*;
