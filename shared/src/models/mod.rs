//! Data models
//!
//! Shared between the POS API and its clients.
//! All IDs are `i64`.

pub mod bill;
pub mod dining_table;

// Re-exports
pub use bill::*;
pub use dining_table::*;
