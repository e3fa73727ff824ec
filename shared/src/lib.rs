//! Shared types for the POS table service
//!
//! Wire types used by both the POS API and its clients: the response
//! envelope and the table/bill models.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Bill, Table, TableStatus, UpdateTableStatus};
pub use response::{ApiResponse, Rejection};
