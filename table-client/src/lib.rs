//! Table Client - backend client and table card for the POS floor view
//!
//! Provides the HTTP client for the POS API and [`TableCard`], the status
//! machine behind a single table's card.

pub mod api;
pub mod card;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;

pub use api::PosApi;
pub use card::{ActionOutcome, CardView, TableAction, TableCard, render_actions};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{ApiResponse, Table, TableStatus};
