//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Service status of a dining table (桌台状态)
///
/// Wire form is snake_case. Unknown values and `null` decode as
/// [`TableStatus::Busy`], and so does an absent `status` field on [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum TableStatus {
    Free,
    #[default]
    Busy,
    InProcess,
    Completed,
}

impl TableStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Busy => "busy",
            Self::InProcess => "in_process",
            Self::Completed => "completed",
        }
    }

    /// Lenient parse: anything unrecognized falls back to `Busy`
    pub fn parse(value: &str) -> Self {
        match value {
            "free" => Self::Free,
            "busy" => Self::Busy,
            "in_process" => Self::InProcess,
            "completed" => Self::Completed,
            other => {
                tracing::trace!(status = %other, "Unknown table status, treating as busy");
                Self::Busy
            }
        }
    }
}

impl From<String> for TableStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Option<String>> for TableStatus {
    fn from(value: Option<String>) -> Self {
        value.map(|v| Self::parse(&v)).unwrap_or_default()
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: i64,
    /// Number shown to staff ("Mesa 3")
    pub number_table: i32,
    #[serde(default)]
    pub status: TableStatus,
}

impl Table {
    pub fn new(id: i64, number_table: i32, status: TableStatus) -> Self {
        Self {
            id,
            number_table,
            status,
        }
    }
}

/// Update table status payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTableStatus {
    pub status: TableStatus,
}
