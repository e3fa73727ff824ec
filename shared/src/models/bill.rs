//! Bill Model

use serde::{Deserialize, Serialize};

/// Billing record attached to a table's current service cycle (账单)
///
/// Created by the checkout flow. Clients only ever hold the id, looked up by
/// table through `GET /api/bill/{table_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    #[serde(default)]
    pub finished: bool,
}
