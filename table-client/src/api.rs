//! POS API collaborator
//!
//! The table card talks to the backend only through [`PosApi`], so it can be
//! driven by [`HttpClient`] in production and by in-memory fakes in tests.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::{TableStatus, UpdateTableStatus};

/// Remote operations the table card depends on
#[async_trait]
pub trait PosApi: Send + Sync {
    /// `PUT /api/table/{id}` - request a status change.
    ///
    /// Returns the status the server accepted, which may differ from the
    /// requested one.
    async fn update_table_status(&self, table_id: i64, status: TableStatus)
        -> ClientResult<TableStatus>;

    /// `GET /api/bill/{table_id}` - id of the table's active bill, if any
    async fn bill_by_table(&self, table_id: i64) -> ClientResult<Option<i64>>;

    /// `PUT /api/bill/finished/{bill_id}` - mark a bill finished
    async fn finish_bill(&self, bill_id: i64) -> ClientResult<bool>;
}

#[async_trait]
impl PosApi for HttpClient {
    async fn update_table_status(
        &self,
        table_id: i64,
        status: TableStatus,
    ) -> ClientResult<TableStatus> {
        let accepted: Option<TableStatus> = self
            .put(&format!("api/table/{table_id}"), &UpdateTableStatus { status })
            .await?;
        // 服务端未回传状态时沿用请求的状态
        Ok(accepted.unwrap_or(status))
    }

    async fn bill_by_table(&self, table_id: i64) -> ClientResult<Option<i64>> {
        let bill_id: Option<Option<i64>> = self.get(&format!("api/bill/{table_id}")).await?;
        Ok(bill_id.flatten())
    }

    async fn finish_bill(&self, bill_id: i64) -> ClientResult<bool> {
        let finished: Option<bool> = self
            .put_empty(&format!("api/bill/finished/{bill_id}"))
            .await?;
        Ok(finished.unwrap_or(true))
    }
}
