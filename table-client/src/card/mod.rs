//! Table card
//!
//! [`TableCard`] is the controller behind one table on the floor view. It
//! holds the table's current status, offers the actions that status allows,
//! and on each action asks the POS API for the new status before committing
//! it locally.
//!
//! Follow-on effects after a committed transition:
//! - Resume Service and Print Bill mark the table's bill finished
//! - Free Table and Print Bill notify the parent list once the table is free
//!
//! Closing the bill runs as a detached task, so a slow bill endpoint never
//! holds up the transition or the parent notification.
//!
//! A rejected or failed update leaves the card untouched and triggers nothing.

mod actions;
mod view;

pub use actions::{TableAction, continue_order_path, render_actions};
pub use view::CardView;

use crate::{ClientResult, PosApi};
use shared::{Table, TableStatus};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Parent notification fired with the table id once the table is free
pub type OnFree = Arc<dyn Fn(i64) + Send + Sync>;

/// Result of [`TableCard::perform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Navigation-only action; the caller should open this path
    Navigate(String),
    /// The server accepted the update and the status was committed
    Committed(TableStatus),
    /// The update failed; nothing changed
    Abandoned,
    /// The action is not offered in the current status
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BillLookup {
    Pending,
    Settled(Option<i64>),
}

/// Status machine and side-effect dispatcher for one table
pub struct TableCard {
    api: Arc<dyn PosApi>,
    table: Table,
    status: watch::Sender<TableStatus>,
    bill: watch::Receiver<BillLookup>,
    bill_close: Option<JoinHandle<()>>,
    on_free: OnFree,
}

impl TableCard {
    /// Mount a card for `table`
    ///
    /// The status is seeded from the table and the bill lookup starts in the
    /// background right away. Must be called from within a Tokio runtime.
    pub fn mount(
        api: Arc<dyn PosApi>,
        table: Table,
        on_free: impl Fn(i64) + Send + Sync + 'static,
    ) -> Self {
        let (status, _) = watch::channel(table.status);
        let (bill_tx, bill) = watch::channel(BillLookup::Pending);

        let lookup_api = api.clone();
        let table_id = table.id;
        tokio::spawn(async move {
            let bill_id = lookup_bill(lookup_api, table_id).await;
            bill_tx.send_replace(BillLookup::Settled(bill_id));
        });

        Self {
            api,
            table,
            status,
            bill,
            bill_close: None,
            on_free: Arc::new(on_free),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Current status
    pub fn status(&self) -> TableStatus {
        *self.status.borrow()
    }

    /// Receive every committed status change
    pub fn subscribe(&self) -> watch::Receiver<TableStatus> {
        self.status.subscribe()
    }

    /// Actions offered in the current status
    pub fn actions(&self) -> &'static [TableAction] {
        render_actions(self.status())
    }

    pub fn render(&self) -> CardView {
        let status = self.status();
        CardView {
            table_id: self.table.id,
            title: format!("Mesa {}", self.table.number_table),
            status,
            actions: render_actions(status),
        }
    }

    /// Bill id as known right now, without waiting for the lookup
    pub fn cached_bill_id(&self) -> Option<i64> {
        match *self.bill.borrow() {
            BillLookup::Settled(id) => id,
            BillLookup::Pending => None,
        }
    }

    pub fn bill_lookup_settled(&self) -> bool {
        matches!(*self.bill.borrow(), BillLookup::Settled(_))
    }

    /// Bill id, waiting for the lookup to settle if it is still running
    pub async fn bill_id(&self) -> Option<i64> {
        settled_bill_id(self.bill.clone()).await
    }

    /// Ask the server for `target` and commit whatever status it accepts
    ///
    /// On error the local status is left as is.
    pub async fn transition(&mut self, target: TableStatus) -> ClientResult<TableStatus> {
        let accepted = self.api.update_table_status(self.table.id, target).await?;
        let previous = self.status.send_replace(accepted);
        tracing::debug!(
            table_id = self.table.id,
            from = %previous,
            requested = %target,
            to = %accepted,
            "Table status committed"
        );
        Ok(accepted)
    }

    /// Handle a button press
    pub async fn perform(&mut self, action: TableAction) -> ActionOutcome {
        if !self.actions().contains(&action) {
            tracing::debug!(
                table_id = self.table.id,
                action = action.name(),
                status = %self.status(),
                "Action not offered in current status"
            );
            return ActionOutcome::Unavailable;
        }

        let Some(target) = action.target_status() else {
            return ActionOutcome::Navigate(continue_order_path(self.table.id));
        };

        let accepted = match self.transition(target).await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::debug!(
                    table_id = self.table.id,
                    action = action.name(),
                    error = %e,
                    "Table status update failed, action abandoned"
                );
                return ActionOutcome::Abandoned;
            }
        };

        if action.closes_bill() {
            self.close_bill();
        }
        if target == TableStatus::Free && accepted == TableStatus::Free {
            (self.on_free)(self.table.id);
        }

        ActionOutcome::Committed(accepted)
    }

    /// Mark the table's bill finished in the background
    ///
    /// Waits for a pending bill lookup first. No-op without a bill. Failures
    /// are logged and otherwise ignored; the table status is never rolled
    /// back. The task outlives the card, so a freed table still gets its bill
    /// closed after the parent drops the card.
    pub fn close_bill(&mut self) {
        let api = self.api.clone();
        let bill = self.bill.clone();
        let table_id = self.table.id;

        self.bill_close = Some(tokio::spawn(async move {
            let Some(bill_id) = settled_bill_id(bill).await else {
                return;
            };

            match api.finish_bill(bill_id).await {
                Ok(_) => tracing::debug!(table_id, bill_id, "Bill finished"),
                Err(e) => tracing::warn!(table_id, bill_id, error = %e, "Failed to finish bill"),
            }
        }));
    }

    /// Wait for the last bill close started by this card, if any
    pub async fn wait_bill_closed(&mut self) {
        if let Some(handle) = self.bill_close.take()
            && let Err(e) = handle.await
        {
            tracing::warn!(table_id = self.table.id, error = %e, "Bill close task failed");
        }
    }
}

impl std::fmt::Debug for TableCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableCard")
            .field("table", &self.table)
            .field("status", &self.status())
            .field("bill_id", &self.cached_bill_id())
            .finish_non_exhaustive()
    }
}

async fn settled_bill_id(mut bill: watch::Receiver<BillLookup>) -> Option<i64> {
    // a dropped sender means the lookup task died
    let settled = bill
        .wait_for(|state| matches!(state, BillLookup::Settled(_)))
        .await
        .ok()
        .map(|state| *state);

    match settled {
        Some(BillLookup::Settled(id)) => id,
        _ => None,
    }
}

async fn lookup_bill(api: Arc<dyn PosApi>, table_id: i64) -> Option<i64> {
    match api.bill_by_table(table_id).await {
        // 0 is never a valid bill id
        Ok(bill_id) => bill_id.filter(|id| *id != 0),
        Err(e) => {
            tracing::info!(table_id, error = %e, "Bill lookup failed");
            None
        }
    }
}
