//! Table card actions
//!
//! Which buttons a card offers depends only on the table's status.

use shared::TableStatus;
use std::fmt;
use std::str::FromStr;

/// A button on the table card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableAction {
    /// 释放桌台
    FreeTable,
    /// Go back to the order screen; no status change
    ContinueOrder,
    CompleteService,
    ResumeService,
    /// Close the bill and free the table
    PrintBill,
}

const BUSY_ACTIONS: &[TableAction] = &[TableAction::FreeTable, TableAction::ContinueOrder];
const IN_PROCESS_ACTIONS: &[TableAction] = &[TableAction::CompleteService];
const COMPLETED_ACTIONS: &[TableAction] = &[TableAction::ResumeService, TableAction::PrintBill];

/// Actions offered for a status
///
/// A free table shows the same buttons as a busy one.
pub fn render_actions(status: TableStatus) -> &'static [TableAction] {
    match status {
        TableStatus::Busy | TableStatus::Free => BUSY_ACTIONS,
        TableStatus::InProcess => IN_PROCESS_ACTIONS,
        TableStatus::Completed => COMPLETED_ACTIONS,
    }
}

impl TableAction {
    /// Status requested from the server, `None` for navigation-only actions
    pub fn target_status(&self) -> Option<TableStatus> {
        match self {
            Self::FreeTable | Self::PrintBill => Some(TableStatus::Free),
            Self::ContinueOrder => None,
            Self::CompleteService => Some(TableStatus::Completed),
            Self::ResumeService => Some(TableStatus::InProcess),
        }
    }

    /// Whether a successful transition closes the table's bill
    pub fn closes_bill(&self) -> bool {
        matches!(self, Self::ResumeService | Self::PrintBill)
    }

    /// Button label as shown on the floor
    pub fn label(&self) -> &'static str {
        match self {
            Self::FreeTable => "Liberar mesa",
            Self::ContinueOrder => "Continuar pedido",
            Self::CompleteService => "Terminar servicio",
            Self::ResumeService => "Reanudar servicio",
            Self::PrintBill => "Imprimir cuenta",
        }
    }

    /// Stable identifier, accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::FreeTable => "free_table",
            Self::ContinueOrder => "continue_order",
            Self::CompleteService => "complete_service",
            Self::ResumeService => "resume_service",
            Self::PrintBill => "print_bill",
        }
    }
}

impl fmt::Display for TableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TableAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free_table" => Ok(Self::FreeTable),
            "continue_order" => Ok(Self::ContinueOrder),
            "complete_service" => Ok(Self::CompleteService),
            "resume_service" => Ok(Self::ResumeService),
            "print_bill" => Ok(Self::PrintBill),
            other => Err(format!("unknown table action: {other}")),
        }
    }
}

/// Order screen reached through "Continue Order"
pub fn continue_order_path(table_id: i64) -> String {
    format!("/manage-tables/new/{table_id}")
}
