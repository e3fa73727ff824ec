//! Render model of a table card

use super::actions::TableAction;
use shared::TableStatus;
use std::fmt;

/// What a card shows at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub table_id: i64,
    pub title: String,
    pub status: TableStatus,
    pub actions: &'static [TableAction],
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title, self.status)?;
        for action in self.actions {
            writeln!(f, "  - {action}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::render_actions;

    #[test]
    fn test_display() {
        let view = CardView {
            table_id: 7,
            title: "Mesa 3".to_string(),
            status: TableStatus::Completed,
            actions: render_actions(TableStatus::Completed),
        };
        assert_eq!(
            view.to_string(),
            "Mesa 3 [completed]\n  - Reanudar servicio\n  - Imprimir cuenta\n"
        );
    }
}
