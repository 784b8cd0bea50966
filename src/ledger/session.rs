//! The session controller: sole owner of the live snapshot.

use super::amount::{parse_amount, AmountError};
use super::statements::FinancialState;
use super::transition::{apply_by_id, ActionKind};

/// What the action selector currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Known(ActionKind),
    /// An id outside the catalogue. Executing it changes nothing.
    Unrecognized(String),
}

impl Selection {
    pub fn id(&self) -> &str {
        match self {
            Selection::Known(kind) => kind.id(),
            Selection::Unrecognized(id) => id,
        }
    }
}

/// Result of an accepted `execute`.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    pub selection: Selection,
    pub amount: f64,
    pub changed: bool,
}

/// Holds the current statements plus the pending action form. Snapshots
/// are replaced wholesale; readers only see them through `snapshot()`.
#[derive(Debug)]
pub struct Session {
    state: FinancialState,
    selection: Option<Selection>,
    amount: String,
}

impl Session {
    pub fn new(opening: FinancialState) -> Self {
        tracing::info!(cash = opening.balance_sheet.assets.cash, "session started");
        Self {
            state: opening,
            selection: None,
            amount: String::new(),
        }
    }

    pub fn snapshot(&self) -> &FinancialState {
        &self.state
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn select_action(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    /// Select by id. The empty string clears the selection.
    pub fn select_action_id(&mut self, id: &str) {
        self.selection = if id.is_empty() {
            None
        } else {
            Some(match id.parse::<ActionKind>() {
                Ok(kind) => Selection::Known(kind),
                Err(_) => Selection::Unrecognized(id.to_string()),
            })
        };
    }

    pub fn amount_text(&self) -> &str {
        &self.amount
    }

    pub fn set_amount(&mut self, raw: &str) {
        self.amount.clear();
        self.amount.push_str(raw);
    }

    pub fn amount(&self) -> Result<f64, AmountError> {
        parse_amount(&self.amount)
    }

    pub fn can_execute(&self) -> bool {
        self.selection.is_some() && self.amount().is_ok()
    }

    /// Apply the pending action. Returns `None` without touching anything
    /// when no action is selected or the amount is not a finite number.
    /// On success the form is cleared.
    pub fn execute(&mut self) -> Option<Executed> {
        let amount = self.amount().ok()?;
        let selection = self.selection.take()?;

        let next = apply_by_id(&self.state, selection.id(), amount);
        let changed = next != self.state;
        self.state = next;
        self.amount.clear();

        if let Selection::Known(kind) = selection {
            tracing::info!(
                action = %kind,
                amount,
                cash = self.state.balance_sheet.assets.cash,
                "action applied"
            );
        } else {
            tracing::debug!(id = selection.id(), "unrecognized action ignored");
        }

        Some(Executed {
            selection,
            amount,
            changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_requires_selection_and_amount() {
        let mut session = Session::new(FinancialState::default());
        assert!(!session.can_execute());
        assert_eq!(session.execute(), None);

        session.set_amount("100");
        assert!(!session.can_execute());
        assert_eq!(session.execute(), None);
        assert_eq!(session.amount_text(), "100");

        session.select_action_id("takeLoan");
        session.set_amount("abc");
        assert!(!session.can_execute());
        assert_eq!(session.execute(), None);
        assert!(session.selection().is_some());
        assert_eq!(*session.snapshot(), FinancialState::default());
    }

    #[test]
    fn test_execute_applies_and_clears_form() {
        let mut session = Session::new(FinancialState::default());
        session.select_action(Some(Selection::Known(ActionKind::SellEquipment)));
        session.set_amount("50000");
        assert!(session.can_execute());

        let done = session.execute().unwrap();
        assert_eq!(done.selection, Selection::Known(ActionKind::SellEquipment));
        assert_eq!(done.amount, 50_000.0);
        assert!(done.changed);
        assert_eq!(session.snapshot().balance_sheet.assets.cash, 1_050_000.0);
        assert_eq!(session.selection(), None);
        assert_eq!(session.amount_text(), "");
    }

    #[test]
    fn test_unrecognized_selection_executes_as_noop() {
        let mut session = Session::new(FinancialState::default());
        session.select_action_id("mergeCompany");
        assert_eq!(
            session.selection(),
            Some(&Selection::Unrecognized("mergeCompany".into()))
        );
        session.set_amount("10");

        let done = session.execute().unwrap();
        assert!(!done.changed);
        assert_eq!(*session.snapshot(), FinancialState::default());
        assert_eq!(session.selection(), None);
        assert_eq!(session.amount_text(), "");
    }

    #[test]
    fn test_empty_id_clears_selection() {
        let mut session = Session::new(FinancialState::default());
        session.select_action_id("payDividend");
        assert!(session.selection().is_some());
        session.select_action_id("");
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_snapshot_held_by_caller_stays_valid() {
        let mut session = Session::new(FinancialState::default());
        let before = *session.snapshot();
        session.select_action_id("makeRevenue");
        session.set_amount("700");
        session.execute();
        assert_eq!(before, FinancialState::default());
        assert_eq!(session.snapshot().income_statement.revenue, 700.0);
    }
}
