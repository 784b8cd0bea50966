//! Business actions and the pure transition over `FinancialState`.

use super::statements::FinancialState;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed catalogue of actions a user can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    SellEquipment,
    TakeLoan,
    PayDividend,
    BuyInventory,
    MakeRevenue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized action id '{0}'")]
pub struct UnknownAction(pub String);

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::SellEquipment,
        ActionKind::TakeLoan,
        ActionKind::PayDividend,
        ActionKind::BuyInventory,
        ActionKind::MakeRevenue,
    ];

    /// Stable identifier, matched by `from_str`.
    pub fn id(&self) -> &'static str {
        match self {
            ActionKind::SellEquipment => "sellAsset",
            ActionKind::TakeLoan => "takeLoan",
            ActionKind::PayDividend => "payDividend",
            ActionKind::BuyInventory => "buyInventory",
            ActionKind::MakeRevenue => "makeRevenue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::SellEquipment => "Sell Equipment",
            ActionKind::TakeLoan => "Take on Loan",
            ActionKind::PayDividend => "Pay Dividend",
            ActionKind::BuyInventory => "Purchase Inventory",
            ActionKind::MakeRevenue => "Record Revenue (Cash)",
        }
    }
}

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An action together with its amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    pub kind: ActionKind,
    pub amount: f64,
}

impl Transaction {
    pub fn new(kind: ActionKind, amount: f64) -> Self {
        Self { kind, amount }
    }
}

/// Apply a transaction and return the resulting snapshot.
///
/// The amount is applied as given: no clamping and no sign check. The
/// accounting identities are not re-balanced afterwards.
pub fn apply(state: &FinancialState, tx: Transaction) -> FinancialState {
    let mut next = *state;
    let a = tx.amount;
    let assets = &mut next.balance_sheet.assets;
    match tx.kind {
        ActionKind::SellEquipment => {
            assets.cash += a;
            assets.equipment -= a;
            next.cash_flow.investing += a;
        }
        ActionKind::TakeLoan => {
            assets.cash += a;
            next.balance_sheet.liabilities.long_term_debt += a;
            next.cash_flow.financing += a;
        }
        ActionKind::PayDividend => {
            assets.cash -= a;
            next.balance_sheet.equity.retained_earnings -= a;
            next.cash_flow.financing -= a;
        }
        ActionKind::BuyInventory => {
            assets.cash -= a;
            assets.inventory += a;
            next.cash_flow.operating -= a;
        }
        ActionKind::MakeRevenue => {
            assets.cash += a;
            next.balance_sheet.equity.retained_earnings += a;
            next.income_statement.revenue += a;
            next.income_statement.net_income += a;
            next.cash_flow.operating += a;
        }
    }
    next
}

/// Like `apply`, keyed by the action's string id. An id outside the
/// catalogue leaves the state unchanged.
pub fn apply_by_id(state: &FinancialState, id: &str, amount: f64) -> FinancialState {
    match id.parse::<ActionKind>() {
        Ok(kind) => apply(state, Transaction::new(kind, amount)),
        Err(_) => *state,
    }
}
