//! Statement snapshot and the fields the UI displays.
//!
//! A `FinancialState` is a plain `Copy` value. Transitions build a new one
//! instead of touching the old, so any snapshot a caller holds stays valid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    pub cash: f64,
    pub equipment: f64,
    pub inventory: f64,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            cash: 1_000_000.0,
            equipment: 500_000.0,
            inventory: 300_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Liabilities {
    pub short_term_debt: f64,
    pub long_term_debt: f64,
}

impl Default for Liabilities {
    fn default() -> Self {
        Self {
            short_term_debt: 200_000.0,
            long_term_debt: 400_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equity {
    pub common_stock: f64,
    pub retained_earnings: f64,
}

impl Default for Equity {
    fn default() -> Self {
        Self {
            common_stock: 1_000_000.0,
            retained_earnings: 200_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheet {
    pub assets: Assets,
    pub liabilities: Liabilities,
    pub equity: Equity,
}

/// `net_income` is meant to track `revenue - expenses`, but nothing keeps
/// them in step; each is moved independently by the transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatement {
    pub revenue: f64,
    pub expenses: f64,
    pub net_income: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlow {
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
}

impl CashFlow {
    /// Net cash flow. Derived on every call, never stored.
    pub fn total(&self) -> f64 {
        self.operating + self.investing + self.financing
    }
}

/// The three linked statements. `Default` is the opening snapshot every
/// session starts from unless the config overrides it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialState {
    pub balance_sheet: BalanceSheet,
    pub income_statement: IncomeStatement,
    pub cash_flow: CashFlow,
}

/// Optional heading plus the rows under it.
pub type Section = (Option<&'static str>, &'static [FieldId]);

const BALANCE_SHEET_SECTIONS: &[Section] = &[
    (
        Some("Assets"),
        &[FieldId::Cash, FieldId::Equipment, FieldId::Inventory],
    ),
    (
        Some("Liabilities"),
        &[FieldId::ShortTermDebt, FieldId::LongTermDebt],
    ),
    (
        Some("Equity"),
        &[FieldId::CommonStock, FieldId::RetainedEarnings],
    ),
];

const INCOME_STATEMENT_SECTIONS: &[Section] = &[(
    None,
    &[FieldId::Revenue, FieldId::Expenses, FieldId::NetIncome],
)];

const CASH_FLOW_SECTIONS: &[Section] = &[(
    None,
    &[
        FieldId::Operating,
        FieldId::Investing,
        FieldId::Financing,
        FieldId::CashFlowTotal,
    ],
)];

/// Which statement card a field is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statement {
    BalanceSheet,
    IncomeStatement,
    CashFlow,
}

impl Statement {
    pub const ALL: [Statement; 3] = [
        Statement::BalanceSheet,
        Statement::IncomeStatement,
        Statement::CashFlow,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Statement::BalanceSheet => "Balance Sheet",
            Statement::IncomeStatement => "Income Statement",
            Statement::CashFlow => "Cash Flow Statement",
        }
    }

    /// Sections in display order. The balance sheet groups its rows under
    /// headings; the other two statements are a single untitled section.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Statement::BalanceSheet => BALANCE_SHEET_SECTIONS,
            Statement::IncomeStatement => INCOME_STATEMENT_SECTIONS,
            Statement::CashFlow => CASH_FLOW_SECTIONS,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> {
        self.sections()
            .iter()
            .flat_map(|(_, fields)| fields.iter().copied())
    }
}

/// A displayed value. Thirteen stored fields plus the derived net cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Cash,
    Equipment,
    Inventory,
    ShortTermDebt,
    LongTermDebt,
    CommonStock,
    RetainedEarnings,
    Revenue,
    Expenses,
    NetIncome,
    Operating,
    Investing,
    Financing,
    CashFlowTotal,
}

impl FieldId {
    pub const ALL: [FieldId; 14] = [
        FieldId::Cash,
        FieldId::Equipment,
        FieldId::Inventory,
        FieldId::ShortTermDebt,
        FieldId::LongTermDebt,
        FieldId::CommonStock,
        FieldId::RetainedEarnings,
        FieldId::Revenue,
        FieldId::Expenses,
        FieldId::NetIncome,
        FieldId::Operating,
        FieldId::Investing,
        FieldId::Financing,
        FieldId::CashFlowTotal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Cash => "Cash",
            FieldId::Equipment => "Equipment",
            FieldId::Inventory => "Inventory",
            FieldId::ShortTermDebt => "Short-term Debt",
            FieldId::LongTermDebt => "Long-term Debt",
            FieldId::CommonStock => "Common Stock",
            FieldId::RetainedEarnings => "Retained Earnings",
            FieldId::Revenue => "Revenue",
            FieldId::Expenses => "Expenses",
            FieldId::NetIncome => "Net Income",
            FieldId::Operating => "Operating",
            FieldId::Investing => "Investing",
            FieldId::Financing => "Financing",
            FieldId::CashFlowTotal => "Net Cash Flow",
        }
    }

    /// Dotted path, stable across versions. Used in log output.
    pub fn path(&self) -> &'static str {
        match self {
            FieldId::Cash => "balanceSheet.assets.cash",
            FieldId::Equipment => "balanceSheet.assets.equipment",
            FieldId::Inventory => "balanceSheet.assets.inventory",
            FieldId::ShortTermDebt => "balanceSheet.liabilities.shortTermDebt",
            FieldId::LongTermDebt => "balanceSheet.liabilities.longTermDebt",
            FieldId::CommonStock => "balanceSheet.equity.commonStock",
            FieldId::RetainedEarnings => "balanceSheet.equity.retainedEarnings",
            FieldId::Revenue => "incomeStatement.revenue",
            FieldId::Expenses => "incomeStatement.expenses",
            FieldId::NetIncome => "incomeStatement.netIncome",
            FieldId::Operating => "cashFlow.operating",
            FieldId::Investing => "cashFlow.investing",
            FieldId::Financing => "cashFlow.financing",
            FieldId::CashFlowTotal => "cashFlow.total",
        }
    }

    pub fn statement(&self) -> Statement {
        match self {
            FieldId::Cash
            | FieldId::Equipment
            | FieldId::Inventory
            | FieldId::ShortTermDebt
            | FieldId::LongTermDebt
            | FieldId::CommonStock
            | FieldId::RetainedEarnings => Statement::BalanceSheet,
            FieldId::Revenue | FieldId::Expenses | FieldId::NetIncome => {
                Statement::IncomeStatement
            }
            FieldId::Operating
            | FieldId::Investing
            | FieldId::Financing
            | FieldId::CashFlowTotal => Statement::CashFlow,
        }
    }

    pub fn read(&self, state: &FinancialState) -> f64 {
        let bs = &state.balance_sheet;
        match self {
            FieldId::Cash => bs.assets.cash,
            FieldId::Equipment => bs.assets.equipment,
            FieldId::Inventory => bs.assets.inventory,
            FieldId::ShortTermDebt => bs.liabilities.short_term_debt,
            FieldId::LongTermDebt => bs.liabilities.long_term_debt,
            FieldId::CommonStock => bs.equity.common_stock,
            FieldId::RetainedEarnings => bs.equity.retained_earnings,
            FieldId::Revenue => state.income_statement.revenue,
            FieldId::Expenses => state.income_statement.expenses,
            FieldId::NetIncome => state.income_statement.net_income,
            FieldId::Operating => state.cash_flow.operating,
            FieldId::Investing => state.cash_flow.investing,
            FieldId::Financing => state.cash_flow.financing,
            FieldId::CashFlowTotal => state.cash_flow.total(),
        }
    }
}
