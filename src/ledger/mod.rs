//! Financial statements model: the snapshot type, the business actions that
//! transform it, and the session that owns the live copy.

pub mod amount;
pub mod session;
pub mod statements;
pub mod transition;

pub use session::{Selection, Session};
pub use statements::{FieldId, FinancialState, Statement};
pub use transition::ActionKind;
