//! Linked financial statements with change highlighting.
//!
//! [`ledger`] holds the statement snapshot, the business actions that
//! transform it and the session that owns the live copy. [`flash`] turns
//! value changes into short-lived deltas for display. The remaining modules
//! make up the terminal front end.

pub mod app;
pub mod config;
pub mod flash;
pub mod format;
pub mod ledger;
pub mod logging;
pub mod ui;
