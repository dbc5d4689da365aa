//! Analysis over extracted bank-statement rows.
//!
//! Rows arrive as loosely formatted strings (see [`TransactionRow`]). The
//! [`parse`] module turns cells into dates and money, [`classify`] labels
//! remarks, and [`analysis::recompute`] builds the filtered, sorted and
//! summarised view a front end renders.

pub mod analysis;
pub mod classify;
pub mod display;
pub mod import;
pub mod models;
pub mod parse;

pub use analysis::recompute;
pub use import::load_rows;
pub use models::{AnalysisFilters, DerivedState, TransactionRow};
