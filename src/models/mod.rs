mod filters;
mod kind;
mod row;
mod summary;

pub use filters::{AnalysisFilters, BucketMode, RangePreset, SortKey};
pub use kind::{Channel, TxnType};
pub use row::TransactionRow;
pub use summary::{
    Bucket, CounterpartyTotal, DateWindow, DerivedState, RollingCredit, Totals, TypeSummary,
};
