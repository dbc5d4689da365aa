//! Total parsers for the loosely formatted cells statements come with.

mod date;
mod money;

pub use date::{month_from_name, normalize_date, parse_date};
pub use money::{parse_money, sum_money, MoneyInput};
