use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Anything a statement cell can hold where an amount is expected.
pub trait MoneyInput {
    fn to_money(self) -> Decimal;
}

impl MoneyInput for &str {
    fn to_money(self) -> Decimal {
        parse_money_str(self)
    }
}

impl MoneyInput for &String {
    fn to_money(self) -> Decimal {
        parse_money_str(self)
    }
}

impl MoneyInput for String {
    fn to_money(self) -> Decimal {
        parse_money_str(&self)
    }
}

impl<T: MoneyInput> MoneyInput for Option<T> {
    fn to_money(self) -> Decimal {
        self.map(MoneyInput::to_money).unwrap_or(Decimal::ZERO)
    }
}

impl MoneyInput for f64 {
    fn to_money(self) -> Decimal {
        if !self.is_finite() {
            return Decimal::ZERO;
        }
        Decimal::from_f64(self).unwrap_or(Decimal::ZERO)
    }
}

impl MoneyInput for i64 {
    fn to_money(self) -> Decimal {
        Decimal::from(self)
    }
}

impl MoneyInput for Decimal {
    fn to_money(self) -> Decimal {
        self
    }
}

/// Parse a money value. Never fails: missing or garbled input is zero.
///
/// Currency symbols, codes, thousands separators and whitespace are dropped.
/// Accounting parentheses `(500.00)` read as negative.
pub fn parse_money(value: impl MoneyInput) -> Decimal {
    value.to_money()
}

fn parse_money_str(s: &str) -> Decimal {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let negative_parens = trimmed.starts_with('(') && trimmed.ends_with(')');
    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    let amount = Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO);
    if negative_parens {
        -amount.abs()
    } else {
        amount
    }
}

/// Overflow-safe sum, so aggregation over hostile input stays total.
pub fn sum_money(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
