//! Best-effort labelling of free-text remarks.
//!
//! Remarks come from many unrelated banks, so every rule here is a heuristic.
//! Rules are evaluated in order and the first match wins; the order is part of
//! the contract because one remark routinely matches several rules.

mod channel;
mod counterparty;

pub use channel::classify_channel;
pub use counterparty::extract_counterparty;

use serde::Serialize;

use crate::models::{Channel, TransactionRow, TxnType};

/// How a rule inspects lowercased text.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Pattern {
    /// Substring anywhere.
    Contains(&'static str),
    /// Text starts with the phrase.
    Prefix(&'static str),
    /// Text starts with the phrase and the phrase ends on a word boundary.
    PrefixWord(&'static str),
    /// Whole token, tokens being runs of ASCII alphanumerics.
    Word(&'static str),
}

impl Pattern {
    pub(crate) fn matches(&self, text: &str) -> bool {
        match *self {
            Self::Contains(p) => text.contains(p),
            Self::Prefix(p) => text.starts_with(p),
            Self::PrefixWord(p) => text.strip_prefix(p).is_some_and(|rest| {
                rest.chars().next().map_or(true, |c| !c.is_ascii_alphanumeric())
            }),
            Self::Word(w) => words(text).any(|t| t == w),
        }
    }
}

pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
}

pub(crate) struct Rule<K: 'static> {
    pub(crate) kind: K,
    pub(crate) patterns: &'static [Pattern],
}

pub(crate) fn first_match<K: Copy>(rules: &[Rule<K>], text: &str) -> Option<K> {
    rules
        .iter()
        .find(|r| r.patterns.iter().any(|p| p.matches(text)))
        .map(|r| r.kind)
}

const TYPE_RULES: &[Rule<TxnType>] = &[
    Rule {
        kind: TxnType::Levy,
        patterns: &[Pattern::Contains("levy"), Pattern::Word("emtl")],
    },
    Rule {
        kind: TxnType::Pos,
        patterns: &[
            Pattern::PrefixWord("pos"),
            Pattern::Contains("pos purchase"),
            Pattern::Contains("pos transaction"),
            Pattern::Contains("card payment"),
            Pattern::Contains("card purchase"),
        ],
    },
    Rule {
        kind: TxnType::Airtime,
        patterns: &[Pattern::Contains("airtime")],
    },
    Rule {
        kind: TxnType::Data,
        patterns: &[Pattern::Contains("mobile data"), Pattern::Word("data")],
    },
    Rule {
        kind: TxnType::TransferIn,
        patterns: &[
            Pattern::Contains("transfer from"),
            Pattern::Contains("received from"),
        ],
    },
    Rule {
        kind: TxnType::TransferOut,
        patterns: &[Pattern::Prefix("transfer to"), Pattern::Prefix("send to")],
    },
];

/// Classify a transaction by its remarks. Falls back to `TxnType::Other`.
pub fn classify_type(remarks: &str) -> TxnType {
    let text = remarks.trim().to_lowercase();
    first_match(TYPE_RULES, &text).unwrap_or(TxnType::Other)
}

/// Everything the classifiers can say about one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub txn_type: TxnType,
    pub channel: Channel,
    pub counterparty: Option<String>,
}

pub fn classify_row(row: &TransactionRow) -> Classification {
    Classification {
        txn_type: classify_type(&row.remarks),
        channel: classify_channel(&row.reference, &row.remarks),
        counterparty: extract_counterparty(&row.remarks),
    }
}
