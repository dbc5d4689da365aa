/// Which column holds which field, by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub txn_date: Option<usize>,
    pub value_date: Option<usize>,
    pub reference: Option<usize>,
    pub remarks: Option<usize>,
    pub debit: Option<usize>,
    pub credit: Option<usize>,
    /// Single signed amount column, used when there is no debit/credit split.
    pub amount: Option<usize>,
    pub balance: Option<usize>,
    pub check: Option<usize>,
    pub check2: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    TxnDate,
    ValueDate,
    Reference,
    Remarks,
    Debit,
    Credit,
    Amount,
    Balance,
    Check,
    Check2,
}

/// Header spellings seen across bank exports, already lowercased.
/// "date" is deliberately absent: it is resolved by position below.
const ALIASES: &[(Role, &[&str])] = &[
    (
        Role::TxnDate,
        &[
            "txn date",
            "trans date",
            "transaction date",
            "post date",
            "posted date",
            "posting date",
            "trans. date",
            "create date",
            "txn_date",
        ],
    ),
    (
        Role::ValueDate,
        &[
            "val date",
            "value date",
            "effective date",
            "value. date",
            "valuedate",
            "val_date",
        ],
    ),
    (
        Role::Reference,
        &[
            "reference",
            "ref",
            "transaction id",
            "txn id",
            "ref. number",
            "reference number",
            "check no",
            "channel",
        ],
    ),
    (
        Role::Remarks,
        &[
            "remarks",
            "description",
            "narration",
            "comment",
            "transaction details",
            "details",
            "descr",
            "description/payee/memo",
        ],
    ),
    (
        Role::Debit,
        &[
            "debit",
            "withdrawal",
            "dr",
            "withdrawal(dr)",
            "debits",
            "money out",
            "debit (ngn)",
            "debit amount",
            "pay out",
        ],
    ),
    (
        Role::Credit,
        &[
            "credit",
            "deposit",
            "cr",
            "deposit(cr)",
            "credits",
            "money in",
            "credit(₦)",
            "credit (ngn)",
            "credit amount",
            "pay in",
        ],
    ),
    (
        Role::Amount,
        &["amount", "txn amount", "transaction amount"],
    ),
    (
        Role::Balance,
        &[
            "balance",
            "bal",
            "account balance",
            "balance(₦)",
            "balance (ngn)",
        ],
    ),
    (Role::Check, &["check", "check 1"]),
    (Role::Check2, &["check 2", "check2"]),
];

fn normalize_header(h: &str) -> String {
    h.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn role_of(header: &str) -> Option<Role> {
    ALIASES
        .iter()
        .find(|(_, names)| names.contains(&header))
        .map(|&(role, _)| role)
}

/// Map header cells to field positions.
///
/// Returns `None` when the headers name neither a remarks column nor any
/// amount column; such a file is not a statement this crate can read.
pub fn detect_columns(headers: &[String]) -> Option<ColumnMap> {
    let mut map = ColumnMap::default();

    for (i, raw) in headers.iter().enumerate() {
        let h = normalize_header(raw);
        let role = match role_of(&h) {
            Some(role) => role,
            // A bare "date" is the transaction date first, the value date second.
            None if h == "date" && map.txn_date.is_none() => Role::TxnDate,
            None if h == "date" => Role::ValueDate,
            None => {
                tracing::warn!(header = %raw, "ignoring unrecognised column");
                continue;
            }
        };

        let slot = match role {
            Role::TxnDate => &mut map.txn_date,
            Role::ValueDate => &mut map.value_date,
            Role::Reference => &mut map.reference,
            Role::Remarks => &mut map.remarks,
            Role::Debit => &mut map.debit,
            Role::Credit => &mut map.credit,
            Role::Amount => &mut map.amount,
            Role::Balance => &mut map.balance,
            Role::Check => &mut map.check,
            Role::Check2 => &mut map.check2,
        };
        slot.get_or_insert(i);
    }

    let has_money = map.debit.is_some() || map.credit.is_some() || map.amount.is_some();
    if map.remarks.is_none() && !has_money {
        return None;
    }
    Some(map)
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
