use serde::{Deserialize, Serialize};

/// Coarse transaction type inferred from remarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxnType {
    Levy,
    Pos,
    Airtime,
    Data,
    TransferIn,
    TransferOut,
    Other,
}

impl TxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Levy => "LEVY",
            Self::Pos => "POS",
            Self::Airtime => "AIRTIME",
            Self::Data => "DATA",
            Self::TransferIn => "TRANSFER_IN",
            Self::TransferOut => "TRANSFER_OUT",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Banking channel a transaction went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "USSD")]
    Ussd,
    #[serde(rename = "ATM")]
    Atm,
    #[serde(rename = "POS")]
    Pos,
    #[serde(rename = "NIP")]
    Nip,
    Mobile,
    Online,
    Branch,
    Other,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ussd => "USSD",
            Self::Atm => "ATM",
            Self::Pos => "POS",
            Self::Nip => "NIP",
            Self::Mobile => "Mobile",
            Self::Online => "Online",
            Self::Branch => "Branch",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
