use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangePreset {
    Last30,
    Last60,
    Last90,
    Last180,
    #[default]
    All,
    Custom,
}

impl RangePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Last30 => "last30",
            Self::Last60 => "last60",
            Self::Last90 => "last90",
            Self::Last180 => "last180",
            Self::All => "all",
            Self::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "last30" | "30" | "30d" => Self::Last30,
            "last60" | "60" | "60d" => Self::Last60,
            "last90" | "90" | "90d" => Self::Last90,
            "last180" | "180" | "180d" => Self::Last180,
            "custom" => Self::Custom,
            _ => Self::All,
        }
    }

    pub fn all() -> &'static [RangePreset] {
        &[
            Self::Last30,
            Self::Last60,
            Self::Last90,
            Self::Last180,
            Self::All,
            Self::Custom,
        ]
    }

    /// Trailing span in days for the `lastN` presets.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Last30 => Some(30),
            Self::Last60 => Some(60),
            Self::Last90 => Some(90),
            Self::Last180 => Some(180),
            Self::All | Self::Custom => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    None,
    LargestCredit,
    LargestDebit,
    DateAsc,
    DateDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::LargestCredit => "largestCredit",
            Self::LargestDebit => "largestDebit",
            Self::DateAsc => "dateAsc",
            Self::DateDesc => "dateDesc",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "largestcredit" | "credit" => Self::LargestCredit,
            "largestdebit" | "debit" => Self::LargestDebit,
            "dateasc" | "asc" | "oldest" => Self::DateAsc,
            "datedesc" | "desc" | "newest" => Self::DateDesc,
            _ => Self::None,
        }
    }

    pub fn all() -> &'static [SortKey] {
        &[
            Self::None,
            Self::LargestCredit,
            Self::LargestDebit,
            Self::DateAsc,
            Self::DateDesc,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketMode {
    #[default]
    None,
    Monthly,
    BiMonthly,
    Quarterly,
}

impl BucketMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Monthly => "monthly",
            Self::BiMonthly => "biMonthly",
            Self::Quarterly => "quarterly",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" => Self::Monthly,
            "bimonthly" | "bi-monthly" => Self::BiMonthly,
            "quarterly" | "quarter" => Self::Quarterly,
            _ => Self::None,
        }
    }

    pub fn all() -> &'static [BucketMode] {
        &[Self::None, Self::Monthly, Self::BiMonthly, Self::Quarterly]
    }
}

macro_rules! impl_display_as_str {
    ($($t:ty),*) => {
        $(impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        })*
    };
}

impl_display_as_str!(RangePreset, SortKey, BucketMode);

/// Everything the user can change about the analysed view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisFilters {
    pub range: RangePreset,
    /// Only consulted when `range` is `Custom`.
    pub custom_from: Option<NaiveDate>,
    pub custom_to: Option<NaiveDate>,
    pub search: String,
    pub sort: SortKey,
    pub bucket: BucketMode,
}
