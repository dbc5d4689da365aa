use super::{first_match, Pattern, Rule};
use crate::models::Channel;

const CHANNEL_RULES: &[Rule<Channel>] = &[
    Rule {
        kind: Channel::Ussd,
        patterns: &[Pattern::Word("ussd")],
    },
    Rule {
        kind: Channel::Atm,
        patterns: &[Pattern::Word("atm"), Pattern::Contains("cash withdrawal")],
    },
    Rule {
        kind: Channel::Pos,
        patterns: &[Pattern::Word("pos")],
    },
    Rule {
        kind: Channel::Nip,
        patterns: &[
            Pattern::Word("nip"),
            Pattern::Word("nips"),
            Pattern::Word("nibss"),
        ],
    },
    Rule {
        kind: Channel::Mobile,
        patterns: &[
            Pattern::Word("mobile"),
            Pattern::Word("mob"),
            Pattern::Word("app"),
        ],
    },
    Rule {
        kind: Channel::Online,
        patterns: &[
            Pattern::Word("web"),
            Pattern::Word("internet"),
            Pattern::Word("online"),
        ],
    },
    Rule {
        kind: Channel::Branch,
        patterns: &[
            Pattern::Word("cheque"),
            Pattern::Word("chq"),
            Pattern::Word("teller"),
            Pattern::Word("branch"),
            Pattern::Contains("cash deposit"),
        ],
    },
];

/// Guess the channel from the reference and remarks.
///
/// Some extractors fold a bank's "channel" column into the reference, so it
/// is checked alongside the remarks.
pub fn classify_channel(reference: &str, remarks: &str) -> Channel {
    let text = format!("{reference} {remarks}").to_lowercase();
    first_match(CHANNEL_RULES, &text).unwrap_or(Channel::Other)
}
