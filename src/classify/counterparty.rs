use regex::Regex;
use std::sync::OnceLock;

#[allow(clippy::expect_used)]
fn counterparty_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:transfer\s+(?:to|from)|send\s+to|received\s+from)\s*:?\s*([^\-|\r\n]+)")
            .expect("counterparty regex")
    })
}

/// Name following "transfer to/from", "send to" or "received from", cut at
/// the first hyphen, pipe or line break.
pub fn extract_counterparty(remarks: &str) -> Option<String> {
    let caps = counterparty_re().captures(remarks)?;
    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
