//! Token lists driving confidence and severity assignment. Matching is a
//! case-insensitive substring test against the lowercased detail text.

pub const HIGH_CONFIDENCE_TOKENS: &[&str] =
    &["confirmed", "official", "announced", "definitely", "ruled out", "sidelined", "suspended", "banned"];

pub const MEDIUM_CONFIDENCE_TOKENS: &[&str] =
    &["expected", "likely", "probably", "should be", "set to", "looks like"];

pub const LOW_CONFIDENCE_TOKENS: &[&str] =
    &["might", "could", "possibly", "may", "rumor", "speculation", "unconfirmed"];

pub const CRITICAL_SEVERITY_TOKENS: &[&str] =
    &["long-term", "season", "months", "surgery", "acl", "cruciate", "fracture", "broken"];

pub const HIGH_SEVERITY_TOKENS: &[&str] =
    &["weeks", "out for", "major", "serious", "suspended", "banned", "red card"];

pub const MEDIUM_SEVERITY_TOKENS: &[&str] =
    &["doubtful", "fitness test", "assessed", "rotation", "rested", "bench"];

pub fn contains_any(text: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| text.contains(token))
}
