use crate::tokens::{
    contains_any, CRITICAL_SEVERITY_TOKENS, HIGH_SEVERITY_TOKENS, MEDIUM_SEVERITY_TOKENS,
};
use data_model::{RawSignalType, Severity};

/// Token patterns take priority; when none match, falls back to a
/// structural default keyed on the raw signal's type.
pub fn assess_severity(detail_lowercase: &str, raw_type: RawSignalType) -> Severity {
    if contains_any(detail_lowercase, CRITICAL_SEVERITY_TOKENS) {
        return Severity::Critical;
    }
    if contains_any(detail_lowercase, HIGH_SEVERITY_TOKENS) {
        return Severity::High;
    }
    if contains_any(detail_lowercase, MEDIUM_SEVERITY_TOKENS) {
        return Severity::Medium;
    }

    match raw_type {
        RawSignalType::Suspension => Severity::High,
        RawSignalType::Injury => Severity::High,
        RawSignalType::Rotation => Severity::Medium,
        RawSignalType::PressConference | RawSignalType::LineupLeak => Severity::Low,
    }
}
