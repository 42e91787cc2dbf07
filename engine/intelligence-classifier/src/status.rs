use crate::tokens::contains_any;
use data_model::{RawSignalType, SignalStatus};

const POSITIVE_TOKENS: &[&str] =
    &["returns", "available", "starts", "starting", "fit again", "in contention", "back in training"];

const NEGATIVE_TOKENS: &[&str] =
    &["dropped", "benched", "left out", "doubtful", "knock", "withdrawn"];

/// What the signal says about the player's standing. Injury/suspension/
/// rotation signals map directly to a status; press-conference and
/// lineup-leak signals carry no structural status, so their sentiment is
/// read from the detail text (the core has no LLM summariser of its own;
/// see DESIGN.md for this supplement's grounding).
pub fn assess_status(detail_lowercase: &str, raw_type: RawSignalType) -> SignalStatus {
    match raw_type {
        RawSignalType::Injury => SignalStatus::Injured,
        RawSignalType::Suspension => SignalStatus::Suspended,
        RawSignalType::Rotation => SignalStatus::Doubtful,
        RawSignalType::PressConference | RawSignalType::LineupLeak => {
            if contains_any(detail_lowercase, POSITIVE_TOKENS) {
                SignalStatus::Positive
            } else if contains_any(detail_lowercase, NEGATIVE_TOKENS) {
                SignalStatus::Negative
            } else {
                SignalStatus::Neutral
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injury_type_maps_to_injured_status() {
        assert_eq!(assess_status("hamstring tightness", RawSignalType::Injury), SignalStatus::Injured);
    }

    #[test]
    fn press_conference_with_positive_language() {
        assert_eq!(
            assess_status("manager confirms he starts tonight", RawSignalType::PressConference),
            SignalStatus::Positive
        );
    }

    #[test]
    fn lineup_leak_with_no_sentiment_tokens_is_neutral() {
        assert_eq!(assess_status("team news due at 6pm", RawSignalType::LineupLeak), SignalStatus::Neutral);
    }
}
