use data_model::{IntelligenceSignal, PlayerId, Position, Severity};

pub const STRONG_HIT_GAIN_THRESHOLD: f64 = 8.0;
pub const MARGINAL_HIT_GAIN_THRESHOLD: f64 = 5.0;
pub const MIN_URGENT_SIGNALS_FOR_WILDCARD: usize = 3;

pub fn free_transfer_threshold(position: Position) -> f64 {
    match position {
        Position::Gk => 2.0,
        Position::Def => 2.0,
        Position::Mid => 2.0,
        Position::Fwd => 2.0,
    }
}

#[derive(Clone, Debug)]
pub struct ProposedTransfer {
    pub player_out: PlayerId,
    pub player_in: PlayerId,
    pub gain_over_horizon: f64,
    pub outgoing_has_high_severity_signal: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TransferDecision {
    TakeFree,
    TakeHit,
    Skip,
}

/// Decides whether a proposed transfer should be made, spending a free
/// transfer if one is available, taking a hit only when the gain clears the
/// strong threshold on its own or the marginal threshold alongside a
/// high-severity signal on the outgoing player.
pub fn evaluate_transfer(
    transfer: &ProposedTransfer,
    position: Position,
    free_transfers_available: bool,
) -> TransferDecision {
    let threshold = free_transfer_threshold(position);

    if free_transfers_available && transfer.gain_over_horizon >= threshold {
        return TransferDecision::TakeFree;
    }

    if transfer.gain_over_horizon >= STRONG_HIT_GAIN_THRESHOLD {
        return TransferDecision::TakeHit;
    }
    if transfer.gain_over_horizon >= MARGINAL_HIT_GAIN_THRESHOLD
        && transfer.outgoing_has_high_severity_signal
    {
        return TransferDecision::TakeHit;
    }

    TransferDecision::Skip
}

/// The wildcard trigger: fires once at least
/// [`MIN_URGENT_SIGNALS_FOR_WILDCARD`] squad members carry a Critical or High
/// severity actionable signal and the chip is still available this half.
pub fn wildcard_should_trigger(
    squad_signals: &[IntelligenceSignal],
    wildcard_available: bool,
) -> bool {
    if !wildcard_available {
        return false;
    }
    let urgent = squad_signals
        .iter()
        .filter(|s| s.actionable && matches!(s.severity, Severity::Critical | Severity::High))
        .count();
    urgent >= MIN_URGENT_SIGNALS_FOR_WILDCARD
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use data_model::{RawSignalType, SignalStatus};

    fn signal(severity: Severity, actionable: bool) -> IntelligenceSignal {
        IntelligenceSignal {
            timestamp: Utc::now(),
            source_id: "test".into(),
            source_reliability: 0.8,
            raw_type: RawSignalType::Injury,
            matched_player: Some(PlayerId(1)),
            match_score: 90.0,
            confidence: 0.8,
            severity,
            status: SignalStatus::Injured,
            actionable,
            detail: String::new(),
        }
    }

    #[test]
    fn strong_gain_takes_hit_without_free_transfer() {
        let transfer = ProposedTransfer {
            player_out: PlayerId(1),
            player_in: PlayerId(2),
            gain_over_horizon: 9.0,
            outgoing_has_high_severity_signal: false,
        };
        assert_eq!(
            evaluate_transfer(&transfer, Position::Mid, false),
            TransferDecision::TakeHit
        );
    }

    #[test]
    fn marginal_gain_needs_high_severity_signal() {
        let transfer = ProposedTransfer {
            player_out: PlayerId(1),
            player_in: PlayerId(2),
            gain_over_horizon: 6.0,
            outgoing_has_high_severity_signal: false,
        };
        assert_eq!(evaluate_transfer(&transfer, Position::Mid, false), TransferDecision::Skip);

        let transfer_with_signal = ProposedTransfer { outgoing_has_high_severity_signal: true, ..transfer };
        assert_eq!(
            evaluate_transfer(&transfer_with_signal, Position::Mid, false),
            TransferDecision::TakeHit
        );
    }

    #[test]
    fn free_transfer_taken_below_hit_thresholds() {
        let transfer = ProposedTransfer {
            player_out: PlayerId(1),
            player_in: PlayerId(2),
            gain_over_horizon: 2.5,
            outgoing_has_high_severity_signal: false,
        };
        assert_eq!(
            evaluate_transfer(&transfer, Position::Mid, true),
            TransferDecision::TakeFree
        );
    }

    #[test]
    fn wildcard_triggers_at_three_urgent_signals() {
        let signals = vec![
            signal(Severity::Critical, true),
            signal(Severity::High, true),
            signal(Severity::High, true),
        ];
        assert!(wildcard_should_trigger(&signals, true));
    }

    #[test]
    fn wildcard_does_not_trigger_when_unavailable() {
        let signals = vec![
            signal(Severity::Critical, true),
            signal(Severity::High, true),
            signal(Severity::High, true),
        ];
        assert!(!wildcard_should_trigger(&signals, false));
    }
}
