use data_model::Position;

pub const MIN_SAMPLE_SIZE: u32 = 5;
pub const ADAPTATION_STEP: f64 = 0.25;
pub const THRESHOLD_FLOOR: f64 = 1.0;
pub const THRESHOLD_CEILING: f64 = 4.0;
pub const LOWER_TRIGGER_MEAN_DELTA: f64 = 1.5;
pub const RAISE_TRIGGER_MEAN_DELTA: f64 = -1.0;

pub struct TransferOutcome {
    pub position: Position,
    pub expected_gain: f64,
    pub actual_gain: f64,
}

/// Adapts a position's free-transfer acceptance threshold based on how
/// completed transfers at that position actually performed. Consistently
/// beating expectations lowers the bar for future transfers (down to
/// [`THRESHOLD_FLOOR`]); consistently underperforming raises it (up to
/// [`THRESHOLD_CEILING`]). Below [`MIN_SAMPLE_SIZE`] completed transfers,
/// the threshold is left unchanged.
pub fn adapt_threshold(current_threshold: f64, outcomes: &[TransferOutcome]) -> f64 {
    if outcomes.len() < MIN_SAMPLE_SIZE as usize {
        return current_threshold;
    }

    let mean_delta =
        outcomes.iter().map(|o| o.actual_gain - o.expected_gain).sum::<f64>() / outcomes.len() as f64;

    if mean_delta >= LOWER_TRIGGER_MEAN_DELTA {
        (current_threshold - ADAPTATION_STEP).max(THRESHOLD_FLOOR)
    } else if mean_delta <= RAISE_TRIGGER_MEAN_DELTA {
        (current_threshold + ADAPTATION_STEP).min(THRESHOLD_CEILING)
    } else {
        current_threshold
    }
}
