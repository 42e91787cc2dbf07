use crate::availability::availability_multiplier;
use data_model::{
    AdjustedPrediction, AdjustmentFactor, AvailabilityStatus, CalibrationTable, GameweekId,
    IntelligenceSignal, Player, PlayerId, PriceBracket, SignalStatus,
};

pub const CALIBRATION_MIN_SAMPLES_POSITION: u32 = 20;
pub const CALIBRATION_MIN_SAMPLES_BRACKET: u32 = 30;
pub const PREMIUM_PRICE_FLOOR_UNITS: f64 = 12.0;
pub const PREMIUM_FORM_FLOOR: f64 = 5.0;
pub const PREMIUM_FLOOR_FACTOR: f64 = 0.6;

/// Everything one call to [`adjust_prediction`] needs. `signals` must
/// already be filtered to this player's actionable, resolved signals,
/// sorted deterministically (by timestamp then source, upstream of this
/// crate) so the audit trail is reproducible.
pub struct AdjustmentContext<'a> {
    pub player: &'a Player,
    pub raw_expected_points: f64,
    pub signals: &'a [IntelligenceSignal],
    pub calibration: Option<&'a CalibrationTable>,
}

/// Runs the full ordered chain: availability, classified signals,
/// sentiment, calibration, premium floor, non-negativity clamp.
pub fn adjust_prediction(
    ctx: &AdjustmentContext,
    gameweek: GameweekId,
) -> AdjustedPrediction {
    let mut value = ctx.raw_expected_points;
    let mut factors = Vec::new();

    let availability = availability_multiplier(ctx.player.status, ctx.player.chance_of_playing_percent);
    value *= availability;
    factors.push(AdjustmentFactor::multiplicative("upstream_availability", availability));

    let upstream_blocked =
        matches!(ctx.player.status, AvailabilityStatus::Unavailable | AvailabilityStatus::Suspended);

    if !upstream_blocked {
        for signal in ctx.signals {
            let (label, multiplier) = match signal.status {
                SignalStatus::Injured if ctx.player.status != AvailabilityStatus::Injured => {
                    ("classified_injury_contradicts_upstream", 1.0 - 0.30 * signal.confidence)
                }
                SignalStatus::Doubtful => ("classified_doubt", 1.0 - 0.20 * signal.confidence),
                // Suspended contradicted by upstream is explicitly ignored.
                _ => continue,
            };
            value *= multiplier;
            factors.push(AdjustmentFactor::multiplicative(label, multiplier));
        }
    }

    if ctx.player.status == AvailabilityStatus::Available {
        for signal in ctx.signals {
            let (label, multiplier) = match signal.status {
                SignalStatus::Positive => ("sentiment_positive", 1.0 + 0.20 * signal.confidence),
                SignalStatus::Negative => ("sentiment_negative", 1.0 - 0.15 * signal.confidence),
                _ => continue,
            };
            value *= multiplier;
            factors.push(AdjustmentFactor::multiplicative(label, multiplier));
        }
    }

    if let Some(table) = ctx.calibration {
        if let Some(correction) = table.position_correction(ctx.player.position) {
            if correction.sample_size >= CALIBRATION_MIN_SAMPLES_POSITION {
                let delta = -correction.additive_correction;
                value += delta;
                factors.push(AdjustmentFactor::additive("calibration_position_bias", delta));
            }
        }
        let bracket = PriceBracket::of(ctx.player.now_cost);
        if let Some(correction) = table.bracket_correction(bracket) {
            if correction.sample_size >= CALIBRATION_MIN_SAMPLES_BRACKET {
                let delta = -correction.additive_correction;
                value += delta;
                factors.push(AdjustmentFactor::additive("calibration_bracket_bias", delta));
            }
        }
    }

    if ctx.player.price_units() >= PREMIUM_PRICE_FLOOR_UNITS && ctx.player.form >= PREMIUM_FORM_FLOOR {
        let floor = PREMIUM_FLOOR_FACTOR * ctx.player.form;
        if value < floor {
            let delta = floor - value;
            value = floor;
            factors.push(AdjustmentFactor::additive("premium_floor", delta));
        }
    }

    if value < 0.0 {
        let delta = -value;
        value = 0.0;
        factors.push(AdjustmentFactor::additive("non_negativity_clamp", delta));
    }

    AdjustedPrediction {
        player: player_id(ctx.player),
        gameweek,
        raw_expected_points: ctx.raw_expected_points,
        adjusted_expected_points: value,
        factors,
    }
}

fn player_id(player: &Player) -> PlayerId {
    player.season_id
}
