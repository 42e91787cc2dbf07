use crate::ids::{GameweekId, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transfer {
    pub gameweek: GameweekId,
    pub player_out: PlayerId,
    pub player_in: PlayerId,
    /// Points penalty attributed to this transfer; 0 unless it exceeded
    /// the free-transfer count and no chip absorbed the cost.
    pub hit_cost: u32,
    pub is_free: bool,
    pub reasoning: TransferReasoning,
    pub predicted_gain: f64,
    /// Backfilled once the gameweek resolves:
    /// points(player_in, gw) - points(player_out, gw).
    pub actual_gain: Option<f64>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum TransferReasoning {
    WeakestLinkUpgrade,
    UrgentInjuryReplacement,
    FixtureSwing,
    WildcardRebuild,
    FreeHitRebuild,
}
