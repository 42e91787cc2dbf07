use crate::chip::Chip;
use crate::ids::{GameweekId, PlayerId};
use crate::squad::Squad;
use crate::transfer::Transfer;
use serde::{Deserialize, Serialize};

/// The single outbound value a workflow run produces. Emitted once per
/// gameweek cycle; never mutated afterwards, only ever superseded by the
/// next cycle's `Decision`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Decision {
    pub gameweek: GameweekId,
    pub draft_squad: Squad,
    pub captain_id: PlayerId,
    pub vice_id: PlayerId,
    pub transfers: Vec<Transfer>,
    pub chip_used: Option<Chip>,
    pub expected_total_points: f64,
    pub rationale_tokens: Vec<String>,
}
