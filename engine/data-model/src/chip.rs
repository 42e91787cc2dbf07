use crate::gameweek::SeasonHalf;
use crate::ids::GameweekId;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Chip {
    Wildcard,
    BenchBoost,
    TripleCaptain,
    FreeHit,
}

impl Chip {
    pub const ALL: [Chip; 4] =
        [Chip::Wildcard, Chip::BenchBoost, Chip::TripleCaptain, Chip::FreeHit];
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChipUsage {
    pub chip: Chip,
    pub gameweek: GameweekId,
    pub half: SeasonHalf,
}
