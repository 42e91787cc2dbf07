use crate::ids::{ClubId, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Position {
    Gk,
    Def,
    Mid,
    Fwd,
}

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::Gk => "GK",
            Position::Def => "DEF",
            Position::Mid => "MID",
            Position::Fwd => "FWD",
        }
    }
}

/// Upstream-reported availability. Authoritative over any classified signal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Doubtful,
    Injured,
    Suspended,
    Unavailable,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IctIndices {
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
    pub ict_index: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Stable across seasons.
    pub code: u64,
    /// May change yearly.
    pub season_id: PlayerId,
    pub display_name: String,
    pub position: Position,
    pub club: ClubId,
    /// Tenths of a currency unit, e.g. 8.5m == 85.
    pub now_cost: i32,
    pub status: AvailabilityStatus,
    pub chance_of_playing_percent: Option<u8>,
    pub form: f64,
    pub points_per_game: f64,
    pub total_points: i32,
    pub minutes: u32,
    pub ict: IctIndices,
    pub expected_goals: f64,
    pub expected_assists: f64,
    pub selected_by_percent: f64,
}

impl Player {
    pub fn price_units(&self) -> f64 {
        self.now_cost as f64 / 10.0
    }
}
