use crate::ids::{ClubId, GameweekId, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefensiveActions {
    pub tackles: u16,
    pub interceptions: u16,
    pub clearances_blocks_interceptions: u16,
    pub recoveries: u16,
}

impl DefensiveActions {
    pub fn defender_contribution_total(&self) -> u16 {
        self.tackles + self.interceptions + self.clearances_blocks_interceptions
    }

    pub fn midfielder_contribution_total(&self) -> u16 {
        self.defender_contribution_total() + self.recoveries
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerGameweekPerformance {
    pub player: PlayerId,
    pub gameweek: GameweekId,
    pub minutes: u16,
    pub goals: u8,
    pub assists: u8,
    pub clean_sheet: bool,
    pub goals_conceded: u8,
    pub saves: u16,
    pub bonus: u8,
    pub bps: i32,
    pub penalties_saved: u8,
    pub penalties_missed: u8,
    pub yellow_cards: u8,
    pub red_cards: u8,
    pub own_goals: u8,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
    pub expected_goals: f64,
    pub expected_assists: f64,
    pub defensive: DefensiveActions,
    pub actual_points: i32,
    pub opponent: ClubId,
    pub venue: Venue,
}
