use crate::ids::GameweekId;
use crate::player::Position;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum PriceBracket {
    Budget,
    Mid,
    Premium,
}

impl PriceBracket {
    pub fn of(now_cost: i32) -> Self {
        let units = now_cost as f64 / 10.0;
        if units >= 10.0 {
            PriceBracket::Premium
        } else if units >= 6.0 {
            PriceBracket::Mid
        } else {
            PriceBracket::Budget
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Correction {
    pub additive_correction: f64,
    pub sample_size: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalibrationTable {
    pub valid_from_gameweek: GameweekId,
    pub valid_to_gameweek: GameweekId,
    pub by_position: Vec<(Position, Correction)>,
    pub by_bracket: Vec<(PriceBracket, Correction)>,
}

impl CalibrationTable {
    pub fn position_correction(&self, position: Position) -> Option<Correction> {
        self.by_position.iter().find(|(p, _)| *p == position).map(|(_, c)| *c)
    }

    pub fn bracket_correction(&self, bracket: PriceBracket) -> Option<Correction> {
        self.by_bracket.iter().find(|(b, _)| *b == bracket).map(|(_, c)| *c)
    }
}
