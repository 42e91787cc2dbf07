use crate::ids::GameweekId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gameweek {
    pub id: GameweekId,
    pub number: u8,
    pub deadline: DateTime<Utc>,
    /// Exactly one gameweek has `is_current = true`; refreshed from the
    /// upstream authority only, never inferred from the local clock.
    pub is_current: bool,
    /// At most one gameweek has `is_next = true`.
    pub is_next: bool,
    pub finished: bool,
}

/// First half: GW1..=19. Second half: GW20..=38.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum SeasonHalf {
    First,
    Second,
}

pub const FIRST_HALF_LAST_GW: u8 = 19;

pub fn half_of(gameweek: u8) -> SeasonHalf {
    if gameweek <= FIRST_HALF_LAST_GW {
        SeasonHalf::First
    } else {
        SeasonHalf::Second
    }
}
