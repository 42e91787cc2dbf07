use crate::ids::{ClubId, FixtureId, GameweekId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub gameweek: GameweekId,
    pub home_club: ClubId,
    pub away_club: ClubId,
    pub kickoff: DateTime<Utc>,
    /// 1 (easiest) .. 5 (hardest), from the home side's perspective.
    pub home_difficulty: u8,
    /// 1 (easiest) .. 5 (hardest), from the away side's perspective.
    pub away_difficulty: u8,
    pub finished: bool,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
}

impl Fixture {
    /// Difficulty and opponent for `club`, if it plays in this fixture.
    pub fn perspective_of(&self, club: ClubId) -> Option<(ClubId, u8, bool)> {
        if club == self.home_club {
            Some((self.away_club, self.home_difficulty, true))
        } else if club == self.away_club {
            Some((self.home_club, self.away_difficulty, false))
        } else {
            None
        }
    }
}
