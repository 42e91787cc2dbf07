use crate::ids::{GameweekId, PlayerId};
use serde::{Deserialize, Serialize};

/// Slot 1..=11 is the starting XI, in no particular formation order.
/// Slot 12..=15 is the bench, in substitution priority order (12 first).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Slot(pub u8);

impl Slot {
    pub fn is_starting(self) -> bool {
        (1..=11).contains(&self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pick {
    pub player: PlayerId,
    pub slot: Slot,
    pub purchase_price: i32,
    pub selling_price: i32,
    pub is_captain: bool,
    pub is_vice: bool,
    /// 1 normally, 2 when captained, 3 under Triple Captain.
    pub multiplier: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Squad {
    pub picks: Vec<Pick>,
}

impl Squad {
    pub fn starting_xi(&self) -> impl Iterator<Item = &Pick> {
        self.picks.iter().filter(|p| p.slot.is_starting())
    }

    pub fn bench(&self) -> impl Iterator<Item = &Pick> {
        self.picks.iter().filter(|p| !p.slot.is_starting())
    }

    pub fn captain(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_captain)
    }

    pub fn vice(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_vice)
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.picks.iter().any(|p| p.player == player)
    }

    pub fn total_cost(&self) -> i32 {
        self.picks.iter().map(|p| p.purchase_price).sum()
    }
}

/// An unconfirmed proposal for `gameweek`, promoted atomically by the
/// Repository once a submitter confirms it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftSquad {
    pub gameweek: GameweekId,
    pub squad: Squad,
}
